// src/ui/report.rs
use eframe::egui;

use crate::markdown::{Block, Span};
use crate::report::{Section, SECTIONS};
use crate::state::AppState;
use crate::ui::theme;

const PLACEHOLDER: &str = "No data available for this section";
const BODY_SIZE: f32 = 13.0;

/// Results grid: hidden until a response has populated any section, then
/// seven cards in fixed order, two per row with the final evaluation
/// spanning the full width.
pub fn show_report_view(
    ui: &mut egui::Ui,
    state: &AppState,
    model: &[(Section, Option<Vec<Block>>)],
) {
    if state.reports.is_empty() {
        return;
    }

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("Analysis Report")
                .size(20.0)
                .strong()
                .color(theme::TEXT_PRIMARY),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if let Some(url) = &state.report_url {
                ui.hyperlink_to("📄 View Full Report", url);
            }
        });
    });
    ui.add_space(8.0);

    for (row, pair) in model.chunks(2).enumerate() {
        ui.push_id(row, |ui| {
            if let [left, right] = pair {
                ui.columns(2, |columns| {
                    section_card(&mut columns[0], left);
                    section_card(&mut columns[1], right);
                });
            } else if let [single] = pair {
                section_card(ui, single);
            }
        });
        ui.add_space(10.0);
    }
}

fn section_card(ui: &mut egui::Ui, entry: &(Section, Option<Vec<Block>>)) {
    let (section, tree) = entry;
    let position = SECTIONS.iter().position(|s| s.key == section.key);

    egui::Frame::none()
        .fill(theme::BG_CARD)
        .rounding(egui::Rounding::same(10.0))
        .stroke(egui::Stroke::new(1.0, theme::BORDER_SUBTLE))
        .inner_margin(egui::Margin::same(14.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(section.icon).size(16.0));
                ui.label(
                    egui::RichText::new(section.label)
                        .size(15.0)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(index) = position {
                        ui.label(
                            egui::RichText::new(format!("{}/{}", index + 1, SECTIONS.len()))
                                .size(11.0)
                                .monospace()
                                .color(theme::TEXT_MUTED),
                        );
                    }
                });
            });
            ui.separator();
            ui.add_space(4.0);

            match tree {
                Some(blocks) => render_blocks(ui, blocks),
                None => {
                    ui.add_space(18.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(PLACEHOLDER)
                                .size(12.5)
                                .italics()
                                .color(theme::TEXT_MUTED),
                        );
                    });
                    ui.add_space(18.0);
                }
            }
        });
}

pub fn render_blocks(ui: &mut egui::Ui, blocks: &[Block]) {
    for (index, block) in blocks.iter().enumerate() {
        ui.push_id(index, |ui| render_block(ui, block));
    }
}

fn render_block(ui: &mut egui::Ui, block: &Block) {
    match block {
        Block::Heading { level, content } => {
            let size = match level {
                1 => 17.0,
                2 => 15.5,
                3 => 14.0,
                _ => 13.0,
            };
            ui.add_space(4.0);
            render_spans(ui, content, size, theme::TEXT_PRIMARY);
            if *level == 1 {
                ui.separator();
            }
            ui.add_space(2.0);
        }
        Block::Paragraph(spans) => {
            render_spans(ui, spans, BODY_SIZE, theme::TEXT_SECONDARY);
            ui.add_space(4.0);
        }
        Block::List { ordered, start, items } => {
            for (index, item) in items.iter().enumerate() {
                let marker = if *ordered {
                    format!("{}. ", start + index as u64)
                } else {
                    "•  ".to_string()
                };
                ui.horizontal_top(|ui| {
                    ui.add_space(6.0);
                    ui.label(
                        egui::RichText::new(marker)
                            .size(BODY_SIZE)
                            .color(theme::TEXT_SECONDARY),
                    );
                    ui.vertical(|ui| {
                        ui.push_id(index, |ui| render_blocks(ui, item));
                    });
                });
            }
            ui.add_space(4.0);
        }
        Block::CodeBlock { language: _, code } => {
            egui::Frame::none()
                .fill(theme::BG_ELEVATED)
                .rounding(egui::Rounding::same(6.0))
                .inner_margin(egui::Margin::same(8.0))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(
                        egui::RichText::new(code)
                            .size(12.0)
                            .monospace()
                            .color(theme::TEXT_SECONDARY),
                    );
                });
            ui.add_space(4.0);
        }
        Block::BlockQuote(inner) => {
            egui::Frame::none()
                .fill(theme::BG_ELEVATED)
                .rounding(egui::Rounding::same(4.0))
                .stroke(egui::Stroke::new(1.0, theme::ACCENT.linear_multiply(0.5)))
                .inner_margin(egui::Margin {
                    left: 10.0,
                    right: 8.0,
                    top: 6.0,
                    bottom: 6.0,
                })
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    render_blocks(ui, inner);
                });
            ui.add_space(4.0);
        }
        Block::Table { header, rows } => {
            egui::Grid::new("report_table")
                .striped(true)
                .spacing(egui::vec2(16.0, 6.0))
                .show(ui, |ui| {
                    for cell in header {
                        render_spans(ui, cell, BODY_SIZE, theme::TEXT_PRIMARY);
                    }
                    ui.end_row();
                    for row in rows {
                        for cell in row {
                            render_spans(ui, cell, BODY_SIZE, theme::TEXT_SECONDARY);
                        }
                        ui.end_row();
                    }
                });
            ui.add_space(4.0);
        }
        Block::Rule => {
            ui.separator();
        }
    }
}

fn render_spans(ui: &mut egui::Ui, spans: &[Span], size: f32, color: egui::Color32) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        for span in spans {
            let mut text = egui::RichText::new(&span.text).size(size).color(color);
            if span.strong {
                text = text.strong().color(theme::TEXT_PRIMARY);
            }
            if span.emphasis {
                text = text.italics();
            }
            if span.strikethrough {
                text = text.strikethrough();
            }
            if span.code {
                text = text
                    .monospace()
                    .color(theme::ACCENT_CYAN)
                    .background_color(theme::BG_ELEVATED);
            }
            match &span.link {
                Some(url) => {
                    ui.hyperlink_to(text, url);
                }
                None => {
                    ui.label(text);
                }
            }
        }
    });
}
