// src/ui/log.rs
use eframe::egui;

use crate::state::AppState;
use crate::ui::theme;

const IDLE_HINT: &str = "// System ready. Enter a stock symbol and click Analyze to begin...";

/// Live log panel. Follows the tail as new content arrives.
pub fn show_log_view(ui: &mut egui::Ui, state: &AppState) {
    egui::Frame::none()
        .fill(theme::BG_CARD)
        .rounding(egui::Rounding::same(10.0))
        .stroke(egui::Stroke::new(1.0, theme::BORDER_SUBTLE))
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("System Logs")
                        .size(15.0)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new("Real-time")
                            .size(11.0)
                            .monospace()
                            .color(theme::TEXT_MUTED),
                    );
                });
            });
            ui.add_space(6.0);

            egui::Frame::none()
                .fill(egui::Color32::from_rgb(10, 10, 14))
                .rounding(egui::Rounding::same(8.0))
                .inner_margin(egui::Margin::same(10.0))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    egui::ScrollArea::vertical()
                        .id_source("log_scroll")
                        .max_height(160.0)
                        .auto_shrink([false, false])
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            if state.log.is_empty() {
                                ui.label(
                                    egui::RichText::new(IDLE_HINT)
                                        .size(12.5)
                                        .italics()
                                        .color(theme::TEXT_MUTED),
                                );
                            } else {
                                ui.label(
                                    egui::RichText::new(&state.log)
                                        .size(12.5)
                                        .monospace()
                                        .color(theme::TEXT_SECONDARY),
                                );
                            }
                        });
                });
        });
}
