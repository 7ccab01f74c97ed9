// src/ui/form.rs
use eframe::egui;

use crate::state::form::Period;
use crate::state::AppState;
use crate::ui::theme;

/// Analysis configuration row: symbol, time horizon, optional model, and
/// the Analyze button. Returns true when the user requested a submission;
/// validation happens in the caller, not here.
pub fn show_form_view(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    let mut submit_requested = false;

    egui::Frame::none()
        .fill(theme::BG_CARD)
        .rounding(egui::Rounding::same(10.0))
        .stroke(egui::Stroke::new(1.0, theme::BORDER_SUBTLE))
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.label(
                egui::RichText::new("Analysis Configuration")
                    .size(15.0)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    field_label(ui, "Stock Symbol");
                    let response = ui.add(
                        egui::TextEdit::singleline(&mut state.form.symbol)
                            .desired_width(150.0)
                            .hint_text("AAPL"),
                    );
                    if response.changed() {
                        state.form.normalize_symbol();
                    }
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        submit_requested = true;
                    }
                });

                ui.add_space(8.0);

                ui.vertical(|ui| {
                    field_label(ui, "Time Horizon");
                    egui::ComboBox::from_id_source("period_select")
                        .selected_text(state.form.period.label())
                        .width(120.0)
                        .show_ui(ui, |ui| {
                            for period in Period::ALL {
                                ui.selectable_value(&mut state.form.period, period, period.label());
                            }
                        });
                });

                ui.add_space(8.0);

                ui.vertical(|ui| {
                    field_label(ui, "AI Model");
                    ui.add(
                        egui::TextEdit::singleline(&mut state.form.model)
                            .desired_width(150.0)
                            .hint_text("Default"),
                    );
                });

                ui.add_space(16.0);

                ui.vertical(|ui| {
                    // Blank label keeps the button aligned with the inputs.
                    field_label(ui, "");
                    ui.horizontal(|ui| {
                        let enabled = !state.loading && state.form.can_submit();
                        let text = if state.loading { "Processing" } else { "Analyze" };
                        let button = egui::Button::new(
                            egui::RichText::new(text)
                                .size(14.0)
                                .strong()
                                .color(egui::Color32::WHITE),
                        )
                        .fill(theme::ACCENT)
                        .rounding(egui::Rounding::same(6.0));

                        if ui.add_enabled(enabled, button).clicked() {
                            submit_requested = true;
                        }
                        if state.loading {
                            ui.spinner();
                        }
                    });
                });
            });
        });

    submit_requested
}

fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(12.0)
            .color(theme::TEXT_SECONDARY),
    );
}
