// src/ui/theme.rs
use eframe::egui;

pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(168, 85, 247);
pub const ACCENT_CYAN: egui::Color32 = egui::Color32::from_rgb(34, 211, 238);
pub const POSITIVE: egui::Color32 = egui::Color32::from_rgb(34, 197, 94);
pub const NEGATIVE: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);

pub const BG_DARK: egui::Color32 = egui::Color32::from_rgb(15, 15, 20);
pub const BG_CARD: egui::Color32 = egui::Color32::from_rgb(24, 24, 32);
pub const BG_ELEVATED: egui::Color32 = egui::Color32::from_rgb(32, 32, 44);
pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(226, 232, 240);
pub const TEXT_SECONDARY: egui::Color32 = egui::Color32::from_rgb(148, 163, 184);
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(100, 116, 139);
pub const BORDER_SUBTLE: egui::Color32 = egui::Color32::from_rgb(51, 51, 68);

pub fn apply(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals.dark_mode = true;
    style.visuals.panel_fill = BG_DARK;
    style.visuals.window_fill = BG_CARD;
    style.visuals.faint_bg_color = BG_ELEVATED;
    style.visuals.extreme_bg_color = egui::Color32::from_rgb(10, 10, 14);

    style.visuals.window_rounding = egui::Rounding::same(8.0);
    style.visuals.widgets.noninteractive.rounding = egui::Rounding::same(6.0);
    style.visuals.widgets.inactive.rounding = egui::Rounding::same(6.0);
    style.visuals.widgets.active.rounding = egui::Rounding::same(6.0);
    style.visuals.widgets.hovered.rounding = egui::Rounding::same(6.0);

    style.visuals.widgets.noninteractive.bg_fill = BG_CARD;
    style.visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, TEXT_SECONDARY);
    style.visuals.widgets.inactive.bg_fill = BG_ELEVATED;
    style.visuals.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.hovered.bg_fill = egui::Color32::from_rgb(45, 45, 60);
    style.visuals.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, egui::Color32::WHITE);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = egui::Stroke::new(1.0, egui::Color32::WHITE);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.4);
    style.visuals.selection.stroke = egui::Stroke::new(1.0, ACCENT);
    style.visuals.hyperlink_color = ACCENT_CYAN;

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);

    ctx.set_style(style);
}
