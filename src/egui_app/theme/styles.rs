//! Theme Styling Functions
//!
//! Helpers that apply the night-sky palette consistently across views.

use eframe::egui::{self, Color32, CornerRadius, Stroke};
use super::colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::dark();

    // Window styling
    style.visuals.window_fill = colors::EDITOR_BG;
    style.visuals.window_stroke = Stroke::new(1.0, colors::SEPARATOR);

    // Panel styling
    style.visuals.panel_fill = colors::BG_DEEP;
    style.visuals.extreme_bg_color = colors::INPUT_BG;

    // Widget styling
    style.visuals.widgets.inactive.bg_fill = colors::INPUT_BG;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.widgets.hovered.bg_fill = colors::ITEM_HOVER;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    style.visuals.widgets.active.bg_fill = colors::ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::TEXT_LIGHT);

    // Selection color
    style.visuals.selection.bg_fill = colors::ITEM_ACTIVE;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::ACCENT);

    ctx.set_style(style);
}

/// Create a frame style for the sidebar
pub fn sidebar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::SIDEBAR_BG)
        .inner_margin(egui::Margin::same(8))
}

/// Create a frame style for the editor area
pub fn editor_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::EDITOR_BG)
        .inner_margin(egui::Margin::symmetric(24, 16))
}

/// Create a frame style for the top bar
pub fn top_bar_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8))
}

/// Create a frame for directory rows
pub fn note_item_frame(is_active: bool) -> egui::Frame {
    let bg_color = if is_active { colors::ITEM_ACTIVE } else { colors::ITEM_BG };

    egui::Frame::new()
        .fill(bg_color)
        .corner_radius(CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(12, 10))
}

/// Create a frame for the credential card
pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::EDITOR_BG)
        .stroke(Stroke::new(1.0, colors::ACCENT))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(egui::Margin::same(20))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(60),
        })
}
