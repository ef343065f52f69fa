use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::view_model::Screen;

pub mod auth_view;
pub mod intro_view;
pub mod notes_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let username = state.model().username.clone();
    let Some(username) = username else {
        return;
    };

    egui::TopBottomPanel::top("top_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new("✦ Liggs").size(18.0).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Logout").clicked() {
                        state.logout();
                    }
                    ui.add_space(8.0);
                    ui.colored_label(colors::TEXT_SECONDARY, username);
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    let screen = state.model().screen;
    match screen {
        Screen::Intro => intro_view::render(ctx, state),
        Screen::Credentials => auth_view::render(ctx, state),
        Screen::Workspace => notes_view::render(ctx, state),
    }
}
