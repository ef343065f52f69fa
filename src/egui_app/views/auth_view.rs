use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::auth::AuthMode;

pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let frame = egui::Frame::default().fill(colors::BG_DEEP);
    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        let available_rect = ui.available_rect_before_wrap();

        ui.vertical_centered(|ui| {
            let top_space = (available_rect.height() - 320.0).max(0.0) / 2.0;
            ui.add_space(top_space);

            ui.label(egui::RichText::new("✦ Liggs").size(32.0).strong().color(colors::TEXT_LIGHT));
            ui.add_space(20.0);

            styles::modal_frame().show(ui, |ui| {
                ui.set_width(320.0);
                render_tabs(ui, state);
                ui.add_space(12.0);

                let error = state.model().auth_error.clone();
                if let Some(error) = error {
                    ui.label(egui::RichText::new(error).color(colors::ERROR));
                    ui.add_space(8.0);
                }

                let mut submitted = render_form(ui, state);

                ui.add_space(16.0);
                let label = match state.auth_mode {
                    AuthMode::Login => "Login",
                    AuthMode::Register => "Register",
                };
                let button = egui::Button::new(egui::RichText::new(label).color(colors::TEXT_LIGHT))
                    .fill(colors::ACCENT)
                    .min_size(egui::vec2(120.0, 32.0));
                submitted |= ui.add(button).clicked();

                if submitted {
                    state.submit_credentials();
                }
            });
        });
    });
}

fn render_tabs(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        if ui
            .selectable_label(state.auth_mode == AuthMode::Login, "Login")
            .clicked()
        {
            state.switch_auth_mode(AuthMode::Login);
        }
        if ui
            .selectable_label(state.auth_mode == AuthMode::Register, "Register")
            .clicked()
        {
            state.switch_auth_mode(AuthMode::Register);
        }
    });
}

/// Returns true when Enter was pressed in either field
fn render_form(ui: &mut egui::Ui, state: &mut AppState) -> bool {
    let inputs = match state.auth_mode {
        AuthMode::Login => &mut state.login,
        AuthMode::Register => &mut state.register,
    };

    ui.colored_label(colors::TEXT_SECONDARY, "Username");
    let username = ui.add(
        egui::TextEdit::singleline(&mut inputs.username)
            .desired_width(f32::INFINITY)
            .text_color(colors::TEXT_LIGHT),
    );
    ui.add_space(8.0);

    ui.colored_label(colors::TEXT_SECONDARY, "Password");
    let password = ui.add(
        egui::TextEdit::singleline(&mut inputs.password)
            .password(true)
            .desired_width(f32::INFINITY)
            .text_color(colors::TEXT_LIGHT),
    );

    let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
    (username.lost_focus() || password.lost_focus()) && enter
}
