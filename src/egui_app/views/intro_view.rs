use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::colors;

pub fn render(ctx: &egui::Context, state: &mut AppState) {
    state.tick_intro();

    let frame = egui::Frame::default().fill(colors::BG_DEEP);
    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        let rect = ui.max_rect();
        let painter = ui.painter();
        let elapsed = state.intro.elapsed().as_secs_f32();

        for star in state.intro.stars() {
            let center = egui::pos2(
                rect.left() + star.x * rect.width(),
                rect.top() + star.y * rect.height(),
            );
            let color = colors::STAR.gamma_multiply(star.brightness(elapsed));
            painter.circle_filled(center, star.size, color);
        }

        let alpha = state.intro.title_alpha();
        painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Liggs",
            egui::FontId::proportional(48.0),
            colors::TEXT_LIGHT.gamma_multiply(alpha),
        );
    });

    // Keep twinkling until the session check answers
    ctx.request_repaint();
}
