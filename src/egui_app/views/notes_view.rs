use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::note::{NoteId, DEFAULT_TITLE};
use crate::workspace::{Listing, SaveStatus};

/// What the user did this frame, applied once the model lock is released
enum Action {
    Open(NoteId),
    Edited(NoteId, String, String),
    Save,
    Delete,
    Export,
}

pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let mut actions = Vec::new();

    render_notice(ctx, state);

    egui::SidePanel::left("directory_panel")
        .resizable(true)
        .default_width(280.0)
        .frame(styles::sidebar_frame())
        .show(ctx, |ui| render_sidebar(ui, state, &mut actions));

    egui::CentralPanel::default()
        .frame(styles::editor_frame())
        .show(ctx, |ui| render_editor(ui, state, &mut actions));

    render_confirm(ctx, state);

    for action in actions {
        match action {
            Action::Open(id) => state.open_note(id),
            Action::Edited(id, title, content) => state.edited(id, title, content),
            Action::Save => state.save(),
            Action::Delete => state.delete(),
            Action::Export => state.export(),
        }
    }
}

fn render_sidebar(ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<Action>) {
    ui.horizontal(|ui| {
        ui.colored_label(colors::TEXT_SECONDARY, egui::RichText::new("Notes").strong());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("+ New").clicked() {
                state.new_note();
            }
        });
    });
    ui.add_space(8.0);

    let search = ui.add(
        egui::TextEdit::singleline(&mut state.search_input)
            .hint_text("Search notes…")
            .desired_width(f32::INFINITY),
    );
    if search.changed() {
        state.search_changed();
    }
    ui.add_space(8.0);

    let model = state.model();
    egui::ScrollArea::vertical().show(ui, |ui| match &model.listing {
        None => {}
        Some(Listing::Placeholder(text)) => {
            ui.add_space(16.0);
            ui.vertical_centered(|ui| ui.colored_label(colors::TEXT_SECONDARY, *text));
        }
        Some(Listing::Entries(entries)) => {
            for entry in entries {
                let response = styles::note_item_frame(entry.active)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.colored_label(colors::TEXT_LIGHT, egui::RichText::new(&entry.title).strong());
                        if !entry.preview.is_empty() {
                            ui.colored_label(colors::TEXT_SECONDARY, &entry.preview);
                        }
                        ui.colored_label(colors::TEXT_SECONDARY, egui::RichText::new(&entry.updated).small());
                    })
                    .response
                    .interact(egui::Sense::click());
                if response.clicked() {
                    actions.push(Action::Open(entry.id));
                }
                ui.add_space(4.0);
            }
        }
    });
}

fn render_editor(ui: &mut egui::Ui, state: &mut AppState, actions: &mut Vec<Action>) {
    let mut model = state.model();
    let focus_title = std::mem::take(&mut model.focus_title);

    let Some(pane) = model.editor.as_mut() else {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() / 3.0);
            ui.colored_label(colors::TEXT_SECONDARY, egui::RichText::new("Select a note or create a new one").size(18.0));
        });
        return;
    };

    ui.horizontal(|ui| {
        let color = match pane.status {
            SaveStatus::Saved => colors::SUCCESS,
            SaveStatus::Unsaved => colors::WARNING,
        };
        ui.colored_label(color, pane.status.label());
        ui.add_space(12.0);
        ui.colored_label(colors::TEXT_SECONDARY, egui::RichText::new(&pane.meta).small());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Export").clicked() {
                actions.push(Action::Export);
            }
            if ui.button(egui::RichText::new("Delete").color(colors::ERROR)).clicked() {
                actions.push(Action::Delete);
            }
            if ui.button("Save").clicked() {
                actions.push(Action::Save);
            }
        });
    });
    ui.separator();

    let title = ui.add(
        egui::TextEdit::singleline(&mut pane.title)
            .hint_text(DEFAULT_TITLE)
            .font(egui::FontId::proportional(24.0))
            .frame(false)
            .desired_width(f32::INFINITY),
    );
    if focus_title {
        title.request_focus();
    }
    ui.add_space(8.0);

    let content = egui::ScrollArea::vertical()
        .show(ui, |ui| {
            ui.add_sized(
                ui.available_size(),
                egui::TextEdit::multiline(&mut pane.content)
                    .hint_text("Start writing…")
                    .frame(false),
            )
        })
        .inner;

    if title.changed() || content.changed() {
        actions.push(Action::Edited(pane.id, pane.title.clone(), pane.content.clone()));
    }
}

fn render_confirm(ctx: &egui::Context, state: &mut AppState) {
    let mut model = state.model();
    let Some(prompt) = model.confirm.as_ref().map(|c| c.prompt.clone()) else {
        return;
    };

    let mut answer = None;
    egui::Window::new("Confirm")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(styles::modal_frame())
        .show(ctx, |ui| {
            ui.colored_label(colors::TEXT_LIGHT, prompt);
            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button(egui::RichText::new("Delete").color(colors::ERROR)).clicked() {
                    answer = Some(true);
                }
                if ui.button("Cancel").clicked() {
                    answer = Some(false);
                }
            });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        answer = Some(false);
    }
    if let Some(yes) = answer {
        model.answer_confirm(yes);
    }
}

fn render_notice(ctx: &egui::Context, state: &mut AppState) {
    let mut model = state.model();
    let Some(notice) = model.notice.clone() else {
        return;
    };

    egui::TopBottomPanel::bottom("notice_panel")
        .frame(styles::top_bar_frame())
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::TEXT_LIGHT, notice);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✕").clicked() {
                        model.notice = None;
                    }
                });
            });
        });
}
