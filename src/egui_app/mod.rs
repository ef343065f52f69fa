//! egui Native Desktop App Module
//!
//! This module provides the native desktop shell using egui/eframe. The
//! workspace controller runs on its own thread with a single-threaded tokio
//! runtime; egui talks to it through a [`WorkspaceHandle`] and reads what to
//! draw from a shared [`ViewModel`].
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs         - LiggsApp (eframe::App) and thread wiring
//! ├── main.rs        - Binary entry point
//! ├── intro.rs       - Starfield intro
//! ├── view_model.rs  - ViewModel and the SharedView renderer
//! ├── state/         - Form inputs and command dispatch
//! ├── theme/         - Colors and frames
//! └── views/         - Intro, credentials, and notes screens
//! ```

use std::sync::{Arc, Mutex};
use std::thread;

use eframe::egui;

use crate::client::HttpNotesApi;
use crate::shared::config::AppConfig;
use crate::shared::error::ClientResult;
use crate::workspace::{KeyChord, Shortcut, Workspace, WorkspaceHandle};

pub mod intro;
pub mod state;
pub mod theme;
pub mod view_model;
pub mod views;

pub use state::AppState;
pub use view_model::{SharedView, ViewModel};

use intro::Intro;

/// Main application state
pub struct LiggsApp {
    state: AppState,
}

impl LiggsApp {
    /// Start the workspace thread and build the app around it
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> ClientResult<Self> {
        theme::styles::apply_global_theme(&cc.egui_ctx);

        let model = Arc::new(Mutex::new(ViewModel::new()));
        let view = SharedView::new(model.clone(), Some(cc.egui_ctx.clone()));
        let api = HttpNotesApi::new(config.clone())?;
        let intro = Intro::new(config.intro_duration);

        let handle = spawn_workspace(api, view, config)?;
        Ok(Self {
            state: AppState::new(handle, model, intro),
        })
    }

    /// Pull recognised shortcuts out of this frame's input so no widget
    /// sees them
    fn take_shortcuts(ctx: &egui::Context) -> Vec<Shortcut> {
        let mut found = Vec::new();
        ctx.input_mut(|input| {
            input.events.retain(|event| {
                let egui::Event::Key { key, pressed, modifiers, .. } = event else {
                    return true;
                };
                let Some(shortcut) = key_char(*key)
                    .map(|c| KeyChord::new(c, modifiers.ctrl, modifiers.mac_cmd))
                    .and_then(Shortcut::from_chord)
                else {
                    return true;
                };
                if *pressed {
                    found.push(shortcut);
                }
                false
            });
        });
        found
    }
}

fn key_char(key: egui::Key) -> Option<char> {
    let mut chars = key.name().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn spawn_workspace(
    api: HttpNotesApi,
    view: SharedView,
    config: AppConfig,
) -> ClientResult<WorkspaceHandle> {
    let (workspace, handle) = Workspace::new(api, view, config);

    thread::Builder::new()
        .name("liggs-workspace".to_string())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime,
                Err(e) => {
                    tracing::error!("failed to start workspace runtime: {}", e);
                    return;
                }
            };
            runtime.block_on(workspace.run());
        })?;

    Ok(handle)
}

impl eframe::App for LiggsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for shortcut in Self::take_shortcuts(ctx) {
            self.state.shortcut(shortcut);
        }

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);
    }
}

impl Drop for LiggsApp {
    fn drop(&mut self) {
        self.state.shutdown();
    }
}
