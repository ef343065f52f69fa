use std::sync::{Arc, Mutex, MutexGuard};

use crate::egui_app::intro::Intro;
use crate::egui_app::view_model::{lock, ViewModel};
use crate::shared::auth::AuthMode;
use crate::shared::note::NoteId;
use crate::workspace::{Command, Shortcut, WorkspaceHandle};

/// Input buffers for one credential form
#[derive(Debug, Default, Clone)]
pub struct CredentialInputs {
    pub username: String,
    pub password: String,
}

/// Central application state shared across egui views.
///
/// Holds only what the controller does not: form inputs, the search box,
/// and the intro. Everything else is read from the shared [`ViewModel`].
pub struct AppState {
    handle: WorkspaceHandle,
    model: Arc<Mutex<ViewModel>>,
    pub intro: Intro,
    check_sent: bool,
    pub auth_mode: AuthMode,
    pub login: CredentialInputs,
    pub register: CredentialInputs,
    pub search_input: String,
}

impl AppState {
    pub fn new(handle: WorkspaceHandle, model: Arc<Mutex<ViewModel>>, intro: Intro) -> Self {
        Self {
            handle,
            model,
            intro,
            check_sent: false,
            auth_mode: AuthMode::Login,
            login: CredentialInputs::default(),
            register: CredentialInputs::default(),
            search_input: String::new(),
        }
    }

    pub fn model(&self) -> MutexGuard<'_, ViewModel> {
        lock(&self.model)
    }

    fn send(&self, command: Command) {
        if !self.handle.send(command) {
            tracing::warn!("workspace stopped; command dropped");
        }
    }

    /// Run the session check once the intro has played out
    pub fn tick_intro(&mut self) {
        if !self.check_sent && self.intro.is_finished() {
            self.check_sent = true;
            self.send(Command::CheckSession);
        }
    }

    pub fn switch_auth_mode(&mut self, mode: AuthMode) {
        if self.auth_mode != mode {
            self.auth_mode = mode;
            self.send(Command::SwitchAuthForm);
        }
    }

    pub fn submit_credentials(&mut self) {
        let command = match self.auth_mode {
            AuthMode::Login => Command::Login {
                username: self.login.username.clone(),
                password: self.login.password.clone(),
            },
            AuthMode::Register => Command::Register {
                username: self.register.username.clone(),
                password: self.register.password.clone(),
            },
        };
        self.send(command);
    }

    pub fn logout(&mut self) {
        self.search_input.clear();
        self.login.password.clear();
        self.register.password.clear();
        self.send(Command::Logout);
    }

    pub fn search_changed(&self) {
        self.send(Command::Search(self.search_input.clone()));
    }

    pub fn open_note(&self, id: NoteId) {
        self.send(Command::OpenNote(id));
    }

    pub fn new_note(&self) {
        self.send(Command::NewNote);
    }

    /// The edit buffer of note `id` changed in the view model
    pub fn edited(&self, id: NoteId, title: String, content: String) {
        self.send(Command::Edit { id, title, content });
    }

    pub fn save(&self) {
        self.send(Command::Save);
    }

    pub fn delete(&self) {
        self.send(Command::Delete);
    }

    pub fn export(&self) {
        self.send(Command::Export);
    }

    pub fn shortcut(&self, shortcut: Shortcut) {
        self.send(Command::Shortcut(shortcut));
    }

    pub fn shutdown(&self) {
        self.send(Command::Shutdown);
    }
}
