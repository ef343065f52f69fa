//! Workspace controller
//!
//! Owns the session gate, the notes directory, the editor session, and the
//! search debouncer, and drives them from a single event channel.
//!
//! # Ordering
//!
//! UI commands and timer firings arrive as [`WorkspaceEvent`]s on one
//! unbounded channel. [`Workspace::run`] awaits each event's handling to
//! completion before receiving the next, so at most one request is ever in
//! flight and a save always resolves before the request that follows it is
//! sent. Timer events carry a [`Ticket`]; events for cancelled or superseded
//! timers are dropped on arrival.
//!
//! # Example
//!
//! ```rust,no_run
//! use liggs::client::HttpNotesApi;
//! use liggs::shared::AppConfig;
//! use liggs::workspace::{Command, NotesView, Workspace};
//!
//! # async fn example(view: impl NotesView + 'static) -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load()?;
//! let api = HttpNotesApi::new(config.clone())?;
//! let (workspace, handle) = Workspace::new(api, view, config);
//! tokio::spawn(workspace.run());
//! handle.send(Command::CheckSession);
//! # Ok(())
//! # }
//! ```

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::client::NotesApi;
use crate::shared::auth::{AuthMode, Session};
use crate::shared::config::AppConfig;
use crate::shared::note::NoteId;

pub mod debounce;
pub mod directory;
pub mod editor;
pub mod export;
pub mod session_gate;
pub mod shortcuts;
pub mod view;

pub use debounce::{Debouncer, Ticket};
pub use directory::NotesDirectory;
pub use editor::EditorSession;
pub use session_gate::SessionGate;
pub use shortcuts::{KeyChord, Shortcut};
pub use view::{DirectoryEntry, Listing, NotesView, SaveStatus, EMPTY_DIRECTORY_TEXT};

/// Something the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Ask the server whether we are logged in (end of the intro)
    CheckSession,
    Login { username: String, password: String },
    Register { username: String, password: String },
    /// The user switched between the login and register forms
    SwitchAuthForm,
    Logout,
    /// The search box changed
    Search(String),
    OpenNote(NoteId),
    NewNote,
    /// The edit buffer of note `id` changed; carries the whole buffer
    Edit {
        id: NoteId,
        title: String,
        content: String,
    },
    Save,
    Delete,
    Export,
    Shortcut(Shortcut),
    /// Stop the event loop
    Shutdown,
}

/// Everything the event loop reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceEvent {
    Command(Command),
    AutosaveDue(Ticket),
    SearchDue(Ticket, String),
}

/// Cloneable sender half used by UIs
#[derive(Debug, Clone)]
pub struct WorkspaceHandle {
    sender: UnboundedSender<WorkspaceEvent>,
}

impl WorkspaceHandle {
    /// Queue a command. Returns `false` once the workspace has stopped.
    pub fn send(&self, command: Command) -> bool {
        self.sender.send(WorkspaceEvent::Command(command)).is_ok()
    }
}

pub struct Workspace<A, V> {
    api: A,
    view: V,
    config: AppConfig,
    gate: SessionGate,
    directory: NotesDirectory,
    editor: EditorSession,
    search: Debouncer<WorkspaceEvent>,
    events: UnboundedReceiver<WorkspaceEvent>,
}

impl<A, V> Workspace<A, V>
where
    A: NotesApi,
    V: NotesView,
{
    pub fn new(api: A, view: V, config: AppConfig) -> (Self, WorkspaceHandle) {
        let (sender, events) = mpsc::unbounded_channel();
        let editor = EditorSession::new(Debouncer::new(config.autosave_quiet, sender.clone()));
        let search = Debouncer::new(config.search_quiet, sender.clone());

        let workspace = Self {
            api,
            view,
            config,
            gate: SessionGate::new(),
            directory: NotesDirectory::new(),
            editor,
            search,
            events,
        };
        (workspace, WorkspaceHandle { sender })
    }

    /// Process events until [`Command::Shutdown`].
    pub async fn run(mut self) {
        tracing::debug!("workspace event loop started");
        while let Some(event) = self.events.recv().await {
            if event == WorkspaceEvent::Command(Command::Shutdown) {
                break;
            }
            self.handle(event).await;
        }
        tracing::debug!("workspace event loop stopped");
    }

    /// Handle every event already queued, without waiting for more.
    /// Returns how many were handled.
    pub async fn run_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.events.try_recv() {
            self.handle(event).await;
            handled += 1;
        }
        handled
    }

    /// Handle one command immediately.
    pub async fn dispatch(&mut self, command: Command) {
        self.handle(WorkspaceEvent::Command(command)).await;
    }

    pub async fn handle(&mut self, event: WorkspaceEvent) {
        match event {
            WorkspaceEvent::Command(command) => self.handle_command(command).await,
            WorkspaceEvent::AutosaveDue(ticket) => {
                if self.gate.is_authenticated() {
                    self.editor
                        .autosave_due(ticket, &self.api, &mut self.view, &mut self.directory)
                        .await;
                }
            }
            WorkspaceEvent::SearchDue(ticket, query) => {
                if self.search.fire(ticket) && self.gate.is_authenticated() {
                    self.directory
                        .load(&self.api, &mut self.view, Some(&query), self.editor.open_id())
                        .await;
                }
            }
        }
    }

    async fn handle_command(&mut self, command: Command) {
        match command {
            Command::CheckSession => self.check_session().await,
            Command::Login { username, password } => {
                self.authenticate(AuthMode::Login, &username, &password).await
            }
            Command::Register { username, password } => {
                self.authenticate(AuthMode::Register, &username, &password).await
            }
            Command::SwitchAuthForm => self.view.clear_auth_error(),
            Command::Logout => self.logout().await,
            Command::Shutdown => {}
            command if !self.gate.is_authenticated() => {
                tracing::debug!(?command, "ignored while logged out");
            }
            Command::Search(query) => {
                self.search.schedule(|ticket| WorkspaceEvent::SearchDue(ticket, query));
            }
            Command::OpenNote(id) => {
                self.editor
                    .open(id, &self.api, &mut self.view, &mut self.directory)
                    .await;
            }
            Command::NewNote | Command::Shortcut(Shortcut::NewNote) => {
                self.editor
                    .create_new(&self.api, &mut self.view, &mut self.directory)
                    .await;
            }
            Command::Edit { id, title, content } => {
                self.editor.on_edit(&mut self.view, id, title, content)
            }
            Command::Save | Command::Shortcut(Shortcut::Save) => {
                self.editor
                    .save(&self.api, &mut self.view, &mut self.directory, false)
                    .await;
            }
            Command::Delete => {
                self.editor
                    .delete(&self.api, &mut self.view, &mut self.directory)
                    .await;
            }
            Command::Export => {
                let dir = self.config.resolved_export_dir();
                self.editor.export(&self.api, &mut self.view, &dir).await;
            }
        }
    }

    async fn check_session(&mut self) {
        let username = self.gate.check(&self.api).await.username().map(str::to_string);
        match username {
            Some(username) => self.enter_workspace(&username).await,
            None => self.view.show_credentials(),
        }
    }

    async fn authenticate(&mut self, mode: AuthMode, username: &str, password: &str) {
        self.view.clear_auth_error();
        match self.gate.submit(&self.api, mode, username, password).await {
            Ok(username) => self.enter_workspace(&username).await,
            Err(message) => self.view.show_auth_error(&message),
        }
    }

    async fn enter_workspace(&mut self, username: &str) {
        self.view.show_workspace(username);
        self.directory
            .load(&self.api, &mut self.view, None, self.editor.open_id())
            .await;
    }

    async fn logout(&mut self) {
        self.gate.logout(&self.api).await;
        self.search.cancel();
        self.editor.reset(&mut self.view);
        self.directory.clear(&mut self.view);
        self.view.hide_workspace();
        self.view.show_credentials();
    }

    pub fn session(&self) -> &Session {
        self.gate.session()
    }

    pub fn editor(&self) -> &EditorSession {
        &self.editor
    }

    pub fn directory(&self) -> &NotesDirectory {
        &self.directory
    }

    pub fn search_pending(&self) -> bool {
        self.search.is_pending()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
