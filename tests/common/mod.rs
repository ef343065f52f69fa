//! Common test utilities and helpers
//!
//! - [`FakeApi`]: in-memory notes server with a request log
//! - [`RecordingView`]: `NotesView` that records every call
//! - Workspace builders and timer helpers

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::oneshot;

use liggs::client::{ExportFile, NotesApi};
use liggs::shared::auth::{AuthResponse, Credentials, SessionStatus};
use liggs::shared::error::{ClientError, ClientResult};
use liggs::shared::note::{Note, NoteDraft, NoteId, NoteSummary};
use liggs::shared::AppConfig;
use liggs::workspace::{Listing, NotesView, SaveStatus, Workspace, WorkspaceHandle};

/// One request the fake server received
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SessionStatus,
    Login(String),
    Register(String),
    Logout,
    List(Option<String>),
    Get(NoteId),
    Create(NoteDraft),
    Update(NoteId, NoteDraft),
    Delete(NoteId),
    Export(NoteId),
}

/// Endpoint selector for injected failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    SessionStatus,
    Login,
    Register,
    Logout,
    List,
    Get,
    Create,
    Update,
    Delete,
    Export,
}

#[derive(Default)]
struct FakeState {
    users: HashMap<String, String>,
    current_user: Option<String>,
    notes: BTreeMap<i64, Note>,
    next_id: i64,
    clock: u32,
    calls: Vec<Call>,
    failing: HashSet<Op>,
    delay: Option<Duration>,
    in_flight: usize,
    max_in_flight: usize,
}

/// In-memory notes server. Clones share state.
#[derive(Clone, Default)]
pub struct FakeApi {
    state: Arc<Mutex<FakeState>>,
}

impl FakeApi {
    pub fn new() -> Self {
        let api = Self::default();
        api.lock().next_id = 1;
        api
    }

    /// Server with user `ada` already logged in
    pub fn logged_in() -> Self {
        let api = Self::new();
        api.add_user("ada", "lovelace");
        api.lock().current_user = Some("ada".to_string());
        api
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    pub fn add_user(&self, username: &str, password: &str) {
        self.lock()
            .users
            .insert(username.to_string(), password.to_string());
    }

    /// Insert a note directly, bypassing the request log
    pub fn seed(&self, title: &str, content: &str) -> NoteId {
        let mut state = self.lock();
        let id = state.next_id;
        state.next_id += 1;
        let stamp = state.tick();
        state.notes.insert(
            id,
            Note {
                id: NoteId(id),
                title: title.to_string(),
                content: content.to_string(),
                created_at: Some(stamp.clone()),
                updated_at: Some(stamp),
            },
        );
        NoteId(id)
    }

    pub fn note(&self, id: NoteId) -> Option<Note> {
        self.lock().notes.get(&id.0).cloned()
    }

    pub fn set_failing(&self, op: Op, failing: bool) {
        let mut state = self.lock();
        if failing {
            state.failing.insert(op);
        } else {
            state.failing.remove(&op);
        }
    }

    /// Make every request take `delay` to answer
    pub fn set_delay(&self, delay: Duration) {
        self.lock().delay = Some(delay);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.lock().calls.iter().filter(|c| pred(c)).count()
    }

    pub fn updates(&self) -> Vec<(NoteId, NoteDraft)> {
        self.lock()
            .calls
            .iter()
            .filter_map(|c| match c {
                Call::Update(id, draft) => Some((*id, draft.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn max_in_flight(&self) -> usize {
        self.lock().max_in_flight
    }

    /// Log the call, wait out the configured delay, and report whether the
    /// endpoint is set to fail.
    async fn begin(&self, call: Call, op: Op) -> ClientResult<()> {
        let delay = {
            let mut state = self.lock();
            state.calls.push(call);
            state.in_flight += 1;
            state.max_in_flight = state.max_in_flight.max(state.in_flight);
            state.delay
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        let mut state = self.lock();
        state.in_flight -= 1;
        if state.failing.contains(&op) {
            return Err(ClientError::transport("connection refused"));
        }
        if !matches!(op, Op::SessionStatus | Op::Login | Op::Register | Op::Logout)
            && state.current_user.is_none()
        {
            return Err(ClientError::status(401, Some("Unauthorized".to_string())));
        }
        Ok(())
    }
}

impl FakeState {
    fn tick(&mut self) -> String {
        self.clock += 1;
        format!("2024-01-05 15:{:02}:{:02}", self.clock / 60, self.clock % 60)
    }
}

fn not_found() -> ClientError {
    ClientError::status(404, Some("Note not found".to_string()))
}

#[async_trait]
impl NotesApi for FakeApi {
    async fn session_status(&self) -> ClientResult<SessionStatus> {
        self.begin(Call::SessionStatus, Op::SessionStatus).await?;
        let user = self.lock().current_user.clone();
        Ok(SessionStatus {
            authenticated: user.is_some(),
            username: user,
        })
    }

    async fn login(&self, credentials: &Credentials) -> ClientResult<AuthResponse> {
        self.begin(Call::Login(credentials.username.clone()), Op::Login)
            .await?;
        let mut state = self.lock();
        if state.users.get(&credentials.username) != Some(&credentials.password) {
            return Err(ClientError::status(401, Some("Invalid credentials".to_string())));
        }
        state.current_user = Some(credentials.username.clone());
        Ok(AuthResponse {
            username: credentials.username.clone(),
        })
    }

    async fn register(&self, credentials: &Credentials) -> ClientResult<AuthResponse> {
        self.begin(Call::Register(credentials.username.clone()), Op::Register)
            .await?;
        let mut state = self.lock();
        if state.users.contains_key(&credentials.username) {
            return Err(ClientError::status(409, Some("Username already taken".to_string())));
        }
        state
            .users
            .insert(credentials.username.clone(), credentials.password.clone());
        state.current_user = Some(credentials.username.clone());
        Ok(AuthResponse {
            username: credentials.username.clone(),
        })
    }

    async fn logout(&self) -> ClientResult<()> {
        self.begin(Call::Logout, Op::Logout).await?;
        self.lock().current_user = None;
        Ok(())
    }

    async fn list_notes(&self, query: Option<&str>) -> ClientResult<Vec<NoteSummary>> {
        self.begin(Call::List(query.map(str::to_string)), Op::List)
            .await?;
        let state = self.lock();
        let needle = query.map(str::to_lowercase);
        let mut notes: Vec<&Note> = state
            .notes
            .values()
            .filter(|n| match &needle {
                Some(q) => {
                    n.title.to_lowercase().contains(q) || n.content.to_lowercase().contains(q)
                }
                None => true,
            })
            .collect();
        notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(notes
            .into_iter()
            .map(|n| NoteSummary {
                id: n.id,
                title: n.title.clone(),
                preview: n.content.chars().take(100).collect(),
                updated_at: n.updated_at.clone(),
            })
            .collect())
    }

    async fn get_note(&self, id: NoteId) -> ClientResult<Note> {
        self.begin(Call::Get(id), Op::Get).await?;
        self.note(id).ok_or_else(not_found)
    }

    async fn create_note(&self, draft: &NoteDraft) -> ClientResult<Note> {
        self.begin(Call::Create(draft.clone()), Op::Create).await?;
        let mut state = self.lock();
        let id = state.next_id;
        state.next_id += 1;
        let stamp = state.tick();
        let note = Note {
            id: NoteId(id),
            title: draft.title.clone(),
            content: draft.content.clone(),
            created_at: Some(stamp.clone()),
            updated_at: Some(stamp),
        };
        state.notes.insert(id, note.clone());
        Ok(note)
    }

    async fn update_note(&self, id: NoteId, draft: &NoteDraft) -> ClientResult<Note> {
        self.begin(Call::Update(id, draft.clone()), Op::Update)
            .await?;
        let mut state = self.lock();
        let stamp = state.tick();
        let note = state.notes.get_mut(&id.0).ok_or_else(not_found)?;
        note.title = draft.title.clone();
        note.content = draft.content.clone();
        note.updated_at = Some(stamp);
        Ok(note.clone())
    }

    async fn delete_note(&self, id: NoteId) -> ClientResult<()> {
        self.begin(Call::Delete(id), Op::Delete).await?;
        self.lock().notes.remove(&id.0).map(|_| ()).ok_or_else(not_found)
    }

    async fn export_note(&self, id: NoteId) -> ClientResult<ExportFile> {
        self.begin(Call::Export(id), Op::Export).await?;
        let note = self.note(id).ok_or_else(not_found)?;
        Ok(ExportFile {
            filename: Some(format!("{}.txt", note.title.replace(' ', "_"))),
            body: format!("{}\n\n{}", note.title, note.content).into_bytes(),
        })
    }
}

/// One call the controller made on the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    Credentials,
    Workspace(String),
    HideWorkspace,
    AuthError(String),
    ClearAuthError,
    Directory(Listing),
    Patch(NoteId, String, String),
    Active(Option<NoteId>),
    ClearDirectory,
    Editor {
        id: NoteId,
        title: String,
        content: String,
        meta: String,
    },
    EmptyState,
    Meta(String),
    Status(SaveStatus),
    FocusTitle,
    Confirm(String),
    ExportSaved(PathBuf),
    Notice(String),
}

/// `NotesView` that records every call and answers confirmations with a
/// preset reply (`None` drops the question).
#[derive(Debug, Default)]
pub struct RecordingView {
    pub calls: Vec<ViewCall>,
    pub confirm_answer: Option<bool>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, pred: impl Fn(&ViewCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }

    pub fn last_listing(&self) -> Option<&Listing> {
        self.calls.iter().rev().find_map(|c| match c {
            ViewCall::Directory(listing) => Some(listing),
            _ => None,
        })
    }

    pub fn last_status(&self) -> Option<SaveStatus> {
        self.calls.iter().rev().find_map(|c| match c {
            ViewCall::Status(status) => Some(*status),
            _ => None,
        })
    }

    pub fn last_auth_error(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|c| match c {
            ViewCall::AuthError(message) => Some(message.as_str()),
            _ => None,
        })
    }

    pub fn last_editor(&self) -> Option<(&str, &str, &str)> {
        self.calls.iter().rev().find_map(|c| match c {
            ViewCall::Editor {
                title,
                content,
                meta,
                ..
            } => Some((title.as_str(), content.as_str(), meta.as_str())),
            _ => None,
        })
    }

    pub fn contains(&self, call: &ViewCall) -> bool {
        self.calls.contains(call)
    }
}

impl NotesView for RecordingView {
    fn show_credentials(&mut self) {
        self.calls.push(ViewCall::Credentials);
    }

    fn show_workspace(&mut self, username: &str) {
        self.calls.push(ViewCall::Workspace(username.to_string()));
    }

    fn hide_workspace(&mut self) {
        self.calls.push(ViewCall::HideWorkspace);
    }

    fn show_auth_error(&mut self, message: &str) {
        self.calls.push(ViewCall::AuthError(message.to_string()));
    }

    fn clear_auth_error(&mut self) {
        self.calls.push(ViewCall::ClearAuthError);
    }

    fn render_directory(&mut self, listing: &Listing) {
        self.calls.push(ViewCall::Directory(listing.clone()));
    }

    fn patch_directory_entry(&mut self, id: NoteId, title: &str, updated: &str) {
        self.calls
            .push(ViewCall::Patch(id, title.to_string(), updated.to_string()));
    }

    fn mark_active(&mut self, id: Option<NoteId>) {
        self.calls.push(ViewCall::Active(id));
    }

    fn clear_directory(&mut self) {
        self.calls.push(ViewCall::ClearDirectory);
    }

    fn show_editor(&mut self, id: NoteId, title: &str, content: &str, meta: &str) {
        self.calls.push(ViewCall::Editor {
            id,
            title: title.to_string(),
            content: content.to_string(),
            meta: meta.to_string(),
        });
    }

    fn show_empty_state(&mut self) {
        self.calls.push(ViewCall::EmptyState);
    }

    fn set_meta(&mut self, meta: &str) {
        self.calls.push(ViewCall::Meta(meta.to_string()));
    }

    fn set_save_status(&mut self, status: SaveStatus) {
        self.calls.push(ViewCall::Status(status));
    }

    fn focus_title(&mut self) {
        self.calls.push(ViewCall::FocusTitle);
    }

    fn confirm(&mut self, prompt: &str) -> oneshot::Receiver<bool> {
        self.calls.push(ViewCall::Confirm(prompt.to_string()));
        let (tx, rx) = oneshot::channel();
        if let Some(answer) = self.confirm_answer {
            let _ = tx.send(answer);
        }
        rx
    }

    fn export_saved(&mut self, path: &Path) {
        self.calls.push(ViewCall::ExportSaved(path.to_path_buf()));
    }

    fn show_notice(&mut self, message: &str) {
        self.calls.push(ViewCall::Notice(message.to_string()));
    }
}

pub type TestWorkspace = Workspace<FakeApi, RecordingView>;

pub fn test_config(export_dir: &Path) -> AppConfig {
    AppConfig::builder()
        .export_dir(export_dir.to_path_buf())
        .build()
        .unwrap()
}

pub fn workspace(api: &FakeApi, export_dir: &Path) -> (TestWorkspace, WorkspaceHandle) {
    Workspace::new(api.clone(), RecordingView::new(), test_config(export_dir))
}

/// Let `ms` of virtual time pass, then handle whatever the timers queued.
pub async fn advance(ws: &mut TestWorkspace, ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    ws.run_pending().await;
}
