//! Liggs - Notes Client Library
//!
//! Liggs is a personal notebook: notes live on a small HTTP JSON server and
//! this crate is the client. It keeps the session, lists and searches notes,
//! edits one note at a time with autosave, and downloads exports.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types, configuration, error types, timestamp display
//! - **`client`** - The `NotesApi` trait and its reqwest implementation
//! - **`workspace`** - The UI-independent controller: session gate, notes
//!   directory, search debouncer, and the editor session state machine,
//!   driven from one event loop and rendering through the `NotesView` trait
//! - **`egui_app`** - Native desktop shell (egui/eframe) implementing
//!   `NotesView`
//!
//! # Usage
//!
//! ```rust,no_run
//! use liggs::egui_app::LiggsApp;
//! use liggs::shared::AppConfig;
//!
//! let config = AppConfig::load().expect("valid config");
//! eframe::run_native(
//!     "Liggs",
//!     eframe::NativeOptions::default(),
//!     Box::new(move |cc| Ok(Box::new(LiggsApp::new(cc, config)?))),
//! )
//! .expect("window opened");
//! ```
//!
//! # Thread Safety
//!
//! - **Workspace**: all editor state is owned by one task; commands and timer
//!   firings are processed strictly in arrival order
//! - **Native**: egui runs on the main thread and talks to the workspace
//!   through a channel and a shared view model

/// Shared types and data structures
pub mod shared;

/// Notes server API client
pub mod client;

/// Session, directory, and editor controller
pub mod workspace;

/// egui native desktop app
pub mod egui_app;
