//! Shared Module
//!
//! Types that describe the notes server's wire format and the client's
//! configuration. Nothing here touches the network or the UI.

/// Note data structures
pub mod note;

/// Session and credential types
pub mod auth;

/// Client error types
pub mod error;

/// Application configuration
pub mod config;

/// Timestamp display formatting
pub mod timestamp;

/// Re-export commonly used types for convenience
pub use auth::{AuthMode, Credentials, Session};
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::{ClientError, ClientResult};
pub use note::{Note, NoteDraft, NoteId, NoteSummary, DEFAULT_TITLE};
