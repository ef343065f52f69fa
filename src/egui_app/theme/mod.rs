//! Theme Module
//!
//! Color scheme and styling for the desktop shell:
//!
//! - Color constants for the night-sky theme
//! - Styling helper functions and frame builders
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::egui_app::theme::{colors, styles};
//!
//! styles::apply_global_theme(ctx);
//! styles::sidebar_frame().show(ui, |ui| {
//!     ui.colored_label(colors::TEXT_SECONDARY, "Notes");
//! });
//! ```

pub mod colors;
pub mod styles;
