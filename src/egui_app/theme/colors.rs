//! Color Constants for the Night-Sky Theme
//!
//! Deep navy backgrounds with a violet accent, matching the intro starfield.

use eframe::egui::Color32;

/// Window and intro background - Near-black navy
pub const BG_DEEP: Color32 = Color32::from_rgb(0x07, 0x0B, 0x1A);

/// Sidebar background - Dark navy
pub const SIDEBAR_BG: Color32 = Color32::from_rgb(0x0E, 0x14, 0x2B);

/// Editor background - Slightly lifted navy
pub const EDITOR_BG: Color32 = Color32::from_rgb(0x12, 0x1A, 0x36);

/// Top bar background
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x0A, 0x10, 0x24);

/// Directory row background
pub const ITEM_BG: Color32 = Color32::from_rgb(0x0E, 0x14, 0x2B);

/// Directory row under the pointer
pub const ITEM_HOVER: Color32 = Color32::from_rgb(0x1A, 0x23, 0x47);

/// Directory row for the open note
pub const ITEM_ACTIVE: Color32 = Color32::from_rgb(0x2B, 0x25, 0x5E);

/// Input field background
pub const INPUT_BG: Color32 = Color32::from_rgb(0x18, 0x21, 0x44);

/// Accent - Violet
pub const ACCENT: Color32 = Color32::from_rgb(0x8B, 0x7C, 0xF6);

/// Text on dark backgrounds
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xE6, 0xE9, 0xF5);

/// Secondary text color (muted)
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0x8A, 0x93, 0xB8);

/// Star color before alpha is applied
pub const STAR: Color32 = Color32::from_rgb(0xF4, 0xF6, 0xFF);

/// "saved" indicator
pub const SUCCESS: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);

/// "unsaved" indicator
pub const WARNING: Color32 = Color32::from_rgb(0xFF, 0xA7, 0x26);

/// Error color - Red
pub const ERROR: Color32 = Color32::from_rgb(0xE5, 0x73, 0x73);

/// Separator/divider color
pub const SEPARATOR: Color32 = Color32::from_rgb(0x22, 0x2C, 0x55);
