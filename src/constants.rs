//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and the fallback color used when a
//! picker session is opened with no colors.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "TintGrid";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "tintgrid";

/// Color used when a picker session is created with an empty selection.
pub const FALLBACK_COLOR: &str = "#ff0000";
