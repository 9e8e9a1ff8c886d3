//! Data models for colors and color-edit history.
//!
//! This module contains the core data structures used throughout the
//! application. Models are designed to be independent of UI and business logic.

pub mod color_history;
pub mod rgb;

// Re-export all model types
pub use color_history::ColorHistory;
pub use rgb::RgbColor;
