//! TintGrid Core Library
//!
//! This library provides the core color model for the TintGrid palette
//! designer: sRGB/HSL/OKHSL conversion math, tolerance-based color
//! comparison, the group-constraint engine that keeps a multi-color
//! selection on a shared axis, and the per-selection color history.
//!
//! Rendering, canvas interaction, and dialogs are external collaborators;
//! they consume this crate through plain functions over hex strings.

// Module declarations
pub mod cli;
pub mod color;
pub mod config;
pub mod constants;
pub mod models;
pub mod picker;
