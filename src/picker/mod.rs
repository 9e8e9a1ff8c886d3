//! Group-constraint engine and picker orchestration.
//!
//! A multi-color selection under simultaneous editing shares one axis:
//! either lightness (wheel editing) or hue+saturation (slider editing).
//! This module detects which constraint a color set already satisfies,
//! normalizes sets that violate a requested constraint behind an explicit
//! user confirmation, spreads axis values evenly, and tracks the edits in a
//! per-selection history.

pub mod engine;
pub mod session;
pub mod spread;

pub use engine::{
    detect_constraint, normalize, run_normalization, Constraint, ConstraintMode,
    NormalizationOutcome, NormalizationTrigger,
};
pub use session::PickerSession;
pub use spread::{spread_axis, spread_hue, spread_lightness, spread_saturation, SpreadAxis};
