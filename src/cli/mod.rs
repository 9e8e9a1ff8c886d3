//! CLI command handlers for TintGrid.
//!
//! This module provides headless, scriptable access to the color core for
//! automation, testing, and CI/CD integration. Each command mirrors one
//! picker operation and supports `--json` output.

pub mod common;
pub mod contrast;
pub mod convert;
pub mod inspect;
pub mod normalize;
pub mod spread;

// Re-export types used by main.rs and tests
pub use common::ExitCode;
pub use contrast::ContrastArgs;
pub use convert::ConvertArgs;
pub use inspect::InspectArgs;
pub use normalize::NormalizeArgs;
pub use spread::SpreadArgs;
