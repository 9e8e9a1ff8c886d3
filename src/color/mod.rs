//! Color-space conversion math and comparison utilities.
//!
//! Two hue/saturation/lightness spaces are supported: plain cylindrical HSL
//! and OKHSL, a perceptually uniform space that requires an sRGB
//! gamut-boundary search. All conversions are pure functions; hue is
//! expressed in turns (0.0-1.0), saturation and lightness in 0.0-1.0.

pub mod compare;
pub mod contrast;
pub mod hsl;
pub mod okhsl;

use serde::{Deserialize, Serialize};

use crate::models::RgbColor;

/// The color space a multi-color editing operation works in.
///
/// Conversions and comparison tolerances differ per space; every
/// group-constraint operation is parameterized by this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    /// Plain cylindrical sRGB HSL.
    #[default]
    Hsl,
    /// Perceptually uniform OKHSL.
    Okhsl,
}

impl ColorSpace {
    /// Converts an (h, s, l) triple in this space to an `RgbColor`.
    ///
    /// Fast enough for per-pixel invocation: the OKHSL path performs a
    /// fixed single Halley refinement step rather than iterating to
    /// convergence.
    #[must_use]
    pub fn to_rgb(self, h: f64, s: f64, l: f64) -> RgbColor {
        match self {
            Self::Hsl => hsl::hsl_to_rgb(h, s, l),
            Self::Okhsl => okhsl::okhsl_to_srgb(h, s, l),
        }
    }

    /// Converts an (h, s, l) triple in this space to a canonical hex string.
    #[must_use]
    pub fn to_hex(self, h: f64, s: f64, l: f64) -> String {
        self.to_rgb(h, s, l).to_hex()
    }

    /// Decodes a hex string into this space's (h, s, l) triple.
    ///
    /// Returns `None` for malformed hex; callers treat that as "skip this
    /// element" rather than aborting a batch operation.
    #[must_use]
    pub fn components(self, hex: &str) -> Option<(f64, f64, f64)> {
        let rgb = RgbColor::parse_hex(hex)?;
        Some(match self {
            Self::Hsl => hsl::rgb_to_hsl(rgb),
            Self::Okhsl => okhsl::srgb_to_okhsl(rgb),
        })
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hsl => write!(f, "hsl"),
            Self::Okhsl => write!(f, "okhsl"),
        }
    }
}
