//! RGB color handling with hex parsing and serialization.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

use std::fmt;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

static HEX_COLOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid hex pattern"));

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// The lowercase `#rrggbb` hex form is the canonical interchange format;
/// HSL and OKHSL triples are derived on demand and never stored, so
/// repeated conversions cannot drift the stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a strict 6-digit hex string.
    ///
    /// Supports formats: "#rrggbb", "rrggbb" (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use tintgrid::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid hex color format.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.len() != 6 {
            anyhow::bail!("Invalid hex color format '{hex}'. Expected 6 hex digits (rrggbb)");
        }

        let r = u8::from_str_radix(&hex[0..2], 16)
            .context(format!("Invalid red channel in hex color '{hex}'"))?;
        let g = u8::from_str_radix(&hex[2..4], 16)
            .context(format!("Invalid green channel in hex color '{hex}'"))?;
        let b = u8::from_str_radix(&hex[4..6], 16)
            .context(format!("Invalid blue channel in hex color '{hex}'"))?;

        Ok(Self::new(r, g, b))
    }

    /// Leniently parses a 3-digit or 6-digit hex string.
    ///
    /// Shorthand digits are scaled to the 0-255 range (`d * 17`), matching
    /// CSS shorthand expansion. Returns `None` for anything that is not a
    /// well-formed hex color; malformed input never panics, so batch
    /// operations can skip bad elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use tintgrid::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::parse_hex("#fff"), Some(RgbColor::new(255, 255, 255)));
    /// assert_eq!(RgbColor::parse_hex("#ff0000"), Some(RgbColor::new(255, 0, 0)));
    /// assert_eq!(RgbColor::parse_hex("#zzz"), None);
    /// ```
    #[must_use]
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        match hex.len() {
            3 => {
                let digit = |i: usize| {
                    let c = hex.as_bytes()[i] as char;
                    c.to_digit(16).map(|d| (d * 17) as u8)
                };
                Some(Self::new(digit(0)?, digit(1)?, digit(2)?))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            }
            _ => None,
        }
    }

    /// Converts the color to a hex string in the canonical format "#rrggbb".
    ///
    /// # Examples
    ///
    /// ```
    /// use tintgrid::models::RgbColor;
    ///
    /// let color = RgbColor::new(255, 0, 0);
    /// assert_eq!(color.to_hex(), "#ff0000");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Builds a color from floating-point channels in the 0-255 range.
    ///
    /// Each channel is rounded and clamped before encoding, so slightly
    /// out-of-gamut conversion results still produce a displayable color.
    #[must_use]
    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        let channel = |x: f64| x.round().clamp(0.0, 255.0) as u8;
        Self::new(channel(r), channel(g), channel(b))
    }

    /// Returns true if the string is a strict canonical hex color (`#rrggbb`).
    ///
    /// This is the validity check used at persistence boundaries; the
    /// lenient [`Self::parse_hex`] additionally accepts 3-digit shorthand
    /// and a missing `#` prefix.
    #[must_use]
    pub fn is_valid_hex(color: &str) -> bool {
        HEX_COLOR_RE.is_match(color)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is white (#ffffff).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}
