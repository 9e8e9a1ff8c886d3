//! WCAG relative luminance and contrast ratio.

use crate::models::RgbColor;

/// WCAG 2.x relative luminance of an sRGB color.
#[must_use]
pub fn relative_luminance(rgb: RgbColor) -> f64 {
    fn linearize(channel: u8) -> f64 {
        let c = f64::from(channel) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    0.2126 * linearize(rgb.r) + 0.7152 * linearize(rgb.g) + 0.0722 * linearize(rgb.b)
}

/// WCAG contrast ratio between two hex colors, in 1.0..=21.0.
///
/// Returns `None` if either color is malformed.
#[must_use]
pub fn contrast_ratio(color_a: &str, color_b: &str) -> Option<f64> {
    let lum_a = relative_luminance(RgbColor::parse_hex(color_a)?);
    let lum_b = relative_luminance(RgbColor::parse_hex(color_b)?);

    let lighter = lum_a.max(lum_b);
    let darker = lum_a.min(lum_b);

    Some((lighter + 0.05) / (darker + 0.05))
}

/// Picks black or white text for the given background color.
///
/// Malformed backgrounds get white text, matching the dark canvas default.
#[must_use]
pub fn contrast_color(background: &str) -> &'static str {
    match RgbColor::parse_hex(background) {
        Some(rgb) if relative_luminance(rgb) > 0.5 => "#000000",
        _ => "#ffffff",
    }
}
