//! Bidirectional sRGB <-> HSL conversion.
//!
//! Hue is normalized to turns in [0, 1). The achromatic case maps every hue
//! to the same gray, and lightness of exactly 0 or 1 short-circuits to pure
//! black/white so no channel math can drift those endpoints.

use crate::models::RgbColor;

/// Converts an sRGB color to (hue, saturation, lightness), hue in turns.
#[must_use]
pub fn rgb_to_hsl(rgb: RgbColor) -> (f64, f64, f64) {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic: hue is undefined, report 0
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 { d / (2.0 - max - min) } else { d / (max + min) };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h / 6.0, s, l)
}

/// Converts (hue, saturation, lightness) to sRGB, hue in turns.
#[must_use]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> RgbColor {
    // Endpoints must stay exact regardless of hue/saturation
    if l == 0.0 {
        return RgbColor::new(0, 0, 0);
    }
    if l == 1.0 {
        return RgbColor::new(255, 255, 255);
    }

    if s == 0.0 {
        // Achromatic
        return RgbColor::from_f64(l * 255.0, l * 255.0, l * 255.0);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let r = hue_to_channel(p, q, h + 1.0 / 3.0);
    let g = hue_to_channel(p, q, h);
    let b = hue_to_channel(p, q, h - 1.0 / 3.0);

    RgbColor::from_f64(r * 255.0, g * 255.0, b * 255.0)
}

/// Converts an HSL triple directly to a canonical hex string.
#[must_use]
pub fn hsl_to_hex(h: f64, s: f64, l: f64) -> String {
    hsl_to_rgb(h, s, l).to_hex()
}

/// Decodes a hex string into an HSL triple, `None` on malformed input.
#[must_use]
pub fn hex_to_hsl(hex: &str) -> Option<(f64, f64, f64)> {
    Some(rgb_to_hsl(RgbColor::parse_hex(hex)?))
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_colors() {
        let (h, s, l) = rgb_to_hsl(RgbColor::new(255, 0, 0));
        assert!(h.abs() < 1e-9);
        assert!((s - 1.0).abs() < 1e-9);
        assert!((l - 0.5).abs() < 1e-9);

        let (h, _, _) = rgb_to_hsl(RgbColor::new(0, 255, 0));
        assert!((h - 1.0 / 3.0).abs() < 1e-9);

        let (h, _, _) = rgb_to_hsl(RgbColor::new(0, 0, 255));
        assert!((h - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_achromatic() {
        let (h, s, l) = rgb_to_hsl(RgbColor::new(128, 128, 128));
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert!((l - 128.0 / 255.0).abs() < 1e-9);

        // Any hue with zero saturation maps to the same gray
        assert_eq!(hsl_to_rgb(0.25, 0.0, 0.5), hsl_to_rgb(0.75, 0.0, 0.5));
    }

    #[test]
    fn test_black_white_short_circuit() {
        assert_eq!(hsl_to_rgb(0.3, 0.9, 0.0), RgbColor::new(0, 0, 0));
        assert_eq!(hsl_to_rgb(0.7, 0.2, 1.0), RgbColor::new(255, 255, 255));
    }

    #[test]
    fn test_hex_to_hsl_fixed_points() {
        let (_, s, l) = hex_to_hsl("#000000").unwrap();
        assert_eq!((s, l), (0.0, 0.0));

        let (_, s, l) = hex_to_hsl("#ffffff").unwrap();
        assert_eq!((s, l), (0.0, 1.0));
    }

    #[test]
    fn test_roundtrip_sample_grid() {
        // Every 8-bit channel combination at step 15 round-trips within +-1
        for r in (0..=255u16).step_by(15) {
            for g in (0..=255u16).step_by(15) {
                for b in (0..=255u16).step_by(15) {
                    let rgb = RgbColor::new(r as u8, g as u8, b as u8);
                    let (h, s, l) = rgb_to_hsl(rgb);
                    let back = hsl_to_rgb(h, s, l);
                    assert!(
                        (i16::from(rgb.r) - i16::from(back.r)).abs() <= 1
                            && (i16::from(rgb.g) - i16::from(back.g)).abs() <= 1
                            && (i16::from(rgb.b) - i16::from(back.b)).abs() <= 1,
                        "round trip drift for {rgb}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_hsl_to_hex_is_lowercase() {
        assert_eq!(hsl_to_hex(0.0, 1.0, 0.5), "#ff0000");
        assert_eq!(hsl_to_hex(2.0 / 3.0, 1.0, 0.5), "#0000ff");
    }
}
