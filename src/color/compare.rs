//! Tolerance-based color equality for constraint detection.
//!
//! Exact float equality is useless after hex round trips, so shared-axis
//! checks compare within per-space tolerances. OKHSL is perceptually
//! uniform, which makes tighter bounds meaningful there.

use super::ColorSpace;

/// Lightness tolerance per color space.
const fn lightness_tolerance(space: ColorSpace) -> f64 {
    match space {
        ColorSpace::Okhsl => 0.02,
        ColorSpace::Hsl => 0.05,
    }
}

/// Hue tolerance per color space.
const fn hue_tolerance(space: ColorSpace) -> f64 {
    match space {
        ColorSpace::Okhsl => 0.01,
        ColorSpace::Hsl => 0.03,
    }
}

/// Saturation tolerance per color space; more relaxed than hue.
const fn saturation_tolerance(space: ColorSpace) -> f64 {
    match space {
        ColorSpace::Okhsl => 0.05,
        ColorSpace::Hsl => 0.10,
    }
}

/// Whether two hex colors share the same lightness within tolerance.
///
/// Malformed hex on either side counts as "not the same".
#[must_use]
pub fn same_lightness(color_a: &str, color_b: &str, space: ColorSpace) -> bool {
    let (Some((_, _, la)), Some((_, _, lb))) = (space.components(color_a), space.components(color_b))
    else {
        return false;
    };

    (la - lb).abs() < lightness_tolerance(space)
}

/// Whether two hex colors share the same hue and saturation within tolerance.
///
/// Both channels must pass; malformed hex on either side counts as "not the
/// same".
#[must_use]
pub fn same_hue_saturation(color_a: &str, color_b: &str, space: ColorSpace) -> bool {
    let (Some((ha, sa, _)), Some((hb, sb, _))) = (space.components(color_a), space.components(color_b))
    else {
        return false;
    };

    (ha - hb).abs() < hue_tolerance(space) && (sa - sb).abs() < saturation_tolerance(space)
}

/// True iff every color matches the first element's lightness.
#[must_use]
pub fn all_same_lightness(colors: &[String], space: ColorSpace) -> bool {
    match colors.first() {
        Some(reference) => colors.iter().all(|c| same_lightness(c, reference, space)),
        None => true,
    }
}

/// True iff every color matches the first element's hue and saturation.
#[must_use]
pub fn all_same_hue_saturation(colors: &[String], space: ColorSpace) -> bool {
    match colors.first() {
        Some(reference) => colors.iter().all(|c| same_hue_saturation(c, reference, space)),
        None => true,
    }
}

/// Element-wise comparison of two color sets within tolerance.
///
/// Used for change-significance testing: deciding whether a proposed
/// normalization actually differs from the current set, to avoid pointless
/// confirmation prompts.
#[must_use]
pub fn color_sets_match(set_a: &[String], set_b: &[String], space: ColorSpace) -> bool {
    if set_a.len() != set_b.len() {
        return false;
    }

    set_a.iter().zip(set_b).all(|(a, b)| {
        same_hue_saturation(a, b, space) && same_lightness(a, b, space)
    })
}
