//! Even redistribution of one axis across a color set.
//!
//! Spreads keep the relative rank order of the colors along the chosen axis
//! while making their values evenly spaced; ties rank by original index so
//! the result is deterministic. All spreads are best-effort per element:
//! malformed hex entries are left unchanged and never abort the batch.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::ColorSpace;

/// Minimum span an axis is widened to before spreading.
const MIN_SPREAD_RANGE: f64 = 0.1;

/// The axis a spread operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpreadAxis {
    /// Rotate hues evenly around the wheel (shared-lightness editing).
    Hue,
    /// Evenly space saturation between the current extremes.
    Saturation,
    /// Evenly space lightness between the current extremes.
    Lightness,
}

impl std::fmt::Display for SpreadAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Hue => write!(f, "hue"),
            Self::Saturation => write!(f, "saturation"),
            Self::Lightness => write!(f, "lightness"),
        }
    }
}

/// Dispatches to the axis-specific spread.
#[must_use]
pub fn spread_axis(
    colors: &[String],
    axis: SpreadAxis,
    anchor: usize,
    space: ColorSpace,
) -> Vec<String> {
    match axis {
        SpreadAxis::Hue => spread_hue(colors, anchor, space),
        SpreadAxis::Saturation => spread_saturation(colors, anchor, space),
        SpreadAxis::Lightness => spread_lightness(colors, space),
    }
}

/// Distributes hues evenly around the wheel, anchored at the anchor color.
///
/// Each non-anchor color gets hue `anchor + (i - anchor) / N` (mod 1 turn)
/// and the anchor's saturation and lightness as reference, which is why hue
/// spreading only makes sense under shared-lightness editing. Requires at
/// least 2 colors; fewer is a no-op.
#[must_use]
pub fn spread_hue(colors: &[String], anchor: usize, space: ColorSpace) -> Vec<String> {
    if colors.len() < 2 {
        return colors.to_vec();
    }
    let Some((anchor_h, anchor_s, anchor_l)) =
        colors.get(anchor).and_then(|c| space.components(c))
    else {
        return colors.to_vec();
    };

    let step = 1.0 / colors.len() as f64;
    debug!(count = colors.len(), %space, "spreading hues evenly");

    colors
        .iter()
        .enumerate()
        .map(|(i, color)| {
            if i == anchor {
                return color.clone();
            }
            let offset = i as f64 - anchor as f64;
            let hue = (anchor_h + step * offset).rem_euclid(1.0);
            space.to_hex(hue, anchor_s, anchor_l)
        })
        .collect()
}

/// Evenly spaces saturation between the set's current extremes.
///
/// All colors take the anchor's hue and lightness as reference; only their
/// saturation rank survives. Requires at least 3 well-formed colors.
#[must_use]
pub fn spread_saturation(colors: &[String], anchor: usize, space: ColorSpace) -> Vec<String> {
    let Some((anchor_h, _, anchor_l)) = colors.get(anchor).and_then(|c| space.components(c)) else {
        return colors.to_vec();
    };

    spread_ranked(colors, space, |_, (_, s, _)| s, move |space, _, value| {
        space.to_hex(anchor_h, value, anchor_l)
    })
}

/// Evenly spaces lightness between the set's current extremes.
///
/// Each color keeps its own hue and saturation; only lightness moves.
/// Requires at least 3 well-formed colors.
#[must_use]
pub fn spread_lightness(colors: &[String], space: ColorSpace) -> Vec<String> {
    spread_ranked(colors, space, |_, (_, _, l)| l, |space, (h, s, _), value| {
        space.to_hex(h, s, value)
    })
}

/// Shared rank-and-reassign machinery for saturation/lightness spreads.
///
/// Sorts well-formed colors by the extracted axis value (stable, so ties
/// keep original index order), widens a degenerate range to
/// [`MIN_SPREAD_RANGE`] symmetrically within [0, 1], and writes evenly
/// spaced values back by rank to the original indices.
fn spread_ranked(
    colors: &[String],
    space: ColorSpace,
    value_of: impl Fn(usize, (f64, f64, f64)) -> f64,
    rebuild: impl Fn(ColorSpace, (f64, f64, f64), f64) -> String,
) -> Vec<String> {
    let mut ranked: Vec<(usize, (f64, f64, f64), f64)> = colors
        .iter()
        .enumerate()
        .filter_map(|(i, color)| {
            let components = space.components(color)?;
            Some((i, components, value_of(i, components)))
        })
        .collect();

    // Two colors have no interior points to space
    if ranked.len() < 3 {
        return colors.to_vec();
    }

    let mut min = ranked.iter().map(|(_, _, v)| *v).fold(f64::INFINITY, f64::min);
    let mut max = ranked.iter().map(|(_, _, v)| *v).fold(f64::NEG_INFINITY, f64::max);

    if max - min < MIN_SPREAD_RANGE {
        min = (min - MIN_SPREAD_RANGE / 2.0).max(0.0);
        max = (max + MIN_SPREAD_RANGE / 2.0).min(1.0);
    }

    // Stable sort: ties resolve by original index
    ranked.sort_by(|a, b| a.2.partial_cmp(&b.2).unwrap_or(std::cmp::Ordering::Equal));

    let step = (max - min) / (ranked.len() - 1) as f64;
    debug!(count = ranked.len(), %space, min, max, "spreading axis evenly");

    let mut result = colors.to_vec();
    for (rank, (index, components, _)) in ranked.into_iter().enumerate() {
        let value = min + step * rank as f64;
        result[index] = rebuild(space, components, value);
    }

    result
}
