//! Constraint detection and the group-normalization protocol.

use std::future::Future;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::color::{compare, ColorSpace};

/// The shared axis a multi-color selection is constrained to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ConstraintMode {
    /// All colors share one lightness; hue and saturation vary (wheel editing).
    #[default]
    SharedLightness,
    /// All colors share one hue and saturation; lightness varies (slider editing).
    SharedHueSaturation,
}

impl std::fmt::Display for ConstraintMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SharedLightness => write!(f, "shared-lightness"),
            Self::SharedHueSaturation => write!(f, "shared-hue-saturation"),
        }
    }
}

/// A (color space, constraint mode) pair describing how a set is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Constraint {
    /// Color space the constraint holds in.
    pub space: ColorSpace,
    /// The shared axis.
    pub mode: ConstraintMode,
}

/// Why a normalization is being requested; passed through to the
/// confirmation callback so the UI can phrase its prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizationTrigger {
    /// A multi-color selection was just loaded into the picker.
    Initialization,
    /// The user switched between wheel and slider editing.
    ModeChange,
    /// The user switched between HSL and OKHSL.
    ColorSpaceChange,
}

/// Result of running the normalization protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizationOutcome {
    /// The set already satisfied the constraint; apply the switch silently.
    AlreadySatisfied,
    /// The user confirmed; `colors` is the new working set.
    Applied {
        /// Normalized color set, same order and length as the input.
        colors: Vec<String>,
        /// Whether the caller must reset the color history (new baseline
        /// rather than an undoable edit; true only on initialization).
        reset_history: bool,
    },
    /// The user declined; colors are unchanged and the caller owns any
    /// selection cleanup.
    Declined,
}

/// Infers which constraint an existing color set satisfies.
///
/// Tested in fixed priority order: HSL shared-lightness, HSL shared
/// hue/saturation, OKHSL shared-lightness, OKHSL shared hue/saturation.
/// The ordering is a deliberate tie-break: plain HSL wins over OKHSL when
/// both would match, and shared lightness wins over shared hue/saturation.
/// Sets with at most one color, and sets matching nothing, return the
/// caller-supplied default.
#[must_use]
pub fn detect_constraint(colors: &[String], default: Constraint) -> Constraint {
    if colors.len() <= 1 {
        return default;
    }

    let candidates = [
        Constraint { space: ColorSpace::Hsl, mode: ConstraintMode::SharedLightness },
        Constraint { space: ColorSpace::Hsl, mode: ConstraintMode::SharedHueSaturation },
        Constraint { space: ColorSpace::Okhsl, mode: ConstraintMode::SharedLightness },
        Constraint { space: ColorSpace::Okhsl, mode: ConstraintMode::SharedHueSaturation },
    ];

    candidates
        .into_iter()
        .find(|c| satisfies(colors, c.mode, c.space))
        .unwrap_or(default)
}

/// Whether the whole set satisfies the given shared-axis constraint.
#[must_use]
pub fn satisfies(colors: &[String], mode: ConstraintMode, space: ColorSpace) -> bool {
    match mode {
        ConstraintMode::SharedLightness => compare::all_same_lightness(colors, space),
        ConstraintMode::SharedHueSaturation => compare::all_same_hue_saturation(colors, space),
    }
}

/// Rewrites a color set so it satisfies the target constraint.
///
/// The anchor color is never modified; every other color keeps its own free
/// axis (or draws a random value when `randomize` is set) and takes the
/// anchor's value on the shared axis. Malformed hex entries pass through
/// unchanged rather than aborting the batch. Output preserves input order
/// and length.
#[must_use]
pub fn normalize(
    colors: &[String],
    anchor: usize,
    mode: ConstraintMode,
    space: ColorSpace,
    randomize: bool,
) -> Vec<String> {
    normalize_with_rng(colors, anchor, mode, space, randomize, &mut rand::thread_rng())
}

/// [`normalize`] with an injected RNG, for deterministic tests.
#[must_use]
pub fn normalize_with_rng(
    colors: &[String],
    anchor: usize,
    mode: ConstraintMode,
    space: ColorSpace,
    randomize: bool,
    rng: &mut impl Rng,
) -> Vec<String> {
    let Some(anchor_color) = colors.get(anchor) else {
        return colors.to_vec();
    };
    let Some((anchor_h, anchor_s, anchor_l)) = space.components(anchor_color) else {
        return colors.to_vec();
    };

    colors
        .iter()
        .enumerate()
        .map(|(i, color)| {
            if i == anchor {
                return color.clone();
            }

            let Some((h, s, l)) = space.components(color) else {
                // Malformed entry: leave untouched
                return color.clone();
            };

            match mode {
                ConstraintMode::SharedLightness => {
                    let hue = if randomize { rng.gen_range(0.0..1.0) } else { h };
                    let saturation = if randomize { rng.gen_range(0.3..1.0) } else { s };
                    space.to_hex(hue, saturation, anchor_l)
                }
                ConstraintMode::SharedHueSaturation => {
                    let lightness = if randomize { rng.gen_range(0.2..0.8) } else { l };
                    space.to_hex(anchor_h, anchor_s, lightness)
                }
            }
        })
        .collect()
}

/// Runs the confirm-or-revert normalization protocol.
///
/// Computes the normalized set for the requested constraint; if the current
/// set already matches it within tolerance the switch applies with no side
/// effects. Otherwise the injected `confirm` callback is awaited: on
/// confirmation the normalized set is returned (with a forced history reset
/// for the initialization trigger only), on rejection the colors stay
/// untouched. Free-axis randomization is used for mode changes only, so a
/// wheel/slider switch lands on visibly distinct colors.
///
/// At most one normalization request is expected in flight per editing
/// session; the pending computation is a local value and nothing is
/// published until the callback resolves.
pub async fn run_normalization<F, Fut>(
    colors: &[String],
    anchor: usize,
    mode: ConstraintMode,
    space: ColorSpace,
    trigger: NormalizationTrigger,
    confirm: F,
) -> NormalizationOutcome
where
    F: FnOnce(NormalizationTrigger) -> Fut,
    Fut: Future<Output = bool>,
{
    let randomize = trigger == NormalizationTrigger::ModeChange;
    let normalized = normalize(colors, anchor, mode, space, randomize);

    if compare::color_sets_match(&normalized, colors, space) {
        debug!(?trigger, %space, %mode, "set already satisfies constraint");
        return NormalizationOutcome::AlreadySatisfied;
    }

    if confirm(trigger).await {
        debug!(?trigger, %space, %mode, "normalization confirmed");
        NormalizationOutcome::Applied {
            colors: normalized,
            reset_history: trigger == NormalizationTrigger::Initialization,
        }
    } else {
        debug!(?trigger, "normalization declined, keeping colors");
        NormalizationOutcome::Declined
    }
}
