//! Stateful picker session tying the engine, comparator and history together.
//!
//! External UI layers own rendering and input; a `PickerSession` owns the
//! working color set, the active constraint, and the per-selection history.
//! Every confirmed edit records a history state; normalization runs through
//! the confirm-or-revert protocol in [`super::engine`].

use std::future::Future;

use tracing::debug;

use crate::color::ColorSpace;
use crate::constants::FALLBACK_COLOR;
use crate::models::{ColorHistory, RgbColor};
use crate::picker::engine::{
    self, Constraint, ConstraintMode, NormalizationOutcome, NormalizationTrigger,
};
use crate::picker::spread::{self, SpreadAxis};

/// A multi-color editing session over one selection.
#[derive(Debug, Clone)]
pub struct PickerSession {
    colors: Vec<String>,
    selected: usize,
    space: ColorSpace,
    mode: ConstraintMode,
    history: ColorHistory,
}

impl PickerSession {
    /// Creates a session for the given selection.
    ///
    /// An empty selection falls back to a single default color so the
    /// picker always has something to edit. The constraint starts at the
    /// caller's default; call [`Self::initialize`] to detect and enforce
    /// the constraint the colors actually satisfy.
    #[must_use]
    pub fn new(colors: Vec<String>, default: Constraint) -> Self {
        let colors = if colors.is_empty() {
            vec![FALLBACK_COLOR.to_string()]
        } else {
            colors
        };

        let history = ColorHistory::new(colors.clone());
        Self {
            colors,
            selected: 0,
            space: default.space,
            mode: default.mode,
            history,
        }
    }

    /// The working color set, in selection order.
    #[must_use]
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// The anchor color's hex string.
    #[must_use]
    pub fn selected_color(&self) -> &str {
        &self.colors[self.selected]
    }

    /// Index of the anchor color.
    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The active color space.
    #[must_use]
    pub fn space(&self) -> ColorSpace {
        self.space
    }

    /// The active shared-axis constraint.
    #[must_use]
    pub fn mode(&self) -> ConstraintMode {
        self.mode
    }

    /// Changes the anchor color. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.colors.len() {
            self.selected = index;
        }
    }

    /// Detects the constraint the selection satisfies and enforces it.
    ///
    /// Runs the normalization protocol with the initialization trigger:
    /// already-conforming sets adopt the detected constraint silently,
    /// confirmed normalizations replace the colors and reset history (a
    /// new baseline, not an undoable edit), and a declined normalization
    /// leaves everything untouched and returns `false` so the caller can
    /// clear its pending selection.
    pub async fn initialize<F, Fut>(&mut self, confirm: F) -> bool
    where
        F: FnOnce(NormalizationTrigger) -> Fut,
        Fut: Future<Output = bool>,
    {
        if self.colors.len() <= 1 {
            return true;
        }

        let default = Constraint { space: self.space, mode: self.mode };
        let detected = engine::detect_constraint(&self.colors, default);

        let outcome = engine::run_normalization(
            &self.colors,
            self.selected,
            detected.mode,
            detected.space,
            NormalizationTrigger::Initialization,
            confirm,
        )
        .await;

        match outcome {
            NormalizationOutcome::AlreadySatisfied => {
                self.space = detected.space;
                self.mode = detected.mode;
                true
            }
            NormalizationOutcome::Applied { colors, reset_history } => {
                self.space = detected.space;
                self.mode = detected.mode;
                self.colors = colors;
                if reset_history {
                    self.history.reset(self.colors.clone());
                } else {
                    self.history.push(self.colors.clone());
                }
                true
            }
            NormalizationOutcome::Declined => false,
        }
    }

    /// Replaces the anchor color with a hex value.
    ///
    /// The input is canonicalized (lowercase six-digit form); malformed hex
    /// is ignored. Returns whether the color changed.
    pub fn set_selected_hex(&mut self, hex: &str) -> bool {
        let Some(rgb) = RgbColor::parse_hex(hex) else {
            return false;
        };

        let canonical = rgb.to_hex();
        if self.colors[self.selected] == canonical {
            return false;
        }

        self.colors[self.selected] = canonical;
        self.record();
        true
    }

    /// Replaces the anchor color from an (h, s, l) triple in the active space.
    pub fn set_selected_components(&mut self, h: f64, s: f64, l: f64) {
        self.colors[self.selected] = self.space.to_hex(h, s, l);
        self.record();
    }

    /// Applies a wheel edit: a new hue/saturation point for `index`.
    ///
    /// Under shared lightness only the touched color changes (keeping the
    /// shared lightness) and it becomes the anchor. Under shared
    /// hue/saturation the point propagates to every color, each keeping its
    /// own lightness.
    pub fn set_wheel_point(&mut self, h: f64, s: f64, index: usize) {
        if index >= self.colors.len() {
            return;
        }

        match self.mode {
            ConstraintMode::SharedLightness => {
                let Some((_, _, shared_l)) = self.space.components(self.selected_color()) else {
                    return;
                };
                self.colors[index] = self.space.to_hex(h, s, shared_l);
                self.selected = index;
            }
            ConstraintMode::SharedHueSaturation => {
                let space = self.space;
                self.colors = self
                    .colors
                    .iter()
                    .map(|color| match space.components(color) {
                        Some((_, _, own_l)) => space.to_hex(h, s, own_l),
                        None => color.clone(),
                    })
                    .collect();
            }
        }
        self.record();
    }

    /// Applies a slider edit: a new lightness for `index`.
    ///
    /// Mirror image of [`Self::set_wheel_point`]: per-color under shared
    /// hue/saturation (taking the shared hue/saturation from the anchor),
    /// propagated to all colors under shared lightness.
    pub fn set_lightness(&mut self, l: f64, index: usize) {
        if index >= self.colors.len() {
            return;
        }

        match self.mode {
            ConstraintMode::SharedHueSaturation => {
                let Some((shared_h, shared_s, _)) = self.space.components(self.selected_color())
                else {
                    return;
                };
                self.colors[index] = self.space.to_hex(shared_h, shared_s, l);
                self.selected = index;
            }
            ConstraintMode::SharedLightness => {
                let space = self.space;
                self.colors = self
                    .colors
                    .iter()
                    .map(|color| match space.components(color) {
                        Some((own_h, own_s, _)) => space.to_hex(own_h, own_s, l),
                        None => color.clone(),
                    })
                    .collect();
            }
        }
        self.record();
    }

    /// Switches the shared-axis constraint through the normalization protocol.
    ///
    /// Returns `false` if the user declined; the mode then stays unchanged.
    pub async fn set_mode<F, Fut>(&mut self, mode: ConstraintMode, confirm: F) -> bool
    where
        F: FnOnce(NormalizationTrigger) -> Fut,
        Fut: Future<Output = bool>,
    {
        if self.mode == mode {
            return true;
        }

        let outcome = engine::run_normalization(
            &self.colors,
            self.selected,
            mode,
            self.space,
            NormalizationTrigger::ModeChange,
            confirm,
        )
        .await;

        match outcome {
            NormalizationOutcome::AlreadySatisfied => {
                self.mode = mode;
                true
            }
            NormalizationOutcome::Applied { colors, .. } => {
                self.mode = mode;
                self.colors = colors;
                self.record();
                true
            }
            NormalizationOutcome::Declined => false,
        }
    }

    /// Switches the color space through the normalization protocol.
    ///
    /// Returns `false` if the user declined; the space then stays unchanged.
    pub async fn set_space<F, Fut>(&mut self, space: ColorSpace, confirm: F) -> bool
    where
        F: FnOnce(NormalizationTrigger) -> Fut,
        Fut: Future<Output = bool>,
    {
        if self.space == space {
            return true;
        }

        let outcome = engine::run_normalization(
            &self.colors,
            self.selected,
            self.mode,
            space,
            NormalizationTrigger::ColorSpaceChange,
            confirm,
        )
        .await;

        match outcome {
            NormalizationOutcome::AlreadySatisfied => {
                self.space = space;
                true
            }
            NormalizationOutcome::Applied { colors, .. } => {
                self.space = space;
                self.colors = colors;
                self.record();
                true
            }
            NormalizationOutcome::Declined => false,
        }
    }

    /// Spreads an axis evenly across the selection.
    pub fn spread(&mut self, axis: SpreadAxis) {
        self.colors = spread::spread_axis(&self.colors, axis, self.selected, self.space);
        self.record();
    }

    /// Steps the color set back one history state.
    pub fn undo(&mut self) {
        self.history.undo();
        self.colors = self.history.present().to_vec();
    }

    /// Re-applies the most recently undone color set.
    pub fn redo(&mut self) {
        self.history.redo();
        self.colors = self.history.present().to_vec();
    }

    /// Whether an undo step is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo step is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    fn record(&mut self) {
        debug!(colors = ?self.colors, "recording color edit");
        self.history.push(self.colors.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::compare;

    fn set(colors: &[&str]) -> Vec<String> {
        colors.iter().map(|c| (*c).to_string()).collect()
    }

    fn defaults() -> Constraint {
        Constraint::default()
    }

    #[test]
    fn test_empty_selection_gets_fallback_color() {
        let session = PickerSession::new(Vec::new(), defaults());
        assert_eq!(session.colors(), [FALLBACK_COLOR.to_string()].as_slice());
        assert_eq!(session.selected_color(), FALLBACK_COLOR);
    }

    #[test]
    fn test_set_selected_hex_canonicalizes() {
        let mut session = PickerSession::new(set(&["#ff0000"]), defaults());
        assert!(session.set_selected_hex("#ABCDEF"));
        assert_eq!(session.selected_color(), "#abcdef");
        assert!(session.set_selected_hex("0f0"));
        assert_eq!(session.selected_color(), "#00ff00");
    }

    #[test]
    fn test_set_selected_hex_rejects_malformed() {
        let mut session = PickerSession::new(set(&["#ff0000"]), defaults());
        assert!(!session.set_selected_hex("#nothex"));
        assert_eq!(session.selected_color(), "#ff0000");
        assert!(!session.can_undo());
    }

    #[test]
    fn test_wheel_edit_shared_lightness_updates_one_color() {
        let mut session = PickerSession::new(set(&["#ff0000", "#00ff00"]), defaults());
        session.set_wheel_point(2.0 / 3.0, 1.0, 1);

        // Touched color becomes blue at the shared lightness and is now
        // the anchor.
        assert_eq!(session.colors()[0], "#ff0000");
        assert_eq!(session.colors()[1], "#0000ff");
        assert_eq!(session.selected_index(), 1);
    }

    #[test]
    fn test_lightness_edit_shared_lightness_propagates() {
        let mut session = PickerSession::new(set(&["#ff0000", "#00ff00"]), defaults());
        session.set_lightness(0.25, 0);

        for color in session.colors() {
            let (_, _, l) = ColorSpace::Hsl.components(color).unwrap();
            assert!((l - 0.25).abs() < 0.01, "{color} did not adopt lightness");
        }
        // Hues survive
        assert!(compare::same_hue_saturation(&session.colors()[0], "#ff0000", ColorSpace::Hsl));
        assert!(compare::same_hue_saturation(&session.colors()[1], "#00ff00", ColorSpace::Hsl));
    }

    #[test]
    fn test_edits_record_history() {
        let mut session = PickerSession::new(set(&["#ff0000"]), defaults());
        session.set_selected_hex("#00ff00");
        session.set_selected_hex("#0000ff");

        session.undo();
        assert_eq!(session.selected_color(), "#00ff00");
        session.undo();
        assert_eq!(session.selected_color(), "#ff0000");
        session.redo();
        assert_eq!(session.selected_color(), "#00ff00");
    }

    #[tokio::test]
    async fn test_initialize_adopts_detected_constraint() {
        // Red shades satisfy shared hue/saturation in HSL; no prompt.
        let mut session = PickerSession::new(set(&["#330000", "#990000", "#ff0000"]), defaults());
        let confirmed = session.initialize(|_| async { false }).await;

        assert!(confirmed);
        assert_eq!(session.mode(), ConstraintMode::SharedHueSaturation);
        assert_eq!(session.space(), ColorSpace::Hsl);
        assert_eq!(session.colors(), set(&["#330000", "#990000", "#ff0000"]).as_slice());
    }

    #[tokio::test]
    async fn test_initialize_confirmed_resets_history() {
        // No constraint holds; default (HSL shared-lightness) is enforced
        // after confirmation and the history baseline is replaced.
        let mut session = PickerSession::new(set(&["#120905", "#cfd8ff", "#37ff00"]), defaults());
        let confirmed = session.initialize(|_| async { true }).await;

        assert!(confirmed);
        assert!(engine::satisfies(
            session.colors(),
            ConstraintMode::SharedLightness,
            ColorSpace::Hsl
        ));
        assert!(!session.can_undo(), "initialization must not be undoable");
    }

    #[tokio::test]
    async fn test_initialize_declined_keeps_colors() {
        let colors = set(&["#120905", "#cfd8ff", "#37ff00"]);
        let mut session = PickerSession::new(colors.clone(), defaults());
        let confirmed = session.initialize(|_| async { false }).await;

        assert!(!confirmed);
        assert_eq!(session.colors(), colors.as_slice());
    }

    #[tokio::test]
    async fn test_mode_change_declined_keeps_mode() {
        let mut session = PickerSession::new(set(&["#ff0000", "#00ff00", "#0000ff"]), defaults());
        let switched = session
            .set_mode(ConstraintMode::SharedHueSaturation, |_| async { false })
            .await;

        assert!(!switched);
        assert_eq!(session.mode(), ConstraintMode::SharedLightness);
        assert_eq!(session.colors(), set(&["#ff0000", "#00ff00", "#0000ff"]).as_slice());
    }

    #[tokio::test]
    async fn test_mode_change_confirmed_is_undoable() {
        let mut session = PickerSession::new(set(&["#ff0000", "#00ff00", "#0000ff"]), defaults());
        let switched = session
            .set_mode(ConstraintMode::SharedHueSaturation, |_| async { true })
            .await;

        assert!(switched);
        assert_eq!(session.mode(), ConstraintMode::SharedHueSaturation);
        assert!(engine::satisfies(
            session.colors(),
            ConstraintMode::SharedHueSaturation,
            ColorSpace::Hsl
        ));

        // Unlike initialization, a mode change is an ordinary edit.
        assert!(session.can_undo());
        session.undo();
        assert_eq!(session.colors(), set(&["#ff0000", "#00ff00", "#0000ff"]).as_slice());
    }

    #[tokio::test]
    async fn test_space_change_on_conforming_set() {
        // A single anchor-matching pair: switching space still has to keep
        // the colors when they already satisfy the constraint there.
        let mut session = PickerSession::new(set(&["#ff0000"]), defaults());
        let switched = session.set_space(ColorSpace::Okhsl, |_| async { true }).await;

        assert!(switched);
        assert_eq!(session.space(), ColorSpace::Okhsl);
        assert_eq!(session.colors(), set(&["#ff0000"]).as_slice());
    }

    #[test]
    fn test_spread_records_history() {
        let mut session = PickerSession::new(
            set(&["#ff0000", "#ff0000", "#ff0000", "#ff0000"]),
            defaults(),
        );
        session.spread(SpreadAxis::Hue);

        assert!(session.can_undo());
        let hues: Vec<f64> = session
            .colors()
            .iter()
            .map(|c| ColorSpace::Hsl.components(c).unwrap().0)
            .collect();
        assert!((hues[2] - 0.5).abs() < 0.01);
    }
}
