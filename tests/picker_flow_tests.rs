//! Full picker-session flows over the library API.
//!
//! These exercise the same paths a UI host would drive: initialize a
//! selection, switch constraints through the confirmation protocol, spread
//! an axis, and walk the history.

use tintgrid::color::{compare, ColorSpace};
use tintgrid::picker::{
    detect_constraint, Constraint, ConstraintMode, PickerSession, SpreadAxis,
};

fn set(colors: &[&str]) -> Vec<String> {
    colors.iter().map(|c| (*c).to_string()).collect()
}

#[tokio::test]
async fn test_group_edit_flow_mode_switch_then_undo() {
    // Primaries share HSL lightness; initialization adopts that silently.
    let mut session = PickerSession::new(
        set(&["#ff0000", "#00ff00", "#0000ff"]),
        Constraint::default(),
    );
    assert!(session.initialize(|_| async { true }).await);
    assert_eq!(session.mode(), ConstraintMode::SharedLightness);
    assert!(!session.can_undo());

    // Switching to slider editing needs a confirmed normalization.
    assert!(
        session
            .set_mode(ConstraintMode::SharedHueSaturation, |_| async { true })
            .await
    );
    for color in &session.colors()[1..] {
        assert!(
            compare::same_hue_saturation(color, "#ff0000", ColorSpace::Hsl),
            "{color} does not share the anchor's hue"
        );
    }

    // The switch is a normal edit: undo restores the primaries.
    assert!(session.can_undo());
    session.undo();
    assert_eq!(
        session.colors(),
        set(&["#ff0000", "#00ff00", "#0000ff"]).as_slice()
    );
    session.redo();
    assert!(compare::all_same_hue_saturation(session.colors(), ColorSpace::Hsl));
}

#[tokio::test]
async fn test_wheel_edit_after_spread_stays_on_constraint() {
    let mut session = PickerSession::new(
        set(&["#ff0000", "#ff0000", "#ff0000", "#ff0000"]),
        Constraint::default(),
    );
    assert!(session.initialize(|_| async { true }).await);

    session.spread(SpreadAxis::Hue);
    assert!(compare::all_same_lightness(session.colors(), ColorSpace::Hsl));

    // Wheel edit on a non-anchor color keeps the shared lightness and
    // moves the anchor there.
    session.set_wheel_point(0.1, 0.8, 2);
    assert_eq!(session.selected_index(), 2);
    assert!(compare::all_same_lightness(session.colors(), ColorSpace::Hsl));

    // Two recorded edits on top of the baseline.
    session.undo();
    session.undo();
    assert_eq!(
        session.colors(),
        set(&["#ff0000", "#ff0000", "#ff0000", "#ff0000"]).as_slice()
    );
}

#[tokio::test]
async fn test_declined_initialization_leaves_selection_untouched() {
    let colors = set(&["#120905", "#cfd8ff", "#37ff00"]);
    let mut session = PickerSession::new(colors.clone(), Constraint::default());

    assert!(!session.initialize(|_| async { false }).await);
    assert_eq!(session.colors(), colors.as_slice());
    assert!(!session.can_undo());
}

#[tokio::test]
async fn test_edit_after_undo_discards_redo_branch() {
    let mut session = PickerSession::new(set(&["#ff0000"]), Constraint::default());
    session.set_selected_hex("#00ff00");
    session.set_selected_hex("#0000ff");

    session.undo();
    assert!(session.can_redo());

    // A fresh edit from the middle of the history discards the branch.
    session.set_selected_hex("#ffff00");
    assert!(!session.can_redo());
    session.undo();
    assert_eq!(session.selected_color(), "#00ff00");
}

#[test]
fn test_detect_constraint_priority_over_spaces() {
    // Grays share lightness in HSL and hue/saturation trivially; the HSL
    // shared-lightness candidate wins because it is tested first.
    let colors = set(&["#808080", "#808080", "#808080"]);
    let detected = detect_constraint(&colors, Constraint::default());
    assert_eq!(detected.space, ColorSpace::Hsl);
    assert_eq!(detected.mode, ConstraintMode::SharedLightness);
}
