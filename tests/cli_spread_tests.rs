//! End-to-end tests for `tintgrid spread` command.

use std::process::Command;

/// Path to the tintgrid binary
fn tintgrid_bin() -> &'static str {
    env!("CARGO_BIN_EXE_tintgrid")
}

#[test]
fn test_spread_hue_json() {
    // Four copies of red spread evenly around the wheel; the opposite
    // point (0.5 turns) is cyan.
    let output = Command::new(tintgrid_bin())
        .args(["spread", "hue", "#ff0000", "#ff0000", "#ff0000", "#ff0000", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value =
        serde_json::from_str(&stdout).expect("Should parse JSON output");

    assert_eq!(result["axis"], "hue");
    assert_eq!(result["changed"], true);

    let colors = result["colors"].as_array().expect("Should have colors array");
    assert_eq!(colors.len(), 4);
    assert_eq!(colors[0], "#ff0000", "Anchor stays fixed");
    assert_eq!(colors[2], "#00ffff");
}

#[test]
fn test_spread_lightness_preserves_rank() {
    let output = Command::new(tintgrid_bin())
        .args(["spread", "lightness", "#1a1a1a", "#e6e6e6", "#4d4d4d", "--json"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");

    assert_eq!(result["changed"], true);
    let colors: Vec<String> = result["colors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();

    // Darkest and lightest keep their extremes; the middle moves to the
    // midpoint. Grays stay gray so the hex bytes are equal per channel.
    assert_eq!(colors[0], "#1a1a1a");
    assert_eq!(colors[1], "#e6e6e6");
    assert_ne!(colors[2], "#4d4d4d");
}

#[test]
fn test_spread_two_colors_reports_no_change() {
    let output = Command::new(tintgrid_bin())
        .args(["spread", "lightness", "#111111", "#eeeeee"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("no change"));
    assert!(stdout.contains("#111111"));
}

#[test]
fn test_spread_rejects_out_of_range_anchor() {
    let output = Command::new(tintgrid_bin())
        .args(["spread", "hue", "#ff0000", "#00ff00", "--anchor", "5"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2), "Bad anchor should exit 2");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("out of range"));
}
