//! End-to-end tests for `tintgrid normalize` command.

use std::process::Command;

/// Path to the tintgrid binary
fn tintgrid_bin() -> &'static str {
    env!("CARGO_BIN_EXE_tintgrid")
}

#[test]
fn test_normalize_shared_lightness_json() {
    // Light blue must adopt the dark red anchor's lightness
    let output = Command::new(tintgrid_bin())
        .args([
            "normalize",
            "--yes",
            "--mode",
            "shared-lightness",
            "--space",
            "hsl",
            "--json",
            "#660000",
            "#aaaaff",
        ])
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

    assert_eq!(result["space"], "hsl");
    assert_eq!(result["mode"], "shared-lightness");
    assert_eq!(result["changed"], true);

    let colors = result["colors"].as_array().expect("Should have colors array");
    assert_eq!(colors[0], "#660000", "Anchor is never modified");
    assert_ne!(colors[1], "#aaaaff");
}

#[test]
fn test_normalize_already_satisfied() {
    let output = Command::new(tintgrid_bin())
        .args([
            "normalize",
            "--yes",
            "--mode",
            "shared-lightness",
            "--space",
            "hsl",
            "--json",
            "#ff0000",
            "#00ff00",
            "#0000ff",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");

    assert_eq!(result["changed"], false);
    let colors = result["colors"].as_array().expect("Should have colors array");
    assert_eq!(colors[0], "#ff0000");
    assert_eq!(colors[1], "#00ff00");
    assert_eq!(colors[2], "#0000ff");
}

#[test]
fn test_normalize_declined_without_yes() {
    // stdin is closed, so the confirmation prompt reads EOF and declines
    let output = Command::new(tintgrid_bin())
        .args([
            "normalize",
            "--mode",
            "shared-hue-saturation",
            "--space",
            "hsl",
            "#ff0000",
            "#00ff00",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(3), "Declined prompt should exit 3");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("declined"));
}

#[test]
fn test_normalize_rejects_out_of_range_anchor() {
    let output = Command::new(tintgrid_bin())
        .args(["normalize", "--yes", "--anchor", "9", "#ff0000", "#00ff00"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2), "Bad anchor should exit 2");
}

#[test]
fn test_normalize_randomize_keeps_shared_axis() {
    let output = Command::new(tintgrid_bin())
        .args([
            "normalize",
            "--yes",
            "--randomize",
            "--mode",
            "shared-hue-saturation",
            "--space",
            "hsl",
            "--json",
            "#ff0000",
            "#00ff00",
            "#0000ff",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let result: serde_json::Value = serde_json::from_str(&stdout).expect("Should parse JSON");

    assert_eq!(result["changed"], true);
    let colors = result["colors"].as_array().expect("Should have colors array");
    assert_eq!(colors[0], "#ff0000");
    // Every result is a red: green and blue channels stay below the red one
    for color in colors.iter().skip(1) {
        let hex = color.as_str().expect("hex string");
        let r = u8::from_str_radix(&hex[1..3], 16).unwrap();
        let g = u8::from_str_radix(&hex[3..5], 16).unwrap();
        let b = u8::from_str_radix(&hex[5..7], 16).unwrap();
        assert!(r >= g && r >= b, "{hex} is not a red");
    }
}
