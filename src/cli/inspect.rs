//! Constraint inspection command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::color::ColorSpace;
use crate::config::Config;
use crate::picker::{detect_constraint, Constraint, ConstraintMode};

/// Detect which shared-axis constraint a set of colors satisfies
#[derive(Debug, Clone, Args)]
pub struct InspectArgs {
    /// Hex colors to inspect, in selection order
    #[arg(required = true)]
    pub colors: Vec<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct InspectResponse {
    space: ColorSpace,
    mode: ConstraintMode,
    detected: bool,
    colors: Vec<ColorReport>,
}

#[derive(Debug, Serialize)]
struct ColorReport {
    hex: String,
    valid: bool,
    hsl: Option<(f64, f64, f64)>,
    okhsl: Option<(f64, f64, f64)>,
}

impl InspectArgs {
    /// Execute the inspect command.
    pub fn execute(&self) -> Result<bool> {
        let config = Config::load().unwrap_or_default();
        let default = Constraint {
            space: config.picker.color_space,
            mode: config.picker.mode,
        };

        let detected = detect_constraint(&self.colors, default);
        // "detected" is false when the default came back as a fallback
        let is_fallback = self.colors.len() > 1
            && !crate::picker::engine::satisfies(&self.colors, detected.mode, detected.space);

        let colors = self
            .colors
            .iter()
            .map(|hex| ColorReport {
                hex: hex.clone(),
                valid: ColorSpace::Hsl.components(hex).is_some(),
                hsl: ColorSpace::Hsl.components(hex),
                okhsl: ColorSpace::Okhsl.components(hex),
            })
            .collect();

        let response = InspectResponse {
            space: detected.space,
            mode: detected.mode,
            detected: !is_fallback && self.colors.len() > 1,
            colors,
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            if response.detected {
                println!("constraint: {} / {}", response.space, response.mode);
            } else {
                println!(
                    "constraint: none detected (defaulting to {} / {})",
                    response.space, response.mode
                );
            }
            for report in &response.colors {
                match report.hsl {
                    Some((h, s, l)) => println!(
                        "  {}  hsl({:.1}°, {:.3}, {:.3})",
                        report.hex,
                        h * 360.0,
                        s,
                        l
                    ),
                    None => println!("  {}  (malformed)", report.hex),
                }
            }
        }

        Ok(true)
    }
}
