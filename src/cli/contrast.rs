//! WCAG contrast command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::color::contrast;

/// Check the WCAG contrast ratio between two hex colors
#[derive(Debug, Clone, Args)]
pub struct ContrastArgs {
    /// First color (e.g. foreground)
    pub color_a: String,

    /// Second color (e.g. background)
    pub color_b: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ContrastResponse {
    ratio: f64,
    aa_normal: bool,
    aa_large: bool,
    aaa_normal: bool,
    text_on_b: &'static str,
}

impl ContrastArgs {
    /// Execute the contrast command.
    pub fn execute(&self) -> Result<bool> {
        let Some(ratio) = contrast::contrast_ratio(&self.color_a, &self.color_b) else {
            eprintln!("Error: both arguments must be valid hex colors");
            return Ok(false);
        };

        let response = ContrastResponse {
            ratio,
            aa_normal: ratio >= 4.5,
            aa_large: ratio >= 3.0,
            aaa_normal: ratio >= 7.0,
            text_on_b: contrast::contrast_color(&self.color_b),
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            println!("contrast ratio: {:.2}:1", response.ratio);
            println!("  AA  normal text: {}", pass(response.aa_normal));
            println!("  AA  large text:  {}", pass(response.aa_large));
            println!("  AAA normal text: {}", pass(response.aaa_normal));
            println!("  text on {}: {}", self.color_b, response.text_on_b);
        }

        Ok(true)
    }
}

fn pass(ok: bool) -> &'static str {
    if ok {
        "pass"
    } else {
        "fail"
    }
}
