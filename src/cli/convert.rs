//! Color conversion command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::common::SpaceArg;
use crate::color::ColorSpace;
use crate::models::RgbColor;

/// Convert a hex color to HSL or OKHSL components
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Hex color to convert (e.g. "#3b82f6" or "f00")
    pub color: String,

    /// Color space to decode into
    #[arg(long, value_enum, default_value = "hsl")]
    pub space: SpaceArg,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ConvertResponse {
    hex: String,
    space: ColorSpace,
    /// Hue in degrees for display; the core works in turns.
    hue: f64,
    saturation: f64,
    lightness: f64,
}

impl ConvertArgs {
    /// Execute the convert command.
    ///
    /// Returns false for malformed input so main can map it to an exit code.
    pub fn execute(&self) -> Result<bool> {
        let space = ColorSpace::from(self.space);

        let Some(rgb) = RgbColor::parse_hex(&self.color) else {
            eprintln!("Error: '{}' is not a valid hex color", self.color);
            return Ok(false);
        };
        let Some((h, s, l)) = space.components(&rgb.to_hex()) else {
            eprintln!("Error: '{}' is not a valid hex color", self.color);
            return Ok(false);
        };

        let response = ConvertResponse {
            hex: rgb.to_hex(),
            space,
            hue: h * 360.0,
            saturation: s,
            lightness: l,
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            println!("{}", response.hex);
            println!("  space:      {}", response.space);
            println!("  hue:        {:.2}°", response.hue);
            println!("  saturation: {:.4}", response.saturation);
            println!("  lightness:  {:.4}", response.lightness);
        }

        Ok(true)
    }
}
