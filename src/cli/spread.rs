//! Axis spread command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::common::{AxisArg, SpaceArg};
use crate::color::ColorSpace;
use crate::picker::{spread_axis, SpreadAxis};

/// Evenly redistribute one axis across a set of colors
#[derive(Debug, Clone, Args)]
pub struct SpreadArgs {
    /// Axis to spread
    #[arg(value_enum)]
    pub axis: AxisArg,

    /// Hex colors in selection order
    #[arg(required = true)]
    pub colors: Vec<String>,

    /// Anchor color index (kept fixed for hue spreads)
    #[arg(long, default_value_t = 0)]
    pub anchor: usize,

    /// Color space to spread in
    #[arg(long, value_enum, default_value = "hsl")]
    pub space: SpaceArg,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct SpreadResponse {
    axis: SpreadAxis,
    space: ColorSpace,
    colors: Vec<String>,
    changed: bool,
}

impl SpreadArgs {
    /// Execute the spread command.
    pub fn execute(&self) -> Result<bool> {
        if self.anchor >= self.colors.len() {
            eprintln!(
                "Error: anchor index {} out of range for {} colors",
                self.anchor,
                self.colors.len()
            );
            return Ok(false);
        }

        let axis = SpreadAxis::from(self.axis);
        let space = ColorSpace::from(self.space);
        let result = spread_axis(&self.colors, axis, self.anchor, space);

        let response = SpreadResponse {
            axis,
            space,
            changed: result != self.colors,
            colors: result,
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            if !response.changed {
                println!("(no change: too few colors for a {} spread)", response.axis);
            }
            for color in &response.colors {
                println!("{color}");
            }
        }

        Ok(true)
    }
}
