//! Group normalization command.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tokio::runtime::Runtime;

use crate::cli::common::{ExitCode, ModeArg, SpaceArg};
use crate::color::ColorSpace;
use crate::config::Config;
use crate::picker::{
    run_normalization, ConstraintMode, NormalizationOutcome, NormalizationTrigger,
};

/// Rewrite a color set to satisfy a shared-axis constraint
#[derive(Debug, Clone, Args)]
pub struct NormalizeArgs {
    /// Hex colors in selection order
    #[arg(required = true)]
    pub colors: Vec<String>,

    /// Target constraint mode (defaults to the configured mode)
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Color space the constraint holds in (defaults to the configured space)
    #[arg(long, value_enum)]
    pub space: Option<SpaceArg>,

    /// Anchor color index; this color is never modified
    #[arg(long, default_value_t = 0)]
    pub anchor: usize,

    /// Draw random free-axis values instead of keeping each color's own
    #[arg(long)]
    pub randomize: bool,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct NormalizeResponse {
    space: ColorSpace,
    mode: ConstraintMode,
    changed: bool,
    colors: Vec<String>,
}

impl NormalizeArgs {
    /// Execute the normalize command.
    ///
    /// Prompts for confirmation before rewriting unless `--yes` is given;
    /// a declined prompt maps to its own exit code so scripts can branch.
    pub fn execute(&self) -> Result<ExitCode> {
        if self.anchor >= self.colors.len() {
            eprintln!(
                "Error: anchor index {} out of range for {} colors",
                self.anchor,
                self.colors.len()
            );
            return Ok(ExitCode::InvalidInput);
        }

        let config = Config::load().unwrap_or_default();
        let space = self.space.map_or(config.picker.color_space, ColorSpace::from);
        let mode = self.mode.map_or(config.picker.mode, ConstraintMode::from);
        let trigger = if self.randomize {
            NormalizationTrigger::ModeChange
        } else {
            NormalizationTrigger::ColorSpaceChange
        };

        let assume_yes = self.yes;
        let count = self.colors.len();
        let runtime = Runtime::new().context("Failed to start async runtime")?;
        let outcome = runtime.block_on(run_normalization(
            &self.colors,
            self.anchor,
            mode,
            space,
            trigger,
            move |_| async move {
                if assume_yes {
                    true
                } else {
                    prompt_confirmation(count, mode, space)
                }
            },
        ));

        let response = match outcome {
            NormalizationOutcome::AlreadySatisfied => NormalizeResponse {
                space,
                mode,
                changed: false,
                colors: self.colors.clone(),
            },
            NormalizationOutcome::Applied { colors, .. } => NormalizeResponse {
                space,
                mode,
                changed: true,
                colors,
            },
            NormalizationOutcome::Declined => {
                eprintln!("Normalization declined; colors unchanged");
                return Ok(ExitCode::Declined);
            }
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            if !response.changed {
                println!("(already satisfies {} {})", response.space, response.mode);
            }
            for color in &response.colors {
                println!("{color}");
            }
        }

        Ok(ExitCode::Success)
    }
}

fn prompt_confirmation(count: usize, mode: ConstraintMode, space: ColorSpace) -> bool {
    eprint!("Rewrite {count} colors to satisfy {space} {mode}? [y/N] ");
    let _ = io::stderr().flush();

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim(), "y" | "Y" | "yes")
}
