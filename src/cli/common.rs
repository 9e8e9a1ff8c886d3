//! Shared CLI plumbing: exit codes and clap-facing value enums.

use clap::ValueEnum;

use crate::color::ColorSpace;
use crate::picker::{ConstraintMode, SpreadAxis};

/// Process exit codes used by all commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,
    /// Invalid input (malformed color, bad arguments).
    InvalidInput = 2,
    /// The user declined a normalization prompt.
    Declined = 3,
}

impl ExitCode {
    /// Terminates the process with this exit code.
    pub fn exit(self) -> ! {
        std::process::exit(self as i32);
    }
}

/// Color space selector shared by all commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SpaceArg {
    /// Plain cylindrical sRGB HSL.
    Hsl,
    /// Perceptually uniform OKHSL.
    Okhsl,
}

impl From<SpaceArg> for ColorSpace {
    fn from(arg: SpaceArg) -> Self {
        match arg {
            SpaceArg::Hsl => Self::Hsl,
            SpaceArg::Okhsl => Self::Okhsl,
        }
    }
}

/// Shared-axis constraint selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// All colors share one lightness (wheel editing).
    SharedLightness,
    /// All colors share one hue and saturation (slider editing).
    SharedHueSaturation,
}

impl From<ModeArg> for ConstraintMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::SharedLightness => Self::SharedLightness,
            ModeArg::SharedHueSaturation => Self::SharedHueSaturation,
        }
    }
}

/// Spread axis selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AxisArg {
    /// Rotate hues evenly around the wheel.
    Hue,
    /// Evenly space saturation.
    Saturation,
    /// Evenly space lightness.
    Lightness,
}

impl From<AxisArg> for SpreadAxis {
    fn from(arg: AxisArg) -> Self {
        match arg {
            AxisArg::Hue => Self::Hue,
            AxisArg::Saturation => Self::Saturation,
            AxisArg::Lightness => Self::Lightness,
        }
    }
}
