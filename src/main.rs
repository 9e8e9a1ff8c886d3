//! TintGrid CLI Binary
//!
//! Headless access to the TintGrid color core: convert colors between
//! spaces, inspect which shared-axis constraint a set satisfies, normalize
//! a set onto a constraint, spread an axis evenly, and check WCAG contrast.
//!
//! # Usage
//!
//! ```bash
//! tintgrid convert "#3b82f6" --space okhsl
//! tintgrid inspect "#ff0000" "#00ff00" "#0000ff"
//! tintgrid normalize --mode shared-lightness --yes "#660000" "#aaaaff"
//! tintgrid spread hue "#ff0000" "#ff0000" "#ff0000"
//! tintgrid contrast "#000000" "#ffffff"
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tintgrid::cli::{
    ContrastArgs, ConvertArgs, ExitCode, InspectArgs, NormalizeArgs, SpreadArgs,
};

/// TintGrid - palette color math and group-edit tooling
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a hex color to HSL or OKHSL components
    Convert(ConvertArgs),
    /// Check the WCAG contrast ratio between two hex colors
    Contrast(ContrastArgs),
    /// Detect which shared-axis constraint a set of colors satisfies
    Inspect(InspectArgs),
    /// Rewrite a color set to satisfy a shared-axis constraint
    Normalize(NormalizeArgs),
    /// Evenly redistribute one axis across a set of colors
    Spread(SpreadArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let code = match cli.command {
        Commands::Convert(args) => code_from(args.execute()?),
        Commands::Contrast(args) => code_from(args.execute()?),
        Commands::Inspect(args) => code_from(args.execute()?),
        Commands::Normalize(args) => args.execute()?,
        Commands::Spread(args) => code_from(args.execute()?),
    };

    code.exit();
}

fn code_from(ok: bool) -> ExitCode {
    if ok {
        ExitCode::Success
    } else {
        ExitCode::InvalidInput
    }
}
