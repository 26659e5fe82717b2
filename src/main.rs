//! Command-line entry point for particle-morph.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use particle_morph::{window, MorphConfig, ShapeId};

/// Gesture-steered particle cloud
#[derive(Parser)]
#[command(name = "particle-morph", version, about, long_about = None)]
struct Cli {
    /// Number of particles
    #[arg(short = 'n', long)]
    particles: Option<u32>,

    /// Starting shape: heart, iloveyou, valentines or bouquet
    #[arg(short, long)]
    shape: Option<ShapeId>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Where hand landmarks come from
    #[arg(long, value_enum, default_value_t = Hands::Keyboard)]
    hands: Hands,

    /// Run without any hand detector (same as --hands off)
    #[arg(long)]
    no_camera: bool,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Hands {
    /// Simulated hand, hold Q/W/E/T/P/F/H in the window
    Keyboard,
    /// JSON landmark sets, one per line on stdin
    Stdin,
    /// No hand detector
    Off,
}

impl Cli {
    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    fn hand_input(&self) -> window::HandInput {
        if self.no_camera {
            return window::HandInput::Off;
        }
        match self.hands {
            Hands::Keyboard => window::HandInput::Keyboard,
            Hands::Stdin => window::HandInput::Stdin,
            Hands::Off => window::HandInput::Off,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG still wins when set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level())).init();

    let mut config = match &cli.config {
        Some(path) => MorphConfig::from_json_file(path)
            .with_context(|| format!("Loading configuration from {}", path.display()))?,
        None => MorphConfig::default(),
    };
    if let Some(count) = cli.particles {
        config = config.with_particle_count(count);
    }
    if let Some(shape) = cli.shape {
        config = config.with_shape(shape);
    }
    config.validate().context("Invalid configuration")?;

    window::run(config, cli.hand_input())?;
    Ok(())
}
