//! Command-line interface of the `constellation` binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use field_core::FieldConfig;

#[derive(Debug, Parser)]
#[command(name = "constellation", version, about = "Animated particle constellation")]
pub struct Cli {
    /// TOML file with field settings; missing keys keep their defaults.
    #[arg(short, long, env = "CONSTELLATION_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Override the number of particles.
    #[arg(long, global = true)]
    pub count: Option<usize>,

    /// Fix the RNG seed for a reproducible field.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Log at debug level.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open the interactive viewer (default).
    Run,

    /// Step the field without a window and write every frame as SVG.
    Export {
        #[arg(long, default_value_t = 120)]
        frames: usize,

        #[arg(short, long, default_value = "frames")]
        out: PathBuf,

        /// Hold the pointer at this canvas position while exporting.
        #[arg(long, num_args = 2, value_names = ["X", "Y"], allow_negative_numbers = true)]
        pointer: Option<Vec<f32>>,
    },
}

impl Cli {
    /// Loads the config file (if any), applies command-line overrides and
    /// validates the result.
    pub fn field_config(&self) -> field_core::Result<FieldConfig> {
        let mut cfg = match &self.config {
            Some(path) => FieldConfig::load(path)?,
            None => FieldConfig::default(),
        };
        if let Some(count) = self.count {
            cfg.count = count;
        }
        if let Some(seed) = self.seed {
            cfg.seed = Some(seed);
        }
        cfg.validate()?;
        Ok(cfg)
    }
}
