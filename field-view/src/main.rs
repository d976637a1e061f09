//! Application entry point for the constellation viewer.
//!
//! Parses the command line, sets up logging, and either opens the
//! eframe/egui window (delegating everything to [`Viewer`]) or exports
//! frames headlessly.

mod cli;
mod viewer;

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use field_core::{FieldConfig, ParticleField, export::export_frames};
use glam::Vec2;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use cli::{Cli, Command};
use viewer::Viewer;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cfg = cli.field_config().context("loading field config")?;
    match cli.command {
        None | Some(Command::Run) => run_viewer(cfg),
        Some(Command::Export {
            frames,
            out,
            pointer,
        }) => export(cfg, frames, &out, pointer.as_deref()),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "constellation=debug,field_core=debug"
    } else {
        "constellation=info,field_core=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Opens the native window; all UI state and rendering live in [`Viewer`].
fn run_viewer(cfg: FieldConfig) -> anyhow::Result<()> {
    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Constellation",
        options,
        Box::new(move |_cc| Ok(Box::new(Viewer::new(cfg)))),
    )
    .map_err(|e| anyhow::anyhow!("viewer exited with an error: {e}"))
}

fn export(cfg: FieldConfig, frames: usize, out: &Path, pointer: Option<&[f32]>) -> anyhow::Result<()> {
    let mut field = ParticleField::new(cfg);
    if let Some(&[x, y]) = pointer {
        field.pointer_moved(Vec2::new(x, y));
    }

    let paths = export_frames(&mut field, frames, out)
        .with_context(|| format!("exporting to {}", out.display()))?;
    info!(written = paths.len(), "export finished");
    Ok(())
}
