use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while loading configuration or writing frames.
///
/// A missing drawing surface is deliberately not represented here; see
/// [`crate::mount::mount`].
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("failed to read config {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    ParseConfig(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FieldError>;
