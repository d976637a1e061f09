//! Core 2-D particle field ("constellation") simulation library.
//!
//! Main components:
//! - [`particle`] — particles and particle sets.
//! - [`bounds`] — the padded canvas rectangle particles bounce inside.
//! - [`target`] — the pointer-driven attraction target.
//! - [`phases`] — per-frame physics phases (attraction, integration, bounce).
//! - [`neighbors`] — brute-force nearest-neighbour search and link building.
//! - [`frame`] — draw-command lists produced each frame.
//! - [`svg`] — SVG serialization of a frame.
//! - [`field`] — the owned animator state tying everything together.
//! - [`mount`] — attaching a field to a host page and its drawing surface.
//! - [`export`] — writing stepped frames to disk.
//! - [`config`] — tunables, loaded from TOML.
//! - [`error`] — error type shared by the fallible operations.

pub mod bounds;
pub mod config;
pub mod error;
pub mod export;
pub mod field;
pub mod frame;
pub mod mount;
pub mod neighbors;
pub mod particle;
pub mod phases;
pub mod svg;
pub mod target;

pub use config::FieldConfig;
pub use error::{FieldError, Result};
pub use field::ParticleField;
