use std::{fs, path::Path};

use serde::Deserialize;
use tracing::debug;

use crate::{
    bounds::Bounds,
    error::{FieldError, Result},
};

/// An sRGB colour as `[r, g, b]`.
pub type Rgb = [u8; 3];

/// Ids the field looks up on its host page when mounting.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MountIds {
    /// Drawing surface the field renders into. Required.
    pub surface_id: String,
    /// Control that reseeds the field when activated. Optional on the page.
    pub randomize_id: String,
}

impl Default for MountIds {
    fn default() -> Self {
        Self {
            surface_id: "constellation".to_owned(),
            randomize_id: "randomize".to_owned(),
        }
    }
}

/// Colours used when a frame is painted.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    pub link: Rgb,
    pub dot: Rgb,
    /// Stroke width of neighbour links, in canvas units.
    pub link_width: f32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [11, 16, 32],
            link: [148, 163, 255],
            dot: [226, 232, 255],
            link_width: 1.0,
        }
    }
}

/// Tunables of the particle field.
///
/// Every field may be omitted from a TOML file; missing values fall back
/// to [`FieldConfig::default`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    pub width: f32,
    pub height: f32,
    /// Inward padding of the bounce boundary on every side.
    pub padding: f32,

    /// Number of particles seeded on setup and on every randomize.
    pub count: usize,
    /// Initial velocity components are drawn from `[-initial_speed, initial_speed]`.
    pub initial_speed: f32,

    /// Scale applied to `(target - pos) * strength` before it is added to velocity.
    pub attraction_factor: f32,
    /// Per-step velocity multiplier, in `(0, 1]`.
    pub damping: f32,

    /// Links are only drawn between particles closer than this.
    pub link_threshold: f32,
    /// How many nearest neighbours each particle links to.
    pub neighbors: usize,
    pub dot_radius: f32,

    /// Attraction strength while the pointer is over the surface.
    pub active_strength: f32,
    /// Attraction strength toward the canvas centre once the pointer leaves.
    pub idle_strength: f32,

    /// Fixed RNG seed for reproducible runs. `None` seeds from the OS.
    pub seed: Option<u64>,

    pub mount: MountIds,
    pub palette: Palette,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: 520.0,
            height: 320.0,
            padding: 30.0,
            count: 70,
            initial_speed: 0.6,
            attraction_factor: 0.0009,
            damping: 0.985,
            link_threshold: 120.0,
            neighbors: 2,
            dot_radius: 2.2,
            active_strength: 1.0,
            idle_strength: 0.25,
            seed: None,
            mount: MountIds::default(),
            palette: Palette::default(),
        }
    }
}

impl FieldConfig {
    /// Reads and validates a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| FieldError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), count = cfg.count, "loaded field config");
        Ok(cfg)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Checks that the geometry and physics constants describe a usable field.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(FieldError::InvalidConfig(msg));

        let floats = [
            ("width", self.width),
            ("height", self.height),
            ("padding", self.padding),
            ("initial_speed", self.initial_speed),
            ("attraction_factor", self.attraction_factor),
            ("damping", self.damping),
            ("link_threshold", self.link_threshold),
            ("dot_radius", self.dot_radius),
            ("active_strength", self.active_strength),
            ("idle_strength", self.idle_strength),
            ("palette.link_width", self.palette.link_width),
        ];
        for (name, value) in floats {
            if !value.is_finite() {
                return invalid(format!("{name} must be finite, got {value}"));
            }
            if value < 0.0 {
                return invalid(format!("{name} must not be negative, got {value}"));
            }
        }

        if self.width <= 0.0 || self.height <= 0.0 {
            return invalid(format!(
                "canvas must be positive, got {}x{}",
                self.width, self.height
            ));
        }
        if 2.0 * self.padding >= self.width || 2.0 * self.padding >= self.height {
            return invalid(format!(
                "padding {} leaves no room inside a {}x{} canvas",
                self.padding, self.width, self.height
            ));
        }
        if self.damping <= 0.0 || self.damping > 1.0 {
            return invalid(format!("damping must be in (0, 1], got {}", self.damping));
        }
        if self.link_threshold <= 0.0 {
            return invalid(format!(
                "link_threshold must be positive, got {}",
                self.link_threshold
            ));
        }
        Ok(())
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height, self.padding)
    }
}
