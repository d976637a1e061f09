use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::{
    error::{FieldError, Result},
    field::ParticleField,
    svg::Svg,
};

/// Steps `field` `frames` times, writing each frame to
/// `dir/frame-NNNN.svg`. The directory is created if needed.
///
/// ### Returns
/// The paths written, in frame order.
pub fn export_frames(field: &mut ParticleField, frames: usize, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).map_err(|source| FieldError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(frames);
    for i in 0..frames {
        let frame = field.tick();
        let doc = Svg {
            frame: &frame,
            palette: &field.config().palette,
        }
        .to_string();

        let path = dir.join(format!("frame-{i:04}.svg"));
        fs::write(&path, doc).map_err(|source| FieldError::Write {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }

    info!(frames, dir = %dir.display(), "exported frames");
    Ok(written)
}
