//! Attaching a [`ParticleField`] to a host page.
//!
//! The host supplies a [`Page`] that can hand out a drawing [`Surface`] by
//! id and report which controls it shows. [`mount`] is the setup routine:
//! without the surface it quietly does nothing.

use glam::Vec2;
use tracing::{debug, warn};

use crate::{config::FieldConfig, field::ParticleField, frame::Frame};

/// Something a finished frame can be drawn into.
pub trait Surface {
    /// Replaces whatever the surface currently shows with `frame`.
    fn present(&mut self, frame: &Frame);
}

/// The host environment the field is mounted into.
pub trait Page {
    type Surface: Surface;

    /// Looks up a drawing surface by id.
    fn surface(&mut self, id: &str) -> Option<Self::Surface>;

    /// Whether the page shows a control with this id.
    fn has_control(&self, id: &str) -> bool;
}

/// A field bound to its surface, ready to be driven by host events.
#[derive(Debug)]
pub struct Mounted<S> {
    field: ParticleField,
    surface: S,
    randomize_id: Option<String>,
}

impl<S: Surface> Mounted<S> {
    /// Steps the field once and presents the new frame.
    pub fn frame(&mut self) {
        let frame = self.field.tick();
        self.surface.present(&frame);
    }

    /// Pointer moved over the surface, which sits at
    /// `rect_min .. rect_min + rect_size` on screen.
    pub fn pointer_moved(&mut self, screen: Vec2, rect_min: Vec2, rect_size: Vec2) {
        self.field.pointer_moved_on_screen(screen, rect_min, rect_size);
    }

    pub fn pointer_left(&mut self) {
        self.field.pointer_left();
    }

    /// Handles activation of a page control.
    ///
    /// ### Returns
    /// `true` if the control was the attached randomize control and the
    /// field was reseeded.
    pub fn control_activated(&mut self, id: &str) -> bool {
        if self.randomize_id.as_deref() != Some(id) {
            return false;
        }
        self.field.randomize();
        true
    }

    pub fn has_randomize(&self) -> bool {
        self.randomize_id.is_some()
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

/// Sets up a particle field on `page`.
///
/// Looks up `cfg.mount.surface_id`; if the page has no such surface this
/// returns `None` before doing any other work. A config that fails
/// [`FieldConfig::validate`] is refused the same way, with a warning.
/// Otherwise the field is seeded and the randomize control is attached
/// when the page shows it.
pub fn mount<P: Page>(page: &mut P, cfg: FieldConfig) -> Option<Mounted<P::Surface>> {
    let Some(surface) = page.surface(&cfg.mount.surface_id) else {
        debug!(surface_id = %cfg.mount.surface_id, "no drawing surface, skipping particle field");
        return None;
    };
    if let Err(err) = cfg.validate() {
        warn!(surface_id = %cfg.mount.surface_id, %err, "refusing to mount particle field");
        return None;
    }

    let randomize_id = page
        .has_control(&cfg.mount.randomize_id)
        .then(|| cfg.mount.randomize_id.clone());
    debug!(
        surface_id = %cfg.mount.surface_id,
        randomize = randomize_id.is_some(),
        count = cfg.count,
        "mounted particle field"
    );

    Some(Mounted {
        field: ParticleField::new(cfg),
        surface,
        randomize_id,
    })
}
