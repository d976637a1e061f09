use glam::Vec2;

use crate::{config::FieldConfig, neighbors, particle::ParticleSet};

/// One drawing instruction in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    /// Fills the whole canvas.
    Background { size: Vec2 },
    /// A neighbour link; `opacity` is in `[0, 1]`.
    Line { from: Vec2, to: Vec2, opacity: f32 },
    /// A particle dot.
    Circle { center: Vec2, radius: f32 },
}

/// Everything drawn for one frame, in paint order: background, links, dots.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }
}

/// Link opacity: 1 at zero distance, fading linearly to 0 at `threshold`.
#[inline]
pub fn link_opacity(distance: f32, threshold: f32) -> f32 {
    (1.0 - distance / threshold).max(0.0)
}

/// Builds the draw commands for the current particle positions.
pub fn render(particles: &ParticleSet, cfg: &FieldConfig) -> Frame {
    let points = &particles.points;
    let links = neighbors::links(points, cfg.neighbors, cfg.link_threshold);

    let mut commands = Vec::with_capacity(1 + links.len() + points.len());
    commands.push(DrawCommand::Background {
        size: Vec2::new(cfg.width, cfg.height),
    });
    commands.extend(links.iter().map(|l| DrawCommand::Line {
        from: points[l.from].pos,
        to: points[l.to].pos,
        opacity: link_opacity(l.distance, cfg.link_threshold),
    }));
    commands.extend(points.iter().map(|p| DrawCommand::Circle {
        center: p.pos,
        radius: cfg.dot_radius,
    }));

    tracing::trace!(lines = links.len(), dots = points.len(), "rendered frame");
    Frame { commands }
}
