//! Per-frame physics phases for the particle field.
//!
//! A single [`step`] runs, over every particle:
//! 1. [`attraction_phase`] — a spring-like pull toward the [`Target`],
//!    added to velocity rather than snapping position.
//! 2. [`integration_phase`] — position advances by velocity, then velocity
//!    is damped.
//! 3. [`bounce_phase`] — positions are clamped into the [`Bounds`] and the
//!    velocity of every clamped axis is reflected.
//!
//! Each particle is independent of the others within a step, so running
//! the phases one after another over the whole set is equivalent to running
//! all four updates per particle.

use crate::{bounds::Bounds, config::FieldConfig, particle::ParticleSet, target::Target};

/// Pulls every particle's velocity toward the target.
///
/// For each particle:
/// `vel += (target.pos - pos) * target.strength * cfg.attraction_factor`.
///
/// ### Parameters
/// - `particles` - Particle set; only velocities change.
/// - `target` - Current attraction target and strength.
/// - `cfg` - Provides the fixed `attraction_factor`.
pub fn attraction_phase(particles: &mut ParticleSet, target: &Target, cfg: &FieldConfig) {
    let k = target.strength * cfg.attraction_factor;
    if k == 0.0 {
        return;
    }
    for p in &mut particles.points {
        p.vel += (target.pos - p.pos) * k;
    }
}

/// Advances positions by velocity, then applies friction.
///
/// ### Parameters
/// - `particles` - Particle set; positions and velocities change.
/// - `cfg` - Provides the `damping` multiplier (< 1 slows particles down).
pub fn integration_phase(particles: &mut ParticleSet, cfg: &FieldConfig) {
    for p in &mut particles.points {
        p.pos += p.vel;
        p.vel *= cfg.damping;
    }
}

/// Clamps every particle into the bounce boundary.
///
/// Uses [`Bounds::bounce`], so an axis that had to be clamped has its
/// velocity negated and the particle heads back inward next step.
///
/// ### Returns
/// The number of particles that touched the boundary this step.
pub fn bounce_phase(particles: &mut ParticleSet, bounds: &Bounds) -> usize {
    let mut bounced = 0;
    for p in &mut particles.points {
        if bounds.bounce(&mut p.pos, &mut p.vel).any() {
            bounced += 1;
        }
    }
    bounced
}

/// Runs one full physics step: attraction, integration, bounce.
pub fn step(particles: &mut ParticleSet, target: &Target, cfg: &FieldConfig, bounds: &Bounds) {
    attraction_phase(particles, target, cfg);
    integration_phase(particles, cfg);
    let bounced = bounce_phase(particles, bounds);
    tracing::trace!(particles = particles.len(), bounced, "physics step");
}
