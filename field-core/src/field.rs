//! The owned animator state.
//!
//! [`ParticleField`] replaces any process-wide animation state: the host
//! creates one, feeds it pointer events and frame ticks, and drops it on
//! teardown. Every per-frame operation is a plain method call that runs to
//! completion, so a reseed can never interleave with a step.

use glam::Vec2;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    bounds::Bounds,
    config::FieldConfig,
    frame::{self, Frame},
    particle::ParticleSet,
    phases,
    target::{self, Target},
};

#[derive(Debug)]
pub struct ParticleField {
    cfg: FieldConfig,
    bounds: Bounds,
    particles: ParticleSet,
    target: Target,
    rng: StdRng,
}

impl ParticleField {
    /// Creates a field seeded with `cfg.count` random particles.
    ///
    /// The target starts at the canvas centre with the idle strength. The
    /// RNG is seeded from `cfg.seed` when set, otherwise from the OS.
    ///
    /// ### Panics
    /// If `cfg` fails [`FieldConfig::validate`]; [`crate::mount::mount`]
    /// checks this before seeding.
    pub fn new(cfg: FieldConfig) -> Self {
        let mut rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let bounds = cfg.bounds();
        let particles =
            ParticleSet::random_in_bounds(cfg.count, &bounds, cfg.initial_speed, &mut rng);
        Self::assemble(cfg, particles, rng)
    }

    /// Creates a field around an explicit particle set.
    pub fn with_particles(cfg: FieldConfig, particles: ParticleSet) -> Self {
        let rng = StdRng::seed_from_u64(cfg.seed.unwrap_or_default());
        Self::assemble(cfg, particles, rng)
    }

    fn assemble(cfg: FieldConfig, particles: ParticleSet, rng: StdRng) -> Self {
        let bounds = cfg.bounds();
        let target = Target::centered(&bounds, cfg.idle_strength);
        Self {
            cfg,
            bounds,
            particles,
            target,
            rng,
        }
    }

    /// Replaces the whole particle set with `count` fresh random particles.
    pub fn seed(&mut self, count: usize) {
        self.particles
            .reseed(count, &self.bounds, self.cfg.initial_speed, &mut self.rng);
    }

    /// Reseeds with the configured particle count.
    pub fn randomize(&mut self) {
        self.seed(self.cfg.count);
    }

    pub fn step(&mut self) {
        phases::step(&mut self.particles, &self.target, &self.cfg, &self.bounds);
    }

    pub fn render(&self) -> Frame {
        frame::render(&self.particles, &self.cfg)
    }

    /// Steps once and renders the result; one call per display refresh.
    pub fn tick(&mut self) -> Frame {
        self.step();
        self.render()
    }

    /// Points the target at a canvas position with the active strength.
    pub fn pointer_moved(&mut self, canvas_pos: Vec2) {
        self.target.follow(canvas_pos, self.cfg.active_strength);
    }

    /// Like [`ParticleField::pointer_moved`], but from screen coordinates
    /// over a surface occupying `rect_min .. rect_min + rect_size`.
    pub fn pointer_moved_on_screen(&mut self, screen: Vec2, rect_min: Vec2, rect_size: Vec2) {
        let pos = target::screen_to_canvas(screen, rect_min, rect_size, &self.bounds);
        self.pointer_moved(pos);
    }

    /// Returns the target to the centre with the idle strength.
    pub fn pointer_left(&mut self) {
        self.target.release(&self.bounds, self.cfg.idle_strength);
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn config(&self) -> &FieldConfig {
        &self.cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(count: usize) -> ParticleField {
        ParticleField::new(FieldConfig {
            count,
            seed: Some(42),
            ..FieldConfig::default()
        })
    }

    #[test]
    fn new_field_is_seeded_and_idle() {
        let field = seeded(70);

        assert_eq!(field.particles().len(), 70);
        assert_eq!(field.target().pos, field.bounds().center());
        assert_eq!(field.target().strength, 0.25);
    }

    #[test]
    fn same_seed_gives_same_field() {
        let a = seeded(10);
        let b = seeded(10);
        assert_eq!(a.particles().points, b.particles().points);
    }

    #[test]
    fn randomize_replaces_the_set_with_the_configured_count() {
        let mut field = seeded(30);
        let before = field.particles().points.clone();
        let generation = field.particles().generation();

        field.seed(5);
        assert_eq!(field.particles().len(), 5);

        field.randomize();
        assert_eq!(field.particles().len(), 30);
        assert_eq!(field.particles().generation(), generation + 2);
        assert!(before.iter().all(|p| !field.particles().points.contains(p)));
    }

    #[test]
    fn pointer_events_drive_the_target() {
        let mut field = seeded(3);

        field.pointer_moved_on_screen(
            Vec2::new(75.0, 50.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(260.0, 160.0),
        );
        assert_eq!(field.target().pos, Vec2::new(130.0, 80.0));
        assert_eq!(field.target().strength, 1.0);

        field.pointer_left();
        assert_eq!(field.target().pos, Vec2::new(260.0, 160.0));
        assert_eq!(field.target().strength, 0.25);
    }

    #[test]
    fn tick_keeps_particles_inside_and_emits_one_dot_each() {
        let mut field = seeded(70);
        field.pointer_moved(Vec2::new(500.0, 10.0));

        for _ in 0..200 {
            let frame = field.tick();
            assert_eq!(frame.circle_count(), 70);
        }
        let bounds = *field.bounds();
        assert!(field.particles().points.iter().all(|p| bounds.contains(p.pos)));
    }

    #[test]
    fn reseeding_mid_animation_does_not_disturb_the_loop() {
        let mut field = seeded(20);
        field.tick();
        field.seed(8);
        let frame = field.tick();
        assert_eq!(frame.circle_count(), 8);
    }

    #[test]
    fn explicit_points_without_force_hold_still() {
        let cfg = FieldConfig {
            width: 200.0,
            height: 200.0,
            padding: 30.0,
            idle_strength: 0.0,
            ..FieldConfig::default()
        };
        let set = ParticleSet::from_positions(vec![Vec2::new(40.0, 60.0), Vec2::new(100.0, 100.0)]);
        let mut field = ParticleField::with_particles(cfg, set);

        let frame = field.tick();

        assert_eq!(field.particles().points[0].pos, Vec2::new(40.0, 60.0));
        assert_eq!(field.particles().points[1].pos, Vec2::new(100.0, 100.0));
        // About 72 apart, so linked both ways under the default threshold.
        assert_eq!(frame.line_count(), 2);
    }
}
