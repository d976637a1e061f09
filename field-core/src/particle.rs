use glam::Vec2;
use rand::Rng;
use tracing::debug;

use crate::bounds::Bounds;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Particle {
    pub fn at_rest(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
        }
    }
}

/// The particles of one field, plus the generation they were seeded in.
///
/// A reseed replaces every particle at once and bumps the generation, so
/// two sets with different generations never share particles.
#[derive(Debug, Default)]
pub struct ParticleSet {
    pub points: Vec<Particle>,
    generation: u64,
}

impl ParticleSet {
    pub fn from_particles(points: Vec<Particle>) -> Self {
        Self {
            points,
            generation: 0,
        }
    }

    pub fn from_positions(positions: Vec<Vec2>) -> Self {
        Self::from_particles(positions.into_iter().map(Particle::at_rest).collect())
    }

    pub fn random_in_bounds(
        count: usize,
        bounds: &Bounds,
        speed: f32,
        rng: &mut impl Rng,
    ) -> Self {
        Self::from_particles(random_particles(count, bounds, speed, rng))
    }

    /// Discards every particle and seeds `count` fresh ones.
    pub fn reseed(&mut self, count: usize, bounds: &Bounds, speed: f32, rng: &mut impl Rng) {
        self.points = random_particles(count, bounds, speed, rng);
        self.generation += 1;
        debug!(count, generation = self.generation, "reseeded particle set");
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn random_particles(
    count: usize,
    bounds: &Bounds,
    speed: f32,
    rng: &mut impl Rng,
) -> Vec<Particle> {
    let (lo, hi) = (bounds.min(), bounds.max());
    (0..count)
        .map(|_| Particle {
            pos: Vec2::new(rng.random_range(lo.x..=hi.x), rng.random_range(lo.y..=hi.y)),
            vel: Vec2::new(
                rng.random_range(-speed..=speed),
                rng.random_range(-speed..=speed),
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn random_particles_start_inside_bounds_with_small_velocity() {
        let bounds = Bounds::new(520.0, 320.0, 30.0);
        let mut rng = StdRng::seed_from_u64(1);

        let set = ParticleSet::random_in_bounds(200, &bounds, 0.6, &mut rng);

        assert_eq!(set.len(), 200);
        assert_eq!(set.generation(), 0);
        for p in &set.points {
            assert!(bounds.contains(p.pos), "{:?}", p.pos);
            assert!(p.vel.abs().max_element() <= 0.6, "{:?}", p.vel);
        }
    }

    #[test]
    fn reseed_replaces_every_particle() {
        let bounds = Bounds::new(200.0, 200.0, 30.0);
        let mut rng = StdRng::seed_from_u64(2);
        let mut set = ParticleSet::random_in_bounds(5, &bounds, 0.6, &mut rng);
        let before = set.points.clone();

        set.reseed(9, &bounds, 0.6, &mut rng);

        assert_eq!(set.len(), 9);
        assert_eq!(set.generation(), 1);
        for old in &before {
            assert!(!set.points.contains(old));
        }
    }

    #[test]
    fn reseed_to_zero_leaves_an_empty_set() {
        let bounds = Bounds::new(200.0, 200.0, 30.0);
        let mut rng = StdRng::seed_from_u64(3);
        let mut set = ParticleSet::from_positions(vec![Vec2::new(50.0, 50.0)]);

        set.reseed(0, &bounds, 0.6, &mut rng);

        assert!(set.is_empty());
        assert_eq!(set.generation(), 1);
    }
}
