use crate::particle::Particle;

/// A drawable connection from one particle to one of its nearest neighbours.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: usize,
    pub to: usize,
    pub distance: f32,
}

/// Returns the `k` particles nearest to `points[i]`, excluding `i` itself,
/// as `(index, squared distance)` pairs sorted closest first.
///
/// Brute force over every other particle. Fewer than `k` pairs are returned
/// when the set is too small.
pub fn nearest(points: &[Particle], i: usize, k: usize) -> Vec<(usize, f32)> {
    let origin = points[i].pos;
    let mut dist_list: Vec<(usize, f32)> = points
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .map(|(j, p)| (j, (p.pos - origin).length_squared()))
        .collect();

    let k = k.min(dist_list.len());
    if k == 0 {
        return Vec::new();
    }
    if k < dist_list.len() {
        dist_list.select_nth_unstable_by(k - 1, |a, b| a.1.total_cmp(&b.1));
        dist_list.truncate(k);
    }
    dist_list.sort_unstable_by(|a, b| a.1.total_cmp(&b.1));
    dist_list
}

/// Builds the neighbour links of a whole particle set.
///
/// Every particle links to each of its `k` nearest neighbours that lies
/// strictly closer than `threshold`. Mutual neighbours produce one link in
/// each direction, matching a per-particle drawing pass.
pub fn links(points: &[Particle], k: usize, threshold: f32) -> Vec<Link> {
    let threshold2 = threshold * threshold;
    let mut out = Vec::with_capacity(points.len() * k);
    for i in 0..points.len() {
        for (j, d2) in nearest(points, i, k) {
            if d2 < threshold2 {
                out.push(Link {
                    from: i,
                    to: j,
                    distance: d2.sqrt(),
                });
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::ParticleSet;
    use glam::Vec2;

    fn set(points: &[(f32, f32)]) -> Vec<Particle> {
        ParticleSet::from_positions(points.iter().map(|&(x, y)| Vec2::new(x, y)).collect()).points
    }

    #[test]
    fn nearest_excludes_self_and_sorts_by_distance() {
        let pts = set(&[(0.0, 0.0), (10.0, 0.0), (3.0, 0.0), (0.0, 5.0), (50.0, 50.0)]);

        let n = nearest(&pts, 0, 2);

        assert_eq!(n, vec![(2, 9.0), (3, 25.0)]);
    }

    #[test]
    fn nearest_returns_what_exists_for_tiny_sets() {
        let pts = set(&[(0.0, 0.0), (1.0, 0.0)]);
        assert_eq!(nearest(&pts, 1, 2), vec![(0, 1.0)]);

        let lonely = set(&[(0.0, 0.0)]);
        assert!(nearest(&lonely, 0, 2).is_empty());
    }

    #[test]
    fn links_respect_threshold() {
        let pts = set(&[(0.0, 0.0), (30.0, 0.0), (200.0, 0.0), (0.0, 119.0)]);

        let ls = links(&pts, 2, 120.0);

        assert!(ls.iter().all(|l| l.distance < 120.0));
        assert!(ls.iter().all(|l| (pts[l.from].pos.distance(pts[l.to].pos) - l.distance).abs() < 1e-4));
        // Point 2 is 170 away from its closest neighbour, so it never links out.
        assert!(ls.iter().all(|l| l.from != 2));
        assert!(ls.contains(&Link { from: 0, to: 1, distance: 30.0 }));
        assert!(ls.contains(&Link { from: 1, to: 0, distance: 30.0 }));
    }

    #[test]
    fn each_particle_links_to_at_most_k_neighbours() {
        let pts = set(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0), (4.0, 0.0)]);

        let ls = links(&pts, 2, 100.0);

        for i in 0..pts.len() {
            assert_eq!(ls.iter().filter(|l| l.from == i).count(), 2);
        }
    }
}
