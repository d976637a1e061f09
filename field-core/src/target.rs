use glam::Vec2;

use crate::bounds::Bounds;

/// The shared point every particle is pulled toward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    pub pos: Vec2,
    pub strength: f32,
}

impl Target {
    /// A target resting at the canvas centre.
    pub fn centered(bounds: &Bounds, strength: f32) -> Self {
        Self {
            pos: bounds.center(),
            strength,
        }
    }

    /// Moves the target to a canvas position with the given strength.
    pub fn follow(&mut self, pos: Vec2, strength: f32) {
        self.pos = pos;
        self.strength = strength;
    }

    /// Sends the target back to the canvas centre.
    pub fn release(&mut self, bounds: &Bounds, strength: f32) {
        *self = Self::centered(bounds, strength);
    }
}

/// Maps a screen position into canvas coordinates.
///
/// `rect_min` and `rect_size` describe where the drawing surface sits on
/// screen; the surface is assumed to show the whole canvas stretched to
/// that rectangle. A degenerate rectangle maps everything to the centre.
pub fn screen_to_canvas(screen: Vec2, rect_min: Vec2, rect_size: Vec2, bounds: &Bounds) -> Vec2 {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return bounds.center();
    }
    (screen - rect_min) / rect_size * bounds.size()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn follow_then_release_returns_to_centre() {
        let bounds = Bounds::new(400.0, 200.0, 20.0);
        let mut t = Target::centered(&bounds, 0.25);

        t.follow(Vec2::new(10.0, 20.0), 1.0);
        assert_eq!(t, Target { pos: Vec2::new(10.0, 20.0), strength: 1.0 });

        t.release(&bounds, 0.25);
        assert_eq!(t, Target { pos: Vec2::new(200.0, 100.0), strength: 0.25 });
    }

    #[test]
    fn screen_positions_scale_into_canvas_space() {
        let bounds = Bounds::new(520.0, 320.0, 30.0);
        let rect_min = Vec2::new(100.0, 50.0);
        let rect_size = Vec2::new(260.0, 160.0);

        assert_eq!(screen_to_canvas(rect_min, rect_min, rect_size, &bounds), Vec2::ZERO);
        assert_eq!(
            screen_to_canvas(Vec2::new(230.0, 130.0), rect_min, rect_size, &bounds),
            Vec2::new(260.0, 160.0)
        );
        assert_eq!(
            screen_to_canvas(rect_min + rect_size, rect_min, rect_size, &bounds),
            bounds.size()
        );
    }

    #[test]
    fn degenerate_rect_maps_to_centre() {
        let bounds = Bounds::new(520.0, 320.0, 30.0);
        let p = screen_to_canvas(Vec2::new(5.0, 5.0), Vec2::ZERO, Vec2::new(0.0, 10.0), &bounds);
        assert_eq!(p, bounds.center());
    }
}
