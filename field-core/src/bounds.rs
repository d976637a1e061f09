use glam::{BVec2, Vec2};

/// The canvas and its padded bounce boundary.
///
/// Particle positions are kept inside `[padding, width - padding]` on x and
/// `[padding, height - padding]` on y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
    pub padding: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32, padding: f32) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Full canvas size, padding included.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// Lowest allowed position on both axes.
    pub fn min(&self) -> Vec2 {
        Vec2::splat(self.padding)
    }

    /// Highest allowed position on both axes.
    pub fn max(&self) -> Vec2 {
        self.size() - Vec2::splat(self.padding)
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.cmpge(self.min()).all() && p.cmple(self.max()).all()
    }

    /// Clamps `pos` into the boundary and reflects `vel` on every axis that
    /// had to be clamped.
    ///
    /// ### Returns
    /// Which axes were clamped.
    pub fn bounce(&self, pos: &mut Vec2, vel: &mut Vec2) -> BVec2 {
        let (lo, hi) = (self.min(), self.max());
        let x = bounce_axis(&mut pos.x, &mut vel.x, lo.x, hi.x);
        let y = bounce_axis(&mut pos.y, &mut vel.y, lo.y, hi.y);
        BVec2::new(x, y)
    }
}

#[inline]
fn bounce_axis(p: &mut f32, v: &mut f32, lo: f32, hi: f32) -> bool {
    if *p < lo {
        *p = lo;
    } else if *p > hi {
        *p = hi;
    } else {
        return false;
    }
    *v = -*v;
    true
}
