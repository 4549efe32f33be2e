//! Axis-aligned rectangle geometry
//!
//! Screen-space rectangles: `(x, y)` is the top-left corner and y grows
//! downward. Every collision test in the simulation goes through
//! [`intersects`] and [`overlap_extent`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of the given size whose bottom edge is centered on `feet`
    pub fn from_feet(feet: Vec2, size: Vec2) -> Self {
        Self::new(feet.x - size.x / 2.0, feet.y - size.y, size.x, size.y)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Move the top-left corner to `origin`, keeping the size
    pub fn set_origin(&mut self, origin: Vec2) {
        self.x = origin.x;
        self.y = origin.y;
    }
}

/// Strict AABB overlap: rectangles that only share an edge do not intersect
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && a.right() > b.left() && a.top() < b.bottom() && a.bottom() > b.top()
}

/// Width and height of the intersection rectangle (zero when disjoint)
pub fn overlap_extent(a: &Rect, b: &Rect) -> Vec2 {
    if !intersects(a, b) {
        return Vec2::ZERO;
    }
    let w = a.right().min(b.right()) - a.left().max(b.left());
    let h = a.bottom().min(b.bottom()) - a.top().max(b.top());
    Vec2::new(w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::new(0.0, 0.0, 20.0, 20.0);
        let b = Rect::new(10.0, 15.0, 20.0, 20.0);
        assert!(intersects(&a, &b));
        assert!(intersects(&b, &a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 20.0, 20.0);
        let right = Rect::new(20.0, 0.0, 20.0, 20.0);
        let below = Rect::new(0.0, 20.0, 20.0, 20.0);
        assert!(!intersects(&a, &right));
        assert!(!intersects(&a, &below));
        assert_eq!(overlap_extent(&a, &right), Vec2::ZERO);
    }

    #[test]
    fn test_overlap_extent() {
        let a = Rect::new(0.0, 0.0, 20.0, 20.0);
        let b = Rect::new(15.0, 5.0, 100.0, 10.0);
        assert_eq!(overlap_extent(&a, &b), Vec2::new(5.0, 10.0));

        // Containment yields the inner rectangle
        let inner = Rect::new(5.0, 5.0, 4.0, 3.0);
        assert_eq!(overlap_extent(&a, &inner), Vec2::new(4.0, 3.0));
    }

    #[test]
    fn test_from_feet() {
        let r = Rect::from_feet(Vec2::new(100.0, 100.0), Vec2::new(20.0, 20.0));
        assert_eq!(r, Rect::new(90.0, 80.0, 20.0, 20.0));
        assert_eq!(r.bottom(), 100.0);
        assert_eq!(r.center().x, 100.0);
    }
}
