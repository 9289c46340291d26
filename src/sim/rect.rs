//! Axis-aligned rectangle geometry
//!
//! Every entity in the world is a rectangle in screen space:
//! - pos: top-left corner (y grows downward)
//! - size: width and height
//! - color: palette tag for the renderer

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Palette key for an entity. The renderer owns the actual RGBA values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorTag {
    #[default]
    Player,
    /// Alternate player color shown while the hit flash runs
    PlayerFlash,
    Ground,
    Goal,
    Hazard,
    MovingHazard,
}

/// A colored axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
    #[serde(default)]
    pub color: ColorTag,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: ColorTag) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
            color,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Open-interval overlap on both axes. Shared edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// True if `other` lies entirely inside this rectangle (edges inclusive)
    pub fn contains(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h, ColorTag::Hazard)
    }

    #[test]
    fn test_edges() {
        let r = rect(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = rect(0.0, 0.0, 20.0, 20.0);
        let b = rect(10.0, 10.0, 20.0, 20.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        // a spans x=0..10, b spans x=10..20
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));

        // Same along y
        let c = rect(0.0, 10.0, 10.0, 10.0);
        assert!(!a.intersects(&c));
        assert!(!c.intersects(&a));
    }

    #[test]
    fn test_separated_on_one_axis() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        // Overlaps on x, far away on y
        let b = rect(5.0, 100.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_contains() {
        let goal = rect(740.0, 480.0, 40.0, 80.0);
        assert!(goal.contains(&rect(740.0, 490.0, 40.0, 60.0)));
        assert!(!goal.contains(&rect(730.0, 490.0, 40.0, 60.0)));
    }
}
