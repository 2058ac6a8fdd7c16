//! Axis-aligned rectangles and the overlap test used for collisions

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in screen pixels (y grows downward)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    /// Create a rectangle; negative extents are clamped to zero
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            x,
            y,
            w: if w < 0 { 0 } else { w },
            h: if h < 0 { 0 } else { h },
        }
    }

    /// Top-left corner
    #[inline]
    pub fn position(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> IVec2 {
        IVec2::new(self.w, self.h)
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Move by a delta
    #[inline]
    pub fn translate(&mut self, delta: IVec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Does this rectangle intersect or touch `other`?
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        overlaps(self, other)
    }
}

/// AABB test. Edges that touch count as overlapping.
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.right() >= b.x && b.right() >= a.x && a.bottom() >= b.y && b.bottom() >= a.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_negative_extents() {
        let r = Rect::new(3, 4, -10, -1);
        assert_eq!(r.size(), IVec2::ZERO);
        assert_eq!(r.position(), IVec2::new(3, 4));
    }

    #[test]
    fn test_translate() {
        let mut r = Rect::new(0, 300, 100, 100);
        r.translate(IVec2::new(3, -150));
        assert_eq!(r, Rect::new(3, 150, 100, 100));
    }

    #[test]
    fn test_overlap_touching_edges() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(10, 0, 10, 10);
        assert!(overlaps(&a, &b));

        // Corner contact counts too
        let c = Rect::new(10, 10, 5, 5);
        assert!(overlaps(&a, &c));
    }

    #[test]
    fn test_no_overlap_with_gap() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(!overlaps(&a, &Rect::new(11, 0, 10, 10)));
        assert!(!overlaps(&a, &Rect::new(0, 11, 10, 10)));
        assert!(!overlaps(&a, &Rect::new(-21, 0, 10, 10)));
    }

    #[test]
    fn test_contained_rect_overlaps() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(40, 40, 5, 5);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_player_on_ground_hits_enemy() {
        // 800x600 layout: grounded car vs. the block
        let player = Rect::new(277, 300, 100, 100);
        let enemy = Rect::new(377, 346, 45, 45);
        assert!(overlaps(&player, &enemy));

        let airborne = Rect::new(277, 150, 100, 100);
        assert!(!overlaps(&airborne, &enemy));
    }
}
