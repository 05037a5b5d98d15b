//! Axis-aligned collision detection
//!
//! Every entity collides as a box, whatever shape it is drawn as. Two boxes
//! hit when their projections overlap on both axes; touching edges count.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box (screen coordinates, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl BoundingBox {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    /// Square box with the given top-left corner and side length
    pub fn square(min: Vec2, side: f32) -> Self {
        Self {
            min,
            size: Vec2::splat(side),
        }
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Check whether two boxes overlap on both axes
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        let (a_max, b_max) = (self.max(), other.max());
        ranges_overlap(self.min.x, a_max.x, other.min.x, b_max.x)
            && ranges_overlap(self.min.y, a_max.y, other.min.y, b_max.y)
    }
}

/// Check whether the closed ranges [low1, high1] and [low2, high2] overlap
#[inline]
pub fn ranges_overlap(low1: f32, high1: f32, low2: f32, high2: f32) -> bool {
    (low1 <= low2 && low2 <= high1) || (low2 <= low1 && low1 <= high2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ranges_overlap() {
        assert!(ranges_overlap(0.0, 10.0, 5.0, 15.0));
        assert!(ranges_overlap(5.0, 15.0, 0.0, 10.0));
        // Containment either way
        assert!(ranges_overlap(0.0, 10.0, 2.0, 3.0));
        assert!(ranges_overlap(2.0, 3.0, 0.0, 10.0));
        // Shared endpoint
        assert!(ranges_overlap(0.0, 10.0, 10.0, 20.0));
        // Disjoint
        assert!(!ranges_overlap(0.0, 10.0, 10.5, 20.0));
        assert!(!ranges_overlap(10.5, 20.0, 0.0, 10.0));
    }

    #[test]
    fn test_box_overlap_needs_both_axes() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        // Overlaps on x only
        let b = BoundingBox::new(5.0, 20.0, 10.0, 10.0);
        assert!(!a.overlaps(&b));
        // Overlaps on y only
        let c = BoundingBox::new(20.0, 5.0, 10.0, 10.0);
        assert!(!a.overlaps(&c));
        // Overlaps on both
        let d = BoundingBox::new(5.0, 5.0, 10.0, 10.0);
        assert!(a.overlaps(&d));
    }

    #[test]
    fn test_grounded_player_against_floor_obstacle() {
        // Player resting on the floor at 275 and a 20px obstacle standing on it
        let player = BoundingBox::square(Vec2::new(50.0, 250.0), 25.0);
        let touching = BoundingBox::square(Vec2::new(70.0, 255.0), 20.0);
        let ahead = BoundingBox::square(Vec2::new(76.0, 255.0), 20.0);
        assert!(player.overlaps(&touching));
        assert!(!player.overlaps(&ahead));
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(
            ax in -500.0f32..500.0, ay in -500.0f32..500.0, aw in 0.0f32..100.0, ah in 0.0f32..100.0,
            bx in -500.0f32..500.0, by in -500.0f32..500.0, bw in 0.0f32..100.0, bh in 0.0f32..100.0,
        ) {
            let a = BoundingBox::new(ax, ay, aw, ah);
            let b = BoundingBox::new(bx, by, bw, bh);
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn separated_boxes_never_hit(
            x in -500.0f32..500.0, y in -500.0f32..500.0, side in 1.0f32..100.0, gap in 0.01f32..50.0,
        ) {
            let a = BoundingBox::square(Vec2::new(x, y), side);
            let right = BoundingBox::square(Vec2::new(x + side + gap, y), side);
            let below = BoundingBox::square(Vec2::new(x, y + side + gap), side);
            prop_assert!(!a.overlaps(&right));
            prop_assert!(!a.overlaps(&below));
        }
    }
}
