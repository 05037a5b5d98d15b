//! Scrolling obstacles
//!
//! The three kinds differ only in how they are drawn. Motion and collision
//! use the shared square box, so nothing kind-specific is ever needed outside
//! [`Obstacle::shape`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::BoundingBox;

/// Obstacle kinds (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Triangle,
    Ball,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Rectangle, ShapeKind::Triangle, ShapeKind::Ball];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::Ball => "Ball",
        }
    }
}

/// Draw geometry for an obstacle, in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    Rect { min: Vec2, size: Vec2 },
    /// Base corners then apex
    Triangle { points: [Vec2; 3] },
    Circle { center: Vec2, radius: f32 },
}

/// An obstacle scrolling toward the player
#[derive(Debug, Clone, Serialize)]
pub struct Obstacle {
    pub kind: ShapeKind,
    /// Leftward speed, fixed at spawn
    pub speed: f32,
    /// x = left edge, y = ground line the obstacle stands on
    pub pos: Vec2,
    /// Side length of the hitbox
    pub size: f32,
    /// Cosmetic only
    pub color: &'static str,
}

impl Obstacle {
    pub fn new(kind: ShapeKind, speed: f32, pos: Vec2, size: f32, color: &'static str) -> Self {
        Self {
            kind,
            speed,
            pos,
            size,
            color,
        }
    }

    /// Scroll left by one tick
    pub fn advance(&mut self) {
        self.pos.x -= self.speed;
    }

    /// Fully past the left edge of the field
    pub fn is_offscreen(&self) -> bool {
        self.pos.x + self.size < 0.0
    }

    /// Square hitbox sitting on the ground line (same for every kind)
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::square(Vec2::new(self.pos.x, self.pos.y - self.size), self.size)
    }

    pub fn overlaps(&self, player_box: &BoundingBox) -> bool {
        self.bounding_box().overlaps(player_box)
    }

    /// Geometry to draw for this obstacle's kind
    pub fn shape(&self) -> Shape {
        let Vec2 { x, y } = self.pos;
        let s = self.size;
        match self.kind {
            ShapeKind::Rectangle => Shape::Rect {
                min: Vec2::new(x, y - s),
                size: Vec2::splat(s),
            },
            ShapeKind::Triangle => Shape::Triangle {
                points: [
                    Vec2::new(x, y),
                    Vec2::new(x + s, y),
                    Vec2::new(x + s / 2.0, y - s),
                ],
            },
            ShapeKind::Ball => Shape::Circle {
                center: Vec2::new(x + s / 2.0, y - s / 2.0),
                radius: s / 2.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obstacle(kind: ShapeKind) -> Obstacle {
        Obstacle::new(kind, 5.0, Vec2::new(650.0, 275.0), 20.0, "white")
    }

    #[test]
    fn test_offscreen_boundary() {
        let mut o = obstacle(ShapeKind::Rectangle);
        for _ in 0..134 {
            o.advance();
        }
        // x + size == 0 is still on screen
        assert_eq!(o.pos.x, -20.0);
        assert!(!o.is_offscreen());

        o.advance();
        assert_eq!(o.pos.x, -25.0);
        assert!(o.is_offscreen());
    }

    #[test]
    fn test_all_kinds_share_hitbox() {
        let expected = BoundingBox::new(650.0, 255.0, 20.0, 20.0);
        for kind in ShapeKind::ALL {
            assert_eq!(obstacle(kind).bounding_box(), expected, "{}", kind.as_str());
        }
    }

    #[test]
    fn test_shapes_fit_in_hitbox() {
        for kind in ShapeKind::ALL {
            let o = obstacle(kind);
            let bb = o.bounding_box();
            let inside = |p: Vec2| p.cmpge(bb.min).all() && p.cmple(bb.max()).all();
            match o.shape() {
                Shape::Rect { min, size } => {
                    assert_eq!(min, bb.min);
                    assert_eq!(size, bb.size);
                }
                Shape::Triangle { points } => assert!(points.iter().all(|&p| inside(p))),
                Shape::Circle { center, radius } => {
                    assert!(inside(center - radius) && inside(center + radius));
                }
            }
        }
    }

    #[test]
    fn test_overlaps_player() {
        let player = BoundingBox::new(50.0, 250.0, 25.0, 25.0);
        let mut o = obstacle(ShapeKind::Ball);
        o.pos.x = 60.0;
        assert!(o.overlaps(&player));
        o.pos.x = 80.0;
        assert!(!o.overlaps(&player));
    }
}
