//! The player's square
//!
//! Moves vertically only. Gravity is a fixed fraction of the jump impulse, so
//! a stronger jump also falls back faster and jump height and airtime stay
//! coupled.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::BoundingBox;
use crate::consts::{FLOOR_Y, JUMP_EPSILON, PLAYER_SIZE, PLAYER_X};

/// Vertical-only kinematic body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner (x never changes after creation)
    pub pos: Vec2,
    /// Side length of the square hitbox
    pub size: f32,
    /// Resting y (top edge when standing on the floor)
    pub baseline_y: f32,
    /// Vertical velocity, negative is upward
    pub vel_y: f32,
    /// Takeoff speed
    pub jump_impulse: f32,
    /// Fraction of `jump_impulse` added to `vel_y` per airborne tick
    pub gravity_factor: f32,
}

impl Player {
    pub fn new(x: f32, baseline_y: f32, size: f32, jump_impulse: f32, gravity_factor: f32) -> Self {
        Self {
            pos: Vec2::new(x, baseline_y),
            size,
            baseline_y,
            vel_y: 0.0,
            jump_impulse,
            gravity_factor,
        }
    }

    /// Player standing on the default floor with the given jump tuning
    pub fn on_floor(jump_impulse: f32, gravity_factor: f32) -> Self {
        Self::new(
            PLAYER_X,
            FLOOR_Y - PLAYER_SIZE,
            PLAYER_SIZE,
            jump_impulse,
            gravity_factor,
        )
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.pos.y >= self.baseline_y
    }

    /// Take off if standing on the ground; ignored while airborne
    pub fn request_jump(&mut self) {
        if self.is_grounded() {
            self.vel_y = -self.jump_impulse;
            self.pos.y -= JUMP_EPSILON;
        }
    }

    /// Advance vertical motion by one tick
    pub fn advance(&mut self) {
        if self.pos.y < self.baseline_y {
            self.pos.y = (self.pos.y + self.vel_y).clamp(0.0, self.baseline_y);
            self.vel_y += self.gravity_factor * self.jump_impulse;
        }
        if self.pos.y >= self.baseline_y {
            self.pos.y = self.baseline_y;
            self.vel_y = 0.0;
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::square(self.pos, self.size)
    }
}
