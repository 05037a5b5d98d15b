//! Game balance values
//!
//! Everything the difficulty curve depends on lives here so a run can be
//! re-tuned (or made spawn-free in tests) without touching simulation code.

use serde::{Deserialize, Serialize};

/// Smallest obstacle side length the spawner will ever produce
pub const MIN_OBSTACLE_SIZE: f32 = 1.0;

/// Balance knobs for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Upward speed given to the player on takeoff (distance/tick)
    pub jump_impulse: f32,
    /// Fraction of the jump impulse added to vertical speed each airborne tick
    pub gravity_factor: f32,
    /// Spawn chance per tick, per tick elapsed since the last spawn
    pub spawn_base_rate: f64,
    /// Per-tick exponential growth of spawn pressure over the run
    pub spawn_growth: f64,
    /// Global speed added after every spawn
    pub speed_increment: f32,
    /// Smallest obstacle size (inclusive)
    pub obstacle_min_size: f32,
    /// Largest obstacle size (exclusive)
    pub obstacle_max_size: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            jump_impulse: 11.0,
            gravity_factor: 0.1,
            spawn_base_rate: 1e-4,
            spawn_growth: 1.0005,
            speed_increment: 0.1,
            obstacle_min_size: 10.0,
            obstacle_max_size: 25.0,
        }
    }
}

impl Tuning {
    /// Tuning with spawning switched off (obstacles only appear when pushed by hand)
    pub fn without_spawns() -> Self {
        Self {
            spawn_base_rate: 0.0,
            ..Self::default()
        }
    }

    /// Parse tuning overrides; missing fields keep their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning
            .validate()
            .map_err(<serde_json::Error as serde::de::Error>::custom)?;
        Ok(tuning)
    }

    /// Tuning from optional host-supplied JSON; unreadable overrides fall back to defaults
    pub fn load(json: Option<&str>) -> Self {
        let Some(json) = json.map(str::trim).filter(|j| !j.is_empty()) else {
            return Self::default();
        };
        match Self::from_json(json) {
            Ok(tuning) => {
                log::info!("Loaded tuning overrides: {:?}", tuning);
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning overrides: {}", e);
                Self::default()
            }
        }
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), String> {
        if !(self.jump_impulse > 0.0) {
            return Err(format!("jump_impulse must be positive, got {}", self.jump_impulse));
        }
        if !(self.gravity_factor > 0.0) {
            return Err(format!("gravity_factor must be positive, got {}", self.gravity_factor));
        }
        if !(self.obstacle_min_size > 0.0 && self.obstacle_max_size > 0.0) {
            return Err(format!(
                "obstacle sizes must be positive, got {}..{}",
                self.obstacle_min_size, self.obstacle_max_size
            ));
        }
        if !(self.spawn_base_rate >= 0.0 && self.spawn_growth >= 1.0) {
            return Err(format!(
                "spawn pressure must not shrink, got rate {} growth {}",
                self.spawn_base_rate, self.spawn_growth
            ));
        }
        if !(self.speed_increment >= 0.0) {
            return Err(format!("speed_increment must not be negative, got {}", self.speed_increment));
        }
        Ok(())
    }

    /// Obstacle size range, bounds put in order and kept positive
    pub fn obstacle_size_range(&self) -> std::ops::Range<f32> {
        let lo = self.obstacle_min_size.min(self.obstacle_max_size);
        let hi = self.obstacle_min_size.max(self.obstacle_max_size);
        lo.max(MIN_OBSTACLE_SIZE)..hi.max(MIN_OBSTACLE_SIZE)
    }
}
