//! Obstacle spawning and the speed ramp
//!
//! Spawn chance grows linearly with the ticks since the last spawn and
//! exponentially with the length of the run. A long gap makes the next
//! obstacle very likely, and a long run makes every gap shorter.

use glam::Vec2;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use super::obstacle::{Obstacle, ShapeKind};
use super::palette::{self, OBSTACLE_COLORS};
use crate::consts::{FLOOR_Y, SPAWN_X};
use crate::tuning::Tuning;

/// Probability of spawning on this tick
pub fn spawn_chance(tuning: &Tuning, ticks_since_start: u64, ticks_since_spawn: u64) -> f64 {
    // Growth overflows to infinity on very long runs, and inf * 0 is NaN
    if ticks_since_spawn == 0 || tuning.spawn_base_rate == 0.0 {
        return 0.0;
    }
    tuning.spawn_base_rate
        * ticks_since_spawn as f64
        * tuning.spawn_growth.powf(ticks_since_start as f64)
}

/// Owns the global obstacle speed and spawn timing for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    /// Speed handed to the next obstacle (never decreases during a run)
    pub speed: f32,
    /// Tick of the most recent spawn (run start until the first one)
    pub last_spawn_tick: u64,
}

impl Spawner {
    pub fn new(initial_speed: f32) -> Self {
        Self {
            speed: initial_speed,
            last_spawn_tick: 0,
        }
    }

    pub fn ticks_since_spawn(&self, now: u64) -> u64 {
        now.saturating_sub(self.last_spawn_tick)
    }

    /// Roll for a spawn at tick `now`; returns true if an obstacle was added
    pub fn maybe_spawn<R: Rng + ?Sized>(
        &mut self,
        now: u64,
        tuning: &Tuning,
        rng: &mut R,
        obstacles: &mut Vec<Obstacle>,
    ) -> bool {
        let chance = spawn_chance(tuning, now, self.ticks_since_spawn(now));
        // Written so a NaN chance never spawns
        if !(rng.random::<f64>() < chance) {
            return false;
        }

        let kind = ShapeKind::ALL
            .choose(rng)
            .copied()
            .unwrap_or(ShapeKind::Rectangle);
        let sizes = tuning.obstacle_size_range();
        let size = if sizes.is_empty() {
            sizes.start
        } else {
            rng.random_range(sizes)
        };
        let color = palette::pick(rng, &OBSTACLE_COLORS);

        obstacles.push(Obstacle::new(
            kind,
            self.speed,
            Vec2::new(SPAWN_X, FLOOR_Y),
            size,
            color,
        ));
        log::debug!(
            "Spawned {} (size {:.1}, speed {:.1}) at tick {}",
            kind.as_str(),
            size,
            self.speed,
            now
        );

        self.speed += tuning.speed_increment;
        self.last_spawn_tick = now;
        true
    }
}
