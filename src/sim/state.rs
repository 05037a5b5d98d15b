//! Run state and core simulation types
//!
//! A `GameState` is one run: built fresh on every start, frozen once the
//! player dies.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::BoundingBox;
use super::obstacle::{Obstacle, Shape, ShapeKind};
use super::palette::{self, FLOOR_COLORS};
use super::player::Player;
use super::spawner::Spawner;
use crate::consts::{DEFAULT_INITIAL_SPEED, DEFAULT_PLAYER_COLOR, SIM_DT};
use crate::highscores::score_for_ticks;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Menu shown, no run yet
    Idle,
    /// Simulation advancing
    Running,
    /// Run ended by a collision
    Dead,
}

/// Per-run choices made in the setup menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Speed of the first obstacles (distance/tick)
    pub initial_speed: f32,
    /// Opaque display value from the color picker
    pub player_color: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            initial_speed: DEFAULT_INITIAL_SPEED,
            player_color: DEFAULT_PLAYER_COLOR.to_string(),
        }
    }
}

/// Complete state of a single run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the run RNG was built from
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub player: Player,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
    pub spawner: Spawner,
    /// Ticks survived since the run started
    pub elapsed_ticks: u64,
    pub floor_color: &'static str,
    pub player_color: String,
}

impl GameState {
    /// Start a new run
    pub fn new(config: &RunConfig, tuning: Tuning, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let floor_color = palette::pick(&mut rng, &FLOOR_COLORS);
        Self {
            seed,
            rng,
            player: Player::on_floor(tuning.jump_impulse, tuning.gravity_factor),
            tuning,
            phase: GamePhase::Running,
            obstacles: Vec::new(),
            spawner: Spawner::new(config.initial_speed),
            elapsed_ticks: 0,
            floor_color,
            player_color: config.player_color.clone(),
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Current global obstacle speed
    #[inline]
    pub fn speed(&self) -> f32 {
        self.spawner.speed
    }

    /// Simulated seconds survived
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_ticks as f64 * SIM_DT
    }

    /// Score so far (frozen once dead)
    pub fn score(&self) -> u64 {
        score_for_ticks(self.elapsed_ticks)
    }

    /// Read-only view for renderers
    pub fn frame(&self, best_score: u64) -> RenderFrame<'_> {
        RenderFrame {
            phase: self.phase,
            floor_color: self.floor_color,
            player: self.player.bounding_box(),
            player_color: &self.player_color,
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    kind: o.kind,
                    bounds: o.bounding_box(),
                    shape: o.shape(),
                    color: o.color,
                })
                .collect(),
            score: self.score(),
            best_score,
        }
    }
}

/// One obstacle as the renderer sees it
#[derive(Debug, Clone, Serialize)]
pub struct ObstacleView<'a> {
    pub kind: ShapeKind,
    pub bounds: BoundingBox,
    pub shape: Shape,
    pub color: &'a str,
}

/// Everything needed to draw one tick
#[derive(Debug, Clone, Serialize)]
pub struct RenderFrame<'a> {
    pub phase: GamePhase,
    pub floor_color: &'a str,
    pub player: BoundingBox,
    pub player_color: &'a str,
    pub obstacles: Vec<ObstacleView<'a>>,
    pub score: u64,
    pub best_score: u64,
}

impl RenderFrame<'_> {
    /// JSON form for hosts that draw outside Rust
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
