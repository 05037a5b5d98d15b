//! Square Dash - A side-scrolling jump-over-the-obstacles arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, obstacles, spawning, collisions)
//! - `game`: Run lifecycle (Idle/Running/Dead) and host-facing events
//! - `highscores`: Per-process score tracking
//! - `settings`: Operator preferences (difficulty, player color, volume)
//! - `tuning`: Data-driven game balance

#[cfg(target_arch = "wasm32")]
pub mod audio;
pub mod game;
pub mod highscores;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use game::{Game, GameEvent, TickOutcome};
pub use highscores::{RunSummary, Scorekeeper};
pub use settings::{Difficulty, Settings};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Simulated seconds per tick (score counts one point per 25 ticks)
    pub const SIM_DT: f64 = 1.0 / 25.0;
    /// Ticks making up one simulated second
    pub const TICKS_PER_SECOND: u64 = 25;

    /// Real-time rate the browser host drives ticks at
    pub const HOST_TICK_HZ: f64 = 60.0;
    /// Maximum substeps per animation frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const FIELD_HEIGHT: f32 = 400.0;
    /// Ground line; players rest on it and obstacles stand on it
    pub const FLOOR_Y: f32 = 275.0;

    /// Player defaults
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_SIZE: f32 = 25.0;
    /// Upward nudge applied on takeoff so the grounded check fails next tick
    pub const JUMP_EPSILON: f32 = 0.5;

    /// Obstacles appear just past the right edge of the field
    pub const SPAWN_X: f32 = 650.0;

    /// Initial obstacle speed when no difficulty preset was chosen
    pub const DEFAULT_INITIAL_SPEED: f32 = 6.0;
    /// Player color until one is picked in the menu
    pub const DEFAULT_PLAYER_COLOR: &str = "#ffffff";
}
