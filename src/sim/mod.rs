//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per `tick` call
//! - Seeded RNG only
//! - Obstacles iterated in spawn order
//! - No rendering or platform dependencies

pub mod collision;
pub mod obstacle;
pub mod palette;
pub mod player;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{BoundingBox, ranges_overlap};
pub use obstacle::{Obstacle, Shape, ShapeKind};
pub use player::Player;
pub use spawner::{Spawner, spawn_chance};
pub use state::{GamePhase, GameState, ObstacleView, RenderFrame, RunConfig};
pub use tick::{StepResult, TickInput, tick};
