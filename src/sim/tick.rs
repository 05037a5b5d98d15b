//! Fixed timestep simulation tick
//!
//! Core game loop that advances a run by exactly one step.

use super::state::{GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump key held/pressed this tick
    pub jump: bool,
}

/// What a tick did to the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// Still running
    Alive,
    /// Collided on this tick
    Died { final_score: u64 },
    /// Run was not running; nothing changed
    Inactive,
}

/// Advance the run by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> StepResult {
    if !state.is_running() {
        return StepResult::Inactive;
    }

    if input.jump {
        state.player.request_jump();
    }
    state.player.advance();

    state.spawner.maybe_spawn(
        state.elapsed_ticks,
        &state.tuning,
        &mut state.rng,
        &mut state.obstacles,
    );

    for obstacle in &mut state.obstacles {
        obstacle.advance();
    }
    state.obstacles.retain(|o| !o.is_offscreen());

    let player_box = state.player.bounding_box();
    let hit = state.obstacles.iter().any(|o| o.overlaps(&player_box));
    if hit {
        state.phase = GamePhase::Dead;
        let final_score = state.score();
        log::info!(
            "Run over after {} ticks: score {}, speed {:.1}",
            state.elapsed_ticks,
            final_score,
            state.speed()
        );
        return StepResult::Died { final_score };
    }

    state.elapsed_ticks += 1;
    StepResult::Alive
}
