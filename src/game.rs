//! Run lifecycle
//!
//! `Game` is what a host holds on to. It moves between Idle, Running and
//! Dead, builds a fresh `GameState` for every start, keeps the best score
//! across runs, and queues the events the menu and music react to.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::highscores::{RunSummary, Scorekeeper};
use crate::sim::{GamePhase, GameState, RenderFrame, RunConfig, StepResult, TickInput, tick};
use crate::tuning::Tuning;

/// Signals for the host's menu and audio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Hide the setup menu, start the music from the top
    RunStarted,
    /// Show the setup menu with the result, pause the music
    RunEnded(RunSummary),
}

/// What one call to [`Game::tick`] produced
#[derive(Debug, Clone)]
pub enum TickOutcome<'a> {
    /// Run continues; draw this
    Frame(RenderFrame<'a>),
    /// Run ended on this tick
    RunEnded(RunSummary),
    /// No run in progress
    Inactive,
}

/// Host-facing game controller
#[derive(Debug)]
pub struct Game {
    /// Seeds each run
    rng: Pcg32,
    tuning: Tuning,
    scores: Scorekeeper,
    run: Option<GameState>,
    last_summary: Option<RunSummary>,
    events: Vec<GameEvent>,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            scores: Scorekeeper::new(),
            run: None,
            last_summary: None,
            events: Vec::new(),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.run.as_ref().map_or(GamePhase::Idle, |run| run.phase)
    }

    pub fn is_running(&self) -> bool {
        self.phase() == GamePhase::Running
    }

    /// Current run, if one was ever started
    pub fn run(&self) -> Option<&GameState> {
        self.run.as_ref()
    }

    pub fn best_score(&self) -> u64 {
        self.scores.best()
    }

    /// Summary of the most recent finished run
    pub fn last_summary(&self) -> Option<RunSummary> {
        self.last_summary
    }

    /// Begin a fresh run. Ignored while a run is in progress.
    pub fn start(&mut self, config: &RunConfig) -> bool {
        if self.is_running() {
            log::warn!("Start requested while a run is in progress; ignoring");
            return false;
        }

        let seed = self.rng.random::<u64>();
        let run = GameState::new(config, self.tuning.clone(), seed);
        log::info!(
            "Run started: seed {}, speed {:.1}, floor {}",
            seed,
            run.speed(),
            run.floor_color
        );
        self.run = Some(run);
        self.events.push(GameEvent::RunStarted);
        true
    }

    /// Advance the current run by one tick
    pub fn tick(&mut self, input: &TickInput) -> TickOutcome<'_> {
        let Some(run) = self.run.as_mut() else {
            return TickOutcome::Inactive;
        };

        match tick(run, input) {
            StepResult::Alive => TickOutcome::Frame(run.frame(self.scores.best())),
            StepResult::Died { final_score } => {
                let summary = self.scores.summarize(final_score);
                self.last_summary = Some(summary);
                self.events.push(GameEvent::RunEnded(summary));
                TickOutcome::RunEnded(summary)
            }
            StepResult::Inactive => TickOutcome::Inactive,
        }
    }

    /// Read-only view of the current run (also valid after death)
    pub fn frame(&self) -> Option<RenderFrame<'_>> {
        self.run.as_ref().map(|run| run.frame(self.scores.best()))
    }

    /// Take queued events, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Obstacle, ShapeKind};
    use glam::Vec2;

    fn quiet_game() -> Game {
        Game::with_tuning(2024, Tuning::without_spawns())
    }

    /// Run until `score` then drop an obstacle on the player
    fn play_to_death(game: &mut Game, score: u64) -> RunSummary {
        for _ in 0..score * 25 {
            assert!(matches!(game.tick(&TickInput::default()), TickOutcome::Frame(_)));
        }
        let run = game.run.as_mut().unwrap();
        run.obstacles.push(Obstacle::new(
            ShapeKind::Rectangle,
            2.0,
            Vec2::new(60.0, 275.0),
            20.0,
            "white",
        ));
        match game.tick(&TickInput::default()) {
            TickOutcome::RunEnded(summary) => summary,
            other => panic!("expected run end, got {:?}", other),
        }
    }

    #[test]
    fn test_idle_until_started() {
        let mut game = quiet_game();
        assert_eq!(game.phase(), GamePhase::Idle);
        assert!(game.frame().is_none());
        assert!(matches!(game.tick(&TickInput::default()), TickOutcome::Inactive));
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn test_start_emits_event() {
        let mut game = Game::new(2024);
        assert!(game.start(&RunConfig::default()));
        assert_eq!(game.phase(), GamePhase::Running);
        assert_eq!(game.drain_events(), vec![GameEvent::RunStarted]);
        assert!(game.drain_events().is_empty());

        // No restart mid-run
        assert!(!game.start(&RunConfig::default()));
        assert!(game.drain_events().is_empty());
    }

    #[test]
    fn test_two_runs_keep_best() {
        let mut game = quiet_game();

        game.start(&RunConfig::default());
        let first = play_to_death(&mut game, 12);
        assert_eq!(first.score, 12);
        assert!(first.new_high_score);
        assert_eq!(game.phase(), GamePhase::Dead);

        game.start(&RunConfig::default());
        let second = play_to_death(&mut game, 8);
        assert_eq!(second.score, 8);
        assert!(!second.new_high_score);
        assert_eq!(second.best_score, 12);
        assert_eq!(game.best_score(), 12);
        assert_eq!(game.last_summary(), Some(second));

        assert_eq!(
            game.drain_events(),
            vec![
                GameEvent::RunStarted,
                GameEvent::RunEnded(first),
                GameEvent::RunStarted,
                GameEvent::RunEnded(second),
            ]
        );
    }

    #[test]
    fn test_dead_run_is_frozen() {
        let mut game = quiet_game();
        game.start(&RunConfig::default());
        let summary = play_to_death(&mut game, 2);

        assert!(matches!(game.tick(&TickInput { jump: true }), TickOutcome::Inactive));
        let frame = game.frame().unwrap();
        assert_eq!(frame.phase, GamePhase::Dead);
        assert_eq!(frame.score, summary.score);
        assert_eq!(frame.best_score, 2);
        // Run end was recorded exactly once
        let ended = game
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::RunEnded(_)))
            .count();
        assert_eq!(ended, 1);
    }

    #[test]
    fn test_restart_resets_speed() {
        let mut game = Game::with_tuning(
            7,
            Tuning {
                spawn_base_rate: 1.0,
                ..Tuning::default()
            },
        );
        let config = RunConfig {
            initial_speed: 10.0,
            ..RunConfig::default()
        };
        game.start(&config);
        for _ in 0..20 {
            if !matches!(game.tick(&TickInput::default()), TickOutcome::Frame(_)) {
                break;
            }
        }
        assert!(game.run().unwrap().speed() > 10.0);

        // Force the end of the run, then start again
        game.run.as_mut().unwrap().phase = GamePhase::Dead;
        assert!(game.start(&config));
        let run = game.run().unwrap();
        assert_eq!(run.speed(), 10.0);
        assert!(run.obstacles.is_empty());
        assert_eq!(run.elapsed_ticks, 0);
    }

    #[test]
    fn test_tuning_applies_to_every_run() {
        let tuning = Tuning::from_json(r#"{ "jump_impulse": 14, "spawn_base_rate": 0 }"#).unwrap();
        let mut game = Game::with_tuning(3, tuning.clone());
        game.start(&RunConfig::default());
        assert_eq!(game.run().unwrap().tuning, tuning);
        game.run.as_mut().unwrap().phase = GamePhase::Dead;
        game.start(&RunConfig::default());
        assert_eq!(game.run().unwrap().tuning.jump_impulse, 14.0);
    }

    #[test]
    fn test_runs_get_different_seeds() {
        let mut game = quiet_game();
        game.start(&RunConfig::default());
        let first_seed = game.run().unwrap().seed;
        game.run.as_mut().unwrap().phase = GamePhase::Dead;
        game.start(&RunConfig::default());
        assert_ne!(game.run().unwrap().seed, first_seed);
    }
}
