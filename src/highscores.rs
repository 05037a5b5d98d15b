//! Score tracking
//!
//! One point per simulated second survived, independent of difficulty. The
//! best score lives only as long as the process.

use serde::{Deserialize, Serialize};

use crate::consts::TICKS_PER_SECOND;

/// Score for a number of simulated seconds
pub fn current_score(elapsed_secs: f64) -> u64 {
    elapsed_secs.max(0.0).floor() as u64
}

/// Score for a number of ticks survived (exact at whole-second boundaries)
pub fn score_for_ticks(elapsed_ticks: u64) -> u64 {
    elapsed_ticks / TICKS_PER_SECOND
}

/// Result of a finished run, as shown on the game-over menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Final score of the run
    pub score: u64,
    /// Best score after this run was recorded
    pub best_score: u64,
    /// This run set a new best
    pub new_high_score: bool,
}

/// Best score across runs in this process
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scorekeeper {
    best: u64,
}

impl Scorekeeper {
    pub fn new() -> Self {
        Self { best: 0 }
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    /// Record a finished run's score. Returns true for a new high score.
    pub fn record_run_end(&mut self, score: u64) -> bool {
        if score > self.best {
            log::info!("New high score: {} (was {})", score, self.best);
            self.best = score;
            true
        } else {
            false
        }
    }

    /// Record a run and build its summary
    pub fn summarize(&mut self, score: u64) -> RunSummary {
        let new_high_score = self.record_run_end(score);
        RunSummary {
            score,
            best_score: self.best,
            new_high_score,
        }
    }
}
