//! Per-turn selection statistics for diagnostics.

use serde::{Deserialize, Serialize};

use super::policy::Score;

/// Statistics collected while selecting one turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnStats {
    /// Legal moves generated across both workers.
    pub moves_generated: u32,

    /// Legal builds generated across all those moves.
    pub builds_generated: u32,

    /// Combinations handed to the scoring policy.
    pub combinations_scored: u32,

    /// Combinations scored as an immediate win.
    pub wins_found: u32,

    /// Combinations vetoed to the loss score.
    pub vetoed: u32,

    /// Score of the selected combination, if one was selected.
    pub best_score: Option<Score>,
}

impl TurnStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Count one scored combination.
    pub fn record(&mut self, score: Score) {
        self.combinations_scored += 1;
        if score.is_win() {
            self.wins_found += 1;
        } else if score.is_loss() {
            self.vetoed += 1;
        }
    }

    /// Fraction of scored combinations that were vetoed.
    #[must_use]
    pub fn veto_rate(&self) -> f64 {
        if self.combinations_scored == 0 {
            0.0
        } else {
            f64::from(self.vetoed) / f64::from(self.combinations_scored)
        }
    }
}
