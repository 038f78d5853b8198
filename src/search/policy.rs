//! Scoring policies for candidate turns.
//!
//! A policy assigns a `Score` to each fully applied candidate. The selector
//! only compares scores, so deterministic and randomized policies plug in
//! the same way.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::core::{Board, CandidateId, ConfigError, GameRng, Player, Turn, WorkerSet};
use crate::rules::{can_win_immediately, is_winning_move};

use super::config::{check_baseline, SelectorConfig};

/// Ordinal score of a candidate turn. Higher is better.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Score(pub i32);

impl Score {
    /// Immediate win. Strictly above every other score.
    pub const WIN: Score = Score(i32::MAX);

    /// Hands the opponent a win. Strictly below every other score.
    pub const LOSS: Score = Score(i32::MIN);

    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    #[must_use]
    pub fn is_win(self) -> bool {
        self == Score::WIN
    }

    #[must_use]
    pub fn is_loss(self) -> bool {
        self == Score::LOSS
    }
}

/// A candidate turn with the snapshots it produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// The player taking the turn.
    pub player: Player,
    pub id: CandidateId,
    pub turn: Turn,
    /// Worker positions after the move.
    pub workers: WorkerSet,
    /// Board after the build.
    pub board: Board,
}

impl Candidate {
    /// The mover ends the turn on a height-3 cell.
    #[must_use]
    pub fn is_win(&self) -> bool {
        is_winning_move(&self.turn.mv, &self.board)
    }

    /// The opponent could reach height 3 on its very next move.
    #[must_use]
    pub fn allows_opponent_win(&self) -> bool {
        can_win_immediately(self.player.opponent(), &self.workers, &self.board)
    }
}

/// Policy for scoring candidate turns.
pub trait ScoringPolicy: Send + Sync {
    /// Score one candidate. May draw from `rng`.
    fn score(&self, candidate: &Candidate, rng: &mut GameRng) -> Score;
}

/// Win now, otherwise a random baseline, vetoed if the opponent can win next.
///
/// Wins are never vetoed: the game ends before the opponent moves.
#[derive(Clone, Debug)]
pub struct SafetyScoring {
    baseline: RangeInclusive<i32>,
}

impl SafetyScoring {
    /// Fails unless `baseline` is non-empty and lies strictly between the
    /// loss and win sentinels.
    pub fn new(baseline: RangeInclusive<i32>) -> Result<Self, ConfigError> {
        check_baseline(&baseline)?;
        Ok(Self { baseline })
    }

    pub fn from_config(config: &SelectorConfig) -> Result<Self, ConfigError> {
        Self::new(config.baseline_range())
    }
}

impl Default for SafetyScoring {
    fn default() -> Self {
        Self {
            baseline: SelectorConfig::default().baseline_range(),
        }
    }
}

impl ScoringPolicy for SafetyScoring {
    fn score(&self, candidate: &Candidate, rng: &mut GameRng) -> Score {
        if candidate.is_win() {
            return Score::WIN;
        }

        let baseline = Score(rng.gen_score(self.baseline.clone()));

        if candidate.allows_opponent_win() {
            tracing::trace!(id = ?candidate.id, "candidate vetoed: opponent wins next");
            return Score::LOSS;
        }

        baseline
    }
}

/// Same tiers as `SafetyScoring` with a constant baseline.
///
/// The selector keeps the first maximal candidate, so this picks the first
/// winning turn, else the first safe one, in enumeration order.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstSafeScoring;

impl ScoringPolicy for FirstSafeScoring {
    fn score(&self, candidate: &Candidate, _rng: &mut GameRng) -> Score {
        if candidate.is_win() {
            Score::WIN
        } else if candidate.allows_opponent_win() {
            Score::LOSS
        } else {
            Score(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Construction, Move, Position, Worker};

    fn candidate(rows: [[u8; 5]; 5], workers: WorkerSet, turn: Turn) -> Candidate {
        let board = Board::from_rows(rows).unwrap();
        let (workers, board) = turn.apply(&workers, &board);
        Candidate {
            player: turn.mv.player,
            id: CandidateId { worker: turn.mv.worker, move_index: 0, build_index: 0 },
            turn,
            workers,
            board,
        }
    }

    fn workers() -> WorkerSet {
        WorkerSet::new(
            [Position::new(1, 1), Position::new(0, 4)],
            [Position::new(4, 4), Position::new(4, 3)],
        )
        .unwrap()
    }

    #[test]
    fn test_score_sentinels_bound_everything() {
        assert!(Score::WIN > Score(i32::MAX - 1));
        assert!(Score::LOSS < Score(i32::MIN + 1));
        assert!(Score::WIN.is_win() && Score::LOSS.is_loss());
    }

    #[test]
    fn test_win_scores_max() {
        let mut rows = [[0; 5]; 5];
        rows[1][1] = 2;
        rows[1][2] = 3;
        let turn = Turn::new(
            Move::new(Player::A, Worker::First, Position::new(2, 1)),
            Construction::new(Position::new(3, 1)),
        );
        let c = candidate(rows, workers(), turn);

        let mut rng = GameRng::new(1);
        assert_eq!(SafetyScoring::default().score(&c, &mut rng), Score::WIN);
        assert_eq!(FirstSafeScoring.score(&c, &mut rng), Score::WIN);
    }

    #[test]
    fn test_safe_turn_gets_baseline() {
        let turn = Turn::new(
            Move::new(Player::A, Worker::First, Position::new(2, 2)),
            Construction::new(Position::new(2, 3)),
        );
        let c = candidate([[0; 5]; 5], workers(), turn);

        let policy = SafetyScoring::new(10..=20).unwrap();
        let mut rng = GameRng::new(1);
        for _ in 0..50 {
            let score = policy.score(&c, &mut rng).value();
            assert!((10..=20).contains(&score));
        }
        assert_eq!(FirstSafeScoring.score(&c, &mut rng), Score(1));
    }

    #[test]
    fn test_baseline_must_sit_between_sentinels() {
        assert_eq!(
            SafetyScoring::new(10..=1).unwrap_err(),
            ConfigError::EmptyBaselineRange { min: 10, max: 1 }
        );
        assert_eq!(
            SafetyScoring::new(1..=i32::MAX).unwrap_err(),
            ConfigError::BaselineOutOfBounds { min: 1, max: i32::MAX }
        );
        assert_eq!(
            SafetyScoring::new(i32::MIN..=5).unwrap_err(),
            ConfigError::BaselineOutOfBounds { min: i32::MIN, max: 5 }
        );
        assert!(SafetyScoring::from_config(&SelectorConfig::default().with_baseline(0, 3)).is_err());
        assert!(SafetyScoring::new(1..=1).is_ok());
    }

    #[test]
    fn test_default_baseline_matches_default_config() {
        let policy = SafetyScoring::default();
        assert_eq!(policy.baseline, SelectorConfig::default().baseline_range());
        assert!(check_baseline(&policy.baseline).is_ok());
    }

    #[test]
    fn test_opponent_win_is_vetoed() {
        // B at (4,3) stands at height 2 next to a height-3 cell at (3,3)
        let mut rows = [[0; 5]; 5];
        rows[3][4] = 2;
        rows[3][3] = 3;
        let turn = Turn::new(
            Move::new(Player::A, Worker::First, Position::new(2, 1)),
            Construction::new(Position::new(2, 2)),
        );
        let c = candidate(rows, workers(), turn);

        let mut rng = GameRng::new(1);
        assert!(c.allows_opponent_win());
        assert_eq!(SafetyScoring::default().score(&c, &mut rng), Score::LOSS);
        assert_eq!(FirstSafeScoring.score(&c, &mut rng), Score::LOSS);
    }
}
