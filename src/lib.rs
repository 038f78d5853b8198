//! # santorini-engine
//!
//! Rules engine and one-ply turn selector for the board game Santorini.
//!
//! ## Design Principles
//!
//! 1. **Immutable Snapshots**: `Board` and `WorkerSet` are small `Copy`
//!    values. Speculative evaluation always works on fresh copies; the
//!    caller's snapshot is only replaced by the returned outcome.
//!
//! 2. **Generate, Don't Probe**: Legality is decided by the same generators
//!    that produce candidates, so the search never applies an illegal turn.
//!
//! 3. **Pluggable Scoring**: the selector compares scores from a
//!    `ScoringPolicy`; randomized and deterministic policies both fit.
//!
//! ## Modules
//!
//! - `core`: Positions, players, board, workers, actions, RNG, errors
//! - `rules`: Neighborhood, move, build, and terminal rules
//! - `search`: Turn selection with the one-ply safety veto
//! - `games`: A driver that plays turns until the game ends

pub mod core;
pub mod rules;
pub mod search;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Board, CandidateId, ConfigError, Construction, GameRng, Move, Player, Position,
    RuleError, RuleResult, Turn, Worker, WorkerSet,
};

pub use crate::rules::{
    candidate_builds, candidate_moves, is_legal_build, is_legal_move, is_stuck, is_winning_move,
    neighbors_and_self,
};

pub use crate::search::{
    play_turn, Candidate, FirstSafeScoring, SafetyScoring, Score, ScoredTurn, ScoringPolicy,
    SelectorConfig, TurnOutcome, TurnSelector, TurnStats,
};

pub use crate::games::{GameRecord, GameResult, GameRunner, RunnerConfig, WinReason};
