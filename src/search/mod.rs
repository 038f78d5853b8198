//! One-ply, safety-aware turn selection.
//!
//! ## Architecture
//!
//! - `TurnSelector`: enumerates and scores every combination, plays the best
//! - `ScoringPolicy`: pluggable scoring (`SafetyScoring`, `FirstSafeScoring`)
//! - `SelectorConfig`: seed and baseline score range
//! - `TurnStats`: per-turn diagnostics
//!
//! There is no look-ahead beyond the opponent's immediate reply.

pub mod config;
pub mod policy;
pub mod selector;
pub mod stats;

pub use config::SelectorConfig;
pub use policy::{Candidate, FirstSafeScoring, SafetyScoring, Score, ScoringPolicy};
pub use selector::{play_turn, ScoredTurn, TurnOutcome, TurnSelector};
pub use stats::TurnStats;
