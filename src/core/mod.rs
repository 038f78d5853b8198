//! Core game types: positions, players, board, workers, actions, RNG, errors.
//!
//! Everything here is a small immutable value. Rules and search never mutate
//! a snapshot in place; they derive new ones.

pub mod position;
pub mod player;
pub mod board;
pub mod workers;
pub mod action;
pub mod rng;
pub mod error;

pub use position::{Position, BOARD_SIZE, MAX_COORD};
pub use player::{Player, Worker};
pub use board::{Board, CAPPED, WINNING_HEIGHT};
pub use workers::WorkerSet;
pub use action::{CandidateId, Construction, Move, Turn};
pub use rng::GameRng;
pub use error::{ConfigError, RuleError, RuleResult};
