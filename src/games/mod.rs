//! Game drivers built on the turn selector.

pub mod runner;

pub use runner::{GameRecord, GameResult, GameRunner, RunnerConfig, TurnRecord, WinReason};
