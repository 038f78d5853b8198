//! Player and worker identification.
//!
//! Santorini is strictly two-player with two workers each, so both ids are
//! closed enums rather than numeric indices.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::A => write!(f, "Player A"),
            Player::B => write!(f, "Player B"),
        }
    }
}

/// One of a player's two workers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Worker {
    First,
    Second,
}

impl Worker {
    /// Both workers in enumeration order.
    pub const BOTH: [Worker; 2] = [Worker::First, Worker::Second];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Worker::First => 0,
            Worker::Second => 1,
        }
    }
}

impl std::fmt::Display for Worker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "worker {}", self.index())
    }
}
