//! Game driver: plays turns alternately until the game ends.
//!
//! Board setup is the caller's concern; the runner starts from whatever
//! snapshots it is handed.

use serde::{Deserialize, Serialize};

use crate::core::{Board, ConfigError, GameRng, Player, Turn, WorkerSet};
use crate::search::{ScoringPolicy, SelectorConfig, TurnOutcome, TurnSelector};

/// Runner configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Selector settings; `seed` seeds both players' streams.
    pub selector: SelectorConfig,

    /// Stop after this many turns without a result (0 = unlimited).
    pub max_turns: u32,

    /// Keep a record of every turn played.
    pub record_history: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            selector: SelectorConfig::default(),
            max_turns: 200,
            record_history: true,
        }
    }
}

impl RunnerConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.selector.seed = seed;
        self
    }

    /// Create a new config with a custom turn cap.
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }
}

/// How a game was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinReason {
    /// The winner moved onto height 3.
    ReachedLevelThree,
    /// The loser could not move and build.
    OpponentStuck,
}

/// Result of a completed or capped game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Winner { player: Player, reason: WinReason },
    /// The turn cap was reached first.
    Unfinished,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner { player: p, .. } if *p == player)
    }
}

/// One played turn with the snapshots it produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub player: Player,
    pub turn: Turn,
    pub workers: WorkerSet,
    pub board: Board,
}

/// Summary of a game run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub result: GameResult,
    pub turns_played: u32,
    /// Final worker positions.
    pub workers: WorkerSet,
    /// Final board.
    pub board: Board,
    /// Every turn, in order. Empty unless history was requested.
    pub history: Vec<TurnRecord>,
}

/// Alternates `play_turn` between the two players.
pub struct GameRunner {
    config: RunnerConfig,
    selectors: [TurnSelector; 2],
}

impl GameRunner {
    /// Create a runner; each player gets an independent fork of the seed.
    pub fn new(config: RunnerConfig) -> Result<Self, ConfigError> {
        let mut root = GameRng::new(config.selector.seed);
        let selector_a = TurnSelector::new(config.selector.clone())?.with_rng(root.fork());
        let selector_b = TurnSelector::new(config.selector.clone())?.with_rng(root.fork());
        Ok(Self {
            config,
            selectors: [selector_a, selector_b],
        })
    }

    /// Use `policy` for one player's turns.
    pub fn with_policy<P: ScoringPolicy + 'static>(mut self, player: Player, policy: P) -> Self {
        let [a, b] = self.selectors;
        self.selectors = match player {
            Player::A => [a.with_policy(policy), b],
            Player::B => [a, b.with_policy(policy)],
        };
        self
    }

    #[must_use]
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Play from the given snapshots with `first` to move.
    pub fn run(&mut self, first: Player, workers: WorkerSet, board: Board) -> GameRecord {
        let mut workers = workers;
        let mut board = board;
        let mut player = first;
        let mut turns_played = 0u32;
        let mut history = Vec::new();

        let result = loop {
            if self.config.max_turns > 0 && turns_played >= self.config.max_turns {
                tracing::debug!(turns_played, "turn cap reached");
                break GameResult::Unfinished;
            }

            let outcome = self.selectors[player.index()].play_turn(player, &workers, &board);

            if let (Some(turn), Some((next_workers, next_board))) = (outcome.turn(), outcome.snapshot()) {
                workers = next_workers;
                board = next_board;
                turns_played += 1;
                if self.config.record_history {
                    history.push(TurnRecord {
                        player,
                        turn,
                        workers,
                        board,
                    });
                }
            }

            match outcome {
                TurnOutcome::Continuing { .. } => player = player.opponent(),
                TurnOutcome::Won { winner, .. } => {
                    break GameResult::Winner {
                        player: winner,
                        reason: WinReason::ReachedLevelThree,
                    };
                }
                TurnOutcome::Stuck(stuck) => {
                    break GameResult::Winner {
                        player: stuck.opponent(),
                        reason: WinReason::OpponentStuck,
                    };
                }
            }
        };

        tracing::debug!(?result, turns_played, blocks = board.total_height(), "game finished");

        GameRecord {
            result,
            turns_played,
            workers,
            board,
            history,
        }
    }
}
