//! One-ply turn selection.
//!
//! For the active player, every (worker, move, build) combination is applied
//! to fresh copies of the snapshots and scored by a `ScoringPolicy`. The
//! first combination with the strictly highest score is played.
//!
//! If the enumeration yields no moves, or no builds, the player is stuck and
//! nothing is scored.

use serde::{Deserialize, Serialize};

use crate::core::{
    Board, CandidateId, ConfigError, Construction, GameRng, Move, Player, Turn, Worker, WorkerSet,
};
use crate::rules::{candidate_builds, candidate_moves, is_winning_move};

use super::config::SelectorConfig;
use super::policy::{Candidate, SafetyScoring, Score, ScoringPolicy};
use super::stats::TurnStats;

/// Result of playing one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The turn was played and the game goes on.
    Continuing {
        turn: Turn,
        workers: WorkerSet,
        board: Board,
    },
    /// The turn put the mover on height 3.
    Won {
        winner: Player,
        turn: Turn,
        workers: WorkerSet,
        board: Board,
    },
    /// The player had no move followed by a build, and loses.
    Stuck(Player),
}

impl TurnOutcome {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TurnOutcome::Continuing { .. })
    }

    /// The winner, if the game ended this turn.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            TurnOutcome::Continuing { .. } => None,
            TurnOutcome::Won { winner, .. } => Some(*winner),
            TurnOutcome::Stuck(player) => Some(player.opponent()),
        }
    }

    /// The turn that was played, if any.
    #[must_use]
    pub fn turn(&self) -> Option<Turn> {
        match self {
            TurnOutcome::Continuing { turn, .. } | TurnOutcome::Won { turn, .. } => Some(*turn),
            TurnOutcome::Stuck(_) => None,
        }
    }

    /// Snapshots after the turn, if a turn was played.
    #[must_use]
    pub fn snapshot(&self) -> Option<(WorkerSet, Board)> {
        match self {
            TurnOutcome::Continuing { workers, board, .. }
            | TurnOutcome::Won { workers, board, .. } => Some((*workers, *board)),
            TurnOutcome::Stuck(_) => None,
        }
    }
}

/// A combination with its score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredTurn {
    pub id: CandidateId,
    pub turn: Turn,
    pub score: Score,
}

/// Turn selection context.
///
/// Owns the configuration, the scoring policy, and the RNG stream its
/// baseline scores are drawn from. A played turn that leaves the mover on
/// height 3 is reported as `Won` under any policy.
pub struct TurnSelector {
    config: SelectorConfig,
    rng: GameRng,
    policy: Box<dyn ScoringPolicy>,
    stats: TurnStats,
}

impl TurnSelector {
    /// Create a selector with the default `SafetyScoring` policy.
    pub fn new(config: SelectorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            rng: GameRng::new(config.seed),
            policy: Box::new(SafetyScoring::from_config(&config)?),
            config,
            stats: TurnStats::default(),
        })
    }

    /// Set a custom scoring policy.
    pub fn with_policy<P: ScoringPolicy + 'static>(mut self, policy: P) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Replace the RNG stream.
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    #[must_use]
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Statistics from the most recent turn.
    #[must_use]
    pub fn stats(&self) -> &TurnStats {
        &self.stats
    }

    /// Score every combination for `player`.
    ///
    /// Returns `None` if the player is stuck; in that case nothing is scored.
    pub fn evaluate(&mut self, player: Player, workers: &WorkerSet, board: &Board) -> Option<Vec<ScoredTurn>> {
        self.stats.reset();
        score_all(&*self.policy, &mut self.rng, &mut self.stats, player, workers, board)
    }

    /// Select and apply a turn for `player`.
    pub fn play_turn(&mut self, player: Player, workers: &WorkerSet, board: &Board) -> TurnOutcome {
        self.stats.reset();
        run_turn(&*self.policy, &mut self.rng, &mut self.stats, player, workers, board)
    }
}

/// Select and apply a turn with the default `SafetyScoring` policy.
///
/// ```
/// use santorini_engine::core::{Board, GameRng, Player, Position, WorkerSet};
/// use santorini_engine::search::{play_turn, TurnOutcome};
///
/// let workers = WorkerSet::new(
///     [Position::new(1, 1), Position::new(3, 3)],
///     [Position::new(1, 3), Position::new(3, 1)],
/// ).unwrap();
/// let mut rng = GameRng::new(42);
///
/// let outcome = play_turn(Player::A, &workers, &Board::empty(), &mut rng);
/// assert!(matches!(outcome, TurnOutcome::Continuing { .. }));
/// ```
pub fn play_turn(player: Player, workers: &WorkerSet, board: &Board, rng: &mut GameRng) -> TurnOutcome {
    let mut stats = TurnStats::default();
    run_turn(&SafetyScoring::default(), rng, &mut stats, player, workers, board)
}

/// Every (worker, move, build) combination in enumeration order.
///
/// Workers first-to-second, then moves and builds column-major.
fn enumerate(player: Player, workers: &WorkerSet, board: &Board, stats: &mut TurnStats) -> Vec<(CandidateId, Turn)> {
    let mut combinations = Vec::new();

    for worker in Worker::BOTH {
        for (move_index, destination) in candidate_moves(player, worker, workers, board).into_iter().enumerate() {
            stats.moves_generated += 1;
            let mv = Move::new(player, worker, destination);

            for (build_index, target) in candidate_builds(&mv, workers, board).into_iter().enumerate() {
                stats.builds_generated += 1;
                let id = CandidateId {
                    worker,
                    move_index,
                    build_index,
                };
                combinations.push((id, Turn::new(mv, Construction::new(target))));
            }
        }
    }

    combinations
}

fn score_all(
    policy: &dyn ScoringPolicy,
    rng: &mut GameRng,
    stats: &mut TurnStats,
    player: Player,
    workers: &WorkerSet,
    board: &Board,
) -> Option<Vec<ScoredTurn>> {
    let combinations = enumerate(player, workers, board, stats);

    if stats.moves_generated == 0 || stats.builds_generated == 0 {
        tracing::debug!(
            %player,
            moves = stats.moves_generated,
            builds = stats.builds_generated,
            "player is stuck"
        );
        return None;
    }

    let scored = combinations
        .into_iter()
        .map(|(id, turn)| {
            let (next_workers, next_board) = turn.apply(workers, board);
            let candidate = Candidate {
                player,
                id,
                turn,
                workers: next_workers,
                board: next_board,
            };
            let score = policy.score(&candidate, rng);
            stats.record(score);
            tracing::trace!(?id, score = score.value(), "scored candidate");
            ScoredTurn { id, turn, score }
        })
        .collect();

    Some(scored)
}

/// First combination with the strictly highest score.
fn select_best(scored: &[ScoredTurn]) -> Option<ScoredTurn> {
    let mut best: Option<ScoredTurn> = None;
    for candidate in scored {
        if best.map_or(true, |b| candidate.score > b.score) {
            best = Some(*candidate);
        }
    }
    best
}

fn run_turn(
    policy: &dyn ScoringPolicy,
    rng: &mut GameRng,
    stats: &mut TurnStats,
    player: Player,
    workers: &WorkerSet,
    board: &Board,
) -> TurnOutcome {
    let Some(scored) = score_all(policy, rng, stats, player, workers, board) else {
        return TurnOutcome::Stuck(player);
    };
    let Some(best) = select_best(&scored) else {
        return TurnOutcome::Stuck(player);
    };
    stats.best_score = Some(best.score);

    let (next_workers, next_board) = best.turn.apply(workers, board);

    tracing::debug!(
        %player,
        id = ?best.id,
        destination = %best.turn.mv.destination,
        build = %best.turn.build.target,
        score = best.score.value(),
        combinations = stats.combinations_scored,
        vetoed = stats.vetoed,
        "turn selected"
    );

    // the rules decide the outcome, whatever the policy scored
    if is_winning_move(&best.turn.mv, &next_board) {
        tracing::debug!(%player, score = best.score.value(), "winning turn played");
        TurnOutcome::Won {
            winner: player,
            turn: best.turn,
            workers: next_workers,
            board: next_board,
        }
    } else {
        TurnOutcome::Continuing {
            turn: best.turn,
            workers: next_workers,
            board: next_board,
        }
    }
}
