//! Turn controller: validate a move, place it, judge it, end or pass the turn.

use serde::Serialize;
use tracing::{debug, instrument};

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::eval::{self, Verdict};
use crate::topology::Topology;
use crate::{CellId, Player};

/// Session state. `GameOver` is absorbing until [`Game::reset`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Status {
    InProgress,
    GameOver {
        winner: Player,
        /// Verdict of the final placement, from the mover's side.
        verdict: Verdict,
    },
}

/// Result of an accepted move.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct MoveOutcome {
    pub cell: CellId,
    /// Player who placed the stone.
    pub player: Player,
    pub verdict: Verdict,
    /// Set once the game is decided.
    pub winner: Option<Player>,
    /// Deciding run, for highlighting. Empty while the game continues.
    pub line: Vec<CellId>,
}

/// One game session: board, side to move and status.
#[derive(Clone, Debug)]
pub struct Game {
    topology: &'static Topology,
    board: Board,
    current: Player,
    status: Status,
    config: GameConfig,
    moves: u32,
}

impl Game {
    /// New game on the standard board with default options.
    pub fn new() -> Game {
        Game::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Game {
        let topology = Topology::standard();
        Game {
            topology,
            board: Board::new(topology),
            current: config.first_player,
            status: Status::InProgress,
            config,
            moves: 0,
        }
    }

    /// Place the current player's stone on `id` and resolve the turn.
    ///
    /// Rejected moves return an error and leave the session unchanged.
    #[instrument(level = "debug", skip(self))]
    pub fn submit_move(&mut self, id: CellId) -> Result<MoveOutcome, GameError> {
        if self.is_game_over() {
            debug!("rejected: game over");
            return Err(GameError::MoveAfterGameOver);
        }

        let player = self.current;
        if let Err(err) = self.board.place(id, player) {
            debug!(%err, "rejected");
            return Err(err);
        }
        self.moves += 1;

        let evaluation = eval::assess(self.topology, &self.board, id, player, self.config.precedence);
        let winner = evaluation.verdict.is_terminal().then(|| match evaluation.verdict {
            Verdict::Lose => player.opponent(),
            _ => player,
        });

        match winner {
            Some(winner) => {
                self.status = Status::GameOver {
                    winner,
                    verdict: evaluation.verdict,
                };
                debug!(%player, verdict = ?evaluation.verdict, %winner, "game over");
            }
            None => {
                self.current = player.opponent();
                debug!(%player, next = %self.current, "move accepted");
            }
        }

        Ok(MoveOutcome {
            cell: id,
            player,
            verdict: evaluation.verdict,
            winner,
            line: evaluation.line,
        })
    }

    /// Back to an empty board with the configured first player.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.current = self.config.first_player;
        self.status = Status::InProgress;
        self.moves = 0;
    }

    /// Player to move. After the game ends this is the player who moved last.
    #[inline]
    pub fn current_player(&self) -> Player {
        self.current
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        matches!(self.status, Status::GameOver { .. })
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Winner of a finished game.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            Status::GameOver { winner, .. } => Some(winner),
            Status::InProgress => None,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn topology(&self) -> &'static Topology {
        self.topology
    }

    #[inline]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Stones placed since the last reset.
    #[inline]
    pub fn move_count(&self) -> u32 {
        self.moves
    }

    /// Cells the current player may play. Empty once the game is over.
    pub fn legal_moves(&self) -> Vec<CellId> {
        if self.is_game_over() {
            return Vec::new();
        }
        self.board.empty_cells().collect()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
