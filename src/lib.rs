//! Hex-board game logic: four in a row wins, exactly three in a row loses.
//!
//! # Board Layout
//!
//! The 61-cell hexagon is flattened into a 9x9 row/column grid. Coordinate
//! `(r, c)` holds a cell iff `4 <= r + c <= 12`; ids are assigned row-major.
//!
//! ```text
//! row 0:  .  .  .  .  0  1  2  3  4
//! row 1:  .  .  .  5  6  7  8  9 10
//! row 2:  .  . 11 12 13 14 15 16 17
//! row 3:  . 18 19 20 21 22 23 24 25
//! row 4: 26 27 28 29 30 31 32 33 34
//! row 5: 35 36 37 38 39 40 41 42  .
//! row 6: 43 44 45 46 47 48 49  .  .
//! row 7: 50 51 52 53 54 55  .  .  .
//! row 8: 56 57 58 59 60  .  .  .  .
//! ```
//!
//! Neighbours of `(r, c)`: `(r±1, c)`, `(r, c±1)`, `(r-1, c+1)`, `(r+1, c-1)`.
//!
//! # Board Encoding (2 × 64-bit)
//!
//! ```text
//! white: bit i set = White stone on cell i
//! black: bit i set = Black stone on cell i
//! Bits 61-63 of both masks are always zero.
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod eval;
pub mod game;
pub mod topology;

#[cfg(feature = "wasm")]
pub mod wasm;

use serde::{Deserialize, Serialize};

pub use board::Board;
pub use config::{GameConfig, Precedence};
pub use error::{ConfigError, GameError, TopologyError};
pub use eval::Verdict;
pub use game::{Game, MoveOutcome, Status};
pub use topology::{Axis, Coord, Direction, Topology};

/// Player identifier. White moves first unless configured otherwise.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Player {
    White = 1,
    Black = 2,
}

impl Player {
    /// Get the opponent player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Single-character symbol used by text rendering.
    pub fn symbol(self) -> char {
        match self {
            Player::White => 'W',
            Player::Black => 'B',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::White => f.write_str("white"),
            Player::Black => f.write_str("black"),
        }
    }
}

/// Cell identifier: one playable hex (0-60 on the standard board).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellId(pub u8);

impl CellId {
    /// Index into per-cell arrays and bit masks.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Single-bit mask for this cell.
    #[inline]
    pub fn bit(self) -> u64 {
        1u64 << self.0
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
