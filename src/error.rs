use crate::CellId;

/// Reasons a move is rejected. The session is left untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("cell {0} is not on the board")]
    InvalidCell(CellId),

    #[error("cell {0} is already occupied")]
    IllegalMove(CellId),

    #[error("the game is over; reset to play again")]
    MoveAfterGameOver,
}

/// Errors that can occur when building a topology from a layout description.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TopologyError {
    #[error("cell {0} appears more than once in the layout")]
    DuplicateCell(u8),

    #[error("cell {0} is missing; ids must be contiguous from 0")]
    MissingCell(u8),

    #[error("layout has {0} cells, at most 64 fit in a board mask")]
    TooManyCells(usize),
}

/// Errors that can occur when loading a game configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
