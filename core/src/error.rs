use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Board must have exactly 9 cells")]
    InvalidBoardShape,
    #[error("Cell is already occupied")]
    Occupied,
    #[error("Game already won, no new moves are accepted")]
    AlreadyWon,
    #[error("Move index is outside of the history")]
    MoveOutOfRange,
    #[error("History is not a sequence of single moves from an empty board")]
    InvalidHistory,
}

pub type Result<T> = core::result::Result<T, GameError>;
