use core::fmt;
use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Number of cells along one side of the board.
pub const BOARD_SIDE: u8 = 3;

/// Total number of cells on the board.
pub const CELL_COUNT: u8 = BOARD_SIDE * BOARD_SIDE;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Player placing the mark of move number `index + 1`, `X` always opens.
    pub const fn for_move(index: usize) -> Self {
        if index % 2 == 0 { Self::X } else { Self::O }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::O => "O",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Content of a single cell, `None` when empty.
pub type Mark = Option<Player>;

/// A cell of the board, numbered row-major from 0 (top-left) to 8 (bottom-right).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position(u8);

impl Position {
    pub const fn new(index: u8) -> Result<Self> {
        if index < CELL_COUNT {
            Ok(Self(index))
        } else {
            Err(GameError::InvalidPosition)
        }
    }

    pub(crate) const fn new_unchecked(index: u8) -> Self {
        Self(index)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn row(self) -> u8 {
        self.0 / BOARD_SIDE
    }

    pub const fn column(self) -> u8 {
        self.0 % BOARD_SIDE
    }
}

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Position {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.row().into(), self.column().into()]
    }
}
