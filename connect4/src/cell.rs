use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// The content of a single board square.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[repr(u8)]
pub enum Cell {
    Empty = 0,
    Black = 1,
    Red = 2,
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// The opposing side. `Empty` has no other side.
    pub fn other_side(self) -> Result<Cell, BoardError> {
        match self {
            Cell::Black => Ok(Cell::Red),
            Cell::Red => Ok(Cell::Black),
            Cell::Empty => Err(BoardError::InvalidSide(Cell::Empty)),
        }
    }

    pub(crate) fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Black => 'b',
            Cell::Red => 'r',
        }
    }
}
