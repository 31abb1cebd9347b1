use crate::cell::Cell;

/// Errors surfaced by board operations. Every failing operation leaves the
/// board untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("illegal move: position {position} is occupied or has no support below")]
    IllegalMove { position: usize },

    #[error("{0:?} is not a valid side")]
    InvalidSide(Cell),

    #[error("position {0} is outside the board")]
    OutOfRange(usize),

    #[error("coordinate ({row}, {col}) is outside the board")]
    CoordOutOfRange { row: usize, col: usize },

    #[error("snapshot has a floating piece at position {position}")]
    FloatingPiece { position: usize },

    #[error("snapshot has a buried four-in-a-row at position {position}")]
    BuriedRun { position: usize },
}
