use std::hash::{Hash, Hasher};

use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::cell::Cell;
use crate::constants::{BOARD_HEIGHT, BOARD_SIZE, BOARD_WIDTH};
use crate::error::BoardError;
use crate::result::GameResult;

/// A Connect Four position as a flat array of cells.
///
/// Linear position `p` maps to `(row, col) = (p / BOARD_WIDTH, p % BOARD_WIDTH)`
/// with row 0 as the bottom row, which is what makes the `p - BOARD_WIDTH`
/// lower-neighbour arithmetic in the legality check work.
#[derive(Clone, Debug, Eq)]
pub struct Board {
    state: [Cell; BOARD_SIZE],
}

/// What a successful `apply_move` hands back: the post-move snapshot, the
/// classification of the resulting position, and whether that ends the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub state: [Cell; BOARD_SIZE],
    pub result: GameResult,
    pub finished: bool,
}

impl Board {
    pub fn new() -> Self {
        Board {
            state: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Builds a board from a caller-supplied snapshot.
    ///
    /// Snapshots containing a piece with an empty cell below it are rejected,
    /// as are snapshots holding a completed run that the topmost-cell win
    /// scan cannot see (a buried run means play continued past a finished
    /// game). Every constructible board therefore satisfies the
    /// preconditions the win scan relies on.
    pub fn from_state(state: [Cell; BOARD_SIZE]) -> Result<Self, BoardError> {
        for position in BOARD_WIDTH..BOARD_SIZE {
            if !state[position].is_empty() && state[position - BOARD_WIDTH].is_empty() {
                return Err(BoardError::FloatingPiece { position });
            }
        }

        let board = Board { state };
        if board.winner().is_none() {
            if let Some(position) = board.completed_run_position() {
                return Err(BoardError::BuriedRun { position });
            }
        }

        Ok(board)
    }

    /// Sets every cell back to `Empty`. Idempotent.
    pub fn reset(&mut self) {
        self.state = [Cell::Empty; BOARD_SIZE];
    }

    pub fn state(&self) -> &[Cell; BOARD_SIZE] {
        &self.state
    }

    /// The cell at a linear position. Panics when the position is out of
    /// range; callers validate with `to_coord` first.
    pub fn cell(&self, position: usize) -> Cell {
        self.state[position]
    }

    pub fn count_empty(&self) -> usize {
        self.state.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Linearises a (row, col) coordinate.
    pub fn to_index(row: usize, col: usize) -> Result<usize, BoardError> {
        if row >= BOARD_HEIGHT || col >= BOARD_WIDTH {
            return Err(BoardError::CoordOutOfRange { row, col });
        }

        Ok(row * BOARD_WIDTH + col)
    }

    /// Inverse of `to_index`.
    pub fn to_coord(position: usize) -> Result<(usize, usize), BoardError> {
        if position >= BOARD_SIZE {
            return Err(BoardError::OutOfRange(position));
        }

        Ok((position / BOARD_WIDTH, position % BOARD_WIDTH))
    }

    /// A position is playable when it is in range, empty, and either on the
    /// bottom row or directly above an occupied cell.
    pub fn is_legal(&self, position: usize) -> bool {
        position < BOARD_SIZE
            && self.state[position].is_empty()
            && (position < BOARD_WIDTH || !self.state[position - BOARD_WIDTH].is_empty())
    }

    /// The single playable position of a column, or None when the column is
    /// full or out of range.
    pub fn drop_position(&self, col: usize) -> Option<usize> {
        if col >= BOARD_WIDTH {
            return None;
        }

        (0..BOARD_HEIGHT)
            .map(|row| row * BOARD_WIDTH + col)
            .find(|&position| self.state[position].is_empty())
    }

    /// All playable positions, one per non-full column, left to right.
    pub fn legal_positions(&self) -> impl Iterator<Item = usize> + '_ {
        (0..BOARD_WIDTH).filter_map(|col| self.drop_position(col))
    }

    /// Uniform choice among the playable positions. None when the board is
    /// full.
    pub fn random_legal_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        let legal: Vec<usize> = self.legal_positions().collect();
        legal.choose(rng).copied()
    }

    /// Places a piece of `side` at a linear position and classifies the
    /// resulting position.
    ///
    /// The target must pass the full `is_legal` check, not just be
    /// unoccupied, so this can never disagree with `is_legal`. A rejected
    /// move leaves the board untouched.
    pub fn apply_move(&mut self, position: usize, side: Cell) -> Result<MoveOutcome, BoardError> {
        if side.is_empty() {
            return Err(BoardError::InvalidSide(side));
        }

        if position >= BOARD_SIZE {
            return Err(BoardError::OutOfRange(position));
        }

        if !self.is_legal(position) {
            warn!("rejected move at position {}", position);
            return Err(BoardError::IllegalMove { position });
        }

        self.state[position] = side;

        let result = self.result();
        Ok(MoveOutcome {
            state: self.state,
            result,
            finished: result.is_finished(),
        })
    }

    /// Classification of the current position, recomputed from the cells.
    pub fn result(&self) -> GameResult {
        if let Some(side) = self.winner() {
            return if side == Cell::Black {
                GameResult::BlackWin
            } else {
                GameResult::RedWin
            };
        }

        if self.count_empty() == 0 {
            return GameResult::Draw;
        }

        GameResult::InProgress
    }

    /// The position packed two bits per cell. Collision-free identity for a
    /// 6x7 board, usable as a cache key the way a transposition hash is.
    pub fn position_hash(&self) -> u128 {
        self.state
            .iter()
            .fold(0u128, |hash, &cell| (hash << 2) | cell as u128)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.position_hash().hash(state);
    }
}
