//! Four-in-a-row detection.
//!
//! Candidate cells are the topmost occupied cell of each column. A win placed
//! by the most recent move always includes the topmost cell of the column it
//! landed in, so scanning only those cells finds it.

use crate::board::Board;
use crate::cell::Cell;
use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH, WIN_LENGTH};

/// A step on the grid as (row delta, column delta). Row 0 is the bottom row.
type Direction = (isize, isize);

/// The win axes, each as the opposite directions to extend along from a
/// candidate cell. Topmost cells have nothing above them, so the vertical
/// axis only looks downward.
const WIN_AXES: [&[Direction]; 4] = [
    &[(0, -1), (0, 1)],  // horizontal
    &[(-1, -1), (1, 1)], // diagonal, bottom-left to top-right
    &[(1, -1), (-1, 1)], // diagonal, top-left to bottom-right
    &[(-1, 0)],          // vertical
];

impl Board {
    /// The side with `WIN_LENGTH` or more contiguous same-colour cells along
    /// any axis, if there is one.
    ///
    /// Precondition: the topmost-cells-only scan finds every win on a board
    /// whose result was evaluated after each applied move, with play stopping
    /// at the first win. `apply_move` works that way; a board built some
    /// other way and holding a fully buried run is outside this contract.
    pub fn winner(&self) -> Option<Cell> {
        for position in self.top_piece_positions() {
            let side = self.cell(position);
            for axis in WIN_AXES {
                let run: usize = axis
                    .iter()
                    .map(|&direction| self.count_in_direction(position, direction))
                    .sum();

                // The run includes the candidate cell itself.
                if 1 + run >= WIN_LENGTH {
                    return Some(side);
                }
            }
        }

        None
    }

    /// A position starting a completed run anywhere on the board, found by
    /// scanning every occupied cell. Every run is seen from its lowest-end
    /// cell by walking only the four forward directions. Used to vet
    /// snapshots whose move history is unknown.
    pub(crate) fn completed_run_position(&self) -> Option<usize> {
        const FORWARD: [Direction; 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

        (0..BOARD_HEIGHT * BOARD_WIDTH).find(|&position| {
            !self.cell(position).is_empty()
                && FORWARD
                    .iter()
                    .any(|&direction| 1 + self.count_in_direction(position, direction) >= WIN_LENGTH)
        })
    }

    /// The topmost occupied position of each column, scanning down from the
    /// top row. Empty columns contribute nothing.
    fn top_piece_positions(&self) -> impl Iterator<Item = usize> + '_ {
        (0..BOARD_WIDTH).filter_map(move |col| {
            (0..BOARD_HEIGHT)
                .rev()
                .map(move |row| row * BOARD_WIDTH + col)
                .find(|&position| !self.cell(position).is_empty())
        })
    }

    /// The number of cells beyond `position` in `direction` matching the
    /// colour at `position`, not counting `position` itself.
    fn count_in_direction(&self, position: usize, direction: Direction) -> usize {
        let side = self.cell(position);
        if side.is_empty() {
            return 0;
        }

        let mut count = 0;
        let mut current = position;
        while let Some(next) = step(current, direction) {
            if self.cell(next) != side {
                break;
            }
            count += 1;
            current = next;
        }

        count
    }
}

/// Applies one direction step to a linear position, or None when the step
/// leaves the grid. Both bounds are strict.
fn step(position: usize, direction: Direction) -> Option<usize> {
    let row = (position / BOARD_WIDTH) as isize + direction.0;
    let col = (position % BOARD_WIDTH) as isize + direction.1;

    if row < 0 || row >= BOARD_HEIGHT as isize || col < 0 || col >= BOARD_WIDTH as isize {
        return None;
    }

    Some(row as usize * BOARD_WIDTH + col as usize)
}
