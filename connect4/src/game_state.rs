use std::hash::{Hash, Hasher};

use crate::board::{Board, MoveOutcome};
use crate::cell::Cell;
use crate::error::BoardError;
use crate::result::GameResult;

/// A full game position: the board plus the side to move.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    to_move: Cell,
}

impl engine::GameState for GameState {
    fn initial() -> Self {
        GameState {
            board: Board::new(),
            to_move: Cell::Black,
        }
    }
}

impl GameState {
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move. Never `Empty`.
    pub fn to_move(&self) -> Cell {
        self.to_move
    }

    pub fn player_to_move(&self) -> usize {
        if self.to_move == Cell::Black {
            1
        } else {
            2
        }
    }

    /// Plays the side to move at `position` and hands the turn over. A
    /// rejected move leaves both the board and the turn unchanged.
    pub fn place(&mut self, position: usize) -> Result<MoveOutcome, BoardError> {
        let outcome = self.board.apply_move(position, self.to_move)?;
        self.to_move = self.to_move.other_side()?;

        Ok(outcome)
    }

    pub fn result(&self) -> GameResult {
        self.board.result()
    }

    pub fn is_terminal(&self) -> Option<GameResult> {
        let result = self.board.result();
        result.is_finished().then_some(result)
    }
}

impl Hash for GameState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.board.hash(state);
        self.to_move.hash(state);
    }
}

impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board && self.to_move == other.to_move
    }
}

impl Eq for GameState {}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::GameState as GameStateTrait;

    #[test]
    fn test_initial_state_has_black_to_move() {
        let state = GameState::initial();
        assert_eq!(state.to_move(), Cell::Black);
        assert_eq!(state.player_to_move(), 1);
    }

    #[test]
    fn test_place_alternates_the_turn() {
        let mut state = GameState::initial();
        state.place(0).unwrap();
        assert_eq!(state.to_move(), Cell::Red);
        state.place(1).unwrap();
        assert_eq!(state.to_move(), Cell::Black);
    }

    #[test]
    fn test_rejected_place_keeps_the_turn() {
        let mut state = GameState::initial();
        state.place(0).unwrap();

        let err = state.place(0).unwrap_err();
        assert_eq!(err, BoardError::IllegalMove { position: 0 });
        assert_eq!(state.to_move(), Cell::Red);
    }

    #[test]
    fn test_initial_state_is_not_terminal() {
        assert_eq!(GameState::initial().is_terminal(), None);
    }
}
