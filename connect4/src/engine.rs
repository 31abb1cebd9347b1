use engine::GameEngine;

use crate::action::Action;
use crate::constants::BOARD_SIZE;
use crate::error::BoardError;
use crate::game_state::GameState;
use crate::result::GameResult;

#[derive(Default)]
pub struct Engine {}

impl Engine {
    pub fn new() -> Self {
        Self {}
    }
}

impl GameEngine for Engine {
    type Action = Action;
    type State = GameState;
    type Terminal = GameResult;
    type Error = BoardError;

    fn take_action(
        &self,
        game_state: &Self::State,
        action: &Self::Action,
    ) -> Result<Self::State, Self::Error> {
        let Action::Place(position) = action;

        let mut next = game_state.clone();
        next.place(*position)?;

        Ok(next)
    }

    fn player_to_move(&self, game_state: &Self::State) -> usize {
        game_state.player_to_move()
    }

    /// Ply number: pieces played so far plus one.
    fn move_number(&self, game_state: &Self::State) -> usize {
        BOARD_SIZE - game_state.board().count_empty() + 1
    }

    fn terminal_state(&self, game_state: &Self::State) -> Option<Self::Terminal> {
        game_state.is_terminal()
    }
}
