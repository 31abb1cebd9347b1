use super::game_state::GameState;

pub trait GameEngine {
    type Action;
    type State: GameState;
    type Terminal;
    type Error;

    /// Applies the action to the given state, producing the successor state.
    /// A rejected action leaves the input state untouched and surfaces as `Err`.
    fn take_action(
        &self,
        game_state: &Self::State,
        action: &Self::Action,
    ) -> Result<Self::State, Self::Error>;

    fn player_to_move(&self, game_state: &Self::State) -> usize;
    fn move_number(&self, game_state: &Self::State) -> usize;

    /// Terminal classification of the state, or None while the game is still
    /// in progress.
    fn terminal_state(&self, game_state: &Self::State) -> Option<Self::Terminal>;
}
