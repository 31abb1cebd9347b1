pub const BOARD_HEIGHT: usize = 6;
pub const BOARD_WIDTH: usize = 7;
pub const BOARD_SIZE: usize = BOARD_HEIGHT * BOARD_WIDTH;

/// Length of a contiguous same-colour run that wins the game.
pub const WIN_LENGTH: usize = 4;
