use serde::{Deserialize, Serialize};

/// Terminal classification of a position. Always derived fresh from the
/// cells, never cached alongside them.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    InProgress,
    BlackWin,
    RedWin,
    Draw,
}

impl GameResult {
    pub fn is_finished(self) -> bool {
        self != GameResult::InProgress
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GameResult::InProgress => "in progress",
            GameResult::BlackWin => "black wins",
            GameResult::RedWin => "red wins",
            GameResult::Draw => "draw",
        };
        write!(f, "{}", s)
    }
}
