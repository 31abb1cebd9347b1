pub mod action;
pub mod board;
pub mod cell;
pub mod constants;
pub mod engine;
pub mod error;
pub mod game_state;
pub mod result;

mod display;
mod win;

pub use action::*;
pub use board::*;
pub use cell::*;
pub use constants::*;
pub use engine::*;
pub use error::*;
pub use game_state::*;
pub use result::*;
