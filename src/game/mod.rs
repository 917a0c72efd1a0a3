//! Game session state machine
//!
//! A session draws a hidden target, accepts guesses and reports each one's
//! score until the round is won or the tries run out.

mod config;
mod error;
mod session;
mod state;

pub use config::{GameConfig, MAX_DRAWS, MAX_TRIES};
pub use error::GameError;
pub use session::GameSession;
pub use state::{GameState, GameStatus, GuessResult, Scored};
