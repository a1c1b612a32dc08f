use thiserror::Error;

use crate::game::Game;

/// Errors raised while building domain values from user input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid game type. Must be one of: {valid}", valid = Game::ALL_VARIANTS_STR)]
    UnknownGame(String),

    #[error("Please enter at least one card")]
    EmptyCardList,

    #[error("Invalid card number: {0}")]
    InvalidCardNumber(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
