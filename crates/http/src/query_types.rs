//! Request/query types (Deserialize)

use serde::Deserialize;
use stronghold_core::{CoreError, Game};

#[derive(Debug, Default, Deserialize)]
pub struct SetsQuery {
    pub game: Option<String>,
}

impl SetsQuery {
    /// An absent or blank `game` means no filter.
    pub fn game_filter(&self) -> Result<Option<Game>, CoreError> {
        match self.game.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some),
        }
    }
}
