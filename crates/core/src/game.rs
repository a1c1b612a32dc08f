//! Trading-card game classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Game a set belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Game {
    Pokemon,
    Lorcana,
    Magic,
    Yugioh,
    Other,
}

impl Game {
    pub const ALL_VARIANTS_STR: &'static str = "pokemon, lorcana, magic, yugioh, other";

    pub const ALL_VARIANTS: &'static [Game] =
        &[Game::Pokemon, Game::Lorcana, Game::Magic, Game::Yugioh, Game::Other];

    /// Storage and wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match *self {
            Self::Pokemon => "pokemon",
            Self::Lorcana => "lorcana",
            Self::Magic => "magic",
            Self::Yugioh => "yugioh",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Game {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pokemon" => Ok(Self::Pokemon),
            "lorcana" => Ok(Self::Lorcana),
            "magic" => Ok(Self::Magic),
            "yugioh" => Ok(Self::Yugioh),
            "other" => Ok(Self::Other),
            other => Err(CoreError::UnknownGame(other.to_owned())),
        }
    }
}
