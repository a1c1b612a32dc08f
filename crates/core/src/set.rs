//! Set and card records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::game::Game;

/// A named collection of cards for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSet {
    pub id: String,
    pub name: String,
    pub game: Game,
    pub code: Option<String>,
    /// Declared size of the printed set, when the user supplied one.
    pub total_cards: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A single card belonging to exactly one set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub set_id: String,
    pub name: String,
    pub number: i32,
    pub created_at: DateTime<Utc>,
}

/// Listing row: set columns plus the number of stored cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetSummary {
    #[serde(flatten)]
    pub set: CardSet,
    pub card_count: i64,
}

/// A set together with its cards, ordered by ascending number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetWithCards {
    #[serde(flatten)]
    pub set: CardSet,
    pub cards: Vec<Card>,
}

impl SetWithCards {
    /// Total used in the `number/total` label: the declared total, else the card count.
    #[must_use]
    pub fn effective_total(&self) -> i64 {
        self.set
            .total_cards
            .map_or_else(|| i64::try_from(self.cards.len()).unwrap_or(i64::MAX), i64::from)
    }

    pub fn sort_cards(&mut self) {
        self.cards.sort_by(|a, b| a.number.cmp(&b.number).then_with(|| a.name.cmp(&b.name)));
    }
}

/// Validated input for creating or replacing a set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetInput {
    pub name: String,
    pub game: Game,
    pub code: Option<String>,
    pub total_cards: Option<i32>,
    pub cards: Vec<CardInput>,
}

/// Validated input for one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardInput {
    pub name: String,
    pub number: i32,
}

impl CardInput {
    pub fn new(name: impl Into<String>, number: i32) -> Self {
        Self { name: name.into(), number }
    }
}

/// Card number as sent by clients: some send integers, the card editor sends strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCardNumber {
    Int(i64),
    Text(String),
}

impl RawCardNumber {
    /// Canonical integer form. Rejects non-numeric text and values outside `i32`.
    pub fn to_number(&self) -> Result<i32, CoreError> {
        match self {
            Self::Int(n) => {
                i32::try_from(*n).map_err(|_| CoreError::InvalidCardNumber(n.to_string()))
            },
            Self::Text(s) => {
                s.trim().parse::<i32>().map_err(|_| CoreError::InvalidCardNumber(s.clone()))
            },
        }
    }
}
