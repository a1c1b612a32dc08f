//! In-process store for development servers and tests.
//!
//! Mirrors the PostgreSQL schema rules: cards belong to an existing set,
//! numbers are unique per set, deleting a set removes its cards, and a rejected
//! write leaves the tables untouched.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use stronghold_core::{Card, CardInput, CardSet, Game, SetInput, SetSummary, SetWithCards};
use tokio::sync::RwLock;

use crate::error::StorageError;
use crate::traits::SetStore;

#[derive(Debug, Default)]
struct Tables {
    /// Insertion order; newest last.
    sets: Vec<CardSet>,
    cards: Vec<Card>,
}

impl Tables {
    fn set(&self, id: &str) -> Option<&CardSet> {
        self.sets.iter().find(|s| s.id == id)
    }

    fn cards_of(&self, set_id: &str) -> Vec<Card> {
        self.cards.iter().filter(|c| c.set_id == set_id).cloned().collect()
    }

    fn with_cards(&self, set: CardSet) -> SetWithCards {
        let cards = self.cards_of(&set.id);
        let mut full = SetWithCards { set, cards };
        full.sort_cards();
        full
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn duplicate_number(number: i32) -> StorageError {
    StorageError::Duplicate(format!(
        "duplicate key value violates unique constraint \"cards_set_number_key\" (number {number})"
    ))
}

/// Reject a card list that reuses a number.
fn check_unique_numbers(cards: &[CardInput]) -> Result<(), StorageError> {
    let mut seen = HashSet::with_capacity(cards.len());
    for card in cards {
        if !seen.insert(card.number) {
            return Err(duplicate_number(card.number));
        }
    }
    Ok(())
}

fn build_cards(set_id: &str, cards: &[CardInput], now: DateTime<Utc>) -> Vec<Card> {
    cards
        .iter()
        .map(|c| Card {
            id: uuid::Uuid::new_v4().to_string(),
            set_id: set_id.to_owned(),
            name: c.name.clone(),
            number: c.number,
            created_at: now,
        })
        .collect()
}

#[async_trait]
impl SetStore for MemoryStorage {
    async fn list_sets(&self, game: Option<Game>) -> Result<Vec<SetSummary>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables
            .sets
            .iter()
            .rev()
            .filter(|s| game.is_none_or(|g| s.game == g))
            .map(|s| SetSummary {
                set: s.clone(),
                card_count: i64::try_from(tables.cards.iter().filter(|c| c.set_id == s.id).count())
                    .unwrap_or(i64::MAX),
            })
            .collect())
    }

    async fn get_set(&self, id: &str) -> Result<Option<SetWithCards>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables.set(id).cloned().map(|s| tables.with_cards(s)))
    }

    async fn create_set(&self, input: &SetInput) -> Result<SetWithCards, StorageError> {
        check_unique_numbers(&input.cards)?;
        let now = Utc::now();
        let set = CardSet {
            id: uuid::Uuid::new_v4().to_string(),
            name: input.name.clone(),
            game: input.game,
            code: input.code.clone(),
            total_cards: input.total_cards,
            created_at: now,
            updated_at: now,
        };
        let cards = build_cards(&set.id, &input.cards, now);

        let mut tables = self.tables.write().await;
        tables.sets.push(set.clone());
        tables.cards.extend(cards);
        tracing::debug!(set_id = %set.id, cards = input.cards.len(), "set created");
        Ok(tables.with_cards(set))
    }

    async fn update_set(
        &self,
        id: &str,
        input: &SetInput,
    ) -> Result<Option<SetWithCards>, StorageError> {
        check_unique_numbers(&input.cards)?;
        let now = Utc::now();
        let mut tables = self.tables.write().await;
        let Some(set) = tables.sets.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        set.name = input.name.clone();
        set.game = input.game;
        set.code = input.code.clone();
        set.total_cards = input.total_cards;
        set.updated_at = now;
        let set = set.clone();

        tables.cards.retain(|c| c.set_id != id);
        tables.cards.extend(build_cards(id, &input.cards, now));
        tracing::debug!(set_id = %id, cards = input.cards.len(), "set replaced");
        Ok(Some(tables.with_cards(set)))
    }

    async fn delete_set(&self, id: &str) -> Result<Option<CardSet>, StorageError> {
        let mut tables = self.tables.write().await;
        let Some(pos) = tables.sets.iter().position(|s| s.id == id) else {
            return Ok(None);
        };
        let removed = tables.sets.remove(pos);
        tables.cards.retain(|c| c.set_id != id);
        Ok(Some(removed))
    }

    async fn update_card(
        &self,
        set_id: &str,
        card_id: &str,
        input: &CardInput,
    ) -> Result<Card, StorageError> {
        let mut tables = self.tables.write().await;
        if tables.set(set_id).is_none() {
            return Err(StorageError::set_not_found(set_id));
        }
        let pos = tables
            .cards
            .iter()
            .position(|c| c.id == card_id && c.set_id == set_id)
            .ok_or_else(|| StorageError::card_not_found(card_id))?;
        if tables.cards.iter().any(|c| c.set_id == set_id && c.id != card_id && c.number == input.number) {
            return Err(duplicate_number(input.number));
        }
        let card = &mut tables.cards[pos];
        card.name = input.name.clone();
        card.number = input.number;
        let card = card.clone();

        if let Some(set) = tables.sets.iter_mut().find(|s| s.id == set_id) {
            set.updated_at = Utc::now();
        }
        Ok(card)
    }

    async fn delete_card(&self, set_id: &str, card_id: &str) -> Result<Card, StorageError> {
        let mut tables = self.tables.write().await;
        if tables.set(set_id).is_none() {
            return Err(StorageError::set_not_found(set_id));
        }
        let pos = tables
            .cards
            .iter()
            .position(|c| c.id == card_id && c.set_id == set_id)
            .ok_or_else(|| StorageError::card_not_found(card_id))?;
        Ok(tables.cards.remove(pos))
    }

    async fn ping(&self) -> Result<DateTime<Utc>, StorageError> {
        Ok(Utc::now())
    }
}
