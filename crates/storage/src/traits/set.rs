use async_trait::async_trait;
use chrono::{DateTime, Utc};
use stronghold_core::{Card, CardInput, CardSet, Game, SetInput, SetSummary, SetWithCards};

use crate::error::StorageError;

/// Set and card persistence.
///
/// Multi-statement writes (`create_set`, `update_set`) are all-or-nothing:
/// a failing card insert leaves no trace of the request.
#[async_trait]
pub trait SetStore: Send + Sync {
    /// List sets newest first, optionally restricted to one game.
    async fn list_sets(&self, game: Option<Game>) -> Result<Vec<SetSummary>, StorageError>;

    /// Get a set with its cards ordered by ascending number.
    async fn get_set(&self, id: &str) -> Result<Option<SetWithCards>, StorageError>;

    /// Insert a set and all of its cards.
    async fn create_set(&self, input: &SetInput) -> Result<SetWithCards, StorageError>;

    /// Replace a set's columns and its entire card list. `None` if the set is absent.
    async fn update_set(
        &self,
        id: &str,
        input: &SetInput,
    ) -> Result<Option<SetWithCards>, StorageError>;

    /// Delete a set and, by cascade, its cards. Returns the deleted row.
    async fn delete_set(&self, id: &str) -> Result<Option<CardSet>, StorageError>;

    /// Edit one card in place.
    ///
    /// `NotFound` when the set is absent or the card does not belong to it.
    async fn update_card(
        &self,
        set_id: &str,
        card_id: &str,
        input: &CardInput,
    ) -> Result<Card, StorageError>;

    /// Delete one card. Same not-found rules as [`SetStore::update_card`].
    async fn delete_card(&self, set_id: &str, card_id: &str) -> Result<Card, StorageError>;

    /// Round-trip to the store; returns its clock.
    async fn ping(&self) -> Result<DateTime<Utc>, StorageError>;
}
