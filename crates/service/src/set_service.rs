use std::sync::Arc;

use chrono::{DateTime, Utc};
use stronghold_core::{Card, CardSet, Game, PrintPlan, SetSummary, SetWithCards};
use stronghold_storage::{SetStore, StorageBackend};

use crate::{CardDraft, ServiceError, SetDraft};

pub struct SetService {
    storage: Arc<StorageBackend>,
}

impl SetService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    pub async fn list_sets(&self, game: Option<Game>) -> Result<Vec<SetSummary>, ServiceError> {
        Ok(self.storage.list_sets(game).await?)
    }

    pub async fn get_set(&self, id: &str) -> Result<SetWithCards, ServiceError> {
        self.storage.get_set(id).await?.ok_or_else(|| ServiceError::set_not_found(id))
    }

    pub async fn create_set(&self, draft: SetDraft) -> Result<SetWithCards, ServiceError> {
        let input = draft.validate()?;
        let created = self.storage.create_set(&input).await?;
        tracing::info!(set_id = %created.set.id, game = %created.set.game, cards = created.cards.len(), "set created");
        Ok(created)
    }

    /// Replace a set's fields and its whole card list.
    pub async fn update_set(&self, id: &str, draft: SetDraft) -> Result<SetWithCards, ServiceError> {
        let input = draft.validate()?;
        let updated =
            self.storage.update_set(id, &input).await?.ok_or_else(|| ServiceError::set_not_found(id))?;
        tracing::info!(set_id = %id, cards = updated.cards.len(), "set updated");
        Ok(updated)
    }

    pub async fn delete_set(&self, id: &str) -> Result<CardSet, ServiceError> {
        let deleted = self.storage.delete_set(id).await?.ok_or_else(|| ServiceError::set_not_found(id))?;
        tracing::info!(set_id = %id, "set deleted");
        Ok(deleted)
    }

    pub async fn update_card(
        &self,
        set_id: &str,
        card_id: &str,
        draft: CardDraft,
    ) -> Result<Card, ServiceError> {
        let input = draft.validate()?;
        Ok(self.storage.update_card(set_id, card_id, &input).await?)
    }

    pub async fn delete_card(&self, set_id: &str, card_id: &str) -> Result<Card, ServiceError> {
        let card = self.storage.delete_card(set_id, card_id).await?;
        tracing::info!(set_id = %set_id, card_id = %card_id, "card deleted");
        Ok(card)
    }

    /// Front/back sheet plan for printing a set double-sided.
    pub async fn print_plan(&self, id: &str) -> Result<PrintPlan, ServiceError> {
        let set = self.get_set(id).await?;
        Ok(PrintPlan::for_set(&set))
    }

    /// Database round trip; returns the store's clock.
    pub async fn health(&self) -> Result<DateTime<Utc>, ServiceError> {
        Ok(self.storage.ping().await?)
    }
}
