//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use stronghold_core::{Card, CardInput, CardSet, Game, PoolSettings, SetInput, SetSummary, SetWithCards};

use crate::error::StorageError;
use crate::memory::MemoryStorage;
use crate::pg_storage::PgStorage;
use crate::traits::SetStore;

macro_rules! dispatch {
    ($self:expr, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Postgres(s) => <PgStorage as SetStore>::$method(s, $($arg),*).await,
            StorageBackend::Memory(s) => <MemoryStorage as SetStore>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    Postgres(PgStorage),
    Memory(MemoryStorage),
}

impl StorageBackend {
    pub async fn new_postgres(database_url: &str, settings: PoolSettings) -> Result<Self, StorageError> {
        Ok(Self::Postgres(PgStorage::new(database_url, settings).await?))
    }

    /// Empty, process-local store. Contents are lost on exit.
    #[must_use]
    pub fn new_memory() -> Self {
        Self::Memory(MemoryStorage::new())
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Memory(_) => "memory",
        }
    }
}

#[async_trait]
impl SetStore for StorageBackend {
    async fn list_sets(&self, game: Option<Game>) -> Result<Vec<SetSummary>, StorageError> {
        dispatch!(self, list_sets(game))
    }

    async fn get_set(&self, id: &str) -> Result<Option<SetWithCards>, StorageError> {
        dispatch!(self, get_set(id))
    }

    async fn create_set(&self, input: &SetInput) -> Result<SetWithCards, StorageError> {
        dispatch!(self, create_set(input))
    }

    async fn update_set(
        &self,
        id: &str,
        input: &SetInput,
    ) -> Result<Option<SetWithCards>, StorageError> {
        dispatch!(self, update_set(id, input))
    }

    async fn delete_set(&self, id: &str) -> Result<Option<CardSet>, StorageError> {
        dispatch!(self, delete_set(id))
    }

    async fn update_card(
        &self,
        set_id: &str,
        card_id: &str,
        input: &CardInput,
    ) -> Result<Card, StorageError> {
        dispatch!(self, update_card(set_id, card_id, input))
    }

    async fn delete_card(&self, set_id: &str, card_id: &str) -> Result<Card, StorageError> {
        dispatch!(self, delete_card(set_id, card_id))
    }

    async fn ping(&self) -> Result<DateTime<Utc>, StorageError> {
        dispatch!(self, ping())
    }
}
