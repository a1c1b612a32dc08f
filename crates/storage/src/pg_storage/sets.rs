//! SetStore implementation for PgStorage.

use super::*;

use crate::traits::SetStore;
use async_trait::async_trait;
use stronghold_core::{SetInput, SetSummary, SetWithCards};

impl PgStorage {
    async fn set_exists(&self, id: &str) -> Result<bool, StorageError> {
        let found: Option<String> = sqlx::query_scalar("SELECT id FROM sets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }

    async fn cards_for_set(&self, set_id: &str) -> Result<Vec<Card>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {CARD_COLUMNS} FROM cards WHERE set_id = $1 ORDER BY number ASC, name ASC"
        ))
        .bind(set_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(row_to_card).collect()
    }
}

#[async_trait]
impl SetStore for PgStorage {
    async fn list_sets(&self, game: Option<Game>) -> Result<Vec<SetSummary>, StorageError> {
        let rows = sqlx::query(
            "SELECT s.id, s.name, s.game, s.code, s.total_cards, s.created_at, s.updated_at,
                    COUNT(c.id) AS card_count
             FROM sets s
             LEFT JOIN cards c ON c.set_id = s.id
             WHERE ($1::TEXT IS NULL OR s.game = $1)
             GROUP BY s.id
             ORDER BY s.created_at DESC",
        )
        .bind(game.map(|g| g.as_str()))
        .fetch_all(&self.pool)
        .await?;
        rows.iter()
            .map(|r| -> Result<SetSummary, StorageError> {
                Ok(SetSummary { set: row_to_set(r)?, card_count: r.try_get("card_count")? })
            })
            .collect()
    }

    async fn get_set(&self, id: &str) -> Result<Option<SetWithCards>, StorageError> {
        let row = sqlx::query(&format!("SELECT {SET_COLUMNS} FROM sets WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        let set = row_to_set(&row)?;
        let cards = self.cards_for_set(id).await?;
        Ok(Some(SetWithCards { set, cards }))
    }

    async fn create_set(&self, input: &SetInput) -> Result<SetWithCards, StorageError> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();
        let id = uuid::Uuid::new_v4().to_string();

        let row = sqlx::query(&format!(
            "INSERT INTO sets ({SET_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {SET_COLUMNS}"
        ))
        .bind(&id)
        .bind(&input.name)
        .bind(input.game.as_str())
        .bind(&input.code)
        .bind(input.total_cards)
        .bind(now)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;
        let set = row_to_set(&row)?;

        let cards = insert_cards(&mut tx, &id, &input.cards, now).await?;
        tx.commit().await?;

        tracing::debug!(set_id = %id, cards = cards.len(), "set created");
        let mut created = SetWithCards { set, cards };
        created.sort_cards();
        Ok(created)
    }

    async fn update_set(
        &self,
        id: &str,
        input: &SetInput,
    ) -> Result<Option<SetWithCards>, StorageError> {
        let mut tx = self.pool.begin().await?;
        let now = Utc::now();

        let row = sqlx::query(&format!(
            "UPDATE sets SET name = $1, game = $2, code = $3, total_cards = $4, updated_at = $5
             WHERE id = $6
             RETURNING {SET_COLUMNS}"
        ))
        .bind(&input.name)
        .bind(input.game.as_str())
        .bind(&input.code)
        .bind(input.total_cards)
        .bind(now)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;
        let Some(row) = row else {
            return Ok(None);
        };
        let set = row_to_set(&row)?;

        sqlx::query("DELETE FROM cards WHERE set_id = $1").bind(id).execute(&mut *tx).await?;
        let cards = insert_cards(&mut tx, id, &input.cards, now).await?;
        tx.commit().await?;

        tracing::debug!(set_id = %id, cards = cards.len(), "set replaced");
        let mut updated = SetWithCards { set, cards };
        updated.sort_cards();
        Ok(Some(updated))
    }

    async fn delete_set(&self, id: &str) -> Result<Option<CardSet>, StorageError> {
        let row = sqlx::query(&format!("DELETE FROM sets WHERE id = $1 RETURNING {SET_COLUMNS}"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|r| row_to_set(&r)).transpose()
    }

    async fn update_card(
        &self,
        set_id: &str,
        card_id: &str,
        input: &CardInput,
    ) -> Result<Card, StorageError> {
        if !self.set_exists(set_id).await? {
            return Err(StorageError::set_not_found(set_id));
        }
        let mut tx = self.pool.begin().await?;
        let row = sqlx::query(&format!(
            "UPDATE cards SET name = $1, number = $2
             WHERE id = $3 AND set_id = $4
             RETURNING {CARD_COLUMNS}"
        ))
        .bind(&input.name)
        .bind(input.number)
        .bind(card_id)
        .bind(set_id)
        .fetch_optional(&mut *tx)
        .await?;
        let card = row
            .map(|r| row_to_card(&r))
            .transpose()?
            .ok_or_else(|| StorageError::card_not_found(card_id))?;

        sqlx::query("UPDATE sets SET updated_at = $1 WHERE id = $2")
            .bind(Utc::now())
            .bind(set_id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(card)
    }

    async fn delete_card(&self, set_id: &str, card_id: &str) -> Result<Card, StorageError> {
        if !self.set_exists(set_id).await? {
            return Err(StorageError::set_not_found(set_id));
        }
        let row = sqlx::query(&format!(
            "DELETE FROM cards WHERE id = $1 AND set_id = $2 RETURNING {CARD_COLUMNS}"
        ))
        .bind(card_id)
        .bind(set_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| row_to_card(&r))
            .transpose()?
            .ok_or_else(|| StorageError::card_not_found(card_id))
    }

    async fn ping(&self) -> Result<DateTime<Utc>, StorageError> {
        let now: DateTime<Utc> = sqlx::query_scalar("SELECT NOW()").fetch_one(&self.pool).await?;
        Ok(now)
    }
}
