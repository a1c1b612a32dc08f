//! PostgreSQL storage backend using sqlx.
//!
//! Split into modular files by domain concern.

mod sets;

use std::time::Duration;

use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgConnection, PgPool, Row};
use stronghold_core::{Card, CardInput, CardSet, Game, PoolSettings};

use crate::error::StorageError;

use super::pg_migrations::run_pg_migrations;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connect, then bring the schema up to date.
    pub async fn new(database_url: &str, settings: PoolSettings) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(settings.idle_timeout_secs))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!(max_connections = settings.max_connections, "PgStorage initialized");
        Ok(Self { pool })
    }
}

pub(crate) const SET_COLUMNS: &str = "id, name, game, code, total_cards, created_at, updated_at";

pub(crate) const CARD_COLUMNS: &str = "id, set_id, name, number, created_at";

/// Parse `Game` from the `game` text column.
pub(crate) fn parse_pg_game(s: &str) -> Result<Game, StorageError> {
    s.parse::<Game>().map_err(|e| {
        tracing::warn!(invalid_game = %s, "corrupt game in DB");
        StorageError::from(e)
    })
}

pub(crate) fn row_to_set(row: &PgRow) -> Result<CardSet, StorageError> {
    let game = parse_pg_game(&row.try_get::<String, _>("game")?)?;
    Ok(CardSet {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        game,
        code: row.try_get("code")?,
        total_cards: row.try_get("total_cards")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

pub(crate) fn row_to_card(row: &PgRow) -> Result<Card, StorageError> {
    Ok(Card {
        id: row.try_get("id")?,
        set_id: row.try_get("set_id")?,
        name: row.try_get("name")?,
        number: row.try_get("number")?,
        created_at: row.try_get("created_at")?,
    })
}

/// Insert `cards` under `set_id` on an open connection, usually a transaction.
pub(crate) async fn insert_cards(
    conn: &mut PgConnection,
    set_id: &str,
    cards: &[CardInput],
    now: DateTime<Utc>,
) -> Result<Vec<Card>, StorageError> {
    let mut inserted = Vec::with_capacity(cards.len());
    for card in cards {
        let row = sqlx::query(&format!(
            "INSERT INTO cards ({CARD_COLUMNS}) VALUES ($1, $2, $3, $4, $5)
             RETURNING {CARD_COLUMNS}"
        ))
        .bind(uuid::Uuid::new_v4().to_string())
        .bind(set_id)
        .bind(&card.name)
        .bind(card.number)
        .bind(now)
        .fetch_one(&mut *conn)
        .await?;
        inserted.push(row_to_card(&row)?);
    }
    Ok(inserted)
}
