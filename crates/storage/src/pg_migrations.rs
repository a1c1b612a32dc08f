//! PostgreSQL schema migrations for stronghold storage.
//!
//! Every statement is idempotent, so running them on each start is safe.

use anyhow::Result;
use sqlx::PgPool;

/// Run all PostgreSQL migrations.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sets (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            game TEXT NOT NULL
                CHECK (game IN ('pokemon', 'lorcana', 'magic', 'yugioh', 'other')),
            code TEXT,
            total_cards INTEGER CHECK (total_cards IS NULL OR total_cards >= 0),
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_sets_game ON sets (game)").execute(pool).await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_sets_created ON sets (created_at DESC)")
        .execute(pool)
        .await?;

    // Card numbers are unique per set; the constraint index also serves set_id lookups.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cards (
            id TEXT PRIMARY KEY,
            set_id TEXT NOT NULL REFERENCES sets (id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            number INTEGER NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            CONSTRAINT cards_set_number_key UNIQUE (set_id, number)
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("PostgreSQL migrations applied");
    Ok(())
}
