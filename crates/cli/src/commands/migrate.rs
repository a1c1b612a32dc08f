//! Apply the PostgreSQL schema without starting the server.

use anyhow::Result;

pub(crate) async fn run() -> Result<()> {
    // Connecting runs the idempotent migrations.
    let storage = crate::open_postgres().await?;
    println!("Schema is up to date ({})", storage.kind());
    Ok(())
}
