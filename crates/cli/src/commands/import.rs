//! Create a set from a text file of `Name - Number` lines.

use anyhow::{Context, Result};
use std::path::PathBuf;
use stronghold_service::{SetDraft, SetService};

pub(crate) async fn run(
    name: String,
    game: String,
    code: Option<String>,
    total_cards: Option<i64>,
    file: PathBuf,
) -> Result<()> {
    let text = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read card list {}", file.display()))?;
    let draft = SetDraft {
        name: Some(name),
        game: Some(game),
        code,
        total_cards,
        cards: None,
        card_list: Some(text),
    };
    // Reject bad input before touching the database.
    let input = draft.clone().validate()?;
    tracing::info!(cards = input.cards.len(), "Card list parsed");

    let service = SetService::new(crate::open_postgres().await?);
    let created = service.create_set(draft).await?;
    println!("{}", serde_json::to_string_pretty(&created)?);
    Ok(())
}
