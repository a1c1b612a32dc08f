use anyhow::Result;
use stronghold_core::Game;
use stronghold_service::SetService;

pub(crate) async fn run(game: Option<String>) -> Result<()> {
    let game = game.map(|g| g.parse::<Game>()).transpose()?;
    let service = SetService::new(crate::open_postgres().await?);
    let sets = service.list_sets(game).await?;
    println!("{}", serde_json::to_string_pretty(&sets)?);
    Ok(())
}
