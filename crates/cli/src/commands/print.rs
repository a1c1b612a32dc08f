use anyhow::Result;
use stronghold_service::SetService;

pub(crate) async fn run(set_id: String) -> Result<()> {
    let service = SetService::new(crate::open_postgres().await?);
    let plan = service.print_plan(&set_id).await?;
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
