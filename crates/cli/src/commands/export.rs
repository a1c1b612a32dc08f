//! Dump a set's cards as `Name - Number` lines, ready for `import`.

use anyhow::Result;
use stronghold_core::format_card_list;
use stronghold_service::SetService;

pub(crate) async fn run(set_id: String) -> Result<()> {
    let service = SetService::new(crate::open_postgres().await?);
    let set = service.get_set(&set_id).await?;
    println!("{}", format_card_list(&set.cards));
    Ok(())
}
