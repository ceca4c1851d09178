use crate::prelude::{println, *};
use crate::trello::TrelloClient;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct DeleteOptions {
    /// Checklist id
    pub checklist_id: String,
}

pub async fn handler(options: DeleteOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Deleting checklist {}...", options.checklist_id);
    }

    let client = TrelloClient::from_env()?;
    client.delete_checklist(&options.checklist_id).await?;

    println!("Deleted checklist {}", options.checklist_id);

    Ok(())
}
