use crate::prelude::{println, *};
use crate::trello::TrelloClient;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct DeleteOptions {
    /// Label id
    pub label_id: String,
}

pub async fn handler(options: DeleteOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Deleting label {}...", options.label_id);
    }

    let client = TrelloClient::from_env()?;
    client.delete_label(&options.label_id).await?;

    println!("Deleted label {}", options.label_id);

    Ok(())
}
