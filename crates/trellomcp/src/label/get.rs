use crate::prelude::{println, *};
use crate::trello::TrelloClient;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct GetOptions {
    /// Label id
    pub label_id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn handler(options: GetOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Fetching label {}...", options.label_id);
    }

    let client = TrelloClient::from_env()?;
    let label = client.get_label(&options.label_id).await?;

    if options.json {
        print_json(&label)?;
    } else {
        super::display_label(&label);
    }

    Ok(())
}
