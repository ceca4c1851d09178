use crate::prelude::{println, *};
use crate::trello::TrelloClient;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ArchiveOptions {
    /// List id
    #[clap(env = "TRELLO_LIST_ID")]
    pub list_id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn handler(options: ArchiveOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Archiving list {}...", options.list_id);
    }

    let client = TrelloClient::from_env()?;
    let list = client.archive_list(&options.list_id).await?;

    if options.json {
        print_json(&list)?;
    } else {
        println!("Archived list {}", options.list_id);
        super::display_list(&list);
    }

    Ok(())
}
