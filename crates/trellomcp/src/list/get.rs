use crate::prelude::{println, *};
use crate::trello::TrelloClient;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct GetOptions {
    /// List id
    #[clap(env = "TRELLO_LIST_ID")]
    pub list_id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn handler(options: GetOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Fetching list {}...", options.list_id);
    }

    let client = TrelloClient::from_env()?;
    let list = client.get_list(&options.list_id).await?;

    if options.json {
        print_json(&list)?;
    } else {
        super::display_list(&list);
    }

    Ok(())
}
