use trellomcp_core::params::LabelUpdate;

use crate::prelude::{println, *};
use crate::trello::TrelloClient;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct UpdateOptions {
    /// Label id
    pub label_id: String,

    /// New name
    #[arg(short, long)]
    pub name: Option<String>,

    /// New color
    #[arg(short, long)]
    pub color: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn handler(options: UpdateOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Updating label {}...", options.label_id);
    }

    let client = TrelloClient::from_env()?;
    let label = client
        .update_label(
            &options.label_id,
            &LabelUpdate {
                name: options.name,
                color: options.color,
            },
        )
        .await?;

    if options.json {
        print_json(&label)?;
    } else {
        super::display_label(&label);
    }

    Ok(())
}
