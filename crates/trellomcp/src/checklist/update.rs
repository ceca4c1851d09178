use trellomcp_core::params::{ChecklistUpdate, Position};

use crate::prelude::{println, *};
use crate::trello::TrelloClient;

#[derive(Debug, clap::Args, Clone)]
pub struct UpdateOptions {
    /// Checklist id
    pub checklist_id: String,

    /// New name
    #[arg(short, long)]
    pub name: Option<String>,

    /// New position: top, bottom, or a positive number
    #[arg(short, long)]
    pub pos: Option<Position>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn handler(options: UpdateOptions, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Updating checklist {}...", options.checklist_id);
    }

    let client = TrelloClient::from_env()?;
    let checklist = client
        .update_checklist(
            &options.checklist_id,
            &ChecklistUpdate {
                name: options.name,
                pos: options.pos,
            },
        )
        .await?;

    if options.json {
        print_json(&checklist)?;
    } else {
        super::display_checklist(&checklist);
    }

    Ok(())
}
