use colored::Colorize;
use trellomcp_core::types::Label;

use crate::prelude::*;

pub mod assign;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

/// Label module app - root command
#[derive(Debug, clap::Parser)]
#[command(name = "label")]
#[command(about = "Trello label operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List the labels on a board
    #[clap(name = "list")]
    List(list::ListOptions),

    /// Get details of a label
    #[clap(name = "get")]
    Get(get::GetOptions),

    /// Create a new label on a board
    #[clap(name = "create")]
    Create(create::CreateOptions),

    /// Update a label's name or color
    #[clap(name = "update")]
    Update(update::UpdateOptions),

    /// Delete a label
    #[clap(name = "delete")]
    Delete(delete::DeleteOptions),

    /// Add a label to a card
    #[clap(name = "add")]
    Add(assign::AddOptions),

    /// Remove a label from a card
    #[clap(name = "remove")]
    Remove(assign::RemoveOptions),

    /// Replace the full label set of a card
    #[clap(name = "set")]
    Set(assign::SetOptions),
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    match app.command {
        Commands::List(options) => list::handler(options, global).await,
        Commands::Get(options) => get::handler(options, global).await,
        Commands::Create(options) => create::handler(options, global).await,
        Commands::Update(options) => update::handler(options, global).await,
        Commands::Delete(options) => delete::handler(options, global).await,
        Commands::Add(options) => assign::add_handler(options, global).await,
        Commands::Remove(options) => assign::remove_handler(options, global).await,
        Commands::Set(options) => assign::set_handler(options, global).await,
    }
}

pub(crate) fn display_labels(labels: &[Label]) {
    if labels.is_empty() {
        std::println!("No labels found.");
        return;
    }

    let mut table = new_table();
    for label in labels {
        let name = if label.name.is_empty() {
            "(unnamed)".bright_black().to_string()
        } else {
            label.name.bright_white().bold().to_string()
        };
        table.add_row(prettytable::row![
            label.id.bright_black(),
            name,
            label.color.as_deref().unwrap_or("none").bright_green().to_string()
        ]);
    }
    table.printstd();
}

fn display_label(label: &Label) {
    display_labels(std::slice::from_ref(label));
}
