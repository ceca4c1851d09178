use trellomcp_core::ids::extract_card_id;

use crate::prelude::{println, *};
use crate::trello::TrelloClient;

/// Due date commands
#[derive(Debug, clap::Subcommand)]
pub enum DueCommands {
    /// Set or update the card's due date
    #[clap(name = "set")]
    Set(SetOptions),

    /// Mark the due date complete (or incomplete with --undo)
    #[clap(name = "complete")]
    Complete(CompleteOptions),

    /// Remove the due date
    #[clap(name = "clear")]
    Clear(ClearOptions),
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct SetOptions {
    /// Card id, short link, or trello.com card URL
    #[clap(env = "TRELLO_CARD_ID")]
    pub card: String,

    /// Due date, ISO 8601 (e.g. 2026-01-25T12:00:00.000Z)
    pub due: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct CompleteOptions {
    /// Card id, short link, or trello.com card URL
    #[clap(env = "TRELLO_CARD_ID")]
    pub card: String,

    /// Mark the due date incomplete instead
    #[arg(long)]
    pub undo: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ClearOptions {
    /// Card id, short link, or trello.com card URL
    #[clap(env = "TRELLO_CARD_ID")]
    pub card: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn handler(cmd: DueCommands, global: crate::Global) -> Result<()> {
    match cmd {
        DueCommands::Set(options) => set(options, global).await,
        DueCommands::Complete(options) => complete(options, global).await,
        DueCommands::Clear(options) => clear(options, global).await,
    }
}

async fn set(options: SetOptions, global: crate::Global) -> Result<()> {
    let card_id = extract_card_id(&options.card)?;

    if global.verbose {
        println!("Setting due date on card {card_id} to {}...", options.due);
    }

    let client = TrelloClient::from_env()?;
    let card = client.set_card_due_date(&card_id, &options.due).await?;

    if options.json {
        print_json(&card)?;
    } else {
        super::display_card(&card);
    }

    Ok(())
}

async fn complete(options: CompleteOptions, global: crate::Global) -> Result<()> {
    let card_id = extract_card_id(&options.card)?;
    let complete = !options.undo;

    if global.verbose {
        let status = if complete { "complete" } else { "incomplete" };
        println!("Marking due date on card {card_id} as {status}...");
    }

    let client = TrelloClient::from_env()?;
    let card = client.mark_due_date_complete(&card_id, complete).await?;

    if options.json {
        print_json(&card)?;
    } else {
        super::display_card(&card);
    }

    Ok(())
}

async fn clear(options: ClearOptions, global: crate::Global) -> Result<()> {
    let card_id = extract_card_id(&options.card)?;

    if global.verbose {
        println!("Clearing due date on card {card_id}...");
    }

    let client = TrelloClient::from_env()?;
    let card = client.clear_card_due_date(&card_id).await?;

    if options.json {
        print_json(&card)?;
    } else {
        super::display_card(&card);
    }

    Ok(())
}
