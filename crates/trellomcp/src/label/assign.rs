use trellomcp_core::ids::extract_card_id;

use crate::prelude::{println, *};
use crate::trello::TrelloClient;

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct AddOptions {
    /// Card id, short link, or trello.com card URL
    #[clap(env = "TRELLO_CARD_ID")]
    pub card: String,

    /// Label id to add
    pub label_id: String,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct RemoveOptions {
    /// Card id, short link, or trello.com card URL
    #[clap(env = "TRELLO_CARD_ID")]
    pub card: String,

    /// Label id to remove
    pub label_id: String,
}

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct SetOptions {
    /// Card id, short link, or trello.com card URL
    #[clap(env = "TRELLO_CARD_ID")]
    pub card: String,

    /// Label ids that become the card's full label set
    #[arg(required = true)]
    pub label_ids: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn add_handler(options: AddOptions, global: crate::Global) -> Result<()> {
    let card_id = extract_card_id(&options.card)?;

    if global.verbose {
        println!("Adding label {} to card {card_id}...", options.label_id);
    }

    let client = TrelloClient::from_env()?;
    client.add_label_to_card(&card_id, &options.label_id).await?;

    println!("Added label {} to card {card_id}", options.label_id);

    Ok(())
}

pub async fn remove_handler(options: RemoveOptions, global: crate::Global) -> Result<()> {
    let card_id = extract_card_id(&options.card)?;

    if global.verbose {
        println!("Removing label {} from card {card_id}...", options.label_id);
    }

    let client = TrelloClient::from_env()?;
    client
        .remove_label_from_card(&card_id, &options.label_id)
        .await?;

    println!("Removed label {} from card {card_id}", options.label_id);

    Ok(())
}

pub async fn set_handler(options: SetOptions, global: crate::Global) -> Result<()> {
    let card_id = extract_card_id(&options.card)?;

    if global.verbose {
        println!(
            "Setting {} label(s) on card {card_id}...",
            options.label_ids.len()
        );
    }

    let client = TrelloClient::from_env()?;
    let card = client.set_card_labels(&card_id, &options.label_ids).await?;

    if options.json {
        print_json(&card)?;
    } else {
        super::display_labels(&card.labels);
    }

    Ok(())
}
