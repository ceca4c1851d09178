use serde::Deserialize;
use trellomcp_core::ids::extract_card_id;
use trellomcp_core::params::{CardCreate, CardMove, CardUpdate, Position};

use super::{parse_args, text_result, tool_error, JsonRpcError, Tool};
use crate::prelude::{eprintln, *};
use crate::trello::TrelloClient;

pub fn definitions() -> Vec<Tool> {
    vec![
        Tool {
            name: "list_cards".to_string(),
            description: "Get all cards in a Trello list, ordered by position ascending.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "list_id": {
                        "type": "string",
                        "description": "The ID of the list"
                    }
                },
                "required": ["list_id"]
            }),
        },
        Tool {
            name: "get_card".to_string(),
            description: "Get details of a specific Trello card. Accepts a card ID, short link, or full trello.com card URL.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "card_id": {
                        "type": "string",
                        "description": "Card ID, short link, or trello.com card URL"
                    }
                },
                "required": ["card_id"]
            }),
        },
        Tool {
            name: "create_card".to_string(),
            description: "Create a new card in a Trello list.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "list_id": {
                        "type": "string",
                        "description": "The ID of the list where the card will be created"
                    },
                    "name": {
                        "type": "string",
                        "description": "Name of the new card"
                    },
                    "desc": {
                        "type": "string",
                        "description": "Optional description for the card"
                    },
                    "pos": {
                        "type": ["string", "number"],
                        "description": "Position of the card: top, bottom, or a positive number"
                    },
                    "due": {
                        "type": "string",
                        "description": "Optional due date (ISO 8601 format: YYYY-MM-DDTHH:mm:ss.sssZ)"
                    }
                },
                "required": ["list_id", "name"]
            }),
        },
        Tool {
            name: "update_card".to_string(),
            description: "Update a Trello card. Only the supplied fields change; absent fields keep their current values.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "card_id": {
                        "type": "string",
                        "description": "Card ID, short link, or trello.com card URL"
                    },
                    "name": {
                        "type": "string",
                        "description": "New name for the card"
                    },
                    "desc": {
                        "type": "string",
                        "description": "New description for the card"
                    },
                    "list_id": {
                        "type": "string",
                        "description": "New list ID to move the card to"
                    },
                    "due": {
                        "type": "string",
                        "description": "New due date (ISO 8601 format)"
                    },
                    "due_complete": {
                        "type": "boolean",
                        "description": "Mark the due date as complete (true/false)"
                    }
                },
                "required": ["card_id"]
            }),
        },
        Tool {
            name: "delete_card".to_string(),
            description: "Delete a Trello card.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "card_id": {
                        "type": "string",
                        "description": "Card ID, short link, or trello.com card URL"
                    }
                },
                "required": ["card_id"]
            }),
        },
        Tool {
            name: "move_card".to_string(),
            description: "Move a Trello card to a different list, optionally at a given position.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "card_id": {
                        "type": "string",
                        "description": "Card ID, short link, or trello.com card URL"
                    },
                    "list_id": {
                        "type": "string",
                        "description": "The ID of the destination list"
                    },
                    "pos": {
                        "type": ["string", "number"],
                        "description": "Position in the new list: top, bottom, or a positive number"
                    }
                },
                "required": ["card_id", "list_id"]
            }),
        },
        Tool {
            name: "set_card_due_date".to_string(),
            description: "Set or update a card's due date.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "card_id": {
                        "type": "string",
                        "description": "Card ID, short link, or trello.com card URL"
                    },
                    "due_date": {
                        "type": "string",
                        "description": "Due date in ISO 8601 format, e.g. 2026-01-25T12:00:00.000Z"
                    }
                },
                "required": ["card_id", "due_date"]
            }),
        },
        Tool {
            name: "mark_due_date_complete".to_string(),
            description: "Mark a card's due date as complete or incomplete.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "card_id": {
                        "type": "string",
                        "description": "Card ID, short link, or trello.com card URL"
                    },
                    "complete": {
                        "type": "boolean",
                        "description": "True to mark complete, false for incomplete (default: true)"
                    }
                },
                "required": ["card_id"]
            }),
        },
        Tool {
            name: "clear_card_due_date".to_string(),
            description: "Remove the due date from a card.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "card_id": {
                        "type": "string",
                        "description": "Card ID, short link, or trello.com card URL"
                    }
                },
                "required": ["card_id"]
            }),
        },
    ]
}

pub async fn handle_list_cards(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct ListCardsArgs {
        list_id: String,
    }

    let args: ListCardsArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!("Calling list_cards: list_id={}", args.list_id);
    }

    let cards = client.list_cards(&args.list_id).await.map_err(tool_error)?;

    text_result(&cards)
}

pub async fn handle_get_card(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct GetCardArgs {
        card_id: String,
    }

    let args: GetCardArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!("Calling get_card: card_id={}", args.card_id);
    }

    let card_id = extract_card_id(&args.card_id).map_err(tool_error)?;
    let card = client.get_card(&card_id).await.map_err(tool_error)?;

    text_result(&card)
}

pub async fn handle_create_card(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct CreateCardArgs {
        list_id: String,
        name: String,
        desc: Option<String>,
        pos: Option<Position>,
        due: Option<String>,
    }

    let args: CreateCardArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!(
            "Calling create_card: list_id={}, name={}",
            args.list_id, args.name
        );
    }

    let card = client
        .create_card(&CardCreate {
            id_list: args.list_id,
            name: args.name,
            desc: args.desc,
            pos: args.pos,
            due: args.due,
        })
        .await
        .map_err(tool_error)?;

    text_result(&card)
}

pub async fn handle_update_card(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct UpdateCardArgs {
        card_id: String,
        name: Option<String>,
        desc: Option<String>,
        list_id: Option<String>,
        due: Option<String>,
        due_complete: Option<bool>,
    }

    let args: UpdateCardArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!("Calling update_card: card_id={}", args.card_id);
    }

    let card_id = extract_card_id(&args.card_id).map_err(tool_error)?;
    let card = client
        .update_card(
            &card_id,
            &CardUpdate {
                name: args.name,
                desc: args.desc,
                id_list: args.list_id,
                due: args.due,
                due_complete: args.due_complete,
            },
        )
        .await
        .map_err(tool_error)?;

    text_result(&card)
}

pub async fn handle_delete_card(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct DeleteCardArgs {
        card_id: String,
    }

    let args: DeleteCardArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!("Calling delete_card: card_id={}", args.card_id);
    }

    let card_id = extract_card_id(&args.card_id).map_err(tool_error)?;
    let result = client.delete_card(&card_id).await.map_err(tool_error)?;

    text_result(&serde_json::json!({
        "success": true,
        "card_id": card_id,
        "result": result,
    }))
}

pub async fn handle_move_card(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct MoveCardArgs {
        card_id: String,
        list_id: String,
        pos: Option<Position>,
    }

    let args: MoveCardArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!(
            "Calling move_card: card_id={}, list_id={}",
            args.card_id, args.list_id
        );
    }

    let card_id = extract_card_id(&args.card_id).map_err(tool_error)?;
    let card = client
        .move_card(
            &card_id,
            &CardMove {
                id_list: args.list_id,
                pos: args.pos,
            },
        )
        .await
        .map_err(tool_error)?;

    text_result(&card)
}

pub async fn handle_set_card_due_date(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct SetDueArgs {
        card_id: String,
        due_date: String,
    }

    let args: SetDueArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!(
            "Calling set_card_due_date: card_id={}, due_date={}",
            args.card_id, args.due_date
        );
    }

    let card_id = extract_card_id(&args.card_id).map_err(tool_error)?;
    let card = client
        .set_card_due_date(&card_id, &args.due_date)
        .await
        .map_err(tool_error)?;

    text_result(&card)
}

pub async fn handle_mark_due_date_complete(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct MarkDueCompleteArgs {
        card_id: String,
        complete: Option<bool>,
    }

    let args: MarkDueCompleteArgs = parse_args(arguments)?;
    let complete = args.complete.unwrap_or(true);

    if global.verbose {
        eprintln!(
            "Calling mark_due_date_complete: card_id={}, complete={complete}",
            args.card_id
        );
    }

    let card_id = extract_card_id(&args.card_id).map_err(tool_error)?;
    let card = client
        .mark_due_date_complete(&card_id, complete)
        .await
        .map_err(tool_error)?;

    text_result(&card)
}

pub async fn handle_clear_card_due_date(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct ClearDueArgs {
        card_id: String,
    }

    let args: ClearDueArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!("Calling clear_card_due_date: card_id={}", args.card_id);
    }

    let card_id = extract_card_id(&args.card_id).map_err(tool_error)?;
    let card = client
        .clear_card_due_date(&card_id)
        .await
        .map_err(tool_error)?;

    text_result(&card)
}
