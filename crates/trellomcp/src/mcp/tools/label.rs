use serde::Deserialize;
use trellomcp_core::ids::{extract_board_id, extract_card_id};
use trellomcp_core::params::{LabelCreate, LabelUpdate};

use super::{parse_args, text_result, tool_error, JsonRpcError, Tool};
use crate::prelude::{eprintln, *};
use crate::trello::TrelloClient;

pub fn definitions() -> Vec<Tool> {
    vec![
        Tool {
            name: "get_board_labels".to_string(),
            description: "Get all labels on a Trello board.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "board_id": {
                        "type": "string",
                        "description": "Board ID, short link, or trello.com board URL"
                    }
                },
                "required": ["board_id"]
            }),
        },
        Tool {
            name: "create_label".to_string(),
            description: "Create a new label on a Trello board.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "board_id": {
                        "type": "string",
                        "description": "Board ID, short link, or trello.com board URL"
                    },
                    "name": {
                        "type": "string",
                        "description": "Name of the label"
                    },
                    "color": {
                        "type": "string",
                        "description": "Color of the label (green, yellow, orange, red, purple, blue, sky, lime, pink, black); omit for no color"
                    }
                },
                "required": ["board_id", "name"]
            }),
        },
        Tool {
            name: "update_label".to_string(),
            description: "Update a Trello label's name or color. Only the supplied fields change.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "label_id": {
                        "type": "string",
                        "description": "The ID of the label to update"
                    },
                    "name": {
                        "type": "string",
                        "description": "New name for the label"
                    },
                    "color": {
                        "type": "string",
                        "description": "New color for the label"
                    }
                },
                "required": ["label_id"]
            }),
        },
        Tool {
            name: "delete_label".to_string(),
            description: "Delete a Trello label.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "label_id": {
                        "type": "string",
                        "description": "The ID of the label to delete"
                    }
                },
                "required": ["label_id"]
            }),
        },
        Tool {
            name: "get_card_labels".to_string(),
            description: "Get all labels assigned to a Trello card.".to_string(),
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
            name: "add_label_to_card".to_string(),
            description: "Add a label to a Trello card.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "card_id": {
                        "type": "string",
                        "description": "Card ID, short link, or trello.com card URL"
                    },
                    "label_id": {
                        "type": "string",
                        "description": "The ID of the label to add"
                    }
                },
                "required": ["card_id", "label_id"]
            }),
        },
        Tool {
            name: "remove_label_from_card".to_string(),
            description: "Remove a label from a Trello card.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "card_id": {
                        "type": "string",
                        "description": "Card ID, short link, or trello.com card URL"
                    },
                    "label_id": {
                        "type": "string",
                        "description": "The ID of the label to remove"
                    }
                },
                "required": ["card_id", "label_id"]
            }),
        },
        Tool {
            name: "set_card_labels".to_string(),
            description: "Set all labels on a card, replacing any existing labels.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "card_id": {
                        "type": "string",
                        "description": "Card ID, short link, or trello.com card URL"
                    },
                    "label_ids": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Label IDs that become the card's full label set"
                    }
                },
                "required": ["card_id", "label_ids"]
            }),
        },
    ]
}

pub async fn handle_get_board_labels(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct GetBoardLabelsArgs {
        board_id: String,
    }

    let args: GetBoardLabelsArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!("Calling get_board_labels: board_id={}", args.board_id);
    }

    let board_id = extract_board_id(&args.board_id).map_err(tool_error)?;
    let labels = client
        .get_board_labels(&board_id)
        .await
        .map_err(tool_error)?;

    text_result(&labels)
}

pub async fn handle_create_label(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct CreateLabelArgs {
        board_id: String,
        name: String,
        color: Option<String>,
    }

    let args: CreateLabelArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!(
            "Calling create_label: board_id={}, name={}",
            args.board_id, args.name
        );
    }

    let board_id = extract_board_id(&args.board_id).map_err(tool_error)?;
    let label = client
        .create_label(&LabelCreate {
            id_board: board_id,
            name: args.name,
            color: args.color,
        })
        .await
        .map_err(tool_error)?;

    text_result(&label)
}

pub async fn handle_update_label(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct UpdateLabelArgs {
        label_id: String,
        name: Option<String>,
        color: Option<String>,
    }

    let args: UpdateLabelArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!("Calling update_label: label_id={}", args.label_id);
    }

    let label = client
        .update_label(
            &args.label_id,
            &LabelUpdate {
                name: args.name,
                color: args.color,
            },
        )
        .await
        .map_err(tool_error)?;

    text_result(&label)
}

pub async fn handle_delete_label(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct DeleteLabelArgs {
        label_id: String,
    }

    let args: DeleteLabelArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!("Calling delete_label: label_id={}", args.label_id);
    }

    let result = client
        .delete_label(&args.label_id)
        .await
        .map_err(tool_error)?;

    text_result(&serde_json::json!({
        "success": true,
        "label_id": args.label_id,
        "result": result,
    }))
}

pub async fn handle_get_card_labels(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct GetCardLabelsArgs {
        card_id: String,
    }

    let args: GetCardLabelsArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!("Calling get_card_labels: card_id={}", args.card_id);
    }

    let card_id = extract_card_id(&args.card_id).map_err(tool_error)?;
    let labels = client.get_card_labels(&card_id).await.map_err(tool_error)?;

    text_result(&labels)
}

pub async fn handle_add_label_to_card(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct AddLabelArgs {
        card_id: String,
        label_id: String,
    }

    let args: AddLabelArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!(
            "Calling add_label_to_card: card_id={}, label_id={}",
            args.card_id, args.label_id
        );
    }

    let card_id = extract_card_id(&args.card_id).map_err(tool_error)?;
    let result = client
        .add_label_to_card(&card_id, &args.label_id)
        .await
        .map_err(tool_error)?;

    text_result(&result)
}

pub async fn handle_remove_label_from_card(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct RemoveLabelArgs {
        card_id: String,
        label_id: String,
    }

    let args: RemoveLabelArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!(
            "Calling remove_label_from_card: card_id={}, label_id={}",
            args.card_id, args.label_id
        );
    }

    let card_id = extract_card_id(&args.card_id).map_err(tool_error)?;
    let result = client
        .remove_label_from_card(&card_id, &args.label_id)
        .await
        .map_err(tool_error)?;

    text_result(&serde_json::json!({
        "success": true,
        "card_id": card_id,
        "label_id": args.label_id,
        "result": result,
    }))
}

pub async fn handle_set_card_labels(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct SetCardLabelsArgs {
        card_id: String,
        label_ids: Vec<String>,
    }

    let args: SetCardLabelsArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!(
            "Calling set_card_labels: card_id={}, labels={}",
            args.card_id,
            args.label_ids.len()
        );
    }

    let card_id = extract_card_id(&args.card_id).map_err(tool_error)?;
    let card = client
        .set_card_labels(&card_id, &args.label_ids)
        .await
        .map_err(tool_error)?;

    text_result(&card)
}
