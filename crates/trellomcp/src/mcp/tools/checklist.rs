use serde::Deserialize;
use trellomcp_core::ids::extract_card_id;
use trellomcp_core::params::{
    CheckItemCreate, CheckItemUpdate, ChecklistCreate, ChecklistUpdate, Position,
};

use super::{parse_args, text_result, tool_error, JsonRpcError, Tool};
use crate::prelude::{eprintln, *};
use crate::trello::TrelloClient;

pub fn definitions() -> Vec<Tool> {
    vec![
        Tool {
            name: "get_card_checklists".to_string(),
            description: "Get all checklists on a Trello card, including their items.".to_string(),
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
            name: "create_checklist".to_string(),
            description: "Create a new checklist on a Trello card.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "card_id": {
                        "type": "string",
                        "description": "Card ID, short link, or trello.com card URL"
                    },
                    "name": {
                        "type": "string",
                        "description": "Name of the checklist"
                    },
                    "pos": {
                        "type": ["string", "number"],
                        "description": "Position of the checklist: top, bottom, or a positive number"
                    }
                },
                "required": ["card_id", "name"]
            }),
        },
        Tool {
            name: "get_checklist".to_string(),
            description: "Get details of a specific Trello checklist, including its items.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "checklist_id": {
                        "type": "string",
                        "description": "The ID of the checklist"
                    }
                },
                "required": ["checklist_id"]
            }),
        },
        Tool {
            name: "update_checklist".to_string(),
            description: "Update a Trello checklist's name or position. Only the supplied fields change.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "checklist_id": {
                        "type": "string",
                        "description": "The ID of the checklist to update"
                    },
                    "name": {
                        "type": "string",
                        "description": "New name for the checklist"
                    },
                    "pos": {
                        "type": ["string", "number"],
                        "description": "New position for the checklist"
                    }
                },
                "required": ["checklist_id"]
            }),
        },
        Tool {
            name: "delete_checklist".to_string(),
            description: "Delete a Trello checklist.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "checklist_id": {
                        "type": "string",
                        "description": "The ID of the checklist to delete"
                    }
                },
                "required": ["checklist_id"]
            }),
        },
        Tool {
            name: "get_checklist_items".to_string(),
            description: "Get all items in a Trello checklist.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "checklist_id": {
                        "type": "string",
                        "description": "The ID of the checklist"
                    }
                },
                "required": ["checklist_id"]
            }),
        },
        Tool {
            name: "add_checklist_item".to_string(),
            description: "Add an item to a Trello checklist.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "checklist_id": {
                        "type": "string",
                        "description": "The ID of the checklist"
                    },
                    "name": {
                        "type": "string",
                        "description": "Name/text of the checklist item"
                    },
                    "checked": {
                        "type": "boolean",
                        "description": "Whether the item starts checked (default: false)"
                    },
                    "pos": {
                        "type": ["string", "number"],
                        "description": "Position of the item: top, bottom, or a positive number"
                    }
                },
                "required": ["checklist_id", "name"]
            }),
        },
        Tool {
            name: "update_checklist_item".to_string(),
            description: "Update a checklist item's name, state, or position. Item updates route through the card that owns the checklist.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "card_id": {
                        "type": "string",
                        "description": "Card ID, short link, or trello.com card URL of the card containing the checklist"
                    },
                    "checklist_item_id": {
                        "type": "string",
                        "description": "The ID of the checklist item"
                    },
                    "name": {
                        "type": "string",
                        "description": "New name for the item"
                    },
                    "state": {
                        "type": "string",
                        "description": "New state: complete or incomplete",
                        "enum": ["complete", "incomplete"]
                    },
                    "pos": {
                        "type": ["string", "number"],
                        "description": "New position for the item"
                    }
                },
                "required": ["card_id", "checklist_item_id"]
            }),
        },
        Tool {
            name: "delete_checklist_item".to_string(),
            description: "Delete an item from a Trello checklist.".to_string(),
            input_schema: serde_json::json!({
                "type": "object",
                "properties": {
                    "checklist_id": {
                        "type": "string",
                        "description": "The ID of the checklist"
                    },
                    "checklist_item_id": {
                        "type": "string",
                        "description": "The ID of the checklist item to delete"
                    }
                },
                "required": ["checklist_id", "checklist_item_id"]
            }),
        },
    ]
}

pub async fn handle_get_card_checklists(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct GetCardChecklistsArgs {
        card_id: String,
    }

    let args: GetCardChecklistsArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!("Calling get_card_checklists: card_id={}", args.card_id);
    }

    let card_id = extract_card_id(&args.card_id).map_err(tool_error)?;
    let checklists = client
        .get_card_checklists(&card_id)
        .await
        .map_err(tool_error)?;

    text_result(&checklists)
}

pub async fn handle_create_checklist(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct CreateChecklistArgs {
        card_id: String,
        name: String,
        pos: Option<Position>,
    }

    let args: CreateChecklistArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!(
            "Calling create_checklist: card_id={}, name={}",
            args.card_id, args.name
        );
    }

    let card_id = extract_card_id(&args.card_id).map_err(tool_error)?;
    let checklist = client
        .create_checklist(&ChecklistCreate {
            id_card: card_id,
            name: args.name,
            pos: args.pos,
        })
        .await
        .map_err(tool_error)?;

    text_result(&checklist)
}

pub async fn handle_get_checklist(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct GetChecklistArgs {
        checklist_id: String,
    }

    let args: GetChecklistArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!("Calling get_checklist: checklist_id={}", args.checklist_id);
    }

    let checklist = client
        .get_checklist(&args.checklist_id)
        .await
        .map_err(tool_error)?;

    text_result(&checklist)
}

pub async fn handle_update_checklist(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct UpdateChecklistArgs {
        checklist_id: String,
        name: Option<String>,
        pos: Option<Position>,
    }

    let args: UpdateChecklistArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!("Calling update_checklist: checklist_id={}", args.checklist_id);
    }

    let checklist = client
        .update_checklist(
            &args.checklist_id,
            &ChecklistUpdate {
                name: args.name,
                pos: args.pos,
            },
        )
        .await
        .map_err(tool_error)?;

    text_result(&checklist)
}

pub async fn handle_delete_checklist(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct DeleteChecklistArgs {
        checklist_id: String,
    }

    let args: DeleteChecklistArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!("Calling delete_checklist: checklist_id={}", args.checklist_id);
    }

    let result = client
        .delete_checklist(&args.checklist_id)
        .await
        .map_err(tool_error)?;

    text_result(&serde_json::json!({
        "success": true,
        "checklist_id": args.checklist_id,
        "result": result,
    }))
}

pub async fn handle_get_checklist_items(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct GetChecklistItemsArgs {
        checklist_id: String,
    }

    let args: GetChecklistItemsArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!(
            "Calling get_checklist_items: checklist_id={}",
            args.checklist_id
        );
    }

    let items = client
        .get_checklist_items(&args.checklist_id)
        .await
        .map_err(tool_error)?;

    text_result(&items)
}

pub async fn handle_add_checklist_item(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct AddChecklistItemArgs {
        checklist_id: String,
        name: String,
        checked: Option<bool>,
        pos: Option<Position>,
    }

    let args: AddChecklistItemArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!(
            "Calling add_checklist_item: checklist_id={}, name={}",
            args.checklist_id, args.name
        );
    }

    let item = client
        .add_checklist_item(
            &args.checklist_id,
            &CheckItemCreate {
                name: args.name,
                checked: args.checked,
                pos: args.pos,
            },
        )
        .await
        .map_err(tool_error)?;

    text_result(&item)
}

pub async fn handle_update_checklist_item(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct UpdateChecklistItemArgs {
        card_id: String,
        checklist_item_id: String,
        name: Option<String>,
        state: Option<String>,
        pos: Option<Position>,
    }

    let args: UpdateChecklistItemArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!(
            "Calling update_checklist_item: card_id={}, item_id={}",
            args.card_id, args.checklist_item_id
        );
    }

    let card_id = extract_card_id(&args.card_id).map_err(tool_error)?;
    let item = client
        .update_checklist_item(
            &card_id,
            &args.checklist_item_id,
            &CheckItemUpdate {
                name: args.name,
                state: args.state,
                pos: args.pos,
            },
        )
        .await
        .map_err(tool_error)?;

    text_result(&item)
}

pub async fn handle_delete_checklist_item(
    arguments: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    #[derive(Deserialize)]
    struct DeleteChecklistItemArgs {
        checklist_id: String,
        checklist_item_id: String,
    }

    let args: DeleteChecklistItemArgs = parse_args(arguments)?;

    if global.verbose {
        eprintln!(
            "Calling delete_checklist_item: checklist_id={}, item_id={}",
            args.checklist_id, args.checklist_item_id
        );
    }

    let result = client
        .delete_checklist_item(&args.checklist_id, &args.checklist_item_id)
        .await
        .map_err(tool_error)?;

    text_result(&serde_json::json!({
        "success": true,
        "checklist_id": args.checklist_id,
        "checklist_item_id": args.checklist_item_id,
        "result": result,
    }))
}
