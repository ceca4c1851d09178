//! Addressable read-only resources.
//!
//! Three URI forms, all JSON payloads: `trello://board/{id}` (board with
//! lists and cards), `trello://list/{id}` (list with cards), and
//! `trello://card/{id}` (card detail). Composite fetches are fail-fast:
//! a failure in any constituent call fails the whole read.

use serde::{Deserialize, Serialize};
use trellomcp_core::resource::ResourceRef;

use super::tools::tool_error;
use super::JsonRpcError;
use crate::prelude::{eprintln, *};
use crate::trello::TrelloClient;

#[derive(Debug, Serialize)]
struct ResourceDescriptor {
    name: String,
    description: String,
    #[serde(rename = "uriTemplate")]
    uri_template: String,
    #[serde(rename = "mimeType")]
    mime_type: String,
}

#[derive(Debug, Serialize)]
struct ResourcesList {
    resources: Vec<ResourceDescriptor>,
}

#[derive(Debug, Deserialize)]
struct ReadResourceParams {
    uri: String,
}

#[derive(Debug, Serialize)]
struct ResourceContents {
    uri: String,
    #[serde(rename = "mimeType")]
    mime_type: String,
    text: String,
}

#[derive(Debug, Serialize)]
struct ReadResourceResult {
    contents: Vec<ResourceContents>,
}

fn descriptors() -> Vec<ResourceDescriptor> {
    vec![
        ResourceDescriptor {
            name: "board".to_string(),
            description: "A board with its lists and the cards of every list, \
                          as {board, lists: [{list, cards}]}."
                .to_string(),
            uri_template: "trello://board/{board_id}".to_string(),
            mime_type: "application/json".to_string(),
        },
        ResourceDescriptor {
            name: "list".to_string(),
            description: "A list with its cards, as {list, cards}.".to_string(),
            uri_template: "trello://list/{list_id}".to_string(),
            mime_type: "application/json".to_string(),
        },
        ResourceDescriptor {
            name: "card".to_string(),
            description: "Full detail of a single card.".to_string(),
            uri_template: "trello://card/{card_id}".to_string(),
            mime_type: "application/json".to_string(),
        },
    ]
}

pub fn handle_resources_list() -> Result<serde_json::Value, JsonRpcError> {
    let result = ResourcesList {
        resources: descriptors(),
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError {
        code: -32603,
        message: f!("Internal error: {e}"),
        data: None,
    })
}

pub async fn handle_resources_read(
    params: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: ReadResourceParams =
        serde_json::from_value(params.unwrap_or(serde_json::Value::Null)).map_err(|e| {
            JsonRpcError {
                code: -32602,
                message: f!("Invalid params: {e}"),
                data: None,
            }
        })?;

    if global.verbose {
        eprintln!("Reading resource: {}", params.uri);
    }

    let reference = ResourceRef::parse(&params.uri).map_err(tool_error)?;

    let payload = match &reference {
        ResourceRef::Board(board_id) => {
            let snapshot = client.board_snapshot(board_id).await.map_err(tool_error)?;
            serde_json::to_value(snapshot)
        }
        ResourceRef::List(list_id) => {
            let snapshot = client.list_snapshot(list_id).await.map_err(tool_error)?;
            serde_json::to_value(snapshot)
        }
        ResourceRef::Card(card_id) => {
            let card = client.get_card(card_id).await.map_err(tool_error)?;
            serde_json::to_value(card)
        }
    }
    .map_err(|e| JsonRpcError {
        code: -32603,
        message: f!("Serialization error: {e}"),
        data: None,
    })?;

    let text = serde_json::to_string_pretty(&payload).map_err(|e| JsonRpcError {
        code: -32603,
        message: f!("Serialization error: {e}"),
        data: None,
    })?;

    let result = ReadResourceResult {
        contents: vec![ResourceContents {
            uri: reference.uri(),
            mime_type: "application/json".to_string(),
            text,
        }],
    };

    serde_json::to_value(result).map_err(|e| JsonRpcError {
        code: -32603,
        message: f!("Internal error: {e}"),
        data: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resources_list_declares_three_forms() {
        let value = handle_resources_list().unwrap();
        let resources = value["resources"].as_array().unwrap();
        assert_eq!(resources.len(), 3);

        let templates: Vec<_> = resources
            .iter()
            .map(|r| r["uriTemplate"].as_str().unwrap())
            .collect();
        assert!(templates.contains(&"trello://board/{board_id}"));
        assert!(templates.contains(&"trello://list/{list_id}"));
        assert!(templates.contains(&"trello://card/{card_id}"));

        for resource in resources {
            assert_eq!(resource["mimeType"], "application/json");
        }
    }
}
