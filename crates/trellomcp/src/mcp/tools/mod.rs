mod board;
mod card;
mod checklist;
mod label;
mod list;

use serde::{Deserialize, Serialize};

// Re-export types needed by tool handlers
pub use super::{JsonRpcError, Tool};

use crate::prelude::*;
use crate::trello::TrelloClient;

// MCP Protocol types for tools
#[derive(Debug, Serialize)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct ServerCapabilities {
    pub tools: Option<ToolsCapability>,
    pub resources: Option<ResourcesCapability>,
}

#[derive(Debug, Serialize)]
pub struct ToolsCapability {}

#[derive(Debug, Serialize)]
pub struct ResourcesCapability {}

#[derive(Debug, Serialize)]
pub struct InitializeResult {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    pub capabilities: ServerCapabilities,
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Serialize)]
pub struct ToolsList {
    pub tools: Vec<Tool>,
}

#[derive(Debug, Deserialize)]
pub struct CallToolParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
pub struct CallToolResult {
    pub content: Vec<Content>,
    #[serde(rename = "isError", skip_serializing_if = "Option::is_none")]
    pub is_error: Option<bool>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum Content {
    #[serde(rename = "text")]
    Text { text: String },
}

/// The full tool registry, built once per listing and iterated by the
/// invocation boundary.
pub fn definitions() -> Vec<Tool> {
    let mut tools = board::definitions();
    tools.extend(list::definitions());
    tools.extend(card::definitions());
    tools.extend(label::definitions());
    tools.extend(checklist::definitions());
    tools
}

pub fn handle_initialize() -> Result<serde_json::Value, JsonRpcError> {
    let result = InitializeResult {
        protocol_version: "2024-11-05".to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolsCapability {}),
            resources: Some(ResourcesCapability {}),
        },
        server_info: ServerInfo {
            name: "trellomcp".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
    };

    serde_json::to_value(result).map_err(internal_error)
}

pub fn handle_tools_list() -> Result<serde_json::Value, JsonRpcError> {
    let result = ToolsList {
        tools: definitions(),
    };

    serde_json::to_value(result).map_err(internal_error)
}

pub async fn handle_tools_call(
    params: Option<serde_json::Value>,
    client: &TrelloClient,
    global: &crate::Global,
) -> Result<serde_json::Value, JsonRpcError> {
    let params: CallToolParams = serde_json::from_value(params.unwrap_or(serde_json::Value::Null))
        .map_err(|e| JsonRpcError {
            code: -32602,
            message: f!("Invalid params: {e}"),
            data: None,
        })?;

    let arguments = params.arguments;

    match params.name.as_str() {
        "list_boards" => board::handle_list_boards(arguments, client, global).await,
        "get_board" => board::handle_get_board(arguments, client, global).await,
        "create_board" => board::handle_create_board(arguments, client, global).await,
        "get_board_lists" => list::handle_get_board_lists(arguments, client, global).await,
        "create_list" => list::handle_create_list(arguments, client, global).await,
        "archive_list" => list::handle_archive_list(arguments, client, global).await,
        "list_cards" => card::handle_list_cards(arguments, client, global).await,
        "get_card" => card::handle_get_card(arguments, client, global).await,
        "create_card" => card::handle_create_card(arguments, client, global).await,
        "update_card" => card::handle_update_card(arguments, client, global).await,
        "delete_card" => card::handle_delete_card(arguments, client, global).await,
        "move_card" => card::handle_move_card(arguments, client, global).await,
        "set_card_due_date" => card::handle_set_card_due_date(arguments, client, global).await,
        "mark_due_date_complete" => {
            card::handle_mark_due_date_complete(arguments, client, global).await
        }
        "clear_card_due_date" => card::handle_clear_card_due_date(arguments, client, global).await,
        "get_board_labels" => label::handle_get_board_labels(arguments, client, global).await,
        "create_label" => label::handle_create_label(arguments, client, global).await,
        "update_label" => label::handle_update_label(arguments, client, global).await,
        "delete_label" => label::handle_delete_label(arguments, client, global).await,
        "get_card_labels" => label::handle_get_card_labels(arguments, client, global).await,
        "add_label_to_card" => label::handle_add_label_to_card(arguments, client, global).await,
        "remove_label_from_card" => {
            label::handle_remove_label_from_card(arguments, client, global).await
        }
        "set_card_labels" => label::handle_set_card_labels(arguments, client, global).await,
        "get_card_checklists" => {
            checklist::handle_get_card_checklists(arguments, client, global).await
        }
        "create_checklist" => checklist::handle_create_checklist(arguments, client, global).await,
        "get_checklist" => checklist::handle_get_checklist(arguments, client, global).await,
        "update_checklist" => checklist::handle_update_checklist(arguments, client, global).await,
        "delete_checklist" => checklist::handle_delete_checklist(arguments, client, global).await,
        "get_checklist_items" => {
            checklist::handle_get_checklist_items(arguments, client, global).await
        }
        "add_checklist_item" => {
            checklist::handle_add_checklist_item(arguments, client, global).await
        }
        "update_checklist_item" => {
            checklist::handle_update_checklist_item(arguments, client, global).await
        }
        "delete_checklist_item" => {
            checklist::handle_delete_checklist_item(arguments, client, global).await
        }
        _ => Err(JsonRpcError {
            code: -32602,
            message: f!("Unknown tool: {}", params.name),
            data: None,
        }),
    }
}

/// Decode tool arguments; missing required fields become an invalid-params
/// error before any remote call. Omitted arguments decode as an empty
/// object so tools without required fields still work.
pub(crate) fn parse_args<T: serde::de::DeserializeOwned>(
    arguments: Option<serde_json::Value>,
) -> Result<T, JsonRpcError> {
    let arguments = arguments.unwrap_or_else(|| serde_json::json!({}));
    serde_json::from_value(arguments).map_err(|e| JsonRpcError {
        code: -32602,
        message: f!("Invalid arguments: {e}"),
        data: None,
    })
}

/// Map a typed adapter error onto JSON-RPC, tagging the taxonomy kind so
/// callers can distinguish auth from not-found from transport failures.
pub(crate) fn tool_error(err: Error) -> JsonRpcError {
    let code = match &err {
        Error::Validation(_) => -32602,
        _ => -32603,
    };

    JsonRpcError {
        code,
        message: err.to_string(),
        data: Some(serde_json::json!({ "kind": err.kind() })),
    }
}

/// Wrap serializable data in the MCP tool-result envelope.
pub(crate) fn text_result<T: Serialize>(data: &T) -> Result<serde_json::Value, JsonRpcError> {
    let json_string = serde_json::to_string_pretty(data).map_err(|e| JsonRpcError {
        code: -32603,
        message: f!("Serialization error: {e}"),
        data: None,
    })?;

    let result = CallToolResult {
        content: vec![Content::Text { text: json_string }],
        is_error: None,
    };

    serde_json::to_value(result).map_err(internal_error)
}

fn internal_error(e: serde_json::Error) -> JsonRpcError {
    JsonRpcError {
        code: -32603,
        message: f!("Internal error: {e}"),
        data: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definitions_names_are_unique() {
        let tools = definitions();
        let names: std::collections::HashSet<_> = tools.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names.len(), tools.len());
    }

    #[test]
    fn test_definitions_cover_every_operation() {
        let tools = definitions();
        let names: Vec<_> = tools.iter().map(|t| t.name.as_str()).collect();

        for expected in [
            "list_boards",
            "get_board",
            "create_board",
            "get_board_lists",
            "create_list",
            "archive_list",
            "list_cards",
            "get_card",
            "create_card",
            "update_card",
            "delete_card",
            "move_card",
            "set_card_due_date",
            "mark_due_date_complete",
            "clear_card_due_date",
            "get_board_labels",
            "create_label",
            "update_label",
            "delete_label",
            "get_card_labels",
            "add_label_to_card",
            "remove_label_from_card",
            "set_card_labels",
            "get_card_checklists",
            "create_checklist",
            "get_checklist",
            "update_checklist",
            "delete_checklist",
            "get_checklist_items",
            "add_checklist_item",
            "update_checklist_item",
            "delete_checklist_item",
        ] {
            assert!(names.contains(&expected), "missing tool: {expected}");
        }
    }

    #[test]
    fn test_definitions_schemas_are_objects_with_required() {
        for tool in definitions() {
            assert_eq!(
                tool.input_schema["type"], "object",
                "schema for {} is not an object",
                tool.name
            );
            assert!(
                tool.input_schema["required"].is_array(),
                "schema for {} has no required array",
                tool.name
            );
        }
    }

    #[test]
    fn test_tool_error_tags_kind_and_code() {
        let err = tool_error(Error::validation("name must not be empty"));
        assert_eq!(err.code, -32602);
        assert_eq!(err.data.unwrap()["kind"], "validation");

        let err = tool_error(Error::NotFound {
            operation: "get_card".to_string(),
            resource: "card x".to_string(),
        });
        assert_eq!(err.code, -32603);
        assert_eq!(err.data.unwrap()["kind"], "not_found");
    }

    #[test]
    fn test_text_result_envelope() {
        let value = text_result(&serde_json::json!({"id": "c1"})).unwrap();
        assert_eq!(value["content"][0]["type"], "text");
        assert!(value["content"][0]["text"]
            .as_str()
            .unwrap()
            .contains("\"id\": \"c1\""));
    }
}
