//! Trello entity models.
//!
//! Field names follow the Trello wire format (`idBoard`, `dueComplete`, …)
//! so entities round-trip through serde without a translation layer. All
//! entities are remote-owned: nothing here is constructed locally except by
//! deserializing a Trello response.

use serde::{Deserialize, Serialize};

/// Top-level container for lists and cards.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Board {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default)]
    pub closed: Option<bool>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, rename = "shortUrl")]
    pub short_url: Option<String>,
}

/// Ordered column within a board.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct List {
    pub id: String,
    pub name: String,
    #[serde(default, rename = "idBoard")]
    pub id_board: Option<String>,
    #[serde(default)]
    pub pos: Option<f64>,
    #[serde(default)]
    pub closed: Option<bool>,
}

/// Individual task item. Belongs to exactly one list at a time.
///
/// Trello attaches far more fields to a card than the operations here touch
/// (badges, members, stickers, …); those are carried through `extra`
/// unmodified rather than dropped.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: Option<String>,
    #[serde(default, rename = "idList")]
    pub id_list: Option<String>,
    #[serde(default, rename = "idBoard")]
    pub id_board: Option<String>,
    #[serde(default)]
    pub pos: Option<f64>,
    #[serde(default)]
    pub closed: Option<bool>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub due: Option<String>,
    #[serde(default, rename = "dueComplete")]
    pub due_complete: Option<bool>,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Colored tag scoped to a board.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Label {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, rename = "idBoard")]
    pub id_board: Option<String>,
}

/// Checklist attached to a card.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Checklist {
    pub id: String,
    pub name: String,
    #[serde(default, rename = "idCard")]
    pub id_card: Option<String>,
    #[serde(default, rename = "idBoard")]
    pub id_board: Option<String>,
    #[serde(default)]
    pub pos: Option<f64>,
    #[serde(default, rename = "checkItems")]
    pub check_items: Vec<CheckItem>,
}

/// Single entry in a checklist. `state` is `complete` or `incomplete`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CheckItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub pos: Option<f64>,
    #[serde(default, rename = "idChecklist")]
    pub id_checklist: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_deserializes_wire_fields() {
        let board: Board = serde_json::from_str(
            r#"{"id":"b1","name":"Roadmap","desc":"Q3 work","closed":false,
                "url":"https://trello.com/b/abc/roadmap","shortUrl":"https://trello.com/b/abc"}"#,
        )
        .unwrap();

        assert_eq!(board.id, "b1");
        assert_eq!(board.name, "Roadmap");
        assert_eq!(board.desc.as_deref(), Some("Q3 work"));
        assert_eq!(board.closed, Some(false));
        assert_eq!(board.short_url.as_deref(), Some("https://trello.com/b/abc"));
    }

    #[test]
    fn test_board_tolerates_missing_optionals() {
        let board: Board = serde_json::from_str(r#"{"id":"b1","name":"Bare"}"#).unwrap();
        assert!(board.desc.is_none());
        assert!(board.url.is_none());
    }

    #[test]
    fn test_list_uses_camel_case_board_id() {
        let list: List = serde_json::from_str(
            r#"{"id":"l1","name":"Doing","idBoard":"b1","pos":16384.0,"closed":false}"#,
        )
        .unwrap();

        assert_eq!(list.id_board.as_deref(), Some("b1"));
        assert_eq!(list.pos, Some(16384.0));
    }

    #[test]
    fn test_card_deserializes_wire_fields() {
        let card: Card = serde_json::from_str(
            r#"{"id":"c1","name":"Ship it","desc":"","idList":"l1","idBoard":"b1",
                "pos":65536.0,"closed":false,"due":"2026-09-01T12:00:00.000Z",
                "dueComplete":false,"labels":[{"id":"lb1","name":"bug","color":"red"}]}"#,
        )
        .unwrap();

        assert_eq!(card.id_list.as_deref(), Some("l1"));
        assert_eq!(card.due.as_deref(), Some("2026-09-01T12:00:00.000Z"));
        assert_eq!(card.due_complete, Some(false));
        assert_eq!(card.labels.len(), 1);
        assert_eq!(card.labels[0].color.as_deref(), Some("red"));
    }

    #[test]
    fn test_card_passes_unknown_fields_through() {
        let card: Card = serde_json::from_str(
            r#"{"id":"c1","name":"Task","idList":"l1",
                "badges":{"votes":3},"idMembers":["m1","m2"]}"#,
        )
        .unwrap();

        assert_eq!(card.extra["badges"]["votes"], 3);

        let round_tripped = serde_json::to_value(&card).unwrap();
        assert_eq!(round_tripped["badges"]["votes"], 3);
        assert_eq!(round_tripped["idMembers"][0], "m1");
    }

    #[test]
    fn test_label_allows_null_color() {
        let label: Label =
            serde_json::from_str(r#"{"id":"lb1","name":"misc","color":null}"#).unwrap();
        assert!(label.color.is_none());
    }

    #[test]
    fn test_checklist_with_items() {
        let checklist: Checklist = serde_json::from_str(
            r#"{"id":"ck1","name":"Release steps","idCard":"c1","pos":1.0,
                "checkItems":[{"id":"ci1","name":"tag","state":"incomplete","pos":1.0,
                               "idChecklist":"ck1"}]}"#,
        )
        .unwrap();

        assert_eq!(checklist.check_items.len(), 1);
        assert_eq!(checklist.check_items[0].state.as_deref(), Some("incomplete"));
    }
}
