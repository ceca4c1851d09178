//! Request-parameter builders.
//!
//! Each mutation has a small builder that validates caller input and
//! produces the exact query pairs sent to Trello. Keeping this pure means
//! the partial-update contract (absent fields are never sent, so the remote
//! leaves them untouched) is testable without any HTTP.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;

use crate::error::Error;

/// Ordering rank among siblings: symbolic `top`/`bottom` or a positive
/// number, matching what the Trello `pos` parameter accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    Top,
    Bottom,
    At(f64),
}

impl Position {
    pub fn as_param(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Bottom => write!(f, "bottom"),
            Self::At(n) => write!(f, "{n}"),
        }
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            other => {
                let n: f64 = other.parse().map_err(|_| {
                    Error::validation(format!(
                        "invalid position {other:?}: expected top, bottom, or a positive number"
                    ))
                })?;
                Self::try_from_number(n)
            }
        }
    }
}

impl Position {
    fn try_from_number(n: f64) -> Result<Self, Error> {
        if !n.is_finite() || n <= 0.0 {
            return Err(Error::validation(format!(
                "invalid position {n}: must be a positive number"
            )));
        }
        Ok(Self::At(n))
    }
}

// Tool arguments arrive as JSON where a position may be a string or a bare
// number; both are accepted.
impl<'de> Deserialize<'de> for Position {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PositionVisitor;

        impl Visitor<'_> for PositionVisitor {
            type Value = Position;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("\"top\", \"bottom\", or a positive number")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Position, E> {
                Position::from_str(v).map_err(E::custom)
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Position, E> {
                Position::try_from_number(v).map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Position, E> {
                Position::try_from_number(v as f64).map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Position, E> {
                Position::try_from_number(v as f64).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(PositionVisitor)
    }
}

/// Reject empty or blank required string fields before any remote call.
pub fn require(field: &str, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Due dates go over the wire verbatim but are checked locally first so a
/// typo fails fast instead of as an opaque remote 400.
pub fn validate_due(due: &str) -> Result<(), Error> {
    chrono::DateTime::parse_from_rfc3339(due).map_err(|e| {
        Error::validation(format!(
            "invalid due date {due:?}: expected ISO 8601 (e.g. 2026-01-25T12:00:00.000Z): {e}"
        ))
    })?;
    Ok(())
}

pub type Query = Vec<(String, String)>;

fn pair(key: &str, value: impl Into<String>) -> (String, String) {
    (key.to_string(), value.into())
}

#[derive(Debug, Clone)]
pub struct BoardCreate {
    pub name: String,
    pub desc: Option<String>,
}

impl BoardCreate {
    pub fn query(&self) -> Result<Query, Error> {
        require("board name", &self.name)?;

        let mut query = vec![pair("name", &self.name)];
        if let Some(desc) = &self.desc {
            query.push(pair("desc", desc));
        }
        Ok(query)
    }
}

#[derive(Debug, Clone)]
pub struct ListCreate {
    pub name: String,
    pub pos: Option<Position>,
}

impl ListCreate {
    pub fn query(&self) -> Result<Query, Error> {
        require("list name", &self.name)?;

        let mut query = vec![pair("name", &self.name)];
        if let Some(pos) = &self.pos {
            query.push(pair("pos", pos.as_param()));
        }
        Ok(query)
    }
}

/// Archiving sets the `closed` flag; the request is the same constant every
/// time, which is what makes the operation idempotent.
pub fn archive_list_query() -> Query {
    vec![pair("value", "true")]
}

#[derive(Debug, Clone)]
pub struct CardCreate {
    pub id_list: String,
    pub name: String,
    pub desc: Option<String>,
    pub pos: Option<Position>,
    pub due: Option<String>,
}

impl CardCreate {
    pub fn query(&self) -> Result<Query, Error> {
        require("list id", &self.id_list)?;
        require("card name", &self.name)?;

        let mut query = vec![pair("idList", &self.id_list), pair("name", &self.name)];
        if let Some(desc) = &self.desc {
            query.push(pair("desc", desc));
        }
        if let Some(pos) = &self.pos {
            query.push(pair("pos", pos.as_param()));
        }
        if let Some(due) = &self.due {
            validate_due(due)?;
            query.push(pair("due", due));
        }
        Ok(query)
    }
}

/// Partial update: only fields that are `Some` appear in the request, so
/// everything else keeps its remote value.
#[derive(Debug, Clone, Default)]
pub struct CardUpdate {
    pub name: Option<String>,
    pub desc: Option<String>,
    pub id_list: Option<String>,
    pub due: Option<String>,
    pub due_complete: Option<bool>,
}

impl CardUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.desc.is_none()
            && self.id_list.is_none()
            && self.due.is_none()
            && self.due_complete.is_none()
    }

    pub fn query(&self) -> Result<Query, Error> {
        let mut query = Query::new();
        if let Some(name) = &self.name {
            require("card name", name)?;
            query.push(pair("name", name));
        }
        if let Some(desc) = &self.desc {
            query.push(pair("desc", desc));
        }
        if let Some(id_list) = &self.id_list {
            require("list id", id_list)?;
            query.push(pair("idList", id_list));
        }
        if let Some(due) = &self.due {
            validate_due(due)?;
            query.push(pair("due", due));
        }
        if let Some(due_complete) = self.due_complete {
            query.push(pair("dueComplete", due_complete.to_string()));
        }
        Ok(query)
    }
}

/// Moving is an update restricted to destination list and position.
#[derive(Debug, Clone)]
pub struct CardMove {
    pub id_list: String,
    pub pos: Option<Position>,
}

impl CardMove {
    pub fn query(&self) -> Result<Query, Error> {
        require("list id", &self.id_list)?;

        let mut query = vec![pair("idList", &self.id_list)];
        if let Some(pos) = &self.pos {
            query.push(pair("pos", pos.as_param()));
        }
        Ok(query)
    }
}

pub fn set_due_query(due: &str) -> Result<Query, Error> {
    validate_due(due)?;
    Ok(vec![pair("due", due)])
}

/// Trello clears a due date when it receives the literal `null`.
pub fn clear_due_query() -> Query {
    vec![pair("due", "null")]
}

pub fn due_complete_query(complete: bool) -> Query {
    vec![pair("dueComplete", complete.to_string())]
}

#[derive(Debug, Clone)]
pub struct LabelCreate {
    pub id_board: String,
    pub name: String,
    pub color: Option<String>,
}

impl LabelCreate {
    pub fn query(&self) -> Result<Query, Error> {
        require("board id", &self.id_board)?;
        require("label name", &self.name)?;

        let mut query = vec![pair("idBoard", &self.id_board), pair("name", &self.name)];
        if let Some(color) = &self.color {
            query.push(pair("color", color));
        }
        Ok(query)
    }
}

#[derive(Debug, Clone, Default)]
pub struct LabelUpdate {
    pub name: Option<String>,
    pub color: Option<String>,
}

impl LabelUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.color.is_none()
    }

    pub fn query(&self) -> Result<Query, Error> {
        let mut query = Query::new();
        if let Some(name) = &self.name {
            query.push(pair("name", name));
        }
        if let Some(color) = &self.color {
            query.push(pair("color", color));
        }
        Ok(query)
    }
}

/// Replaces the full label set of a card.
pub fn set_card_labels_query(label_ids: &[String]) -> Result<Query, Error> {
    for id in label_ids {
        require("label id", id)?;
    }
    Ok(vec![pair("idLabels", label_ids.join(","))])
}

#[derive(Debug, Clone)]
pub struct ChecklistCreate {
    pub id_card: String,
    pub name: String,
    pub pos: Option<Position>,
}

impl ChecklistCreate {
    pub fn query(&self) -> Result<Query, Error> {
        require("card id", &self.id_card)?;
        require("checklist name", &self.name)?;

        let mut query = vec![pair("idCard", &self.id_card), pair("name", &self.name)];
        if let Some(pos) = &self.pos {
            query.push(pair("pos", pos.as_param()));
        }
        Ok(query)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChecklistUpdate {
    pub name: Option<String>,
    pub pos: Option<Position>,
}

impl ChecklistUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.pos.is_none()
    }

    pub fn query(&self) -> Result<Query, Error> {
        let mut query = Query::new();
        if let Some(name) = &self.name {
            require("checklist name", name)?;
            query.push(pair("name", name));
        }
        if let Some(pos) = &self.pos {
            query.push(pair("pos", pos.as_param()));
        }
        Ok(query)
    }
}

#[derive(Debug, Clone)]
pub struct CheckItemCreate {
    pub name: String,
    pub checked: Option<bool>,
    pub pos: Option<Position>,
}

impl CheckItemCreate {
    pub fn query(&self) -> Result<Query, Error> {
        require("item name", &self.name)?;

        let mut query = vec![pair("name", &self.name)];
        if let Some(checked) = self.checked {
            query.push(pair("checked", checked.to_string()));
        }
        if let Some(pos) = &self.pos {
            query.push(pair("pos", pos.as_param()));
        }
        Ok(query)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CheckItemUpdate {
    pub name: Option<String>,
    pub state: Option<String>,
    pub pos: Option<Position>,
}

impl CheckItemUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.state.is_none() && self.pos.is_none()
    }

    pub fn query(&self) -> Result<Query, Error> {
        let mut query = Query::new();
        if let Some(name) = &self.name {
            require("item name", name)?;
            query.push(pair("name", name));
        }
        if let Some(state) = &self.state {
            if state != "complete" && state != "incomplete" {
                return Err(Error::validation(format!(
                    "invalid item state {state:?}: expected complete or incomplete"
                )));
            }
            query.push(pair("state", state));
        }
        if let Some(pos) = &self.pos {
            query.push(pair("pos", pos.as_param()));
        }
        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(query: &Query) -> Vec<&str> {
        query.iter().map(|(k, _)| k.as_str()).collect()
    }

    fn value<'a>(query: &'a Query, key: &str) -> Option<&'a str> {
        query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn test_position_parses_symbolic_and_numeric() {
        assert_eq!(Position::from_str("top").unwrap(), Position::Top);
        assert_eq!(Position::from_str("bottom").unwrap(), Position::Bottom);
        assert_eq!(Position::from_str("16384").unwrap(), Position::At(16384.0));
        assert_eq!(Position::from_str("1.5").unwrap(), Position::At(1.5));
    }

    #[test]
    fn test_position_rejects_garbage_and_non_positive() {
        assert!(Position::from_str("middle").is_err());
        assert!(Position::from_str("-3").is_err());
        assert!(Position::from_str("0").is_err());
    }

    #[test]
    fn test_position_deserializes_string_or_number() {
        let from_str: Position = serde_json::from_str("\"top\"").unwrap();
        assert_eq!(from_str, Position::Top);

        let from_num: Position = serde_json::from_str("42").unwrap();
        assert_eq!(from_num, Position::At(42.0));

        assert!(serde_json::from_str::<Position>("\"sideways\"").is_err());
        assert!(serde_json::from_str::<Position>("-1").is_err());
    }

    #[test]
    fn test_position_param_formatting() {
        assert_eq!(Position::Top.as_param(), "top");
        assert_eq!(Position::At(65536.0).as_param(), "65536");
    }

    #[test]
    fn test_board_create_requires_name() {
        let err = BoardCreate {
            name: "   ".to_string(),
            desc: None,
        }
        .query()
        .unwrap_err();
        assert_eq!(err.kind(), "validation");
    }

    #[test]
    fn test_board_create_omits_absent_desc() {
        let query = BoardCreate {
            name: "Roadmap".to_string(),
            desc: None,
        }
        .query()
        .unwrap();
        assert_eq!(keys(&query), vec!["name"]);
    }

    #[test]
    fn test_card_create_carries_list_and_name_verbatim() {
        let query = CardCreate {
            id_list: "l1".to_string(),
            name: "Ship it".to_string(),
            desc: None,
            pos: Some(Position::Top),
            due: None,
        }
        .query()
        .unwrap();

        assert_eq!(value(&query, "idList"), Some("l1"));
        assert_eq!(value(&query, "name"), Some("Ship it"));
        assert_eq!(value(&query, "pos"), Some("top"));
        assert_eq!(value(&query, "desc"), None);
    }

    #[test]
    fn test_card_create_validates_due() {
        let err = CardCreate {
            id_list: "l1".to_string(),
            name: "x".to_string(),
            desc: None,
            pos: None,
            due: Some("next tuesday".to_string()),
        }
        .query()
        .unwrap_err();
        assert_eq!(err.kind(), "validation");
    }

    #[test]
    fn test_card_update_sends_only_supplied_fields() {
        let query = CardUpdate {
            name: Some("Renamed".to_string()),
            ..Default::default()
        }
        .query()
        .unwrap();

        assert_eq!(keys(&query), vec!["name"]);
        assert_eq!(value(&query, "desc"), None);
        assert_eq!(value(&query, "idList"), None);
    }

    #[test]
    fn test_card_update_empty_produces_no_pairs() {
        let update = CardUpdate::default();
        assert!(update.is_empty());
        assert!(update.query().unwrap().is_empty());
    }

    #[test]
    fn test_card_update_full() {
        let query = CardUpdate {
            name: Some("n".to_string()),
            desc: Some("d".to_string()),
            id_list: Some("l2".to_string()),
            due: Some("2026-01-25T12:00:00.000Z".to_string()),
            due_complete: Some(true),
        }
        .query()
        .unwrap();

        assert_eq!(keys(&query), vec!["name", "desc", "idList", "due", "dueComplete"]);
        assert_eq!(value(&query, "dueComplete"), Some("true"));
    }

    #[test]
    fn test_card_move_always_carries_destination() {
        let query = CardMove {
            id_list: "l2".to_string(),
            pos: None,
        }
        .query()
        .unwrap();
        assert_eq!(keys(&query), vec!["idList"]);
        assert_eq!(value(&query, "idList"), Some("l2"));
    }

    #[test]
    fn test_archive_query_is_constant() {
        assert_eq!(archive_list_query(), archive_list_query());
        assert_eq!(value(&archive_list_query(), "value"), Some("true"));
    }

    #[test]
    fn test_due_queries() {
        let query = set_due_query("2026-01-25T12:00:00.000Z").unwrap();
        assert_eq!(value(&query, "due"), Some("2026-01-25T12:00:00.000Z"));

        assert!(set_due_query("not a date").is_err());

        assert_eq!(value(&clear_due_query(), "due"), Some("null"));
        assert_eq!(value(&due_complete_query(false), "dueComplete"), Some("false"));
    }

    #[test]
    fn test_label_create_omits_absent_color() {
        let query = LabelCreate {
            id_board: "b1".to_string(),
            name: "bug".to_string(),
            color: None,
        }
        .query()
        .unwrap();
        assert_eq!(keys(&query), vec!["idBoard", "name"]);
    }

    #[test]
    fn test_set_card_labels_joins_ids() {
        let ids = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let query = set_card_labels_query(&ids).unwrap();
        assert_eq!(value(&query, "idLabels"), Some("a,b,c"));

        assert!(set_card_labels_query(&["".to_string()]).is_err());
    }

    #[test]
    fn test_check_item_update_validates_state() {
        let err = CheckItemUpdate {
            state: Some("done".to_string()),
            ..Default::default()
        }
        .query()
        .unwrap_err();
        assert_eq!(err.kind(), "validation");

        let query = CheckItemUpdate {
            state: Some("complete".to_string()),
            ..Default::default()
        }
        .query()
        .unwrap();
        assert_eq!(value(&query, "state"), Some("complete"));
    }
}
