//! Addressable read-only views: URI scheme and composite payload shapes.

use std::fmt;

use serde::Serialize;

use crate::error::Error;
use crate::types::{Board, Card, List};

/// A parsed `trello://` resource address.
///
/// Three forms exist: `trello://board/{id}`, `trello://list/{id}`, and
/// `trello://card/{id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceRef {
    Board(String),
    List(String),
    Card(String),
}

const SCHEME: &str = "trello://";

impl ResourceRef {
    pub fn parse(uri: &str) -> Result<Self, Error> {
        let rest = uri.strip_prefix(SCHEME).ok_or_else(|| {
            Error::validation(format!("invalid resource URI {uri:?}: expected trello:// scheme"))
        })?;

        let (form, id) = rest.split_once('/').ok_or_else(|| {
            Error::validation(format!(
                "invalid resource URI {uri:?}: expected trello://<board|list|card>/<id>"
            ))
        })?;

        if id.is_empty() || id.contains('/') {
            return Err(Error::validation(format!(
                "invalid resource URI {uri:?}: malformed identifier"
            )));
        }

        match form {
            "board" => Ok(Self::Board(id.to_string())),
            "list" => Ok(Self::List(id.to_string())),
            "card" => Ok(Self::Card(id.to_string())),
            other => Err(Error::validation(format!(
                "invalid resource URI {uri:?}: unknown form {other:?}"
            ))),
        }
    }

    pub fn uri(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Board(id) => write!(f, "{SCHEME}board/{id}"),
            Self::List(id) => write!(f, "{SCHEME}list/{id}"),
            Self::Card(id) => write!(f, "{SCHEME}card/{id}"),
        }
    }
}

/// One list together with its cards, position ascending.
#[derive(Debug, Serialize, Clone)]
pub struct ListWithCards {
    pub list: List,
    pub cards: Vec<Card>,
}

/// Payload of the board resource: the board, its lists, and the cards of
/// every list. Produced only when every constituent fetch succeeded.
#[derive(Debug, Serialize, Clone)]
pub struct BoardSnapshot {
    pub board: Board,
    pub lists: Vec<ListWithCards>,
}

/// Payload of the list resource.
#[derive(Debug, Serialize, Clone)]
pub struct ListSnapshot {
    pub list: List,
    pub cards: Vec<Card>,
}

/// Zip lists with their per-list card fetches, preserving remote order.
///
/// Callers must supply exactly one card vector per list; the aggregation is
/// all-or-nothing, so a failed fetch never reaches this point.
pub fn assemble_board_snapshot(
    board: Board,
    lists: Vec<List>,
    cards_per_list: Vec<Vec<Card>>,
) -> BoardSnapshot {
    debug_assert_eq!(lists.len(), cards_per_list.len());

    let lists = lists
        .into_iter()
        .zip(cards_per_list)
        .map(|(list, cards)| ListWithCards { list, cards })
        .collect();

    BoardSnapshot { board, lists }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(id: &str) -> Board {
        serde_json::from_value(serde_json::json!({"id": id, "name": format!("board {id}")}))
            .unwrap()
    }

    fn list(id: &str) -> List {
        serde_json::from_value(serde_json::json!({"id": id, "name": format!("list {id}")}))
            .unwrap()
    }

    fn card(id: &str) -> Card {
        serde_json::from_value(serde_json::json!({"id": id, "name": format!("card {id}")}))
            .unwrap()
    }

    #[test]
    fn test_parse_all_three_forms() {
        assert_eq!(
            ResourceRef::parse("trello://board/b1").unwrap(),
            ResourceRef::Board("b1".to_string())
        );
        assert_eq!(
            ResourceRef::parse("trello://list/l1").unwrap(),
            ResourceRef::List("l1".to_string())
        );
        assert_eq!(
            ResourceRef::parse("trello://card/c1").unwrap(),
            ResourceRef::Card("c1".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_malformed_uris() {
        for uri in [
            "http://board/b1",
            "trello://board",
            "trello://board/",
            "trello://board/b1/extra",
            "trello://sticker/s1",
            "board/b1",
        ] {
            let err = ResourceRef::parse(uri).unwrap_err();
            assert_eq!(err.kind(), "validation", "expected rejection for {uri}");
        }
    }

    #[test]
    fn test_uri_round_trip() {
        for uri in ["trello://board/b1", "trello://list/l1", "trello://card/c1"] {
            assert_eq!(ResourceRef::parse(uri).unwrap().uri(), uri);
        }
    }

    #[test]
    fn test_board_snapshot_shape() {
        let snapshot = assemble_board_snapshot(
            board("b1"),
            vec![list("l1"), list("l2")],
            vec![vec![card("c1"), card("c2")], vec![]],
        );

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["board"]["id"], "b1");
        assert_eq!(json["lists"][0]["list"]["id"], "l1");
        assert_eq!(json["lists"][0]["cards"][1]["id"], "c2");
        assert_eq!(json["lists"][1]["cards"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_board_snapshot_preserves_list_order() {
        let snapshot = assemble_board_snapshot(
            board("b1"),
            vec![list("todo"), list("doing"), list("done")],
            vec![vec![], vec![], vec![]],
        );

        let order: Vec<_> = snapshot.lists.iter().map(|l| l.list.id.as_str()).collect();
        assert_eq!(order, vec!["todo", "doing", "done"]);
    }
}
