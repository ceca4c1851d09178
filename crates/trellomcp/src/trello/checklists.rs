use reqwest::Method;
use trellomcp_core::params::{CheckItemCreate, CheckItemUpdate, ChecklistCreate, ChecklistUpdate};
use trellomcp_core::types::{CheckItem, Checklist};

use super::{res, TrelloClient};
use crate::prelude::*;

impl TrelloClient {
    pub async fn get_card_checklists(&self, card_id: &str) -> Result<Vec<Checklist>, Error> {
        let path = f!("/cards/{}/checklists", urlencoding::encode(card_id));
        self.fetch(
            Method::GET,
            &path,
            &[],
            "get_card_checklists",
            Some(res("card", card_id)),
        )
        .await
    }

    pub async fn create_checklist(&self, params: &ChecklistCreate) -> Result<Checklist, Error> {
        let query = params.query()?;
        self.fetch(
            Method::POST,
            "/checklists",
            &query,
            "create_checklist",
            Some(res("card", &params.id_card)),
        )
        .await
    }

    pub async fn get_checklist(&self, checklist_id: &str) -> Result<Checklist, Error> {
        let path = f!("/checklists/{}", urlencoding::encode(checklist_id));
        self.fetch(
            Method::GET,
            &path,
            &[],
            "get_checklist",
            Some(res("checklist", checklist_id)),
        )
        .await
    }

    pub async fn update_checklist(
        &self,
        checklist_id: &str,
        params: &ChecklistUpdate,
    ) -> Result<Checklist, Error> {
        if params.is_empty() {
            return Err(Error::validation(
                "update_checklist: at least one of name or pos is required",
            ));
        }

        let query = params.query()?;
        let path = f!("/checklists/{}", urlencoding::encode(checklist_id));
        self.fetch(
            Method::PUT,
            &path,
            &query,
            "update_checklist",
            Some(res("checklist", checklist_id)),
        )
        .await
    }

    pub async fn delete_checklist(&self, checklist_id: &str) -> Result<serde_json::Value, Error> {
        let path = f!("/checklists/{}", urlencoding::encode(checklist_id));
        self.request(
            Method::DELETE,
            &path,
            &[],
            "delete_checklist",
            Some(res("checklist", checklist_id)),
        )
        .await
    }

    pub async fn get_checklist_items(&self, checklist_id: &str) -> Result<Vec<CheckItem>, Error> {
        let path = f!("/checklists/{}/checkItems", urlencoding::encode(checklist_id));
        self.fetch(
            Method::GET,
            &path,
            &[],
            "get_checklist_items",
            Some(res("checklist", checklist_id)),
        )
        .await
    }

    pub async fn add_checklist_item(
        &self,
        checklist_id: &str,
        params: &CheckItemCreate,
    ) -> Result<CheckItem, Error> {
        let query = params.query()?;
        let path = f!("/checklists/{}/checkItems", urlencoding::encode(checklist_id));
        self.fetch(
            Method::POST,
            &path,
            &query,
            "add_checklist_item",
            Some(res("checklist", checklist_id)),
        )
        .await
    }

    /// Item updates go through the card, not the checklist; that is how the
    /// remote API routes them.
    pub async fn update_checklist_item(
        &self,
        card_id: &str,
        item_id: &str,
        params: &CheckItemUpdate,
    ) -> Result<CheckItem, Error> {
        if params.is_empty() {
            return Err(Error::validation(
                "update_checklist_item: at least one of name, state, or pos is required",
            ));
        }

        let query = params.query()?;
        let path = f!(
            "/cards/{}/checkItem/{}",
            urlencoding::encode(card_id),
            urlencoding::encode(item_id)
        );
        self.fetch(
            Method::PUT,
            &path,
            &query,
            "update_checklist_item",
            Some(res("checklist item", item_id)),
        )
        .await
    }

    pub async fn delete_checklist_item(
        &self,
        checklist_id: &str,
        item_id: &str,
    ) -> Result<serde_json::Value, Error> {
        let path = f!(
            "/checklists/{}/checkItems/{}",
            urlencoding::encode(checklist_id),
            urlencoding::encode(item_id)
        );
        self.request(
            Method::DELETE,
            &path,
            &[],
            "delete_checklist_item",
            Some(res("checklist item", item_id)),
        )
        .await
    }
}
