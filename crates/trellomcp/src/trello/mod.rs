//! Authenticated HTTP access to the Trello REST API.
//!
//! `TrelloClient` is the only place that talks to the network. Requests are
//! single-shot: no retries, no batching, no caching. Parameter building and
//! response normalization live in `trellomcp_core`; this module only wires
//! them to `reqwest`.

use std::time::Duration;

use reqwest::Method;
use serde::de::DeserializeOwned;
use trellomcp_core::http;

use crate::prelude::*;

pub mod boards;
pub mod cards;
pub mod checklists;
pub mod labels;
pub mod lists;
pub mod snapshots;

pub const TRELLO_API_BASE: &str = "https://api.trello.com/1";

/// Process-wide credentials, read once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct TrelloConfig {
    pub api_key: String,
    pub api_token: String,
    pub base_url: String,
}

impl TrelloConfig {
    /// Load configuration from environment variables.
    ///
    /// Missing or blank credentials fail here, before any request is built,
    /// so a bad setup never masquerades as a remote auth failure.
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self {
            api_key: require_env("TRELLO_API_KEY")?,
            api_token: require_env("TRELLO_API_TOKEN")?,
            base_url: std::env::var("TRELLO_BASE_URL")
                .unwrap_or_else(|_| TRELLO_API_BASE.to_string()),
        })
    }
}

fn require_env(name: &str) -> Result<String, Error> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::Configuration(f!(
            "{name} environment variable not set. Generate a key and token at \
             https://trello.com/power-ups/admin and export both."
        ))),
    }
}

pub struct TrelloClient {
    http: reqwest::Client,
    config: TrelloConfig,
}

impl TrelloClient {
    pub fn new(config: TrelloConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| Error::Configuration(f!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    pub fn from_env() -> Result<Self, Error> {
        Self::new(TrelloConfig::from_env()?)
    }

    /// Issue one authenticated request and normalize the outcome.
    ///
    /// `operation` names the calling operation for error context; `resource`
    /// names the addressed entity and is what a 404 reports.
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        operation: &str,
        resource: Option<String>,
    ) -> Result<serde_json::Value, Error> {
        let url = f!("{}{path}", self.config.base_url);

        let response = self
            .http
            .request(method, &url)
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("token", self.config.api_token.as_str()),
            ])
            .query(query)
            .send()
            .await
            .map_err(|e| Error::transport(operation, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(http::status_error(
                status.as_u16(),
                operation,
                resource.as_deref(),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::transport(operation, e))?;

        http::parse_body(operation, &body)
    }

    /// `request` plus decoding into a typed entity.
    async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        operation: &str,
        resource: Option<String>,
    ) -> Result<T, Error> {
        let value = self
            .request(method, path, query, operation, resource)
            .await?;
        http::decode(operation, value)
    }
}

/// Resource label used in 404 messages, e.g. "card abc123".
fn res(kind: &str, id: &str) -> String {
    f!("{kind} {id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    // Each test owns a distinct variable name so they can run in parallel.

    #[test]
    fn test_require_env_missing_is_configuration_error() {
        std::env::remove_var("TRELLOMCP_TEST_MISSING");
        let err = require_env("TRELLOMCP_TEST_MISSING").unwrap_err();
        assert_eq!(err.kind(), "configuration");
        assert!(err.to_string().contains("TRELLOMCP_TEST_MISSING"));
    }

    #[test]
    fn test_require_env_blank_is_configuration_error() {
        std::env::set_var("TRELLOMCP_TEST_BLANK", "   ");
        let err = require_env("TRELLOMCP_TEST_BLANK").unwrap_err();
        assert_eq!(err.kind(), "configuration");
    }

    #[test]
    fn test_require_env_present() {
        std::env::set_var("TRELLOMCP_TEST_SET", "abc123");
        assert_eq!(require_env("TRELLOMCP_TEST_SET").unwrap(), "abc123");
    }

    #[test]
    fn test_res_names_entity() {
        assert_eq!(res("card", "c1"), "card c1");
    }
}
