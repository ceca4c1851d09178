//! Core library for trellomcp
//!
//! This crate implements the **Functional Core** of the trellomcp
//! application, following the Functional Core - Imperative Shell
//! architectural pattern.
//!
//! - **`trellomcp_core`** (this crate): Pure transformation functions with
//!   zero I/O: Trello entity models, the error taxonomy, HTTP status
//!   normalization, request-parameter builders, and resource-URI parsing.
//! - **`trellomcp`**: I/O operations and orchestration (the Imperative
//!   Shell): the authenticated HTTP client, the CLI, and the MCP server.
//!
//! All functions here are deterministic and side-effect free, so they are
//! tested with simple fixture data and no mocking. The shell crate stays
//! thin: build params here, send them there, normalize the response here.

pub mod error;
pub mod http;
pub mod ids;
pub mod params;
pub mod resource;
pub mod types;

pub use error::Error;
