//! Fetch one entry from a HoYoLAB wiki through the `hoyoverse` backend plugin
//! and flatten it into plain text.
//!
//! ```rust,ignore
//! use hoyowiki::{HttpWikiBackendOptions, WikiService};
//!
//! let service = WikiService::http(HttpWikiBackendOptions::default());
//! if service.check_available().await {
//!     let file = service.fetch_and_package("hsr", "1234").await?;
//!     println!("{}: {}", file.name, file.content);
//! }
//! ```

mod artifact;
mod backend;
mod client_utils;
mod errors;
mod format;
mod http;
pub mod hoyowiki_test;
mod opentelemetry;
mod query;
pub mod routes;
mod service;
mod types;

pub use artifact::{Artifact, ArtifactKind, TextFile, TEXT_MIME_TYPE};
pub use backend::WikiBackend;
pub use errors::*;
pub use format::format_entry;
pub use http::{HttpWikiBackend, HttpWikiBackendOptions, DEFAULT_BASE_URL};
pub use query::{GENSHIN_NOT_IMPLEMENTED, MISSING_ID, MISSING_WIKI, UNKNOWN_WIKI};
pub use service::{package, WikiService};
pub use types::*;

pub use reqwest::StatusCode;
