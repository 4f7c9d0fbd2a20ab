use crate::{WikiEntry, WikiQuery, WikiResult};

/// A service able to answer wiki queries. [`HttpWikiBackend`](crate::HttpWikiBackend)
/// talks to the HoYoLAB backend plugin; tests use
/// [`MockWikiBackend`](crate::hoyowiki_test::MockWikiBackend).
#[async_trait::async_trait]
pub trait WikiBackend: Send + Sync {
    /// Short name of the backend, used in logs and spans.
    fn name(&self) -> &'static str;
    /// Whether the backend is installed and answering. Never fails: any
    /// uncertainty reads as unavailable.
    async fn probe(&self) -> bool;
    /// Fetch the single entry matching `query` from `route`.
    async fn fetch_entry(&self, route: &'static str, query: &WikiQuery) -> WikiResult<WikiEntry>;
}
