use crate::{
    format::format_entry, routes::route_for, Artifact, ArtifactKind, HttpWikiBackend,
    HttpWikiBackendOptions, TextFile, WikiBackend, WikiEntry, WikiError, WikiQuery, WikiResult,
};
use std::sync::Arc;

/// Entry point of the pipeline: validate a query, fetch the entry from the
/// backend, flatten it to text and package the result.
#[derive(Clone)]
pub struct WikiService {
    backend: Arc<dyn WikiBackend>,
}

impl WikiService {
    pub fn new(backend: Arc<dyn WikiBackend>) -> Self {
        Self { backend }
    }

    /// A service backed by the HTTP plugin.
    #[must_use]
    pub fn http(options: HttpWikiBackendOptions) -> Self {
        Self::new(Arc::new(HttpWikiBackend::new(options)))
    }

    #[must_use]
    pub fn backend(&self) -> &dyn WikiBackend {
        self.backend.as_ref()
    }

    pub async fn check_available(&self) -> bool {
        self.backend.probe().await
    }

    /// Like [`check_available`](Self::check_available), but as an error the
    /// caller can propagate.
    pub async fn require_available(&self) -> WikiResult<()> {
        if self.check_available().await {
            Ok(())
        } else {
            Err(WikiError::BackendUnavailable)
        }
    }

    /// Validate `(wiki, id)` and fetch the matching entry. Validation errors
    /// are returned before any request is sent.
    pub async fn fetch(&self, wiki: &str, id: &str) -> WikiResult<WikiEntry> {
        let query = WikiQuery::parse(wiki, id)?;
        self.fetch_query(&query).await
    }

    pub async fn fetch_query(&self, query: &WikiQuery) -> WikiResult<WikiEntry> {
        let route = route_for(query.wiki);
        tracing::info!(
            backend = self.backend.name(),
            wiki = query.wiki.as_str(),
            id = %query.id,
            route,
            "fetching wiki entry"
        );
        self.backend.fetch_entry(route, query).await
    }

    pub async fn fetch_artifact(
        &self,
        wiki: &str,
        id: &str,
        kind: ArtifactKind,
    ) -> WikiResult<Artifact> {
        let entry = self.fetch(wiki, id).await?;
        Ok(package(&entry, kind))
    }

    pub async fn fetch_and_format(&self, wiki: &str, id: &str) -> WikiResult<String> {
        self.fetch_artifact(wiki, id, ArtifactKind::Text)
            .await
            .map(Artifact::into_text)
    }

    pub async fn fetch_and_package(&self, wiki: &str, id: &str) -> WikiResult<TextFile> {
        let entry = self.fetch(wiki, id).await?;
        Ok(TextFile::from_stem(&entry.name, format_entry(&entry)))
    }
}

/// Format an already fetched entry and package it.
#[must_use]
pub fn package(entry: &WikiEntry, kind: ArtifactKind) -> Artifact {
    Artifact::build(kind, &entry.name, format_entry(entry))
}
