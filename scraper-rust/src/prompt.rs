use async_trait::async_trait;

/// The wiki and entry id exactly as the user typed or picked them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawQuery {
    pub wiki: String,
    pub id: String,
}

impl RawQuery {
    pub fn new(wiki: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            wiki: wiki.into(),
            id: id.into(),
        }
    }
}

/// Collects a query from the user, e.g. through a host dialog with a wiki
/// dropdown and an id field.
#[async_trait]
pub trait QueryPrompt: Send + Sync {
    /// `None` when the user dismissed the dialog.
    async fn collect(&self) -> Option<RawQuery>;
}

/// A prompt that always answers with the same query. Suits hosts without a UI.
#[derive(Debug, Clone, Default)]
pub struct StaticPrompt(Option<RawQuery>);

impl StaticPrompt {
    pub fn new(wiki: impl Into<String>, id: impl Into<String>) -> Self {
        Self(Some(RawQuery::new(wiki, id)))
    }

    /// A prompt the user always dismisses.
    #[must_use]
    pub fn dismissed() -> Self {
        Self(None)
    }
}

#[async_trait]
impl QueryPrompt for StaticPrompt {
    async fn collect(&self) -> Option<RawQuery> {
        self.0.clone()
    }
}
