use crate::{QueryPrompt, ScrapeOutcome};
use async_trait::async_trait;
use std::fmt::Debug;

/// Icon shown next to a scraper in the host's list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScraperIcon {
    /// CSS class or asset path of the icon.
    pub class: &'static str,
    /// Whether the host's icon font ships this icon. When false the host is
    /// expected to load `class` as an asset.
    pub available: bool,
}

/**
 * A source the host can pull data bank attachments from. Any type that
 * implements the `Scraper` trait can be added to a
 * [`ScraperRegistry`](crate::ScraperRegistry).
 */
#[async_trait]
pub trait Scraper: Send + Sync {
    /// Unique identifier of the scraper.
    fn id(&self) -> &'static str;
    /// Display name.
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn icon(&self) -> ScraperIcon;
    /// Whether the scraper can run in the current host. Never fails.
    async fn is_available(&self) -> bool;
    /// Ask the user for input through `prompt` and scrape accordingly.
    async fn scrape(&self, prompt: &dyn QueryPrompt) -> ScrapeOutcome;
}

impl Debug for dyn Scraper + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scraper")
            .field("id", &self.id())
            .field("name", &self.name())
            .field("description", &self.description())
            .field("icon", &self.icon())
            .finish()
    }
}
