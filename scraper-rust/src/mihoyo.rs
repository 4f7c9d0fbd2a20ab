use crate::{QueryPrompt, ScrapeOutcome, Scraper, ScraperError, ScraperIcon};
use async_trait::async_trait;
use hoyowiki::{format_entry, TextFile, WikiQuery, WikiService};

const ICON_PATH: &str =
    "scripts/extensions/third-party/Bronie-Parser-Extension/parsers/mihoyo/mihoyo.svg";

/// Scrapes a page from the miHoYo/HoYoverse HoYoLAB wiki.
pub struct MihoyoScraper {
    service: WikiService,
}

impl MihoyoScraper {
    #[must_use]
    pub fn new(service: WikiService) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Scraper for MihoyoScraper {
    fn id(&self) -> &'static str {
        "mihoyo"
    }

    fn name(&self) -> &'static str {
        "miHoYo"
    }

    fn description(&self) -> &'static str {
        "Scrapes a page from the miHoYo/HoYoverse HoYoLAB wiki."
    }

    fn icon(&self) -> ScraperIcon {
        // No miHoYo glyph in the host icon font.
        ScraperIcon {
            class: ICON_PATH,
            available: false,
        }
    }

    async fn is_available(&self) -> bool {
        self.service.check_available().await
    }

    async fn scrape(&self, prompt: &dyn QueryPrompt) -> ScrapeOutcome {
        let Some(raw) = prompt.collect().await else {
            return ScrapeOutcome::Cancelled;
        };

        let query = match WikiQuery::parse(&raw.wiki, &raw.id) {
            Ok(query) => query,
            Err(error) => {
                tracing::debug!(wiki = %raw.wiki, id = %raw.id, %error, "rejected wiki query");
                return ScrapeOutcome::Rejected(error);
            }
        };

        tracing::info!("{}", query.wiki.scrape_notice(&query.id));

        match self.service.fetch_query(&query).await {
            Ok(entry) => {
                let file = TextFile::from_stem(&entry.name, format_entry(&entry));
                ScrapeOutcome::Files(vec![file])
            }
            Err(error) => {
                tracing::error!(wiki = %query.wiki, id = %query.id, %error, "failed to scrape wiki entry");
                ScrapeOutcome::Failed(ScraperError::Wiki(error))
            }
        }
    }
}
