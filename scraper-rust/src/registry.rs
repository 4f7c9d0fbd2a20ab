use crate::{MihoyoScraper, Scraper, ScraperError};
use hoyowiki::WikiService;

/// Holds the scrapers offered to the host, keyed by id.
#[derive(Default)]
pub struct ScraperRegistry {
    scrapers: Vec<Box<dyn Scraper>>,
}

impl ScraperRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scraper. Ids must be unique.
    pub fn register(&mut self, scraper: Box<dyn Scraper>) -> Result<(), ScraperError> {
        if self.get(scraper.id()).is_some() {
            return Err(ScraperError::Registration(format!(
                "A scraper with id '{}' is already registered",
                scraper.id()
            )));
        }
        self.scrapers.push(scraper);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&dyn Scraper> {
        self.scrapers
            .iter()
            .find(|scraper| scraper.id() == id)
            .map(|scraper| scraper.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Scraper> {
        self.scrapers.iter().map(|scraper| scraper.as_ref())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scrapers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scrapers.is_empty()
    }
}

/// The scrapers this crate ships.
#[must_use]
pub fn default_scrapers(service: &WikiService) -> Vec<Box<dyn Scraper>> {
    vec![Box::new(MihoyoScraper::new(service.clone()))]
}

/// Register every scraper, logging each attempt. A failed registration is
/// logged and skipped. Returns the number of scrapers registered.
pub fn register_all(
    registry: &mut ScraperRegistry,
    scrapers: impl IntoIterator<Item = Box<dyn Scraper>>,
) -> usize {
    let mut registered = 0;
    for scraper in scrapers {
        let name = scraper.name();
        tracing::info!("Registering {name} scraper");
        match registry.register(scraper) {
            Ok(()) => {
                tracing::info!("Registered {name} scraper");
                registered += 1;
            }
            Err(error) => {
                tracing::error!(%error, "Failed to register {name} scraper");
            }
        }
    }
    registered
}
