//! Host-facing scraper adapter over the [`hoyowiki`] pipeline.
//!
//! The host supplies a [`QueryPrompt`] to collect the wiki and entry id and
//! renders the returned [`ScrapeOutcome`] however it likes.

mod errors;
mod mihoyo;
mod outcome;
mod prompt;
mod registry;
mod scraper;

pub use errors::ScraperError;
pub use mihoyo::MihoyoScraper;
pub use outcome::ScrapeOutcome;
pub use prompt::{QueryPrompt, RawQuery, StaticPrompt};
pub use registry::{default_scrapers, register_all, ScraperRegistry};
pub use scraper::{Scraper, ScraperIcon};
