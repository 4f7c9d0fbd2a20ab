use crate::ScraperError;
use hoyowiki::{TextFile, WikiError};

/// What a scrape produced. Hosts turn it into attachments and notices.
#[derive(Debug)]
pub enum ScrapeOutcome {
    /// The user dismissed the prompt. Nothing to show.
    Cancelled,
    Files(Vec<TextFile>),
    /// The query was rejected before anything was fetched.
    Rejected(WikiError),
    /// The backend could not deliver the entry.
    Failed(ScraperError),
}

impl ScrapeOutcome {
    /// Text for the host to show the user, if any.
    #[must_use]
    pub fn notice(&self) -> Option<String> {
        match self {
            Self::Cancelled | Self::Files(_) => None,
            Self::Rejected(
                WikiError::InvalidQuery(message)
                | WikiError::UnsupportedWiki(message)
                | WikiError::NotYetImplemented(message),
            ) => Some(message.clone()),
            Self::Rejected(error) => Some(error.to_string()),
            Self::Failed(error) => Some(error.to_string()),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Rejected(_) | Self::Failed(_))
    }

    #[must_use]
    pub fn files(&self) -> &[TextFile] {
        match self {
            Self::Files(files) => files,
            _ => &[],
        }
    }

    #[must_use]
    pub fn into_files(self) -> Vec<TextFile> {
        match self {
            Self::Files(files) => files,
            _ => Vec::new(),
        }
    }
}
