use thiserror::Error;

#[derive(Error, Debug)]
pub enum WikiError {
    /// The wiki or the entry id was not provided.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
    /// The wiki identifier is not one the pipeline recognizes.
    #[error("Unsupported wiki: {0}")]
    UnsupportedWiki(String),
    /// The wiki is recognized but the backend has no parser for it.
    #[error("Not yet implemented: {0}")]
    NotYetImplemented(String),
    /// The backend plugin did not answer the probe.
    #[error("The HoYoLAB wiki backend is not available")]
    BackendUnavailable,
    /// The request returns a non-OK status code. The message is the response
    /// body exactly as the backend sent it.
    #[error("{message}")]
    RequestFailed {
        status: reqwest::StatusCode,
        message: String,
    },
    /// The backend answered with a success status but the body was not a
    /// single wiki entry.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
    /// The request to the backend could not be sent or its body could not be
    /// read.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend options (e.g. a request header) are invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl WikiError {
    /// Whether the error was raised while validating the query, before any
    /// request was made.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidQuery(_) | Self::UnsupportedWiki(_) | Self::NotYetImplemented(_)
        )
    }
}

pub type WikiResult<T> = Result<T, WikiError>;
