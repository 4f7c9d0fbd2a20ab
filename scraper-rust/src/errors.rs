use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("{0}")]
    Wiki(#[from] hoyowiki::WikiError),
    #[error("Registration error: {0}")]
    Registration(String),
}
