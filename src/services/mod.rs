use thiserror::Error;

pub mod extract;
pub mod metadata;
pub mod scrape;

/// Single failure type for both outbound pipelines. Callers collapse every
/// variant into one generic fetch failure; the variants exist for logging.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Upstream request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Upstream returned status {0}")]
    UpstreamStatus(reqwest::StatusCode),
    #[error("Invalid selector: {0}")]
    Selector(String),
}
