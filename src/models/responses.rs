use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
}

/// Page count is a bare number when the source record carries one and the
/// literal string "N/A" when it does not, matching the original wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageCount {
    Pages(u64),
    Unavailable(String),
}

impl PageCount {
    pub fn unavailable() -> Self {
        PageCount::Unavailable("N/A".to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSummary {
    pub title: String,
    pub authors: String,
    pub published_date: String,
    pub description: String,
    pub page_count: PageCount,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LinksResponse {
    pub links: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}
