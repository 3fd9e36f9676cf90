use serde::Deserialize;

use crate::models::responses::{BookSummary, PageCount};

/// Response shape of the external volumes API. A missing `items` array
/// means zero results, not a malformed payload.
#[derive(Debug, Deserialize)]
pub struct VolumesResponse {
    #[serde(default)]
    pub items: Vec<Volume>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Volume {
    #[serde(rename = "volumeInfo", default)]
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    pub title: Option<String>,
    pub authors: Option<Vec<String>>,
    pub published_date: Option<String>,
    pub description: Option<String>,
    pub page_count: Option<u64>,
    pub image_links: Option<ImageLinks>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ImageLinks {
    pub thumbnail: Option<String>,
}

impl From<VolumeInfo> for BookSummary {
    fn from(info: VolumeInfo) -> Self {
        BookSummary {
            title: info.title.unwrap_or_else(|| "Unknown".to_string()),
            authors: info
                .authors
                .filter(|authors| !authors.is_empty())
                .map(|authors| authors.join(", "))
                .unwrap_or_else(|| "Unknown".to_string()),
            published_date: info.published_date.unwrap_or_else(|| "Unknown".to_string()),
            description: info
                .description
                .unwrap_or_else(|| "No description available.".to_string()),
            page_count: info
                .page_count
                .map(PageCount::Pages)
                .unwrap_or_else(PageCount::unavailable),
            thumbnail: info.image_links.and_then(|links| links.thumbnail),
        }
    }
}
