use reqwest::Client;
use tracing::info;

use crate::services::extract::DetailLinkExtractor;
use crate::services::ServiceError;

/// Fixed query parameters of the mirror's search endpoint: 10 results,
/// all file types, covers on, the files result tab.
const SEARCH_PARAMS: [(&str, &str); 4] = [
    ("res", "10"),
    ("filesuns", "all"),
    ("covers", "on"),
    ("curtab", "f"),
];

pub async fn find_links(
    http: &Client,
    base_url: &str,
    extractor: &dyn DetailLinkExtractor,
    query: &str,
) -> Result<Vec<String>, ServiceError> {
    let html = fetch_search_page(http, base_url, query).await?;
    let links = extractor.extract(&html, base_url)?;

    info!("Scrape for {:?} yielded {} links", query, links.len());
    Ok(links)
}

async fn fetch_search_page(
    http: &Client,
    base_url: &str,
    query: &str,
) -> Result<String, ServiceError> {
    let url = format!("{}/index.php", base_url.trim_end_matches('/'));
    let response = http
        .get(&url)
        .query(&[("req", query)])
        .query(&SEARCH_PARAMS)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ServiceError::UpstreamStatus(response.status()));
    }

    Ok(response.text().await?)
}
