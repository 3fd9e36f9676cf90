use reqwest::Client;
use tracing::info;

use crate::models::responses::BookSummary;
use crate::models::volumes::VolumesResponse;
use crate::services::ServiceError;

/// Records kept from a metadata response. The request asks the API for one
/// more so the cap is exercised deterministically.
pub const MAX_RESULTS: usize = 30;

pub async fn lookup_books(
    http: &Client,
    api_url: &str,
    query: &str,
) -> Result<Vec<BookSummary>, ServiceError> {
    let response = http
        .get(api_url)
        .query(&[("maxResults", "31"), ("q", query)])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ServiceError::UpstreamStatus(response.status()));
    }

    let volumes: VolumesResponse = response.json().await?;
    let books = map_volumes(volumes);

    info!("Metadata lookup for {:?} returned {} books", query, books.len());
    Ok(books)
}

pub fn map_volumes(volumes: VolumesResponse) -> Vec<BookSummary> {
    volumes
        .items
        .into_iter()
        .take(MAX_RESULTS)
        .map(|volume| BookSummary::from(volume.volume_info))
        .collect()
}
