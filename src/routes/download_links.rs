use axum::{extract::State, http::StatusCode, response::Json};
use tracing::{error, info};

use crate::config::AppState;
use crate::models::responses::{ErrorResponse, LinksResponse};
use crate::routes::books::QueryRequest;
use crate::services::scrape::find_links;
use crate::utils::query::normalized_query;

pub async fn find_download_links(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<LinksResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Some(query) = normalized_query(request.query.as_deref()) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Query is required")),
        ));
    };

    info!("Download link query: {}", query);

    match find_links(
        &state.http,
        &state.config.mirror_base_url,
        state.extractor.as_ref(),
        &query,
    )
    .await
    {
        Ok(links) => Ok(Json(LinksResponse { links })),
        Err(e) => {
            error!("Failed to fetch download links for {:?}: {}", query, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to fetch download links")),
            ))
        }
    }
}
