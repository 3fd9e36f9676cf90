use axum::{extract::State, http::StatusCode, response::Json};
use serde::Deserialize;
use tracing::{error, info};

use crate::config::AppState;
use crate::models::responses::{BookSummary, ErrorResponse};
use crate::services::metadata::lookup_books;
use crate::utils::query::normalized_query;

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub query: Option<String>,
}

pub async fn search_books(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<Vec<BookSummary>>, (StatusCode, Json<ErrorResponse>)> {
    let Some(query) = normalized_query(request.query.as_deref()) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("Query is required")),
        ));
    };

    info!("Book search query: {}", query);

    match lookup_books(&state.http, &state.config.metadata_api_url, &query).await {
        Ok(books) => Ok(Json(books)),
        Err(e) => {
            error!("Failed to fetch book details for {:?}: {}", query, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to fetch book details")),
            ))
        }
    }
}
