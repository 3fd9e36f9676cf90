use axum::response::Json;

use crate::models::responses::HealthResponse;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "book-search-service".to_string(),
        status: "running".to_string(),
    })
}
