use book_search_service::app;
use book_search_service::config::{AppConfig, AppState};
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "book_search_service=info,tower_http=info".to_string()),
        )
        .init();

    let config = AppConfig::from_env();
    let port = config.port.clone();
    let state = AppState::new(config);

    let addr = format!("0.0.0.0:{}", port);
    info!("Book search service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app(state)).await.unwrap();
}
