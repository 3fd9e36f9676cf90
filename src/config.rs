use std::sync::Arc;

use crate::services::extract::{DetailLinkExtractor, StripedTableExtractor};

/// User agent the original scrape sessions present to the mirror site.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.1; Trident/7.0; rv:11.0) like Gecko";

const DEFAULT_METADATA_API_URL: &str = "https://www.googleapis.com/books/v1/volumes";
const DEFAULT_MIRROR_BASE_URL: &str = "https://libgen.gs";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: String,
    pub metadata_api_url: String,
    pub mirror_base_url: String,
    pub public_dir: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT").unwrap_or_else(|_| "3000".to_string()),
            metadata_api_url: std::env::var("METADATA_API_URL")
                .unwrap_or_else(|_| DEFAULT_METADATA_API_URL.to_string()),
            mirror_base_url: std::env::var("MIRROR_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_MIRROR_BASE_URL.to_string()),
            public_dir: std::env::var("PUBLIC_DIR").unwrap_or_else(|_| "public".to_string()),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub http: reqwest::Client,
    pub extractor: Arc<dyn DetailLinkExtractor>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            config: Arc::new(config),
            http,
            extractor: Arc::new(StripedTableExtractor),
        }
    }
}
