//! REST client for the artworks listing endpoint.

use crate::config::TuiConfig;
use artic_core::{ArtworkListResponse, ArtworkPage, ArtworkRecord, PageSource, PageWindow};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

pub const ARTWORKS_PATH: &str = "/api/v1/artworks";

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Config error: {0}")]
    Config(String),
}

/// Error body the API sends with non-2xx responses.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    detail: Option<String>,
}

#[derive(Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: String,
}

impl RestClient {
    pub fn new(config: &TuiConfig) -> Result<Self, ApiClientError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout_ms) = config.request_timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder
            .build()
            .map_err(|e| ApiClientError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim().trim_end_matches('/').to_string(),
        })
    }

    /// `GET /api/v1/artworks?page={page}&limit={limit}`, undecorated.
    pub async fn list_artworks(&self, page: u64, limit: u64) -> Result<ArtworkListResponse, ApiClientError> {
        tracing::debug!(page, limit, "Requesting artworks");
        self.get_json(ARTWORKS_PATH, &[("page", page), ("limit", limit)])
            .await
    }

    /// Load the page a paginator window points at, with duplicate titles
    /// removed.
    pub async fn load_page(&self, window: PageWindow) -> Result<ArtworkPage, ApiClientError> {
        let response = self.list_artworks(window.page(), window.rows()).await?;
        let page = ArtworkPage::from(response);
        tracing::debug!(
            page = window.page(),
            records = page.records.len(),
            total = page.total_records,
            "Artworks page loaded"
        );
        Ok(page)
    }

    async fn get_json<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiClientError>
    where
        T: serde::de::DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(url).query(query).send().await?;
        self.parse_response(response).await
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiClientError> {
        let status = response.status();
        let text = response.text().await?;
        if status.is_success() {
            return Ok(serde_json::from_str::<T>(&text)?);
        }
        let message = match serde_json::from_str::<ApiErrorBody>(&text) {
            Ok(ApiErrorBody {
                error: Some(error),
                detail: Some(detail),
            }) => format!("{}: {}", error, detail),
            Ok(ApiErrorBody {
                error: Some(message),
                detail: None,
            })
            | Ok(ApiErrorBody {
                error: None,
                detail: Some(message),
            }) => message,
            _ => text,
        };
        Err(ApiClientError::Status {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait]
impl PageSource for RestClient {
    type Error = ApiClientError;

    async fn fetch_page(&self, page: u64, limit: u64) -> Result<Vec<ArtworkRecord>, ApiClientError> {
        Ok(self.list_artworks(page, limit).await?.data)
    }
}
