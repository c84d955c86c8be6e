use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::{debug, error, info};

use crate::error::ClockifyError;

pub const CLOCKIFY_API_URL: &str = "https://api.clockify.me/api/v1/";
const API_KEY_HEADER: &str = "x-api-key";

/// Status and raw body of an API call. Non-2xx answers are data, not errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The two calls the tool makes against the REST API. Paths are relative to
/// the API root, e.g. `workspaces/{id}/projects`.
#[async_trait]
pub trait RestClient: Send + Sync {
    async fn get(&self, path: &str) -> Result<ApiResponse, ClockifyError>;
    async fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<ApiResponse, ClockifyError>;
}

pub fn clockify_client_init(key: &str) -> Result<Client, ClockifyError> {
    info!("Initializing Clockify client");

    let api_key = match header::HeaderValue::from_str(key) {
        Ok(mut value) => {
            value.set_sensitive(true);
            value
        }
        Err(e) => {
            error!("Failed to create {} header value: {}", API_KEY_HEADER, e);
            return Err(e.into());
        }
    };

    let mut headers = header::HeaderMap::new();
    headers.insert(API_KEY_HEADER, api_key);
    headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("application/json"),
    );

    debug!("Building Clockify client with headers");
    Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| {
            error!("Failed to build Clockify client: {}", e);
            ClockifyError::ClientBuild(e)
        })
}

/// `RestClient` backed by reqwest, authenticated through default headers.
#[derive(Clone, Debug)]
pub struct HttpRestClient {
    client: Client,
    base_url: String,
}

impl HttpRestClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { client, base_url }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn finish(response: reqwest::Response) -> Result<ApiResponse, ClockifyError> {
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            error!("Failed to read response body: {}", e);
            ClockifyError::Request(e)
        })?;

        let api_response = ApiResponse { status, body };
        if api_response.is_success() {
            debug!(
                "Clockify API answered {} ({} bytes)",
                status,
                api_response.body.len()
            );
        } else {
            error!(
                "Clockify API returned error status {}: {}",
                status, api_response.body
            );
        }

        Ok(api_response)
    }
}

#[async_trait]
impl RestClient for HttpRestClient {
    async fn get(&self, path: &str) -> Result<ApiResponse, ClockifyError> {
        let url = self.url(path);
        info!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            error!("Failed to send request to Clockify API: {}", e);
            ClockifyError::Request(e)
        })?;

        Self::finish(response).await
    }

    async fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<ApiResponse, ClockifyError> {
        let url = self.url(path);
        info!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .body(body.to_string())
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to Clockify API: {}", e);
                ClockifyError::Request(e)
            })?;

        Self::finish(response).await
    }
}
