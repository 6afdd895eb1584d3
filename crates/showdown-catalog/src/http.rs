//! HTTP client wrapper for catalog sources

use std::time::Duration;

use reqwest::{Client, Url};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {message}")]
    RequestFailed { message: String },
    #[error("Invalid URL: {url}")]
    InvalidUrl { url: String },
    #[error("Not found")]
    NotFound,
    #[error("Rate limited")]
    RateLimited,
    #[error("Unexpected status {status}")]
    Status { status: u16 },
    #[error("Could not read response body: {message}")]
    Body { message: String },
}

/// Thin wrapper over reqwest: builds the URL, tags the request with a
/// user agent, and folds status codes into [`HttpError`].
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    pub fn new(user_agent: &str) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| HttpError::RequestFailed {
                message: e.to_string(),
            })?;
        Ok(Self {
            client,
            user_agent: user_agent.to_string(),
        })
    }

    /// GET `url` with the given query parameters, returning the body on 200.
    pub async fn get_with_params(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<String, HttpError> {
        let url = Url::parse_with_params(url, params).map_err(|_| HttpError::InvalidUrl {
            url: url.to_string(),
        })?;
        debug!(host = url.host_str(), path = url.path(), "catalog request");

        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| HttpError::RequestFailed {
                message: e.to_string(),
            })?;

        match response.status().as_u16() {
            200 => response.text().await.map_err(|e| HttpError::Body {
                message: e.to_string(),
            }),
            404 => Err(HttpError::NotFound),
            429 => Err(HttpError::RateLimited),
            status => Err(HttpError::Status { status }),
        }
    }
}
