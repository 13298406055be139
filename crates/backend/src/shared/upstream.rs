use std::time::Duration;

use axum::body::Bytes;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use super::config::UpstreamConfig;
use super::error::ProxyError;

/// HTTP client for the listings service
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `path` must start with `/`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` with `Accept: application/json`. The caller checks the status.
    pub async fn get(&self, path: &str) -> Result<reqwest::Response, ProxyError> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        tracing::debug!("GET {} -> {}", url, response.status());
        Ok(response)
    }

    /// POST a raw body with its original content type and capture the reply.
    pub async fn post(
        &self,
        path: &str,
        content_type: HeaderValue,
        body: Bytes,
    ) -> Result<UpstreamReply, ProxyError> {
        let url = self.url(path);
        tracing::debug!("POST {} ({} bytes)", url, body.len());

        let response = self
            .client
            .post(&url)
            .header(header::CONTENT_TYPE, content_type)
            .header(header::ACCEPT, "application/json")
            .body(body)
            .send()
            .await?;

        UpstreamReply::read(response).await
    }
}

/// Buffered upstream response, relayed to the browser unchanged.
#[derive(Debug, Clone)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

impl UpstreamReply {
    pub async fn read(response: reqwest::Response) -> Result<Self, ProxyError> {
        let status = response.status();
        let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
        let body = response.bytes().await?;

        if !status.is_success() {
            tracing::warn!(
                "Listings service answered {}: {}",
                status,
                String::from_utf8_lossy(&body)
            );
        }

        Ok(Self {
            status,
            content_type,
            body,
        })
    }
}

impl IntoResponse for UpstreamReply {
    fn into_response(self) -> Response {
        let mut response = (self.status, self.body).into_response();
        if let Some(content_type) = self.content_type {
            response.headers_mut().insert(header::CONTENT_TYPE, content_type);
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_dropped_from_base_url() {
        let config = UpstreamConfig {
            base_url: "http://listings:8000/".to_string(),
            timeout_secs: 5,
        };
        let client = UpstreamClient::new(&config).unwrap();

        assert_eq!(client.base_url(), "http://listings:8000");
        assert_eq!(client.url("/api/listings/"), "http://listings:8000/api/listings/");
    }
}
