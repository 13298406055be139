use axum::body::Bytes;
use axum::http::HeaderValue;
use contracts::domain::a001_listing::Listing;
use contracts::shared::api_error::user_message;

use crate::shared::error::ProxyError;
use crate::shared::upstream::{UpstreamClient, UpstreamReply};

const FETCH_FALLBACK: &str = "Failed to fetch listings";

/// Read every listing from the listings service.
pub async fn fetch_all(upstream: &UpstreamClient, path: &str) -> Result<Vec<Listing>, ProxyError> {
    let response = upstream.get(path).await?;
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        return Err(ProxyError::Upstream {
            status,
            detail: user_message(&text, FETCH_FALLBACK),
        });
    }

    serde_json::from_str::<Vec<Listing>>(&text)
        .map_err(|e| ProxyError::InvalidPayload(e.to_string()))
}

/// Send a create request as received and return whatever the service answers.
pub async fn forward(
    upstream: &UpstreamClient,
    path: &str,
    content_type: HeaderValue,
    body: Bytes,
) -> Result<UpstreamReply, ProxyError> {
    upstream.post(path, content_type, body).await
}
