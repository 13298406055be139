use axum::body::Bytes;
use axum::http::{header, HeaderMap, HeaderValue};
use contracts::domain::a001_listing::{Listing, LISTINGS_PATH, UPLOAD_CSV_PATH};

use super::repository;
use crate::shared::error::ProxyError;
use crate::shared::upstream::{UpstreamClient, UpstreamReply};

/// Body encodings the listings service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Json,
    Multipart,
}

impl BodyKind {
    fn of(content_type: &str) -> Option<Self> {
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();
        match mime.as_str() {
            "application/json" => Some(BodyKind::Json),
            "multipart/form-data" => Some(BodyKind::Multipart),
            _ => None,
        }
    }
}

/// Content type header of the request, if it is one of `accepted`.
///
/// The whole header value is returned because the multipart boundary must
/// reach the listings service unchanged.
pub fn accepted_content_type(
    headers: &HeaderMap,
    accepted: &[BodyKind],
) -> Result<HeaderValue, ProxyError> {
    let value = headers
        .get(header::CONTENT_TYPE)
        .ok_or_else(|| ProxyError::UnsupportedMediaType("missing".into()))?;
    let text = value
        .to_str()
        .map_err(|_| ProxyError::UnsupportedMediaType("unreadable header".into()))?;

    match BodyKind::of(text) {
        Some(kind) if accepted.contains(&kind) => Ok(value.clone()),
        _ => Err(ProxyError::UnsupportedMediaType(text.to_string())),
    }
}

pub async fn list_all(upstream: &UpstreamClient) -> Result<Vec<Listing>, ProxyError> {
    let listings = repository::fetch_all(upstream, LISTINGS_PATH).await?;
    tracing::debug!("Fetched {} listings", listings.len());
    Ok(listings)
}

/// Create one listing from a JSON or multipart body.
pub async fn create(
    upstream: &UpstreamClient,
    headers: &HeaderMap,
    body: Bytes,
) -> Result<UpstreamReply, ProxyError> {
    let content_type = accepted_content_type(headers, &[BodyKind::Json, BodyKind::Multipart])?;
    let reply = repository::forward(upstream, LISTINGS_PATH, content_type, body).await?;
    if reply.status.is_success() {
        tracing::info!("Listing created ({})", reply.status);
    }
    Ok(reply)
}

/// Bulk creation from a CSV file in multipart field `file`.
pub async fn upload_csv(
    upstream: &UpstreamClient,
    headers: &HeaderMap,
    body: Bytes,
) -> Result<UpstreamReply, ProxyError> {
    let content_type = accepted_content_type(headers, &[BodyKind::Multipart])?;
    let reply = repository::forward(upstream, UPLOAD_CSV_PATH, content_type, body).await?;
    if reply.status.is_success() {
        tracing::info!("CSV upload accepted ({})", reply.status);
    }
    Ok(reply)
}
