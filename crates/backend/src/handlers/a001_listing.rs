use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use contracts::domain::a001_listing::Listing;

use crate::domain::a001_listing;
use crate::shared::error::ProxyError;
use crate::shared::state::AppState;
use crate::shared::upstream::UpstreamReply;

/// GET /api/listings/
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Listing>>, ProxyError> {
    a001_listing::service::list_all(&state.upstream)
        .await
        .map(Json)
}

/// POST /api/listings/
pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<UpstreamReply, ProxyError> {
    a001_listing::service::create(&state.upstream, &headers, body).await
}

/// POST /api/listings/upload-csv/
pub async fn upload_csv(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<UpstreamReply, ProxyError> {
    a001_listing::service::upload_csv(&state.upstream, &headers, body).await
}
