use axum::body::{to_bytes, Body};
use axum::http::{HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::shared::format::format_size;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Middleware for HTTP request logging
///
/// Logs per request:
/// - request id (also returned in `x-request-id`)
/// - duration (ms)
/// - response size
/// - status code
/// - method and path
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let request_id = Uuid::new_v4();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (mut parts, body) = response.into_parts();

    if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
        parts.headers.insert(REQUEST_ID_HEADER, value);
    }

    // Buffer the body to learn its real size
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                "{} {} -> {} | {}ms | body error: {}",
                method,
                path,
                parts.status.as_u16(),
                start.elapsed().as_millis(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let status = parts.status;
    let elapsed = start.elapsed().as_millis();
    let size = format_size(bytes.len());

    if status.is_server_error() {
        tracing::error!(request_id = %request_id, "{} {} -> {} | {}ms | {}", method, path, status.as_u16(), elapsed, size);
    } else if status.is_client_error() {
        tracing::warn!(request_id = %request_id, "{} {} -> {} | {}ms | {}", method, path, status.as_u16(), elapsed, size);
    } else {
        tracing::info!(request_id = %request_id, "{} {} -> {} | {}ms | {}", method, path, status.as_u16(), elapsed, size);
    }

    Response::from_parts(parts, Body::from(bytes))
}
