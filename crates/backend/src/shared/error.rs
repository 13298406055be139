use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Error body returned by the proxy. `detail` matches the field the
/// listings service itself uses, so the frontend reads both the same way.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub detail: String,
    pub code: &'static str,
}

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Listings service is unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    #[error("Listings service did not answer in time")]
    Timeout,

    /// Non-2xx answer on a read. Writes relay the upstream response as is.
    #[error("{detail}")]
    Upstream { status: StatusCode, detail: String },

    #[error("Unexpected response from listings service: {0}")]
    InvalidPayload(String),

    #[error("Unsupported content type: {0}")]
    UnsupportedMediaType(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::Unreachable(_) | ProxyError::InvalidPayload(_) => StatusCode::BAD_GATEWAY,
            ProxyError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            ProxyError::Upstream { status, .. } => *status,
            ProxyError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ProxyError::Unreachable(_) => "UPSTREAM_UNREACHABLE",
            ProxyError::Timeout => "UPSTREAM_TIMEOUT",
            ProxyError::Upstream { .. } => "UPSTREAM_ERROR",
            ProxyError::InvalidPayload(_) => "UPSTREAM_INVALID_PAYLOAD",
            ProxyError::UnsupportedMediaType(_) => "UNSUPPORTED_MEDIA_TYPE",
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProxyError::Timeout
        } else if err.is_decode() {
            ProxyError::InvalidPayload(err.to_string())
        } else {
            ProxyError::Unreachable(err)
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{} ({})", self, self.code());
        } else {
            tracing::warn!("{} ({})", self, self.code());
        }

        let body = ErrorBody {
            detail: self.to_string(),
            code: self.code(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_unsupported_media_type_body() {
        let response = ProxyError::UnsupportedMediaType("text/plain".into()).into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["detail"], "Unsupported content type: text/plain");
        assert_eq!(json["code"], "UNSUPPORTED_MEDIA_TYPE");
    }

    #[test]
    fn test_upstream_status_is_relayed() {
        let err = ProxyError::Upstream {
            status: StatusCode::NOT_FOUND,
            detail: "Not found.".into(),
        };
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Not found.");
    }

    #[test]
    fn test_gateway_statuses() {
        assert_eq!(ProxyError::Timeout.status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(
            ProxyError::InvalidPayload("eof".into()).status(),
            StatusCode::BAD_GATEWAY
        );
    }
}
