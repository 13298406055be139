use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    middleware,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

use crate::handlers;
use crate::shared::config::get_static_dir;
use crate::shared::state::AppState;
use crate::system::middleware::request_logger;

/// Application routes
pub fn configure_routes(state: AppState) -> Router {
    let static_dir = get_static_dir(&state.config);
    let index = static_dir.join("index.html");
    let body_limit = state.config.server.max_upload_bytes();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // LISTINGS (pass-through to the listings service)
        // ========================================
        .route(
            "/api/listings/",
            get(handlers::a001_listing::list_all).post(handlers::a001_listing::create),
        )
        .route(
            "/api/listings",
            get(handlers::a001_listing::list_all).post(handlers::a001_listing::create),
        )
        .route(
            "/api/listings/upload-csv/",
            axum::routing::post(handlers::a001_listing::upload_csv),
        )
        .route(
            "/api/listings/upload-csv",
            axum::routing::post(handlers::a001_listing::upload_csv),
        )
        // Frontend bundle; unknown paths get index.html for client-side routing
        .fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::Config;
    use axum::body::Bytes;
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::Json;
    use serde_json::{json, Value};
    use tokio::net::TcpListener;

    /// Serve `app` on an ephemeral local port and return its base URL.
    async fn spawn(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    async fn echo(headers: HeaderMap, body: Bytes) -> (StatusCode, Json<Value>) {
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        (
            StatusCode::CREATED,
            Json(json!({
                "content_type": content_type,
                "body": String::from_utf8_lossy(&body),
            })),
        )
    }

    fn mock_upstream() -> Router {
        Router::new()
            .route(
                "/api/listings/",
                get(|| async {
                    Json(json!([
                        {
                            "listing_id": 1,
                            "product_type": "edible",
                            "quantity": "12.50",
                            "unit": "kg",
                            "category": "Bakery",
                            "original_price": "4.00",
                            "discounted_price": null,
                            "expiry_date": "2025-03-15T10:00:00Z",
                            "status": "available"
                        },
                        { "listing_id": 2, "product_type": "inedible", "quantity": 3 }
                    ]))
                })
                .post(echo),
            )
            .route(
                "/api/listings/upload-csv/",
                post(|| async {
                    (
                        StatusCode::BAD_REQUEST,
                        Json(json!({ "message": "Missing column: quantity" })),
                    )
                }),
            )
    }

    fn failing_upstream() -> Router {
        Router::new().route(
            "/api/listings/",
            get(|| async {
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(json!({ "detail": "Database is down" })),
                )
            }),
        )
    }

    async fn spawn_proxy(upstream_url: String) -> String {
        let mut config = Config::default();
        config.upstream.base_url = upstream_url;
        config.upstream.timeout_secs = 5;
        config.server.static_dir = std::env::temp_dir()
            .join("feedlink-missing-dist")
            .to_string_lossy()
            .into_owned();
        let state = AppState::new(config).unwrap();
        spawn(configure_routes(state)).await
    }

    #[tokio::test]
    async fn test_health() {
        let proxy = spawn_proxy("http://127.0.0.1:9".into()).await;
        let response = reqwest::get(format!("{}/health", proxy)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
        assert_eq!(response.text().await.unwrap(), "ok");
    }

    #[tokio::test]
    async fn test_list_relays_parsed_listings() {
        let upstream = spawn(mock_upstream()).await;
        let proxy = spawn_proxy(upstream).await;

        for path in ["/api/listings/", "/api/listings"] {
            let response = reqwest::get(format!("{}{}", proxy, path)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);

            let listings: Vec<Value> = response.json().await.unwrap();
            assert_eq!(listings.len(), 2);
            assert_eq!(listings[0]["listing_id"], 1);
            assert_eq!(listings[0]["quantity"], 12.5);
            assert_eq!(listings[0]["category"], "Bakery");
            assert_eq!(listings[1]["category"], Value::Null);
        }
    }

    #[tokio::test]
    async fn test_list_relays_upstream_error_status() {
        let upstream = spawn(failing_upstream()).await;
        let proxy = spawn_proxy(upstream).await;

        let response = reqwest::get(format!("{}/api/listings/", proxy)).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["detail"], "Database is down");
        assert_eq!(body["code"], "UPSTREAM_ERROR");
    }

    #[tokio::test]
    async fn test_unreachable_upstream_is_bad_gateway() {
        // bind then drop to get a port nobody listens on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let dead = format!("http://{}", listener.local_addr().unwrap());
        drop(listener);

        let proxy = spawn_proxy(dead).await;
        let response = reqwest::get(format!("{}/api/listings/", proxy)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["code"], "UPSTREAM_UNREACHABLE");
    }

    #[tokio::test]
    async fn test_create_forwards_body_and_content_type() {
        let upstream = spawn(mock_upstream()).await;
        let proxy = spawn_proxy(upstream).await;
        let client = reqwest::Client::new();

        let response = client
            .post(format!("{}/api/listings/", proxy))
            .header(header::CONTENT_TYPE, "application/json")
            .body(r#"{"product_type":"edible","quantity":5}"#)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["content_type"], "application/json");
        assert_eq!(body["body"], r#"{"product_type":"edible","quantity":5}"#);

        let multipart = "--XyZ\r\nContent-Disposition: form-data; name=\"quantity\"\r\n\r\n5\r\n--XyZ--\r\n";
        let response = client
            .post(format!("{}/api/listings", proxy))
            .header(header::CONTENT_TYPE, "multipart/form-data; boundary=XyZ")
            .body(multipart)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["content_type"], "multipart/form-data; boundary=XyZ");
        assert_eq!(body["body"], multipart);
    }

    #[tokio::test]
    async fn test_csv_upload_relays_upstream_rejection() {
        let upstream = spawn(mock_upstream()).await;
        let proxy = spawn_proxy(upstream).await;

        let multipart = "--B\r\nContent-Disposition: form-data; name=\"file\"; filename=\"items.csv\"\r\nContent-Type: text/csv\r\n\r\nproduct_type\nedible\r\n--B--\r\n";
        let response = reqwest::Client::new()
            .post(format!("{}/api/listings/upload-csv/", proxy))
            .header(header::CONTENT_TYPE, "multipart/form-data; boundary=B")
            .body(multipart)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["message"], "Missing column: quantity");
    }

    #[tokio::test]
    async fn test_unsupported_content_type_rejected() {
        let upstream = spawn(mock_upstream()).await;
        let proxy = spawn_proxy(upstream).await;
        let client = reqwest::Client::new();

        let response = client
            .post(format!("{}/api/listings/", proxy))
            .header(header::CONTENT_TYPE, "text/plain")
            .body("hello")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["detail"], "Unsupported content type: text/plain");

        let response = client
            .post(format!("{}/api/listings/upload-csv/", proxy))
            .header(header::CONTENT_TYPE, "application/json")
            .body("{}")
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
