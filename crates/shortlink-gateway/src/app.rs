use axum::routing::{get, post};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::error::handle_panic;
use crate::handlers::{decode_handler, encode_handler, health_handler, stats_handler};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState) -> Router {
        let api = Router::new()
            .route("/encode", post(encode_handler))
            .route("/decode", post(decode_handler))
            .route("/health", get(health_handler))
            .route("/stats", get(stats_handler));

        Self::layered(Router::new().nest("/api", api).with_state(state))
    }

    /// Wraps `router` in the middleware every route gets: panics become 500s,
    /// any origin may call the API, and requests are traced.
    pub fn layered(router: Router) -> Router {
        router
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::health::HEALTH_MESSAGE;
    use crate::model::{DecodeResponse, EncodeResponse, StatsResponse};
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use serde::de::DeserializeOwned;
    use serde_json::{json, Value};
    use shortlink_core::ShortlinkSettings;
    use std::num::NonZeroUsize;
    use tower::ServiceExt;

    fn test_state(limit: usize) -> AppState {
        let settings = ShortlinkSettings::builder()
            .max_concurrent_requests(NonZeroUsize::new(limit).unwrap())
            .build();
        AppState::new(&settings)
    }

    async fn post_json(state: &AppState, uri: &str, body: Value) -> Response {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        App::router(state.clone()).oneshot(request).await.unwrap()
    }

    async fn get(state: &AppState, uri: &str) -> Response {
        let request = Request::get(uri).body(Body::empty()).unwrap();
        App::router(state.clone()).oneshot(request).await.unwrap()
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn encode_returns_short_url() {
        let state = test_state(10);

        let response = post_json(
            &state,
            "/api/encode",
            json!({ "url": "https://example.com/a" }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: EncodeResponse = read_json(response).await;
        assert_eq!(body.short_url, "http://short.est/b");
        assert_eq!(body.original_url, "https://example.com/a");
    }

    #[tokio::test]
    async fn encode_then_decode_round_trip() {
        let state = test_state(10);

        let encoded: EncodeResponse = read_json(
            post_json(
                &state,
                "/api/encode",
                json!({ "url": "https://example.com/long/path" }),
            )
            .await,
        )
        .await;

        let response = post_json(
            &state,
            "/api/decode",
            json!({ "shortUrl": encoded.short_url }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let decoded: DecodeResponse = read_json(response).await;
        assert_eq!(decoded.original_url, "https://example.com/long/path");
        assert_eq!(decoded.short_url, encoded.short_url);
    }

    #[tokio::test]
    async fn encoding_twice_returns_same_short_url() {
        let state = test_state(10);

        let first: EncodeResponse = read_json(
            post_json(&state, "/api/encode", json!({ "url": "https://example.com" })).await,
        )
        .await;
        let second: EncodeResponse = read_json(
            post_json(&state, "/api/encode", json!({ "url": " https://example.com " })).await,
        )
        .await;

        assert_eq!(first.short_url, second.short_url);
        assert_eq!(state.store().size(), 1);
    }

    #[tokio::test]
    async fn invalid_url_is_bad_request() {
        let state = test_state(10);

        for body in [
            json!({ "url": "not-a-url" }),
            json!({ "url": "   " }),
            json!({}),
        ] {
            let response = post_json(&state, "/api/encode", body).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let error: Value = read_json(response).await;
            assert!(error["error"].is_string());
        }
    }

    #[tokio::test]
    async fn unknown_short_url_is_not_found() {
        let state = test_state(10);

        for short_url in ["http://short.est/zzz", "https://other.host/", "zzz"] {
            let response =
                post_json(&state, "/api/decode", json!({ "shortUrl": short_url })).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);
        }
    }

    #[tokio::test]
    async fn saturated_gate_returns_too_many_requests() {
        let state = test_state(2);
        let held: Vec<_> = (0..2).map(|_| state.gate().try_acquire().unwrap()).collect();

        let encode = post_json(&state, "/api/encode", json!({ "url": "https://example.com" })).await;
        let decode = post_json(&state, "/api/decode", json!({ "shortUrl": "b" })).await;

        assert_eq!(encode.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(decode.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(state.store().size(), 0);

        // Health and stats stay available while saturated.
        assert_eq!(get(&state, "/api/health").await.status(), StatusCode::OK);
        assert_eq!(get(&state, "/api/stats").await.status(), StatusCode::OK);

        drop(held);
        let encode = post_json(&state, "/api/encode", json!({ "url": "https://example.com" })).await;
        assert_eq!(encode.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn malformed_json_gets_json_error_body() {
        let state = test_state(10);

        let request = Request::post("/api/encode")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"url\": "))
            .unwrap();
        let response = App::router(state.clone()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: Value = read_json(response).await;
        assert!(error["error"].is_string());
    }

    #[tokio::test]
    async fn missing_content_type_gets_json_error_body() {
        let state = test_state(10);

        let request = Request::post("/api/decode")
            .body(Body::from(json!({ "shortUrl": "b" }).to_string()))
            .unwrap();
        let response = App::router(state.clone()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        let error: Value = read_json(response).await;
        assert!(error["error"].is_string());
    }

    #[tokio::test]
    async fn any_origin_is_allowed() {
        let state = test_state(10);

        let request = Request::get("/api/health")
            .header(header::ORIGIN, "https://client.example")
            .body(Body::empty())
            .unwrap();
        let response = App::router(state.clone()).oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
    }

    #[tokio::test]
    async fn preflight_is_answered() {
        let state = test_state(10);

        let request = Request::options("/api/encode")
            .header(header::ORIGIN, "https://client.example")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();
        let response = App::router(state.clone()).oneshot(request).await.unwrap();

        assert!(response.status().is_success());
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
        assert!(response
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_METHODS));
    }

    #[tokio::test]
    async fn handler_panic_becomes_internal_server_error() {
        async fn explode() -> &'static str {
            panic!("short code counter exhausted")
        }
        let router = App::layered(Router::new().route("/explode", axum::routing::get(explode)));

        let request = Request::get("/explode").body(Body::empty()).unwrap();
        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let error: Value = read_json(response).await;
        assert_eq!(error["error"], "internal server error");
    }

    #[tokio::test]
    async fn health_reports_running() {
        let state = test_state(10);

        let response = get(&state, "/api/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], HEALTH_MESSAGE.as_bytes());
    }

    #[tokio::test]
    async fn stats_counts_stored_urls() {
        let state = test_state(10);

        for i in 0..3 {
            let url = format!("https://example{}.com", i);
            post_json(&state, "/api/encode", json!({ "url": url })).await;
        }

        let stats: StatsResponse = read_json(get(&state, "/api/stats").await).await;
        assert_eq!(stats.total_urls, 3);
        assert!(stats.timestamp > 0);
    }
}
