//! API Routes
//!
//! Configures the Axum router for the lookup endpoint.

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{lookup_handler, AppState};

/// Creates the router.
///
/// Every path and method reaches the lookup handler, since the path itself
/// may carry the address.
///
/// # Middleware
/// - CORS: Allows any origin, so browsers can query the service directly
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Web pages on other origins call the lookup directly from the browser
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .fallback(lookup_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    use crate::config::Config;
    use crate::geo::{City, CityRecord, MemoryResolver};

    fn city(geoname_id: u32) -> CityRecord {
        CityRecord {
            city: City {
                geoname_id,
                names: None,
            },
            ..Default::default()
        }
    }

    fn create_test_app() -> Router {
        let resolver = Arc::new(
            MemoryResolver::new()
                .with_record("8.8.4.4".parse().unwrap(), city(8844))
                .with_record("::1".parse().unwrap(), city(1)),
        );
        create_router(AppState::from_config(&Config::default(), resolver))
    }

    async fn geoname_of(uri: &str) -> (StatusCode, serde_json::Value) {
        let response = create_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        (status, json["Data"]["City"]["GeoNameID"].clone())
    }

    async fn status_of(uri: &str) -> StatusCode {
        create_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_query_endpoint() {
        assert_eq!(status_of("/?ip=8.8.4.4").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_path_endpoint() {
        assert_eq!(status_of("/8.8.4.4").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_encoded_path_is_decoded() {
        let (status, geoname) = geoname_of("/%3A%3A1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(geoname, 1);
    }

    #[tokio::test]
    async fn test_repeated_ip_param_uses_first() {
        let (status, geoname) = geoname_of("/?ip=8.8.4.4&ip=1.1.1.1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(geoname, 8844);
    }

    #[tokio::test]
    async fn test_root_without_key_is_bad_request() {
        assert_eq!(status_of("/").await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_address_is_ok() {
        assert_eq!(status_of("/203.0.113.5").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_any_method_is_served() {
        let response = create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/8.8.4.4")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
