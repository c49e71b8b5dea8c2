//! REST API Routes Module
//!
//! This module contains the route handlers and the router assembly:
//! - Task CRUD routes at /tasks
//! - Health check endpoints at /health
//! - OpenAPI spec at /openapi.json and /openapi.yaml
//! - Swagger UI at /swagger-ui (behind the swagger-ui feature)
//! - CORS support for browser-based clients

use std::time::Duration;

use axum::{
    http::{header, HeaderValue, Method},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::config::ApiConfig;
use crate::openapi::ApiDoc;
use crate::state::SharedTaskStore;

pub mod health;
pub mod task;

// Re-export route creation functions for convenience
pub use health::create_router as health_router;
pub use task::create_router as task_router;

// ============================================================================
// OPENAPI ENDPOINTS
// ============================================================================

/// Handler for /openapi.json endpoint.
async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Handler for /openapi.yaml endpoint.
async fn openapi_yaml() -> impl IntoResponse {
    use axum::http::StatusCode;

    match ApiDoc::to_yaml() {
        Ok(yaml) => (StatusCode::OK, [(header::CONTENT_TYPE, "text/yaml")], yaml),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "text/plain")],
            format!("Failed to generate YAML: {}", e),
        ),
    }
}

// ============================================================================
// ROUTER ASSEMBLY
// ============================================================================

/// Create the complete API router.
///
/// The task store is injected rather than global, so callers (and tests)
/// own the store's lifetime and can run several routers side by side.
///
/// # Middleware Order (outer to inner)
/// 1. CORS (outermost) - handles preflight requests
/// 2. HTTP tracing - one span per request
/// 3. Route handlers
pub fn create_api_router(store: SharedTaskStore, config: &ApiConfig) -> Router {
    #[allow(unused_mut)]
    let mut router = Router::new()
        .nest("/tasks", task::create_router(store))
        .nest("/health", health::create_router())
        .route("/openapi.json", get(openapi_json))
        .route("/openapi.yaml", get(openapi_yaml));

    #[cfg(feature = "swagger-ui")]
    {
        use utoipa_swagger_ui::SwaggerUi;
        router = router.merge(SwaggerUi::new("/swagger-ui").url("/openapi.json", ApiDoc::openapi()));
    }

    let cors = build_cors_layer(config);

    router.layer(TraceLayer::new_for_http()).layer(cors)
}

// ============================================================================
// CORS LAYER
// ============================================================================

/// Build the CORS layer from ApiConfig.
///
/// In development mode (empty origins), allows all origins.
/// In production mode, only allows configured origins.
fn build_cors_layer(config: &ApiConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .max_age(Duration::from_secs(config.cors_max_age_secs));

    if config.cors_origins.is_empty() {
        tracing::info!("CORS: Development mode - allowing all origins");
        cors.allow_origin(Any).allow_headers(Any)
    } else {
        tracing::info!(
            "CORS: Production mode - allowing origins: {:?}",
            config.cors_origins
        );
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();

        let cors = cors
            .allow_origin(origins)
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

        if config.cors_allow_credentials {
            cors.allow_credentials(true)
        } else {
            cors
        }
    }
}
