//! Taskdeck API Server Entry Point
//!
//! Bootstraps telemetry and configuration, constructs the in-memory task
//! store, and starts the Axum HTTP server.

use axum::Router;
use taskdeck_api::{
    create_api_router, init_telemetry, shared_store, ApiConfig, ApiError, ApiResult,
    TelemetryConfig,
};

#[tokio::main]
async fn main() -> ApiResult<()> {
    let telemetry_config = TelemetryConfig::default();
    init_telemetry(&telemetry_config)?;

    let api_config = ApiConfig::from_env();

    // The store lives exactly as long as the process; nothing survives a
    // restart.
    let store = shared_store();
    let app: Router = create_api_router(store, &api_config);

    let addr = api_config.bind_addr()?;
    tracing::info!(%addr, "Starting Taskdeck API server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ApiError::internal_error(format!("Failed to bind {}: {}", addr, e)))?;

    let server = axum::serve(listener, app);
    tokio::select! {
        result = server => {
            result.map_err(|e| ApiError::internal_error(format!("Server error: {}", e)))?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
