//! Telemetry bootstrap
//!
//! Sets up the tracing subscriber for structured request and application
//! logging. Log level is controlled through `RUST_LOG`; output format
//! switches between human-readable and JSON via configuration.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::{ApiError, ApiResult};

/// Telemetry configuration from environment variables.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Service name emitted in startup logs
    pub service_name: String,
    /// Environment (production, staging, development)
    pub environment: String,
    /// Emit JSON-formatted log lines instead of the human-readable format
    pub log_json: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: std::env::var("TASKDECK_SERVICE_NAME")
                .unwrap_or_else(|_| "taskdeck-api".to_string()),
            environment: std::env::var("TASKDECK_ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
            log_json: std::env::var("TASKDECK_LOG_JSON")
                .map(|s| s == "true" || s == "1")
                .unwrap_or(false),
        }
    }
}

/// Initialize the tracing subscriber.
///
/// Call once at application startup before any tracing occurs.
pub fn init_telemetry(config: &TelemetryConfig) -> ApiResult<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("taskdeck_api=debug,tower_http=debug,info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = if config.log_json {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        registry.with(tracing_subscriber::fmt::layer()).try_init()
    };

    result.map_err(|e| ApiError::internal_error(format!("Failed to init subscriber: {}", e)))?;

    tracing::info!(
        service_name = config.service_name,
        environment = config.environment,
        "Telemetry initialized"
    );
    Ok(())
}
