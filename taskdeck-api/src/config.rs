//! API Configuration Module
//!
//! This module provides configuration for the bind address and CORS.
//! Configuration is loaded from environment variables with sensible
//! defaults for development.

use std::net::SocketAddr;

use crate::error::{ApiError, ApiResult};

/// Default bind host for the HTTP server
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";

/// Default port for the HTTP server
pub const DEFAULT_PORT: u16 = 8000;

/// Default CORS max age in seconds (24 hours)
pub const DEFAULT_CORS_MAX_AGE_SECS: u64 = 86400;

/// API configuration for the bind address and CORS.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host the server binds to.
    pub bind_host: String,

    /// Port the server binds to.
    pub port: u16,

    /// Allowed CORS origins (comma-separated in env var).
    /// Empty means allow all origins (dev mode).
    pub cors_origins: Vec<String>,

    /// Whether to allow credentials in CORS requests.
    pub cors_allow_credentials: bool,

    /// Max age for CORS preflight cache in seconds.
    pub cors_max_age_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_host: DEFAULT_BIND_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: Vec::new(), // Empty = allow all
            cors_allow_credentials: false,
            cors_max_age_secs: DEFAULT_CORS_MAX_AGE_SECS,
        }
    }
}

impl ApiConfig {
    /// Create ApiConfig from environment variables.
    ///
    /// Environment variables:
    /// - `TASKDECK_BIND`: Bind host (default: 0.0.0.0)
    /// - `PORT` / `TASKDECK_PORT`: Bind port (default: 8000)
    /// - `TASKDECK_CORS_ORIGINS`: Comma-separated allowed origins (empty = allow all)
    /// - `TASKDECK_CORS_ALLOW_CREDENTIALS`: "true" or "false" (default: false)
    /// - `TASKDECK_CORS_MAX_AGE_SECS`: Preflight cache duration (default: 86400)
    pub fn from_env() -> Self {
        let bind_host =
            std::env::var("TASKDECK_BIND").unwrap_or_else(|_| DEFAULT_BIND_HOST.to_string());

        let port = std::env::var("PORT")
            .ok()
            .or_else(|| std::env::var("TASKDECK_PORT").ok())
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let cors_origins = std::env::var("TASKDECK_CORS_ORIGINS")
            .ok()
            .map(|s| {
                s.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let cors_allow_credentials = std::env::var("TASKDECK_CORS_ALLOW_CREDENTIALS")
            .ok()
            .map(|s| s.to_lowercase() == "true")
            .unwrap_or(false);

        let cors_max_age_secs = std::env::var("TASKDECK_CORS_MAX_AGE_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_CORS_MAX_AGE_SECS);

        Self {
            bind_host,
            port,
            cors_origins,
            cors_allow_credentials,
            cors_max_age_secs,
        }
    }

    /// Resolve the socket address the server binds to.
    pub fn bind_addr(&self) -> ApiResult<SocketAddr> {
        let addr = format!("{}:{}", self.bind_host, self.port);
        addr.parse::<SocketAddr>().map_err(|e| {
            ApiError::internal_error(format!("Invalid bind address {}: {}", addr, e))
        })
    }

    /// Check if a given origin is allowed.
    pub fn is_origin_allowed(&self, origin: &str) -> bool {
        if self.cors_origins.is_empty() {
            // Dev mode: allow all
            return true;
        }
        self.cors_origins.iter().any(|allowed| allowed == origin)
    }
}
