//! # Application Configuration Loader
//!
//! Provides a unified configuration loader for application settings:
//! server bind address, HTTP limits, CORS, and image defaults.
//!
//! Automatically loads `.env` files for non-production environments.
//! It checks for a custom `DOTENV_FILE` path first, then falls back to
//! `.env.{APP_ENV}` or `.env`.
//!
//! This configuration is initialized once at application startup and
//! shared throughout the system.
//!
//! # Environment Variables
//! | Variable | Description | Default |
//! |-----------|-------------|----------|
//! | `APP_ENV` | Current environment (`development`, `production`, etc.) | `"development"` |
//! | `DOTENV_FILE` | Optional path to a custom dotenv file | *none* |
//! | `HOST` | Bind address | `0.0.0.0` |
//! | `PORT` | Bind port | `3000` |
//! | `HTTP_MAX_BODY_BYTES` | Maximum request body size (bytes) | derived from `HTTP_MAX_BODY_MB` |
//! | `HTTP_MAX_BODY_MB` | Max body size in megabytes (if bytes not set) | `50` |
//! | `CORS_ORIGINS` | Allowed origins for CORS (comma-separated) | `""` |
//! | `CORS_CREDENTIALS` | Allow cookies/headers in CORS requests | `false` |
//! | `DEFAULT_QUALITY` | Quality when the form omits one (1–100) | `75` |
//! | `AVIF_SPEED` | AVIF encoder speed (1–10) | `6` |
//!
//! # Example
//! ```rust,no_run
//! use imgconv_web::config::app::AppConfig;
//!
//! let cfg = AppConfig::from_env();
//! println!("listening on {}", cfg.server.address());
//! ```

use std::env;

use crate::config::{
    env::*,
    image::ImageConfig,
    server::ServerConfig,
    web::{CorsConfig, HttpConfig},
};

/// Top-level application configuration.
#[derive(Clone, Debug)]
pub struct AppConfig {
    /// HTTP listener bind address.
    pub server: ServerConfig,
    /// HTTP server configuration.
    pub http: HttpConfig,
    /// Cross-Origin Resource Sharing configuration.
    pub cors: CorsConfig,
    /// Conversion defaults.
    pub image: ImageConfig,
}

impl AppConfig {
    /// Loads application configuration from environment variables.
    ///
    /// ## Behavior
    /// - Reads `APP_ENV` (defaults to `"development"`).
    /// - Loads `.env` or `.env.{APP_ENV}` for non-production environments.
    /// - Parses all supported environment variables and falls back to defaults.
    pub fn from_env() -> Self {
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "development".into());

        if app_env != "production" {
            if let Ok(path) = env::var("DOTENV_FILE") {
                let _ = dotenvy::from_filename(path);
            } else {
                let candidate = format!(".env.{}", app_env);
                dotenvy::from_filename(&candidate)
                    .or_else(|_| dotenvy::dotenv())
                    .ok();
            }
        }

        // HTTP configuration
        let http_max_body_bytes = env::var("HTTP_MAX_BODY_BYTES")
            .ok()
            .and_then(|s| s.trim().parse::<usize>().ok())
            .unwrap_or_else(|| (read_u32("HTTP_MAX_BODY_MB", 50) as usize) * 1024 * 1024);

        // CORS
        let cors_origins = env::var("CORS_ORIGINS").unwrap_or_default();
        let cors_credentials = read_flag("CORS_CREDENTIALS", false);

        // Conversion defaults; out-of-range operator values are clamped
        // rather than rejected, unlike client-supplied quality.
        let default_quality = read_u32("DEFAULT_QUALITY", 75).clamp(1, 100) as u8;
        let avif_speed = read_u32("AVIF_SPEED", 6).clamp(1, 10) as u8;

        AppConfig {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into()),
                port: read_u16("PORT", 3000),
            },
            http: HttpConfig {
                max_body_bytes: http_max_body_bytes,
            },
            cors: CorsConfig {
                origins: cors_origins,
                credentials: cors_credentials,
            },
            image: ImageConfig {
                default_quality,
                avif_speed,
            },
        }
    }
}
