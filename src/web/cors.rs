//! # CORS (Cross-Origin Resource Sharing) Utilities
//!
//! Provides a configurable [`CorsLayer`] builder for the conversion API.
//!
//! The browser UI is served from its own origin (a dev server or a
//! static host), so the backend must answer preflight requests for it.
//! Settings are derived from [`CorsConfig`].
//!
//! If no origins are configured, defaults to allowing
//! `http://localhost:5173` — suitable for local frontend development.
//!
//! # Example
//! ```rust,no_run
//! use axum::{routing::post, Router};
//! use imgconv_web::config::web::CorsConfig;
//! use imgconv_web::web::cors::build_cors;
//!
//! let cfg = CorsConfig {
//!     origins: "http://example.com".into(),
//!     credentials: false,
//! };
//!
//! let app: Router = Router::new()
//!     .route("/api/convert", post(|| async { "converted" }))
//!     .layer(build_cors(&cfg));
//! ```

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::web::CorsConfig;

/// Parses a comma-separated list of origins from environment configuration.
///
/// Invalid or empty entries are ignored.
fn parse_origins_from_env(cors_origins: String) -> Vec<HeaderValue> {
    cors_origins
        .split(',')
        .filter_map(|s| {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                HeaderValue::from_str(s).ok()
            }
        })
        .collect()
}

/// Builds a [`CorsLayer`] configured from [`CorsConfig`].
///
/// - Allows `GET`, `POST`, and `OPTIONS` methods.
/// - Allows the `Content-Type` header (multipart bodies set it).
/// - Defaults to `http://localhost:5173` when no origins are provided.
/// - Enables credentials when `CorsConfig.credentials` is `true`.
pub fn build_cors(cors: &CorsConfig) -> CorsLayer {
    let origins = parse_origins_from_env(cors.origins.clone());

    // Allowed origins — "*" cannot be used when credentials=true
    let origin_cfg = if origins.is_empty() {
        // Default to local dev port if not specified
        AllowOrigin::list([HeaderValue::from_static("http://localhost:5173")])
    } else {
        AllowOrigin::list(origins)
    };

    let mut layer = CorsLayer::new()
        .allow_origin(origin_cfg)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if cors.credentials {
        layer = layer.allow_credentials(true);
    }

    layer
}
