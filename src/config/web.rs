//! # HTTP and CORS Configuration
//!
//! Defines basic configuration structures for HTTP request handling and
//! CORS (Cross-Origin Resource Sharing) behavior.
//!
//! These are included within [`AppConfig`](crate::config::app::AppConfig).
//!
//! # Examples
//! ```rust
//! use imgconv_web::config::web::{HttpConfig, CorsConfig};
//!
//! let http = HttpConfig { max_body_bytes: 50 * 1024 * 1024 };
//! let cors = CorsConfig {
//!     origins: "http://localhost:5173".into(),
//!     credentials: false,
//! };
//!
//! assert!(http.max_body_bytes > 1_000_000);
//! assert_eq!(cors.origins, "http://localhost:5173");
//! ```

/// HTTP-related configuration.
///
/// Controls the request body size limit, which is the effective cap on
/// uploaded image size since the image arrives in the multipart body.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpConfig {
    pub max_body_bytes: usize,
}

/// CORS (Cross-Origin Resource Sharing) configuration.
///
/// The browser UI is served from a different origin than this backend,
/// so the allowed-origin list is part of deployment configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins.
    pub origins: String,
    /// Whether to send `Access-Control-Allow-Credentials: true`.
    pub credentials: bool,
}
