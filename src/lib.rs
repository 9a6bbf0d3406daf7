//! # imgconv_web
//!
//! Backend for a browser-based image format converter.
//!
//! This crate provides:
//! - Dimension resolution for pixel/percentage resize requests (`image::dimensions`)
//! - Format dispatch and encoding via the `image` and `webp` crates (`image::image_rs_processor`)
//! - An Axum multipart endpoint that streams the converted image back (`web::convert`)
//!
//! ## Example usage (in another crate)
//!
//! ```rust,ignore
//! use imgconv_web::anyhow::Result;
//! use imgconv_web::config::app::AppConfig;
//! ```
// ===============================
// Re-exports of external crates
// ===============================

pub use anyhow;
pub use axum;
pub use axum_extra;
pub use dotenvy;
pub use serde;
pub use serde_json;
pub use tokio;
pub use tower;
pub use tower_http;
pub use uuid;

// ===============================
// Public modules
// ===============================
pub mod config;
pub mod error;
pub mod image;
pub mod web;
