//! Conversion error taxonomy.
//!
//! One variant per failure class of the conversion pipeline. The HTTP
//! layer maps variants onto status codes; this module stays free of any
//! HTTP dependency so the processor can be reused outside a server.
//!
//! # Design
//! - `Validation` — the request was rejected before any decode attempt
//!   (no image supplied, unknown format, malformed field).
//! - `Decode` — the source bytes could not be decoded; carries the
//!   decoder diagnostic.
//! - `Encode` — the encoder failed after a successful decode.
//!
//! Nothing here is retried: every failure surfaces synchronously to the
//! caller of the current request.
//!
//! # Example
//! ```
//! use imgconv_web::error::ConvertError;
//!
//! let err = ConvertError::validation("no image supplied");
//! assert_eq!(err.to_string(), "no image supplied");
//! ```

use thiserror::Error;

/// Errors produced by the conversion pipeline.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Client-supplied input rejected before processing.
    #[error("{0}")]
    Validation(String),

    /// The source bytes could not be decoded as an image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The encoder failed after a successful decode.
    #[error("failed to encode image: {0}")]
    Encode(String),
}

impl ConvertError {
    /// Create a validation error from any displayable message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Returns `true` when the failure was caused by client input
    /// (validation or decode) rather than by the server.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Decode(_))
    }
}
