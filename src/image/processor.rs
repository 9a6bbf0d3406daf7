//! # Image Processing Abstractions
//!
//! Defines a generic interface for one-shot image conversion and the
//! options it consumes.
//!
//! This module provides:
//! - [`ConvertOptions`] — target format plus resize plan for one conversion.
//! - [`ImageProcessor`] — a trait abstraction that allows different
//!   image processing backends.
//!
//! It keeps the HTTP layer backend-agnostic: handlers depend on the
//! trait, so a different image library can be plugged in without
//! touching the web surface.
//!
//! # Example
//! ```rust
//! use imgconv_web::image::dimensions::ResizePlan;
//! use imgconv_web::image::format::OutputFormat;
//! use imgconv_web::image::processor::{ConvertOptions, ImageProcessor};
//! use imgconv_web::error::ConvertError;
//!
//! struct DummyProcessor;
//!
//! impl ImageProcessor for DummyProcessor {
//!     fn convert(&self, img_bytes: &[u8], _opts: &ConvertOptions) -> Result<Vec<u8>, ConvertError> {
//!         Ok(img_bytes.to_vec())
//!     }
//! }
//!
//! let opts = ConvertOptions {
//!     format: OutputFormat::Webp { quality: 80 },
//!     resize: ResizePlan::keep_original(),
//! };
//! let out = DummyProcessor.convert(b"abc", &opts).unwrap();
//! assert_eq!(out, b"abc");
//! ```

use crate::error::ConvertError;
use crate::image::dimensions::ResizePlan;
use crate::image::format::OutputFormat;

/// Everything the processor needs for one conversion.
///
/// Built once per request from the client form, immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Target format with its encode options.
    pub format: OutputFormat,
    /// Requested resize behavior.
    pub resize: ResizePlan,
}

/// Trait defining one-shot image conversion behavior.
///
/// Implementors decode the source bytes, apply the resize plan, and
/// encode into the target format, entirely in memory.
pub trait ImageProcessor: Send + Sync {
    /// Convert `img_bytes` according to `opts`.
    ///
    /// # Errors
    /// - [`ConvertError::Decode`] when the source bytes are corrupt or
    ///   in an unsupported format; no output is produced.
    /// - [`ConvertError::Encode`] when encoding fails after a
    ///   successful decode.
    fn convert(&self, img_bytes: &[u8], opts: &ConvertOptions) -> Result<Vec<u8>, ConvertError>;
}
