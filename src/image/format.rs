//! Output format dispatch.
//!
//! A closed enumeration of conversion targets: every format carries
//! exactly the encode options it understands, and unrecognized format
//! names are rejected at the boundary instead of silently re-encoding
//! in the source container format.

use crate::error::ConvertError;

/// Supported conversion targets with their encode options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossy WebP; quality 1–100 is handed to libwebp verbatim.
    Webp { quality: u8 },
    /// AVIF (AV1 still image); quality 1–100 handed to the encoder verbatim.
    Avif { quality: u8 },
    /// Baseline JPEG; quality 1–100 handed to the encoder verbatim.
    Jpeg { quality: u8 },
    /// PNG is lossless: the value selects compression effort, not
    /// visual quality. It is carried as an opaque knob.
    Png { quality: u8 },
    /// GIF has no quality parameter; any supplied value is ignored.
    Gif,
}

impl OutputFormat {
    /// Parse a client-supplied format name and quality.
    ///
    /// # Errors
    /// Returns a validation error for an unknown format name or a
    /// quality outside `1..=100`.
    ///
    /// # Examples
    /// ```
    /// use imgconv_web::image::format::OutputFormat;
    ///
    /// assert_eq!(
    ///     OutputFormat::parse("webp", 80).unwrap(),
    ///     OutputFormat::Webp { quality: 80 },
    /// );
    /// assert!(OutputFormat::parse("tiff", 80).is_err());
    /// ```
    pub fn parse(format: &str, quality: u8) -> Result<Self, ConvertError> {
        if !(1..=100).contains(&quality) {
            return Err(ConvertError::validation(format!(
                "quality must be between 1 and 100, got {quality}"
            )));
        }
        match format.trim().to_ascii_lowercase().as_str() {
            "webp" => Ok(Self::Webp { quality }),
            "avif" => Ok(Self::Avif { quality }),
            "jpeg" | "jpg" => Ok(Self::Jpeg { quality }),
            "png" => Ok(Self::Png { quality }),
            "gif" => Ok(Self::Gif),
            other => Err(ConvertError::validation(format!(
                "unsupported output format \"{other}\""
            ))),
        }
    }

    /// MIME type of the encoded output.
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Webp { .. } => "image/webp",
            Self::Avif { .. } => "image/avif",
            Self::Jpeg { .. } => "image/jpeg",
            Self::Png { .. } => "image/png",
            Self::Gif => "image/gif",
        }
    }

    /// File extension for download filenames.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Webp { .. } => "webp",
            Self::Avif { .. } => "avif",
            Self::Jpeg { .. } => "jpg",
            Self::Png { .. } => "png",
            Self::Gif => "gif",
        }
    }
}
