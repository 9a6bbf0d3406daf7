//! # Image Configuration
//!
//! Parameters applied to every conversion that the client does not
//! control: the quality used when the form omits one, and the AVIF
//! encoder effort level.
//!
//! # Example
//! ```rust
//! use imgconv_web::config::image::ImageConfig;
//!
//! let cfg = ImageConfig::default();
//! assert_eq!(cfg.default_quality, 75);
//! assert_eq!(cfg.avif_speed, 6);
//! ```

/// Server-side defaults for image conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageConfig {
    /// Quality used when the request omits the `quality` field (1–100).
    pub default_quality: u8,
    /// AVIF encoder speed, 1 (slowest/best) to 10 (fastest).
    pub avif_speed: u8,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            default_quality: 75,
            avif_speed: 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_config_holds_values() {
        let cfg = ImageConfig {
            default_quality: 90,
            avif_speed: 4,
        };
        assert_eq!(cfg.default_quality, 90);
        assert_eq!(cfg.avif_speed, 4);
    }

    #[test]
    fn image_config_default_matches_documented_values() {
        let cfg = ImageConfig::default();
        assert_eq!(cfg.default_quality, 75);
        assert_eq!(cfg.avif_speed, 6);
    }

    #[test]
    fn image_config_clone_and_equality() {
        let cfg = ImageConfig::default();
        let clone = cfg.clone();
        assert_eq!(cfg, clone);

        let other = ImageConfig {
            default_quality: 10,
            avif_speed: 10,
        };
        assert_ne!(cfg, other);
    }
}
