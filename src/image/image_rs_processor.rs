//! # Image Processor Implementation (image-rs)
//!
//! Provides an [`ImageProcessor`] implementation built on the [`image`]
//! crate, with the [`webp`] crate supplying lossy WebP encoding (the
//! `image` crate only writes lossless WebP).
//!
//! Decoding accepts whatever the compiled-in `image` decoders sniff
//! from the payload (JPEG, PNG, GIF, WebP, BMP, TIFF, ...). Encoding
//! targets the closed [`OutputFormat`] set.
//!
//! The whole pipeline is in-memory: decode → resolve dimensions →
//! resize (optional) → encode. Nothing touches the filesystem, so a
//! failed conversion leaves no partial output behind.
//!
//! # Errors
//! Returns [`ConvertError::Decode`] if the payload cannot be sniffed or
//! decoded, and [`ConvertError::Encode`] if the selected encoder fails.

use std::io::Cursor;

use image::codecs::avif::AvifEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType, GenericImageView, ImageEncoder, ImageFormat, ImageReader};

use crate::error::ConvertError;
use crate::image::dimensions::{concrete_size, resolve_dimensions, ResizePlan};
use crate::image::format::OutputFormat;
use crate::image::processor::{ConvertOptions, ImageProcessor};

/// Default AVIF encoder effort (1 = slowest/best, 10 = fastest).
pub const DEFAULT_AVIF_SPEED: u8 = 6;

/// A concrete [`ImageProcessor`] using the `image` and `webp` crates.
#[derive(Clone, Debug)]
pub struct ImageRsProcessor {
    avif_speed: u8,
}

impl Default for ImageRsProcessor {
    fn default() -> Self {
        Self::new(DEFAULT_AVIF_SPEED)
    }
}

impl ImageRsProcessor {
    /// Creates a processor with the given AVIF encoder speed (1–10).
    pub fn new(avif_speed: u8) -> Self {
        Self {
            avif_speed: avif_speed.clamp(1, 10),
        }
    }

    fn decode(&self, img_bytes: &[u8]) -> Result<DynamicImage, ConvertError> {
        ImageReader::new(Cursor::new(img_bytes))
            .with_guessed_format()
            .map_err(|e| ConvertError::Decode(image::ImageError::IoError(e)))?
            .decode()
            .map_err(ConvertError::Decode)
    }

    /// Apply the resize plan. Returns the image untouched when the plan
    /// resolves to a no-op or to the image's current size.
    fn resize(&self, img: DynamicImage, plan: &ResizePlan) -> DynamicImage {
        let (orig_w, orig_h) = img.dimensions();
        let resolved = resolve_dimensions(orig_w, orig_h, plan);
        match concrete_size(orig_w, orig_h, resolved) {
            Some((w, h)) if (w, h) != (orig_w, orig_h) => {
                img.resize_exact(w, h, FilterType::Lanczos3)
            }
            _ => img,
        }
    }

    fn encode(&self, img: &DynamicImage, format: OutputFormat) -> Result<Vec<u8>, ConvertError> {
        let (w, h) = img.dimensions();

        match format {
            OutputFormat::Webp { quality } => {
                let rgba = img.to_rgba8();
                let encoded = webp::Encoder::from_rgba(&rgba, w, h).encode(quality as f32);
                Ok(encoded.to_vec())
            }
            OutputFormat::Avif { quality } => {
                let mut out = Vec::new();
                let encoder = AvifEncoder::new_with_speed_quality(&mut out, self.avif_speed, quality);
                DynamicImage::ImageRgba8(img.to_rgba8())
                    .write_with_encoder(encoder)
                    .map_err(|e| ConvertError::Encode(format!("AVIF encode failed: {e}")))?;
                Ok(out)
            }
            OutputFormat::Jpeg { quality } => {
                let rgb = img.to_rgb8();
                let mut out = Vec::new();
                let mut encoder = JpegEncoder::new_with_quality(Cursor::new(&mut out), quality);
                encoder
                    .encode(rgb.as_raw(), w, h, ExtendedColorType::Rgb8)
                    .map_err(|e| ConvertError::Encode(format!("JPEG encode failed: {e}")))?;
                Ok(out)
            }
            OutputFormat::Png { quality } => {
                let rgba = img.to_rgba8();
                let mut out = Vec::new();
                let encoder = PngEncoder::new_with_quality(
                    Cursor::new(&mut out),
                    png_compression(quality),
                    PngFilterType::Adaptive,
                );
                encoder
                    .write_image(rgba.as_raw(), w, h, ExtendedColorType::Rgba8)
                    .map_err(|e| ConvertError::Encode(format!("PNG encode failed: {e}")))?;
                Ok(out)
            }
            OutputFormat::Gif => {
                let mut out = Vec::new();
                DynamicImage::ImageRgba8(img.to_rgba8())
                    .write_to(&mut Cursor::new(&mut out), ImageFormat::Gif)
                    .map_err(|e| ConvertError::Encode(format!("GIF encode failed: {e}")))?;
                Ok(out)
            }
        }
    }
}

impl ImageProcessor for ImageRsProcessor {
    fn convert(&self, img_bytes: &[u8], opts: &ConvertOptions) -> Result<Vec<u8>, ConvertError> {
        let img = self.decode(img_bytes)?;
        let img = self.resize(img, &opts.resize);
        self.encode(&img, opts.format)
    }
}

/// PNG has no visual quality: bucket the 1–100 value into the
/// encoder's compression effort levels.
fn png_compression(quality: u8) -> CompressionType {
    match quality {
        0..=33 => CompressionType::Fast,
        34..=66 => CompressionType::Default,
        _ => CompressionType::Best,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::dimensions::{ResizeMode, ResizePlan};
    use image::{ImageBuffer, Rgba};
    use std::io::Cursor;

    fn make_png(w: u32, h: u32) -> Vec<u8> {
        let img: ImageBuffer<Rgba<u8>, _> = ImageBuffer::from_fn(w, h, |x, y| {
            if (x + y) % 2 == 0 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 255, 0, 255])
            }
        });
        let mut cur = Cursor::new(Vec::new());
        image::write_buffer_with_format(
            &mut cur,
            img.as_raw(),
            w,
            h,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .expect("encode png");
        cur.into_inner()
    }

    fn opts(format: OutputFormat, resize: ResizePlan) -> ConvertOptions {
        ConvertOptions { format, resize }
    }

    fn pixel_plan(w: Option<u32>, h: Option<u32>) -> ResizePlan {
        ResizePlan {
            mode: ResizeMode::Pixels,
            width: w,
            height: h,
            keep_aspect_ratio: false,
            keep_original_resolution: false,
        }
    }

    #[test]
    fn percentage_resize_to_jpeg_halves_both_axes() {
        let p = ImageRsProcessor::default();
        let png = make_png(200, 100);

        let plan = ResizePlan {
            mode: ResizeMode::Percentage,
            width: Some(50),
            height: None,
            keep_aspect_ratio: true,
            keep_original_resolution: false,
        };
        let out = p
            .convert(&png, &opts(OutputFormat::Jpeg { quality: 80 }, plan))
            .expect("convert ok");

        assert_eq!(&out[..3], &[0xFF, 0xD8, 0xFF]);
        let decoded = image::load_from_memory(&out).expect("decode jpeg");
        assert_eq!(decoded.dimensions(), (100, 50));
    }

    #[test]
    fn keep_original_resolution_preserves_dimensions() {
        let p = ImageRsProcessor::default();
        let png = make_png(120, 80);

        let mut plan = pixel_plan(Some(10), Some(10));
        plan.keep_original_resolution = true;

        let out = p
            .convert(&png, &opts(OutputFormat::Png { quality: 50 }, plan))
            .expect("convert ok");
        let decoded = image::load_from_memory(&out).expect("decode png");
        assert_eq!(decoded.dimensions(), (120, 80));
    }

    #[test]
    fn pixel_mode_single_dimension_derives_other_from_aspect() {
        let p = ImageRsProcessor::default();
        let png = make_png(128, 64);

        let out = p
            .convert(
                &png,
                &opts(OutputFormat::Webp { quality: 80 }, pixel_plan(Some(64), None)),
            )
            .expect("convert ok");

        assert_eq!(&out[..4], b"RIFF");
        assert_eq!(&out[8..12], b"WEBP");
        let decoded = image::load_from_memory(&out).expect("decode webp");
        assert_eq!(decoded.dimensions(), (64, 32));
    }

    #[test]
    fn pixel_mode_both_dimensions_resizes_exactly() {
        let p = ImageRsProcessor::default();
        let png = make_png(100, 100);

        let out = p
            .convert(
                &png,
                &opts(OutputFormat::Png { quality: 90 }, pixel_plan(Some(50), Some(80))),
            )
            .expect("convert ok");
        let decoded = image::load_from_memory(&out).expect("decode png");
        assert_eq!(decoded.dimensions(), (50, 80));
    }

    #[test]
    fn zero_dimensions_mean_no_resize() {
        let p = ImageRsProcessor::default();
        let png = make_png(33, 17);

        let out = p
            .convert(
                &png,
                &opts(OutputFormat::Gif, pixel_plan(Some(0), Some(0))),
            )
            .expect("convert ok");

        assert_eq!(&out[..6], b"GIF89a");
        let decoded = image::load_from_memory(&out).expect("decode gif");
        assert_eq!(decoded.dimensions(), (33, 17));
    }

    #[test]
    fn avif_output_carries_avif_brand() {
        // Fastest encoder speed: the test only cares about the container.
        let p = ImageRsProcessor::new(10);
        let png = make_png(16, 16);

        let out = p
            .convert(
                &png,
                &opts(OutputFormat::Avif { quality: 50 }, pixel_plan(None, None)),
            )
            .expect("convert ok");

        assert!(out.len() > 12);
        assert_eq!(&out[4..8], b"ftyp");
        assert_eq!(&out[8..12], b"avif");
    }

    #[test]
    fn corrupt_payload_is_a_decode_error() {
        let p = ImageRsProcessor::default();
        let err = p
            .convert(
                b"definitely not an image",
                &opts(OutputFormat::Webp { quality: 80 }, pixel_plan(None, None)),
            )
            .unwrap_err();
        assert!(matches!(err, ConvertError::Decode(_)), "got: {err:?}");
    }

    #[test]
    fn truncated_png_is_a_decode_error() {
        let p = ImageRsProcessor::default();
        let mut png = make_png(64, 64);
        png.truncate(32);

        let err = p
            .convert(
                &png,
                &opts(OutputFormat::Jpeg { quality: 80 }, pixel_plan(None, None)),
            )
            .unwrap_err();
        assert!(matches!(err, ConvertError::Decode(_)), "got: {err:?}");
    }

    #[test]
    fn webp_input_decodes_and_reencodes() {
        let p = ImageRsProcessor::default();
        let png = make_png(40, 20);
        let webp_bytes = p
            .convert(
                &png,
                &opts(OutputFormat::Webp { quality: 90 }, pixel_plan(None, None)),
            )
            .expect("png to webp");

        let out = p
            .convert(
                &webp_bytes,
                &opts(OutputFormat::Png { quality: 50 }, pixel_plan(Some(20), None)),
            )
            .expect("webp to png");
        let decoded = image::load_from_memory(&out).expect("decode png");
        assert_eq!(decoded.dimensions(), (20, 10));
    }

    #[test]
    fn png_compression_buckets_cover_full_range() {
        assert!(matches!(png_compression(1), CompressionType::Fast));
        assert!(matches!(png_compression(33), CompressionType::Fast));
        assert!(matches!(png_compression(34), CompressionType::Default));
        assert!(matches!(png_compression(66), CompressionType::Default));
        assert!(matches!(png_compression(67), CompressionType::Best));
        assert!(matches!(png_compression(100), CompressionType::Best));
    }
}
