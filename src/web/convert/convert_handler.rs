//! # Image Conversion Handler
//!
//! Axum-compatible HTTP endpoint for multipart image conversion
//! requests.
//!
//! ## Features
//! - Accepts `multipart/form-data` with an `image` file field plus the
//!   conversion parameter fields sent by the browser form
//! - Integrates with [`ConvertService`] for decoding, resizing, and
//!   encoding
//! - Streams the converted image back as an attachment, or a structured
//!   JSON error (`{"error": "..."}`)
//!
//! ## Form fields
//! `image` (binary, required), `format`, `quality`, `resizeOption`
//! (`pixels` | `percentage`), `width`, `height`, `keepAspectRatio`
//! (`true`/`false`), `keepOriginalResolution` (`true`/`false`).
//!
//! ## Returns
//! - `200 OK` with the converted bytes, `Content-Type: image/<format>`
//!   and a `Content-Disposition: attachment` filename
//! - `400 BAD REQUEST` for validation failures (no image, unknown
//!   format, malformed field) and undecodable payloads
//! - `500 INTERNAL SERVER ERROR` when encoding fails after a
//!   successful decode
//!
//! ## Example
//! ```rust,ignore
//! use axum::{Router, routing::post, Extension};
//! use std::sync::Arc;
//! use imgconv_web::web::convert::convert_handler::convert_handler;
//!
//! let app = Router::new()
//!     .route("/api/convert", post(convert_handler))
//!     .layer(Extension(convert_service))
//!     .layer(Extension(image_config));
//! ```

use std::sync::Arc;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use axum_extra::extract::Multipart;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::config::image::ImageConfig;
use crate::error::ConvertError;
use crate::image::dimensions::{ResizeMode, ResizePlan};
use crate::image::format::OutputFormat;
use crate::image::processor::ConvertOptions;
use crate::web::convert::converter::ConvertService;

/// JSON error payload returned on every failure path.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Raw form fields as received; validated by [`build_options`].
#[derive(Default)]
struct ConvertForm {
    image: Option<(String, Vec<u8>)>,
    format: Option<String>,
    quality: Option<String>,
    resize_option: Option<String>,
    width: Option<String>,
    height: Option<String>,
    keep_aspect_ratio: Option<String>,
    keep_original_resolution: Option<String>,
}

impl ConvertForm {
    fn set_text(&mut self, name: &str, value: String) {
        match name {
            "format" => self.format = Some(value),
            "quality" => self.quality = Some(value),
            "resizeOption" => self.resize_option = Some(value),
            "width" => self.width = Some(value),
            "height" => self.height = Some(value),
            "keepAspectRatio" => self.keep_aspect_ratio = Some(value),
            "keepOriginalResolution" => self.keep_original_resolution = Some(value),
            // Unknown fields are ignored.
            _ => {}
        }
    }
}

/// Axum handler that converts one uploaded image per request.
pub async fn convert_handler(
    Extension(svc): Extension<Arc<ConvertService>>,
    Extension(image_cfg): Extension<ImageConfig>,
    mut multipart: Multipart,
) -> Response {
    // --- Multipart parsing ---
    let mut form = ConvertForm::default();

    while let Ok(Some(field)) = multipart.next_field().await {
        let Some(name) = field.name().map(|s| s.to_string()) else {
            continue;
        };

        if name == "image" {
            let filename = field
                .file_name()
                .map(|s| s.to_string())
                .unwrap_or_default();
            match field.bytes().await {
                Ok(b) => form.image = Some((filename, b.to_vec())),
                Err(e) => {
                    return error_response(&ConvertError::validation(format!(
                        "read body error: {e}"
                    )));
                }
            }
        } else {
            match field.text().await {
                Ok(v) => form.set_text(&name, v),
                Err(e) => {
                    return error_response(&ConvertError::validation(format!(
                        "read field error: {e}"
                    )));
                }
            }
        }
    }

    // --- Validation ---
    let Some((filename, img_bytes)) = form.image.take() else {
        return error_response(&ConvertError::validation("no image supplied"));
    };

    let opts = match build_options(&form, image_cfg.default_quality) {
        Ok(o) => o,
        Err(e) => return error_response(&e),
    };

    // --- Conversion ---
    match svc.convert(&filename, &img_bytes, &opts) {
        Ok(converted) => {
            info!(
                content_type = converted.content_type,
                in_bytes = img_bytes.len(),
                out_bytes = converted.bytes.len(),
                "image converted"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, converted.content_type.to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", converted.filename),
                    ),
                ],
                converted.bytes,
            )
                .into_response()
        }
        Err(e) => {
            if e.is_client_error() {
                warn!(error = %e, "conversion rejected");
            } else {
                error!(error = %e, "conversion failed");
            }
            error_response(&e)
        }
    }
}

/// Maps the error taxonomy onto HTTP statuses: client-caused failures
/// (validation, decode) → 400, encoder failures → 500.
fn error_response(err: &ConvertError) -> Response {
    let status = if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (
        status,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
        .into_response()
}

/// Validate the text fields and assemble [`ConvertOptions`].
fn build_options(form: &ConvertForm, default_quality: u8) -> Result<ConvertOptions, ConvertError> {
    let format_name = form
        .format
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ConvertError::validation("missing format field"))?;

    let quality = parse_quality(form.quality.as_deref(), default_quality)?;
    let format = OutputFormat::parse(format_name, quality)?;

    let resize = ResizePlan {
        mode: parse_resize_mode(form.resize_option.as_deref())?,
        width: parse_dimension("width", form.width.as_deref())?,
        height: parse_dimension("height", form.height.as_deref())?,
        keep_aspect_ratio: parse_bool(form.keep_aspect_ratio.as_deref()),
        keep_original_resolution: parse_bool(form.keep_original_resolution.as_deref()),
    };

    Ok(ConvertOptions { format, resize })
}

fn parse_quality(value: Option<&str>, default: u8) -> Result<u8, ConvertError> {
    match value.map(str::trim) {
        None | Some("") => Ok(default),
        Some(s) => s
            .parse::<u8>()
            .map_err(|_| ConvertError::validation(format!("invalid quality value \"{s}\""))),
    }
}

fn parse_resize_mode(value: Option<&str>) -> Result<ResizeMode, ConvertError> {
    match value.map(str::trim) {
        None | Some("") | Some("pixels") => Ok(ResizeMode::Pixels),
        Some("percentage") => Ok(ResizeMode::Percentage),
        Some(other) => Err(ConvertError::validation(format!(
            "unsupported resize option \"{other}\""
        ))),
    }
}

/// Missing or empty dimension fields mean "not specified"; anything
/// else must parse as a non-negative integer.
fn parse_dimension(name: &str, value: Option<&str>) -> Result<Option<u32>, ConvertError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s
            .parse::<u32>()
            .map(Some)
            .map_err(|_| ConvertError::validation(format!("invalid {name} value \"{s}\""))),
    }
}

/// Checkbox-style fields arrive as the strings `"true"` / `"false"`.
fn parse_bool(value: Option<&str>) -> bool {
    value.map(|s| s.trim() == "true").unwrap_or(false)
}
