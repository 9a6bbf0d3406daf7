//! Pure calculation functions for output dimensions.
//!
//! Everything here is pure and testable without any I/O or pixel data.
//! The resolver maps a client resize request onto concrete output
//! dimensions; the processor applies the result to a decoded image.

/// How client-supplied width/height values are interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizeMode {
    /// Values are absolute pixel counts.
    Pixels,
    /// Values are percentages of the source image's native size.
    Percentage,
}

/// A resize request as collected from the client form.
///
/// `width`/`height` of `None` or `Some(0)` both mean "not specified";
/// zero is what an empty numeric form field parses to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResizePlan {
    pub mode: ResizeMode,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Derive the unset dimension from the original aspect ratio
    /// (percentage mode only; in pixel mode the encoder already does
    /// this when one dimension is missing).
    pub keep_aspect_ratio: bool,
    /// Skip resizing entirely. Takes precedence over every other field.
    pub keep_original_resolution: bool,
}

impl ResizePlan {
    /// A plan that performs no resize regardless of mode.
    pub fn keep_original() -> Self {
        Self {
            mode: ResizeMode::Pixels,
            width: None,
            height: None,
            keep_aspect_ratio: false,
            keep_original_resolution: true,
        }
    }
}

/// Output dimensions resolved from a [`ResizePlan`].
///
/// Both fields `None` means "no resize step at all". A single `None`
/// means "derive this dimension from the original aspect ratio".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolvedDimensions {
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl ResolvedDimensions {
    /// Returns `true` when no resize should be performed.
    pub fn is_noop(&self) -> bool {
        self.width.is_none() && self.height.is_none()
    }
}

/// Resolve the output dimensions for one conversion.
///
/// Precedence rules:
/// 1. `keep_original_resolution` wins over everything: `(None, None)`.
/// 2. Pixel mode passes specified values through verbatim; the
///    aspect-ratio flag is not applied here.
/// 3. Percentage mode scales against the original size. With aspect
///    lock, a specified width suppresses an independently specified
///    height: the same fraction is applied to both axes. Width
///    deliberately takes priority over height when both are given.
///
/// # Examples
/// ```
/// use imgconv_web::image::dimensions::{resolve_dimensions, ResizeMode, ResizePlan};
///
/// let plan = ResizePlan {
///     mode: ResizeMode::Percentage,
///     width: Some(50),
///     height: None,
///     keep_aspect_ratio: true,
///     keep_original_resolution: false,
/// };
/// let out = resolve_dimensions(200, 100, &plan);
/// assert_eq!((out.width, out.height), (Some(100), Some(50)));
/// ```
pub fn resolve_dimensions(original_w: u32, original_h: u32, plan: &ResizePlan) -> ResolvedDimensions {
    if plan.keep_original_resolution {
        return ResolvedDimensions::default();
    }

    let req_w = plan.width.filter(|w| *w > 0);
    let req_h = plan.height.filter(|h| *h > 0);

    match plan.mode {
        ResizeMode::Pixels => ResolvedDimensions {
            width: req_w,
            height: req_h,
        },
        ResizeMode::Percentage => {
            let mut new_w = req_w.map(|w| scale(original_w, w));
            let mut new_h = if plan.keep_aspect_ratio && new_w.is_some() {
                req_w.map(|w| scale(original_h, w))
            } else {
                None
            };

            if new_h.is_none() {
                if let Some(h) = req_h {
                    new_h = Some(scale(original_h, h));
                    if plan.keep_aspect_ratio && new_w.is_none() {
                        new_w = Some(scale(original_w, h));
                    }
                }
            }

            ResolvedDimensions {
                width: new_w,
                height: new_h,
            }
        }
    }
}

/// Turn a resolved pair into the exact output size, filling a missing
/// dimension from the original aspect ratio.
///
/// Returns `None` when the resolution was a no-op.
pub fn concrete_size(
    original_w: u32,
    original_h: u32,
    resolved: ResolvedDimensions,
) -> Option<(u32, u32)> {
    match (resolved.width, resolved.height) {
        (None, None) => None,
        (Some(w), Some(h)) => Some((w, h)),
        (Some(w), None) => {
            let h = (w as f64 * original_h as f64 / original_w as f64).round() as u32;
            Some((w, h.max(1)))
        }
        (None, Some(h)) => {
            let w = (h as f64 * original_w as f64 / original_h as f64).round() as u32;
            Some((w.max(1), h))
        }
    }
}

/// `round(value * percent / 100)`, floored at one pixel so a tiny
/// percentage of a small image never produces a zero dimension.
fn scale(value: u32, percent: u32) -> u32 {
    ((value as f64 * percent as f64 / 100.0).round() as u32).max(1)
}
