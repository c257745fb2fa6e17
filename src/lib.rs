//! Cover-crop and width-capped image resizing to canonical output sizes.
//!
//! Fits an arbitrary source raster image into a fixed-size (or
//! width-capped) output canvas without letterboxing or distortion, and
//! re-encodes it as JPEG. Every call is a pure function of its arguments:
//! no shared state, no configuration, buffers scoped to the call.
//!
//! # Modules
//!
//! - [`geometry`] — Resize modes and render-plan computation (pure geometry)
//! - [`render`] — Bicubic resampling of a plan into a canvas
//! - [`codec`] — Decode bridge and closed-set output encoding
//! - [`error`] — Error taxonomy
//!
//! # Example
//!
//! ```no_run
//! let photo = std::fs::read("upload.png")?;
//! let thumb = imgfit::resize_cover(&photo, 400, 400, 85)?;
//! std::fs::write("thumb.jpg", thumb)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod geometry;
pub mod render;

pub use codec::OutputFormat;
pub use error::{FitError, FitResult};
pub use geometry::{GeometryError, Rect, RenderPlan, ResizeMode, Size};
pub use render::CANVAS_DPI;

use tracing::debug;

/// Scale and center-crop an image to exactly `target_width`×`target_height`.
///
/// The source is scaled until it covers the target on both axes and the
/// overflow is clipped symmetrically. Output is always exactly the
/// requested size, encoded as JPEG at `quality` (0–100).
pub fn resize_cover(
    image_bytes: &[u8],
    target_width: u32,
    target_height: u32,
    quality: u8,
) -> FitResult<Vec<u8>> {
    validate_quality(quality)?;
    validate_dimension("target_width", target_width)?;
    validate_dimension("target_height", target_height)?;
    run(
        image_bytes,
        ResizeMode::Cover {
            width: target_width,
            height: target_height,
        },
        quality,
    )
}

/// Scale an image to `scale_width`, capping the output height.
///
/// Output height is derived from the source aspect ratio and never exceeds
/// `max_height`; when the cap binds, the source is cropped vertically from
/// the top. With `allow_stretching` false the output is never wider than
/// the source. Encoded as JPEG at `quality` (0–100).
pub fn resize_width_capped(
    image_bytes: &[u8],
    scale_width: u32,
    max_height: u32,
    allow_stretching: bool,
    quality: u8,
) -> FitResult<Vec<u8>> {
    validate_quality(quality)?;
    validate_dimension("scale_width", scale_width)?;
    validate_dimension("max_height", max_height)?;
    run(
        image_bytes,
        ResizeMode::WidthCapped {
            width: scale_width,
            max_height,
            allow_stretching,
        },
        quality,
    )
}

fn validate_dimension(param: &'static str, value: u32) -> FitResult<()> {
    if value == 0 {
        return Err(FitError::InvalidDimension { param, value });
    }
    Ok(())
}

fn validate_quality(quality: u8) -> FitResult<()> {
    if quality > 100 {
        return Err(FitError::InvalidDimension {
            param: "quality",
            value: quality as u32,
        });
    }
    Ok(())
}

fn run(image_bytes: &[u8], mode: ResizeMode, quality: u8) -> FitResult<Vec<u8>> {
    let source = codec::decode(image_bytes)?;
    let plan = mode.plan(source.width(), source.height())?;
    debug!(
        source_width = source.width(),
        source_height = source.height(),
        canvas_width = plan.canvas.width,
        canvas_height = plan.canvas.height,
        ?mode,
        "planned resize"
    );

    let canvas = render::render(&source, &plan)?;
    let out = codec::encode(&canvas, OutputFormat::Jpeg, quality)?;
    debug!(bytes = out.len(), quality, "encoded output");
    Ok(out)
}
