//! Resampling a planned source region into an output canvas.
//!
//! Executes a [`RenderPlan`]: crop the consumed source region, scale it
//! with bicubic (Catmull-Rom) interpolation, then clip the canvas window
//! out of the scaled image. The input buffer is read-only throughout; the
//! canvas is written once and handed to the encoder by value.

use image::imageops::FilterType;
use image::{DynamicImage, RgbImage};

use crate::error::{FitError, FitResult};
use crate::geometry::{RenderPlan, Size};

/// Output resolution metadata for all canvases, in dots per inch.
pub const CANVAS_DPI: u16 = 72;

/// Largest canvas the resampler will allocate, in RGB bytes.
///
/// Pathologically large plans fail with
/// [`ResourceExhaustion`](FitError::ResourceExhaustion) before any
/// allocation; callers wanting stricter limits enforce them upstream.
const MAX_CANVAS_BYTES: u64 = 1 << 31;

const RGB_BYTES: u64 = 3;

fn check_pixel_budget(size: Size) -> FitResult<()> {
    let bytes = size.width as u64 * size.height as u64 * RGB_BYTES;
    if bytes > MAX_CANVAS_BYTES {
        return Err(FitError::ResourceExhaustion {
            width: size.width,
            height: size.height,
        });
    }
    Ok(())
}

/// Resample the plan's source region into a freshly allocated canvas.
///
/// Cover plans overshoot the canvas on one axis; the `offset` window clip
/// here is what realizes the centered crop.
pub fn render(source: &DynamicImage, plan: &RenderPlan) -> FitResult<RgbImage> {
    // The scaled intermediate is the largest buffer this call creates
    // (scale_to ≥ canvas on both axes).
    check_pixel_budget(plan.scale_to)?;

    let r = plan.source_rect;
    let scaled = if r.is_full(source.width(), source.height()) {
        source.resize_exact(plan.scale_to.width, plan.scale_to.height, FilterType::CatmullRom)
    } else {
        source
            .crop_imm(r.x, r.y, r.width, r.height)
            .resize_exact(plan.scale_to.width, plan.scale_to.height, FilterType::CatmullRom)
    };

    let canvas = if plan.fills_canvas_exactly() {
        scaled.into_rgb8()
    } else {
        scaled
            .crop_imm(
                plan.offset.0,
                plan.offset.1,
                plan.canvas.width,
                plan.canvas.height,
            )
            .into_rgb8()
    };
    Ok(canvas)
}
