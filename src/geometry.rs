//! Resize geometry for cover-crop and width-capped output.
//!
//! Computes canvas dimensions, the consumed source region, and the scaled
//! placement from a resize mode and source dimensions. Pure geometry — no
//! pixel operations, no allocations.
//!
//! # Example
//!
//! ```
//! use imgfit::{ResizeMode, Size};
//!
//! let plan = ResizeMode::Cover { width: 400, height: 400 }
//!     .plan(800, 600)
//!     .unwrap();
//!
//! // Output is exactly 400×400; the horizontal overflow is clipped
//! // symmetrically (67px from each side of the scaled image).
//! assert_eq!(plan.canvas, Size::new(400, 400));
//! assert_eq!(plan.scale_to, Size::new(534, 400));
//! assert_eq!(plan.offset, (67, 0));
//! ```

/// How to fit a source image into the output canvas.
///
/// The two variants use deliberately different crop anchoring — `Cover`
/// centers the overflow clip, `WidthCapped` crops the source from the
/// top — and callers may depend on either behavior.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResizeMode {
    /// Scale to fill an exact `width`×`height` canvas, clipping the
    /// overflow symmetrically. Output dimensions always equal the target.
    Cover {
        /// Exact output width in pixels.
        width: u32,
        /// Exact output height in pixels.
        height: u32,
    },

    /// Scale to `width`, deriving the output height from the source aspect
    /// ratio, capped at `max_height`. When the cap binds, the source is
    /// cropped vertically from the top before scaling.
    WidthCapped {
        /// Output width in pixels (clamped to the source width unless
        /// `allow_stretching` is set).
        width: u32,
        /// Upper bound on the output height in pixels.
        max_height: u32,
        /// Permit upscaling beyond the source width.
        allow_stretching: bool,
    },
}

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether this rect covers the full source (no actual crop).
    pub fn is_full(&self, source_w: u32, source_h: u32) -> bool {
        self.x == 0 && self.y == 0 && self.width == source_w && self.height == source_h
    }
}

/// Computed render plan from applying a [`ResizeMode`] to source dimensions.
///
/// Contains everything needed to execute the resize:
/// - Which region of the source to read
/// - What dimensions to scale that region to
/// - The window of the scaled image that lands on the canvas
///
/// Cover mode never pre-crops source pixels: `source_rect` stays the full
/// source, `scale_to` overshoots the canvas on one axis, and `offset` shifts
/// the canvas window into the scaled image. This is equivalent to drawing
/// the whole scaled source at a negative placement and letting the canvas
/// bounds clip it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RenderPlan {
    /// Region of the source consumed by the resampler.
    pub source_rect: Rect,
    /// Dimensions `source_rect` is resampled to.
    pub scale_to: Size,
    /// Top-left of the canvas window within the scaled image.
    pub offset: (u32, u32),
    /// Final output canvas dimensions.
    pub canvas: Size,
}

impl RenderPlan {
    /// The sub-rectangle of the scaled image that lands on the canvas.
    pub fn canvas_window(&self) -> Rect {
        Rect::new(
            self.offset.0,
            self.offset.1,
            self.canvas.width,
            self.canvas.height,
        )
    }

    /// Whether the scaled image maps 1:1 onto the canvas (no clipping).
    pub fn fills_canvas_exactly(&self) -> bool {
        self.offset == (0, 0) && self.scale_to == self.canvas
    }
}

/// Geometry computation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// Source image has zero width or height.
    ZeroSourceDimension,
    /// Target width, height, or height cap is zero.
    ZeroTargetDimension,
}

impl ResizeMode {
    /// Compute the render plan for a source image of the given dimensions.
    pub fn plan(&self, source_w: u32, source_h: u32) -> Result<RenderPlan, GeometryError> {
        if source_w == 0 || source_h == 0 {
            return Err(GeometryError::ZeroSourceDimension);
        }

        match *self {
            Self::Cover { width, height } => {
                if width == 0 || height == 0 {
                    return Err(GeometryError::ZeroTargetDimension);
                }
                Ok(plan_cover(source_w, source_h, width, height))
            }
            Self::WidthCapped {
                width,
                max_height,
                allow_stretching,
            } => {
                if width == 0 || max_height == 0 {
                    return Err(GeometryError::ZeroTargetDimension);
                }
                Ok(plan_width_capped(
                    source_w,
                    source_h,
                    width,
                    max_height,
                    allow_stretching,
                ))
            }
        }
    }
}

/// Cover mode: fill an exact target canvas, clip the overflow centered.
///
/// Rounding is load-bearing: the scaled free dimension rounds up (ceil) and
/// the centered offset rounds down (integer halving), so the scaled image
/// always covers the canvas with no one-pixel gap at either edge.
fn plan_cover(sw: u32, sh: u32, tw: u32, th: u32) -> RenderPlan {
    let source_aspect = sw as f64 / sh as f64;
    let target_aspect = tw as f64 / th as f64;

    let mut scaled_w = tw;
    let mut scaled_h = th;
    let mut offset_x = 0u32;
    let mut offset_y = 0u32;

    if target_aspect > source_aspect {
        // Target is wider: width pins the scale, height overshoots.
        let width_scale = tw as f64 / sw as f64;
        scaled_h = (sh as f64 * width_scale).ceil() as u32;
        offset_y = scaled_h.saturating_sub(th) / 2;
    } else if target_aspect < source_aspect {
        // Target is taller: height pins the scale, width overshoots.
        let height_scale = th as f64 / sh as f64;
        scaled_w = (sw as f64 * height_scale).ceil() as u32;
        offset_x = scaled_w.saturating_sub(tw) / 2;
    }

    RenderPlan {
        source_rect: Rect::new(0, 0, sw, sh),
        scale_to: Size::new(scaled_w, scaled_h),
        offset: (offset_x, offset_y),
        canvas: Size::new(tw, th),
    }
}

/// Width-capped mode: scale to a width, derive the height, cap it.
///
/// When the cap binds, the source is cropped vertically from the top
/// (not centered) before scaling. Fractional heights truncate.
fn plan_width_capped(
    sw: u32,
    sh: u32,
    width: u32,
    max_height: u32,
    allow_stretching: bool,
) -> RenderPlan {
    let scale_width = if allow_stretching { width } else { width.min(sw) };
    let scale_factor = scale_width as f64 / sw as f64;
    let naive_height = sh as f64 * scale_factor;

    let (canvas_height, crop_height) = if naive_height > max_height as f64 {
        // Height budget overflows: keep the cap, crop the source from the
        // top. The branch condition bounds the crop by the source height.
        let crop = ((max_height as f64 / scale_factor) as u32).min(sh);
        (max_height, crop.max(1))
    } else {
        ((naive_height as u32).max(1), sh)
    };

    let canvas = Size::new(scale_width, canvas_height);
    RenderPlan {
        source_rect: Rect::new(0, 0, sw, crop_height),
        scale_to: canvas,
        offset: (0, 0),
        canvas,
    }
}
