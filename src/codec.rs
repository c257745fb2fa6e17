//! Decode and encode bridge.
//!
//! Decoding accepts any format the `image` crate recognizes. Encoding
//! dispatches over a closed set of output formats — there is no runtime
//! codec search; a format without a match arm fails with
//! [`FitError::EncodingUnavailable`].

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbImage};

use crate::error::{FitError, FitResult};
use crate::render::CANVAS_DPI;

/// Supported output formats.
///
/// Only lossy raster output is modeled; JPEG is the sole member today.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Jpeg,
}

impl OutputFormat {
    /// Conventional file extension for this format.
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
        }
    }
}

/// Decode input bytes into a pixel buffer with known dimensions.
pub fn decode(bytes: &[u8]) -> FitResult<DynamicImage> {
    image::load_from_memory(bytes).map_err(FitError::Decode)
}

/// Encode a canvas at the given quality (0–100, higher = less loss).
pub fn encode(canvas: &RgbImage, format: OutputFormat, quality: u8) -> FitResult<Vec<u8>> {
    match format {
        OutputFormat::Jpeg => encode_jpeg(canvas, quality),
        #[allow(unreachable_patterns)]
        other => Err(FitError::EncodingUnavailable(other)),
    }
}

fn encode_jpeg(canvas: &RgbImage, quality: u8) -> FitResult<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    // The JPEG encoder's quality floor is 1; quality 0 must still produce
    // decodable output.
    let encoder = JpegEncoder::new_with_quality(&mut out, quality.max(1));
    canvas.write_with_encoder(encoder).map_err(FitError::Encode)?;

    let mut bytes = out.into_inner();
    set_jfif_density(&mut bytes, CANVAS_DPI);
    Ok(bytes)
}

/// Rewrite the JFIF APP0 density fields to dots-per-inch units.
///
/// The encoder emits a pixel-aspect-ratio density (units 0, 1×1); output
/// resolution metadata is fixed at [`CANVAS_DPI`] for all canvases.
///
/// Layout after SOI: `FF E0 <len:2> "JFIF\0" <version:2> <units:1>
/// <x-density:2> <y-density:2>`, densities big-endian.
fn set_jfif_density(jpeg: &mut [u8], dpi: u16) {
    if jpeg.len() >= 18
        && jpeg[0..2] == [0xFF, 0xD8]
        && jpeg[2..4] == [0xFF, 0xE0]
        && &jpeg[6..11] == b"JFIF\0"
    {
        jpeg[13] = 1; // dots per inch
        jpeg[14..16].copy_from_slice(&dpi.to_be_bytes());
        jpeg[16..18].copy_from_slice(&dpi.to_be_bytes());
    }
}
