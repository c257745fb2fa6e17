//! Bytes-in, bytes-out coverage of the public resize operations.
//!
//! Fixtures are synthetic PNGs generated in memory; every expectation is
//! verified by decoding the JPEG output rather than inspecting internals.

use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};
use imgfit::{FitError, resize_cover, resize_width_capped};

/// In-memory PNG with enough texture that JPEG quality changes the size.
fn png_fixture(w: u32, h: u32) -> Vec<u8> {
    let img = RgbImage::from_fn(w, h, |x, y| {
        Rgb([
            ((x * 7 + y * 3) % 256) as u8,
            ((x * 13) ^ (y * 5)) as u8,
            ((x + y * 11) % 256) as u8,
        ])
    });
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}

fn decoded_dimensions(jpeg: &[u8]) -> (u32, u32) {
    let img = image::load_from_memory(jpeg).unwrap();
    (img.width(), img.height())
}

// ── Cover mode ──────────────────────────────────────────────────────────

#[test]
fn cover_outputs_exact_target() {
    let src = png_fixture(800, 600);
    let out = resize_cover(&src, 400, 400, 85).unwrap();
    assert_eq!(decoded_dimensions(&out), (400, 400));
}

#[test]
fn cover_thumbnail_from_landscape() {
    let src = png_fixture(1920, 1080);
    let out = resize_cover(&src, 300, 300, 85).unwrap();
    assert_eq!(decoded_dimensions(&out), (300, 300));
}

#[test]
fn cover_upscales_small_source_to_target() {
    let src = png_fixture(50, 40);
    let out = resize_cover(&src, 200, 100, 85).unwrap();
    assert_eq!(decoded_dimensions(&out), (200, 100));
}

#[test]
fn cover_output_is_jpeg() {
    let src = png_fixture(100, 100);
    let out = resize_cover(&src, 50, 50, 85).unwrap();
    assert_eq!(&out[0..3], &[0xFF, 0xD8, 0xFF]);
}

// ── Width-capped mode ───────────────────────────────────────────────────

#[test]
fn width_capped_caps_height() {
    // 500×1000 at width 250: naive height 500 > 300 → capped at 300.
    let src = png_fixture(500, 1000);
    let out = resize_width_capped(&src, 250, 300, false, 85).unwrap();
    assert_eq!(decoded_dimensions(&out), (250, 300));
}

#[test]
fn width_capped_derives_height_within_budget() {
    let src = png_fixture(800, 600);
    let out = resize_width_capped(&src, 400, 1000, false, 85).unwrap();
    assert_eq!(decoded_dimensions(&out), (400, 300));
}

#[test]
fn no_stretch_never_widens_beyond_source() {
    let src = png_fixture(100, 100);
    let out = resize_width_capped(&src, 500, 1000, false, 85).unwrap();
    assert_eq!(decoded_dimensions(&out), (100, 100));
}

#[test]
fn stretching_allowed_upscales() {
    let src = png_fixture(100, 100);
    let out = resize_width_capped(&src, 200, 1000, true, 85).unwrap();
    assert_eq!(decoded_dimensions(&out), (200, 200));
}

#[test]
fn width_capped_crop_keeps_top_of_source() {
    // Top half white, bottom half black. Cropping to the top half must
    // leave the output bright on average.
    let mut img = RgbImage::from_pixel(100, 200, Rgb([255, 255, 255]));
    for y in 100..200 {
        for x in 0..100 {
            img.put_pixel(x, y, Rgb([0, 0, 0]));
        }
    }
    let mut src = Cursor::new(Vec::new());
    img.write_to(&mut src, ImageFormat::Png).unwrap();

    // Width 100, cap 100: naive height 200 → crop to source rows 0..100.
    let out = resize_width_capped(src.get_ref(), 100, 100, false, 95).unwrap();
    let decoded = image::load_from_memory(&out).unwrap().into_rgb8();
    assert_eq!((decoded.width(), decoded.height()), (100, 100));
    let mean: u64 = decoded.pixels().map(|p| p.0[0] as u64).sum::<u64>()
        / (decoded.width() as u64 * decoded.height() as u64);
    assert!(mean > 200, "expected top-anchored crop, mean luma {mean}");
}

// ── Quality ─────────────────────────────────────────────────────────────

#[test]
fn quality_extremes_produce_decodable_output() {
    let src = png_fixture(320, 240);
    for quality in [0, 100] {
        let out = resize_cover(&src, 160, 120, quality).unwrap();
        assert_eq!(decoded_dimensions(&out), (160, 120), "quality {quality}");
    }
}

#[test]
fn higher_quality_is_not_smaller() {
    let src = png_fixture(640, 480);
    let low = resize_cover(&src, 320, 240, 20).unwrap();
    let high = resize_cover(&src, 320, 240, 90).unwrap();
    assert!(
        high.len() >= low.len(),
        "q90 produced {} bytes, q20 produced {}",
        high.len(),
        low.len()
    );
}

// ── Rejection paths ─────────────────────────────────────────────────────

#[test]
fn zero_dimensions_rejected_before_decode() {
    // Garbage bytes prove validation rejects before touching the decoder.
    let garbage = b"not an image";
    assert!(matches!(
        resize_cover(garbage, 0, 100, 85),
        Err(FitError::InvalidDimension {
            param: "target_width",
            ..
        })
    ));
    assert!(matches!(
        resize_cover(garbage, 100, 0, 85),
        Err(FitError::InvalidDimension {
            param: "target_height",
            ..
        })
    ));
    assert!(matches!(
        resize_width_capped(garbage, 0, 100, false, 85),
        Err(FitError::InvalidDimension {
            param: "scale_width",
            ..
        })
    ));
    assert!(matches!(
        resize_width_capped(garbage, 100, 0, false, 85),
        Err(FitError::InvalidDimension {
            param: "max_height",
            ..
        })
    ));
}

#[test]
fn out_of_range_quality_rejected() {
    let src = png_fixture(10, 10);
    assert!(matches!(
        resize_cover(&src, 5, 5, 101),
        Err(FitError::InvalidDimension {
            param: "quality",
            ..
        })
    ));
}

#[test]
fn undecodable_input_surfaces_decode_error() {
    assert!(matches!(
        resize_cover(b"definitely not an image", 100, 100, 85),
        Err(FitError::Decode(_))
    ));
}
