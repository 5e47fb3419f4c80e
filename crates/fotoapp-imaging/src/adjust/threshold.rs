// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global threshold binarization followed by edge detection.

use fotoapp_core::FilterKind;
use image::{DynamicImage, GrayImage, Luma, Rgb};
use imageproc::map::map_colors;
use tracing::debug;

use crate::filter;

/// Output of [`binarize_with_edges`].
#[derive(Debug, Clone)]
pub struct Binarized {
    /// The two-level image (0 or 255 only).
    pub binary: GrayImage,
    /// `FIND_EDGES` run over `binary`.
    pub edges: GrayImage,
}

/// ITU-R 601 luma in 16.16 fixed point, rounded to nearest.
fn luma_601(Rgb([r, g, b]): Rgb<u8>) -> Luma<u8> {
    let weighted = u32::from(r) * 19_595 + u32::from(g) * 38_470 + u32::from(b) * 7_471;
    Luma([((weighted + 0x8000) >> 16) as u8])
}

/// Convert `image` to 8-bit grayscale with ITU-R 601 weights
/// (`0.299 R + 0.587 G + 0.114 B`). Grayscale input is returned unchanged and
/// alpha is ignored.
pub fn grayscale(image: &DynamicImage) -> GrayImage {
    match image {
        DynamicImage::ImageLuma8(gray) => gray.clone(),
        other => map_colors(&other.to_rgb8(), luma_601),
    }
}

/// Map every pixel to 255 if its intensity is strictly greater than
/// `threshold`, else 0.
///
/// Any `i32` is accepted: negative thresholds give an all-white image and
/// thresholds of 255 or more an all-black one.
pub fn binarize(gray: &GrayImage, threshold: i32) -> GrayImage {
    let mut out = gray.clone();
    for pixel in out.pixels_mut() {
        pixel.0[0] = if i32::from(pixel.0[0]) > threshold { 255 } else { 0 };
    }
    out
}

/// Grayscale-convert `image`, binarize it at `threshold`, then detect the
/// edges of the binary image.
pub fn binarize_with_edges(image: &DynamicImage, threshold: i32) -> Binarized {
    let gray = grayscale(image);
    let binary = binarize(&gray, threshold);
    let edges = filter::kernel_for(FilterKind::FindEdges).apply(&binary);

    let white = binary.pixels().filter(|p| p.0[0] == 255).count();
    debug!(
        threshold,
        white,
        total = binary.as_raw().len(),
        "Binarization complete"
    );

    Binarized { binary, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    fn values(image: &GrayImage) -> Vec<u8> {
        image.pixels().map(|p| p.0[0]).collect()
    }

    #[test]
    fn two_by_two_example() {
        let gray = GrayImage::from_raw(2, 2, vec![10, 200, 128, 255]).unwrap();
        assert_eq!(values(&binarize(&gray, 127)), vec![0, 255, 255, 255]);
    }

    #[test]
    #[rustfmt::skip]
    fn grayscale_uses_601_weights() {
        let pixels = RgbImage::from_raw(4, 1, vec![
            0, 255, 0,
            255, 0, 0,
            0, 0, 255,
            255, 255, 255,
        ])
        .unwrap();
        let gray = grayscale(&DynamicImage::ImageRgb8(pixels));
        assert_eq!(values(&gray), vec![150, 76, 29, 255]);
    }

    #[test]
    fn pure_green_stays_below_160() {
        let green = DynamicImage::ImageRgb8(RgbImage::from_pixel(3, 3, Rgb([0, 255, 0])));
        let result = binarize_with_edges(&green, 160);
        assert!(result.binary.pixels().all(|p| p.0[0] == 0));
        let result = binarize_with_edges(&green, 149);
        assert!(result.binary.pixels().all(|p| p.0[0] == 255));
    }

    #[test]
    fn grayscale_input_passes_through() {
        let gray = GrayImage::from_raw(3, 1, vec![0, 77, 255]).unwrap();
        assert_eq!(grayscale(&DynamicImage::ImageLuma8(gray.clone())), gray);
    }

    #[test]
    fn threshold_is_strictly_greater_than() {
        let gray = GrayImage::from_raw(3, 1, vec![127, 128, 129]).unwrap();
        assert_eq!(values(&binarize(&gray, 128)), vec![0, 0, 255]);
    }

    #[test]
    fn every_output_pixel_is_zero_or_full() {
        let gray = GrayImage::from_fn(16, 16, |x, y| Luma([(x * 16 + y) as u8]));
        for threshold in [0, 63, 127, 200, 254] {
            let out = binarize(&gray, threshold);
            for (src, dst) in gray.pixels().zip(out.pixels()) {
                let expected = if i32::from(src.0[0]) > threshold { 255 } else { 0 };
                assert_eq!(dst.0[0], expected);
            }
        }
    }

    #[test]
    fn out_of_range_thresholds_degrade_without_panicking() {
        let gray = GrayImage::from_raw(3, 1, vec![0, 128, 255]).unwrap();
        assert_eq!(values(&binarize(&gray, -1)), vec![255, 255, 255]);
        assert_eq!(values(&binarize(&gray, 255)), vec![0, 0, 0]);
        assert_eq!(values(&binarize(&gray, 1_000)), vec![0, 0, 0]);
    }

    #[test]
    fn edges_are_computed_from_the_binary_image() {
        // Left half dark, right half bright: one vertical edge.
        let gray = GrayImage::from_fn(8, 4, |x, _| Luma([if x < 4 { 20 } else { 220 }]));
        let result = binarize_with_edges(&DynamicImage::ImageLuma8(gray), 127);

        assert!(result.binary.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
        // Flat regions away from the boundary have no edge response.
        assert_eq!(result.edges.get_pixel(1, 1).0[0], 0);
        assert_eq!(result.edges.get_pixel(6, 1).0[0], 0);
        // The outer frame is the binary image itself.
        assert_eq!(result.edges.get_pixel(7, 1).0[0], 255);
        // The bright side of the boundary lights up.
        assert_eq!(result.edges.get_pixel(4, 1).0[0], 255);
        assert_ne!(result.edges, result.binary);
    }
}
