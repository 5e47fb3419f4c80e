// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Histogram equalization, one channel at a time.

use image::{GrayImage, Luma, Rgb, RgbImage};
use imageproc::stats::histogram;
use tracing::debug;

/// Equalize every channel of an RGB image independently and merge the
/// results back in the original channel order.
pub fn equalize_rgb(image: &RgbImage) -> RgbImage {
    let [red, green, blue] = split_channels(image);
    let equalized = [
        equalize_channel(&red),
        equalize_channel(&green),
        equalize_channel(&blue),
    ];
    merge_channels(&equalized)
}

/// Equalize the intensity histogram of a single channel.
///
/// Each intensity `v` maps to `round((cdf(v) - cdf_min) * 255 / (total - cdf_min))`,
/// where `cdf_min` is the population of the darkest occupied bin. A channel
/// with a single occupied bin is returned unchanged.
pub fn equalize_channel(channel: &GrayImage) -> GrayImage {
    let counts = histogram(channel).channels[0];
    let lut = equalization_lut(&counts);

    let mut out = channel.clone();
    for pixel in out.pixels_mut() {
        pixel.0[0] = lut[usize::from(pixel.0[0])];
    }
    out
}

/// Split an RGB image into its three planes.
pub fn split_channels(image: &RgbImage) -> [GrayImage; 3] {
    let (width, height) = image.dimensions();
    std::array::from_fn(|c| {
        GrayImage::from_fn(width, height, |x, y| Luma([image.get_pixel(x, y).0[c]]))
    })
}

/// Merge three equally sized planes into one RGB image.
pub fn merge_channels(channels: &[GrayImage; 3]) -> RgbImage {
    let (width, height) = channels[0].dimensions();
    RgbImage::from_fn(width, height, |x, y| {
        Rgb(std::array::from_fn(|c| channels[c].get_pixel(x, y).0[0]))
    })
}

fn equalization_lut(counts: &[u32; 256]) -> [u8; 256] {
    let identity: [u8; 256] = std::array::from_fn(|v| v as u8);

    let total: u64 = counts.iter().map(|&n| u64::from(n)).sum();
    let Some(first) = counts.iter().position(|&n| n > 0) else {
        return identity;
    };
    let cdf_min = u64::from(counts[first]);
    if cdf_min == total {
        debug!(value = first, "Single-valued channel left unchanged");
        return identity;
    }

    let scale = 255.0 / (total - cdf_min) as f64;
    let mut lut = [0u8; 256];
    let mut cdf = 0u64;
    for (value, &count) in counts.iter().enumerate() {
        cdf += u64::from(count);
        lut[value] = (cdf.saturating_sub(cdf_min) as f64 * scale).round() as u8;
    }
    lut
}
