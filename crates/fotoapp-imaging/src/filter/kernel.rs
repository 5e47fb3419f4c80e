// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Integer convolution kernels with a divisor and an offset.

use image::{ImageBuffer, Pixel};
use imageproc::filter::Kernel as Correlation;

/// A square convolution kernel.
///
/// Each output channel is `sum(weight * neighbour) / scale + offset`, rounded
/// and clamped to 0..=255. The first weight row is applied to the row below
/// the target pixel and the last to the row above. Pixels closer than the
/// kernel radius to an edge are copied through unchanged, and an image smaller
/// than the kernel is returned as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    size: u32,
    weights: &'static [i32],
    scale: i32,
    offset: i32,
}

impl Kernel {
    /// `weights` is row-major and must hold `size * size` entries; `size`
    /// must be odd and `scale` non-zero.
    pub const fn new(size: u32, weights: &'static [i32], scale: i32, offset: i32) -> Self {
        assert!(size % 2 == 1, "kernel size must be odd");
        assert!(weights.len() == (size * size) as usize, "kernel weights must be size * size");
        assert!(scale != 0, "kernel scale must be non-zero");
        Self {
            size,
            weights,
            scale,
            offset,
        }
    }

    /// Side length of the kernel.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Convolve every channel of `src` with this kernel, returning a new buffer.
    pub fn apply<P>(&self, src: &ImageBuffer<P, Vec<u8>>) -> ImageBuffer<P, Vec<u8>>
    where
        P: Pixel<Subpixel = u8>,
    {
        let (width, height) = src.dimensions();
        if width < self.size || height < self.size {
            return src.clone();
        }

        // imageproc correlates top row against top row; ours reads bottom-up.
        let flipped: Vec<i32> = self
            .weights
            .chunks(self.size as usize)
            .rev()
            .flatten()
            .copied()
            .collect();
        let mut out: ImageBuffer<P, Vec<u8>> = Correlation::new(&flipped, self.size, self.size)
            .filter(src, |channel: &mut u8, sum: i32| *channel = self.finish(sum));

        let radius = self.size / 2;
        for y in 0..height {
            let frame_row = y < radius || y >= height - radius;
            for x in 0..width {
                if frame_row || x < radius || x >= width - radius {
                    out.put_pixel(x, y, *src.get_pixel(x, y));
                }
            }
        }
        out
    }

    fn finish(&self, sum: i32) -> u8 {
        let value = sum as f32 / self.scale as f32 + self.offset as f32;
        value.round().clamp(0.0, 255.0) as u8
    }
}
