// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image processor — exact resize, per-channel histogram equalization, and
// catalog filters. Operates on in-memory images using the `image` and
// `imageproc` crates.

use fotoapp_core::error::FotoError;
use fotoapp_core::{FilterKind, Platform};
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use tracing::{debug, info, instrument};

use crate::adjust::equalize_rgb;
use crate::filter;

/// Image processing pipeline operating on a single in-memory image.
///
/// All operations are non-destructive: each method consumes `self` and returns a
/// new `ImageProcessor` wrapping a freshly allocated image, enabling method
/// chaining.
///
/// ```ignore
/// let jpeg = ImageProcessor::from_bytes(&body)?
///     .resize_for(Platform::Instagram)
///     .filter(FilterKind::Sharpen)
///     .to_jpeg_bytes(90)?;
/// ```
pub struct ImageProcessor {
    /// The current working image.
    image: DynamicImage,
}

impl ImageProcessor {
    // -- Construction ---------------------------------------------------------

    /// Create a processor from raw encoded bytes (JPEG, PNG, etc.). The format
    /// is sniffed from the content.
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self, FotoError> {
        let img = image::load_from_memory(data)
            .map_err(|err| FotoError::Decode(format!("failed to decode image: {}", err)))?;
        debug!(
            width = img.width(),
            height = img.height(),
            color = ?img.color(),
            "Image decoded from bytes"
        );
        Ok(Self { image: img })
    }

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    /// Current image width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Current image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrow the underlying `DynamicImage`.
    pub fn as_dynamic(&self) -> &DynamicImage {
        &self.image
    }

    /// Consume the processor and return the underlying `DynamicImage`.
    pub fn into_dynamic(self) -> DynamicImage {
        self.image
    }

    // -- Transformations (consume self, return new Self) -----------------------

    /// Resize the image to exactly `width` x `height`, ignoring aspect ratio.
    /// Uses bicubic (Catmull-Rom) resampling.
    #[instrument(skip(self))]
    pub fn resize_exact(self, width: u32, height: u32) -> Self {
        info!(
            from_w = self.image.width(),
            from_h = self.image.height(),
            width,
            height,
            "Resizing image"
        );
        let resized = self
            .image
            .resize_exact(width, height, FilterType::CatmullRom);
        Self { image: resized }
    }

    /// Stretch the image to a platform's preset resolution.
    pub fn resize_for(self, platform: Platform) -> Self {
        let (width, height) = platform.dimensions();
        self.resize_exact(width, height)
    }

    /// Equalize the histogram of each RGB channel independently.
    ///
    /// The image is first converted to three-channel RGB; alpha, if any, is
    /// dropped.
    #[instrument(skip(self))]
    pub fn equalize(self) -> Self {
        info!("Equalizing color histogram");
        let rgb = self.image.to_rgb8();
        Self {
            image: DynamicImage::ImageRgb8(equalize_rgb(&rgb)),
        }
    }

    /// Apply one filter from the catalog.
    ///
    /// Grayscale images are filtered as a single plane; everything else is
    /// filtered as RGB.
    #[instrument(skip(self), fields(filter = kind.name()))]
    pub fn filter(self, kind: FilterKind) -> Self {
        info!("Applying filter");
        let kernel = filter::kernel_for(kind);
        let filtered = match &self.image {
            DynamicImage::ImageLuma8(gray) => DynamicImage::ImageLuma8(kernel.apply(gray)),
            other => DynamicImage::ImageRgb8(kernel.apply(&other.to_rgb8())),
        };
        Self { image: filtered }
    }

    // -- Output ---------------------------------------------------------------

    /// Encode the current image as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>, FotoError> {
        encode_to_format(&self.image, ImageFormat::Png)
    }

    /// Encode the current image as JPEG bytes with the given quality (1-100).
    pub fn to_jpeg_bytes(&self, quality: u8) -> Result<Vec<u8>, FotoError> {
        let mut buffer = Vec::new();
        let encoder =
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality.clamp(1, 100));
        let encoded = match &self.image {
            DynamicImage::ImageLuma8(gray) => gray.write_with_encoder(encoder),
            other => other.to_rgb8().write_with_encoder(encoder),
        };
        encoded.map_err(|err| FotoError::Encode(format!("JPEG encoding failed: {}", err)))?;
        Ok(buffer)
    }

    /// Write the image to `path` as a JPEG, overwriting any existing file.
    #[instrument(skip_all, fields(path = %path.as_ref().display(), quality))]
    pub fn save_jpeg(
        &self,
        path: impl AsRef<std::path::Path>,
        quality: u8,
    ) -> Result<(), FotoError> {
        let bytes = self.to_jpeg_bytes(quality)?;
        std::fs::write(path.as_ref(), &bytes)?;
        debug!(bytes = bytes.len(), "JPEG written");
        Ok(())
    }
}

/// Encode a `DynamicImage` into the specified format, returning the raw bytes.
fn encode_to_format(image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>, FotoError> {
    let mut buffer = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buffer);
    image
        .write_to(&mut cursor, format)
        .map_err(|err| FotoError::Encode(format!("image encoding failed: {}", err)))?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 7 % 256) as u8, (y * 11 % 256) as u8, ((x + y) % 256) as u8])
        }))
    }

    #[test]
    fn resize_for_every_platform_matches_preset() {
        let source = gradient(64, 48);
        for platform in Platform::ALL {
            let out = ImageProcessor::from_dynamic(source.clone()).resize_for(platform);
            assert_eq!((out.width(), out.height()), platform.dimensions());
        }
    }

    #[test]
    fn resize_does_not_touch_the_source() {
        let source = gradient(10, 10);
        let _ = ImageProcessor::from_dynamic(source.clone()).resize_exact(3, 7);
        assert_eq!((source.width(), source.height()), (10, 10));
    }

    #[test]
    fn png_bytes_decode_back() {
        let bytes = ImageProcessor::from_dynamic(gradient(5, 4)).to_png_bytes().unwrap();
        let decoded = ImageProcessor::from_bytes(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (5, 4));
        assert_eq!(decoded.as_dynamic(), &gradient(5, 4));
    }

    #[test]
    fn garbage_bytes_are_a_decode_error() {
        let err = ImageProcessor::from_bytes(b"<html>not an image</html>").err();
        assert!(matches!(err, Some(FotoError::Decode(_))));
    }

    #[test]
    fn jpeg_encoding_accepts_alpha_and_grayscale() {
        let rgba = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 4])));
        let bytes = ImageProcessor::from_dynamic(rgba).to_jpeg_bytes(80).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);

        let gray = DynamicImage::ImageLuma8(GrayImage::from_pixel(4, 4, Luma([9])));
        let bytes = ImageProcessor::from_dynamic(gray).to_jpeg_bytes(0).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn filter_keeps_grayscale_single_channel() {
        let gray = DynamicImage::ImageLuma8(GrayImage::from_pixel(6, 6, Luma([40])));
        let out = ImageProcessor::from_dynamic(gray)
            .filter(FilterKind::Sharpen)
            .into_dynamic();
        assert!(out.as_luma8().is_some());
    }

    #[test]
    fn equalize_yields_rgb_with_same_dimensions() {
        let rgba = DynamicImage::ImageRgba8(RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 255])));
        let out = ImageProcessor::from_dynamic(rgba).equalize();
        assert_eq!((out.width(), out.height()), (3, 2));
        assert!(out.as_dynamic().as_rgb8().is_some());
    }
}
