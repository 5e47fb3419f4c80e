// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Workbench — the user-facing operations: transform an image, persist the
// result under the output directory, and hand before/after panels to the
// render target.

use std::path::{Path, PathBuf};

use fotoapp_core::error::{FotoError, Result};
use fotoapp_core::{FilterKind, Platform};
use image::{DynamicImage, GrayImage};
use tracing::{info, instrument, warn};

use crate::adjust::binarize_with_edges;
use crate::image::ImageProcessor;
use crate::render::{Panel, RenderTarget};

/// An output image together with the file it was written to.
#[derive(Debug, Clone)]
pub struct SavedImage {
    pub path: PathBuf,
    pub image: DynamicImage,
}

/// File name for a platform-resized image, e.g. `redimensionada_Youtube.jpg`.
pub fn resized_file_name(platform: Platform) -> String {
    format!("redimensionada_{}.jpg", platform.name())
}

/// File name for a filtered image, e.g. `imagen_filtrada_BLUR.jpg`.
pub fn filtered_file_name(kind: FilterKind) -> String {
    format!("imagen_filtrada_{}.jpg", kind.name())
}

/// Runs operations against an explicit output directory and render target.
///
/// The directory must already exist; outputs overwrite files of the same name.
pub struct Workbench<R: RenderTarget> {
    output_dir: PathBuf,
    jpeg_quality: u8,
    target: R,
}

impl<R: RenderTarget> Workbench<R> {
    pub fn new(output_dir: impl Into<PathBuf>, jpeg_quality: u8, target: R) -> Self {
        Self {
            output_dir: output_dir.into(),
            jpeg_quality: jpeg_quality.clamp(1, 100),
            target,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    pub fn into_target(self) -> R {
        self.target
    }

    // -- Resize-for-platform --------------------------------------------------

    /// Stretch `image` to the preset resolution of `platform` and save it as
    /// `redimensionada_{platform}.jpg`.
    ///
    /// An unknown platform name is not an error: a warning is logged, nothing
    /// is written, and `Ok(None)` is returned.
    #[instrument(skip(self, image))]
    pub fn resize_for_platform(
        &mut self,
        image: &DynamicImage,
        platform: &str,
    ) -> Result<Option<SavedImage>> {
        let platform = match platform.parse::<Platform>() {
            Ok(platform) => platform,
            Err(err) => {
                warn!(error = %err, options = %Platform::options(), "Platform not supported");
                return Ok(None);
            }
        };

        let resized = ImageProcessor::from_dynamic(image.clone()).resize_for(platform);
        let title = format!("Resized for {platform}");
        self.target.present(
            &title,
            &[Panel::new("Original", image), Panel::new(&title, resized.as_dynamic())],
        )?;

        let path = self.output_dir.join(resized_file_name(platform));
        resized.save_jpeg(&path, self.jpeg_quality)?;
        info!(
            path = %path.display(),
            width = resized.width(),
            height = resized.height(),
            "Image resized for {}",
            platform
        );

        Ok(Some(SavedImage {
            path,
            image: resized.into_dynamic(),
        }))
    }

    // -- Histogram equalization -----------------------------------------------

    /// Equalize each color channel of `image`. Nothing is written to the
    /// output directory.
    #[instrument(skip(self, image))]
    pub fn equalize(&mut self, image: &DynamicImage) -> Result<DynamicImage> {
        let equalized = ImageProcessor::from_dynamic(image.clone())
            .equalize()
            .into_dynamic();
        self.target.present(
            "Equalized",
            &[Panel::new("Original", image), Panel::new("Equalized", &equalized)],
        )?;
        Ok(equalized)
    }

    // -- Filters --------------------------------------------------------------

    /// Apply the catalog filter called `name` and save the result.
    ///
    /// Fails with `FotoError::UnknownFilter` before touching the disk if
    /// `name` is not in the catalog.
    pub fn apply_filter(&mut self, image: &DynamicImage, name: &str) -> Result<SavedImage> {
        let kind = name.parse::<FilterKind>()?;
        self.apply_filter_kind(image, kind)
    }

    /// Apply one catalog filter and save it as `imagen_filtrada_{FILTER}.jpg`.
    #[instrument(skip(self, image), fields(filter = kind.name()))]
    pub fn apply_filter_kind(&mut self, image: &DynamicImage, kind: FilterKind) -> Result<SavedImage> {
        let filtered = ImageProcessor::from_dynamic(image.clone()).filter(kind);
        self.target
            .present(kind.name(), &[Panel::new(kind.name(), filtered.as_dynamic())])?;

        let path = self.output_dir.join(filtered_file_name(kind));
        filtered.save_jpeg(&path, self.jpeg_quality)?;
        info!(path = %path.display(), "Filtered image saved");

        Ok(SavedImage {
            path,
            image: filtered.into_dynamic(),
        })
    }

    /// Apply every catalog filter to the same source, in catalog order.
    ///
    /// A failing filter is logged and does not stop the rest; the outcome of
    /// each entry is returned next to its kind.
    pub fn apply_all_filters(
        &mut self,
        image: &DynamicImage,
    ) -> Vec<(FilterKind, Result<SavedImage>)> {
        info!(count = FilterKind::CATALOG.len(), "Applying every filter");
        FilterKind::CATALOG
            .into_iter()
            .map(|kind| {
                let outcome = self.apply_filter_kind(image, kind);
                if let Err(err) = &outcome {
                    warn!(filter = kind.name(), error = %err, "Filter failed");
                }
                (kind, outcome)
            })
            .collect()
    }

    // -- Binarization ---------------------------------------------------------

    /// Binarize `image` at `threshold` and return the binary image.
    ///
    /// The render target receives the original next to the edges of the
    /// binary image, not the binary image itself.
    #[instrument(skip(self, image))]
    pub fn binarize(&mut self, image: &DynamicImage, threshold: i32) -> Result<GrayImage> {
        let result = binarize_with_edges(image, threshold);
        let edges = DynamicImage::ImageLuma8(result.edges);
        self.target.present(
            "Find Edges on binarized image",
            &[
                Panel::new("Original", image),
                Panel::new("Find Edges on binarized image", &edges),
            ],
        )?;
        Ok(result.binary)
    }
}

impl Workbench<Box<dyn RenderTarget>> {
    /// Convenience for callers choosing the target at runtime.
    pub fn boxed(
        output_dir: impl Into<PathBuf>,
        jpeg_quality: u8,
        target: Box<dyn RenderTarget>,
    ) -> Self {
        Self::new(output_dir, jpeg_quality, target)
    }
}

impl<R: RenderTarget> std::fmt::Debug for Workbench<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workbench")
            .field("output_dir", &self.output_dir)
            .field("jpeg_quality", &self.jpeg_quality)
            .finish_non_exhaustive()
    }
}
