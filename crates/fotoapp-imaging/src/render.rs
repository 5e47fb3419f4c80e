// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Render targets — where before/after panels go once an operation finishes.
//
// Operations never open windows. They hand their panels to a `RenderTarget`,
// and the caller decides whether those become a comparison sheet on disk,
// stay in memory for inspection, or are dropped.

use std::path::PathBuf;

use fotoapp_core::error::{FotoError, Result};
use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use tracing::{debug, info, instrument};

/// One titled image in a side-by-side comparison.
#[derive(Debug, Clone, Copy)]
pub struct Panel<'a> {
    pub title: &'a str,
    pub image: &'a DynamicImage,
}

impl<'a> Panel<'a> {
    pub fn new(title: &'a str, image: &'a DynamicImage) -> Self {
        Self { title, image }
    }
}

/// Sink for the panels an operation wants to show.
pub trait RenderTarget {
    /// Present `panels` left to right under a caption.
    fn present(&mut self, caption: &str, panels: &[Panel<'_>]) -> Result<()>;
}

impl<T: RenderTarget + ?Sized> RenderTarget for Box<T> {
    fn present(&mut self, caption: &str, panels: &[Panel<'_>]) -> Result<()> {
        (**self).present(caption, panels)
    }
}

// -- NullTarget ---------------------------------------------------------------

/// Drops everything it is shown.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullTarget;

impl RenderTarget for NullTarget {
    fn present(&mut self, caption: &str, panels: &[Panel<'_>]) -> Result<()> {
        debug!(caption, panels = panels.len(), "Panels discarded");
        Ok(())
    }
}

// -- Recorder -----------------------------------------------------------------

/// A captured call to [`RenderTarget::present`].
#[derive(Debug, Clone)]
pub struct Sheet {
    pub caption: String,
    pub panels: Vec<(String, DynamicImage)>,
}

/// Keeps copies of every presented panel in memory.
#[derive(Debug, Default)]
pub struct Recorder {
    sheets: Vec<Sheet>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything presented so far, oldest first.
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn into_sheets(self) -> Vec<Sheet> {
        self.sheets
    }
}

impl RenderTarget for Recorder {
    fn present(&mut self, caption: &str, panels: &[Panel<'_>]) -> Result<()> {
        self.sheets.push(Sheet {
            caption: caption.to_string(),
            panels: panels
                .iter()
                .map(|panel| (panel.title.to_string(), panel.image.clone()))
                .collect(),
        });
        Ok(())
    }
}

// -- ComparisonWriter ---------------------------------------------------------

/// Gap around and between panels, in pixels.
const MARGIN: u32 = 16;
/// Panels taller than this are scaled down to it, keeping their aspect ratio.
const MAX_PANEL_HEIGHT: u32 = 480;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const FRAME: Rgb<u8> = Rgb([160, 160, 160]);

/// Composes the panels side by side on a white sheet and writes it as
/// `comparison_<caption>.png` in a directory.
#[derive(Debug, Clone)]
pub struct ComparisonWriter {
    dir: PathBuf,
}

impl ComparisonWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path the sheet for `caption` is written to.
    pub fn sheet_path(&self, caption: &str) -> PathBuf {
        self.dir.join(format!("comparison_{}.png", slug(caption)))
    }
}

impl RenderTarget for ComparisonWriter {
    #[instrument(skip(self, panels), fields(panels = panels.len()))]
    fn present(&mut self, caption: &str, panels: &[Panel<'_>]) -> Result<()> {
        let sheet = compose(panels);
        let path = self.sheet_path(caption);
        sheet.save(&path).map_err(|err| {
            FotoError::Render(format!("failed to write {}: {}", path.display(), err))
        })?;
        info!(
            path = %path.display(),
            titles = ?panels.iter().map(|p| p.title).collect::<Vec<_>>(),
            "Comparison sheet written"
        );
        Ok(())
    }
}

/// Lay the panels out left to right, each framed, on a white canvas.
pub fn compose(panels: &[Panel<'_>]) -> RgbImage {
    let scaled: Vec<RgbImage> = panels.iter().map(|p| fit_height(p.image)).collect();

    let width = MARGIN + scaled.iter().map(|p| p.width() + MARGIN).sum::<u32>();
    let height = 2 * MARGIN + scaled.iter().map(RgbImage::height).max().unwrap_or(0);
    let mut canvas = RgbImage::from_pixel(width, height, BACKGROUND);

    let mut x = MARGIN;
    for panel in &scaled {
        imageops::overlay(&mut canvas, panel, i64::from(x), i64::from(MARGIN));
        if panel.width() > 0 && panel.height() > 0 {
            let frame = Rect::at(x as i32 - 1, MARGIN as i32 - 1)
                .of_size(panel.width() + 2, panel.height() + 2);
            draw_hollow_rect_mut(&mut canvas, frame, FRAME);
        }
        x += panel.width() + MARGIN;
    }
    canvas
}

fn fit_height(image: &DynamicImage) -> RgbImage {
    let (w, h) = (image.width(), image.height());
    if h <= MAX_PANEL_HEIGHT {
        return image.to_rgb8();
    }
    let new_w = (u64::from(w) * u64::from(MAX_PANEL_HEIGHT) / u64::from(h)).max(1) as u32;
    image
        .resize_exact(new_w, MAX_PANEL_HEIGHT, FilterType::Triangle)
        .to_rgb8()
}

/// Lowercase, with every run of non-alphanumerics collapsed to `_`.
fn slug(caption: &str) -> String {
    let mut out = String::with_capacity(caption.len());
    for ch in caption.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() {
        "sheet".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    fn solid(width: u32, height: u32, value: u8) -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([value])))
    }

    #[test]
    fn slug_is_file_name_safe() {
        assert_eq!(slug("Resized for Youtube"), "resized_for_youtube");
        assert_eq!(slug("Filter: EDGE_ENHANCE"), "filter_edge_enhance");
        assert_eq!(slug("***"), "sheet");
    }

    #[test]
    fn compose_places_panels_side_by_side() {
        let left = solid(20, 10, 0);
        let right = solid(30, 40, 50);
        let sheet = compose(&[Panel::new("a", &left), Panel::new("b", &right)]);

        assert_eq!(sheet.dimensions(), (MARGIN * 3 + 50, MARGIN * 2 + 40));
        assert_eq!(sheet.get_pixel(MARGIN + 5, MARGIN + 5), &Rgb([0, 0, 0]));
        assert_eq!(sheet.get_pixel(MARGIN * 2 + 25, MARGIN + 5), &Rgb([50, 50, 50]));
        // Below the short left panel stays background.
        assert_eq!(sheet.get_pixel(MARGIN + 5, MARGIN + 30), &BACKGROUND);
    }

    #[test]
    fn tall_panels_are_scaled_down() {
        let tall = solid(100, MAX_PANEL_HEIGHT * 2, 10);
        let sheet = compose(&[Panel::new("tall", &tall)]);
        assert_eq!(sheet.height(), MAX_PANEL_HEIGHT + 2 * MARGIN);
        assert_eq!(sheet.width(), 50 + 2 * MARGIN);
    }

    #[test]
    fn writer_saves_png_named_after_caption() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = ComparisonWriter::new(dir.path());
        let image = solid(8, 8, 200);

        writer
            .present("Equalized", &[Panel::new("Original", &image), Panel::new("Equalized", &image)])
            .unwrap();

        let path = dir.path().join("comparison_equalized.png");
        assert_eq!(writer.sheet_path("Equalized"), path);
        let written = image::open(&path).unwrap();
        assert_eq!(written.width(), 16 + 3 * MARGIN);
    }

    #[test]
    fn writer_reports_missing_directory_as_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = ComparisonWriter::new(dir.path().join("missing"));
        let image = solid(2, 2, 0);
        let err = writer.present("x", &[Panel::new("x", &image)]).err();
        assert!(matches!(err, Some(FotoError::Render(_))));
    }

    #[test]
    fn recorder_keeps_copies_in_order() {
        let mut recorder = Recorder::new();
        let image = solid(3, 3, 1);
        recorder.present("first", &[Panel::new("one", &image)]).unwrap();
        recorder.present("second", &[]).unwrap();

        let sheets = recorder.into_sheets();
        assert_eq!(sheets.len(), 2);
        assert_eq!(sheets[0].caption, "first");
        assert_eq!(sheets[0].panels[0].0, "one");
        assert_eq!(sheets[0].panels[0].1, image);
        assert!(sheets[1].panels.is_empty());
    }

    #[test]
    fn boxed_targets_forward() {
        let mut target: Box<dyn RenderTarget> = Box::new(NullTarget);
        let image = solid(1, 1, 0);
        assert!(target.present("x", &[Panel::new("x", &image)]).is_ok());
    }
}
