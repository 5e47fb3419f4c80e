// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// fotoapp-imaging — Image operations for Fotoapp.
//
// Provides acquisition (HTTP fetch + decode), an image processor (exact
// resize, per-channel histogram equalization, catalog filters, binarization),
// render targets that replace on-screen plots, and the `Workbench` that ties
// each operation to its output files.

pub mod acquire;
pub mod adjust;
pub mod filter;
pub mod image;
pub mod render;
pub mod workbench;

// Re-export the primary types so callers can use `fotoapp_imaging::Workbench` etc.
pub use crate::acquire::{ByteSource, HttpSource, acquire};
pub use crate::image::processor::ImageProcessor;
pub use crate::render::{ComparisonWriter, NullTarget, Panel, Recorder, RenderTarget};
pub use crate::workbench::{SavedImage, Workbench, filtered_file_name, resized_file_name};
