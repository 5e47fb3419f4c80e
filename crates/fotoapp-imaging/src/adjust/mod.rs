// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Intensity adjustments — per-channel histogram equalization and global
// threshold binarization.

pub mod histogram;
pub mod threshold;

pub use histogram::{equalize_channel, equalize_rgb};
pub use threshold::{Binarized, binarize, binarize_with_edges, grayscale};
