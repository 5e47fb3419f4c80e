// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The filter catalog: each `FilterKind` maps to a fixed convolution kernel.

pub mod kernel;

pub use kernel::Kernel;

use fotoapp_core::FilterKind;

#[rustfmt::skip]
const BLUR: Kernel = Kernel::new(5, &[
    1, 1, 1, 1, 1,
    1, 0, 0, 0, 1,
    1, 0, 0, 0, 1,
    1, 0, 0, 0, 1,
    1, 1, 1, 1, 1,
], 16, 0);

#[rustfmt::skip]
const CONTOUR: Kernel = Kernel::new(3, &[
    -1, -1, -1,
    -1,  8, -1,
    -1, -1, -1,
], 1, 255);

#[rustfmt::skip]
const DETAIL: Kernel = Kernel::new(3, &[
     0, -1,  0,
    -1, 10, -1,
     0, -1,  0,
], 6, 0);

#[rustfmt::skip]
const EDGE_ENHANCE: Kernel = Kernel::new(3, &[
    -1, -1, -1,
    -1, 10, -1,
    -1, -1, -1,
], 2, 0);

#[rustfmt::skip]
const EDGE_ENHANCE_MORE: Kernel = Kernel::new(3, &[
    -1, -1, -1,
    -1,  9, -1,
    -1, -1, -1,
], 1, 0);

#[rustfmt::skip]
const EMBOSS: Kernel = Kernel::new(3, &[
    -1, 0, 0,
     0, 1, 0,
     0, 0, 0,
], 1, 128);

#[rustfmt::skip]
const FIND_EDGES: Kernel = Kernel::new(3, &[
    -1, -1, -1,
    -1,  8, -1,
    -1, -1, -1,
], 1, 0);

#[rustfmt::skip]
const SHARPEN: Kernel = Kernel::new(3, &[
    -2, -2, -2,
    -2, 32, -2,
    -2, -2, -2,
], 16, 0);

#[rustfmt::skip]
const SMOOTH: Kernel = Kernel::new(3, &[
    1, 1, 1,
    1, 5, 1,
    1, 1, 1,
], 13, 0);

/// Look up the kernel for a catalog entry.
pub fn kernel_for(kind: FilterKind) -> Kernel {
    match kind {
        FilterKind::Blur => BLUR,
        FilterKind::Contour => CONTOUR,
        FilterKind::Detail => DETAIL,
        FilterKind::EdgeEnhance => EDGE_ENHANCE,
        FilterKind::EdgeEnhanceMore => EDGE_ENHANCE_MORE,
        FilterKind::Emboss => EMBOSS,
        FilterKind::FindEdges => FIND_EDGES,
        FilterKind::Sharpen => SHARPEN,
        FilterKind::Smooth => SMOOTH,
    }
}
