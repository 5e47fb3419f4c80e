// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the fotoapp-imaging crate: catalog filters and
// per-channel histogram equalization on a synthetic photo-sized image.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use image::{DynamicImage, Rgb, RgbImage};

use fotoapp_core::FilterKind;
use fotoapp_imaging::ImageProcessor;

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// 320x240 RGB gradient with a bright square in the middle, so filters and
/// equalization both have real structure to work on.
fn synthetic_photo() -> DynamicImage {
    let (width, height) = (320u32, 240u32);
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        if (120..200).contains(&x) && (80..160).contains(&y) {
            Rgb([240, 235, 220])
        } else {
            Rgb([(x / 2) as u8, (y / 2) as u8, ((x + y) / 4) as u8])
        }
    }))
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// The 5x5 BLUR kernel is the most expensive entry; SHARPEN stands in for the
/// 3x3 ones.
fn bench_filters(c: &mut Criterion) {
    let photo = synthetic_photo();
    for kind in [FilterKind::Blur, FilterKind::Sharpen] {
        c.bench_function(&format!("filter {} (320x240)", kind), |b| {
            b.iter(|| {
                let out = ImageProcessor::from_dynamic(black_box(photo.clone())).filter(kind);
                black_box(out.into_dynamic());
            });
        });
    }
}

fn bench_equalize(c: &mut Criterion) {
    let photo = synthetic_photo();
    c.bench_function("equalize rgb (320x240)", |b| {
        b.iter(|| {
            let out = ImageProcessor::from_dynamic(black_box(photo.clone())).equalize();
            black_box(out.into_dynamic());
        });
    });
}

criterion_group!(benches, bench_filters, bench_equalize);
criterion_main!(benches);
