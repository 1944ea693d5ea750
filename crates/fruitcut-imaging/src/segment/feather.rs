// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Edge feathering: soften a hard 0/255 mask into an alpha ramp with a
// fixed-size Gaussian kernel.

use fruitcut_core::config::MAX_FEATHER_RADIUS;
use image::{GrayImage, ImageBuffer, Luma};
use imageproc::filter;
use tracing::instrument;

type Plane = ImageBuffer<Luma<f32>, Vec<f32>>;

/// Per-pixel blend weights in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct AlphaMap {
    weights: Plane,
}

impl AlphaMap {
    /// Normalise an 8-bit mask to `[0, 1]`.
    pub fn from_mask(mask: &GrayImage) -> Self {
        let weights = ImageBuffer::from_fn(mask.width(), mask.height(), |x, y| {
            Luma([mask.get_pixel(x, y).0[0] as f32 / 255.0])
        });
        Self { weights }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.weights.dimensions()
    }

    /// Weight at `(x, y)`. Panics when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.weights.get_pixel(x, y).0[0]
    }
}

/// Feather `mask` by `radius` pixels.
///
/// `radius <= 0` skips blurring and returns the mask thresholded at `> 127`.
/// Otherwise the mask, scaled to `[0, 1]`, is blurred with a
/// `(2 * radius + 1)`-tap Gaussian in both directions and scaled back to
/// `0..=255`, truncating. Radii above [`MAX_FEATHER_RADIUS`] are clamped to it.
#[instrument(skip(mask), fields(width = mask.width(), height = mask.height()))]
pub fn feather_mask(mask: &GrayImage, radius: i32) -> GrayImage {
    if radius <= 0 {
        return GrayImage::from_fn(mask.width(), mask.height(), |x, y| {
            Luma([if mask.get_pixel(x, y).0[0] > 127 { 255 } else { 0 }])
        });
    }
    if mask.width() == 0 || mask.height() == 0 {
        return mask.clone();
    }

    let radius = radius.min(MAX_FEATHER_RADIUS) as u32;
    let kernel = gaussian_kernel(2 * radius as usize + 1);

    // imageproc clamps at the edges, so mirror the border in first and only
    // keep the interior of the result.
    let padded = pad_reflect_101(mask, radius);
    let blurred = filter::separable_filter_equal(&padded, &kernel);

    GrayImage::from_fn(mask.width(), mask.height(), |x, y| {
        let v = blurred.get_pixel(x + radius, y + radius).0[0];
        Luma([(v * 255.0).clamp(0.0, 255.0) as u8])
    })
}

/// Normalised 1-D Gaussian kernel with `size` taps (odd).
///
/// Kernels up to 7 taps use the fixed binomial weights, larger ones derive
/// sigma from the size as `0.3 * ((size - 1) / 2 - 1) + 0.8`.
pub fn gaussian_kernel(size: usize) -> Vec<f32> {
    match size {
        1 => vec![1.0],
        3 => vec![0.25, 0.5, 0.25],
        5 => vec![0.0625, 0.25, 0.375, 0.25, 0.0625],
        7 => vec![0.03125, 0.109375, 0.21875, 0.28125, 0.21875, 0.109375, 0.03125],
        _ => {
            let sigma = 0.3 * ((size as f64 - 1.0) * 0.5 - 1.0) + 0.8;
            let center = (size / 2) as f64;
            let scale = -0.5 / (sigma * sigma);
            let raw: Vec<f64> = (0..size)
                .map(|i| {
                    let d = i as f64 - center;
                    (scale * d * d).exp()
                })
                .collect();
            let sum: f64 = raw.iter().sum();
            raw.into_iter().map(|w| (w / sum) as f32).collect()
        }
    }
}

/// Mirror an out-of-range index without repeating the edge sample
/// (`-1 -> 1`, `n -> n - 2`).
fn reflect_101(index: isize, len: usize) -> usize {
    if len == 1 {
        return 0;
    }
    let period = 2 * (len as isize - 1);
    let mut i = index.rem_euclid(period);
    if i >= len as isize {
        i = period - i;
    }
    i as usize
}

/// Scale `mask` to `[0, 1]` and grow it by `pad` mirrored pixels on each side.
fn pad_reflect_101(mask: &GrayImage, pad: u32) -> Plane {
    let (width, height) = mask.dimensions();
    ImageBuffer::from_fn(width + 2 * pad, height + 2 * pad, |x, y| {
        let sx = reflect_101(x as isize - pad as isize, width as usize);
        let sy = reflect_101(y as isize - pad as isize, height as usize);
        Luma([mask.get_pixel(sx as u32, sy as u32).0[0] as f32 / 255.0])
    })
}
