// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Rotation augmentation: N evenly stepped rotations of one image.

use fruitcut_core::config::RotationConfig;
use image::RgbImage;
use tracing::{debug, instrument};

use crate::image::processor::ImageProcessor;

/// One rotated copy and the angle that produced it.
#[derive(Debug, Clone)]
pub struct RotatedVariant {
    /// Counter-clockwise rotation in degrees.
    pub angle: f32,
    pub image: RgbImage,
}

/// Rotate `image` by `0, step, 2·step, …` for `count` variants.
///
/// Each variant keeps the original canvas size; see
/// [`ImageProcessor::rotate`] for the exact resampling.
#[instrument(skip(image), fields(width = image.width(), height = image.height()))]
pub fn rotation_variants(image: &RgbImage, config: &RotationConfig) -> Vec<RotatedVariant> {
    config
        .angles()
        .map(|angle| {
            let rotated = ImageProcessor::from_rgb(image.clone()).rotate(angle);
            debug!(angle, "Variant generated");
            RotatedVariant {
                angle,
                image: rotated.into_rgb(),
            }
        })
        .collect()
}

/// Render an angle for use in a file name: `72` for whole degrees,
/// `22.5` otherwise.
pub fn format_angle(angle: f32) -> String {
    if angle.fract() == 0.0 {
        format!("{}", angle as i64)
    } else {
        format!("{angle}")
    }
}
