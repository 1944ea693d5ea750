// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Background removal pipeline: border-seeded background detection, mask
// cleanup, component filtering, edge feathering, and compositing over black.

pub mod border;
pub mod cleanup;
pub mod components;
pub mod composite;
pub mod feather;

use fruitcut_core::config::SegmentationConfig;
use fruitcut_core::error::Result;
use image::{GrayImage, RgbImage};
use tracing::{debug, info, instrument};

pub use border::detect_background_by_border;
pub use cleanup::clean_background_mask;
pub use components::{filter_components, invert_mask};
pub use composite::{composite, composite_over_black};
pub use feather::{AlphaMap, feather_mask};

use crate::image::processor::to_gray_bt601;

/// Everything the pipeline produces for one image.
#[derive(Debug, Clone)]
pub struct RemovalOutput {
    /// The input with its background replaced by black.
    pub image: RgbImage,
    /// Final foreground selection (0/255), before feathering.
    pub foreground: GrayImage,
    /// Number of foreground pixels in `foreground`.
    pub foreground_pixels: u64,
}

impl RemovalOutput {
    /// True when no component survived the area filter.
    pub fn is_empty(&self) -> bool {
        self.foreground_pixels == 0
    }
}

/// Run the full pipeline on one image:
///
/// 1. BT.601 grayscale
/// 2. Border-connected bright regions become the background mask
/// 3. Close, then open, with an elliptical element
/// 4. Invert to get foreground candidates
/// 5. Keep components of at least `min_area` pixels (optionally the largest only)
/// 6. Feather the selection
/// 7. Composite the original over black
///
/// Pure: touches no files. An empty foreground is not an error; the result is
/// then entirely black.
#[instrument(skip_all, fields(width = image.width(), height = image.height()))]
pub fn remove_background(image: &RgbImage, config: &SegmentationConfig) -> Result<RemovalOutput> {
    let gray = to_gray_bt601(image);

    let background = detect_background_by_border(&gray, config.bright_threshold);
    let background = clean_background_mask(&background, config.cleanup_kernel_size);

    let candidates = invert_mask(&background);
    let foreground = filter_components(&candidates, config.min_area, config.keep_only_largest);
    let foreground_pixels = foreground.pixels().filter(|p| p.0[0] != 0).count() as u64;
    debug!(foreground_pixels, "Foreground selected");

    let feathered = feather_mask(&foreground, config.feather_radius);
    let alpha = AlphaMap::from_mask(&feathered);
    let composed = composite_over_black(image, &alpha)?;

    if foreground_pixels == 0 {
        info!("No foreground component met the area threshold; output is black");
    }

    Ok(RemovalOutput {
        image: composed,
        foreground,
        foreground_pixels,
    })
}
