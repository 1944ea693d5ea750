// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Border-seeded background detection.
//
// The photographed surface is assumed to be bright and to reach at least one
// edge of the frame. Bright regions that never touch an edge (specular
// highlights on the fruit, for example) are not background.

use std::collections::BTreeSet;

use image::{GrayImage, Luma};
use imageproc::region_labelling::{Connectivity, connected_components};
use tracing::{debug, instrument};

/// Binary mask (0/255) of pixels at or above `threshold`.
pub fn bright_mask(gray: &GrayImage, threshold: u8) -> GrayImage {
    GrayImage::from_fn(gray.width(), gray.height(), |x, y| {
        let on = gray.get_pixel(x, y).0[0] >= threshold;
        Luma([if on { 255 } else { 0 }])
    })
}

/// Mark every pixel of an 8-connected bright region that touches the border.
///
/// Returns a 0/255 mask the size of `gray`. If no bright region touches the
/// border the mask is empty.
#[instrument(skip(gray), fields(width = gray.width(), height = gray.height()))]
pub fn detect_background_by_border(gray: &GrayImage, threshold: u8) -> GrayImage {
    let (width, height) = gray.dimensions();
    if width == 0 || height == 0 {
        return GrayImage::new(width, height);
    }

    let bright = bright_mask(gray, threshold);
    let labels = connected_components(&bright, Connectivity::Eight, Luma([0u8]));

    let mut border_labels = BTreeSet::new();
    for x in 0..width {
        border_labels.insert(labels.get_pixel(x, 0).0[0]);
        border_labels.insert(labels.get_pixel(x, height - 1).0[0]);
    }
    for y in 0..height {
        border_labels.insert(labels.get_pixel(0, y).0[0]);
        border_labels.insert(labels.get_pixel(width - 1, y).0[0]);
    }
    // Label 0 is the non-bright remainder, never background.
    border_labels.remove(&0);

    debug!(border_regions = border_labels.len(), "Border-touching bright regions");

    GrayImage::from_fn(width, height, |x, y| {
        let label = labels.get_pixel(x, y).0[0];
        Luma([if border_labels.contains(&label) { 255 } else { 0 }])
    })
}
