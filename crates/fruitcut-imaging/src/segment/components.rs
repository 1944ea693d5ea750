// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Foreground extraction: mask inversion and connected-component area filtering.

use image::{GrayImage, ImageBuffer, Luma};
use imageproc::region_labelling::{Connectivity, connected_components};
use tracing::{debug, instrument};

/// Per-pixel component labels; 0 means "off".
pub type LabelImage = ImageBuffer<Luma<u32>, Vec<u32>>;

/// One labelled region of a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Component {
    pub label: u32,
    /// Number of pixels in the region.
    pub area: u32,
}

/// Swap on and off pixels of a 0/255 mask.
pub fn invert_mask(mask: &GrayImage) -> GrayImage {
    GrayImage::from_fn(mask.width(), mask.height(), |x, y| {
        Luma([255 - mask.get_pixel(x, y).0[0]])
    })
}

/// Label the 8-connected "on" regions of `mask` and measure each one.
///
/// Components are returned in label order, which is raster order of each
/// region's first pixel.
pub fn component_areas(mask: &GrayImage) -> (LabelImage, Vec<Component>) {
    let labels = connected_components(mask, Connectivity::Eight, Luma([0u8]));

    let mut areas: Vec<u32> = Vec::new();
    for pixel in labels.pixels() {
        let label = pixel.0[0] as usize;
        if label == 0 {
            continue;
        }
        if areas.len() < label {
            areas.resize(label, 0);
        }
        areas[label - 1] += 1;
    }

    let components = areas
        .into_iter()
        .enumerate()
        .map(|(i, area)| Component {
            label: i as u32 + 1,
            area,
        })
        .collect();
    (labels, components)
}

/// Keep the components of `mask` whose area is at least `min_area`.
///
/// With `keep_only_largest`, only the biggest qualifying component survives;
/// on a tie the one found first in raster order wins. Returns an all-zero
/// mask when nothing qualifies.
#[instrument(skip(mask), fields(width = mask.width(), height = mask.height()))]
pub fn filter_components(mask: &GrayImage, min_area: u32, keep_only_largest: bool) -> GrayImage {
    let (labels, components) = component_areas(mask);

    let mut keep: Vec<&Component> = components.iter().filter(|c| c.area >= min_area).collect();
    debug!(
        total = components.len(),
        qualifying = keep.len(),
        "Foreground components measured"
    );

    if keep_only_largest {
        // `max_by_key` keeps the last maximum; walk in reverse so the first wins.
        let largest = keep.iter().rev().max_by_key(|c| c.area).copied();
        keep = largest.into_iter().collect();
    }

    let mut selected = vec![false; components.len() + 1];
    for component in keep {
        selected[component.label as usize] = true;
    }

    GrayImage::from_fn(mask.width(), mask.height(), |x, y| {
        let label = labels.get_pixel(x, y).0[0] as usize;
        Luma([if selected[label] { 255 } else { 0 }])
    })
}
