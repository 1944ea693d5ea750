// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Morphological cleanup of the background mask: close to fill pinholes, then
// open to drop speckles.

use fruitcut_core::config::MAX_CLEANUP_KERNEL_SIZE;
use image::{GrayImage, Luma};
use imageproc::morphology::{self, Mask};
use tracing::instrument;

/// Discretised ellipse inscribed in a `size` x `size` square.
///
/// Row `i` spans `center ± round(r * sqrt(1 - dy² / r²))` where `dy = i - r`
/// and `r = size / 2`. For `size = 7` the row widths are 1, 5, 7, 7, 7, 5, 1.
pub fn ellipse_element(size: u32) -> GrayImage {
    let r = (size / 2) as i64;
    let mut element = GrayImage::new(size, size);
    if r == 0 {
        if size > 0 {
            element.put_pixel(0, 0, Luma([255]));
        }
        return element;
    }

    let inv_r2 = 1.0 / (r * r) as f64;
    for row in 0..size as i64 {
        let dy = row - r;
        let dx = ((r as f64) * (((r * r - dy * dy) as f64) * inv_r2).sqrt()).round() as i64;
        let start = (r - dx).max(0);
        let end = (r + dx + 1).min(size as i64);
        for col in start..end {
            element.put_pixel(col as u32, row as u32, Luma([255]));
        }
    }
    element
}

/// Close then open `mask` with an elliptical element of side `kernel_size`.
///
/// `kernel_size` is expected to be odd. Zero leaves the mask untouched and
/// sizes above [`MAX_CLEANUP_KERNEL_SIZE`] are clamped to it. Pixels outside
/// the image take no part in either erosion or dilation.
#[instrument(skip(mask), fields(width = mask.width(), height = mask.height()))]
pub fn clean_background_mask(mask: &GrayImage, kernel_size: u32) -> GrayImage {
    if kernel_size == 0 || mask.width() == 0 || mask.height() == 0 {
        return mask.clone();
    }
    let kernel_size = kernel_size.min(MAX_CLEANUP_KERNEL_SIZE);

    let center = (kernel_size / 2) as u8;
    let element = Mask::from_image(&ellipse_element(kernel_size), center, center);

    let closed = morphology::grayscale_close(mask, &element);
    morphology::grayscale_open(&closed, &element)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_widths(element: &GrayImage) -> Vec<u32> {
        (0..element.height())
            .map(|y| {
                (0..element.width())
                    .filter(|&x| element.get_pixel(x, y).0[0] == 255)
                    .count() as u32
            })
            .collect()
    }

    #[test]
    fn seven_by_seven_ellipse_shape() {
        let element = ellipse_element(7);
        assert_eq!(row_widths(&element), vec![1, 5, 7, 7, 7, 5, 1]);
        // Rows are centred.
        assert_eq!(element.get_pixel(3, 0).0[0], 255);
        assert_eq!(element.get_pixel(0, 1).0[0], 0);
        assert_eq!(element.get_pixel(1, 1).0[0], 255);
    }

    #[test]
    fn unit_ellipse_is_a_single_pixel() {
        assert_eq!(row_widths(&ellipse_element(1)), vec![1]);
    }

    #[test]
    fn closing_fills_a_pinhole() {
        let mut mask = GrayImage::from_pixel(30, 30, Luma([255]));
        mask.put_pixel(15, 15, Luma([0]));
        let cleaned = clean_background_mask(&mask, 7);
        assert_eq!(cleaned.get_pixel(15, 15).0[0], 255);
    }

    #[test]
    fn opening_removes_an_isolated_speck() {
        let mut mask = GrayImage::new(30, 30);
        mask.put_pixel(15, 15, Luma([255]));
        mask.put_pixel(16, 15, Luma([255]));
        let cleaned = clean_background_mask(&mask, 7);
        assert!(cleaned.pixels().all(|p| p.0[0] == 0));
    }

    #[test]
    fn large_blocks_survive_cleanup() {
        let mut mask = GrayImage::new(60, 60);
        for y in 0..60 {
            for x in 0..30 {
                mask.put_pixel(x, y, Luma([255]));
            }
        }
        let cleaned = clean_background_mask(&mask, 7);
        assert_eq!(cleaned.get_pixel(5, 30).0[0], 255);
        assert_eq!(cleaned.get_pixel(29, 30).0[0], 255);
        assert_eq!(cleaned.get_pixel(45, 30).0[0], 0);
    }

    #[test]
    fn zero_kernel_leaves_the_mask_alone() {
        let mut mask = GrayImage::new(12, 12);
        mask.put_pixel(5, 5, Luma([255]));
        assert_eq!(clean_background_mask(&mask, 0), mask);
    }

    #[test]
    fn oversized_kernel_is_clamped() {
        let mask = GrayImage::from_pixel(8, 8, Luma([255]));
        let cleaned = clean_background_mask(&mask, 10_001);
        assert_eq!(cleaned.dimensions(), (8, 8));
        assert!(cleaned.pixels().all(|p| p.0[0] == 255));
    }

    #[test]
    fn output_stays_binary() {
        let mask = GrayImage::from_fn(25, 25, |x, y| Luma([if (x * y) % 3 == 0 { 255 } else { 0 }]));
        let cleaned = clean_background_mask(&mask, 7);
        assert!(cleaned.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    }
}
