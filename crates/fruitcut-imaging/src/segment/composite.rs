// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Alpha compositing of the foreground over a solid background.

use fruitcut_core::error::{FruitcutError, Result};
use image::{Rgb, RgbImage};

use super::feather::AlphaMap;

/// Blend `foreground` over `background` as `fg * a + bg * (1 - a)`.
///
/// Computed per channel in `f32` and rounded to the nearest integer. All three
/// inputs must share the same dimensions.
pub fn composite(
    foreground: &RgbImage,
    alpha: &AlphaMap,
    background: &RgbImage,
) -> Result<RgbImage> {
    let expected = foreground.dimensions();
    for actual in [alpha.dimensions(), background.dimensions()] {
        if actual != expected {
            return Err(FruitcutError::DimensionMismatch { expected, actual });
        }
    }

    Ok(RgbImage::from_fn(expected.0, expected.1, |x, y| {
        let a = alpha.get(x, y);
        let fg = foreground.get_pixel(x, y).0;
        let bg = background.get_pixel(x, y).0;
        let blend = |c: usize| -> u8 {
            let v = fg[c] as f32 * a + bg[c] as f32 * (1.0 - a);
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb([blend(0), blend(1), blend(2)])
    }))
}

/// Composite `foreground` over a black canvas of the same size.
pub fn composite_over_black(foreground: &RgbImage, alpha: &AlphaMap) -> Result<RgbImage> {
    let black = RgbImage::new(foreground.width(), foreground.height());
    composite(foreground, alpha, &black)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn opaque_alpha_keeps_foreground() {
        let fg = RgbImage::from_pixel(4, 4, Rgb([10, 120, 250]));
        let alpha = AlphaMap::from_mask(&GrayImage::from_pixel(4, 4, Luma([255])));
        let out = composite_over_black(&fg, &alpha).unwrap();
        assert_eq!(out, fg);
    }

    #[test]
    fn transparent_alpha_shows_background() {
        let fg = RgbImage::from_pixel(4, 4, Rgb([10, 120, 250]));
        let bg = RgbImage::from_pixel(4, 4, Rgb([1, 2, 3]));
        let alpha = AlphaMap::from_mask(&GrayImage::new(4, 4));
        let out = composite(&fg, &alpha, &bg).unwrap();
        assert_eq!(out, bg);
    }

    #[test]
    fn partial_alpha_rounds_to_nearest() {
        let fg = RgbImage::from_pixel(1, 1, Rgb([255, 101, 3]));
        // 128 / 255 ≈ 0.50196
        let alpha = AlphaMap::from_mask(&GrayImage::from_pixel(1, 1, Luma([128])));
        let out = composite_over_black(&fg, &alpha).unwrap();
        assert_eq!(*out.get_pixel(0, 0), Rgb([128, 51, 2]));
    }

    #[test]
    fn mismatched_sizes_are_rejected() {
        let fg = RgbImage::new(4, 4);
        let alpha = AlphaMap::from_mask(&GrayImage::new(3, 4));
        let err = composite_over_black(&fg, &alpha).unwrap_err();
        match err {
            FruitcutError::DimensionMismatch { expected, actual } => {
                assert_eq!(expected, (4, 4));
                assert_eq!(actual, (3, 4));
            }
            other => panic!("unexpected error variant: {other}"),
        }
    }
}
