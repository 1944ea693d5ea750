// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image processor: load, grayscale, rotate, and save a single RGB image.
// Operates on in-memory images using the `image` and `imageproc` crates.

use std::path::Path;

use fruitcut_core::error::{FruitcutError, Result};
use fruitcut_core::types::ImageKind;
use image::{GrayImage, ImageFormat, Luma, Rgb, RgbImage};
use imageproc::geometric_transformations::{self, Interpolation};
use tracing::{debug, info, instrument};

/// A single decoded three-channel image.
///
/// Every input is flattened to 8-bit RGB on load; an alpha channel, if the
/// file has one, is dropped. Transformations consume `self` and return a new
/// processor wrapping the result.
///
/// ```ignore
/// ImageProcessor::open("input_images/apple.jpg")?
///     .rotate(36.0)
///     .save("output_images/apple_rot_36.jpg", 95)?;
/// ```
#[derive(Debug, Clone)]
pub struct ImageProcessor {
    image: RgbImage,
}

impl ImageProcessor {
    // -- Construction ---------------------------------------------------------

    /// Load an image from a file path.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|err| FruitcutError::ImageDecode {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        info!(width = img.width(), height = img.height(), "Image loaded");
        Ok(Self {
            image: img.to_rgb8(),
        })
    }

    /// Wrap an already-decoded RGB buffer.
    pub fn from_rgb(image: RgbImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn as_rgb(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_rgb(self) -> RgbImage {
        self.image
    }

    // -- Transformations ------------------------------------------------------

    /// Rotate counter-clockwise by `degrees` about `(width / 2, height / 2)`.
    ///
    /// The canvas keeps its size: corners that leave the frame are cut off and
    /// uncovered areas are filled with black. Resampling is bilinear. Whole
    /// turns return the image untouched.
    #[instrument(skip(self), fields(degrees))]
    pub fn rotate(self, degrees: f32) -> Self {
        if degrees.rem_euclid(360.0) == 0.0 {
            debug!("Whole-turn rotation; image unchanged");
            return self;
        }

        // Centre uses integer division.
        let center = ((self.image.width() / 2) as f32, (self.image.height() / 2) as f32);

        // imageproc turns clockwise for positive theta.
        let rotated = geometric_transformations::rotate(
            &self.image,
            center,
            -degrees.to_radians(),
            Interpolation::Bilinear,
            Rgb([0u8, 0, 0]),
        );

        debug!(cx = center.0, cy = center.1, "Rotation applied");
        Self { image: rotated }
    }

    // -- Output ---------------------------------------------------------------

    /// Encode the current image as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut buffer);
        self.image
            .write_to(&mut cursor, ImageFormat::Png)
            .map_err(|err| FruitcutError::ImageEncode {
                path: "<memory>".into(),
                reason: err.to_string(),
            })?;
        Ok(buffer)
    }

    /// Encode the current image as JPEG bytes with the given quality (1-100).
    pub fn to_jpeg_bytes(&self, quality: u8) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality);
        self.image
            .write_with_encoder(encoder)
            .map_err(|err| FruitcutError::ImageEncode {
                path: "<memory>".into(),
                reason: err.to_string(),
            })?;
        Ok(buffer)
    }

    /// Write the image to a file. JPEG names are encoded at `jpeg_quality`,
    /// PNG names losslessly; any other name goes through the format inferred
    /// from its extension.
    #[instrument(skip_all, fields(path = %path.as_ref().display(), jpeg_quality = jpeg_quality))]
    pub fn save(&self, path: impl AsRef<Path>, jpeg_quality: u8) -> Result<()> {
        let path = path.as_ref();
        let with_path = |err: FruitcutError| match err {
            FruitcutError::ImageEncode { reason, .. } => FruitcutError::ImageEncode {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        };

        let bytes = match ImageKind::from_path(path) {
            Some(ImageKind::Jpeg) => self.to_jpeg_bytes(jpeg_quality).map_err(with_path)?,
            Some(ImageKind::Png) => self.to_png_bytes().map_err(with_path)?,
            None => {
                return self
                    .image
                    .save(path)
                    .map_err(|err| FruitcutError::ImageEncode {
                        path: path.to_path_buf(),
                        reason: err.to_string(),
                    });
            }
        };
        std::fs::write(path, &bytes)?;
        debug!(bytes = bytes.len(), "Image written");
        Ok(())
    }
}

/// Convert RGB to luma with BT.601 weights, rounding to nearest.
pub fn to_gray_bt601(rgb: &RgbImage) -> GrayImage {
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let Rgb([r, g, b]) = *rgb.get_pixel(x, y);
        let luma = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
        Luma([luma.round().clamp(0.0, 255.0) as u8])
    })
}
