// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Batch configuration. Every tool takes its section explicitly; the whole
// tree can be loaded from a JSON file, with missing fields falling back to
// the defaults below.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FruitcutError, Result};

/// Largest accepted side of the cleanup structuring element.
pub const MAX_CLEANUP_KERNEL_SIZE: u32 = 255;

/// Largest accepted feather radius; the blur kernel spans `2 * radius + 1` taps.
pub const MAX_FEATHER_RADIUS: i32 = 255;

/// Complete configuration for one fruitcut run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FruitcutConfig {
    pub paths: PathsConfig,
    pub segmentation: SegmentationConfig,
    pub rename: RenameConfig,
    pub rotation: RotationConfig,
    pub output: OutputConfig,
}

/// Input and output folders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Folder scanned for `.jpg`, `.jpeg` and `.png` files.
    pub input_dir: PathBuf,
    /// Folder receiving results; created if absent.
    pub output_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("input_images"),
            output_dir: PathBuf::from("output_images"),
        }
    }
}

/// Parameters of the background removal pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Gray values at or above this are "bright" background candidates.
    pub bright_threshold: u8,
    /// Foreground components smaller than this many pixels are dropped.
    pub min_area: u32,
    /// Feather radius in pixels. Zero or negative disables feathering.
    pub feather_radius: i32,
    /// Keep only the single largest qualifying component.
    pub keep_only_largest: bool,
    /// Side length of the elliptical structuring element used for cleanup.
    /// Must be odd.
    pub cleanup_kernel_size: u32,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            bright_threshold: 220,
            min_area: 5000,
            feather_radius: 2,
            keep_only_largest: false,
            cleanup_kernel_size: 7,
        }
    }
}

/// Sequential renaming parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenameConfig {
    /// Text placed in parentheses after the index, e.g. `3 (mala).jpg`.
    pub label: String,
    /// Index given to the first file.
    pub start_index: u64,
}

impl Default for RenameConfig {
    fn default() -> Self {
        Self {
            label: "mala".into(),
            start_index: 1,
        }
    }
}

/// Rotation augmentation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationConfig {
    /// Number of variants generated per input, starting at 0 degrees.
    pub count: u32,
    /// Angle between consecutive variants, in degrees (counter-clockwise).
    pub step_degrees: f32,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            count: 10,
            step_degrees: 36.0,
        }
    }
}

impl RotationConfig {
    /// The angles of every variant, in generation order.
    pub fn angles(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.count).map(|i| i as f32 * self.step_degrees)
    }
}

/// Encoder settings for written images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// JPEG quality (1-100) for `.jpg`/`.jpeg` outputs.
    pub jpeg_quality: u8,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { jpeg_quality: 95 }
    }
}

impl FruitcutConfig {
    /// Parse a configuration from JSON and validate it.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file. The format is JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&data)
    }

    /// Write the configuration as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// Reject values the pipelines cannot run with.
    pub fn validate(&self) -> Result<()> {
        let kernel = self.segmentation.cleanup_kernel_size;
        if kernel == 0 || kernel % 2 == 0 {
            return Err(FruitcutError::Config(format!(
                "segmentation.cleanup_kernel_size must be odd and non-zero, got {kernel}"
            )));
        }
        if kernel > MAX_CLEANUP_KERNEL_SIZE {
            return Err(FruitcutError::Config(format!(
                "segmentation.cleanup_kernel_size must be at most {MAX_CLEANUP_KERNEL_SIZE}, got {kernel}"
            )));
        }
        let radius = self.segmentation.feather_radius;
        if radius > MAX_FEATHER_RADIUS {
            return Err(FruitcutError::Config(format!(
                "segmentation.feather_radius must be at most {MAX_FEATHER_RADIUS}, got {radius}"
            )));
        }
        if self.rotation.count == 0 {
            return Err(FruitcutError::Config(
                "rotation.count must be at least 1".into(),
            ));
        }
        if !self.rotation.step_degrees.is_finite() {
            return Err(FruitcutError::Config(
                "rotation.step_degrees must be finite".into(),
            ));
        }
        if !(1..=100).contains(&self.output.jpeg_quality) {
            return Err(FruitcutError::Config(format!(
                "output.jpeg_quality must be within 1..=100, got {}",
                self.output.jpeg_quality
            )));
        }
        Ok(())
    }
}
