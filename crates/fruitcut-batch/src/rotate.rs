// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Rotation augmentation over a folder: `<stem>_rot_<angle><ext>` for every
// configured angle.

use std::path::Path;

use fruitcut_core::config::{OutputConfig, RotationConfig};
use fruitcut_core::error::Result;
use fruitcut_core::types::{BatchReport, ProcessedFile};
use fruitcut_imaging::ImageProcessor;
use fruitcut_imaging::augment::{format_angle, rotation_variants};
use tracing::{info, instrument};

use crate::scan::{list_images, prepare_output_dir, process_each};

/// Build `<stem>_rot_<angle><extension>`. `extension` includes its leading
/// dot or is empty.
pub fn rotated_name(stem: &str, angle: f32, extension: &str) -> String {
    format!("{stem}_rot_{}{extension}", format_angle(angle))
}

/// Split a file name into stem and dotted extension, keeping case.
fn split_name(path: &Path) -> (String, String) {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    (stem, extension)
}

/// Write `config.count` rotated copies of every image in `input_dir`.
#[instrument(skip_all, fields(input = %input_dir.as_ref().display(), output = %output_dir.as_ref().display()))]
pub fn rotate_all(
    input_dir: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    config: &RotationConfig,
    output: &OutputConfig,
) -> Result<BatchReport> {
    let output_dir = output_dir.as_ref();
    let files = list_images(input_dir.as_ref())?;
    prepare_output_dir(output_dir)?;

    info!(
        files = files.len(),
        count = config.count,
        step = config.step_degrees,
        "Starting rotation augmentation"
    );
    let report = process_each(&files, |path| {
        let source = ImageProcessor::open(path)?;
        let (stem, extension) = split_name(path);

        let mut outputs = Vec::with_capacity(config.count as usize);
        for variant in rotation_variants(source.as_rgb(), config) {
            let target = output_dir.join(rotated_name(&stem, variant.angle, &extension));
            ImageProcessor::from_rgb(variant.image).save(&target, output.jpeg_quality)?;
            outputs.push(target);
        }
        Ok(ProcessedFile {
            source: path.to_path_buf(),
            outputs,
            sha256: None,
        })
    });
    info!(summary = %report.summary(), "Rotation augmentation finished");
    Ok(report)
}
