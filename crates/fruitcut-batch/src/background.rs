// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Background removal over a folder: each image is written to the output
// folder under its original name with the background replaced by black.

use std::path::Path;

use fruitcut_core::config::{OutputConfig, SegmentationConfig};
use fruitcut_core::error::Result;
use fruitcut_core::types::{BatchReport, ProcessedFile};
use fruitcut_imaging::{ImageProcessor, remove_background};
use tracing::{debug, info, instrument};

use crate::scan::{file_name_of, list_images, prepare_output_dir, process_each};

/// Remove the background of every image in `input_dir`.
#[instrument(skip_all, fields(input = %input_dir.as_ref().display(), output = %output_dir.as_ref().display()))]
pub fn remove_backgrounds(
    input_dir: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    segmentation: &SegmentationConfig,
    output: &OutputConfig,
) -> Result<BatchReport> {
    let output_dir = output_dir.as_ref();
    let files = list_images(input_dir.as_ref())?;
    prepare_output_dir(output_dir)?;

    info!(files = files.len(), "Starting background removal");
    let report = process_each(&files, |path| {
        let source = ImageProcessor::open(path)?;
        let removed = remove_background(source.as_rgb(), segmentation)?;
        debug!(
            foreground_pixels = removed.foreground_pixels,
            "Background removed"
        );

        let out_path = output_dir.join(file_name_of(path));
        ImageProcessor::from_rgb(removed.image).save(&out_path, output.jpeg_quality)?;
        Ok(ProcessedFile {
            source: path.to_path_buf(),
            outputs: vec![out_path],
            sha256: None,
        })
    });
    info!(summary = %report.summary(), "Background removal finished");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    const FRUIT: Rgb<u8> = Rgb([150, 30, 20]);

    fn tabletop() -> RgbImage {
        RgbImage::from_fn(160, 120, |x, y| {
            if (30..130).contains(&x) && (20..100).contains(&y) {
                FRUIT
            } else {
                Rgb([250, 250, 250])
            }
        })
    }

    fn hard_edges() -> SegmentationConfig {
        SegmentationConfig {
            feather_radius: 0,
            ..SegmentationConfig::default()
        }
    }

    #[test]
    fn writes_one_output_per_input_with_the_same_name() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let out_dir = output.path().join("cut");
        tabletop().save(input.path().join("apple.png")).unwrap();
        tabletop().save(input.path().join("banana.PNG")).unwrap();

        let report = remove_backgrounds(
            input.path(),
            &out_dir,
            &hard_edges(),
            &OutputConfig::default(),
        )
        .unwrap();

        assert_eq!(report.processed.len(), 2);
        assert!(report.skipped.is_empty());
        assert!(out_dir.join("apple.png").is_file());
        assert!(out_dir.join("banana.PNG").is_file());

        let cut = image::open(out_dir.join("apple.png")).unwrap().to_rgb8();
        assert_eq!(*cut.get_pixel(5, 5), Rgb([0, 0, 0]));
        assert_eq!(*cut.get_pixel(80, 60), FRUIT);
    }

    #[test]
    fn unreadable_files_are_skipped_and_the_batch_continues() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        std::fs::write(input.path().join("a_broken.jpg"), b"garbage").unwrap();
        std::fs::write(input.path().join("readme.txt"), b"ignored").unwrap();
        tabletop().save(input.path().join("b_good.png")).unwrap();

        let report = remove_backgrounds(
            input.path(),
            output.path(),
            &hard_edges(),
            &OutputConfig::default(),
        )
        .unwrap();

        assert_eq!(report.processed.len(), 1);
        assert_eq!(report.skipped.len(), 1, "the .txt file is filtered, not skipped");
        assert!(report.skipped[0].source.ends_with("a_broken.jpg"));
        assert!(output.path().join("b_good.png").is_file());
        assert!(!output.path().join("a_broken.jpg").exists());
    }

    #[test]
    fn empty_foreground_still_writes_a_black_image() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        RgbImage::from_pixel(50, 50, Rgb([255, 255, 255]))
            .save(input.path().join("blank.png"))
            .unwrap();

        let report = remove_backgrounds(
            input.path(),
            output.path(),
            &SegmentationConfig::default(),
            &OutputConfig::default(),
        )
        .unwrap();

        assert_eq!(report.processed.len(), 1);
        let out = image::open(output.path().join("blank.png")).unwrap().to_rgb8();
        assert!(out.pixels().all(|p| *p == Rgb([0, 0, 0])));
    }

    #[test]
    fn missing_input_dir_aborts() {
        let output = tempfile::tempdir().unwrap();
        let result = remove_backgrounds(
            output.path().join("missing"),
            output.path(),
            &SegmentationConfig::default(),
            &OutputConfig::default(),
        );
        assert!(result.is_err());
    }
}
