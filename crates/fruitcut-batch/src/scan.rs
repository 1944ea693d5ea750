// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Input folder scanning and the shared skip-and-continue loop.

use std::path::{Path, PathBuf};

use fruitcut_core::error::Result;
use fruitcut_core::types::{BatchReport, ImageKind, ProcessedFile, SkippedFile};
use tracing::{debug, info, instrument, warn};

/// List the `.jpg`, `.jpeg` and `.png` files directly inside `dir`, sorted by
/// file name.
///
/// Matching is case-insensitive. Subdirectories and other file types are
/// ignored without comment. Fails only if `dir` itself cannot be read.
#[instrument(skip_all, fields(dir = %dir.as_ref().display()))]
pub fn list_images(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir.as_ref())? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        match ImageKind::from_path(&path) {
            Some(_) => files.push(path),
            None => debug!(path = %path.display(), "Skipping unsupported file"),
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!(count = files.len(), "Input images found");
    Ok(files)
}

/// Create the output folder (and parents) if it does not exist yet.
pub fn prepare_output_dir(dir: impl AsRef<Path>) -> Result<()> {
    std::fs::create_dir_all(dir.as_ref())?;
    Ok(())
}

/// Run `step` on every file in order, collecting successes and failures.
///
/// A failing file is logged and recorded; the loop always moves on to the
/// next one.
pub(crate) fn process_each<F>(files: &[PathBuf], mut step: F) -> BatchReport
where
    F: FnMut(&Path) -> Result<ProcessedFile>,
{
    let mut report = BatchReport::default();
    for path in files {
        match step(path) {
            Ok(done) => {
                info!(
                    source = %path.display(),
                    outputs = done.outputs.len(),
                    "File processed"
                );
                report.processed.push(done);
            }
            Err(err) => {
                warn!(source = %path.display(), error = %err, "Skipping file");
                report.skipped.push(SkippedFile {
                    source: path.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }
    report
}

/// The final path component as UTF-8, lossily converted.
pub(crate) fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
