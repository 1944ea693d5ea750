// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for fruitcut batch runs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Image file types the batch tools accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageKind {
    Jpeg,
    Png,
}

impl ImageKind {
    /// Infer the kind from a file name by its (case-insensitive) suffix.
    ///
    /// Matches on the raw name, so `.png` on its own still qualifies even
    /// though it has no stem.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
            Some(Self::Jpeg)
        } else if lower.ends_with(".png") {
            Some(Self::Png)
        } else {
            None
        }
    }

    /// Infer the kind from a path's final component.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.file_name()
            .and_then(|name| name.to_str())
            .and_then(Self::from_file_name)
    }
}

/// A file that was handled successfully.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedFile {
    /// The input file.
    pub source: PathBuf,
    /// Every file written for this input.
    pub outputs: Vec<PathBuf>,
    /// SHA-256 hex digest of the written bytes, when the tool verifies copies.
    pub sha256: Option<String>,
}

/// A file that was attempted and given up on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub source: PathBuf,
    /// Human-readable cause, taken from the error.
    pub reason: String,
}

/// Outcome of a single batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub processed: Vec<ProcessedFile>,
    pub skipped: Vec<SkippedFile>,
}

impl BatchReport {
    /// Total number of files written across all processed inputs.
    pub fn outputs_written(&self) -> usize {
        self.processed.iter().map(|file| file.outputs.len()).sum()
    }

    /// One-line summary for the console.
    pub fn summary(&self) -> String {
        format!(
            "{} processed, {} skipped, {} files written",
            self.processed.len(),
            self.skipped.len(),
            self.outputs_written()
        )
    }
}
