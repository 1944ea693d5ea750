// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sequential renaming: copy every image to `<index> (<label>)<ext>`.

use std::path::Path;

use fruitcut_core::config::RenameConfig;
use fruitcut_core::error::Result;
use fruitcut_core::types::{BatchReport, ProcessedFile};
use tracing::{info, instrument};

use crate::integrity::copy_verified;
use crate::scan::{list_images, prepare_output_dir, process_each};

/// Build `<index> (<label>)<extension>`. `extension` includes its leading dot
/// or is empty.
pub fn sequential_name(index: u64, label: &str, extension: &str) -> String {
    format!("{index} ({label}){extension}")
}

/// The extension of `path` with its leading dot and original case, or an
/// empty string.
fn dotted_extension(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .unwrap_or_default()
}

/// Copy each image of `input_dir` into `output_dir` under a sequential name.
///
/// Files are numbered in sorted order from `config.start_index`. Sources are
/// never modified, and every copy is checked against the source's SHA-256.
/// The counter only advances on a successful copy, so the output numbering
/// has no gaps.
#[instrument(skip_all, fields(input = %input_dir.as_ref().display(), output = %output_dir.as_ref().display()))]
pub fn rename_sequential(
    input_dir: impl AsRef<Path>,
    output_dir: impl AsRef<Path>,
    config: &RenameConfig,
) -> Result<BatchReport> {
    let output_dir = output_dir.as_ref();
    let files = list_images(input_dir.as_ref())?;
    prepare_output_dir(output_dir)?;

    info!(files = files.len(), label = %config.label, "Starting sequential rename");
    let mut next_index = config.start_index;
    let report = process_each(&files, |path| {
        let name = sequential_name(next_index, &config.label, &dotted_extension(path));
        let target = output_dir.join(&name);
        let digest = copy_verified(path, &target)?;
        next_index += 1;
        Ok(ProcessedFile {
            source: path.to_path_buf(),
            outputs: vec![target],
            sha256: Some(digest),
        })
    });
    info!(summary = %report.summary(), "Sequential rename finished");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrity::hash_bytes;

    #[test]
    fn names_follow_the_pattern() {
        assert_eq!(sequential_name(1, "mala", ".jpg"), "1 (mala).jpg");
        assert_eq!(sequential_name(12, "buena", ".PNG"), "12 (buena).PNG");
        assert_eq!(sequential_name(3, "mala", ""), "3 (mala)");
    }

    #[test]
    fn extension_keeps_case_and_dot() {
        assert_eq!(dotted_extension(Path::new("x/IMG_01.JPEG")), ".JPEG");
        assert_eq!(dotted_extension(Path::new("x/a.b.png")), ".png");
        assert_eq!(dotted_extension(Path::new("x/.png")), "");
    }

    #[test]
    fn copies_n_files_byte_identical_in_sorted_order() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let sources = [
            ("c.png", b"third".as_slice()),
            ("a.jpg", b"first".as_slice()),
            ("b.JPEG", b"second".as_slice()),
        ];
        for (name, data) in sources {
            std::fs::write(input.path().join(name), data).unwrap();
        }
        std::fs::write(input.path().join("skip.txt"), b"nope").unwrap();

        let report = rename_sequential(input.path(), output.path(), &RenameConfig::default())
            .unwrap();

        assert_eq!(report.processed.len(), 3);
        assert!(report.skipped.is_empty());

        let mut written: Vec<String> = std::fs::read_dir(output.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        written.sort();
        assert_eq!(written, vec!["1 (mala).jpg", "2 (mala).JPEG", "3 (mala).png"]);

        assert_eq!(std::fs::read(output.path().join("1 (mala).jpg")).unwrap(), b"first");
        assert_eq!(std::fs::read(output.path().join("2 (mala).JPEG")).unwrap(), b"second");
        assert_eq!(std::fs::read(output.path().join("3 (mala).png")).unwrap(), b"third");

        assert_eq!(report.processed[0].sha256.as_deref(), Some(hash_bytes(b"first").as_str()));
        // Sources untouched.
        assert_eq!(std::fs::read(input.path().join("a.jpg")).unwrap(), b"first");
    }

    #[test]
    fn label_and_start_index_are_configurable() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        std::fs::write(input.path().join("pear.png"), b"p").unwrap();

        let config = RenameConfig {
            label: "buena".into(),
            start_index: 40,
        };
        rename_sequential(input.path(), output.path(), &config).unwrap();
        assert!(output.path().join("40 (buena).png").is_file());
    }

    #[test]
    fn failed_copy_does_not_consume_an_index() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        std::fs::write(input.path().join("a.jpg"), b"first").unwrap();
        std::fs::write(input.path().join("b.png"), b"second").unwrap();
        std::fs::write(input.path().join("c.jpg"), b"third").unwrap();
        // The second file's target is taken by a directory, so its copy fails.
        std::fs::create_dir(output.path().join("2 (mala).png")).unwrap();

        let report = rename_sequential(input.path(), output.path(), &RenameConfig::default())
            .unwrap();

        assert_eq!(report.processed.len(), 2);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].source, input.path().join("b.png"));

        assert_eq!(std::fs::read(output.path().join("1 (mala).jpg")).unwrap(), b"first");
        assert_eq!(std::fs::read(output.path().join("2 (mala).jpg")).unwrap(), b"third");
        assert!(!output.path().join("3 (mala).jpg").exists());
    }

    #[test]
    fn empty_input_produces_nothing() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let report = rename_sequential(input.path(), output.path(), &RenameConfig::default())
            .unwrap();
        assert_eq!(report, BatchReport::default());
        assert_eq!(std::fs::read_dir(output.path()).unwrap().count(), 0);
    }
}
