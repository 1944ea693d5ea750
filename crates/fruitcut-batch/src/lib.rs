// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// fruitcut-batch: Directory-driven runners around the pure transforms in
// `fruitcut-imaging`.
//
// Each runner lists the input folder in sorted order, processes one file at a
// time, and records a `BatchReport`. A file that fails is logged and skipped;
// only failures to read the input folder or create the output folder abort a
// run.

pub mod background;
pub mod integrity;
pub mod rename;
pub mod rotate;
pub mod scan;

pub use background::remove_backgrounds;
pub use integrity::{hash_bytes, verify_hash};
pub use rename::{rename_sequential, sequential_name};
pub use rotate::{rotate_all, rotated_name};
pub use scan::{list_images, prepare_output_dir};
