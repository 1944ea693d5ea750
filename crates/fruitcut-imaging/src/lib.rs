// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// fruitcut-imaging: Pure image transforms for the fruitcut batch tools.
//
// Provides image loading and encoding, background removal (border-seeded
// bright-region detection, morphological cleanup, component filtering,
// feathering, compositing), and rotation augmentation. Nothing here walks
// directories; that lives in `fruitcut-batch`.

pub mod augment;
pub mod image;
pub mod segment;

// Re-export the primary entry points so callers can use
// `fruitcut_imaging::remove_background` etc.
pub use augment::{RotatedVariant, rotation_variants};
pub use crate::image::processor::ImageProcessor;
pub use segment::{RemovalOutput, remove_background};
