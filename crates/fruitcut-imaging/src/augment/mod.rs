// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dataset augmentation: rotated copies of an image.

pub mod rotation;

pub use rotation::{RotatedVariant, format_angle, rotation_variants};
