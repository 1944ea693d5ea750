// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for fruitcut.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all fruitcut operations.
#[derive(Debug, Error)]
pub enum FruitcutError {
    // -- Image errors --
    #[error("failed to decode {}: {reason}", path.display())]
    ImageDecode { path: PathBuf, reason: String },

    #[error("failed to encode {}: {reason}", path.display())]
    ImageEncode { path: PathBuf, reason: String },

    #[error("image dimensions differ: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    // -- Copy verification --
    #[error("integrity check failed: expected {expected}, got {actual}")]
    IntegrityMismatch { expected: String, actual: String },

    // -- Configuration --
    #[error("invalid configuration: {0}")]
    Config(String),

    // -- Storage --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, FruitcutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_names_the_file() {
        let err = FruitcutError::ImageDecode {
            path: PathBuf::from("input_images/pear.jpg"),
            reason: "truncated".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("pear.jpg"), "got: {msg}");
        assert!(msg.contains("truncated"), "got: {msg}");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: FruitcutError = io.into();
        assert!(matches!(err, FruitcutError::Io(_)));
    }
}
