// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Copy integrity: SHA-256 fingerprints of source and copied files.

use std::path::Path;

use fruitcut_core::error::{FruitcutError, Result};
use sha2::{Digest, Sha256};

/// Compute the SHA-256 hash of `data` and return it as a lowercase hex string.
pub fn hash_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Hash the full contents of the file at `path`.
pub fn hash_file(path: impl AsRef<Path>) -> Result<String> {
    let data = std::fs::read(path.as_ref())?;
    Ok(hash_bytes(&data))
}

/// Verify that `data` matches the expected SHA-256 hex digest.
pub fn verify_hash(data: &[u8], expected_hex: &str) -> Result<()> {
    let actual = hash_bytes(data);
    if actual == expected_hex {
        Ok(())
    } else {
        Err(FruitcutError::IntegrityMismatch {
            expected: expected_hex.to_owned(),
            actual,
        })
    }
}

/// Copy `src` to `dst` and confirm the destination bytes hash to the same
/// digest as the source. Returns the digest.
pub fn copy_verified(src: &Path, dst: &Path) -> Result<String> {
    let expected = hash_file(src)?;
    std::fs::copy(src, dst)?;
    let written = std::fs::read(dst)?;
    verify_hash(&written, &expected)?;
    Ok(expected)
}
