// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// fruitcut-rename: copy each photo to `<n> (<label>)<ext>`, numbered in
// sorted order.
//
// Usage: fruitcut-rename [config.json]

use std::process::ExitCode;

use fruitcut_batch::rename_sequential;

fn main() -> ExitCode {
    fruitcut_app::run_tool("fruitcut-rename", |config| {
        rename_sequential(&config.paths.input_dir, &config.paths.output_dir, &config.rename)
    })
}
