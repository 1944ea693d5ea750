// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// fruitcut-remove-bg: replace the bright tabletop behind each photo with
// black, keeping the fruit with feathered edges.
//
// Usage: fruitcut-remove-bg [config.json]

use std::process::ExitCode;

use fruitcut_batch::remove_backgrounds;

fn main() -> ExitCode {
    fruitcut_app::run_tool("fruitcut-remove-bg", |config| {
        remove_backgrounds(
            &config.paths.input_dir,
            &config.paths.output_dir,
            &config.segmentation,
            &config.output,
        )
    })
}
