// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// fruitcut-rotate: write evenly stepped rotations of each photo as
// `<stem>_rot_<angle><ext>`.
//
// Usage: fruitcut-rotate [config.json]

use std::process::ExitCode;

use fruitcut_batch::rotate_all;

fn main() -> ExitCode {
    fruitcut_app::run_tool("fruitcut-rotate", |config| {
        rotate_all(
            &config.paths.input_dir,
            &config.paths.output_dir,
            &config.rotation,
            &config.output,
        )
    })
}
