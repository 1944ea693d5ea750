// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shared start-up for the fruitcut binaries: logging, configuration, and
// reporting the run outcome.

use std::path::PathBuf;
use std::process::ExitCode;

use fruitcut_core::{BatchReport, FruitcutConfig, FruitcutError, Result};

/// Install the `tracing` subscriber. `RUST_LOG` overrides the default `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Resolve the configuration from the command line.
///
/// The only accepted argument is an optional path to a JSON config file;
/// without it the built-in defaults apply. Any further argument is an error.
pub fn load_config(mut args: impl Iterator<Item = String>) -> Result<FruitcutConfig> {
    let first = args.next();
    let extra: Vec<String> = args.collect();
    if !extra.is_empty() {
        return Err(FruitcutError::Config(format!(
            "expected at most one argument (a JSON config path), got {} more: {}",
            extra.len(),
            extra.join(" ")
        )));
    }

    match first {
        Some(path) => {
            let path = PathBuf::from(path);
            tracing::info!(path = %path.display(), "Loading configuration");
            FruitcutConfig::load(&path)
        }
        None => {
            tracing::debug!("No configuration file given; using defaults");
            Ok(FruitcutConfig::default())
        }
    }
}

/// Run one tool end to end and turn its outcome into an exit code.
///
/// Skipped files do not fail the run; only configuration or directory errors
/// do.
pub fn run_tool<F>(tool: &str, body: F) -> ExitCode
where
    F: FnOnce(&FruitcutConfig) -> Result<BatchReport>,
{
    init_tracing();
    tracing::info!(tool, "fruitcut starting");

    let outcome = load_config(std::env::args().skip(1)).and_then(|config| {
        let report = body(&config)?;
        Ok((config, report))
    });

    match outcome {
        Ok((config, report)) => {
            for skipped in &report.skipped {
                eprintln!("could not process {}: {}", skipped.source.display(), skipped.reason);
            }
            println!(
                "{tool}: {} -> {}",
                report.summary(),
                config.paths.output_dir.display()
            );
            if let Ok(json) = serde_json::to_string(&report) {
                tracing::debug!(report = %json, "Run report");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, "Run aborted");
            eprintln!("{tool}: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_argument_means_defaults() {
        let config = load_config(std::iter::empty()).unwrap();
        assert_eq!(config, FruitcutConfig::default());
    }

    #[test]
    fn argument_is_read_as_a_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json");
        std::fs::write(&path, r#"{ "paths": { "input_dir": "fotos" } }"#).unwrap();

        let config = load_config(std::iter::once(path.display().to_string())).unwrap();
        assert_eq!(config.paths.input_dir, PathBuf::from("fotos"));
        assert_eq!(config.paths.output_dir, PathBuf::from("output_images"));
    }

    #[test]
    fn extra_arguments_are_rejected() {
        let args = ["run.json", "input_images"].map(String::from).into_iter();
        match load_config(args) {
            Err(FruitcutError::Config(message)) => assert!(message.contains("input_images")),
            other => panic!("expected a config error, got {other:?}"),
        }
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(load_config(std::iter::once(path.display().to_string())).is_err());
    }
}
