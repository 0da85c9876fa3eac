// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Flywrap CLI entry point.
//!
//! Flymake requires every stdout line to be structured linter output;
//! a single stray line disables the mode. All diagnostics therefore go
//! to stderr, enabled via the `FLYWRAP_LOG` env filter.

use std::path::Path;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use flywrap::cli::Cli;
use flywrap::{dispatch, locate, provision, resolve};

fn init_logging() {
    let filter = EnvFilter::try_from_env("FLYWRAP_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("flywrap: {}", e);
            1
        }
    };

    std::process::exit(code);
}

fn run() -> anyhow::Result<i32> {
    let cli = Cli::parse();

    let resolved = resolve::resolve(&cli.file);
    let ctx = locate::locate(&resolved).unwrap_or_else(provision::provision);

    // The final abspath keeps the target valid across the workdir
    // chdir, and makes plain command-line use work from anywhere.
    let target = resolve::absolute(Path::new(&cli.file));
    Ok(dispatch::run(ctx, &target, &cli.passthrough)?)
}
