// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use clap::Parser;

/// Flymake helper that runs flake8 from a discovered tox environment
#[derive(Parser)]
#[command(name = "flywrap")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// File to be scanned
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Extra arguments forwarded to flake8 verbatim
    #[arg(
        value_name = "ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub passthrough: Vec<String>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
