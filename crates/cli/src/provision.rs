// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fallback flake8 provisioning.
//!
//! When no tox environment exists anywhere above the target file, a
//! private virtualenv colocated with the flywrap binary is used instead,
//! created on first need.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::context::RunContext;

/// Default ignore override for the private environment: all hacking
/// rules plus the continuation-indent family, since the editor already
/// indents correctly and has no project context for the rest.
pub const DEFAULT_IGNORES: &str = "H,E12";

/// Ensure the private environment exists and build a context for it.
///
/// Terminal fallback: always returns a usable context. A failed
/// bootstrap surfaces later as a launch failure on the missing binary.
pub fn provision() -> RunContext {
    let base = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    provision_in(&base)
}

/// Provision against an explicit base directory.
pub fn provision_in(base: &Path) -> RunContext {
    let venv = base.join(".venv");
    if !venv.is_dir() {
        bootstrap(&venv);
    }
    let ctx = RunContext {
        workdir: None,
        flake8: venv.join("bin").join("flake8"),
        env_root: venv,
        config: None,
        ignores: DEFAULT_IGNORES.to_string(),
    };
    debug!("runner is {}", ctx.flake8.display());
    ctx
}

/// Create the virtualenv and install flake8 into it.
///
/// Exit statuses are deliberately not inspected: a failure here shows
/// up as "failed to launch" when the runner is spawned.
fn bootstrap(venv: &Path) {
    debug!("creating venv {}", venv.display());
    if let Err(e) = Command::new("virtualenv").arg(venv).status() {
        debug!("virtualenv invocation failed: {e}");
    }
    let pip = venv.join("bin").join("pip");
    if let Err(e) = Command::new(pip).args(["install", "-U", "flake8"]).status() {
        debug!("pip invocation failed: {e}");
    }
}

#[cfg(test)]
#[path = "provision_tests.rs"]
mod tests;
