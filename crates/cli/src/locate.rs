// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tox environment discovery.
//!
//! Walks from the target file up to the filesystem root looking for an
//! existing tox virtualenv with flake8 installed.

use std::path::Path;

use tracing::debug;

use crate::context::RunContext;
use crate::toxini;

/// Candidate tox environment names, tried in order. The first name that
/// matches anywhere in the ancestor chain wins.
const TOX_ENVS: [&str; 3] = ["flake8", "pep8", "lint"];

/// Find an existing flake8 installation for `resolved`.
///
/// Returns `None` when no ancestor of the file carries a matching tox
/// environment; the caller falls back to provisioning.
pub fn locate(resolved: &Path) -> Option<RunContext> {
    TOX_ENVS.iter().find_map(|env| find_tox_env(resolved, env))
}

/// Walk the ancestor chain of `path` looking for `.tox/<toxenv>/bin/flake8`.
///
/// The first step discards the trailing filename; the walk ends at the
/// filesystem root.
fn find_tox_env(path: &Path, toxenv: &str) -> Option<RunContext> {
    let mut dir = path.parent()?;
    loop {
        let venv = dir.join(".tox").join(toxenv);
        let flake8 = venv.join("bin").join("flake8");
        if venv.is_dir() && flake8.exists() {
            let config = toxini::read_ignores(dir);
            let ignores = config.ignore.clone().unwrap_or_default();
            let ctx = RunContext {
                workdir: Some(dir.to_path_buf()),
                env_root: venv,
                flake8,
                config: Some(config),
                ignores,
            };
            debug!("found flake8 {}, ctx={:?}", ctx.flake8.display(), ctx);
            return Some(ctx);
        }
        dir = dir.parent()?;
    }
}

#[cfg(test)]
#[path = "locate_tests.rs"]
mod tests;
