// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Target path resolution.
//!
//! Unwinds the editor's temp-copy staging convention back to the real
//! project-relative path, or falls back to a best-effort absolute path.

use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

/// Marker left when a remote buffer is staged in a local tempdir before
/// linting. Everything after the marker is the original project path.
#[allow(clippy::expect_used)]
static STAGING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.emacs\.d/tmp(.*)").expect("valid regex"));

/// Resolve a raw CLI path to the path used for environment discovery.
///
/// Staged copies keep their relative form so the ancestor walk runs
/// against the mirrored project layout; everything else becomes absolute.
pub fn resolve(raw: &str) -> PathBuf {
    if let Some(caps) = STAGING_MARKER.captures(raw)
        && let Some(rest) = caps.get(1)
    {
        return PathBuf::from(rest.as_str());
    }
    absolute(Path::new(raw))
}

/// Best-effort absolute form of `path`.
///
/// Never errors: a path that cannot be canonicalized (e.g. the file does
/// not exist) degrades to a lexically normalized cwd join.
pub fn absolute(path: &Path) -> PathBuf {
    if let Ok(canonical) = path.canonicalize() {
        return canonical;
    }
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("/"))
            .join(path)
    };
    normalize(&joined)
}

/// Lexical `.`/`..` removal, without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
