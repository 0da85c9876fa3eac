//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the flywrap binary.
pub fn flywrap_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("flywrap"))
}

/// A throwaway project tree with a fake tox environment whose "flake8"
/// is a shell script under our control.
#[cfg(unix)]
pub struct FakeProject {
    dir: TempDir,
}

#[cfg(unix)]
impl FakeProject {
    /// Create a project with `.tox/<toxenv>/bin/flake8` backed by `script`.
    pub fn new(toxenv: &str, script: &str) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join(".tox").join(toxenv).join("bin");
        std::fs::create_dir_all(&bin).unwrap();

        let flake8 = bin.join("flake8");
        std::fs::write(&flake8, script).unwrap();
        std::fs::set_permissions(&flake8, std::fs::Permissions::from_mode(0o755)).unwrap();

        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_tox_ini(&self, content: &str) {
        std::fs::write(self.root().join("tox.ini"), content).unwrap();
    }

    /// Create a source file under a nested subdirectory and return its path.
    pub fn write_source(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, content).unwrap();
        path
    }
}
