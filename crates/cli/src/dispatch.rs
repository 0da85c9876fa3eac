// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Final flake8 invocation: flag assembly, launch, and output relay.
//!
//! Stdout is reserved for relayed flake8 findings. Flymake disables
//! itself on any malformed stdout line, so diagnostics from this module
//! go to the log only.

use std::ffi::OsString;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::context::RunContext;
use crate::error::{Error, Result};

/// Ordered command tokens for one flake8 run, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: PathBuf,
    args: Vec<OsString>,
    workdir: Option<PathBuf>,
}

impl Invocation {
    /// Assemble the token sequence from a consumed context.
    ///
    /// Taking `ctx` by value makes the single-use fields single-use by
    /// construction: there is no context left to build a second
    /// invocation from.
    pub fn from_context(ctx: RunContext, target: &Path, passthrough: &[String]) -> Self {
        let RunContext {
            workdir,
            flake8,
            config,
            ignores,
            ..
        } = ctx;

        let mut args: Vec<OsString> = Vec::new();
        if !ignores.is_empty() {
            args.push(format!("--ignore={ignores}").into());
        }
        // flake8-import-order workarounds: hacking only reads these from
        // a cwd-relative tox.ini, so they are forwarded explicitly.
        if let Some(config) = config {
            for (key, value) in config.passthrough() {
                if let Some(value) = value.filter(|v| !v.is_empty()) {
                    args.push(format!("--{key}={value}").into());
                }
            }
        }
        args.push(target.as_os_str().to_os_string());
        args.extend(passthrough.iter().map(OsString::from));

        Self {
            program: flake8,
            args,
            workdir,
        }
    }

    /// Full token sequence, program first.
    pub fn tokens(&self) -> Vec<OsString> {
        std::iter::once(self.program.clone().into_os_string())
            .chain(self.args.iter().cloned())
            .collect()
    }

    /// Launch the child and relay its stdout, returning its exit code.
    fn dispatch(self) -> Result<i32> {
        if let Some(dir) = &self.workdir {
            // hacking resolves tox.ini relative to the cwd, so the
            // chdir has to happen before the spawn.
            std::env::set_current_dir(dir).map_err(|e| Error::Workdir {
                path: dir.clone(),
                source: e,
            })?;
        }

        let mut child = Command::new(&self.program)
            .args(&self.args)
            // A stale activation marker would confuse the venv's own
            // environment handling.
            .env_remove("VIRTUAL_ENV")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| Error::Launch {
                path: self.program.clone(),
                source: e,
            })?;

        if let Some(out) = child.stdout.take() {
            relay(out)?;
        }
        if let Some(err) = child.stderr.take() {
            let mut buf = String::new();
            if BufReader::new(err).read_to_string(&mut buf).is_ok() && !buf.is_empty() {
                debug!("flake8 stderr: {buf}");
            }
        }

        let status = child.wait().map_err(|e| Error::Wait { source: e })?;
        Ok(status.code().unwrap_or(1))
    }
}

/// Run flake8 for `ctx` against `target` and return its exit code.
///
/// The caller exits with this code verbatim: zero means no findings,
/// non-zero means findings or a tool error, and neither is wrapped.
pub fn run(ctx: RunContext, target: &Path, passthrough: &[String]) -> Result<i32> {
    info!("attempting to run flake8 on {}", target.display());
    let invocation = Invocation::from_context(ctx, target, passthrough);
    info!("running: {:?}", invocation.tokens());
    invocation.dispatch()
}

/// Relay child stdout line-by-line as it arrives.
///
/// Flushed per line: flymake reads incrementally and expects prompt,
/// line-structured output rather than a buffered dump at exit.
fn relay(out: impl Read) -> Result<()> {
    let reader = BufReader::new(out);
    let mut sink = std::io::stdout();
    for line in reader.lines() {
        let line = line.map_err(|e| Error::Relay { source: e })?;
        debug!("flake8: {line}");
        writeln!(sink, "{line}")
            .and_then(|()| sink.flush())
            .map_err(|e| Error::Relay { source: e })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
