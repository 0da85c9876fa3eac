// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project lint configuration from tox.ini.
//!
//! Only the `[flake8]` section is consulted, and only a fixed set of
//! options is recognized. A missing or malformed tox.ini is the normal
//! case for projects without custom lint settings, not an error.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

/// Recognized `[flake8]` options, checked in this order.
const OPTIONS: [&str; 4] = [
    "ignore",
    "import-order-style",
    "application-import-names",
    "max-line-length",
];

/// Lint options extracted from a project's tox.ini.
///
/// Fields are `None` when the option is absent from the file. Immutable
/// after construction; the dispatcher only reads it to build flags.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LintConfig {
    pub ignore: Option<String>,
    pub import_order_style: Option<String>,
    pub application_import_names: Option<String>,
    pub max_line_length: Option<String>,
}

impl LintConfig {
    /// True when no recognized option was found.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The options forwarded verbatim as `--<key>=<value>` flags, in
    /// fixed order. `ignore` is handled separately as the one-shot
    /// ignore override.
    pub fn passthrough(self) -> [(&'static str, Option<String>); 3] {
        [
            ("import-order-style", self.import_order_style),
            ("application-import-names", self.application_import_names),
            ("max-line-length", self.max_line_length),
        ]
    }
}

/// Pull the flake8 options out of `<project_root>/tox.ini`.
pub fn read_ignores(project_root: &Path) -> LintConfig {
    let tox_ini = project_root.join("tox.ini");
    debug!("tox {}", tox_ini.display());

    let Ok(content) = std::fs::read_to_string(&tox_ini) else {
        return LintConfig::default();
    };
    let section = flake8_section(&content).unwrap_or_default();

    let mut config = LintConfig::default();
    for option in OPTIONS {
        let Some(value) = section.get(option) else {
            continue;
        };
        let value = Some(value.clone());
        match option {
            "ignore" => config.ignore = value,
            "import-order-style" => config.import_order_style = value,
            "application-import-names" => config.application_import_names = value,
            _ => config.max_line_length = value,
        }
    }
    config
}

/// Parse the `[flake8]` section of an INI document.
///
/// Returns `None` when the document is malformed (keys before any
/// section header, or a line with no `=`/`:` separator), which callers
/// treat the same as a missing file.
fn flake8_section(content: &str) -> Option<BTreeMap<String, String>> {
    let mut section: Option<String> = None;
    let mut values = BTreeMap::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }
        // Continuation lines (indented values) belong to the previous
        // option; none of the recognized options are multi-line, so they
        // are skipped rather than rejected.
        if line.starts_with([' ', '\t']) {
            continue;
        }
        if let Some(name) = trimmed.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            section = Some(name.trim().to_string());
            continue;
        }
        let current = section.as_deref()?;
        let (key, value) = trimmed.split_once(['=', ':'])?;
        if current == "flake8" {
            values.insert(key.trim().to_string(), value.trim().to_string());
        }
    }
    Some(values)
}

#[cfg(test)]
#[path = "toxini_tests.rs"]
mod tests;
