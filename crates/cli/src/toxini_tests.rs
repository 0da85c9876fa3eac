// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::fs;
use tempfile::tempdir;

fn write_tox(content: &str) -> tempfile::TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("tox.ini"), content).unwrap();
    dir
}

#[test]
fn reads_ignore_from_flake8_section() {
    let dir = write_tox("[flake8]\nignore = H301,H302\n");

    let config = read_ignores(dir.path());
    assert_eq!(config.ignore.as_deref(), Some("H301,H302"));
    assert_eq!(config.import_order_style, None);
    assert_eq!(config.application_import_names, None);
    assert_eq!(config.max_line_length, None);
}

#[test]
fn reads_all_recognized_options() {
    let dir = write_tox(
        "[flake8]\n\
         ignore = E501\n\
         import-order-style = pep8\n\
         application-import-names = nova\n\
         max-line-length = 100\n",
    );

    let config = read_ignores(dir.path());
    assert_eq!(config.ignore.as_deref(), Some("E501"));
    assert_eq!(config.import_order_style.as_deref(), Some("pep8"));
    assert_eq!(config.application_import_names.as_deref(), Some("nova"));
    assert_eq!(config.max_line_length.as_deref(), Some("100"));
}

#[test]
fn ignores_options_outside_flake8_section() {
    let dir = write_tox("[testenv]\nignore = H301\n\n[flake8]\nmax-line-length: 99\n");

    let config = read_ignores(dir.path());
    assert_eq!(config.ignore, None);
    assert_eq!(config.max_line_length.as_deref(), Some("99"));
}

#[test]
fn unrecognized_options_are_dropped() {
    let dir = write_tox("[flake8]\nexclude = .git\nignore = H233\n");

    let config = read_ignores(dir.path());
    assert_eq!(config.ignore.as_deref(), Some("H233"));
    assert_eq!(config.import_order_style, None);
}

#[test]
fn missing_file_yields_empty_config() {
    let dir = tempdir().unwrap();
    assert!(read_ignores(dir.path()).is_empty());
}

#[test]
fn malformed_file_yields_empty_config() {
    let dir = write_tox("this is not an ini file\n[flake8]\nignore = H301\n");
    assert!(read_ignores(dir.path()).is_empty());
}

#[test]
fn comments_and_continuations_are_skipped() {
    let dir = write_tox(
        "[flake8]\n\
         # hacking picks these up itself\n\
         ; legacy comment style\n\
         ignore = H301,\n\
         \tH302\n",
    );

    let config = read_ignores(dir.path());
    assert_eq!(config.ignore.as_deref(), Some("H301,"));
}

#[test]
fn flake8_section_rejects_keys_before_any_header() {
    assert_eq!(flake8_section("ignore = H301\n[flake8]\n"), None);
}
