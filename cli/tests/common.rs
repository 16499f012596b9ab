//! # jenkinsw CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each `.rs` file in
//! that directory (other than this module) is compiled as a separate test crate and
//! runs the compiled `jenkinsw` binary.
//!
//! Every command built here points `JENKINSW_CONFIG_DIR` at a throwaway directory,
//! so tests never touch the real `~/.jenkinsw`.
//!

#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;

/// `jenkinsw` command with a clean environment rooted at `config_dir`.
pub fn jenkinsw_cmd(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("jenkinsw").expect("Failed to find jenkinsw binary for testing");
    cmd.env("JENKINSW_CONFIG_DIR", config_dir)
        .env_remove("JENKINSW_HOST")
        .env_remove("JENKINSW_JENKINSFILE")
        .env_remove("JENKINSW_JAVA")
        .env_remove("JENKINSW_DEBUG")
        .env_remove("JENKINSW_API_TOKEN")
        .env_remove("RUST_LOG")
        .env_remove("CLICOLOR_FORCE");
    cmd
}

/// Adds a context through the CLI, non-interactively.
pub fn add_context(config_dir: &Path, name: &str, url: &str) {
    jenkinsw_cmd(config_dir)
        .args([
            "context",
            "add",
            "--name",
            name,
            "--url",
            url,
            "--username",
            "alice",
            "--token",
            "s3cret",
        ])
        .assert()
        .success();
}
