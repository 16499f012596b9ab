//! # jenkinsw Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates all top-level commands of the jenkinsw CLI. Each command
//! defines its own Clap arguments struct and an async handler that receives those
//! arguments together with the validated `Settings`.
//!
//! ## Command Groups
//!
//! - `context`: manage Jenkins contexts (`add`, `list`, `show`, `use`, `init`, `test`)
//! - `jobs`: list jobs through the JSON API, expanding folders
//! - `lint`: lint a declarative Jenkinsfile with the Jenkins CLI
//! - `version`: print wrapper and server versions
//!
use crate::core::config::{Config, Context};
use crate::core::error::Result;
use crate::core::settings::Settings;

/// Command group for managing Jenkins contexts.
pub mod context;
/// Lists jobs on the server of a context.
pub mod jobs;
/// Lints a Jenkinsfile using the cached Jenkins CLI.
pub mod lint;
/// Prints version information for jenkinsw and the Jenkins server.
pub mod version;

/// Resolves `name` (or the current context when `None`) and applies `--host`.
pub fn resolve_context(settings: &Settings, cfg: &Config, name: Option<&str>) -> Result<Context> {
    let context = match name {
        Some(name) => cfg.context(name)?,
        None => cfg.current_context()?,
    };
    Ok(settings.apply_host(context.clone()))
}
