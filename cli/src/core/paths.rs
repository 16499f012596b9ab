//! # jenkinsw Path Resolver
//!
//! File: cli/src/core/paths.rs
//!
//! ## Overview
//!
//! Derives every on-disk location jenkinsw uses from the config directory root:
//!
//! ```text
//! <root>/config                          contexts document
//! <root>/cli/<sanitized-host>/cli.jar    cached Jenkins CLI, shared by contexts on the same host
//! <root>/context/<context-name>/.auth    credential sidecar, one per context name
//! ```
//!
//! All functions here are pure; nothing touches the filesystem.
//!
use crate::core::config::Context;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config";
pub const CLI_CACHE_DIR: &str = "cli";
pub const CLI_FILE_NAME: &str = "cli.jar";
pub const CONTEXT_CACHE_DIR: &str = "context";
pub const AUTH_FILE_NAME: &str = ".auth";

/// Path layout rooted at the jenkinsw config directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePaths {
    root: PathBuf,
}

impl CachePaths {
    pub fn new(root: impl AsRef<Path>) -> Self {
        CachePaths {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> PathBuf {
        self.root.join(CONFIG_FILE_NAME)
    }

    /// Cache directory for the CLI jar of `context`'s host.
    pub fn cli_cache_dir(&self, context: &Context) -> PathBuf {
        self.root
            .join(CLI_CACHE_DIR)
            .join(sanitize_host(&context.host))
    }

    pub fn cli_path(&self, context: &Context) -> PathBuf {
        self.cli_cache_dir(context).join(CLI_FILE_NAME)
    }

    /// Keyed by context name, never by host.
    pub fn credential_dir(&self, context: &Context) -> PathBuf {
        self.root.join(CONTEXT_CACHE_DIR).join(&context.name)
    }

    pub fn credential_path(&self, context: &Context) -> PathBuf {
        self.credential_dir(context).join(AUTH_FILE_NAME)
    }
}

/// Turns a host URL into a single path segment.
///
/// `https://ci.example.com:8443/jenkins` becomes `https_ci.example.com_8443_jenkins`.
pub fn sanitize_host(host: &str) -> String {
    host.replace("://", "_").replace(['/', ':'], "_")
}
