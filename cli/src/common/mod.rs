//! # jenkinsw Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities used by the command handlers, kept apart from command-specific
//! logic (`commands::`) and core infrastructure (`core::`).
//!
//! - **`fs`**: owner-only directory and file helpers.
//! - **`jenkins`**: Jenkins JSON API client (server version, job listing).
//! - **`network`**: plain HTTP download of the Jenkins CLI jar.
//! - **`process`**: launching the cached Jenkins CLI jar for a context.
//! - **`ui`**: prompts, colours and text formatting.
//!
//! ```rust
//! use crate::common::{network, process::JenkinsCli};
//!
//! # async fn run_example(paths: &CachePaths, ctx: &Context) -> Result<()> {
//! network::download::download(&paths.cli_path(ctx), &jar_url).await?;
//! let out = JenkinsCli::new(paths, ctx, "java").run_command(&["who-am-i"], None).await?;
//! # Ok(())
//! # }
//! ```
//!

/// Filesystem helpers (private directories and files).
pub mod fs;
/// Jenkins JSON API client.
pub mod jenkins;
/// HTTP download.
pub mod network;
/// Jenkins CLI jar dispatch.
pub mod process;
/// Terminal prompts and styling.
pub mod ui;
