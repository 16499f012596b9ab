//! # jenkinsw Network Utilities (`common::network`)
//!
//! File: cli/src/common/network/mod.rs
//!
//! ## Overview
//!
//! Plain HTTP operations that are not part of the Jenkins API client:
//!
//! - **`download`**: streams a URL into a local file, failing on non-2xx responses.
//!   Used by `jenkinsw context init` to fetch `<host>/jnlpJars/jenkins-cli.jar`.
//!
//! ```rust
//! use crate::common::network::download;
//!
//! # async fn run_example(dest: &std::path::Path) -> crate::core::error::Result<()> {
//! download::download(dest, "https://ci.example.com/jnlpJars/jenkins-cli.jar").await?;
//! # Ok(())
//! # }
//! ```
//!

/// Streaming file download with status checking.
pub mod download;
