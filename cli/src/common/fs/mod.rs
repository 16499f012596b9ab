//! # jenkinsw Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! Filesystem helpers for the config directory. Everything jenkinsw writes there
//! is owner-only; see `io` for the details.
//!
//! ```rust
//! use crate::common::fs::io;
//!
//! io::ensure_private_dir(&paths.credential_dir(&ctx))?;
//! io::write_private_file(&paths.credential_path(&ctx), b"alice:token")?;
//! ```
//!

/// Owner-only directory creation and file I/O.
pub mod io;
