//! # jenkinsw Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error kinds used throughout jenkinsw. Every component
//! returns its failures to the caller; only `main` renders them and turns them into
//! a non-zero exit status.
//!
//! ## Architecture
//!
//! The error system consists of two parts:
//! - `JenkinswError`: a `thiserror` enum with one variant per failure kind
//!   (unknown context, duplicate context, missing credentials, HTTP status, ...).
//! - `Result<T>`: an alias for `anyhow::Result<T>`, so call sites can attach context
//!   with `.with_context(...)` while the original kind stays recoverable.
//!
//! ## Examples
//!
//! ```rust
//! // Raise a specific error kind
//! anyhow::bail!(JenkinswError::NotFound { name: name.to_string() });
//!
//! // Recover the kind further up the stack
//! if let Some(JenkinswError::MissingAuth { .. }) = err.downcast_ref::<JenkinswError>() {
//!     // ...
//! }
//! ```
//!
use thiserror::Error;

/// Custom error type for jenkinsw.
#[derive(Error, Debug)]
pub enum JenkinswError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Context named '{name}' not found")]
    NotFound { name: String },

    #[error("Context named '{name}' already exists")]
    AlreadyExists { name: String },

    #[error("No context named '{name}'. Use 'jenkinsw context list' to view available contexts.")]
    InvalidContext { name: String },

    #[error(
        "Authentication file not present for context '{name}'. Please run 'jenkinsw context add' again."
    )]
    MissingAuth { name: String },

    #[error(
        "Jenkins CLI not found at {path} for context '{name}'. Run 'jenkinsw context init' to download it."
    )]
    CliNotFound { name: String, path: String },

    #[error("request failed with status: {status}")]
    HttpStatus { status: String },

    #[error("Failed to connect to Jenkins at {host}: {reason}")]
    Connection { host: String, reason: String },

    #[error("Jenkins API request failed: {0}")]
    Api(String),

    #[error("Jenkins CLI command failed: {cmd}, Status: {status}, Output:\n{output}")]
    CommandFailed {
        cmd: String,
        status: String,
        output: String,
    },
}

/// Type alias for Result using anyhow::Error.
pub type Result<T> = anyhow::Result<T>;
