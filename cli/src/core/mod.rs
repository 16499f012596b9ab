//! # jenkinsw Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure shared by every command:
//! - `config`: the persisted contexts document and context resolution
//! - `credentials`: the per-context `username:token` sidecar
//! - `error`: error kinds and the `Result` alias
//! - `paths`: config/cache path layout derived from a context
//! - `settings`: typed runtime options parsed once at startup
//!
//! ```rust
//! use crate::core::config::ConfigStore;
//! use crate::core::error::{JenkinswError, Result};
//! use crate::core::settings::Settings;
//! ```
//!
pub mod config;
pub mod credentials;
pub mod error;
pub mod paths;
pub mod settings;
