//! # jenkinsw Jenkins API (`common::jenkins`)
//!
//! File: cli/src/common/jenkins/mod.rs
//!
//! Remote queries that go through the Jenkins JSON API rather than the CLI jar:
//! server version and job listing. Commands that need the CLI jar itself go through
//! `common::process`.
//!
//! ```rust
//! let creds = credentials::load(&paths, &context)?;
//! let client = JenkinsClient::connect(&context, creds).await?;
//! println!("{}", client.version());
//! for job in client.list_jobs(2).await? {
//!     println!("{}", job.name);
//! }
//! ```
//!

/// JSON API client (connect, version, recursive job listing).
pub mod client;

pub use client::JenkinsClient;
