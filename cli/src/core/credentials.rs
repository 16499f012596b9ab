//! # jenkinsw Credential Store
//!
//! File: cli/src/core/credentials.rs
//!
//! Stores `username:token` for each context in `<root>/context/<name>/.auth`
//! (directory 0700, file 0600, no trailing newline). The Jenkins CLI reads the same
//! file through its `-auth @<file>` option.
//!
use crate::common::fs::io;
use crate::core::config::Context;
use crate::core::error::{JenkinswError, Result};
use crate::core::paths::CachePaths;
use tracing::{debug, info};

/// A username/API token pair read back from a credential sidecar.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub token: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("token", &"********")
            .finish()
    }
}

/// Writes the sidecar for `context` from its `username` and `api_token`.
pub fn save(paths: &CachePaths, context: &Context) -> Result<()> {
    io::ensure_private_dir(&paths.credential_dir(context))?;
    let file = paths.credential_path(context);
    let auth = format!("{}:{}", context.username, context.api_token);
    io::write_private_file(&file, auth.as_bytes())?;
    info!(
        "Saved credentials for context '{}' to {}",
        context.name,
        file.display()
    );
    Ok(())
}

pub fn exists(paths: &CachePaths, context: &Context) -> bool {
    let file = paths.credential_path(context);
    let present = file.is_file();
    debug!("Credential file {} present: {}", file.display(), present);
    present
}

/// Fails with `MissingAuth` if the sidecar for `context` is absent.
pub fn require(paths: &CachePaths, context: &Context) -> Result<()> {
    if !exists(paths, context) {
        anyhow::bail!(JenkinswError::MissingAuth {
            name: context.name.clone()
        });
    }
    Ok(())
}

/// Reads the sidecar back, splitting on the first `:`.
pub fn load(paths: &CachePaths, context: &Context) -> Result<Credentials> {
    require(paths, context)?;
    let file = paths.credential_path(context);
    let content = io::read_file_to_string(&file)?;
    match content.trim_end_matches(['\r', '\n']).split_once(':') {
        Some((username, token)) => Ok(Credentials {
            username: username.to_string(),
            token: token.to_string(),
        }),
        None => anyhow::bail!(JenkinswError::FileSystem(format!(
            "Malformed credential file {}: expected 'username:token'",
            file.display()
        ))),
    }
}
