//! # jenkinsw Runtime Settings
//!
//! File: cli/src/core/settings.rs
//!
//! ## Overview
//!
//! Typed runtime options, parsed once from the global command-line flags (or their
//! `JENKINSW_*` environment fallbacks) and validated before any command runs. The
//! resulting `Settings` value is passed explicitly to every command handler.
//!
//! Recognized options:
//! - `config_dir`: root of the dotfile directory (default `~/.jenkinsw`)
//! - `host`: optional Jenkins URL overriding the resolved context's host
//! - `jenkinsfile`: pipeline definition to lint (default `Jenkinsfile`)
//! - `debug`: enables debug logging
//! - `java`: Java executable that runs the Jenkins CLI jar (default `java`)
//!
use crate::core::config::Context;
use crate::core::error::{JenkinswError, Result};
use crate::core::paths::CachePaths;
use clap::Args;
use std::path::PathBuf;
use tracing::debug;
use url::Url;

/// Name of the dotfile directory created in the user's home directory.
pub const CONFIG_DIR_NAME: &str = ".jenkinsw";

/// Global flags shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Directory holding the contexts document and caches (default: ~/.jenkinsw).
    #[arg(long, env = "JENKINSW_CONFIG_DIR", global = true)]
    pub config_dir: Option<String>,

    /// Jenkins URL to use instead of the context's host.
    #[arg(long, env = "JENKINSW_HOST", global = true)]
    pub host: Option<String>,

    /// Path to the Jenkinsfile to lint.
    #[arg(
        short,
        long,
        env = "JENKINSW_JENKINSFILE",
        default_value = "Jenkinsfile",
        global = true
    )]
    pub jenkinsfile: String,

    /// Enable debug logging.
    #[arg(long, env = "JENKINSW_DEBUG", global = true)]
    pub debug: bool,

    /// Java executable used to run the Jenkins CLI jar.
    #[arg(long, env = "JENKINSW_JAVA", default_value = "java", global = true)]
    pub java: String,
}

/// Validated runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub config_dir: PathBuf,
    pub host: Option<String>,
    pub jenkinsfile: PathBuf,
    pub debug: bool,
    pub java: String,
}

impl Settings {
    /// Builds `Settings` from the parsed global flags.
    ///
    /// # Errors
    ///
    /// Fails if no config directory was given and the home directory cannot be
    /// determined, or if `--host` is not an `http`/`https` URL.
    pub fn load(args: &GlobalArgs) -> Result<Self> {
        let config_dir = match &args.config_dir {
            Some(dir) => PathBuf::from(shellexpand::tilde(dir).into_owned()),
            None => default_config_dir()?,
        };

        let host = match &args.host {
            Some(host) => Some(validate_host(host)?),
            None => None,
        };

        let settings = Settings {
            config_dir,
            host,
            jenkinsfile: PathBuf::from(shellexpand::tilde(&args.jenkinsfile).into_owned()),
            debug: args.debug,
            java: args.java.clone(),
        };
        debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    /// Cache and config path layout rooted at `config_dir`.
    pub fn paths(&self) -> CachePaths {
        CachePaths::new(&self.config_dir)
    }

    /// Applies the `--host` override, if any, to a resolved context.
    pub fn apply_host(&self, mut context: Context) -> Context {
        if let Some(host) = &self.host {
            debug!(
                "Overriding host of context '{}' with {}",
                context.name, host
            );
            context.host = host.clone();
        }
        context
    }
}

fn default_config_dir() -> Result<PathBuf> {
    match dirs::home_dir() {
        Some(home) => Ok(home.join(CONFIG_DIR_NAME)),
        None => anyhow::bail!(JenkinswError::FileSystem(
            "Could not determine the user's home directory".to_string()
        )),
    }
}

/// Checks that `host` is an absolute `http`/`https` URL and strips a trailing `/`.
pub fn validate_host(host: &str) -> Result<String> {
    let parsed = Url::parse(host).map_err(|e| {
        JenkinswError::Config(format!("Invalid Jenkins URL '{}': {}", host, e))
    })?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        anyhow::bail!(JenkinswError::Config(format!(
            "Invalid Jenkins URL '{}': expected an http or https URL",
            host
        )));
    }
    Ok(host.trim_end_matches('/').to_string())
}
