//! # jenkinsw Context Configuration
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module owns the persisted contexts document (`~/.jenkinsw/config`) and the
//! lookups performed on it. A context bundles a Jenkins server URL with the user
//! that talks to it; the secret itself lives in the per-context credential sidecar
//! (see `core::credentials`), not in this document.
//!
//! ## Architecture
//!
//! - `Config` / `Context`: the YAML data model.
//! - Context resolution (`current_context`, `context`, `add_context`,
//!   `set_current_context`): pure in-memory operations on a `Config`.
//! - `ConfigStore`: reads and writes the document under a `CachePaths` root, creating
//!   the directory (0700) and an empty document (0600) on first use.
//!
//! The document is read once at the start of a command, mutated in memory, and
//! written back immediately after a mutation:
//!
//! ```rust
//! let store = ConfigStore::new(settings.paths());
//! let mut cfg = store.read()?;
//! cfg.add_context(context)?;
//! store.save(&cfg)?;
//! ```
//!
//! Document format:
//!
//! ```yaml
//! contexts:
//! - name: prod
//!   host: https://ci.example.com
//!   username: alice
//! current-context: prod
//! ```
//!
use crate::common::fs::io;
use crate::core::error::{JenkinswError, Result};
use crate::core::paths::CachePaths;
use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// The persisted contexts document.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub contexts: Vec<Context>,
    /// Name of the active context, or empty if none is set.
    #[serde(rename = "current-context", default)]
    pub current_context: String,
}

/// One named Jenkins server profile.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Context {
    pub name: String,
    pub host: String,
    #[serde(default)]
    pub username: String,
    /// Only present in documents written before credentials moved to the sidecar file.
    #[serde(rename = "apiToken", default, skip_serializing_if = "String::is_empty")]
    pub api_token: String,
}

impl Config {
    /// Returns the context named by `current-context`.
    ///
    /// Fails with `NotFound` when no context is current or the named one is gone.
    pub fn current_context(&self) -> Result<&Context> {
        if self.current_context.is_empty() {
            return Err(anyhow::Error::new(JenkinswError::NotFound {
                name: String::new(),
            })
            .context(
                "No current context set. Run 'jenkinsw context add' or 'jenkinsw context use <name>'.",
            ));
        }
        self.context(&self.current_context)
    }

    /// Returns the context with the given name.
    pub fn context(&self, name: &str) -> Result<&Context> {
        match self.contexts.iter().find(|ctx| ctx.name == name) {
            Some(ctx) => Ok(ctx),
            None => anyhow::bail!(JenkinswError::NotFound {
                name: name.to_string()
            }),
        }
    }

    pub fn has_context(&self, name: &str) -> bool {
        self.contexts.iter().any(|ctx| ctx.name == name)
    }

    /// Appends `context`, making it current if no context is current yet.
    ///
    /// Does not persist; call `ConfigStore::save` afterwards.
    pub fn add_context(&mut self, context: Context) -> Result<()> {
        if self.has_context(&context.name) {
            anyhow::bail!(JenkinswError::AlreadyExists { name: context.name });
        }
        if self.current_context.is_empty() {
            debug!("No current context set, promoting '{}'", context.name);
            self.current_context = context.name.clone();
        }
        self.contexts.push(context);
        Ok(())
    }

    /// Switches the current context. `current-context` is untouched on failure.
    pub fn set_current_context(&mut self, name: &str) -> Result<()> {
        if !self.has_context(name) {
            anyhow::bail!(JenkinswError::InvalidContext {
                name: name.to_string()
            });
        }
        self.current_context = name.to_string();
        Ok(())
    }
}

/// Reads and writes the contexts document under a config root.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    paths: CachePaths,
}

impl ConfigStore {
    pub fn new(paths: CachePaths) -> Self {
        ConfigStore { paths }
    }

    pub fn paths(&self) -> &CachePaths {
        &self.paths
    }

    /// Loads the document, creating the directory and an empty document if absent.
    pub fn read(&self) -> Result<Config> {
        io::ensure_private_dir(self.paths.root())?;

        let file = self.paths.config_file();
        if io::touch_private_file(&file)? {
            info!("Config file {} does not exist, created it", file.display());
        }

        let content = io::read_file_to_string(&file)?;
        if content.trim().is_empty() {
            debug!("Config file {} is empty", file.display());
            return Ok(Config::default());
        }
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML from file: {}", file.display()))?;
        debug!(
            "Loaded {} context(s) from {}, current: '{}'",
            config.contexts.len(),
            file.display(),
            config.current_context
        );
        Ok(config)
    }

    /// Writes the whole document back. Not atomic.
    pub fn save(&self, config: &Config) -> Result<()> {
        let yaml = serde_yaml::to_string(config).context("Failed to serialize configuration")?;
        io::ensure_private_dir(self.paths.root())?;
        let file = self.paths.config_file();
        io::write_private_file(&file, yaml.as_bytes())?;
        info!("Saved configuration to {}", file.display());
        Ok(())
    }

    /// Switches the current context and persists the document.
    pub fn use_context(&self, config: &mut Config, name: &str) -> Result<()> {
        config.set_current_context(name)?;
        self.save(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn context(name: &str, host: &str) -> Context {
        Context {
            name: name.into(),
            host: host.into(),
            username: "alice".into(),
            api_token: String::new(),
        }
    }

    fn error_kind(err: &anyhow::Error) -> Option<&JenkinswError> {
        err.downcast_ref::<JenkinswError>()
    }

    #[test]
    fn test_add_then_get_returns_context() {
        let mut cfg = Config::default();
        let prod = context("prod", "https://ci.example.com");
        cfg.add_context(prod.clone()).unwrap();
        assert_eq!(cfg.context("prod").unwrap(), &prod);
    }

    #[test]
    fn test_add_duplicate_fails_and_leaves_contexts() {
        let mut cfg = Config::default();
        cfg.add_context(context("prod", "https://ci.example.com"))
            .unwrap();
        let before = cfg.clone();

        let err = cfg
            .add_context(context("prod", "https://other.example.com"))
            .unwrap_err();
        assert!(matches!(
            error_kind(&err),
            Some(JenkinswError::AlreadyExists { name }) if name == "prod"
        ));
        assert_eq!(cfg, before);
    }

    #[test]
    fn test_first_added_context_becomes_current() {
        let mut cfg = Config::default();
        cfg.add_context(context("prod", "https://ci.example.com"))
            .unwrap();
        assert_eq!(cfg.current_context, "prod");

        cfg.add_context(context("staging", "https://staging.example.com"))
            .unwrap();
        assert_eq!(cfg.current_context, "prod");
        assert_eq!(cfg.current_context().unwrap().name, "prod");
    }

    #[test]
    fn test_lookup_unknown_context() {
        let cfg = Config::default();
        let err = cfg.context("missing").unwrap_err();
        assert!(matches!(
            error_kind(&err),
            Some(JenkinswError::NotFound { name }) if name == "missing"
        ));
    }

    #[test]
    fn test_current_context_empty_is_not_found() {
        let cfg = Config::default();
        let err = cfg.current_context().unwrap_err();
        assert!(matches!(
            error_kind(&err),
            Some(JenkinswError::NotFound { .. })
        ));
        assert!(err.to_string().contains("No current context set"));
    }

    #[test]
    fn test_current_context_dangling_is_not_found() {
        let mut cfg = Config::default();
        cfg.add_context(context("prod", "https://ci.example.com"))
            .unwrap();
        cfg.current_context = "ghost".into();
        let err = cfg.current_context().unwrap_err();
        assert!(matches!(
            error_kind(&err),
            Some(JenkinswError::NotFound { name }) if name == "ghost"
        ));
    }

    #[test]
    fn test_set_current_context_unknown_leaves_current() {
        let mut cfg = Config::default();
        cfg.add_context(context("prod", "https://ci.example.com"))
            .unwrap();

        let err = cfg.set_current_context("nope").unwrap_err();
        assert!(matches!(
            error_kind(&err),
            Some(JenkinswError::InvalidContext { .. })
        ));
        assert_eq!(cfg.current_context, "prod");
    }

    #[test]
    fn test_read_creates_empty_document() {
        let dir = tempdir().unwrap();
        let root = dir.path().join(".jenkinsw");
        let store = ConfigStore::new(CachePaths::new(&root));

        let cfg = store.read().unwrap();
        assert!(cfg.contexts.is_empty());
        assert_eq!(cfg.current_context, "");
        assert!(root.join("config").is_file());

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let dir_mode = fs::metadata(&root).unwrap().permissions().mode() & 0o777;
            let file_mode = fs::metadata(root.join("config"))
                .unwrap()
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(dir_mode, 0o700);
            assert_eq!(file_mode, 0o600);
        }
    }

    #[test]
    fn test_save_then_read_round_trip() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(CachePaths::new(dir.path()));

        let mut cfg = Config::default();
        cfg.add_context(context("zeta", "https://z.example.com"))
            .unwrap();
        cfg.add_context(context("alpha", "http://localhost:8080/jenkins"))
            .unwrap();
        cfg.contexts[1].api_token = "legacy-token".into();
        store.save(&cfg).unwrap();

        let loaded = store.read().unwrap();
        assert_eq!(loaded, cfg);
        assert_eq!(loaded.contexts[0].name, "zeta");
    }

    #[test]
    fn test_document_keys() {
        let mut cfg = Config::default();
        cfg.add_context(context("prod", "https://ci.example.com"))
            .unwrap();
        let yaml = serde_yaml::to_string(&cfg).unwrap();
        assert!(yaml.contains("current-context: prod"));
        assert!(yaml.contains("contexts:"));
        assert!(!yaml.contains("apiToken"));

        let legacy = r#"
contexts:
- name: old
  host: https://old.example.com
  username: bob
  apiToken: s3cret
current-context: old
"#;
        let parsed: Config = serde_yaml::from_str(legacy).unwrap();
        assert_eq!(parsed.contexts[0].api_token, "s3cret");
        assert_eq!(parsed.current_context().unwrap().username, "bob");
    }

    #[test]
    fn test_use_context_persists() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(CachePaths::new(dir.path()));
        let mut cfg = store.read().unwrap();
        cfg.add_context(context("prod", "https://ci.example.com"))
            .unwrap();
        cfg.add_context(context("staging", "https://staging.example.com"))
            .unwrap();
        store.save(&cfg).unwrap();

        store.use_context(&mut cfg, "staging").unwrap();
        assert_eq!(store.read().unwrap().current_context, "staging");

        assert!(store.use_context(&mut cfg, "missing").is_err());
        assert_eq!(store.read().unwrap().current_context, "staging");
    }

    #[test]
    fn test_read_rejects_malformed_document() {
        let dir = tempdir().unwrap();
        let store = ConfigStore::new(CachePaths::new(dir.path()));
        fs::write(dir.path().join("config"), "contexts: [unclosed").unwrap();
        let err = store.read().unwrap_err();
        assert!(err.to_string().contains("Failed to parse YAML"));
    }
}
