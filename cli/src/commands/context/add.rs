//! # jenkinsw Context Add Handler
//!
//! File: cli/src/commands/context/add.rs
//!
//! ## Overview
//!
//! Implements `jenkinsw context add`. Each value (name, URL, username, API token)
//! comes from its flag when given and is prompted for otherwise, so the command works
//! both interactively and in scripts.
//!
//! ## Architecture
//!
//! 1. Collect and validate the values (`common::ui` prompts, `settings::validate_host`).
//! 2. Read the contexts document and append the new context. The first context added
//!    becomes current.
//! 3. Save the document. The API token is *not* part of it.
//! 4. Write `user:token` to the context's private credential file.
//!
//! The Jenkins CLI jar is not downloaded here; `jenkinsw context init` does that.
//!
use crate::common::ui;
use crate::core::config::{ConfigStore, Context};
use crate::core::credentials;
use crate::core::error::{JenkinswError, Result};
use crate::core::settings::{validate_host, Settings};
use clap::Parser;
use tracing::{debug, info};

/// # Context Add Arguments (`AddArgs`)
///
/// Any value not given is prompted for.
#[derive(Parser, Debug)]
#[command(
    about = "Add a Jenkins context",
    long_about = "Add a new Jenkins context configuration, either by passing the values as flags or interactively."
)]
pub struct AddArgs {
    /// Name of the new context.
    #[arg(long)]
    name: Option<String>,

    /// Jenkins URL, e.g. https://ci.example.com.
    #[arg(long)]
    url: Option<String>,

    /// Jenkins user name.
    #[arg(long)]
    username: Option<String>,

    /// Jenkins API token.
    #[arg(long, env = "JENKINSW_API_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

/// # Handle Context Add (`handle_add`)
///
/// Fails with `AlreadyExists` when the name is taken; nothing is written then.
pub async fn handle_add(args: AddArgs, settings: &Settings) -> Result<()> {
    info!("Handling context add command...");

    let name = ui::value_or_prompt(args.name, "Context name")?
        .trim()
        .to_string();
    validate_name(&name)?;
    let host = validate_host(&ui::value_or_prompt(args.url, "Jenkins URL")?)?;
    let username = ui::value_or_prompt(args.username, "Jenkins username")?;
    let token = ui::secret_or_prompt(args.token, "Jenkins API token")?;

    let store = ConfigStore::new(settings.paths());
    let mut cfg = store.read()?;

    let context = Context {
        name,
        host,
        username,
        api_token: token,
    };
    // The document only carries the public half.
    cfg.add_context(Context {
        api_token: String::new(),
        ..context.clone()
    })?;
    store.save(&cfg)?;
    credentials::save(store.paths(), &context)?;
    debug!("Stored credentials for context '{}'", context.name);

    println!("Added context '{}' ({})", context.name, context.host);
    if cfg.current_context == context.name {
        println!("Switched to context '{}'", context.name);
    }
    println!("Run 'jenkinsw context init' to download the Jenkins CLI for it.");
    Ok(())
}

/// Context names become directory names under `context/`.
fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        anyhow::bail!(JenkinswError::Config(format!(
            "Invalid context name '{}': must be non-empty and must not contain path separators",
            name
        )));
    }
    Ok(())
}
