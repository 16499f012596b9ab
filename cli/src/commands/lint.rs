//! # jenkinsw Lint Command
//!
//! File: cli/src/commands/lint.rs
//!
//! ## Overview
//!
//! Implements `jenkinsw lint`. Sends a declarative Jenkinsfile to the server's
//! `declarative-linter` through the Jenkins CLI of a context and prints the verdict.
//!
//! ## Architecture
//!
//! 1. Resolve the context (`--context` or the current one, `--host` applied).
//! 2. Read the Jenkinsfile named by the global `-j/--jenkinsfile` flag.
//! 3. Run `declarative-linter` with the file on the CLI's stdin.
//! 4. Print `Result: <output>`. A failing linter run then also returns the CLI
//!    output verbatim in a `CommandFailed` error.
//!
//! ```bash
//! jenkinsw lint
//! jenkinsw lint -j ci/Jenkinsfile --context staging
//! ```
//!
use crate::commands::resolve_context;
use crate::common::process::JenkinsCli;
use crate::core::config::ConfigStore;
use crate::core::error::Result;
use crate::core::settings::Settings;
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

const LINTER_COMMAND: &str = "declarative-linter";

/// # Lint Arguments (`LintArgs`)
///
/// The Jenkinsfile itself is chosen with the global `-j/--jenkinsfile` flag.
#[derive(Parser, Debug)]
#[command(about = "Lint a declarative Jenkinsfile")]
pub struct LintArgs {
    /// Context to lint against (default: the current context).
    #[arg(long)]
    context: Option<String>,
}

pub async fn handle_lint(args: LintArgs, settings: &Settings) -> Result<()> {
    info!("Handling lint command...");
    let jenkinsfile = &settings.jenkinsfile;
    println!("Linting {}", jenkinsfile.display());

    let store = ConfigStore::new(settings.paths());
    let cfg = store.read()?;
    let ctx = resolve_context(settings, &cfg, args.context.as_deref())?;
    println!("Jenkins host URL: {}", ctx.host);

    let pipeline = tokio::fs::read(jenkinsfile)
        .await
        .with_context(|| format!("Failed to read Jenkinsfile {}", jenkinsfile.display()))?;
    debug!("Read {} bytes from {}", pipeline.len(), jenkinsfile.display());

    let out = JenkinsCli::new(store.paths(), &ctx, settings.java.as_str())
        .run_command(&[LINTER_COMMAND], Some(&pipeline))
        .await?;
    println!("Result: {}", out.text().trim_end());
    out.into_result(LINTER_COMMAND)?;
    Ok(())
}
