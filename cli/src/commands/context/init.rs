//! # jenkinsw Context Init Handler
//!
//! File: cli/src/commands/context/init.rs
//!
//! ## Overview
//!
//! Implements `jenkinsw context init [NAME]`. Downloads `jenkins-cli.jar` from the
//! server of a context (the current one by default) into the per-host CLI cache,
//! replacing any jar already there. Contexts sharing a host share the jar.
//!
//! The jar is served by every Jenkins controller at `<host>/jnlpJars/jenkins-cli.jar`
//! and needs no authentication.
//!
use crate::commands::resolve_context;
use crate::common::fs::io;
use crate::common::network::download::download;
use crate::core::config::{ConfigStore, Context};
use crate::core::error::Result;
use crate::core::settings::Settings;
use anyhow::Context as _;
use clap::Parser;
use tracing::info;

/// Path of the CLI jar relative to the Jenkins root URL.
const CLI_JAR_PATH: &str = "jnlpJars/jenkins-cli.jar";

#[derive(Parser, Debug)]
#[command(about = "Download the Jenkins CLI for a context")]
pub struct InitArgs {
    /// Context to initialize (default: the current context).
    name: Option<String>,
}

pub async fn handle_init(args: InitArgs, settings: &Settings) -> Result<()> {
    info!("Handling context init command...");
    let store = ConfigStore::new(settings.paths());
    let cfg = store.read()?;
    let ctx = resolve_context(settings, &cfg, args.name.as_deref())?;
    let paths = store.paths();

    io::ensure_private_dir(&paths.cli_cache_dir(&ctx))?;
    let url = cli_jar_url(&ctx);
    let destination = paths.cli_path(&ctx);
    println!(
        "Downloading Jenkins CLI from {} to {}",
        url,
        destination.display()
    );
    let bytes = download(&destination, &url)
        .await
        .with_context(|| format!("Failed to download the Jenkins CLI for context '{}'", ctx.name))?;
    info!("Downloaded {} bytes", bytes);
    println!("Jenkins CLI for context '{}' is ready", ctx.name);
    Ok(())
}

fn cli_jar_url(ctx: &Context) -> String {
    format!("{}/{}", ctx.host.trim_end_matches('/'), CLI_JAR_PATH)
}
