//! # jenkinsw Version Command
//!
//! File: cli/src/commands/version.rs
//!
//! Implements `jenkinsw version`: prints the jenkinsw version, then connects to the
//! server of a context and prints the version it reports in the `X-Jenkins` header.
//!
use crate::commands::resolve_context;
use crate::common::jenkins::JenkinsClient;
use crate::common::ui;
use crate::core::config::ConfigStore;
use crate::core::credentials;
use crate::core::error::Result;
use crate::core::settings::Settings;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Print jenkinsw and Jenkins server versions")]
pub struct VersionArgs {
    /// Context whose server to query (default: the current context).
    #[arg(long)]
    context: Option<String>,
}

pub async fn handle_version(args: VersionArgs, settings: &Settings) -> Result<()> {
    info!("Handling version command...");
    println!("jenkinsw version: {}", env!("CARGO_PKG_VERSION"));
    println!();

    let store = ConfigStore::new(settings.paths());
    let cfg = store.read()?;
    let ctx = resolve_context(settings, &cfg, args.context.as_deref())?;
    println!("Jenkins server: {}", ui::emphasis(&ctx.host));

    let creds = credentials::load(store.paths(), &ctx)?;
    let client = JenkinsClient::connect(&ctx, creds).await?;
    println!("  Jenkins server version: {}", client.version());
    Ok(())
}
