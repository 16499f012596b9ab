//! # jenkinsw Jobs Command
//!
//! File: cli/src/commands/jobs.rs
//!
//! Implements `jenkinsw jobs`: prints the qualified name of every job on the
//! server of a context, one per line. Folders are expanded up to `--depth` levels;
//! nested names are joined with `/job/`, matching Jenkins URLs.
//!
//! ```bash
//! jenkinsw jobs
//! jenkinsw jobs --depth 2 --context prod
//! ```
//!
use crate::commands::resolve_context;
use crate::common::jenkins::JenkinsClient;
use crate::core::config::ConfigStore;
use crate::core::credentials;
use crate::core::error::Result;
use crate::core::settings::Settings;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "List Jenkins jobs")]
pub struct JobsArgs {
    /// How many folder levels to expand (0 lists top-level items only).
    #[arg(short, long, default_value_t = 0)]
    depth: usize,

    /// Context to query (default: the current context).
    #[arg(long)]
    context: Option<String>,
}

pub async fn handle_jobs(args: JobsArgs, settings: &Settings) -> Result<()> {
    info!("Handling jobs command (depth {})...", args.depth);
    let store = ConfigStore::new(settings.paths());
    let cfg = store.read()?;
    let ctx = resolve_context(settings, &cfg, args.context.as_deref())?;
    let creds = credentials::load(store.paths(), &ctx)?;

    let client = JenkinsClient::connect(&ctx, creds).await?;
    for job in client.list_jobs(args.depth).await? {
        println!("{}", job.name);
    }
    Ok(())
}
