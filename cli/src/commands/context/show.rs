//! # jenkinsw Context Show Handler
//!
//! File: cli/src/commands/context/show.rs
//!
//! Implements `jenkinsw context show [NAME]`. Prints the URL and user of a context
//! along with where its credential file and CLI jar live and whether they exist.
//! The API token itself is never printed.
//!
use crate::commands::resolve_context;
use crate::common::ui;
use crate::core::config::ConfigStore;
use crate::core::credentials;
use crate::core::error::Result;
use crate::core::settings::Settings;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Show details of a Jenkins context")]
pub struct ShowArgs {
    /// Context to show (default: the current context).
    name: Option<String>,
}

pub async fn handle_show(args: ShowArgs, settings: &Settings) -> Result<()> {
    info!("Handling context show command...");
    let store = ConfigStore::new(settings.paths());
    let cfg = store.read()?;
    let ctx = resolve_context(settings, &cfg, args.name.as_deref())?;
    let paths = store.paths();

    let marker = if ctx.name == cfg.current_context {
        " (current)"
    } else {
        ""
    };
    println!("{}{}", ui::heading(format!("Context: {}", ctx.name)), marker);
    println!("  Jenkins URL:     {}", ctx.host);
    println!("  Username:        {}", ctx.username);
    println!(
        "  Credential file: {} ({})",
        paths.credential_path(&ctx).display(),
        presence(credentials::exists(paths, &ctx))
    );
    let cli = paths.cli_path(&ctx);
    println!("  Jenkins CLI:     {} ({})", cli.display(), presence(cli.is_file()));
    Ok(())
}

fn presence(exists: bool) -> String {
    if exists {
        ui::success("present")
    } else {
        ui::failure("missing")
    }
}
