//! # jenkinsw Context Test Handler
//!
//! File: cli/src/commands/context/connection.rs
//!
//! Implements `jenkinsw context test [NAME]`. Runs `who-am-i` through the Jenkins
//! CLI with the context's stored credentials. On success prints `Success!`; otherwise
//! prints whatever the CLI wrote, in red, and fails.
//!
use crate::commands::resolve_context;
use crate::common::process::JenkinsCli;
use crate::common::ui;
use crate::core::config::ConfigStore;
use crate::core::error::{JenkinswError, Result};
use crate::core::settings::Settings;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Test the connection to Jenkins")]
pub struct TestArgs {
    /// Context to test (default: the current context).
    name: Option<String>,
}

pub async fn handle_test(args: TestArgs, settings: &Settings) -> Result<()> {
    info!("Handling context test command...");
    let store = ConfigStore::new(settings.paths());
    let cfg = store.read()?;
    let ctx = resolve_context(settings, &cfg, args.name.as_deref())?;

    println!("Connecting to {} as user {}", ctx.host, ctx.username);
    let out = JenkinsCli::new(store.paths(), &ctx, settings.java.as_str())
        .run_command(&["who-am-i"], None)
        .await?;

    if out.success() {
        println!("{}", ui::success("Success!"));
        return Ok(());
    }
    println!("{}", ui::failure(out.text().trim_end()));
    anyhow::bail!(JenkinswError::Connection {
        host: ctx.host.clone(),
        reason: format!("who-am-i exited with {}", out.status),
    })
}
