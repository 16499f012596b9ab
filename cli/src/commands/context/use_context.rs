//! # jenkinsw Context Use Handler
//!
//! File: cli/src/commands/context/use_context.rs
//!
//! Implements `jenkinsw context use <NAME>`: makes an existing context current and
//! saves the document. An unknown name fails with `InvalidContext` and leaves the
//! document as it was.
//!
use crate::core::config::ConfigStore;
use crate::core::error::Result;
use crate::core::settings::Settings;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Switch to a different Jenkins context")]
pub struct UseArgs {
    /// Name of the context to switch to.
    pub(super) name: String,
}

pub async fn handle_use(args: UseArgs, settings: &Settings) -> Result<()> {
    info!("Handling context use command for '{}'...", args.name);
    let store = ConfigStore::new(settings.paths());
    let mut cfg = store.read()?;
    store.use_context(&mut cfg, &args.name)?;
    println!("Switched to context '{}'", args.name);
    Ok(())
}
