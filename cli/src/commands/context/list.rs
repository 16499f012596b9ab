//! # jenkinsw Context List Handler
//!
//! File: cli/src/commands/context/list.rs
//!
//! Implements `jenkinsw context list`: one context per line, in the order they were
//! added. The current context is prefixed with `* ` and shown in green, the others
//! are indented by two spaces.
//!
use crate::common::ui;
use crate::core::config::{Config, ConfigStore};
use crate::core::error::Result;
use crate::core::settings::Settings;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "List all Jenkins contexts")]
pub struct ListArgs {}

pub async fn handle_list(_args: ListArgs, settings: &Settings) -> Result<()> {
    info!("Handling context list command...");
    let cfg = ConfigStore::new(settings.paths()).read()?;

    if cfg.contexts.is_empty() {
        println!("No contexts configured. Run 'jenkinsw context add' to create one.");
        return Ok(());
    }
    for line in format_lines(&cfg) {
        println!("{}", line);
    }
    Ok(())
}

fn format_lines(cfg: &Config) -> Vec<String> {
    cfg.contexts
        .iter()
        .map(|ctx| {
            if ctx.name == cfg.current_context {
                ui::success(format!("* {}", ctx.name))
            } else {
                format!("  {}", ctx.name)
            }
        })
        .collect()
}
