//! # jenkinsw Context Debug Handler
//!
//! File: cli/src/commands/context/debug.rs
//!
//! Hidden `jenkinsw context debug`: prints where the configuration lives, the
//! current context and its CLI jar, then dumps the raw contexts document.
//!
use crate::common::fs::io;
use crate::common::process::JenkinsCli;
use crate::common::ui;
use crate::core::config::ConfigStore;
use crate::core::error::Result;
use crate::core::settings::Settings;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(about = "Print configuration diagnostics")]
pub struct DebugArgs {}

pub async fn handle_debug(_args: DebugArgs, settings: &Settings) -> Result<()> {
    info!("Handling context debug command...");
    let store = ConfigStore::new(settings.paths());
    let cfg = store.read()?;
    let paths = store.paths();
    let file = paths.config_file();

    println!("Config files:");
    println!("- {}", file.display());
    println!();

    match cfg.current_context() {
        Ok(current) => {
            let ctx = settings.apply_host(current.clone());
            let cli = JenkinsCli::new(paths, &ctx, settings.java.as_str());
            println!("Current context: {}", ctx.name);
            println!("CLI path: {}", cli.cli_path().display());
            println!("CLI exists: {}", cli.cli_exists());
        }
        Err(e) => println!("Current context: none ({})", e),
    }
    println!();

    println!("{}", ui::heading(format!("Contents of {}:", file.display())));
    println!("{}", ui::indent_block(&io::read_file_to_string(&file)?, 4));
    Ok(())
}
