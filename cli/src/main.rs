//! # jenkinsw Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the jenkinsw CLI, a small wrapper
//! around the Jenkins CLI jar that keeps several named Jenkins servers ("contexts")
//! at hand. It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on the verbosity flags
//! - Validating the global options into `Settings`
//! - Routing execution to the appropriate command handler
//!
//! ## Architecture
//!
//! - Each top-level command (`context`, `lint`, `jobs`, `version`) is a variant of
//!   the `Commands` enum, mapped to a handler in `commands::`.
//! - Global options (`--config-dir`, `--host`, `--jenkinsfile`, `--debug`, `--java`)
//!   are flattened from `core::settings::GlobalArgs` and validated once.
//! - All errors are propagated to this level, printed as `Error: ...` and turned
//!   into exit status 1.
//!
//! ## Examples
//!
//! ```bash
//! # Get help
//! jenkinsw --help
//!
//! # Lint the Jenkinsfile in the current directory against the current context
//! jenkinsw lint
//!
//! # List jobs two folder levels deep, with debug logging
//! jenkinsw -vv jobs --depth 2
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands; // Command handlers (context, lint, jobs, version)
mod common; // Shared utilities (fs, network, process, jenkins, ui)
mod core; // Core infrastructure (errors, config, settings, credentials)

use crate::core::settings::{GlobalArgs, Settings};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "jenkinsw",
    about = "jenkinsw: Jenkins context manager and CLI wrapper",
    long_about = "Manage Jenkins contexts (server, user, API token) and run the Jenkins CLI against them.\n\
                  Lint Jenkinsfiles, list jobs and check server versions.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(flatten)]
    global: GlobalArgs,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "ctx")]
    Context(commands::context::ContextArgs),
    Lint(commands::lint::LintArgs),
    Jobs(commands::jobs::JobsArgs),
    Version(commands::version::VersionArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match (cli.verbose, cli.global.debug) {
        (0, false) => "warn",
        (1, false) => "info",
        (0..=2, _) => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match Settings::load(&cli.global) {
        Ok(settings) => run(cli.command, &settings).await,
        Err(e) => Err(e),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(command: Commands, settings: &Settings) -> crate::core::error::Result<()> {
    match command {
        Commands::Context(args) => commands::context::handle_context(args, settings).await,
        Commands::Lint(args) => commands::lint::handle_lint(args, settings).await,
        Commands::Jobs(args) => commands::jobs::handle_jobs(args, settings).await,
        Commands::Version(args) => commands::version::handle_version(args, settings).await,
    }
}
