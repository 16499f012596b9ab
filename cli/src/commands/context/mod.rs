//! # jenkinsw Context Command Group
//!
//! File: cli/src/commands/context/mod.rs
//!
//! ## Overview
//!
//! This module is the entry point and router for the `jenkinsw context` command
//! group. A *context* is a named Jenkins server (URL plus user) whose API token is
//! kept in a private credential file under the config directory. Exactly one context
//! is *current*; commands without an explicit `--context` use it.
//!
//! ## Architecture
//!
//! - `ContextArgs`: top-level arguments struct for `jenkinsw context`.
//! - `ContextCommand`: enum of the available subcommands.
//! - `handle_context`: matches the subcommand and routes to the handler in the
//!   corresponding submodule, passing the validated `Settings` along.
//!
//! ## Examples
//!
//! ```bash
//! # Add a context non-interactively
//! jenkinsw context add --name prod --url https://ci.example.com --username alice --token ...
//!
//! # List contexts; the current one is marked with '*'
//! jenkinsw context list
//!
//! # Switch contexts and download the CLI jar for it
//! jenkinsw context use dev
//! jenkinsw context init
//!
//! # Check the stored credentials against the server
//! jenkinsw context test
//! ```
//!
use crate::core::error::Result;
use crate::core::settings::Settings;
use clap::{Parser, Subcommand};

/// Implements `jenkinsw context add`.
mod add;
/// Implements `jenkinsw context test` (runs `who-am-i`).
mod connection;
/// Implements the hidden `jenkinsw context debug`.
mod debug;
/// Implements `jenkinsw context init` (downloads the Jenkins CLI jar).
mod init;
/// Implements `jenkinsw context list`.
mod list;
/// Implements `jenkinsw context show`.
mod show;
/// Implements `jenkinsw context use`.
mod use_context;

/// # Context Command Group Arguments (`ContextArgs`)
#[derive(Parser, Debug)]
#[command(about = "Manage Jenkins contexts")]
pub struct ContextArgs {
    #[command(subcommand)]
    command: ContextCommand,
}

/// # Context Subcommands (`ContextCommand`)
///
/// Each variant holds the argument struct defined in the subcommand's module.
#[derive(Subcommand, Debug)]
enum ContextCommand {
    /// Add a context, from flags or interactively.
    Add(add::AddArgs),
    /// List all contexts and mark the current one.
    #[command(alias = "ls")]
    List(list::ListArgs),
    /// Show the details of a context (the current one by default).
    Show(show::ShowArgs),
    /// Switch the current context.
    Use(use_context::UseArgs),
    /// Download the Jenkins CLI jar for a context.
    Init(init::InitArgs),
    /// Test the connection and credentials of the current context.
    Test(connection::TestArgs),
    /// Dump configuration diagnostics.
    #[command(hide = true)]
    Debug(debug::DebugArgs),
}

/// # Handle Context Command (`handle_context`)
///
/// Dispatches to the handler of the chosen subcommand and propagates its result.
pub async fn handle_context(args: ContextArgs, settings: &Settings) -> Result<()> {
    match args.command {
        ContextCommand::Add(args) => add::handle_add(args, settings).await?,
        ContextCommand::List(args) => list::handle_list(args, settings).await?,
        ContextCommand::Show(args) => show::handle_show(args, settings).await?,
        ContextCommand::Use(args) => use_context::handle_use(args, settings).await?,
        ContextCommand::Init(args) => init::handle_init(args, settings).await?,
        ContextCommand::Test(args) => connection::handle_test(args, settings).await?,
        ContextCommand::Debug(args) => debug::handle_debug(args, settings).await?,
    }
    Ok(())
}
