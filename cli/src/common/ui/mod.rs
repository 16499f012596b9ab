//! # jenkinsw UI Utilities (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Terminal helpers shared by the command handlers:
//!
//! - **Prompts** (`dialoguer`): `value_or_prompt` and `secret_or_prompt` return a
//!   value passed on the command line, or ask for it interactively.
//! - **Styling** (`console`): `success`, `failure`, `emphasis`, `heading` wrap text
//!   in the colours used across commands. `console` drops the escapes when stdout is
//!   not a terminal.
//! - **Formatting**: `indent_block` for printing documents under a heading.
//!
//! ```rust
//! use crate::common::ui;
//!
//! let name = ui::value_or_prompt(args.name, "Context name")?;
//! println!("{}", ui::success("Success!"));
//! ```
//!
use crate::core::error::Result;
use anyhow::Context;
use console::style;
use dialoguer::{Input, Password};

/// Returns `value` if given, otherwise prompts for a non-empty line.
pub fn value_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    Input::<String>::new()
        .with_prompt(prompt)
        .interact_text()
        .with_context(|| format!("Failed to read '{}'", prompt))
}

/// Like `value_or_prompt`, but input is not echoed.
pub fn secret_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    if let Some(value) = value {
        return Ok(value);
    }
    Password::new()
        .with_prompt(prompt)
        .interact()
        .with_context(|| format!("Failed to read '{}'", prompt))
}

pub fn success(text: impl std::fmt::Display) -> String {
    style(text).green().to_string()
}

pub fn failure(text: impl std::fmt::Display) -> String {
    style(text).red().to_string()
}

pub fn emphasis(text: impl std::fmt::Display) -> String {
    style(text).blue().to_string()
}

pub fn heading(text: impl std::fmt::Display) -> String {
    style(text).white().bold().to_string()
}

/// Prefixes every line of `text` with `indent` spaces.
pub fn indent_block(text: &str, indent: usize) -> String {
    let pad = " ".repeat(indent);
    text.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", pad, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
