//! # jenkinsw Jenkins CLI Dispatch (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! Runs the cached Jenkins CLI jar for a context:
//!
//! ```text
//! java -jar <cli-path> -s <host> -auth @<auth-file> -webSocket <subcommand...>
//! ```
//!
//! The invocation is built as an argument vector and spawned directly, so paths and
//! hosts never pass through a shell. `-webSocket` selects the transport that works
//! through Jenkins' HTTP endpoint without a separate agent port.
//!
//! ## Behavior
//!
//! - The credential sidecar is checked first; if absent the call fails with
//!   `JenkinswError::MissingAuth` and nothing is spawned. A missing jar fails with
//!   `JenkinswError::CliNotFound`.
//! - The process runs to completion with no timeout. Stdout and stderr are captured
//!   and returned together (stdout first) with the exit status; a non-zero exit is
//!   not an error at this level.
//! - Optional input bytes are written to the child's stdin (used by `lint`).
//!
use crate::core::config::Context;
use crate::core::credentials;
use crate::core::error::{JenkinswError, Result};
use crate::core::paths::CachePaths;
use anyhow::Context as _;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::{ExitStatus, Stdio};
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

/// Captured result of one Jenkins CLI run.
#[derive(Debug)]
pub struct CommandOutput {
    /// Stdout followed by stderr.
    pub output: Vec<u8>,
    pub status: ExitStatus,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }

    /// Turns a non-zero exit into `JenkinswError::CommandFailed`.
    pub fn into_result(self, cmd: &str) -> Result<Self> {
        if self.success() {
            return Ok(self);
        }
        anyhow::bail!(JenkinswError::CommandFailed {
            cmd: cmd.to_string(),
            status: self.status.to_string(),
            output: self.text(),
        })
    }
}

/// Jenkins CLI launcher bound to one context.
#[derive(Debug)]
pub struct JenkinsCli<'a> {
    paths: &'a CachePaths,
    context: &'a Context,
    java: OsString,
}

impl<'a> JenkinsCli<'a> {
    pub fn new(paths: &'a CachePaths, context: &'a Context, java: impl Into<OsString>) -> Self {
        JenkinsCli {
            paths,
            context,
            java: java.into(),
        }
    }

    pub fn cli_path(&self) -> PathBuf {
        self.paths.cli_path(self.context)
    }

    pub fn cli_exists(&self) -> bool {
        self.cli_path().is_file()
    }

    /// Arguments passed to the Java runtime for `subcommand`.
    pub fn arguments(&self, subcommand: &[&str]) -> Vec<OsString> {
        let mut auth = OsString::from("@");
        auth.push(self.paths.credential_path(self.context));

        let mut args: Vec<OsString> = vec![
            "-jar".into(),
            self.cli_path().into_os_string(),
            "-s".into(),
            self.context.host.clone().into(),
            "-auth".into(),
            auth,
            "-webSocket".into(),
        ];
        args.extend(subcommand.iter().map(OsString::from));
        args
    }

    /// Runs `subcommand` against the context's server and waits for it to exit.
    pub async fn run_command(&self, subcommand: &[&str], input: Option<&[u8]>) -> Result<CommandOutput> {
        credentials::require(self.paths, self.context)?;

        if !self.cli_exists() {
            anyhow::bail!(JenkinswError::CliNotFound {
                name: self.context.name.clone(),
                path: self.cli_path().display().to_string(),
            });
        }

        let args = self.arguments(subcommand);
        debug!("Running command: {:?} {:?}", self.java, args);

        let mut child = Command::new(&self.java)
            .args(&args)
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed to start {:?}", self.java))?;

        let stdin = child.stdin.take();
        let feed = async move {
            if let (Some(mut stdin), Some(bytes)) = (stdin, input) {
                stdin.write_all(bytes).await?;
                stdin.shutdown().await?;
            }
            Ok::<(), std::io::Error>(())
        };
        let (fed, finished) = tokio::join!(feed, child.wait_with_output());
        let finished =
            finished.with_context(|| format!("Failed to wait for {:?}", self.java))?;
        match fed {
            // The child may exit without draining its input.
            Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                debug!("Command closed its input early")
            }
            other => other.context("Failed to write command input")?,
        }

        debug!("Command exited with {}", finished.status);
        let mut output = finished.stdout;
        output.extend_from_slice(&finished.stderr);
        Ok(CommandOutput {
            output,
            status: finished.status,
        })
    }
}
