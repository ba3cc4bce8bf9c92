//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::PathBuf;
use std::process::Output;
use std::time::Duration;

use anyhow::Result;

use crate::domain::{ProcessError, RcloneError, RemoteConfig};

// ── Value Types ───────────────────────────────────────────────────────────────

/// Flags for `rclone lsf`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOptions {
    /// Descend into subdirectories (`--recursive`).
    pub recursive: bool,
    /// Omit directory entries (`--files-only`).
    pub files_only: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            recursive: false,
            files_only: true,
        }
    }
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
///
/// A program that runs to completion yields `Ok(Output)` whatever its exit
/// status; only failures to run it at all are errors.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program to completion, capturing stdout and stderr.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output, ProcessError>;
}

// ── Remote Storage Port ───────────────────────────────────────────────────────

/// Typed rclone operations. Each method runs exactly one rclone process.
///
/// Errors keep the failure mode; the services in
/// `application::services::remote` collapse them into safe defaults.
#[allow(async_fn_in_trait)]
pub trait RemoteStorage {
    /// Program name or path of the rclone binary in use.
    fn binary(&self) -> &str;
    /// Run `rclone version` and return its stdout.
    async fn version(&self) -> Result<String, RcloneError>;
    /// Run `rclone listremotes`.
    async fn list_remotes(&self) -> Result<Vec<String>, RcloneError>;
    /// Run `rclone lsf [--recursive] [--files-only] <path>`.
    async fn list_files(
        &self,
        remote_path: &str,
        options: ListOptions,
    ) -> Result<Vec<String>, RcloneError>;
    /// Run `rclone size <path> --json` and return the byte count.
    async fn size(&self, remote_path: &str) -> Result<u64, RcloneError>;
    /// Run `rclone moveto <source> <destination>`.
    async fn move_to(&self, source: &str, destination: &str) -> Result<(), RcloneError>;
    /// Run `rclone mkdir <path>`.
    async fn mkdir(&self, remote_path: &str) -> Result<(), RcloneError>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts configuration persistence.
pub trait ConfigStore {
    /// Load the configuration, returning defaults when none is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if stored configuration cannot be read or parsed.
    fn load(&self) -> Result<RemoteConfig>;
    /// Persist the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be written.
    fn save(&self, config: &RemoteConfig) -> Result<()>;
    /// Location of the stored configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be determined.
    fn path(&self) -> Result<PathBuf>;
}
