//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs` or `std::process`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::time::Duration;

use thiserror::Error;

// ── Process errors ────────────────────────────────────────────────────────────

/// Failure to run an external program to completion.
///
/// A program that runs and exits non-zero is NOT a `ProcessError`; the
/// runner returns its output and callers inspect the status.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("{program} not found on PATH")]
    NotFound { program: String },

    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("waiting for {program}: {source}")]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} timed out after {}s", timeout.as_secs())]
    Timeout { program: String, timeout: Duration },
}

// ── rclone errors ─────────────────────────────────────────────────────────────

/// Why a single rclone operation did not produce a usable result.
///
/// Public helper functions collapse these into `false`, `0` or an empty
/// listing; the variants exist so logs and the typed API can tell the
/// failure modes apart.
#[derive(Debug, Error)]
pub enum RcloneError {
    #[error("rclone binary not found: {binary}")]
    BinaryMissing { binary: String },

    #[error("rclone {subcommand} could not be run: {source}")]
    Spawn {
        subcommand: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("rclone {subcommand} timed out after {}s", timeout.as_secs())]
    Timeout {
        subcommand: &'static str,
        timeout: Duration,
    },

    #[error("rclone {subcommand} exited with {}: {stderr}", exit_code_display(*code))]
    NonZeroExit {
        subcommand: &'static str,
        code: Option<i32>,
        stderr: String,
    },

    #[error("could not parse rclone {subcommand} output: {reason}")]
    Parse {
        subcommand: &'static str,
        reason: String,
    },
}

impl RcloneError {
    /// Classify a process failure for the given rclone subcommand.
    #[must_use]
    pub fn from_process(subcommand: &'static str, err: ProcessError) -> Self {
        match err {
            ProcessError::NotFound { program } => Self::BinaryMissing { binary: program },
            ProcessError::Spawn { source, .. } | ProcessError::Wait { source, .. } => {
                Self::Spawn { subcommand, source }
            }
            ProcessError::Timeout { timeout, .. } => Self::Timeout {
                subcommand,
                timeout,
            },
        }
    }
}

fn exit_code_display(code: Option<i32>) -> String {
    code.map_or_else(|| "signal".to_string(), |c| format!("status {c}"))
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration key/value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown setting: {key}\n\nValid settings: {valid}")]
    UnknownKey { key: String, valid: String },

    #[error("Invalid value for {key}: {value}\n\n{expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: String,
    },
}

impl ConfigError {
    /// Short machine-readable code, used by `--json` error objects.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownKey { .. } => "CONFIG_UNKNOWN_KEY",
            Self::InvalidValue { .. } => "CONFIG_INVALID_VALUE",
        }
    }
}
