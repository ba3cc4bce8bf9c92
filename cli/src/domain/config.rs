//! Domain types and validators for rclone-remote configuration.
//!
//! Pure functions only, no I/O, no async, no filesystem access.

use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const DEFAULT_BINARY: &str = "rclone";

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "RCLONE_REMOTE_CONFIG";

/// Environment variable overriding `rclone.binary`.
pub const BINARY_ENV: &str = "RCLONE_REMOTE_BINARY";

pub const VALID_CONFIG_KEYS: &[&str] = &[
    "rclone.binary",
    "timeouts.version",
    "timeouts.listremotes",
    "timeouts.lsf",
    "timeouts.size",
    "timeouts.moveto",
    "timeouts.mkdir",
];

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.rclone-remote/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RemoteConfig {
    /// How to invoke rclone.
    pub rclone: RcloneSettings,
    /// Per-subcommand wall-clock limits, in seconds.
    pub timeouts: Timeouts,
}

/// rclone binary settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RcloneSettings {
    /// Program name or path of the rclone binary.
    #[serde(default = "default_binary")]
    pub binary: String,
}

impl Default for RcloneSettings {
    fn default() -> Self {
        Self {
            binary: default_binary(),
        }
    }
}

fn default_binary() -> String {
    DEFAULT_BINARY.to_string()
}

/// Timeouts in seconds, one per rclone subcommand.
///
/// Defaults follow the expected cost of each call: a liveness probe is
/// short, listings are medium, transfers are long.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Timeouts {
    pub version: u64,
    pub listremotes: u64,
    pub lsf: u64,
    pub size: u64,
    pub moveto: u64,
    pub mkdir: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            version: 5,
            listremotes: 10,
            lsf: 60,
            size: 30,
            moveto: 300,
            mkdir: 30,
        }
    }
}

impl Timeouts {
    /// Timeout for the given rclone subcommand.
    ///
    /// Unknown subcommands get the listing timeout.
    #[must_use]
    pub fn for_subcommand(&self, subcommand: &str) -> Duration {
        let secs = match subcommand {
            "version" => self.version,
            "listremotes" => self.listremotes,
            "size" => self.size,
            "moveto" => self.moveto,
            "mkdir" => self.mkdir,
            _ => self.lsf,
        };
        Duration::from_secs(secs)
    }
}

impl RemoteConfig {
    /// Apply an already-validated `key = value` pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown or the value is invalid.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        validate_config_key(key)?;
        validate_config_value(key, value)?;
        if key == "rclone.binary" {
            self.rclone.binary = value.trim().to_string();
            return Ok(());
        }
        let secs = parse_seconds(key, value)?;
        match key {
            "timeouts.version" => self.timeouts.version = secs,
            "timeouts.listremotes" => self.timeouts.listremotes = secs,
            "timeouts.lsf" => self.timeouts.lsf = secs,
            "timeouts.size" => self.timeouts.size = secs,
            "timeouts.moveto" => self.timeouts.moveto = secs,
            "timeouts.mkdir" => self.timeouts.mkdir = secs,
            _ => anyhow::bail!("Unknown setting: {key}"),
        }
        Ok(())
    }
}

impl RemoteConfig {
    /// Check values that bypassed [`RemoteConfig::set`], such as a
    /// hand-edited config file.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting: an empty binary or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        validate_config_value("rclone.binary", &self.rclone.binary)?;
        let t = &self.timeouts;
        for (key, secs) in [
            ("timeouts.version", t.version),
            ("timeouts.listremotes", t.listremotes),
            ("timeouts.lsf", t.lsf),
            ("timeouts.size", t.size),
            ("timeouts.moveto", t.moveto),
            ("timeouts.mkdir", t.mkdir),
        ] {
            parse_seconds(key, &secs.to_string())?;
        }
        Ok(())
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<()> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(ConfigError::UnknownKey {
            key: key.to_string(),
            valid: VALID_CONFIG_KEYS.join(", "),
        }
        .into());
    }
    Ok(())
}

/// Validates a configuration value for the given key.
///
/// # Errors
///
/// Returns an error if the value is not valid for the key.
pub fn validate_config_value(key: &str, value: &str) -> Result<()> {
    if key == "rclone.binary" {
        if value.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                key: key.to_string(),
                value: value.to_string(),
                expected: "Expected a program name or path".to_string(),
            }
            .into());
        }
        return Ok(());
    }
    if key.starts_with("timeouts.") {
        parse_seconds(key, value)?;
    }
    Ok(())
}

fn parse_seconds(key: &str, value: &str) -> Result<u64> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            expected: "Expected a whole number of seconds (at least 1)".to_string(),
        }
        .into()),
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
