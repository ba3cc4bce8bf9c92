//! JSON output helpers.
//!
//! Every `--json` code path prints exactly one pretty-printed JSON document
//! on stdout, including failures (see [`format_error`]).

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::json;

use crate::domain::config::RemoteConfig;
use crate::domain::health::DoctorChecks;
use crate::domain::path::RemotePath;

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}

/// Renders domain types as JSON documents on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    fn print(value: &serde_json::Value) -> Result<()> {
        println!(
            "{}",
            serde_json::to_string_pretty(value).context("JSON serialization failed")?
        );
        Ok(())
    }

    /// Render the CLI version.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_version(version: &str) -> Result<()> {
        Self::print(&json!({ "version": version }))
    }

    /// Render configured remotes.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_remotes(remotes: &[String]) -> Result<()> {
        Self::print(&json!({ "remotes": remotes }))
    }

    /// Render a listing.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_listing(path: &str, entries: &[String]) -> Result<()> {
        Self::print(&json!({ "path": path, "entries": entries }))
    }

    /// Render the result of an existence check.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_exists(path: &str, exists: bool) -> Result<()> {
        Self::print(&json!({ "path": path, "exists": exists }))
    }

    /// Render a byte count.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_size(path: &str, bytes: u64) -> Result<()> {
        Self::print(&json!({ "path": path, "bytes": bytes }))
    }

    /// Render the outcome of a mutating operation.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_outcome(operation: &str, ok: bool) -> Result<()> {
        Self::print(&json!({ "operation": operation, "success": ok }))
    }

    /// Render a parsed path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_parsed(parsed: &RemotePath<'_>, remote: bool) -> Result<()> {
        Self::print(&json!({
            "remote": parsed.remote,
            "path": parsed.path,
            "is_remote": remote,
        }))
    }

    /// Render a joined path.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_joined(joined: &str) -> Result<()> {
        Self::print(&json!({ "path": joined }))
    }

    /// Render the current configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_config(config: &RemoteConfig, path: &Path) -> Result<()> {
        let mut value = serde_json::to_value(config).context("JSON serialization failed")?;
        value["path"] = json!(path.display().to_string());
        Self::print(&value)
    }

    /// Render doctor health check results.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_doctor(checks: &DoctorChecks, issues: &[String]) -> Result<()> {
        let status = if issues.is_empty() {
            "healthy"
        } else {
            "unhealthy"
        };
        Self::print(&json!({
            "status": status,
            "checks": checks,
            "issues": issues,
        }))
    }
}
