//! Health check domain types and pure diagnostic functions.
//!
//! This module is intentionally free of I/O, async, and external layer imports.
//! All functions take data in and return data out.

use serde::Serialize;

/// Oldest rclone release whose `lsf`, `moveto` and `size --json` behave as
/// this crate expects.
pub const MIN_RCLONE_VERSION: (u64, u64, u64) = (1, 50, 0);

// ── Types ─────────────────────────────────────────────────────────────────────

/// Everything the doctor command reports.
#[derive(Debug, Serialize)]
#[allow(clippy::struct_field_names)]
pub struct DoctorChecks {
    /// Binary the checks were run against.
    pub rclone_binary: String,
    /// Whether `rclone version` ran and exited successfully.
    pub rclone_found: bool,
    /// Installed version string (e.g. `"1.66.0"`), if found.
    pub rclone_version: Option<String>,
    /// Whether the installed version meets [`MIN_RCLONE_VERSION`].
    pub rclone_version_ok: bool,
    /// Remotes configured in rclone.
    pub remotes: Vec<String>,
}

// ── Pure functions ────────────────────────────────────────────────────────────

/// Whether `version` satisfies [`MIN_RCLONE_VERSION`].
///
/// Unparseable versions (e.g. custom builds) are given the benefit of the
/// doubt.
#[must_use]
pub fn version_satisfies_minimum(version: &str) -> bool {
    let (major, minor, patch) = MIN_RCLONE_VERSION;
    semver::Version::parse(version)
        .ok()
        .is_none_or(|v| v >= semver::Version::new(major, minor, patch))
}

/// Summarise failed checks as human-readable issues.
#[must_use]
pub fn collect_issues(checks: &DoctorChecks) -> Vec<String> {
    let mut issues = Vec::new();
    if !checks.rclone_found {
        issues.push(format!(
            "rclone is not installed or not runnable ({})",
            checks.rclone_binary
        ));
        return issues;
    }
    if !checks.rclone_version_ok {
        let ver = checks.rclone_version.as_deref().unwrap_or("unknown");
        let (major, minor, patch) = MIN_RCLONE_VERSION;
        issues.push(format!(
            "rclone {ver} is too old (need ≥ {major}.{minor}.{patch})"
        ));
    }
    if checks.remotes.is_empty() {
        issues.push("No rclone remotes configured. Run: rclone config".to_string());
    }
    issues
}

// ── Unit tests ────────────────────────────────────────────────────────────────
