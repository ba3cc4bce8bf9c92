//! Parsers for rclone's textual and JSON output.
//!
//! Pure functions only. Each parser takes captured stdout and returns data.

use serde_json::Value;

/// Parse `rclone lsf` output: one entry per line, whitespace trimmed, blank
/// lines dropped. Directory entries keep their trailing `/`.
#[must_use]
pub fn parse_listing(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Parse `rclone listremotes` output into remote names without trailing colons.
#[must_use]
pub fn parse_remotes(stdout: &str) -> Vec<String> {
    stdout
        .trim()
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.trim_end_matches(':').to_owned())
        .collect()
}

/// Parse the `bytes` field of `rclone size --json` output.
///
/// Accepts integer values, non-negative finite floats (truncated) and numeric
/// strings.
///
/// # Errors
///
/// Returns a human-readable reason when the output is not JSON, has no
/// `bytes` field, or the field is not a non-negative number.
pub fn parse_size(stdout: &str) -> Result<u64, String> {
    let data: Value = serde_json::from_str(stdout).map_err(|e| format!("invalid JSON: {e}"))?;
    let bytes = data
        .get("bytes")
        .ok_or_else(|| "missing \"bytes\" field".to_string())?;
    match bytes {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite() && *f >= 0.0).map(truncate))
            .ok_or_else(|| format!("\"bytes\" is not a non-negative integer: {n}")),
        Value::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| format!("\"bytes\" is not numeric: {s:?}")),
        other => Err(format!("\"bytes\" is not numeric: {other}")),
    }
}

/// Extract the version string from `rclone version` output.
///
/// The first line reads `rclone v1.66.0`; the leading `v` is stripped.
#[must_use]
pub fn parse_version(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .map(|v| v.trim_start_matches('v').to_owned())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate(f: f64) -> u64 {
    f as u64
}

// ── Unit tests ───────────────────────────────────────────────────────────────
