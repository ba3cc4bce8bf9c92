//! Human-readable terminal renderer.

use std::path::Path;

use owo_colors::OwoColorize as _;

use crate::domain::config::{BINARY_ENV, CONFIG_ENV, RemoteConfig};
use crate::domain::health::{DoctorChecks, MIN_RCLONE_VERSION};
use crate::domain::path::RemotePath;
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version.
    pub fn render_version(&self, version: &str) {
        println!("rclone-remote {version}");
    }

    /// Render configured remotes, one per line.
    pub fn render_remotes(&self, remotes: &[String]) {
        if remotes.is_empty() {
            self.ctx.warn("No remotes found. Configure one with: rclone config");
            return;
        }
        for remote in remotes {
            println!("{remote}:");
        }
    }

    /// Render a listing, one entry per line, exactly as rclone reported it.
    pub fn render_listing(&self, entries: &[String]) {
        for entry in entries {
            println!("{entry}");
        }
    }

    /// Render the result of an existence check.
    pub fn render_exists(&self, path: &str, exists: bool) {
        if exists {
            self.ctx.success(&format!("{path} exists"));
        } else {
            self.ctx.warn(&format!("{path} not found"));
        }
    }

    /// Render a byte count with a binary-unit summary.
    pub fn render_size(&self, path: &str, bytes: u64) {
        let human = humansize::format_size(bytes, humansize::BINARY);
        if self.ctx.quiet {
            println!("{bytes}");
        } else {
            println!("{bytes}\t{human}\t{path}");
        }
    }

    /// Render the outcome of a mutating operation (`mv`, `mkdir`).
    pub fn render_outcome(&self, ok: bool, success: &str, failure: &str) {
        if ok {
            self.ctx.success(success);
        } else {
            self.ctx.error(failure);
        }
    }

    /// Render a parsed path.
    pub fn render_parsed(&self, parsed: &RemotePath<'_>, remote: bool) {
        self.ctx.kv("Remote:", if parsed.remote.is_empty() { "(none)" } else { parsed.remote });
        self.ctx.kv("Path:", parsed.path);
        self.ctx.kv("Kind:", if remote { "remote" } else { "local" });
    }

    /// Render a joined path.
    pub fn render_joined(&self, joined: &str) {
        println!("{joined}");
    }

    /// Render the current configuration.
    pub fn render_config(&self, config: &RemoteConfig, path: &Path) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        println!("  {:<22} {}", "rclone.binary:", config.rclone.binary);
        let t = &config.timeouts;
        for (key, secs) in [
            ("timeouts.version:", t.version),
            ("timeouts.listremotes:", t.listremotes),
            ("timeouts.lsf:", t.lsf),
            ("timeouts.size:", t.size),
            ("timeouts.moveto:", t.moveto),
            ("timeouts.mkdir:", t.mkdir),
        ] {
            println!("  {key:<22} {secs}s");
        }
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        for var in [CONFIG_ENV, BINARY_ENV, "NO_COLOR"] {
            println!(
                "    {:<22} {}",
                format!("{var}:"),
                std::env::var(var).unwrap_or_else(|_| "(not set)".to_string())
            );
        }
        println!();
    }

    /// Render doctor health check results.
    pub fn render_doctor(&self, checks: &DoctorChecks, issues: &[String]) {
        println!();
        println!("  {}", "rclone Health Check".style(self.ctx.styles.header));
        println!();

        println!("  Prerequisites:");
        if checks.rclone_found {
            let ver = checks.rclone_version.as_deref().unwrap_or("unknown");
            let (major, minor, patch) = MIN_RCLONE_VERSION;
            self.print_check(
                checks.rclone_version_ok,
                &format!("rclone {ver} (need \u{2265} {major}.{minor}.{patch})"),
            );
        } else {
            self.print_check(false, &format!("{} not found", checks.rclone_binary));
            println!("      Install: https://rclone.org/install/");
        }
        println!();

        println!("  Remotes:");
        if checks.remotes.is_empty() {
            self.print_check(false, "no remotes configured");
        } else {
            for remote in &checks.remotes {
                self.print_check(true, &format!("{remote}:"));
            }
        }

        println!();
        if issues.is_empty() {
            println!(
                "  {} Everything looks good!",
                "\u{2713}".style(self.ctx.styles.success)
            );
        } else {
            println!(
                "  {} Found {} issues.",
                "\u{2717}".style(self.ctx.styles.error),
                issues.len(),
            );
            println!();
            for issue in issues {
                println!("    {} {issue}", "\u{2717}".style(self.ctx.styles.error));
            }
        }
        println!();
    }

    fn print_check(&self, ok: bool, msg: &str) {
        if ok {
            println!("    {} {msg}", "\u{2713}".style(self.ctx.styles.success));
        } else {
            println!("    {} {msg}", "\u{2717}".style(self.ctx.styles.error));
        }
    }
}
