//! Output formatting module

pub mod human;
pub mod json;
pub mod progress;
pub mod reporter;
pub mod styles;

use std::path::Path;

use anyhow::Result;
use console::Term;
use owo_colors::OwoColorize as _;
pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use reporter::{SilentReporter, TerminalReporter};
pub use styles::Styles;

use crate::domain::config::RemoteConfig;
use crate::domain::health::DoctorChecks;
use crate::domain::path::RemotePath;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Check if progress indicators should be shown.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print a warning message prefixed with `⚠`. Suppressed when `quiet`.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "⚠".style(self.styles.warning));
        }
    }

    /// Print an error message prefixed with `✗` to stderr. Never suppressed.
    pub fn error(&self, msg: &str) {
        eprintln!("  {} {msg}", "✗".style(self.styles.error));
    }

    /// Print a key-value pair with the key dimmed. Suppressed when `quiet`.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {:<8} {value}", key.style(self.styles.dim));
        }
    }
}

/// Mode-dispatching renderer returned by `AppContext::renderer`.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        match self {
            Self::Human(r) => r.render_version(version),
            Self::Json(_) => JsonRenderer::render_version(version)?,
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_remotes(&self, remotes: &[String]) -> Result<()> {
        match self {
            Self::Human(r) => r.render_remotes(remotes),
            Self::Json(_) => JsonRenderer::render_remotes(remotes)?,
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_listing(&self, path: &str, entries: &[String]) -> Result<()> {
        match self {
            Self::Human(r) => r.render_listing(entries),
            Self::Json(_) => JsonRenderer::render_listing(path, entries)?,
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_exists(&self, path: &str, exists: bool) -> Result<()> {
        match self {
            Self::Human(r) => r.render_exists(path, exists),
            Self::Json(_) => JsonRenderer::render_exists(path, exists)?,
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_size(&self, path: &str, bytes: u64) -> Result<()> {
        match self {
            Self::Human(r) => r.render_size(path, bytes),
            Self::Json(_) => JsonRenderer::render_size(path, bytes)?,
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_outcome(
        &self,
        operation: &str,
        ok: bool,
        success: &str,
        failure: &str,
    ) -> Result<()> {
        match self {
            Self::Human(r) => r.render_outcome(ok, success, failure),
            Self::Json(_) => JsonRenderer::render_outcome(operation, ok)?,
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_parsed(&self, parsed: &RemotePath<'_>, remote: bool) -> Result<()> {
        match self {
            Self::Human(r) => r.render_parsed(parsed, remote),
            Self::Json(_) => JsonRenderer::render_parsed(parsed, remote)?,
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_joined(&self, joined: &str) -> Result<()> {
        match self {
            Self::Human(r) => r.render_joined(joined),
            Self::Json(_) => JsonRenderer::render_joined(joined)?,
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(&self, config: &RemoteConfig, path: &Path) -> Result<()> {
        match self {
            Self::Human(r) => r.render_config(config, path),
            Self::Json(_) => JsonRenderer::render_config(config, path)?,
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_doctor(&self, checks: &DoctorChecks, issues: &[String]) -> Result<()> {
        match self {
            Self::Human(r) => r.render_doctor(checks, issues),
            Self::Json(_) => JsonRenderer::render_doctor(checks, issues)?,
        }
        Ok(())
    }
}
