//! Application context: unified state passed to every command handler.
//!
//! `AppContext` is built once in `Cli::run()` from the global flags and the
//! stored configuration. Pure commands (`version`, `path`) never build one.

use anyhow::Result;

use crate::application::services::config_service;
use crate::application::services::remote::InstallCheck;
use crate::domain::config::RemoteConfig;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::YamlConfigStore;
use crate::infra::rclone::RcloneCli;
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Output rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable terminal output (default).
    Human,
    /// Machine-readable JSON output.
    Json,
}

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// rclone binary given on the command line or via `RCLONE_REMOTE_BINARY`.
    pub rclone_binary: Option<String>,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Effective configuration (file values plus command-line overrides).
    pub config: RemoteConfig,
    /// Where the configuration is persisted.
    pub config_store: YamlConfigStore,
    /// rclone adapter.
    pub storage: RcloneCli<TokioCommandRunner>,
    /// Memoized installation probe.
    pub install_check: InstallCheck,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file exists but cannot be read
    /// or holds an invalid setting.
    pub fn new(flags: &AppFlags) -> Result<Self> {
        let config_store = YamlConfigStore;
        let mut config = config_service::load_config(&config_store)?;
        if let Some(binary) = flags.rclone_binary.as_deref().filter(|b| !b.trim().is_empty()) {
            config.rclone.binary = binary.to_string();
        }
        tracing::debug!(binary = %config.rclone.binary, "configuration loaded");

        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        Ok(Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            mode,
            storage: RcloneCli::from_config(&config),
            config,
            config_store,
            install_check: InstallCheck::new(),
        })
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    /// Returns the appropriate `Renderer` variant for the current output mode.
    #[must_use]
    pub fn renderer(&self) -> Renderer<'_> {
        match self.mode {
            OutputMode::Human => Renderer::Human(HumanRenderer::new(&self.output)),
            OutputMode::Json => Renderer::Json(JsonRenderer),
        }
    }
}
