//! `rclone-remote path`: pure path-string helpers.

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use crate::app::{AppFlags, OutputMode};
use crate::domain::path::{is_remote, join_path, parse_path};
use crate::output::{HumanRenderer, JsonRenderer, OutputContext, Renderer};

/// Path subcommands.
#[derive(Subcommand)]
pub enum PathCommand {
    /// Split a path into remote name and path, and classify it
    Parse {
        /// Path to inspect
        path: String,
    },
    /// Join components under a remote base path
    Join {
        /// Base remote path, e.g. `gdrive:/movies`
        base: String,
        /// Components to append
        #[arg(required = true)]
        parts: Vec<String>,
    },
}

/// Run a path subcommand.
///
/// # Errors
///
/// Returns an error if output cannot be rendered.
pub fn run(flags: &AppFlags, cmd: PathCommand) -> Result<ExitCode> {
    let ctx = OutputContext::new(flags.output.no_color, flags.output.quiet);
    let mode = if flags.output.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let renderer = match mode {
        OutputMode::Human => Renderer::Human(HumanRenderer::new(&ctx)),
        OutputMode::Json => Renderer::Json(JsonRenderer),
    };

    match cmd {
        PathCommand::Parse { path } => {
            renderer.render_parsed(&parse_path(&path), is_remote(&path))?;
        }
        PathCommand::Join { base, parts } => {
            renderer.render_joined(&join_path(&base, &parts))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
