//! CLI argument parsing with clap derive

use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::app::{AppContext, AppFlags, OutputFlags};
use crate::commands;

/// Remote path helpers backed by rclone
#[derive(Parser)]
#[command(
    name = "rclone-remote",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (setting `NO_COLOR` does the same)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// rclone binary to run (overrides the config file)
    #[arg(long, global = true, env = "RCLONE_REMOTE_BINARY", value_name = "PATH")]
    pub rclone: Option<String>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List configured remotes
    Remotes,

    /// List entries under a path
    Ls(commands::ls::LsArgs),

    /// Check whether a file or directory exists
    Exists(commands::PathArgs),

    /// Show the size of a path in bytes
    Size(commands::PathArgs),

    /// Move or rename a file between local and remote paths
    Mv(commands::mv::MvArgs),

    /// Create a directory
    Mkdir(commands::PathArgs),

    /// Parse, classify and join path strings (no rclone needed)
    #[command(subcommand)]
    Path(commands::path::PathCommand),

    /// Diagnose the rclone installation
    Doctor,

    /// Manage configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or output cannot be
    /// written. rclone failures are reported through the exit code instead.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            rclone,
            verbose: _,
            command,
        } = self;

        let flags = AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            rclone_binary: rclone,
        };

        // Pure commands (version, path) never load configuration.
        let app = || AppContext::new(&flags);
        match command {
            Command::Version => commands::version::run(json),
            Command::Path(cmd) => commands::path::run(&flags, cmd),
            Command::Remotes => commands::remotes::run(&app()?).await,
            Command::Ls(args) => commands::ls::run(&app()?, &args).await,
            Command::Exists(args) => commands::exists::run(&app()?, &args).await,
            Command::Size(args) => commands::size::run(&app()?, &args).await,
            Command::Mv(args) => commands::mv::run(&app()?, &args).await,
            Command::Mkdir(args) => commands::mkdir::run(&app()?, &args).await,
            Command::Doctor => commands::doctor::run(&app()?).await,
            Command::Config(cmd) => commands::config::run(&app()?, cmd),
        }
    }
}
