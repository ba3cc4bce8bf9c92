//! Infrastructure implementation of the `RemoteStorage` port.
//!
//! `RcloneCli<R>` builds rclone argument lists, routes every call through a
//! `CommandRunner` with the per-subcommand timeout, and maps the captured
//! output into typed results.

use std::process::Output;

use crate::application::ports::{CommandRunner, ListOptions, RemoteStorage};
use crate::domain::config::{RemoteConfig, Timeouts};
use crate::domain::{RcloneError, parse_listing, parse_remotes, parse_size};
use crate::infra::command_runner::TokioCommandRunner;

/// Infrastructure adapter that routes all rclone CLI calls through a `CommandRunner`.
///
/// Generic over `R: CommandRunner` so that tests can inject a mock runner
/// without spawning real processes.
pub struct RcloneCli<R: CommandRunner> {
    runner: R,
    binary: String,
    timeouts: Timeouts,
}

impl<R: CommandRunner> RcloneCli<R> {
    /// Create an adapter with an explicit runner, binary and timeouts.
    pub fn new(runner: R, binary: impl Into<String>, timeouts: Timeouts) -> Self {
        Self {
            runner,
            binary: binary.into(),
            timeouts,
        }
    }

    /// Run `rclone <args>` where `args[0]` is `subcommand`.
    ///
    /// A non-zero exit is an error; its stderr is kept for diagnostics.
    async fn invoke(&self, subcommand: &'static str, args: &[&str]) -> Result<Output, RcloneError> {
        let timeout = self.timeouts.for_subcommand(subcommand);
        let output = self
            .runner
            .run_with_timeout(&self.binary, args, timeout)
            .await
            .map_err(|e| RcloneError::from_process(subcommand, e))?;
        if !output.status.success() {
            return Err(RcloneError::NonZeroExit {
                subcommand,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output)
    }
}

impl RcloneCli<TokioCommandRunner> {
    /// Production adapter built from the loaded configuration.
    #[must_use]
    pub fn from_config(config: &RemoteConfig) -> Self {
        Self::new(
            TokioCommandRunner,
            config.rclone.binary.clone(),
            config.timeouts,
        )
    }
}

/// Argument list for `rclone lsf`.
#[must_use]
pub fn lsf_args(remote_path: &str, options: ListOptions) -> Vec<&str> {
    let mut args = vec!["lsf"];
    if options.recursive {
        args.push("--recursive");
    }
    if options.files_only {
        args.push("--files-only");
    }
    args.push(remote_path);
    args
}

impl<R: CommandRunner> RemoteStorage for RcloneCli<R> {
    fn binary(&self) -> &str {
        &self.binary
    }

    async fn version(&self) -> Result<String, RcloneError> {
        let output = self.invoke("version", &["version"]).await?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn list_remotes(&self) -> Result<Vec<String>, RcloneError> {
        let output = self.invoke("listremotes", &["listremotes"]).await?;
        Ok(parse_remotes(&String::from_utf8_lossy(&output.stdout)))
    }

    async fn list_files(
        &self,
        remote_path: &str,
        options: ListOptions,
    ) -> Result<Vec<String>, RcloneError> {
        let output = self.invoke("lsf", &lsf_args(remote_path, options)).await?;
        Ok(parse_listing(&String::from_utf8_lossy(&output.stdout)))
    }

    async fn size(&self, remote_path: &str) -> Result<u64, RcloneError> {
        let output = self.invoke("size", &["size", remote_path, "--json"]).await?;
        parse_size(&String::from_utf8_lossy(&output.stdout)).map_err(|reason| {
            RcloneError::Parse {
                subcommand: "size",
                reason,
            }
        })
    }

    async fn move_to(&self, source: &str, destination: &str) -> Result<(), RcloneError> {
        self.invoke("moveto", &["moveto", source, destination])
            .await
            .map(drop)
    }

    async fn mkdir(&self, remote_path: &str) -> Result<(), RcloneError> {
        self.invoke("mkdir", &["mkdir", remote_path]).await.map(drop)
    }
}
