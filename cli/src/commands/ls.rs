//! `rclone-remote ls`: list entries under a path.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::ListOptions;
use crate::application::services::remote;

/// Arguments for the ls command.
#[derive(Args)]
pub struct LsArgs {
    /// Remote (`name:path`) or local directory to list
    pub path: String,

    /// Descend into subdirectories
    #[arg(short = 'R', long)]
    pub recursive: bool,

    /// Include directories (listed with a trailing `/`)
    #[arg(long)]
    pub dirs: bool,
}

impl LsArgs {
    #[must_use]
    pub fn options(&self) -> ListOptions {
        ListOptions {
            recursive: self.recursive,
            files_only: !self.dirs,
        }
    }
}

/// Run the ls command.
///
/// # Errors
///
/// Returns an error if output cannot be rendered.
pub async fn run(app: &AppContext, args: &LsArgs) -> Result<ExitCode> {
    let entries = remote::list_files(&app.storage, &args.path, args.options()).await;
    app.renderer().render_listing(&args.path, &entries)?;
    Ok(ExitCode::SUCCESS)
}
