//! `rclone-remote size`: report the size of a path in bytes.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::remote;
use crate::commands::PathArgs;

/// Run the size command. Unreadable sizes are reported as `0`.
///
/// # Errors
///
/// Returns an error if output cannot be rendered.
pub async fn run(app: &AppContext, args: &PathArgs) -> Result<ExitCode> {
    let bytes = remote::get_size(&app.storage, &args.path).await;
    app.renderer().render_size(&args.path, bytes)?;
    Ok(ExitCode::SUCCESS)
}
