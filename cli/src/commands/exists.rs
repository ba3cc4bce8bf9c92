//! `rclone-remote exists`: check whether a path exists.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::remote;
use crate::commands::PathArgs;

/// Run the exists command. Exits 0 when the path exists, 1 otherwise.
///
/// # Errors
///
/// Returns an error if output cannot be rendered.
pub async fn run(app: &AppContext, args: &PathArgs) -> Result<ExitCode> {
    let found = remote::exists(&app.storage, &args.path).await;
    app.renderer().render_exists(&args.path, found)?;
    Ok(if found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
