//! `rclone-remote remotes`: list configured remotes.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::remote;

/// Run the remotes command.
///
/// # Errors
///
/// Returns an error if output cannot be rendered.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let remotes = remote::list_remotes(&app.storage).await;
    app.renderer().render_remotes(&remotes)?;
    Ok(ExitCode::SUCCESS)
}
