//! `rclone-remote mkdir`: create a directory.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::remote;
use crate::commands::PathArgs;

/// Run the mkdir command. Exits 1 when rclone could not create the directory.
///
/// # Errors
///
/// Returns an error if output cannot be rendered.
pub async fn run(app: &AppContext, args: &PathArgs) -> Result<ExitCode> {
    let ok = remote::mkdir(&app.storage, &args.path).await;
    app.renderer().render_outcome(
        "mkdir",
        ok,
        &format!("Created {}", args.path),
        &format!("Could not create {}", args.path),
    )?;
    if !ok {
        super::hint_if_not_installed(app).await;
    }
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
