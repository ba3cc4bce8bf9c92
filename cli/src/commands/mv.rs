//! `rclone-remote mv`: move or rename a file.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::remote;
use crate::output::progress;

/// Arguments for the mv command.
#[derive(Args)]
pub struct MvArgs {
    /// Source file (local path or `name:path`)
    pub source: String,
    /// Destination file (local path or `name:path`)
    pub destination: String,
}

/// Run the mv command. Exits 1 when the move did not complete cleanly.
///
/// # Errors
///
/// Returns an error if output cannot be rendered.
pub async fn run(app: &AppContext, args: &MvArgs) -> Result<ExitCode> {
    let spinner = (app.output.show_progress() && !app.is_json()).then(|| {
        progress::spinner(&format!("Moving {} → {}", args.source, args.destination))
    });

    let ok = remote::move_file(&app.storage, &args.source, &args.destination).await;

    if let Some(pb) = spinner {
        progress::finish_clear(&pb);
    }
    app.renderer().render_outcome(
        "moveto",
        ok,
        &format!("Moved {} → {}", args.source, args.destination),
        &format!("Could not move {} to {}", args.source, args.destination),
    )?;
    if !ok {
        super::hint_if_not_installed(app).await;
    }
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
