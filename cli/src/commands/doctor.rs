//! `rclone-remote doctor`: rclone installation diagnostics.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::application::services::doctor::run_doctor;
use crate::domain::health::collect_issues;
use crate::output::{SilentReporter, TerminalReporter};

/// Run the doctor command. Exits 1 when any issue is found.
///
/// # Errors
///
/// Returns an error if output cannot be rendered.
pub async fn run(app: &AppContext) -> Result<ExitCode> {
    let checks = if app.is_json() {
        run_doctor(&app.storage, &SilentReporter).await
    } else {
        run_doctor(&app.storage, &TerminalReporter::new(&app.output)).await
    };
    let issues = collect_issues(&checks);
    app.renderer().render_doctor(&checks, &issues)?;
    Ok(if issues.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
