//! Version command

use std::process::ExitCode;

use anyhow::Result;

/// Run the version command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run(json: bool) -> Result<ExitCode> {
    let version = env!("CARGO_PKG_VERSION");

    if json {
        crate::output::JsonRenderer::render_version(version)?;
    } else {
        println!("rclone-remote {version}");
    }
    Ok(ExitCode::SUCCESS)
}
