//! Command implementations

pub mod config;
pub mod doctor;
pub mod exists;
pub mod ls;
pub mod mkdir;
pub mod mv;
pub mod path;
pub mod remotes;
pub mod size;
pub mod version;

use clap::Args;

use crate::app::AppContext;
use crate::application::ports::RemoteStorage;

/// A single path argument.
#[derive(Args)]
pub struct PathArgs {
    /// Remote (`name:path`) or local path
    pub path: String,
}

/// After a failed operation, say so if the cause is an unusable rclone binary.
async fn hint_if_not_installed(app: &AppContext) {
    if app.is_json() || app.install_check.check(&app.storage).await {
        return;
    }
    app.output.warn(&format!(
        "{} is not installed or not runnable. Run: rclone-remote doctor",
        app.storage.binary()
    ));
}
