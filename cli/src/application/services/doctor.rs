//! Application service: rclone doctor use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use crate::application::ports::{ProgressReporter, RemoteStorage};
use crate::domain::health::{DoctorChecks, version_satisfies_minimum};
use crate::domain::parse_version;

/// Run the doctor probe workflow.
///
/// Progress goes to `reporter`; rendering the returned checks is up to the
/// caller.
pub async fn run_doctor(
    storage: &impl RemoteStorage,
    reporter: &impl ProgressReporter,
) -> DoctorChecks {
    reporter.step("checking rclone...");
    let version_out = match storage.version().await {
        Ok(out) => Some(out),
        Err(e) => {
            reporter.warn(&e.to_string());
            None
        }
    };
    let rclone_found = version_out.is_some();
    let rclone_version = version_out.as_deref().and_then(parse_version);
    let rclone_version_ok = rclone_found
        && rclone_version
            .as_deref()
            .is_none_or(version_satisfies_minimum);

    let remotes = if rclone_found {
        reporter.step("listing remotes...");
        match storage.list_remotes().await {
            Ok(remotes) => remotes,
            Err(e) => {
                reporter.warn(&e.to_string());
                Vec::new()
            }
        }
    } else {
        Vec::new()
    };

    reporter.success("diagnostics complete");

    DoctorChecks {
        rclone_binary: storage.binary().to_string(),
        rclone_found,
        rclone_version,
        rclone_version_ok,
        remotes,
    }
}
