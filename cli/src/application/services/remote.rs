//! Application service: remote path helper use-cases.
//!
//! Every function here runs at most one rclone process through the injected
//! [`RemoteStorage`] port and never fails: any [`RcloneError`] is logged and
//! turned into the operation's safe default (`false`, `0` or an empty list).
//! Callers that need the failure reason use the port directly.
//!
//! [`RcloneError`]: crate::domain::RcloneError

use std::sync::{Mutex, PoisonError};

use crate::application::ports::{ListOptions, RemoteStorage};
use crate::domain::existence_probe;

/// Whether the rclone binary starts and exits successfully.
pub async fn check_installed(storage: &impl RemoteStorage) -> bool {
    match storage.version().await {
        Ok(_) => true,
        Err(e) => {
            tracing::debug!(binary = storage.binary(), error = %e, "rclone not usable");
            false
        }
    }
}

/// Memoized [`check_installed`].
///
/// The first call probes the binary; later calls reuse the answer until
/// [`InstallCheck::reset`] is called.
#[derive(Debug, Default)]
pub struct InstallCheck {
    cached: Mutex<Option<bool>>,
}

impl InstallCheck {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cached: Mutex::new(None),
        }
    }

    /// Return the cached answer, probing the binary on first use.
    pub async fn check(&self, storage: &impl RemoteStorage) -> bool {
        if let Some(installed) = self.cached() {
            return installed;
        }
        let installed = check_installed(storage).await;
        *self.cached.lock().unwrap_or_else(PoisonError::into_inner) = Some(installed);
        installed
    }

    /// The cached answer, if any.
    #[must_use]
    pub fn cached(&self) -> Option<bool> {
        *self.cached.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Forget the cached answer so the next [`check`](Self::check) probes again.
    pub fn reset(&self) {
        *self.cached.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Names of configured remotes, or empty on failure.
pub async fn list_remotes(storage: &impl RemoteStorage) -> Vec<String> {
    storage.list_remotes().await.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "listing remotes failed");
        Vec::new()
    })
}

/// Entries under `remote_path`, or empty on failure.
pub async fn list_files(
    storage: &impl RemoteStorage,
    remote_path: &str,
    options: ListOptions,
) -> Vec<String> {
    storage
        .list_files(remote_path, options)
        .await
        .unwrap_or_else(|e| {
            tracing::warn!(path = remote_path, error = %e, "listing failed");
            Vec::new()
        })
}

/// Size of `remote_path` in bytes, or `0` on failure.
pub async fn get_size(storage: &impl RemoteStorage, remote_path: &str) -> u64 {
    storage.size(remote_path).await.unwrap_or_else(|e| {
        tracing::warn!(path = remote_path, error = %e, "size query failed");
        0
    })
}

/// Whether `remote_path` names an existing file or directory.
///
/// Lists the parent directory (directories included) and looks for the final
/// path component. A path with nothing after the colon is never found, and a
/// failed listing reads as "absent".
pub async fn exists(storage: &impl RemoteStorage, remote_path: &str) -> bool {
    let Some(probe) = existence_probe(remote_path) else {
        return false;
    };
    let options = ListOptions {
        recursive: false,
        files_only: false,
    };
    match storage.list_files(&probe.parent, options).await {
        Ok(entries) => entries
            .iter()
            .any(|entry| entry == probe.leaf || entry.strip_suffix('/') == Some(probe.leaf)),
        Err(e) => {
            tracing::debug!(parent = %probe.parent, error = %e, "parent listing failed");
            false
        }
    }
}

/// Move or rename `source` to `destination`; `true` only on clean success.
pub async fn move_file(storage: &impl RemoteStorage, source: &str, destination: &str) -> bool {
    match storage.move_to(source, destination).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(source, destination, error = %e, "move failed");
            false
        }
    }
}

/// Create the directory `remote_path`; `true` only on success.
pub async fn mkdir(storage: &impl RemoteStorage, remote_path: &str) -> bool {
    match storage.mkdir(remote_path).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(path = remote_path, error = %e, "mkdir failed");
            false
        }
    }
}
