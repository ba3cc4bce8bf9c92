//! Shared mock infrastructure for unit tests.
//!
//! `MockCommandRunner` stands in for the process layer underneath the real
//! `RcloneCli`; `FakeStorage` stands in for the whole `RemoteStorage` port.

#![allow(clippy::expect_used, dead_code)]

use std::process::Output;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use rclone_remote::application::ports::{CommandRunner, ListOptions, RemoteStorage};
use rclone_remote::domain::config::Timeouts;
use rclone_remote::domain::{ProcessError, RcloneError};
use rclone_remote::infra::rclone::RcloneCli;

use crate::helpers::{err_output, ok_output};

// ── MockCommandRunner ─────────────────────────────────────────────────────────

/// One recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub program: String,
    pub args: Vec<String>,
    pub timeout: Duration,
}

type RunResult = Arc<dyn Fn(&[String]) -> Result<Output, ProcessError> + Send + Sync>;

/// A `CommandRunner` that records every call and returns a canned result.
///
/// Clones share the same call log.
#[derive(Clone)]
pub struct MockCommandRunner {
    calls: Arc<Mutex<Vec<Call>>>,
    result: RunResult,
}

impl MockCommandRunner {
    fn with(result: RunResult) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            result,
        }
    }

    /// Exit 0 with the given stdout.
    pub fn stdout(stdout: &'static str) -> Self {
        Self::with(Arc::new(move |_: &[String]| Ok(ok_output(stdout.as_bytes()))))
    }

    /// Exit with `code` and the given stderr.
    pub fn exit(code: i32, stderr: &'static str) -> Self {
        Self::with(Arc::new(move |_: &[String]| Ok(err_output(code, stderr.as_bytes()))))
    }

    /// The program cannot be found.
    pub fn not_found() -> Self {
        Self::with(Arc::new(|_: &[String]| {
            Err(ProcessError::NotFound {
                program: "rclone".to_string(),
            })
        }))
    }

    /// The program exceeds its timeout.
    pub fn timeout() -> Self {
        Self::with(Arc::new(|_: &[String]| {
            Err(ProcessError::Timeout {
                program: "rclone".to_string(),
                timeout: Duration::from_secs(5),
            })
        }))
    }

    /// Answer each call according to its rclone subcommand (first argument).
    pub fn by_subcommand(
        respond: impl Fn(&str) -> Result<Output, ProcessError> + Send + Sync + 'static,
    ) -> Self {
        Self::with(Arc::new(move |args: &[String]| {
            respond(args.first().map_or("", String::as_str))
        }))
    }

    /// Return a snapshot of all recorded calls.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().expect("mutex poisoned").clone()
    }

    /// The single recorded call; panics if there was not exactly one.
    pub fn only_call(&self) -> Call {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected one call, got {calls:?}");
        calls.into_iter().next().expect("one call")
    }
}

impl CommandRunner for MockCommandRunner {
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output, ProcessError> {
        let args: Vec<String> = args.iter().map(ToString::to_string).collect();
        let result = (self.result)(&args);
        self.calls.lock().expect("mutex poisoned").push(Call {
            program: program.to_owned(),
            args,
            timeout,
        });
        result
    }
}

/// `RcloneCli` over `runner` with the default binary and timeouts.
pub fn rclone(runner: &MockCommandRunner) -> RcloneCli<MockCommandRunner> {
    RcloneCli::new(runner.clone(), "rclone", Timeouts::default())
}

// ── FakeStorage ───────────────────────────────────────────────────────────────

type ListingResult = Arc<dyn Fn() -> Result<Vec<String>, RcloneError> + Send + Sync>;

/// A `RemoteStorage` whose `list_files` returns a canned result and records
/// its arguments. Every other operation fails with `BinaryMissing`.
#[derive(Clone)]
pub struct FakeStorage {
    listings: Arc<Mutex<Vec<(String, ListOptions)>>>,
    listing: ListingResult,
}

impl FakeStorage {
    pub fn listing(entries: &'static [&'static str]) -> Self {
        Self {
            listings: Arc::new(Mutex::new(Vec::new())),
            listing: Arc::new(move || Ok(entries.iter().map(ToString::to_string).collect())),
        }
    }

    pub fn failing_listing() -> Self {
        Self {
            listings: Arc::new(Mutex::new(Vec::new())),
            listing: Arc::new(|| {
                Err(RcloneError::NonZeroExit {
                    subcommand: "lsf",
                    code: Some(3),
                    stderr: "directory not found".to_string(),
                })
            }),
        }
    }

    pub fn listings(&self) -> Vec<(String, ListOptions)> {
        self.listings.lock().expect("mutex poisoned").clone()
    }
}

fn missing<T>() -> Result<T, RcloneError> {
    Err(RcloneError::BinaryMissing {
        binary: "rclone".to_string(),
    })
}

impl RemoteStorage for FakeStorage {
    fn binary(&self) -> &str {
        "rclone"
    }
    async fn version(&self) -> Result<String, RcloneError> {
        missing()
    }
    async fn list_remotes(&self) -> Result<Vec<String>, RcloneError> {
        missing()
    }
    async fn list_files(
        &self,
        remote_path: &str,
        options: ListOptions,
    ) -> Result<Vec<String>, RcloneError> {
        self.listings
            .lock()
            .expect("mutex poisoned")
            .push((remote_path.to_owned(), options));
        (self.listing)()
    }
    async fn size(&self, _: &str) -> Result<u64, RcloneError> {
        missing()
    }
    async fn move_to(&self, _: &str, _: &str) -> Result<(), RcloneError> {
        missing()
    }
    async fn mkdir(&self, _: &str) -> Result<(), RcloneError> {
        missing()
    }
}
