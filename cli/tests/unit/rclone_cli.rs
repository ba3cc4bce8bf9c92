//! Tests for `RcloneCli`: argument construction, per-subcommand timeouts,
//! output parsing and failure classification.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::time::Duration;

use rclone_remote::application::ports::{ListOptions, RemoteStorage};
use rclone_remote::domain::RcloneError;
use rclone_remote::domain::config::Timeouts;
use rclone_remote::infra::rclone::RcloneCli;

use crate::mocks::{MockCommandRunner, rclone};

// ── Argument construction and timeouts ───────────────────────────────────────

#[tokio::test]
async fn test_version_runs_version_with_short_timeout() {
    let runner = MockCommandRunner::stdout("rclone v1.66.0\n");
    let out = rclone(&runner).version().await.expect("version");
    assert!(out.starts_with("rclone v1.66.0"));

    let call = runner.only_call();
    assert_eq!(call.program, "rclone");
    assert_eq!(call.args, vec!["version"]);
    assert_eq!(call.timeout, Duration::from_secs(5));
}

#[tokio::test]
async fn test_list_remotes_parses_names() {
    let runner = MockCommandRunner::stdout("gdrive:\ns3:\ndropbox:\n");
    let remotes = rclone(&runner).list_remotes().await.expect("remotes");
    assert_eq!(remotes, vec!["gdrive", "s3", "dropbox"]);

    let call = runner.only_call();
    assert_eq!(call.args, vec!["listremotes"]);
    assert_eq!(call.timeout, Duration::from_secs(10));
}

#[tokio::test]
async fn test_list_remotes_empty_output() {
    let runner = MockCommandRunner::stdout("");
    assert!(rclone(&runner).list_remotes().await.expect("remotes").is_empty());
}

#[tokio::test]
async fn test_list_files_default_is_files_only() {
    let runner = MockCommandRunner::stdout("movie1.mkv\nmovie2.mp4\nshow.avi\n");
    let files = rclone(&runner)
        .list_files("gdrive:/movies", ListOptions::default())
        .await
        .expect("lsf");
    assert_eq!(files, vec!["movie1.mkv", "movie2.mp4", "show.avi"]);

    let call = runner.only_call();
    assert_eq!(call.args, vec!["lsf", "--files-only", "gdrive:/movies"]);
    assert_eq!(call.timeout, Duration::from_secs(60));
}

#[tokio::test]
async fn test_list_files_recursive_passes_flag() {
    let runner = MockCommandRunner::stdout("action/movie.mkv\ncomedy/show.mp4\n");
    let options = ListOptions {
        recursive: true,
        ..ListOptions::default()
    };
    let files = rclone(&runner)
        .list_files("gdrive:/movies", options)
        .await
        .expect("lsf");
    assert!(files.contains(&"action/movie.mkv".to_string()));
    assert!(runner.only_call().args.contains(&"--recursive".to_string()));
}

#[tokio::test]
async fn test_list_files_with_dirs_omits_files_only() {
    let runner = MockCommandRunner::stdout("action/\nmovie.mkv\n");
    let options = ListOptions {
        recursive: false,
        files_only: false,
    };
    rclone(&runner)
        .list_files("gdrive:", options)
        .await
        .expect("lsf");
    assert_eq!(runner.only_call().args, vec!["lsf", "gdrive:"]);
}

#[tokio::test]
async fn test_size_requests_json_and_reads_bytes() {
    let runner = MockCommandRunner::stdout(r#"{"bytes": 1048576}"#);
    let bytes = rclone(&runner)
        .size("gdrive:/movies/test.mkv")
        .await
        .expect("size");
    assert_eq!(bytes, 1_048_576);

    let call = runner.only_call();
    assert_eq!(call.args, vec!["size", "gdrive:/movies/test.mkv", "--json"]);
    assert_eq!(call.timeout, Duration::from_secs(30));
}

#[tokio::test]
async fn test_size_invalid_json_is_parse_error() {
    let runner = MockCommandRunner::stdout("invalid json");
    let err = rclone(&runner).size("gdrive:/x").await.unwrap_err();
    assert!(matches!(err, RcloneError::Parse { subcommand: "size", .. }), "got: {err:?}");
}

#[tokio::test]
async fn test_move_to_runs_moveto_with_long_timeout() {
    let runner = MockCommandRunner::stdout("");
    rclone(&runner)
        .move_to("/local/test.mkv", "gdrive:/remote/test.mkv")
        .await
        .expect("moveto");

    let call = runner.only_call();
    assert_eq!(
        call.args,
        vec!["moveto", "/local/test.mkv", "gdrive:/remote/test.mkv"]
    );
    assert_eq!(call.timeout, Duration::from_secs(300));
}

#[tokio::test]
async fn test_mkdir_runs_mkdir() {
    let runner = MockCommandRunner::stdout("");
    rclone(&runner)
        .mkdir("gdrive:/new/directory")
        .await
        .expect("mkdir");

    let call = runner.only_call();
    assert_eq!(call.args, vec!["mkdir", "gdrive:/new/directory"]);
    assert_eq!(call.timeout, Duration::from_secs(30));
}

#[tokio::test]
async fn test_custom_binary_and_timeouts_are_used() {
    let runner = MockCommandRunner::stdout("");
    let timeouts = Timeouts {
        moveto: 900,
        ..Timeouts::default()
    };
    let cli = RcloneCli::new(runner.clone(), "/opt/rclone/rclone", timeouts);
    cli.move_to("a:x", "b:y").await.expect("moveto");

    let call = runner.only_call();
    assert_eq!(call.program, "/opt/rclone/rclone");
    assert_eq!(call.timeout, Duration::from_secs(900));
    assert_eq!(cli.binary(), "/opt/rclone/rclone");
}

// ── Failure classification ───────────────────────────────────────────────────

#[tokio::test]
async fn test_non_zero_exit_keeps_code_and_stderr() {
    let runner = MockCommandRunner::exit(3, "directory not found\n");
    let err = rclone(&runner)
        .list_files("gdrive:/missing", ListOptions::default())
        .await
        .unwrap_err();
    match err {
        RcloneError::NonZeroExit {
            subcommand,
            code,
            stderr,
        } => {
            assert_eq!(subcommand, "lsf");
            assert_eq!(code, Some(3));
            assert_eq!(stderr, "directory not found");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_binary_is_binary_missing() {
    let runner = MockCommandRunner::not_found();
    let err = rclone(&runner).mkdir("gdrive:/x").await.unwrap_err();
    assert!(matches!(err, RcloneError::BinaryMissing { .. }), "got: {err:?}");
}

#[tokio::test]
async fn test_timeout_is_timeout_for_subcommand() {
    let runner = MockCommandRunner::timeout();
    let err = rclone(&runner).version().await.unwrap_err();
    assert!(
        matches!(err, RcloneError::Timeout { subcommand: "version", .. }),
        "got: {err:?}"
    );
}
