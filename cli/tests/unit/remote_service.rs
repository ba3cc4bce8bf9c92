//! Tests for the public remote helper services: every failure collapses to
//! the operation's safe default.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use rclone_remote::application::ports::ListOptions;
use rclone_remote::application::services::remote::{
    InstallCheck, check_installed, exists, get_size, list_files, list_remotes, mkdir, move_file,
};

use crate::mocks::{FakeStorage, MockCommandRunner, rclone};

// ── check_installed ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_check_installed_true_when_version_succeeds() {
    let runner = MockCommandRunner::stdout("rclone v1.66.0\n");
    assert!(check_installed(&rclone(&runner)).await);
}

#[tokio::test]
async fn test_check_installed_false_when_not_found() {
    let runner = MockCommandRunner::not_found();
    assert!(!check_installed(&rclone(&runner)).await);
}

#[tokio::test]
async fn test_check_installed_false_on_timeout() {
    let runner = MockCommandRunner::timeout();
    assert!(!check_installed(&rclone(&runner)).await);
}

#[tokio::test]
async fn test_check_installed_false_on_non_zero_exit() {
    let runner = MockCommandRunner::exit(1, "");
    assert!(!check_installed(&rclone(&runner)).await);
}

#[tokio::test]
async fn test_install_check_memoizes_until_reset() {
    let runner = MockCommandRunner::stdout("rclone v1.66.0\n");
    let storage = rclone(&runner);
    let cache = InstallCheck::new();

    assert_eq!(cache.cached(), None);
    assert!(cache.check(&storage).await);
    assert!(cache.check(&storage).await);
    assert_eq!(runner.calls().len(), 1, "second check must hit the cache");
    assert_eq!(cache.cached(), Some(true));

    cache.reset();
    assert_eq!(cache.cached(), None);
    assert!(cache.check(&storage).await);
    assert_eq!(runner.calls().len(), 2);
}

#[tokio::test]
async fn test_install_check_caches_negative_answer() {
    let runner = MockCommandRunner::not_found();
    let storage = rclone(&runner);
    let cache = InstallCheck::new();
    assert!(!cache.check(&storage).await);
    assert!(!cache.check(&storage).await);
    assert_eq!(runner.calls().len(), 1);
}

// ── list_remotes / list_files ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_remotes_success() {
    let runner = MockCommandRunner::stdout("gdrive:\ns3:\ndropbox:\n");
    assert_eq!(
        list_remotes(&rclone(&runner)).await,
        vec!["gdrive", "s3", "dropbox"]
    );
}

#[tokio::test]
async fn test_list_remotes_failure_is_empty() {
    let runner = MockCommandRunner::exit(1, "boom");
    assert!(list_remotes(&rclone(&runner)).await.is_empty());
}

#[tokio::test]
async fn test_list_files_failure_is_empty() {
    let runner = MockCommandRunner::exit(1, "boom");
    let files = list_files(&rclone(&runner), "gdrive:/movies", ListOptions::default()).await;
    assert!(files.is_empty());
}

#[tokio::test]
async fn test_list_files_timeout_is_empty() {
    let runner = MockCommandRunner::timeout();
    let files = list_files(&rclone(&runner), "gdrive:/movies", ListOptions::default()).await;
    assert!(files.is_empty());
}

// ── get_size ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_get_size_success() {
    let runner = MockCommandRunner::stdout(r#"{"bytes": 1048576}"#);
    assert_eq!(get_size(&rclone(&runner), "gdrive:/movies/test.mkv").await, 1_048_576);
}

#[tokio::test]
async fn test_get_size_failure_is_zero() {
    let runner = MockCommandRunner::exit(1, "");
    assert_eq!(get_size(&rclone(&runner), "gdrive:/movies/test.mkv").await, 0);
}

#[tokio::test]
async fn test_get_size_invalid_json_is_zero() {
    let runner = MockCommandRunner::stdout("invalid json");
    assert_eq!(get_size(&rclone(&runner), "gdrive:/movies/test.mkv").await, 0);
}

#[tokio::test]
async fn test_get_size_missing_binary_is_zero() {
    let runner = MockCommandRunner::not_found();
    assert_eq!(get_size(&rclone(&runner), "gdrive:/movies/test.mkv").await, 0);
}

// ── exists ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_exists_true_when_leaf_listed() {
    let storage = FakeStorage::listing(&["test.mkv", "other.mp4"]);
    assert!(exists(&storage, "gdrive:/movies/test.mkv").await);
}

#[tokio::test]
async fn test_exists_false_when_leaf_absent() {
    let storage = FakeStorage::listing(&["other.mp4"]);
    assert!(!exists(&storage, "gdrive:/movies/test.mkv").await);
}

#[tokio::test]
async fn test_exists_false_when_listing_fails() {
    let storage = FakeStorage::failing_listing();
    assert!(!exists(&storage, "gdrive:/movies/test.mkv").await);
}

#[tokio::test]
async fn test_exists_lists_parent_including_directories() {
    let storage = FakeStorage::listing(&[]);
    exists(&storage, "gdrive:/movies/test.mkv").await;
    let listings = storage.listings();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].0, "gdrive:/movies");
    assert_eq!(
        listings[0].1,
        ListOptions {
            recursive: false,
            files_only: false,
        }
    );
}

#[tokio::test]
async fn test_exists_top_level_lists_bare_remote() {
    let storage = FakeStorage::listing(&["test.mkv"]);
    assert!(exists(&storage, "gdrive:test.mkv").await);
    assert_eq!(storage.listings()[0].0, "gdrive:");
}

#[tokio::test]
async fn test_exists_matches_directory_entries() {
    let storage = FakeStorage::listing(&["action/", "comedy/"]);
    assert!(exists(&storage, "gdrive:/movies/action").await);
}

#[tokio::test]
async fn test_exists_empty_path_is_false_without_listing() {
    let storage = FakeStorage::listing(&["anything"]);
    assert!(!exists(&storage, "gdrive:").await);
    assert!(storage.listings().is_empty());
}

#[tokio::test]
async fn test_exists_end_to_end_through_rclone_cli() {
    let runner = MockCommandRunner::stdout("test.mkv\nsubdir/\n");
    assert!(exists(&rclone(&runner), "gdrive:/movies/test.mkv").await);
    assert_eq!(runner.only_call().args, vec!["lsf", "gdrive:/movies"]);
}

// ── move_file / mkdir ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_move_file_success() {
    let runner = MockCommandRunner::stdout("");
    assert!(move_file(&rclone(&runner), "gdrive:/old/test.mkv", "gdrive:/new/test.mkv").await);
}

#[tokio::test]
async fn test_move_file_failure() {
    let runner = MockCommandRunner::exit(1, "");
    assert!(!move_file(&rclone(&runner), "gdrive:/old/test.mkv", "gdrive:/new/test.mkv").await);
}

#[tokio::test]
async fn test_move_file_local_to_remote() {
    let runner = MockCommandRunner::stdout("");
    assert!(move_file(&rclone(&runner), "/local/test.mkv", "gdrive:/remote/test.mkv").await);
}

#[tokio::test]
async fn test_move_file_timeout_is_false() {
    let runner = MockCommandRunner::timeout();
    assert!(!move_file(&rclone(&runner), "/local/big.mkv", "gdrive:/big.mkv").await);
}

#[tokio::test]
async fn test_mkdir_success() {
    let runner = MockCommandRunner::stdout("");
    assert!(mkdir(&rclone(&runner), "gdrive:/new/directory").await);
}

#[tokio::test]
async fn test_mkdir_failure() {
    let runner = MockCommandRunner::exit(1, "");
    assert!(!mkdir(&rclone(&runner), "gdrive:/new/directory").await);
}

// ── every operation under every failure mode ─────────────────────────────────

#[tokio::test]
async fn test_every_operation_falls_back_on_every_failure_mode() {
    let cases = [
        ("not found", MockCommandRunner::not_found()),
        ("non-zero exit", MockCommandRunner::exit(1, "boom")),
        ("timeout", MockCommandRunner::timeout()),
    ];

    for (name, runner) in cases {
        let storage = rclone(&runner);

        assert!(!check_installed(&storage).await, "{name}: check_installed");
        assert!(list_remotes(&storage).await.is_empty(), "{name}: list_remotes");
        assert!(
            list_files(&storage, "gdrive:/movies", ListOptions::default())
                .await
                .is_empty(),
            "{name}: list_files"
        );
        assert_eq!(get_size(&storage, "gdrive:/movies/test.mkv").await, 0, "{name}: get_size");
        assert!(!exists(&storage, "gdrive:/movies/test.mkv").await, "{name}: exists");
        assert!(
            !move_file(&storage, "gdrive:/a.mkv", "gdrive:/b.mkv").await,
            "{name}: move_file"
        );
        assert!(!mkdir(&storage, "gdrive:/new").await, "{name}: mkdir");

        assert_eq!(runner.calls().len(), 7, "{name}: one rclone call per operation");
    }
}
