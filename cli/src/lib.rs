//! rclone-remote library: remote path helpers backed by the rclone binary.
//!
//! The pure path grammar lives in [`domain::path`]; the rclone-backed
//! operations live in [`application::services::remote`] and run through an
//! [`infra::rclone::RcloneCli`].

#![cfg_attr(test, allow(clippy::expect_used))]

pub mod app;
pub mod application;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod infra;
pub mod output;
