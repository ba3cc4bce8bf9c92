//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod health;
pub mod listing;
pub mod path;

pub use config::{RemoteConfig, Timeouts, validate_config_key, validate_config_value};
pub use error::{ConfigError, ProcessError, RcloneError};
pub use health::{DoctorChecks, collect_issues};
pub use listing::{parse_listing, parse_remotes, parse_size, parse_version};
pub use path::{RemotePath, existence_probe, is_remote, join_path, parse_path, split_parent};
