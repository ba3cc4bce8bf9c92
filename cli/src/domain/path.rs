//! Remote path grammar: classification, decomposition and POSIX-style joins.
//!
//! Pure functions only, no I/O, no async, no process execution.
//!
//! A remote path has the form `name:path`, where `name` is a remote configured
//! in rclone and `path` is interpreted by that remote (usually POSIX-style).

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// At least two non-slash characters followed by a colon, anchored at the
/// start. Single-letter drive prefixes (`C:`) never match.
#[allow(clippy::expect_used)] // Pattern is a compile-time constant
static REMOTE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^/\\]{2,}:").expect("valid remote prefix pattern"));

/// A path split at its first colon.
///
/// `remote` is empty when the input had no colon (a local path).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemotePath<'a> {
    /// Remote name without the trailing colon.
    pub remote: &'a str,
    /// Everything after the first colon.
    pub path: &'a str,
}

impl fmt::Display for RemotePath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.remote, self.path)
    }
}

/// Target of an existence probe: the parent to list and the entry to find.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExistenceProbe<'a> {
    /// Remote path of the parent directory, e.g. `gdrive:/movies` or `gdrive:`.
    pub parent: String,
    /// Final path component to look for in the parent listing.
    pub leaf: &'a str,
}

/// Returns `true` if `path` looks like an rclone remote path.
#[must_use]
pub fn is_remote(path: &str) -> bool {
    REMOTE_PREFIX.is_match(path)
}

/// Split `path` on its first colon.
///
/// ```
/// use rclone_remote::domain::path::parse_path;
///
/// let parsed = parse_path("gdrive:/movies/test.mkv");
/// assert_eq!((parsed.remote, parsed.path), ("gdrive", "/movies/test.mkv"));
///
/// let local = parse_path("/local/path");
/// assert_eq!((local.remote, local.path), ("", "/local/path"));
/// ```
#[must_use]
pub fn parse_path(path: &str) -> RemotePath<'_> {
    match path.split_once(':') {
        Some((remote, path)) => RemotePath { remote, path },
        None => RemotePath { remote: "", path },
    }
}

/// Join `parts` under the path portion of `base` and reassemble `remote:joined`.
///
/// When `base` has an empty path portion (`gdrive:`) the parts are joined on
/// their own, producing a remote-relative path. A base without any remote name
/// still yields a leading colon; callers must pass remote-style bases.
#[must_use]
pub fn join_path<S: AsRef<str>>(base: &str, parts: &[S]) -> String {
    let RemotePath { remote, path } = parse_path(base);
    let parts = parts.iter().map(AsRef::as_ref);
    let joined = if path.is_empty() {
        posix_join(parts)
    } else {
        posix_join(std::iter::once(path).chain(parts))
    };
    format!("{remote}:{joined}")
}

/// Split a POSIX path into `(parent, name)`.
///
/// Mirrors pure POSIX path semantics: `test.mkv` has parent `.`, `/test.mkv`
/// has parent `/`, and `/` has an empty name.
#[must_use]
pub fn split_parent(path: &str) -> (String, &str) {
    let absolute = path.starts_with('/');
    let components: Vec<&str> = components(path).collect();
    let Some((name, dirs)) = components.split_last() else {
        return (root(absolute).to_string(), "");
    };
    (assemble(absolute, dirs), name)
}

/// Work out which directory to list to decide whether `remote_path` exists.
///
/// Returns `None` when there is nothing to look for: an empty path portion
/// (`gdrive:`) or a path with no final component (`gdrive:/`).
#[must_use]
pub fn existence_probe(remote_path: &str) -> Option<ExistenceProbe<'_>> {
    let RemotePath { remote, path } = parse_path(remote_path);
    if path.is_empty() {
        return None;
    }
    let (parent, leaf) = split_parent(path);
    if leaf.is_empty() {
        return None;
    }
    let parent = if parent == "." {
        format!("{remote}:")
    } else {
        format!("{remote}:{parent}")
    };
    Some(ExistenceProbe { parent, leaf })
}

/// Join path segments with POSIX semantics.
///
/// Empty and `.` components are dropped, repeated slashes collapse, and a
/// segment starting with `/` restarts the path from the root.
fn posix_join<'a>(segments: impl IntoIterator<Item = &'a str>) -> String {
    let mut absolute = false;
    let mut parts: Vec<&str> = Vec::new();
    for segment in segments {
        if segment.starts_with('/') {
            absolute = true;
            parts.clear();
        }
        parts.extend(components(segment));
    }
    assemble(absolute, &parts)
}

fn components(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|c| !c.is_empty() && *c != ".")
}

fn assemble(absolute: bool, parts: &[&str]) -> String {
    match (absolute, parts.is_empty()) {
        (true, _) => format!("/{}", parts.join("/")),
        (false, true) => root(false).to_string(),
        (false, false) => parts.join("/"),
    }
}

fn root(absolute: bool) -> &'static str {
    if absolute { "/" } else { "." }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
