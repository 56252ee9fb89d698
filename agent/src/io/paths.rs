//! Path guard restricting file access to the data root.

use anyhow::{Result, bail};

/// Permits a path only if it starts with the configured data-root prefix.
///
/// The check is a literal string-prefix comparison, matching the historical
/// contract: no canonicalization, no resolution of `..` segments or symlinks.
/// That means `/data/../etc/passwd` passes the guard; callers relying on this
/// as a hard security boundary must mount the root accordingly.
#[derive(Debug, Clone)]
pub struct PathGuard {
    root: String,
}

impl PathGuard {
    /// Build a guard for `root`. A trailing separator is appended if missing
    /// so that `/data` does not admit `/database.json`.
    pub fn new(root: impl Into<String>) -> Self {
        let mut root = root.into();
        if !root.ends_with('/') {
            root.push('/');
        }
        Self { root }
    }

    /// The guarded root prefix, always ending in `/`.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Whether `path` lies under the guarded root.
    pub fn permits(&self, path: &str) -> bool {
        path.starts_with(&self.root)
    }

    /// Error unless `path` lies under the guarded root.
    pub fn ensure(&self, path: &str) -> Result<()> {
        if !self.permits(path) {
            bail!("Invalid file path");
        }
        Ok(())
    }
}
