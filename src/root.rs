//! Project root discovery.
//!
//! The search space for binding artifacts hangs off a project root, found by
//! walking upward from the caller's origin until a directory carries one of
//! the conventional root markers.

use std::env;
use std::path::{Path, PathBuf};

use tracing::debug;
use url::Url;

use crate::error::BindingsError;

/// Entries whose presence marks a directory as a project root.
const ROOT_MARKERS: [&str; 2] = ["package.json", "node_modules"];

/// Directory the upward walk starts from, derived from `origin`.
///
/// `origin` is either a filesystem path or a `file:` URI naming the caller's
/// entry file; the walk starts at the directory containing it. Relative paths
/// are absolutized against the current directory.
pub fn origin_start_dir(origin: &str) -> Result<PathBuf, BindingsError> {
    let path = if origin.starts_with("file:") {
        let url = Url::parse(origin)
            .map_err(|_| BindingsError::UnsupportedFileUri(origin.to_string()))?;
        url.to_file_path()
            .map_err(|()| BindingsError::UnsupportedFileUri(origin.to_string()))?
    } else {
        let path = PathBuf::from(origin);
        if path.is_absolute() {
            path
        } else {
            let cwd = env::current_dir()
                .map_err(|err| BindingsError::CurrentDir(err.to_string()))?;
            cwd.join(path)
        }
    };

    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => Ok(parent.to_path_buf()),
        _ => Ok(path),
    }
}

/// Walk upward from `start` until a directory carrying a root marker is found.
///
/// `origin` is reported verbatim when no marker exists anywhere on the way to
/// the filesystem root.
pub fn locate_root(start: &Path, origin: &str) -> Result<PathBuf, BindingsError> {
    let mut dir = start.to_path_buf();
    loop {
        if is_project_root(&dir) {
            debug!(root = %dir.display(), "Found project root");
            return Ok(dir);
        }
        match dir.parent() {
            Some(parent) => dir = parent.to_path_buf(),
            None => {
                return Err(BindingsError::NoProjectRoot {
                    origin: origin.to_string(),
                })
            }
        }
    }
}

fn is_project_root(dir: &Path) -> bool {
    ROOT_MARKERS.iter().any(|marker| dir.join(marker).exists())
}
