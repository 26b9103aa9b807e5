//! Resolution error types.
//!
//! Every failure a caller can observe is a [`BindingsError`]. Failures with
//! a stable diagnostic code report it through [`BindingsError::code`].

use std::path::PathBuf;

use thiserror::Error;

use crate::loader::LoadError;

/// Errors produced while resolving and loading a binding.
#[derive(Debug, Error)]
pub enum BindingsError {
    /// A required argument was blank.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A `file:` origin could not be converted to a filesystem path.
    #[error("unsupported file URI: {0}")]
    UnsupportedFileUri(String),

    /// The current directory was needed to absolutize a relative origin
    /// and could not be determined.
    #[error("cannot determine current directory: {0}")]
    CurrentDir(String),

    /// No root marker was found between the origin and the filesystem root.
    #[error("could not find project root given origin {origin}")]
    NoProjectRoot {
        /// Origin path exactly as the caller passed it.
        origin: String,
    },

    /// Every candidate location was tried without success.
    #[error("could not locate bindings file {name}; tried:\n{}", list_tried(.tried))]
    NotFound {
        /// Normalized module file name.
        name: String,
        /// Every candidate path attempted, in search order.
        tried: Vec<PathBuf>,
    },

    /// The loader failed for a reason other than a missing artifact; the
    /// failure is surfaced unmodified.
    #[error(transparent)]
    Load(#[from] LoadError),
}

impl BindingsError {
    /// Stable diagnostic code for failures that carry one.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::NotFound { .. } => Some("ERR_BINDINGS_NOT_FOUND"),
            Self::NoProjectRoot { .. } => Some("ERR_BINDINGS_NO_ROOT"),
            Self::UnsupportedFileUri(_) => Some("ERR_BINDINGS_FILE_URI"),
            _ => None,
        }
    }
}

fn list_tried(tried: &[PathBuf]) -> String {
    tried
        .iter()
        .map(|path| format!("  -> {}", path.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_cover_the_reported_failures() {
        let not_found = BindingsError::NotFound {
            name: "foo.node".to_string(),
            tried: vec![],
        };
        assert_eq!(not_found.code(), Some("ERR_BINDINGS_NOT_FOUND"));

        let no_root = BindingsError::NoProjectRoot {
            origin: "/proj/index.js".to_string(),
        };
        assert_eq!(no_root.code(), Some("ERR_BINDINGS_NO_ROOT"));

        let bad_uri = BindingsError::UnsupportedFileUri("file://host/x".to_string());
        assert_eq!(bad_uri.code(), Some("ERR_BINDINGS_FILE_URI"));

        let invalid = BindingsError::InvalidArgument("module name is blank");
        assert_eq!(invalid.code(), None);
    }

    #[test]
    fn not_found_display_enumerates_paths_in_order() {
        let err = BindingsError::NotFound {
            name: "foo.node".to_string(),
            tried: vec![
                PathBuf::from("/proj/build/foo.node"),
                PathBuf::from("/proj/foo.node"),
            ],
        };
        let text = err.to_string();

        assert!(text.contains("foo.node"));
        let first = text.find("/proj/build/foo.node").expect("first path listed");
        let second = text.find("/proj/foo.node").expect("second path listed");
        assert!(first < second, "paths must appear in search order");
    }

    #[test]
    fn load_failures_pass_through_unmodified() {
        let err = BindingsError::Load(LoadError::Failed {
            path: PathBuf::from("/proj/build/foo.node"),
            reason: "bad magic".to_string(),
        });

        assert!(err.to_string().contains("bad magic"));
        assert_eq!(err.code(), None);
    }
}
