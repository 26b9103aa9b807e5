//! Binding loader port definition.
//!
//! The mechanism that turns a candidate path into a live artifact lives
//! outside this crate. Implementations tag their failures through
//! [`LoadError`] so the search loop can tell "keep looking" apart from
//! "stop now" with a plain pattern match.
//!
//! # Design Rules
//!
//! - Express **intent**, not implementation detail
//! - No dynamic-linker or interpreter concerns in signatures
//! - Must support: fake loaders in tests, alternative load backends

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures a loader can report for a single candidate path.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No artifact exists at the candidate path. The search continues.
    #[error("no binding at {0}")]
    NotFound(PathBuf),

    /// The loader could not resolve the candidate path. The search
    /// continues.
    #[error("cannot resolve binding path {0}")]
    Unresolvable(PathBuf),

    /// Any other loader failure. The search stops and the error is
    /// surfaced to the caller unmodified.
    #[error("failed to load binding at {path}: {reason}")]
    Failed {
        /// Candidate path the loader was given.
        path: PathBuf,
        /// Loader-specific description of what went wrong.
        reason: String,
    },
}

impl LoadError {
    /// Whether this failure means "this path holds no artifact" rather
    /// than "something is broken".
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Unresolvable(_))
    }
}

/// Load capability for native binding artifacts.
///
/// The resolver hands candidate paths to this port in search order and
/// classifies the outcome: success wins, a not-found failure moves on to
/// the next candidate, anything else aborts the search.
pub trait BindingLoader: Send + Sync {
    /// Loaded artifact handle returned on success.
    type Artifact;

    /// Attempt to load the artifact at `path`.
    fn load(&self, path: &Path) -> Result<Self::Artifact, LoadError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_classification_is_structural() {
        let missing = LoadError::NotFound(PathBuf::from("/proj/build/foo.node"));
        let unresolvable = LoadError::Unresolvable(PathBuf::from("/proj/foo.node"));
        let broken = LoadError::Failed {
            path: PathBuf::from("/proj/Release/foo.node"),
            reason: "truncated artifact".to_string(),
        };

        assert!(missing.is_not_found());
        assert!(unresolvable.is_not_found());
        assert!(!broken.is_not_found());
    }
}
