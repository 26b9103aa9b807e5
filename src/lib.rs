//! Resolver and loader for prebuilt native addon binaries.
//!
//! Given a logical module name and an origin path (or `file:` URI), the
//! resolver discovers the project root by walking upward to the nearest
//! root marker, expands a fixed ordered list of conventional build-output
//! locations, and hands each candidate to a [`BindingLoader`] until one
//! loads. Successful loads are cached per `(name, origin)` pair for the
//! life of the [`Resolver`].
//!
//! The loading mechanism itself is a port: implement [`BindingLoader`] for
//! whatever turns a path into a live artifact (a dynamic-library handle, an
//! embedded runtime's module object) and tag failures through
//! [`LoadError`] so the search can tell "keep looking" from "stop now".
//!
//! ```no_run
//! use std::path::{Path, PathBuf};
//!
//! use bindery::{BindingLoader, LoadError, Resolver};
//!
//! struct FsLoader;
//!
//! impl BindingLoader for FsLoader {
//!     type Artifact = PathBuf;
//!
//!     fn load(&self, path: &Path) -> Result<Self::Artifact, LoadError> {
//!         if path.is_file() {
//!             Ok(path.to_path_buf())
//!         } else {
//!             Err(LoadError::NotFound(path.to_path_buf()))
//!         }
//!     }
//! }
//!
//! let resolver = Resolver::new(FsLoader);
//! let _artifact = resolver.resolve_and_load("foo", "/proj/src/index.js")?;
//! # Ok::<(), bindery::BindingsError>(())
//! ```

#![deny(unused_crate_dependencies)]

mod candidates;
mod config;
mod error;
mod loader;
mod platform;
mod resolver;
mod root;

#[cfg(test)]
mod test_utils;

pub use candidates::candidate_paths;
pub use config::{
    normalized_name, Config, Defaults, BINDING_EXT, COMPILED_DIR_ENV, DEFAULT_COMPILED_DIR,
    HOST_ABI_ENV, HOST_VERSION_ENV,
};
pub use error::BindingsError;
pub use loader::{BindingLoader, LoadError};
pub use resolver::{ResolutionPlan, Resolver};
pub use root::{locate_root, origin_start_dir};
