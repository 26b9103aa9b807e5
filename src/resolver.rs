//! Resolution driver.
//!
//! [`Resolver`] ties the pieces together: derive the search space for a
//! module name and origin, hand candidates to the [`BindingLoader`] in order,
//! classify each failure, and cache successful loads for the life of the
//! process.

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use crate::candidates::candidate_paths;
use crate::config::{normalized_name, Config, Defaults};
use crate::error::BindingsError;
use crate::loader::BindingLoader;
use crate::root::{locate_root, origin_start_dir};

type CacheKey = (String, String);

/// Everything a resolution pass would try, captured without loading.
///
/// Useful for diagnostics and tooling; [`fmt::Display`] renders the plan as
/// one `key = value` line per field followed by the numbered candidate list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionPlan {
    /// Normalized module file name.
    pub name: String,
    /// Project root the candidates hang off.
    pub root: PathBuf,
    /// Candidate paths in search order.
    pub candidates: Vec<PathBuf>,
}

impl fmt::Display for ResolutionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "name = {}", self.name)?;
        writeln!(f, "root = {}", self.root.display())?;
        for (index, candidate) in self.candidates.iter().enumerate() {
            writeln!(f, "{:2}. {}", index + 1, candidate.display())?;
        }
        Ok(())
    }
}

/// Resolves and loads binding artifacts through a [`BindingLoader`].
///
/// Successful loads are cached per `(name, origin)` pair for the lifetime of
/// the resolver; failures are never cached, so a later call retries the full
/// search. Defaults are re-read from the environment on every call unless the
/// resolver was built with [`Resolver::with_defaults`].
pub struct Resolver<L: BindingLoader> {
    loader: L,
    defaults: Option<Defaults>,
    cache: Mutex<HashMap<CacheKey, Arc<L::Artifact>>>,
}

impl<L: BindingLoader> Resolver<L> {
    /// Resolver that derives its defaults from the environment per call.
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            defaults: None,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Resolver with pinned defaults; the environment is never consulted.
    pub fn with_defaults(loader: L, defaults: Defaults) -> Self {
        Self {
            loader,
            defaults: Some(defaults),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Resolve `name` relative to `origin` and load the artifact.
    ///
    /// Candidates are tried in search order. A not-found failure moves on to
    /// the next candidate; any other loader failure aborts the search and is
    /// surfaced unmodified. The first success is cached and returned; when
    /// every candidate fails the error lists every path tried.
    pub fn resolve_and_load(
        &self,
        name: &str,
        origin: &str,
    ) -> Result<Arc<L::Artifact>, BindingsError> {
        validate(name, origin)?;
        let key: CacheKey = (normalized_name(name), origin.to_string());

        if let Some(artifact) = self.lock_cache().get(&key) {
            debug!(name = %key.0, origin = %key.1, "Returning cached binding");
            return Ok(Arc::clone(artifact));
        }

        let (_, candidates) = self.search_space(name, origin)?;
        let mut tried = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            match self.loader.load(&candidate) {
                Ok(artifact) => {
                    debug!(path = %candidate.display(), "Loaded binding");
                    let artifact = Arc::new(artifact);
                    let mut cache = self.lock_cache();
                    return Ok(Arc::clone(cache.entry(key).or_insert(artifact)));
                }
                Err(err) if err.is_not_found() => {
                    debug!(path = %candidate.display(), "No binding at candidate");
                    tried.push(candidate);
                }
                Err(err) => return Err(BindingsError::Load(err)),
            }
        }

        Err(BindingsError::NotFound { name: key.0, tried })
    }

    /// Compute the search space for `name` and `origin` without loading.
    pub fn plan(&self, name: &str, origin: &str) -> Result<ResolutionPlan, BindingsError> {
        validate(name, origin)?;
        let (root, candidates) = self.search_space(name, origin)?;
        Ok(ResolutionPlan {
            name: normalized_name(name),
            root,
            candidates,
        })
    }

    fn search_space(
        &self,
        name: &str,
        origin: &str,
    ) -> Result<(PathBuf, Vec<PathBuf>), BindingsError> {
        let defaults = self
            .defaults
            .clone()
            .unwrap_or_else(Defaults::from_env);
        let start = origin_start_dir(origin)?;
        let root = locate_root(&start, origin)?;
        let config = Config::new(root.clone(), name, &defaults);
        Ok((root, candidate_paths(&config)))
    }

    fn lock_cache(
        &self,
    ) -> std::sync::MutexGuard<'_, HashMap<CacheKey, Arc<L::Artifact>>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn validate(name: &str, origin: &str) -> Result<(), BindingsError> {
    if name.trim().is_empty() {
        return Err(BindingsError::InvalidArgument("module name is blank"));
    }
    if origin.trim().is_empty() {
        return Err(BindingsError::InvalidArgument("origin path is blank"));
    }
    Ok(())
}
