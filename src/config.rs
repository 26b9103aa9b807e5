//! Resolution configuration.
//!
//! [`Defaults`] carries the process-wide knobs (host platform, architecture,
//! runtime version and ABI, compiled-output directory name) with environment
//! overrides; [`Config`] freezes those knobs together with a project root and
//! a normalized module name for one resolution pass.

use std::env;
use std::path::PathBuf;

use crate::platform::{host_arch, host_platform};

/// File extension native binding artifacts carry.
pub const BINDING_EXT: &str = ".node";

/// Directory name used for versioned compiled output when
/// [`COMPILED_DIR_ENV`] is not set.
pub const DEFAULT_COMPILED_DIR: &str = "compiled";

/// Environment variable overriding the compiled-output directory name.
pub const COMPILED_DIR_ENV: &str = "BINDERY_COMPILED_DIR";

/// Environment variable supplying the host runtime version.
pub const HOST_VERSION_ENV: &str = "BINDERY_NODE_VERSION";

/// Environment variable supplying the host runtime ABI number.
pub const HOST_ABI_ENV: &str = "BINDERY_NODE_ABI";

const UNKNOWN: &str = "unknown";

/// Read an environment variable, falling back when it is unset or blank.
fn env_or(key: &str, fallback: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => fallback.to_string(),
    }
}

/// Process-wide resolution defaults.
///
/// Constructed from the environment with [`Defaults::from_env`], then
/// optionally adjusted through the `with_*` builders. Embedders that know
/// their runtime version and ABI should set them explicitly; otherwise the
/// versioned candidate locations simply point at directories that do not
/// exist and the search moves past them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    /// Host platform name (`linux`, `darwin`, `win32`, ...).
    pub platform: String,
    /// Host architecture name (`x64`, `arm64`, `ia32`, ...).
    pub arch: String,
    /// Host runtime version, e.g. `11.11.11`.
    pub host_version: String,
    /// Host runtime ABI number, e.g. `115`.
    pub host_abi: String,
    /// Directory name for versioned compiled output.
    pub compiled_dir: String,
}

impl Defaults {
    /// Build defaults from the compile-time target and the environment.
    ///
    /// Blank environment values are treated as unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            platform: host_platform().to_string(),
            arch: host_arch().to_string(),
            host_version: env_or(HOST_VERSION_ENV, UNKNOWN),
            host_abi: env_or(HOST_ABI_ENV, UNKNOWN),
            compiled_dir: env_or(COMPILED_DIR_ENV, DEFAULT_COMPILED_DIR),
        }
    }

    /// Override the platform name.
    #[must_use]
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    /// Override the architecture name.
    #[must_use]
    pub fn with_arch(mut self, arch: impl Into<String>) -> Self {
        self.arch = arch.into();
        self
    }

    /// Override the host runtime version.
    #[must_use]
    pub fn with_host_version(mut self, version: impl Into<String>) -> Self {
        self.host_version = version.into();
        self
    }

    /// Override the host runtime ABI number.
    #[must_use]
    pub fn with_host_abi(mut self, abi: impl Into<String>) -> Self {
        self.host_abi = abi.into();
        self
    }

    /// Override the compiled-output directory name.
    #[must_use]
    pub fn with_compiled_dir(mut self, dir: impl Into<String>) -> Self {
        self.compiled_dir = dir.into();
        self
    }
}

/// Normalize a logical module name to its on-disk file name.
///
/// Appends [`BINDING_EXT`] unless the name already ends with it, so `"foo"`
/// and `"foo.node"` address the same artifact.
#[must_use]
pub fn normalized_name(name: &str) -> String {
    if name.ends_with(BINDING_EXT) {
        name.to_string()
    } else {
        format!("{name}{BINDING_EXT}")
    }
}

/// Frozen configuration for a single resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Project root the candidate locations hang off.
    pub root: PathBuf,
    /// Normalized module file name.
    pub name: String,
    /// Host platform name.
    pub platform: String,
    /// Host architecture name.
    pub arch: String,
    /// Host runtime version.
    pub host_version: String,
    /// Directory name for versioned compiled output.
    pub compiled_dir: String,
    /// Pre-built layout tag, `node-v{abi}-{platform}-{arch}`.
    pub pregyp_tag: String,
}

impl Config {
    /// Freeze `defaults` together with a project root and module name.
    #[must_use]
    pub fn new(root: PathBuf, name: &str, defaults: &Defaults) -> Self {
        let pregyp_tag = format!(
            "node-v{}-{}-{}",
            defaults.host_abi, defaults.platform, defaults.arch
        );
        Self {
            root,
            name: normalized_name(name),
            platform: defaults.platform.clone(),
            arch: defaults.arch.clone(),
            host_version: defaults.host_version.clone(),
            compiled_dir: defaults.compiled_dir.clone(),
            pregyp_tag,
        }
    }
}
