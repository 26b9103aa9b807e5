//! Candidate location templates.
//!
//! The search space is a fixed ordered list of conventional build-output
//! locations under the project root. Each template is a sequence of path
//! segments, expanded against a [`Config`] without touching the filesystem.

use std::path::PathBuf;

use crate::config::Config;

#[derive(Debug, Clone, Copy)]
enum Segment {
    Lit(&'static str),
    Name,
    CompiledDir,
    HostVersion,
    Platform,
    Arch,
    PregypTag,
}

use Segment::{Arch, CompiledDir, HostVersion, Lit, Name, Platform, PregypTag};

// Order is part of the contract: earlier entries win. Entries 10 and 12
// intentionally repeat 5 and 6; the repeated locations lose to their first
// occurrence and exist so the tried-path report matches the conventional
// listing.
const TEMPLATES: [&[Segment]; 18] = [
    &[Lit("build"), Name],
    &[Lit("build"), Lit("Debug"), Name],
    &[Lit("build"), Lit("Release"), Name],
    &[Name],
    &[Lit("Debug"), Name],
    &[Lit("Release"), Name],
    &[Lit("MinSizeRel"), Name],
    &[Lit("RelWithDebInfo"), Name],
    &[Lit("out"), Lit("Debug"), Name],
    &[Lit("Debug"), Name],
    &[Lit("out"), Lit("Release"), Name],
    &[Lit("Release"), Name],
    &[Lit("build"), Lit("default"), Name],
    &[CompiledDir, HostVersion, Platform, Arch, Name],
    &[Lit("addon-build"), Lit("release"), Lit("install-root"), Name],
    &[Lit("addon-build"), Lit("debug"), Lit("install-root"), Name],
    &[Lit("addon-build"), Lit("default"), Lit("install-root"), Name],
    &[Lit("lib"), Lit("binding"), PregypTag, Name],
];

impl Segment {
    fn value<'a>(self, config: &'a Config) -> &'a str {
        match self {
            Self::Lit(literal) => literal,
            Self::Name => &config.name,
            Self::CompiledDir => &config.compiled_dir,
            Self::HostVersion => &config.host_version,
            Self::Platform => &config.platform,
            Self::Arch => &config.arch,
            Self::PregypTag => &config.pregyp_tag,
        }
    }
}

/// Expand every template against `config`, in search order.
#[must_use]
pub fn candidate_paths(config: &Config) -> Vec<PathBuf> {
    TEMPLATES
        .iter()
        .map(|template| {
            let mut path = config.root.clone();
            for segment in *template {
                path.push(segment.value(config));
            }
            path
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Defaults;

    fn config() -> Config {
        let defaults = Defaults::from_env()
            .with_platform("linux")
            .with_arch("x64")
            .with_host_version("11.11.11")
            .with_host_abi("115")
            .with_compiled_dir("compiled");
        Config::new(PathBuf::from("/proj"), "foo", &defaults)
    }

    #[test]
    fn every_template_expands() {
        assert_eq!(candidate_paths(&config()).len(), 18);
    }

    #[test]
    fn expansion_preserves_search_order() {
        let paths = candidate_paths(&config());

        assert_eq!(paths[0], PathBuf::from("/proj/build/foo.node"));
        assert_eq!(paths[3], PathBuf::from("/proj/foo.node"));
        assert_eq!(
            paths[13],
            PathBuf::from("/proj/compiled/11.11.11/linux/x64/foo.node")
        );
        assert_eq!(
            paths[17],
            PathBuf::from("/proj/lib/binding/node-v115-linux-x64/foo.node")
        );
    }

    #[test]
    fn conventional_duplicates_stay_in_the_listing() {
        let paths = candidate_paths(&config());

        assert_eq!(paths[4], paths[9]);
        assert_eq!(paths[5], paths[11]);
    }

    #[test]
    fn expansion_is_deterministic() {
        let config = config();
        assert_eq!(candidate_paths(&config), candidate_paths(&config));
    }

    #[test]
    fn bare_and_suffixed_names_expand_identically() {
        let defaults = Defaults::from_env()
            .with_platform("linux")
            .with_arch("x64")
            .with_host_version("11.11.11")
            .with_host_abi("115")
            .with_compiled_dir("compiled");
        let bare = Config::new(PathBuf::from("/proj"), "foo", &defaults);
        let suffixed = Config::new(PathBuf::from("/proj"), "foo.node", &defaults);

        assert_eq!(candidate_paths(&bare), candidate_paths(&suffixed));
    }
}
