//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the handful of read-only
//! Git queries tagver needs: listing version tags, finding the nearest version
//! tag reachable from HEAD, and reading remote URLs.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: An in-memory implementation for testing
//!
//! Commands depend on the [Repository] trait so they can be exercised without a
//! real repository on disk.

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::boundary::BoundaryWarning;
use crate::domain::{Tag, TagPattern, Version};
use crate::error::{Result, TagverError};
use std::cmp::Ordering;
use tracing::debug;

/// Common git query trait
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations map underlying
/// errors (like `git2::Error`) to the appropriate [TagverError] variants.
pub trait Repository {
    /// List tag names matching `pattern`, sorted by name
    fn list_tags(&self, pattern: &TagPattern) -> Result<Vec<String>>;

    /// Nearest tag matching `pattern` reachable from HEAD
    ///
    /// Same semantics as `git describe --tags --abbrev=0 --match <glob> HEAD`.
    ///
    /// # Returns
    /// * `Ok(Some(tag))` - The nearest matching tag
    /// * `Ok(None)` - If no matching tag is reachable (or HEAD is unborn)
    fn describe_head(&self, pattern: &TagPattern) -> Result<Option<String>>;

    /// All remotes as `(name, fetch url)` pairs
    fn remotes(&self) -> Result<Vec<(String, String)>>;

    /// Fetch URL of `origin`, or of the first remote when there is no `origin`
    fn fetch_remote_url(&self) -> Result<Option<String>> {
        let remotes = self.remotes()?;
        let url = remotes
            .iter()
            .find(|(name, _)| name == "origin")
            .or_else(|| remotes.first())
            .map(|(_, url)| url.clone());
        Ok(url)
    }
}

/// Current project version: the nearest version tag reachable from HEAD, with the tag
/// pattern stripped and dash prereleases converted (`v1.2.3-rc.1` -> `1.2.3~rc.1`).
pub fn current_version<R: Repository + ?Sized>(repo: &R, pattern: &TagPattern) -> Result<String> {
    let tag = repo
        .describe_head(pattern)?
        .ok_or_else(|| TagverError::NoVersionTags {
            pattern: pattern.glob(),
        })?;

    let version = Tag::new(tag.as_str())
        .version_text(pattern)
        .ok_or_else(|| TagverError::NoVersionTags {
            pattern: pattern.glob(),
        })?;
    debug!(tag = %tag, version = %version, "resolved current version from git");
    Ok(version)
}

/// Outcome of a successful greatest-version check
#[derive(Debug, Clone, PartialEq)]
pub struct GreatestReport {
    pub version: String,
    pub compared: usize,
    pub warnings: Vec<BoundaryWarning>,
}

impl GreatestReport {
    /// Human-readable summary for the command output
    pub fn message(&self) -> String {
        if self.compared == 0 {
            format!(
                "Version {} is the greatest (no other tags found)",
                self.version
            )
        } else {
            format!("Version {} is the greatest among all tags", self.version)
        }
    }
}

/// Checks that `version` is not exceeded by any version tag in the repository.
///
/// Tags naming the version itself (verbatim, wrapped in the pattern, or in dash form)
/// are skipped;
/// tags whose version part does not parse are skipped and reported as warnings.
///
/// # Errors
/// - [TagverError::Parse] if `version` itself is invalid
/// - [TagverError::NotGreatest] naming the first tag that compares greater
pub fn check_greatest<R: Repository + ?Sized>(
    repo: &R,
    version: &str,
    pattern: &TagPattern,
) -> Result<GreatestReport> {
    let current = Version::parse(version)?;
    let formatted = pattern.format(version);
    let mut compared = 0;
    let mut warnings = Vec::new();

    for name in repo.list_tags(pattern)? {
        let text = Tag::new(name.as_str())
            .version_text(pattern)
            .unwrap_or_else(|| name.clone());
        if name == version || name == formatted || text == version {
            continue;
        }

        let tagged = match Version::parse(&text) {
            Ok(tagged) => tagged,
            Err(e) => {
                debug!(tag = %name, "skipping invalid tag");
                warnings.push(BoundaryWarning::UnparsableTag {
                    tag: name,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        compared += 1;
        if tagged.cmp_precedence(&current) == Ordering::Greater {
            return Err(TagverError::NotGreatest {
                version: version.to_string(),
                greater: name,
            });
        }
    }

    if compared == 0 {
        warnings.push(BoundaryWarning::NoOtherTags {
            version: version.to_string(),
        });
    }

    Ok(GreatestReport {
        version: version.to_string(),
        compared,
        warnings,
    })
}
