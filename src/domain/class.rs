//! Version classes and their fixed precedence.
//!
//! The class of a version is decided by the delimiter that follows the numeric core:
//! nothing (release), `~` (prerelease), `.` (postrelease) or `_` (intermediate).

use std::fmt;

/// The four mutually exclusive version classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VersionClass {
    /// `major.minor.patch` with no qualifier
    Release,
    /// `~alpha`, `~beta`, `~rc`, `~pre`
    Prerelease,
    /// `.fix`, `.next`, `.post`
    Postrelease,
    /// `_<label>`
    Intermediate,
}

impl VersionClass {
    /// All classes, in ascending precedence order
    pub const ALL: [VersionClass; 4] = [
        VersionClass::Prerelease,
        VersionClass::Release,
        VersionClass::Postrelease,
        VersionClass::Intermediate,
    ];

    /// Precedence rank used when two versions share the same numeric core.
    ///
    /// Lower ranks sort first: Prerelease < Release < Postrelease < Intermediate.
    /// Declaration order of the variants plays no part in ordering.
    pub fn rank(self) -> u8 {
        match self {
            VersionClass::Prerelease => 0,
            VersionClass::Release => 1,
            VersionClass::Postrelease => 2,
            VersionClass::Intermediate => 3,
        }
    }

    /// Leading delimiter of this class's qualifier, `None` for releases
    pub fn delimiter(self) -> Option<char> {
        match self {
            VersionClass::Release => None,
            VersionClass::Prerelease => Some('~'),
            VersionClass::Postrelease => Some('.'),
            VersionClass::Intermediate => Some('_'),
        }
    }

    /// Lowercase name as printed by the `type` command
    pub fn name(self) -> &'static str {
        match self {
            VersionClass::Release => "release",
            VersionClass::Prerelease => "prerelease",
            VersionClass::Postrelease => "postrelease",
            VersionClass::Intermediate => "intermediate",
        }
    }

    /// Build type consumed by downstream build systems
    pub fn build_type(self) -> &'static str {
        match self {
            VersionClass::Release => "Release",
            _ => "Debug",
        }
    }
}

impl fmt::Display for VersionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
