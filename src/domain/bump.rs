//! Bump engine: derives the next version from the current one and a requested bump kind.

use crate::domain::class::VersionClass;
use crate::domain::qualifier::{increment_identifier, strip_delimiter};
use crate::domain::version::Version;
use crate::error::{Result, TagverError};
use std::fmt;
use std::str::FromStr;

/// Requested bump kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
    Pre,
    Alpha,
    Beta,
    Rc,
    Fix,
    Next,
    Post,
    Feat,
    /// Transition chosen from the current version's class
    Smart,
}

impl BumpKind {
    /// Every kind, in the order they are listed in help output
    pub const ALL: [BumpKind; 12] = [
        BumpKind::Major,
        BumpKind::Minor,
        BumpKind::Patch,
        BumpKind::Pre,
        BumpKind::Alpha,
        BumpKind::Beta,
        BumpKind::Rc,
        BumpKind::Fix,
        BumpKind::Next,
        BumpKind::Post,
        BumpKind::Feat,
        BumpKind::Smart,
    ];

    /// Lowercase token accepted by [`parse_bump_kind`]
    pub fn as_str(self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
            BumpKind::Pre => "pre",
            BumpKind::Alpha => "alpha",
            BumpKind::Beta => "beta",
            BumpKind::Rc => "rc",
            BumpKind::Fix => "fix",
            BumpKind::Next => "next",
            BumpKind::Post => "post",
            BumpKind::Feat => "feat",
            BumpKind::Smart => "smart",
        }
    }

    /// Class targeted by a qualifier bump and the label of its fresh qualifier
    fn qualifier_target(self) -> Option<(VersionClass, &'static str)> {
        match self {
            BumpKind::Pre | BumpKind::Alpha | BumpKind::Beta | BumpKind::Rc => {
                Some((VersionClass::Prerelease, self.as_str()))
            }
            BumpKind::Fix | BumpKind::Next | BumpKind::Post => {
                Some((VersionClass::Postrelease, self.as_str()))
            }
            BumpKind::Feat => Some((VersionClass::Intermediate, self.as_str())),
            _ => None,
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpKind {
    type Err = TagverError;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.to_lowercase();
        BumpKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == lowered)
            .ok_or_else(|| TagverError::unknown_bump_kind(s))
    }
}

/// Parses a bump kind token, case-insensitively
pub fn parse_bump_kind(text: &str) -> Result<BumpKind> {
    text.parse()
}

/// Outcome of a bump: source text, new canonical text, requested kind and the rule that fired
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpResult {
    pub original: String,
    pub bumped: String,
    pub kind: BumpKind,
    pub rule: String,
}

/// A new version plus a description of the transition that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub version: Version,
    pub rule: String,
}

impl Transition {
    fn new(version: Version, rule: impl Into<String>) -> Self {
        Transition {
            version,
            rule: rule.into(),
        }
    }
}

impl Version {
    /// Applies a bump kind, returning the new version and the rule that was applied.
    ///
    /// - `Major`/`Minor`/`Patch` always yield a release.
    /// - Qualifier kinds increment the qualifier when the version is already of the target
    ///   class, otherwise start a fresh `<label>.1` qualifier of that class.
    /// - `Smart` bumps the patch of a release and increments the qualifier of anything else.
    ///
    /// # Errors
    /// [`TagverError::Parse`] naming the original text when the incremented core number
    /// does not fit in a `u64`.
    pub fn bump(&self, kind: BumpKind) -> Result<Transition> {
        match kind {
            BumpKind::Major => Ok(Transition::new(
                Version::release(self.increment(self.major())?, 0, 0),
                "increment major version and reset minor/patch",
            )),
            BumpKind::Minor => Ok(Transition::new(
                Version::release(self.major(), self.increment(self.minor())?, 0),
                "increment minor version and reset patch",
            )),
            BumpKind::Patch => self.bump_patch("increment patch version"),
            BumpKind::Smart => self.bump_smart(),
            _ => match kind.qualifier_target() {
                Some((class, label)) => Ok(self.bump_into(class, label)),
                None => self.bump_patch("fallback to patch bump"),
            },
        }
    }

    fn increment(&self, number: u64) -> Result<u64> {
        number
            .checked_add(1)
            .ok_or_else(|| TagverError::parse(self.original()))
    }

    fn bump_patch(&self, rule: &str) -> Result<Transition> {
        Ok(Transition::new(
            Version::release(self.major(), self.minor(), self.increment(self.patch())?),
            rule,
        ))
    }

    fn bump_smart(&self) -> Result<Transition> {
        match self.class() {
            VersionClass::Release => self.bump_patch("increment patch for release version"),
            class => match self.increment_qualifier() {
                Some(version) => Ok(Transition::new(
                    version,
                    format!("increment {} identifier", class.name()),
                )),
                None => self.bump_patch("fallback to patch bump for invalid version type"),
            },
        }
    }

    fn bump_into(&self, class: VersionClass, label: &str) -> Transition {
        if self.class() == class {
            if let Some(version) = self.increment_qualifier() {
                return Transition::new(
                    version,
                    format!("increment existing {} identifier", class.name()),
                );
            }
        }

        let delimiter = class.delimiter().unwrap_or('~');
        let qualifier = format!("{}{}.1", delimiter, label);
        Transition::new(
            Version::from_parts(
                self.major(),
                self.minor(),
                self.patch(),
                class,
                Some(qualifier),
            ),
            format!("convert to {} with {}.1", class.name(), label),
        )
    }

    /// Increments the trailing numeric run of the qualifier; `None` for releases
    fn increment_qualifier(&self) -> Option<Version> {
        let delimiter = self.class().delimiter()?;
        let qualifier = self.qualifier()?;
        let identifier = increment_identifier(strip_delimiter(qualifier));
        Some(Version::from_parts(
            self.major(),
            self.minor(),
            self.patch(),
            self.class(),
            Some(format!("{}{}", delimiter, identifier)),
        ))
    }
}

/// Bumps a version string.
///
/// # Errors
/// [`TagverError::Parse`] naming `text` when it is not a valid version.
///
/// # Example
/// ```
/// use tagver::{bump, BumpKind};
///
/// assert_eq!(bump("1.2.3", BumpKind::Major).unwrap().bumped, "2.0.0");
/// assert_eq!(bump("1.2.3~alpha.1.2", BumpKind::Alpha).unwrap().bumped, "1.2.3~alpha.3");
/// ```
pub fn bump(text: &str, kind: BumpKind) -> Result<BumpResult> {
    let current = Version::parse(text)?;
    let transition = current.bump(kind)?;
    tracing::debug!(
        from = %current.original(),
        to = %transition.version,
        kind = %kind,
        rule = %transition.rule,
        "bumped version"
    );

    Ok(BumpResult {
        original: current.original().to_string(),
        bumped: transition.version.to_string(),
        kind,
        rule: transition.rule,
    })
}

/// Bumps a version string using a textual bump kind.
///
/// # Errors
/// [`TagverError::UnknownBumpKind`] for an unrecognized token, [`TagverError::Parse`] for
/// an invalid version.
pub fn bump_with(text: &str, kind: &str) -> Result<BumpResult> {
    let kind = parse_bump_kind(kind)?;
    bump(text, kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bumped(text: &str, kind: BumpKind) -> String {
        bump(text, kind).unwrap().bumped
    }

    #[test]
    fn test_parse_bump_kind_case_insensitive() {
        assert_eq!(parse_bump_kind("major").unwrap(), BumpKind::Major);
        assert_eq!(parse_bump_kind("MAJOR").unwrap(), BumpKind::Major);
        assert_eq!(parse_bump_kind("Rc").unwrap(), BumpKind::Rc);
        assert_eq!(parse_bump_kind("sMaRt").unwrap(), BumpKind::Smart);
    }

    #[test]
    fn test_parse_bump_kind_all_tokens() {
        for kind in BumpKind::ALL {
            assert_eq!(parse_bump_kind(kind.as_str()).unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_bump_kind_unknown() {
        let err = parse_bump_kind("huge").unwrap_err();
        assert!(matches!(err, TagverError::UnknownBumpKind { ref token } if token == "huge"));
        assert!(parse_bump_kind("").is_err());
        assert!(parse_bump_kind("feature").is_err());
    }

    #[test]
    fn test_core_bumps_always_release() {
        for text in ["1.2.3", "1.2.3~alpha.1", "1.2.3.fix.1", "1.2.3_feature.1", "v1.2.3"] {
            assert_eq!(bumped(text, BumpKind::Major), "2.0.0");
            assert_eq!(bumped(text, BumpKind::Minor), "1.3.0");
            assert_eq!(bumped(text, BumpKind::Patch), "1.2.4");
        }
    }

    #[test]
    fn test_qualifier_bump_starts_fresh_class() {
        assert_eq!(bumped("1.2.3", BumpKind::Alpha), "1.2.3~alpha.1");
        assert_eq!(bumped("1.2.3", BumpKind::Rc), "1.2.3~rc.1");
        assert_eq!(bumped("1.2.3", BumpKind::Fix), "1.2.3.fix.1");
        assert_eq!(bumped("1.2.3", BumpKind::Post), "1.2.3.post.1");
        assert_eq!(bumped("1.2.3", BumpKind::Feat), "1.2.3_feat.1");
        assert_eq!(bumped("1.2.3.fix.2", BumpKind::Beta), "1.2.3~beta.1");
        assert_eq!(bumped("1.2.3~rc.2", BumpKind::Next), "1.2.3.next.1");
    }

    #[test]
    fn test_qualifier_bump_increments_same_class() {
        assert_eq!(bumped("1.2.3~alpha.1", BumpKind::Alpha), "1.2.3~alpha.2");
        assert_eq!(bumped("1.2.3~alpha.1", BumpKind::Rc), "1.2.3~alpha.2");
        assert_eq!(bumped("1.2.3.fix.1", BumpKind::Fix), "1.2.3.fix.2");
        assert_eq!(bumped("1.2.3_feature.1", BumpKind::Feat), "1.2.3_feature.2");
    }

    #[test]
    fn test_qualifier_bump_collapses_numbers() {
        assert_eq!(bumped("1.2.3~alpha.1.2", BumpKind::Alpha), "1.2.3~alpha.3");
        assert_eq!(bumped("1.2.3.fix.1.2", BumpKind::Fix), "1.2.3.fix.3");
    }

    #[test]
    fn test_smart_bump() {
        assert_eq!(bumped("1.2.3", BumpKind::Smart), "1.2.4");
        assert_eq!(bumped("1.2.3~rc.1", BumpKind::Smart), "1.2.3~rc.2");
        assert_eq!(bumped("1.2.3.post", BumpKind::Smart), "1.2.3.post.1");
        assert_eq!(bumped("1.2.3_feature", BumpKind::Smart), "1.2.3_feature.1");
    }

    #[test]
    fn test_bump_result_fields() {
        let result = bump("v1.2.3-rc.1", BumpKind::Smart).unwrap();
        assert_eq!(result.original, "v1.2.3-rc.1");
        assert_eq!(result.bumped, "1.2.3~rc.2");
        assert_eq!(result.kind, BumpKind::Smart);
        assert_eq!(result.rule, "increment prerelease identifier");
    }

    #[test]
    fn test_rules_describe_transition() {
        assert_eq!(
            bump("1.2.3", BumpKind::Fix).unwrap().rule,
            "convert to postrelease with fix.1"
        );
        assert_eq!(
            bump("1.2.3", BumpKind::Smart).unwrap().rule,
            "increment patch for release version"
        );
        assert_eq!(
            bump("1.2.3_x", BumpKind::Feat).unwrap().rule,
            "increment existing intermediate identifier"
        );
    }

    #[test]
    fn test_bump_invalid_version() {
        let err = bump("1.2", BumpKind::Patch).unwrap_err();
        assert!(matches!(err, TagverError::Parse { ref input } if input == "1.2"));
    }

    #[test]
    fn test_core_overflow_reports_input() {
        let max = u64::MAX;
        let version = Version::parse(&format!("{}.0.0", max)).unwrap();
        assert!(matches!(
            version.bump(BumpKind::Major),
            Err(TagverError::Parse { ref input }) if input == &format!("{}.0.0", max)
        ));
        assert_eq!(
            version.bump(BumpKind::Minor).unwrap().version.to_string(),
            format!("{}.1.0", max)
        );
    }

    #[test]
    fn test_bump_with_token() {
        assert_eq!(bump_with("1.2.3", "MINOR").unwrap().bumped, "1.3.0");
        assert!(matches!(
            bump_with("1.2.3", "mega").unwrap_err(),
            TagverError::UnknownBumpKind { .. }
        ));
    }

    #[test]
    fn test_bumped_versions_parse_back() {
        for text in ["1.2.3", "1.2.3~alpha.1_x", "1.2.3.fix_hot.2", "1.2.3_exp"] {
            for kind in BumpKind::ALL {
                let result = bump(text, kind).unwrap();
                let reparsed = Version::parse(&result.bumped).unwrap();
                assert_eq!(reparsed.to_string(), result.bumped, "{} {}", text, kind);
            }
        }
    }
}
