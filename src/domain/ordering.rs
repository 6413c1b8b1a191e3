//! Total order over versions and stable sorting of raw version strings.

use crate::domain::normalize::normalize;
use crate::domain::qualifier::compare_qualifiers;
use crate::domain::version::Version;
use crate::error::Result;
use std::cmp::Ordering;

impl Version {
    /// Precedence comparison.
    ///
    /// Numeric core first, then class rank (Prerelease < Release < Postrelease <
    /// Intermediate), then the qualifiers segment by segment.
    pub fn cmp_precedence(&self, other: &Version) -> Ordering {
        self.major()
            .cmp(&other.major())
            .then_with(|| self.minor().cmp(&other.minor()))
            .then_with(|| self.patch().cmp(&other.patch()))
            .then_with(|| self.class().rank().cmp(&other.class().rank()))
            .then_with(|| match (self.qualifier(), other.qualifier()) {
                (Some(a), Some(b)) => compare_qualifiers(a, b),
                _ => Ordering::Equal,
            })
    }
}

/// Compares two versions. See [`Version::cmp_precedence`].
pub fn compare(a: &Version, b: &Version) -> Ordering {
    a.cmp_precedence(b)
}

/// Sorts raw version strings in ascending precedence.
///
/// The output holds each input in normalized form (trimmed, dash-delimited prereleases
/// rewritten to `~`, `v` prefix kept). Versions that compare equal keep their input order.
///
/// # Errors
/// Fails with the first unparsable entry; nothing is skipped.
///
/// # Example
/// ```
/// let sorted = tagver::sort(&["1.2.3", "1.2.3-alpha", "1.2.4"]).unwrap();
/// assert_eq!(sorted, vec!["1.2.3~alpha", "1.2.3", "1.2.4"]);
/// ```
pub fn sort<S: AsRef<str>>(versions: &[S]) -> Result<Vec<String>> {
    let mut parsed = versions
        .iter()
        .map(|raw| {
            let raw = raw.as_ref();
            Version::parse(raw).map(|version| (normalize(raw), version))
        })
        .collect::<Result<Vec<_>>>()?;

    parsed.sort_by(|(_, a), (_, b)| a.cmp_precedence(b));

    Ok(parsed.into_iter().map(|(text, _)| text).collect())
}
