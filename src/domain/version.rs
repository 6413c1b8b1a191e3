use crate::domain::class::VersionClass;
use crate::domain::normalize::normalize;
use crate::error::{Result, TagverError};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::fmt;
use std::str::FromStr;

const CORE: &str = r"^v?([0-9]+)\.([0-9]+)\.([0-9]+)";
const SEGMENTS: &str = r"(?:\.[0-9]+|_[a-zA-Z]+)*";

static RELEASE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(&format!("{CORE}$")).unwrap());
static PRERELEASE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"{CORE}(~(?:alpha|beta|rc|pre){SEGMENTS})$")).unwrap()
});
static POSTRELEASE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"{CORE}(\.(?:fix|next|post){SEGMENTS})$")).unwrap()
});
static INTERMEDIATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"{CORE}(_[a-zA-Z]+{SEGMENTS})$")).unwrap());

/// A parsed version: numeric core, class and class-specific qualifier.
///
/// The qualifier is present iff the class is not [`VersionClass::Release`] and always starts
/// with the class delimiter (`~`, `.` or `_`). Values are never mutated; bumping produces a
/// new one.
///
/// Equality compares the structured parts only. `original` is informational.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    class: VersionClass,
    qualifier: Option<String>,
    original: String,
}

impl Version {
    /// Create a release version `major.minor.patch`
    pub fn release(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            class: VersionClass::Release,
            qualifier: None,
            original: format!("{}.{}.{}", major, minor, patch),
        }
    }

    /// Create a version of any class from its parts.
    ///
    /// `qualifier` must start with the class delimiter (`~`, `.` or `_`) and must be
    /// `None` exactly when `class` is `Release`. The result is validated against the
    /// grammar and must keep the qualifier verbatim, so the dash spelling and
    /// surrounding whitespace that [`Version::parse`] accepts are rejected here.
    ///
    /// # Example
    /// ```
    /// use tagver::{Version, VersionClass};
    ///
    /// let v = Version::new(1, 2, 3, VersionClass::Prerelease, Some("~rc.1")).unwrap();
    /// assert_eq!(v.to_string(), "1.2.3~rc.1");
    /// ```
    pub fn new(
        major: u64,
        minor: u64,
        patch: u64,
        class: VersionClass,
        qualifier: Option<&str>,
    ) -> Result<Self> {
        let rendered = render(major, minor, patch, qualifier);
        if qualifier.and_then(|q| q.chars().next()) != class.delimiter() {
            return Err(TagverError::parse(rendered));
        }
        let parsed = Version::parse(&rendered)?;
        if parsed.class != class || parsed.qualifier() != qualifier {
            return Err(TagverError::parse(rendered));
        }
        Ok(parsed)
    }

    /// Parse a version string.
    ///
    /// Surrounding whitespace is ignored, a leading `v` is accepted and a dash right after
    /// the numeric core is read as the prerelease delimiter `~`. The returned value keeps
    /// `text` verbatim as its [`original`](Version::original).
    ///
    /// # Errors
    /// [`TagverError::Parse`] when the text matches none of the four class grammars.
    pub fn parse(text: &str) -> Result<Self> {
        let normalized = normalize(text);

        if let Some(caps) = RELEASE_RE.captures(&normalized) {
            return Self::from_captures(text, &caps, VersionClass::Release);
        }
        if let Some(caps) = PRERELEASE_RE.captures(&normalized) {
            return Self::from_captures(text, &caps, VersionClass::Prerelease);
        }
        if let Some(caps) = POSTRELEASE_RE.captures(&normalized) {
            return Self::from_captures(text, &caps, VersionClass::Postrelease);
        }
        if let Some(caps) = INTERMEDIATE_RE.captures(&normalized) {
            return Self::from_captures(text, &caps, VersionClass::Intermediate);
        }

        Err(TagverError::parse(text))
    }

    fn from_captures(text: &str, caps: &Captures<'_>, class: VersionClass) -> Result<Self> {
        let number = |idx: usize| -> Result<u64> {
            caps[idx]
                .parse::<u64>()
                .map_err(|_| TagverError::parse(text))
        };

        Ok(Version {
            major: number(1)?,
            minor: number(2)?,
            patch: number(3)?,
            class,
            qualifier: caps.get(4).map(|m| m.as_str().to_string()),
            original: text.to_string(),
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn class(&self) -> VersionClass {
        self.class
    }

    /// Qualifier including its leading delimiter, e.g. `~alpha.1`
    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }

    /// The text this value was parsed from, or its canonical rendering if built directly
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Build type for downstream build systems: `Release` or `Debug`
    pub fn build_type(&self) -> &'static str {
        self.class.build_type()
    }

    /// Canonical rendering, e.g. `1.2.3`, `1.2.3~rc.1`, `1.2.3.fix.2`, `1.2.3_feat.1`
    pub fn canonical(&self) -> String {
        render(self.major, self.minor, self.patch, self.qualifier.as_deref())
    }

    /// Internal constructor for values whose qualifier is already known to be well formed
    pub(crate) fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        class: VersionClass,
        qualifier: Option<String>,
    ) -> Self {
        let original = render(major, minor, patch, qualifier.as_deref());
        Version {
            major,
            minor,
            patch,
            class,
            qualifier,
            original,
        }
    }
}

fn render(major: u64, minor: u64, patch: u64, qualifier: Option<&str>) -> String {
    format!("{}.{}.{}{}", major, minor, patch, qualifier.unwrap_or(""))
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.class == other.class
            && self.qualifier == other.qualifier
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(qualifier) = &self.qualifier {
            f.write_str(qualifier)?;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = TagverError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

/// Parse a version string. See [`Version::parse`].
pub fn parse(text: &str) -> Result<Version> {
    Version::parse(text)
}

/// Returns true when `text` is a valid version under any of the four classes
pub fn validate(text: &str) -> bool {
    Version::parse(text).is_ok()
}

/// Returns the class of a version string
pub fn get_type(text: &str) -> Result<VersionClass> {
    Ok(Version::parse(text)?.class())
}

/// Returns `"Release"` for release versions and `"Debug"` for every other class
pub fn get_build_type(text: &str) -> Result<&'static str> {
    Ok(Version::parse(text)?.build_type())
}
