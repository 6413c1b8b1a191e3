use crate::domain::normalize::convert_git_tag;
use crate::error::{Result, TagverError};
use regex::Regex;

const PLACEHOLDER: &str = "{version}";

/// Represents a git tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Version text carried by this tag, with dash prereleases converted
    /// (e.g. "v1.2.3-rc.1" -> "1.2.3~rc.1" for pattern "v{version}")
    pub fn version_text(&self, pattern: &TagPattern) -> Option<String> {
        pattern.extract(&self.name).map(|v| convert_git_tag(&v))
    }
}

/// Tag naming pattern (e.g., "v{version}", "release-{version}")
#[derive(Debug, Clone)]
pub struct TagPattern {
    pattern: String,
    matcher: Regex,
}

impl TagPattern {
    /// Create a tag pattern; it must contain the `{version}` placeholder exactly once
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.matches(PLACEHOLDER).count() != 1 {
            return Err(TagverError::config(format!(
                "tag pattern '{}' must contain a single {} placeholder",
                pattern, PLACEHOLDER
            )));
        }

        let escaped = regex::escape(&pattern);
        let regex_pattern = escaped.replace(r"\{version\}", r"([0-9].*)");
        let matcher = Regex::new(&format!("^{}$", regex_pattern))
            .map_err(|e| TagverError::config(format!("invalid tag pattern '{}': {}", pattern, e)))?;

        Ok(TagPattern { pattern, matcher })
    }

    /// The raw pattern text
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Format a version according to pattern
    /// Example: pattern="v{version}", version="1.2.3" -> "v1.2.3"
    pub fn format(&self, version: &str) -> String {
        self.pattern.replace(PLACEHOLDER, version)
    }

    /// Extract the version part of a tag that matches this pattern
    pub fn extract(&self, tag: &str) -> Option<String> {
        self.matcher
            .captures(tag)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Validate if a tag matches this pattern
    pub fn matches(&self, tag: &str) -> bool {
        self.matcher.is_match(tag)
    }

    /// fnmatch-style glob used to list candidate tags ("v{version}" -> "v[0-9]*")
    pub fn glob(&self) -> String {
        self.pattern.replace(PLACEHOLDER, "[0-9]*")
    }
}

impl Default for TagPattern {
    fn default() -> Self {
        TagPattern {
            pattern: "v{version}".to_string(),
            matcher: Regex::new(r"^v([0-9].*)$").unwrap(),
        }
    }
}
