//! Input normalization shared by the parser and the tag adapters.

use once_cell::sync::Lazy;
use regex::Regex;

/// `v?M.m.p-<rest>` as produced by version-control tags that use `-` for prereleases
static DASH_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(v?[0-9]+\.[0-9]+\.[0-9]+)-(.+)$").unwrap());

/// Converts a `x.y.z-rest` tag into `x.y.z~rest`.
///
/// Only applies when the text contains a `-` and no `~`, and only rewrites the dash that
/// immediately follows the numeric core. Applying it twice gives the same result as once.
pub fn convert_git_tag(tag: &str) -> String {
    if tag.contains('-') && !tag.contains('~') {
        if let Some(caps) = DASH_TAG.captures(tag) {
            return format!("{}~{}", &caps[1], &caps[2]);
        }
    }
    tag.to_string()
}

/// Trims surrounding whitespace and applies [`convert_git_tag`].
///
/// The result is what the grammar is matched against; a leading `v` is kept.
pub fn normalize(text: &str) -> String {
    convert_git_tag(text.trim())
}
