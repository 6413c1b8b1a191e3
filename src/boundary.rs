use std::fmt;

/// Non-fatal issues found while scanning repository tags.
/// These are reported to the user but never abort a command.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Tag matches the tag pattern but its version part is not a valid version
    UnparsableTag { tag: String, reason: String },
    /// No version tags other than the checked version exist
    NoOtherTags { version: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnparsableTag { tag, reason } => {
                write!(f, "Skipping tag '{}': {}", tag, reason)
            }
            BoundaryWarning::NoOtherTags { version } => {
                write!(f, "No version tags other than '{}' found", version)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unparsable_tag_display() {
        let warning = BoundaryWarning::UnparsableTag {
            tag: "v1.2".to_string(),
            reason: "invalid version format: 1.2".to_string(),
        };
        let msg = warning.to_string();
        assert!(msg.contains("v1.2"));
        assert!(msg.contains("invalid version format"));
    }

    #[test]
    fn test_no_other_tags_display() {
        let warning = BoundaryWarning::NoOtherTags {
            version: "1.0.0".to_string(),
        };
        assert_eq!(warning.to_string(), "No version tags other than '1.0.0' found");
    }
}
