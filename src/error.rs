use thiserror::Error;

/// Unified error type for tagver operations
#[derive(Error, Debug)]
pub enum TagverError {
    #[error("invalid version format: {input}")]
    Parse { input: String },

    #[error("unknown bump kind: {token}")]
    UnknownBumpKind { token: String },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("not a git repository: {0}")]
    NotRepository(String),

    #[error("no version tags matching '{pattern}' found - please create a version tag (e.g., v1.0.0)")]
    NoVersionTags { pattern: String },

    #[error("no git remote found - please add a remote to your repository")]
    NoRemote,

    #[error("version {version} is not the greatest among all tags (found {greater})")]
    NotGreatest { version: String, greater: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Usage error: {0}")]
    Usage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in tagver
pub type Result<T> = std::result::Result<T, TagverError>;

impl TagverError {
    /// Create a parse error naming the offending input
    pub fn parse(input: impl Into<String>) -> Self {
        TagverError::Parse {
            input: input.into(),
        }
    }

    /// Create an unknown bump kind error naming the token
    pub fn unknown_bump_kind(token: impl Into<String>) -> Self {
        TagverError::UnknownBumpKind {
            token: token.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        TagverError::Config(msg.into())
    }

    /// Create a usage error with context
    pub fn usage(msg: impl Into<String>) -> Self {
        TagverError::Usage(msg.into())
    }
}
