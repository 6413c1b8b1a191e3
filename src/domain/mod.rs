//! Domain logic - pure version rules independent of git operations

pub mod bump;
pub mod class;
pub mod normalize;
pub mod ordering;
pub mod qualifier;
pub mod tag;
pub mod version;

pub use bump::{bump, bump_with, parse_bump_kind, BumpKind, BumpResult, Transition};
pub use class::VersionClass;
pub use normalize::{convert_git_tag, normalize};
pub use ordering::{compare, sort};
pub use tag::{Tag, TagPattern};
pub use version::{get_build_type, get_type, parse, validate, Version};
