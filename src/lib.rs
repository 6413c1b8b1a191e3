pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod logging;
pub mod project;
pub mod ui;

pub use domain::{
    bump, compare, convert_git_tag, get_build_type, get_type, parse, parse_bump_kind, sort,
    validate, BumpKind, BumpResult, Version, VersionClass,
};
pub use error::{Result, TagverError};
