//! Command layer
//!
//! Maps each subcommand onto the domain and git operations. The binary only
//! parses arguments, builds a [Context] and prints what [execute] returns, so
//! every command can be driven from tests with a mock repository.

pub mod commands;

pub use commands::{execute, resolve_bump_args, Command, Context};
