use std::io::{self, Read};

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use tagver::cli::{execute, Command, Context};
use tagver::git::{Git2Repository, Repository};
use tagver::{config, logging, ui, TagverError};

#[derive(clap::Parser)]
#[command(
    name = "tagver",
    version,
    about = "Parse, validate, order and bump project versions taken from git tags"
)]
struct Args {
    #[arg(short, long, global = true, help = "Enable debug output")]
    debug: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    verbose: bool,

    #[arg(long, global = true, help = "Disable colored output")]
    no_color: bool,

    #[arg(short, long, global = true, value_name = "FILE", help = "Project configuration file path")]
    config: Option<String>,

    #[arg(long, global = true, help = "Derive project information from git, ignoring any configuration")]
    git: bool,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Print the project name
    Project,
    /// Print the primary module name
    Module,
    /// Print all module names, one per line
    Modules,
    /// Print the current version from the nearest version tag
    Version,
    /// Print the release number
    Release,
    /// Print <project>-<version>-<release>
    Full,
    /// Validate a version (defaults to the current version)
    Check { version: Option<String> },
    /// Check that a version is not exceeded by any version tag
    CheckGreatest { version: Option<String> },
    /// Print the version class
    Type { version: Option<String> },
    /// Print the CMake build type for a version
    BuildType { version: Option<String> },
    /// Bump a version: bump [version] [type]
    Bump { args: Vec<String> },
    /// Sort whitespace-separated versions read from stdin
    Sort,
}

impl Cmd {
    fn into_command(self) -> Result<Command> {
        let command = match self {
            Cmd::Project => Command::Project,
            Cmd::Module => Command::Module,
            Cmd::Modules => Command::Modules,
            Cmd::Version => Command::Version,
            Cmd::Release => Command::Release,
            Cmd::Full => Command::Full,
            Cmd::Check { version } => Command::Check(version),
            Cmd::CheckGreatest { version } => Command::CheckGreatest(version),
            Cmd::Type { version } => Command::Type(version),
            Cmd::BuildType { version } => Command::BuildType(version),
            Cmd::Bump { args } => Command::Bump { args },
            Cmd::Sort => {
                let mut input = String::new();
                io::stdin()
                    .read_to_string(&mut input)
                    .context("failed to read versions from stdin")?;
                Command::Sort { input }
            }
        };
        Ok(command)
    }
}

fn main() {
    let args = Args::parse();

    ui::configure_colors(!args.no_color);
    logging::init(args.debug, args.verbose, console::colors_enabled_stderr());

    match run(args) {
        Ok(Some(output)) => println!("{}", output),
        Ok(None) => {}
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }
}

fn run(args: Args) -> Result<Option<String>> {
    if args.git && args.config.is_some() {
        return Err(TagverError::usage("cannot use both --config and --git flags simultaneously").into());
    }

    let config = if args.git {
        None
    } else {
        config::load_config(args.config.as_deref())?
    };

    let repo: Option<Box<dyn Repository>> = match Git2Repository::open(".") {
        Ok(repo) => Some(Box::new(repo)),
        Err(e) => {
            debug!(error = %e, "no git repository available");
            None
        }
    };

    let ctx = Context::new(config, repo, args.git)?.with_verbose(args.verbose || args.debug);
    let command = args.command.into_command()?;
    let output = execute(&command, &ctx)?;
    Ok(output)
}
