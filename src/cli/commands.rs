use crate::config::ProjectConfig;
use crate::domain::{self, BumpKind, TagPattern};
use crate::error::{Result, TagverError};
use crate::git::{self, Repository};
use crate::project::{full_name, ProjectInfo};
use crate::ui;
use tracing::{debug, info};

/// A single invocation of the tool
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Project,
    Module,
    Modules,
    Version,
    Release,
    Full,
    Check(Option<String>),
    CheckGreatest(Option<String>),
    Type(Option<String>),
    BuildType(Option<String>),
    Bump { args: Vec<String> },
    Sort { input: String },
}

impl Command {
    /// Subcommand name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Command::Project => "project",
            Command::Module => "module",
            Command::Modules => "modules",
            Command::Version => "version",
            Command::Release => "release",
            Command::Full => "full",
            Command::Check(_) => "check",
            Command::CheckGreatest(_) => "check-greatest",
            Command::Type(_) => "type",
            Command::BuildType(_) => "build-type",
            Command::Bump { .. } => "bump",
            Command::Sort { .. } => "sort",
        }
    }
}

/// Collaborators a command may need.
///
/// `repo` is `None` outside a git repository; commands that need it fail with
/// [TagverError::NotRepository] only when they actually touch it.
pub struct Context {
    pub config: Option<ProjectConfig>,
    pub repo: Option<Box<dyn Repository>>,
    pub force_git: bool,
    pub pattern: TagPattern,
    /// Show non-fatal tag scan warnings on stderr
    pub verbose: bool,
}

impl Context {
    /// Builds a context; the tag pattern comes from the config when one is in effect.
    pub fn new(
        config: Option<ProjectConfig>,
        repo: Option<Box<dyn Repository>>,
        force_git: bool,
    ) -> Result<Self> {
        let pattern = match (&config, force_git) {
            (Some(config), false) => config.tag_pattern()?,
            _ => TagPattern::default(),
        };
        Ok(Context {
            config,
            repo,
            force_git,
            pattern,
            verbose: false,
        })
    }

    /// Enables display of non-fatal warnings
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn repo(&self) -> Result<&dyn Repository> {
        self.repo
            .as_deref()
            .ok_or_else(|| TagverError::NotRepository(".".to_string()))
    }

    fn project(&self) -> Result<ProjectInfo> {
        ProjectInfo::resolve(self.config.as_ref(), self.repo.as_deref(), self.force_git)
    }

    fn current_version(&self) -> Result<String> {
        git::current_version(self.repo()?, &self.pattern)
    }

    fn version_or_current(&self, version: Option<&str>) -> Result<String> {
        match version {
            Some(version) => Ok(version.to_string()),
            None => self.current_version(),
        }
    }
}

/// Splits `bump` arguments into an optional explicit version and a bump kind.
///
/// - no arguments: current version, `smart`
/// - one argument: a valid version is bumped with `smart`; otherwise it must be a bump kind
/// - two arguments: version, then kind
///
/// # Errors
/// [TagverError::Usage] for more than two arguments or an argument that is neither a
/// version nor a bump kind; [TagverError::Parse] / [TagverError::UnknownBumpKind] for
/// a bad pair.
pub fn resolve_bump_args(args: &[String]) -> Result<(Option<String>, BumpKind)> {
    match args {
        [] => Ok((None, BumpKind::Smart)),
        [arg] => {
            if domain::validate(arg) {
                Ok((Some(arg.clone()), BumpKind::Smart))
            } else if let Ok(kind) = domain::parse_bump_kind(arg) {
                Ok((None, kind))
            } else {
                Err(TagverError::usage(format!(
                    "invalid argument '{}': must be a valid version or bump type",
                    arg
                )))
            }
        }
        [version, kind] => {
            domain::parse(version)?;
            let kind = domain::parse_bump_kind(kind)?;
            Ok((Some(version.clone()), kind))
        }
        _ => Err(TagverError::usage(
            "too many arguments - usage: bump [version] [type]",
        )),
    }
}

/// Runs a command and returns the text to print on stdout, if any.
pub fn execute(command: &Command, ctx: &Context) -> Result<Option<String>> {
    info!(command = command.name(), "executing command");

    match command {
        Command::Project => Ok(Some(ctx.project()?.name)),
        Command::Module => Ok(Some(ctx.project()?.primary_module().to_string())),
        Command::Modules => Ok(Some(ctx.project()?.modules.join("\n"))),
        Command::Version => ctx.current_version().map(Some),
        Command::Release => Ok(Some(ctx.project()?.release)),
        Command::Full => {
            let version = ctx.current_version()?;
            let info = ctx.project()?;
            Ok(Some(full_name(&info, &version)))
        }
        Command::Check(version) => {
            let version = ctx.version_or_current(version.as_deref())?;
            domain::parse(&version)?;
            Ok(None)
        }
        Command::CheckGreatest(version) => {
            let version = ctx.version_or_current(version.as_deref())?;
            let report = git::check_greatest(ctx.repo()?, &version, &ctx.pattern)?;
            for warning in &report.warnings {
                debug!(%warning, "tag scan");
                if ctx.verbose {
                    ui::display_boundary_warning(warning);
                }
            }
            Ok(Some(report.message()))
        }
        Command::Type(version) => {
            let version = ctx.version_or_current(version.as_deref())?;
            Ok(Some(domain::get_type(&version)?.name().to_string()))
        }
        Command::BuildType(version) => {
            let version = ctx.version_or_current(version.as_deref())?;
            Ok(Some(domain::get_build_type(&version)?.to_string()))
        }
        Command::Bump { args } => {
            let (version, kind) = resolve_bump_args(args)?;
            let version = ctx.version_or_current(version.as_deref())?;
            let result = domain::bump(&version, kind)?;
            debug!(
                "bump operation: {} -> {} ({})",
                result.original, result.bumped, result.rule
            );
            Ok(Some(result.bumped))
        }
        Command::Sort { input } => {
            let versions: Vec<&str> = input.split_whitespace().collect();
            if versions.is_empty() {
                return Ok(None);
            }
            Ok(Some(domain::sort(&versions)?.join("\n")))
        }
    }
}
