//! Project identity: name, modules and release, from config or the git remote.

use crate::config::ProjectConfig;
use crate::error::{Result, TagverError};
use crate::git::Repository;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static DASH_ARTIFACT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^--[^-]+-").unwrap());

/// Repository path of a remote URL, without `.git`, scheme or host.
///
/// Handles `scheme://host/owner/repo`, scp-like `user@host:owner/repo`
/// and bare `host/owner/repo` forms.
fn remote_path(url: &str) -> &str {
    let url = url.trim();
    let url = url.strip_suffix(".git").unwrap_or(url);

    if let Some((_, rest)) = url.split_once("//") {
        return rest.split_once('/').map_or(rest, |(_, path)| path);
    }
    if let Some((_, path)) = url.split_once(':') {
        return path;
    }
    url.split_once('/').map_or(url, |(_, path)| path)
}

/// Project name derived from a remote URL: the repository path with `/` replaced by `-`.
///
/// `git@github.com:owner/repo.git` -> `owner-repo`
pub fn project_name_from_remote(url: &str) -> String {
    let name = remote_path(url).trim_matches('/').replace('/', "-");
    DASH_ARTIFACT.replace(&name, "").into_owned()
}

/// Module name derived from a remote URL: the last path component.
///
/// `https://github.com/owner/repo.git` -> `repo`
pub fn module_name_from_remote(url: &str) -> String {
    remote_path(url)
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Resolved project identity
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectInfo {
    pub name: String,
    pub modules: Vec<String>,
    pub release: String,
}

impl ProjectInfo {
    /// Identity taken verbatim from a loaded configuration
    pub fn from_config(config: &ProjectConfig) -> Self {
        debug!(name = %config.project.name, "project identity from configuration");
        ProjectInfo {
            name: config.project.name.clone(),
            modules: config.project.modules.clone(),
            release: config.project.release.clone(),
        }
    }

    /// Identity derived from the repository's fetch URL, with a single module
    ///
    /// # Errors
    /// [TagverError::NoRemote] when the repository has no remotes.
    pub fn from_remote<R: Repository + ?Sized>(repo: &R) -> Result<Self> {
        let url = repo.fetch_remote_url()?.ok_or(TagverError::NoRemote)?;
        debug!(url = %url, "project identity from git remote");
        Ok(ProjectInfo {
            name: project_name_from_remote(&url),
            modules: vec![module_name_from_remote(&url)],
            release: "1".to_string(),
        })
    }

    /// Uses the loaded configuration unless `force_git` is set; otherwise
    /// derives the identity from the git remote.
    ///
    /// # Errors
    /// [TagverError::NotRepository] when the remote is needed and there is no
    /// repository, [TagverError::NoRemote] when the repository has no remotes.
    pub fn resolve<R: Repository + ?Sized>(
        config: Option<&ProjectConfig>,
        repo: Option<&R>,
        force_git: bool,
    ) -> Result<Self> {
        match (config, repo) {
            (Some(config), _) if !force_git => Ok(ProjectInfo::from_config(config)),
            (_, Some(repo)) => ProjectInfo::from_remote(repo),
            (_, None) => Err(TagverError::NotRepository(".".to_string())),
        }
    }

    /// The primary (first) module
    pub fn primary_module(&self) -> &str {
        self.modules.first().map(String::as_str).unwrap_or_default()
    }
}

/// `<project>-<version>-<release>`
pub fn full_name(info: &ProjectInfo, version: &str) -> String {
    format!("{}-{}-{}", info.name, version, info.release)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockRepository;

    #[test]
    fn test_project_name_from_scp_url() {
        assert_eq!(
            project_name_from_remote("git@github.com:owner/repo.git"),
            "owner-repo"
        );
    }

    #[test]
    fn test_project_name_from_https_url() {
        assert_eq!(
            project_name_from_remote("https://github.com/owner/repo.git"),
            "owner-repo"
        );
        assert_eq!(
            project_name_from_remote("https://gitlab.example.com/group/sub/repo"),
            "group-sub-repo"
        );
    }

    #[test]
    fn test_project_name_from_ssh_scheme_url() {
        assert_eq!(
            project_name_from_remote("ssh://git@example.com:2222/team/tool.git"),
            "team-tool"
        );
    }

    #[test]
    fn test_project_name_strips_dash_artifact() {
        assert_eq!(project_name_from_remote("host:/--x-owner/repo"), "owner-repo");
    }

    #[test]
    fn test_module_name_from_remote() {
        assert_eq!(module_name_from_remote("git@github.com:owner/repo.git"), "repo");
        assert_eq!(
            module_name_from_remote("https://github.com/owner/repo"),
            "repo"
        );
        assert_eq!(module_name_from_remote("/srv/git/tool.git"), "tool");
    }

    #[test]
    fn test_resolve_prefers_config() {
        let config = ProjectConfig::from_toml(
            "[project]\nname = \"cfg\"\nmodules = [\"a\", \"b\"]\nrelease = \"3\"\n",
        )
        .unwrap();
        let mut repo = MockRepository::new();
        repo.add_remote("origin", "git@example.com:owner/repo.git");

        let info = ProjectInfo::resolve(Some(&config), Some(&repo), false).unwrap();
        assert_eq!(info.name, "cfg");
        assert_eq!(info.primary_module(), "a");
        assert_eq!(info.release, "3");
        assert_eq!(full_name(&info, "1.2.3"), "cfg-1.2.3-3");
    }

    #[test]
    fn test_resolve_force_git_ignores_config() {
        let config =
            ProjectConfig::from_toml("[project]\nname = \"cfg\"\nmodules = [\"a\"]\n").unwrap();
        let mut repo = MockRepository::new();
        repo.add_remote("origin", "git@example.com:owner/repo.git");

        let info = ProjectInfo::resolve(Some(&config), Some(&repo), true).unwrap();
        assert_eq!(info.name, "owner-repo");
        assert_eq!(info.modules, vec!["repo"]);
        assert_eq!(info.release, "1");
    }

    #[test]
    fn test_resolve_without_remote() {
        let repo = MockRepository::new();
        assert!(matches!(
            ProjectInfo::resolve(None, Some(&repo), false),
            Err(TagverError::NoRemote)
        ));
    }

    #[test]
    fn test_resolve_without_repository() {
        let config =
            ProjectConfig::from_toml("[project]\nname = \"cfg\"\nmodules = [\"a\"]\n").unwrap();
        let info = ProjectInfo::resolve(Some(&config), None::<&MockRepository>, false).unwrap();
        assert_eq!(info.name, "cfg");

        for config in [Some(&config), None] {
            assert!(matches!(
                ProjectInfo::resolve(config, None::<&MockRepository>, true),
                Err(TagverError::NotRepository(_))
            ));
        }
    }
}
