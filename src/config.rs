use crate::domain::TagPattern;
use crate::error::{Result, TagverError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name searched for in the working directory and its ancestors
///
/// Only TOML is read. A YAML `.project.yml` left over from older tooling is ignored
/// and has to be converted to this file by hand.
pub const CONFIG_FILE_NAME: &str = ".project.toml";

/// Represents the complete project configuration.
///
/// Contains the project identity (name, modules, release) and the tag naming pattern.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct ProjectConfig {
    #[serde(default)]
    pub project: ProjectSection,

    #[serde(default)]
    pub tags: TagsConfig,
}

/// Returns the default release number.
fn default_release() -> String {
    "1".to_string()
}

/// Project identity settings.
///
/// The first module is the primary one.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProjectSection {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub modules: Vec<String>,

    #[serde(default = "default_release")]
    pub release: String,
}

impl Default for ProjectSection {
    fn default() -> Self {
        ProjectSection {
            name: String::new(),
            modules: Vec::new(),
            release: default_release(),
        }
    }
}

/// Returns the default tag pattern.
fn default_tag_pattern() -> String {
    "v{version}".to_string()
}

/// Tag naming settings.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagsConfig {
    #[serde(default = "default_tag_pattern")]
    pub pattern: String,
}

impl Default for TagsConfig {
    fn default() -> Self {
        TagsConfig {
            pattern: default_tag_pattern(),
        }
    }
}

impl ProjectConfig {
    /// Parse configuration text and validate it
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: ProjectConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the project section is usable.
    ///
    /// # Errors
    /// [TagverError::Config] when the name is empty, no modules are listed,
    /// a module name is blank, or the tag pattern is malformed.
    pub fn validate(&self) -> Result<()> {
        if self.project.name.trim().is_empty() {
            return Err(TagverError::config("project name is required"));
        }
        if self.project.modules.is_empty() {
            return Err(TagverError::config("at least one module is required"));
        }
        if let Some(index) = self.project.modules.iter().position(|m| m.trim().is_empty()) {
            return Err(TagverError::config(format!(
                "module {} has an empty name",
                index + 1
            )));
        }
        if self.project.release.trim().is_empty() {
            return Err(TagverError::config("release must not be empty"));
        }
        self.tag_pattern()?;
        Ok(())
    }

    /// The configured tag pattern
    pub fn tag_pattern(&self) -> Result<TagPattern> {
        TagPattern::new(self.tags.pattern.clone())
    }

    /// The primary (first) module
    pub fn primary_module(&self) -> Option<&str> {
        self.project.modules.first().map(String::as_str)
    }
}

/// Walks from `start` up to the filesystem root looking for [CONFIG_FILE_NAME]
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

/// Loads project configuration from file, if any.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `.project.toml` in the current directory or any parent
/// 3. `tagver/project.toml` in the user config directory
/// 4. `None` if no file found
///
/// `.project.yml` files are never consulted, so a project that only has one falls
/// back to the git remote.
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Some(config))` - Loaded and validated configuration
/// * `Ok(None)` - No configuration file exists
/// * `Err` - If a file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&str>) -> Result<Option<ProjectConfig>> {
    let path = if let Some(path) = config_path {
        Some(PathBuf::from(path))
    } else {
        let cwd = std::env::current_dir()?;
        find_config_file(&cwd).or_else(|| {
            dirs::config_dir()
                .map(|dir| dir.join("tagver").join("project.toml"))
                .filter(|candidate| candidate.is_file())
        })
    };

    let Some(path) = path else {
        debug!("no project configuration found");
        return Ok(None);
    };

    debug!(path = %path.display(), "loading project configuration");
    let text = fs::read_to_string(&path).map_err(|e| {
        TagverError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    ProjectConfig::from_toml(&text).map(Some)
}
