use crate::domain::TagPattern;
use crate::error::{Result, TagverError};
use git2::{DescribeFormatOptions, DescribeOptions, ErrorCode, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| match e.code() {
            ErrorCode::NotFound => TagverError::NotRepository(path.display().to_string()),
            _ => TagverError::Git(e),
        })?;

        Ok(Git2Repository { repo })
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self, pattern: &TagPattern) -> Result<Vec<String>> {
        let glob = pattern.glob();
        let tags = self.repo.tag_names(Some(glob.as_str()))?;

        let mut names: Vec<String> = tags
            .iter()
            .flatten()
            .filter(|name| pattern.matches(name))
            .map(|s| s.to_string())
            .collect();
        names.sort();
        Ok(names)
    }

    fn describe_head(&self, pattern: &TagPattern) -> Result<Option<String>> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                return Ok(None)
            }
            Err(e) => return Err(e.into()),
        };
        let commit = head.peel_to_commit()?;

        let glob = pattern.glob();
        let mut opts = DescribeOptions::new();
        opts.describe_tags().pattern(&glob);

        let describe = match commit.as_object().describe(&opts) {
            Ok(describe) => describe,
            Err(e) if e.code() == ErrorCode::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(0);
        let tag = describe.format(Some(&format))?;

        Ok(Some(tag).filter(|tag| pattern.matches(tag)))
    }

    fn remotes(&self) -> Result<Vec<(String, String)>> {
        let names = self.repo.remotes()?;
        let mut remotes = Vec::new();

        for name in names.iter().flatten() {
            let remote = self.repo.find_remote(name)?;
            if let Some(url) = remote.url() {
                remotes.push((name.to_string(), url.to_string()));
            }
        }

        Ok(remotes)
    }
}
