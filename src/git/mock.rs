use crate::domain::TagPattern;
use crate::error::Result;
use crate::git::Repository;

/// Mock repository for testing without actual git operations
pub struct MockRepository {
    tags: Vec<String>,
    head_tag: Option<String>,
    remotes: Vec<(String, String)>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            tags: Vec::new(),
            head_tag: None,
            remotes: Vec::new(),
        }
    }

    /// Add a tag
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    /// Set the tag `describe_head` reports as nearest to HEAD
    pub fn set_head_tag(&mut self, name: impl Into<String>) {
        self.head_tag = Some(name.into());
    }

    /// Add a remote with its fetch URL
    pub fn add_remote(&mut self, name: impl Into<String>, url: impl Into<String>) {
        self.remotes.push((name.into(), url.into()));
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self, pattern: &TagPattern) -> Result<Vec<String>> {
        let mut tags: Vec<String> = self
            .tags
            .iter()
            .filter(|tag| pattern.matches(tag))
            .cloned()
            .collect();
        tags.sort();
        Ok(tags)
    }

    fn describe_head(&self, pattern: &TagPattern) -> Result<Option<String>> {
        Ok(self.head_tag.clone().filter(|tag| pattern.matches(tag)))
    }

    fn remotes(&self) -> Result<Vec<(String, String)>> {
        Ok(self.remotes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_list_tags() {
        let mut repo = MockRepository::new();
        repo.add_tag("v1.1.0");
        repo.add_tag("v1.0.0");
        repo.add_tag("nightly");

        let tags = repo.list_tags(&TagPattern::default()).unwrap();
        assert_eq!(tags, vec!["v1.0.0", "v1.1.0"]);
    }

    #[test]
    fn test_mock_repository_describe_head() {
        let mut repo = MockRepository::new();
        assert_eq!(repo.describe_head(&TagPattern::default()).unwrap(), None);

        repo.set_head_tag("v2.0.0");
        assert_eq!(
            repo.describe_head(&TagPattern::default()).unwrap().as_deref(),
            Some("v2.0.0")
        );

        let other = TagPattern::new("release-{version}").unwrap();
        assert_eq!(repo.describe_head(&other).unwrap(), None);
    }

    #[test]
    fn test_mock_repository_remotes() {
        let mut repo = MockRepository::new();
        repo.add_remote("origin", "https://example.com/a/b.git");
        assert_eq!(
            repo.remotes().unwrap(),
            vec![(
                "origin".to_string(),
                "https://example.com/a/b.git".to_string()
            )]
        );
    }
}
