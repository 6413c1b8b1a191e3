// tests/git_test.rs
use git2::{Oid, Repository as RawRepository};
use std::fs;
use std::path::Path;
use tagver::domain::TagPattern;
use tagver::git::{check_greatest, current_version, Git2Repository, Repository};
use tagver::TagverError;
use tempfile::TempDir;

// Helper function to setup a temporary git repo for testing
fn setup_test_repo() -> (TempDir, RawRepository) {
    let temp_dir = TempDir::new().expect("Could not create temp dir");
    let repo = RawRepository::init(temp_dir.path()).expect("Could not init git repo");

    {
        let mut config = repo.config().expect("Could not get config");
        config
            .set_str("user.name", "Test User")
            .expect("Could not set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Could not set user.email");
    }

    (temp_dir, repo)
}

fn commit(repo: &RawRepository, dir: &Path, content: &str, message: &str) -> Oid {
    fs::write(dir.join("README.md"), content).expect("Could not write file");

    let mut index = repo.index().expect("Could not get index");
    index
        .add_path(Path::new("README.md"))
        .expect("Could not add file to index");
    index.write().expect("Could not write index");

    let tree_id = index.write_tree().expect("Could not write tree");
    let tree = repo.find_tree(tree_id).expect("Could not find tree");
    let sig = repo.signature().expect("Could not get sig");

    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();

    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .expect("Could not create commit")
}

fn tag(repo: &RawRepository, name: &str, oid: Oid) {
    let object = repo.find_object(oid, None).unwrap();
    repo.tag_lightweight(name, &object, false)
        .expect("Could not create tag");
}

#[test]
fn test_list_tags_filters_by_pattern() {
    let (dir, raw) = setup_test_repo();
    let first = commit(&raw, dir.path(), "one\n", "initial");
    tag(&raw, "v1.1.0", first);
    tag(&raw, "v1.0.0", first);
    tag(&raw, "nightly", first);
    tag(&raw, "release-2.0.0", first);

    let repo = Git2Repository::open(dir.path()).unwrap();
    assert_eq!(
        repo.list_tags(&TagPattern::default()).unwrap(),
        vec!["v1.0.0", "v1.1.0"]
    );

    let release = TagPattern::new("release-{version}").unwrap();
    assert_eq!(repo.list_tags(&release).unwrap(), vec!["release-2.0.0"]);
}

#[test]
fn test_current_version_from_nearest_tag() {
    let (dir, raw) = setup_test_repo();
    let first = commit(&raw, dir.path(), "one\n", "initial");
    tag(&raw, "v1.0.0", first);
    let second = commit(&raw, dir.path(), "two\n", "second");
    tag(&raw, "v1.1.0-rc.1", second);
    commit(&raw, dir.path(), "three\n", "third");

    let repo = Git2Repository::open(dir.path()).unwrap();
    assert_eq!(
        repo.describe_head(&TagPattern::default()).unwrap().as_deref(),
        Some("v1.1.0-rc.1")
    );
    assert_eq!(
        current_version(&repo, &TagPattern::default()).unwrap(),
        "1.1.0~rc.1"
    );
}

#[test]
fn test_describe_ignores_non_matching_tags() {
    let (dir, raw) = setup_test_repo();
    let first = commit(&raw, dir.path(), "one\n", "initial");
    tag(&raw, "v0.3.0", first);
    let second = commit(&raw, dir.path(), "two\n", "second");
    tag(&raw, "nightly", second);

    let repo = Git2Repository::open(dir.path()).unwrap();
    assert_eq!(
        current_version(&repo, &TagPattern::default()).unwrap(),
        "0.3.0"
    );
}

#[test]
fn test_describe_annotated_tag() {
    let (dir, raw) = setup_test_repo();
    let first = commit(&raw, dir.path(), "one\n", "initial");
    {
        let object = raw.find_object(first, None).unwrap();
        let sig = raw.signature().unwrap();
        raw.tag("v2.0.0", &object, &sig, "release 2.0.0", false)
            .expect("Could not create annotated tag");
    }

    let repo = Git2Repository::open(dir.path()).unwrap();
    assert_eq!(
        current_version(&repo, &TagPattern::default()).unwrap(),
        "2.0.0"
    );
}

#[test]
fn test_current_version_without_tags() {
    let (dir, raw) = setup_test_repo();
    commit(&raw, dir.path(), "one\n", "initial");

    let repo = Git2Repository::open(dir.path()).unwrap();
    assert!(matches!(
        current_version(&repo, &TagPattern::default()),
        Err(TagverError::NoVersionTags { .. })
    ));
}

#[test]
fn test_current_version_in_empty_repo() {
    let (dir, _raw) = setup_test_repo();

    let repo = Git2Repository::open(dir.path()).unwrap();
    assert_eq!(repo.describe_head(&TagPattern::default()).unwrap(), None);
    assert!(matches!(
        current_version(&repo, &TagPattern::default()),
        Err(TagverError::NoVersionTags { .. })
    ));
}

#[test]
fn test_check_greatest_against_real_tags() {
    let (dir, raw) = setup_test_repo();
    let first = commit(&raw, dir.path(), "one\n", "initial");
    tag(&raw, "v1.0.0", first);
    tag(&raw, "v1.2.0-rc.1", first);
    tag(&raw, "v1.x", first);

    let repo = Git2Repository::open(dir.path()).unwrap();
    let pattern = TagPattern::default();

    let report = check_greatest(&repo, "1.2.0", &pattern).unwrap();
    assert_eq!(report.compared, 2);
    assert_eq!(report.warnings.len(), 1);

    assert!(matches!(
        check_greatest(&repo, "1.1.0", &pattern),
        Err(TagverError::NotGreatest { ref greater, .. }) if greater == "v1.2.0-rc.1"
    ));
}

#[test]
fn test_fetch_remote_url() {
    let (dir, raw) = setup_test_repo();
    raw.remote("upstream", "https://example.com/up/tool.git").unwrap();
    raw.remote("origin", "git@example.com:team/tool.git").unwrap();

    let repo = Git2Repository::open(dir.path()).unwrap();
    assert_eq!(
        repo.fetch_remote_url().unwrap().as_deref(),
        Some("git@example.com:team/tool.git")
    );
}

#[test]
fn test_open_outside_repository() {
    let dir = TempDir::new().unwrap();
    let result = Git2Repository::open(dir.path());
    assert!(matches!(result, Err(TagverError::NotRepository(_))));
}
