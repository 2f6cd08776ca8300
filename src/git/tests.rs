// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{DEFAULT_BRANCH, clone, commit_id, is_git_available, is_path_repository};
use crate::error::{GitError, MupError};
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn git(args: &[&str], cwd: &Path) {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .env("GIT_AUTHOR_NAME", "Test")
        .env("GIT_AUTHOR_EMAIL", "test@example.com")
        .env("GIT_COMMITTER_NAME", "Test")
        .env("GIT_COMMITTER_EMAIL", "test@example.com")
        .output()
        .expect("failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Initializes a repository on `master` with one tracked file.
fn init_test_repo_with_commit(path: &Path) {
    git(&["init", "--quiet"], path);
    git(&["symbolic-ref", "HEAD", "refs/heads/master"], path);
    std::fs::write(path.join("README.md"), "# test\n").unwrap();
    git(&["add", "README.md"], path);
    git(&["commit", "--quiet", "-m", "Initial commit"], path);
}

#[test]
fn test_git_is_available() {
    assert!(is_git_available());
}

#[test]
fn test_is_path_repository() {
    let temp = temp_dir();
    let repo = temp.path().join("repo");
    let plain = temp.path().join("plain");
    std::fs::create_dir(&repo).unwrap();
    std::fs::create_dir(&plain).unwrap();
    init_test_repo_with_commit(&repo);

    assert!(is_path_repository(&repo).unwrap());
    assert!(!is_path_repository(&plain).unwrap());
}

#[test]
fn test_is_path_repository_missing_path() {
    let temp = temp_dir();
    let err = is_path_repository(temp.path().join("missing")).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_commit_id_short_is_prefix() {
    let temp = temp_dir();
    init_test_repo_with_commit(temp.path());

    let full = commit_id(temp.path(), false).unwrap();
    let short = commit_id(temp.path(), true).unwrap();

    assert_eq!(full.len(), 40);
    assert!(full.chars().all(|c| c.is_ascii_hexdigit()));
    assert!(short.len() < full.len());
    assert!(full.starts_with(&short));
}

#[test]
fn test_commit_id_without_commits_fails() {
    let temp = temp_dir();
    git(&["init", "--quiet"], temp.path());

    let err = commit_id(temp.path(), false).unwrap_err();
    match err {
        MupError::Git(e) => match *e {
            GitError::CommandFailed { command, message } => {
                assert_eq!(command, "git rev-parse HEAD");
                assert!(!message.is_empty());
            }
            other => panic!("unexpected git error: {other:?}"),
        },
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_clone_local_repository() {
    let temp = temp_dir();
    let source = temp.path().join("source.git");
    let destination = temp.path().join("clones");
    std::fs::create_dir(&source).unwrap();
    init_test_repo_with_commit(&source);

    let cloned = clone(&source.to_string_lossy(), &destination, DEFAULT_BRANCH).unwrap();

    assert_eq!(cloned, destination.join("source"));
    assert!(cloned.join("README.md").is_file());
    assert!(is_path_repository(&cloned).unwrap());
    assert_eq!(
        commit_id(&cloned, false).unwrap(),
        commit_id(&source, false).unwrap()
    );
}

#[test]
fn test_clone_invalid_source_fails() {
    let temp = temp_dir();
    let missing = temp.path().join("does-not-exist");
    let destination = temp.path().join("out");

    let err = clone(&missing.to_string_lossy(), &destination, DEFAULT_BRANCH).unwrap_err();
    assert!(matches!(err, MupError::Git(ref e) if matches!(**e, GitError::CloneFailed { .. })));
    assert!(!destination.join("does-not-exist").exists());
}

#[test]
fn test_clone_unknown_branch_fails() {
    let temp = temp_dir();
    let source = temp.path().join("source");
    std::fs::create_dir(&source).unwrap();
    init_test_repo_with_commit(&source);

    let err = clone(&source.to_string_lossy(), temp.path().join("out"), "no-such-branch")
        .unwrap_err();
    match err {
        MupError::Git(e) => match *e {
            GitError::CloneFailed { message, .. } => assert!(message.contains("no-such-branch")),
            other => panic!("unexpected git error: {other:?}"),
        },
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_clone_url_without_name_fails() {
    let err = clone("", std::env::temp_dir(), DEFAULT_BRANCH).unwrap_err();
    assert!(matches!(err, MupError::Git(ref e) if matches!(**e, GitError::CloneFailed { .. })));
}
