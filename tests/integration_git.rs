// mup-rs: Multi-purpose Utility Pack
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for Git operations.
//!
//! Tests the git module with real temporary repositories.

use mup_rs::git::cmd::clone;
use mup_rs::git::query::{commit_id, is_path_repository};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn git(args: &[&str], cwd: &Path) -> String {
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
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn commit_file(repo: &Path, name: &str, message: &str) {
    fs::write(repo.join(name), message).unwrap();
    git(&["add", name], repo);
    git(&["commit", "--quiet", "-m", message], repo);
}

/// Creates a repository with `master` and a `feature` branch one commit ahead.
fn init_repo_with_branches(path: &Path) {
    fs::create_dir_all(path).unwrap();
    git(&["init", "--quiet"], path);
    git(&["symbolic-ref", "HEAD", "refs/heads/master"], path);
    commit_file(path, "README.md", "initial");
    git(&["checkout", "--quiet", "-b", "feature"], path);
    commit_file(path, "feature.txt", "feature work");
    git(&["checkout", "--quiet", "master"], path);
}

// =============================================================================
// Clone
// =============================================================================

#[test]
fn git_clone_checks_out_requested_branch() {
    let temp = temp_dir();
    let source = temp.path().join("upstream");
    init_repo_with_branches(&source);

    let cloned = clone(&source.to_string_lossy(), temp.path().join("work"), "feature").unwrap();

    assert_eq!(cloned, temp.path().join("work").join("upstream"));
    assert!(cloned.join("feature.txt").is_file());
    assert_eq!(git(&["rev-parse", "--abbrev-ref", "HEAD"], &cloned), "feature");
    assert_eq!(
        commit_id(&cloned, false).unwrap(),
        git(&["rev-parse", "feature"], &source)
    );
}

#[test]
fn git_clone_url_with_trailing_slash() {
    let temp = temp_dir();
    let source = temp.path().join("tools");
    init_repo_with_branches(&source);

    let url = format!("{}/", source.to_string_lossy());
    let cloned = clone(&url, temp.path().join("deps"), "master").unwrap();
    assert_eq!(cloned, temp.path().join("deps").join("tools"));
    assert!(!cloned.join("feature.txt").exists());
}

#[test]
fn git_clone_into_existing_checkout_fails() {
    let temp = temp_dir();
    let source = temp.path().join("lib");
    init_repo_with_branches(&source);
    let destination = temp.path().join("deps");

    clone(&source.to_string_lossy(), &destination, "master").unwrap();
    commit_file(&destination.join("lib"), "local.txt", "local change");

    assert!(clone(&source.to_string_lossy(), &destination, "master").is_err());
    assert!(destination.join("lib").join("local.txt").is_file());
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn git_queries_from_subdirectory() {
    let temp = temp_dir();
    let repo = temp.path().join("repo");
    init_repo_with_branches(&repo);
    let nested = repo.join("src").join("deep");
    fs::create_dir_all(&nested).unwrap();

    assert!(is_path_repository(&nested).unwrap());
    assert_eq!(
        commit_id(&nested, false).unwrap(),
        commit_id(&repo, false).unwrap()
    );
}

#[test]
fn git_commit_id_tracks_new_commits() {
    let temp = temp_dir();
    let repo = temp.path().join("repo");
    init_repo_with_branches(&repo);

    let before = commit_id(&repo, false).unwrap();
    commit_file(&repo, "CHANGELOG.md", "next");
    let after = commit_id(&repo, false).unwrap();

    assert_ne!(before, after);
    assert_eq!(after, git(&["rev-parse", "HEAD"], &repo));
}
