//! Test harness utilities for painting into scratch git repositories.

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

use contrib_art_git::{Author, EmitterConfig};

/// Author used for every scratch commit.
pub const TEST_AUTHOR_NAME: &str = "Pixel Painter";
/// Email used for every scratch commit.
pub const TEST_AUTHOR_EMAIL: &str = "painter@example.com";

/// Check if git is available in the environment.
pub fn is_git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// A temporary directory holding a (not yet created) repository.
pub struct ScratchRepo {
    /// Owns the temporary directory.
    pub root: TempDir,
    repo: PathBuf,
}

impl ScratchRepo {
    /// Creates a scratch directory; the repository itself is created by
    /// the emitter.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        let repo = root.path().join("art");
        Self { root, repo }
    }

    /// Path of the repository work tree.
    pub fn path(&self) -> &Path {
        &self.repo
    }

    /// Emitter config that initializes the repo and commits as the test author.
    pub fn emitter_config(&self) -> EmitterConfig {
        EmitterConfig::with_repo(&self.repo)
            .init_if_missing(true)
            .author(Author::new(TEST_AUTHOR_NAME, TEST_AUTHOR_EMAIL))
    }

    /// Runs git in the repository and returns trimmed stdout.
    pub fn git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo)
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {} failed.\nstderr: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }

    /// Number of commits reachable from `HEAD`.
    pub fn commit_count(&self) -> u64 {
        self.git(&["rev-list", "--count", "HEAD"])
            .parse()
            .expect("rev-list --count is not a number")
    }

    /// Author dates (`YYYY-MM-DD`) of every commit, oldest first.
    pub fn author_dates(&self) -> Vec<String> {
        self.git(&["log", "--reverse", "--format=%ad", "--date=short"])
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Subject lines of every commit, oldest first.
    pub fn subjects(&self) -> Vec<String> {
        self.git(&["log", "--reverse", "--format=%s"])
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Default for ScratchRepo {
    fn default() -> Self {
        Self::new()
    }
}
