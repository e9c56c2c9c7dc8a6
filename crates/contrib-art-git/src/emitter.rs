//! Git subprocess emitter.
//!
//! Writes one commit per planned write by shelling out to `git`, with the
//! author and committer dates pinned to the cell's date.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::NaiveDate;
use contrib_art_core::{LitCell, Plan};

use crate::error::{EmitError, EmitResult};
use crate::record::{pending_commits, DEFAULT_COMMIT_HOUR};

/// Environment variable that overrides the git executable.
pub const GIT_PATH_ENV: &str = "CONTRIB_ART_GIT";

/// File that receives one line per commit.
pub const DEFAULT_ART_FILE: &str = "art.txt";

/// File written for the initial commit of an empty repository.
pub const KEEP_FILE: &str = ".keep";

/// Message of the initial commit of an empty repository.
pub const INITIAL_COMMIT_MESSAGE: &str = "chore: initial commit";

/// Name and email recorded as both author and committer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub email: String,
}

impl Author {
    /// Creates a new author.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Configuration for the git emitter.
#[derive(Debug, Clone)]
pub struct EmitterConfig {
    /// Path to the git executable.
    pub git_path: Option<PathBuf>,
    /// Work tree the commits go into.
    pub repo_dir: PathBuf,
    /// Art file, relative to `repo_dir`.
    pub art_file: PathBuf,
    /// Hour of day for the first commit on each date.
    pub commit_hour: u32,
    /// Author override; `None` uses the repository's git config.
    pub author: Option<Author>,
    /// Run `git init` when `repo_dir` is not a repository.
    pub init_if_missing: bool,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            git_path: None,
            repo_dir: PathBuf::from("."),
            art_file: PathBuf::from(DEFAULT_ART_FILE),
            commit_hour: DEFAULT_COMMIT_HOUR,
            author: None,
            init_if_missing: false,
        }
    }
}

impl EmitterConfig {
    /// Creates a new config targeting `repo_dir`.
    pub fn with_repo(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
            ..Default::default()
        }
    }

    /// Sets the git executable path.
    pub fn git_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.git_path = Some(path.into());
        self
    }

    /// Sets the art file name.
    pub fn art_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.art_file = path.into();
        self
    }

    /// Sets the commit hour.
    pub fn commit_hour(mut self, hour: u32) -> Self {
        self.commit_hour = hour;
        self
    }

    /// Sets the author.
    pub fn author(mut self, author: Author) -> Self {
        self.author = Some(author);
        self
    }

    /// Enables `git init` for missing repositories.
    pub fn init_if_missing(mut self, init: bool) -> Self {
        self.init_if_missing = init;
        self
    }

    /// Checks the commit hour and art file path without touching git.
    pub fn validate(&self) -> EmitResult<()> {
        if self.commit_hour > 23 {
            return Err(EmitError::invalid_config(format!(
                "commit hour must be in 0..=23, got {}",
                self.commit_hour
            )));
        }
        if self.art_file.as_os_str().is_empty() || self.art_file.is_absolute() {
            return Err(EmitError::invalid_config(format!(
                "art file must be a relative path, got {:?}",
                self.art_file
            )));
        }
        Ok(())
    }
}

/// What [`GitEmitter::ensure_repository`] had to do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepositoryState {
    /// `git init` was run.
    pub initialized: bool,
    /// An initial commit was created because `HEAD` did not exist.
    pub initial_commit: bool,
}

/// Progress of a running emit.
#[derive(Debug, Clone, Copy)]
pub struct EmitProgress {
    /// Commits written so far, including this one.
    pub made: u64,
    /// Commits the plan asks for.
    pub total: u64,
    /// Cell of the commit just written.
    pub cell: LitCell,
}

/// Summary of a finished emit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitReport {
    /// Commits written.
    pub commits: u64,
    /// Cells that received at least one commit.
    pub cells: usize,
    /// Earliest backdated commit.
    pub first_date: Option<NaiveDate>,
    /// Latest backdated commit.
    pub last_date: Option<NaiveDate>,
}

/// Writes planned cells as backdated commits.
pub struct GitEmitter {
    config: EmitterConfig,
    git: PathBuf,
}

impl GitEmitter {
    /// Creates an emitter, locating the git executable.
    pub fn new(config: EmitterConfig) -> EmitResult<Self> {
        config.validate()?;
        let git = find_git(config.git_path.as_deref())?;
        Ok(Self { config, git })
    }

    /// The resolved git executable.
    pub fn git_path(&self) -> &Path {
        &self.git
    }

    /// The emitter configuration.
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Returns `git --version` output, e.g. `git version 2.43.0`.
    pub fn version(&self) -> EmitResult<String> {
        self.git_in(None, &["--version"], &[])
    }

    /// Returns whether the repo directory is inside a git work tree.
    pub fn is_repository(&self) -> EmitResult<bool> {
        if !self.config.repo_dir.is_dir() {
            return Ok(false);
        }
        match self.git(&["rev-parse", "--is-inside-work-tree"], &[]) {
            Ok(out) => Ok(out == "true"),
            Err(EmitError::GitFailed { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Returns whether `HEAD` resolves to a commit.
    pub fn has_head(&self) -> EmitResult<bool> {
        match self.git(&["rev-parse", "--verify", "--quiet", "HEAD"], &[]) {
            Ok(_) => Ok(true),
            Err(EmitError::GitFailed { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Reads a git config value as seen from the repo directory.
    ///
    /// Returns `None` when the key is unset.
    pub fn config_value(&self, key: &str) -> EmitResult<Option<String>> {
        let dir_exists = self.config.repo_dir.is_dir();
        let args = ["config", "--get", key];
        let result = if dir_exists {
            self.git(&args, &[])
        } else {
            self.git_in(None, &args, &[])
        };
        match result {
            Ok(value) => Ok(Some(value)),
            Err(EmitError::GitFailed { exit_code: 1, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Makes sure the repo exists and has at least one commit.
    pub fn ensure_repository(&self) -> EmitResult<RepositoryState> {
        let mut state = RepositoryState::default();

        if !self.is_repository()? {
            if !self.config.init_if_missing {
                return Err(EmitError::NotARepository {
                    path: self.config.repo_dir.clone(),
                });
            }
            std::fs::create_dir_all(&self.config.repo_dir)?;
            self.git(&["init"], &[])?;
            state.initialized = true;
        }

        if !self.has_head()? {
            std::fs::write(self.config.repo_dir.join(KEEP_FILE), "init\n")?;
            self.git(&["add", KEEP_FILE], &[])?;
            let env = self.author_env();
            self.git(&["commit", "-m", INITIAL_COMMIT_MESSAGE], &env)?;
            state.initial_commit = true;
        }

        Ok(state)
    }

    /// Writes every commit in `plan`.
    pub fn emit(&self, plan: &Plan) -> EmitResult<EmitReport> {
        self.emit_with_progress(plan, |_| {})
    }

    /// Writes every commit in `plan`, reporting after each one.
    ///
    /// Every cell's timestamps are checked before the first commit, so a day
    /// that cannot hold its commits leaves the repository untouched.
    pub fn emit_with_progress<F>(&self, plan: &Plan, mut on_progress: F) -> EmitResult<EmitReport>
    where
        F: FnMut(&EmitProgress),
    {
        let commits = pending_commits(plan, self.config.commit_hour)?;

        let mut report = EmitReport::default();
        let total = plan.total_writes();
        if total == 0 {
            return Ok(report);
        }

        let art_path = self.config.repo_dir.join(&self.config.art_file);
        let art_arg = self.config.art_file.to_string_lossy().into_owned();
        let mut last_cell = None;

        for commit in commits {
            let commit = commit?;
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&art_path)?;
            file.write_all(commit.art_line().as_bytes())?;
            drop(file);

            self.git(&["add", art_arg.as_str()], &[])?;

            let date = commit.git_date();
            let mut env = self.author_env();
            env.push(("GIT_AUTHOR_DATE", date.clone()));
            env.push(("GIT_COMMITTER_DATE", date));
            let message = commit.message();
            self.git(&["commit", "-m", message.as_str()], &env)?;

            report.commits += 1;
            if last_cell != Some((commit.cell.column, commit.cell.row)) {
                report.cells += 1;
                last_cell = Some((commit.cell.column, commit.cell.row));
            }
            let day = commit.cell.date;
            report.first_date = Some(report.first_date.map_or(day, |d| d.min(day)));
            report.last_date = Some(report.last_date.map_or(day, |d| d.max(day)));

            on_progress(&EmitProgress {
                made: report.commits,
                total,
                cell: commit.cell,
            });
        }

        Ok(report)
    }

    fn author_env(&self) -> Vec<(&'static str, String)> {
        match &self.config.author {
            Some(author) => vec![
                ("GIT_AUTHOR_NAME", author.name.clone()),
                ("GIT_AUTHOR_EMAIL", author.email.clone()),
                ("GIT_COMMITTER_NAME", author.name.clone()),
                ("GIT_COMMITTER_EMAIL", author.email.clone()),
            ],
            None => Vec::new(),
        }
    }

    /// Runs git in the repo directory and returns trimmed stdout.
    fn git(&self, args: &[&str], env: &[(&'static str, String)]) -> EmitResult<String> {
        self.git_in(Some(&self.config.repo_dir), args, env)
    }

    fn git_in(
        &self,
        dir: Option<&Path>,
        args: &[&str],
        env: &[(&'static str, String)],
    ) -> EmitResult<String> {
        let mut cmd = Command::new(&self.git);
        cmd.args(args);
        if let Some(dir) = dir {
            cmd.current_dir(dir);
        }
        for (key, value) in env {
            cmd.env(key, value);
        }

        let output = cmd.output().map_err(EmitError::SpawnFailed)?;
        if !output.status.success() {
            let exit_code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(EmitError::git_failed(args, exit_code, stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

/// Finds the git executable.
///
/// Checks the explicit override, then [`GIT_PATH_ENV`], then `PATH`.
pub fn find_git(explicit: Option<&Path>) -> EmitResult<PathBuf> {
    if let Some(path) = explicit {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
    }

    if let Ok(path) = std::env::var(GIT_PATH_ENV) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Ok(path);
        }
    }

    let names = if cfg!(windows) {
        vec!["git.exe", "git"]
    } else {
        vec!["git"]
    };
    for name in names {
        if let Ok(path) = which::which(name) {
            return Ok(path);
        }
    }

    Err(EmitError::GitNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EmitterConfig::default();
        assert_eq!(config.art_file, PathBuf::from("art.txt"));
        assert_eq!(config.commit_hour, 12);
        assert!(config.author.is_none());
        assert!(!config.init_if_missing);
    }

    #[test]
    fn test_config_builder() {
        let config = EmitterConfig::with_repo("/tmp/art")
            .art_file("pixels.log")
            .commit_hour(9)
            .author(Author::new("Ada", "ada@example.com"))
            .init_if_missing(true);
        assert_eq!(config.repo_dir, PathBuf::from("/tmp/art"));
        assert_eq!(config.art_file, PathBuf::from("pixels.log"));
        assert_eq!(config.commit_hour, 9);
        assert_eq!(config.author.unwrap().email, "ada@example.com");
        assert!(config.init_if_missing);
    }

    #[test]
    fn test_rejects_bad_hour() {
        let result = GitEmitter::new(EmitterConfig::default().commit_hour(24));
        assert!(matches!(result, Err(EmitError::InvalidConfig { .. })));
    }

    #[test]
    fn test_validate_without_git() {
        assert!(EmitterConfig::default().validate().is_ok());
        let err = EmitterConfig::default().commit_hour(30).validate().unwrap_err();
        assert_eq!(err.code(), "GIT_005");
        assert!(EmitterConfig::default().art_file("").validate().is_err());
    }

    #[test]
    fn test_rejects_absolute_art_file() {
        let absolute = std::env::temp_dir().join("art.txt");
        let result = GitEmitter::new(EmitterConfig::default().art_file(absolute));
        assert!(matches!(result, Err(EmitError::InvalidConfig { .. })));
    }

    #[test]
    fn test_missing_explicit_git_falls_through() {
        // A nonexistent override is skipped rather than returned.
        if let Ok(path) = find_git(Some(Path::new("/definitely/not/git"))) {
            assert_ne!(path, PathBuf::from("/definitely/not/git"));
        }
    }
}
