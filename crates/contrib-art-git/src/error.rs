//! Error types for the git write emitter.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for emitter operations.
pub type EmitResult<T> = Result<T, EmitError>;

/// Errors that can occur while writing commits.
#[derive(Debug, Error)]
pub enum EmitError {
    /// Git executable not found.
    #[error("git executable not found. Ensure git is installed and in PATH, or set CONTRIB_ART_GIT environment variable")]
    GitNotFound,

    /// Failed to spawn git.
    #[error("Failed to spawn git: {0}")]
    SpawnFailed(#[source] std::io::Error),

    /// Git exited with non-zero status.
    #[error("`git {args}` exited with status {exit_code}: {stderr}")]
    GitFailed {
        args: String,
        exit_code: i32,
        stderr: String,
    },

    /// Target directory is not inside a git work tree.
    #[error("{path} is not a git repository (pass --init to create one)")]
    NotARepository { path: PathBuf },

    /// Emitter configuration is unusable.
    #[error("Invalid emitter configuration: {message}")]
    InvalidConfig { message: String },

    /// A commit timestamp fell outside the representable range.
    #[error("Cannot build a commit timestamp for {date}")]
    TimestampOutOfRange { date: chrono::NaiveDate },

    /// A cell asks for more commits than fit between the commit hour and
    /// midnight of its date.
    #[error("{count} commits do not fit on {date}; at most {max} fit after the commit hour")]
    TooManyCommits {
        date: chrono::NaiveDate,
        count: u32,
        max: u32,
    },

    /// IO error while writing the art file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EmitError {
    /// Creates a new git failed error.
    pub fn git_failed(args: &[&str], exit_code: i32, stderr: impl Into<String>) -> Self {
        Self::GitFailed {
            args: args.join(" "),
            exit_code,
            stderr: stderr.into().trim().to_string(),
        }
    }

    /// Creates a new invalid config error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Returns the stable error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            EmitError::GitNotFound => "GIT_001",
            EmitError::SpawnFailed(_) => "GIT_002",
            EmitError::GitFailed { .. } => "GIT_003",
            EmitError::NotARepository { .. } => "GIT_004",
            EmitError::InvalidConfig { .. } => "GIT_005",
            EmitError::TimestampOutOfRange { .. } => "GIT_006",
            EmitError::Io(_) => "GIT_007",
            EmitError::TooManyCommits { .. } => "GIT_008",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_failed_joins_args() {
        let err = EmitError::git_failed(&["commit", "-m", "x"], 128, "fatal: nope\n");
        assert_eq!(
            err.to_string(),
            "`git commit -m x` exited with status 128: fatal: nope"
        );
        assert_eq!(err.code(), "GIT_003");
    }

    #[test]
    fn test_not_a_repository_message() {
        let err = EmitError::NotARepository {
            path: PathBuf::from("/tmp/art"),
        };
        assert!(err.to_string().contains("--init"));
        assert_eq!(err.code(), "GIT_004");
    }

    #[test]
    fn test_too_many_commits_message() {
        let err = EmitError::TooManyCommits {
            date: chrono::NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
            count: 50_000,
            max: 43_200,
        };
        assert_eq!(
            err.to_string(),
            "50000 commits do not fit on 2024-01-07; at most 43200 fit after the commit hour"
        );
        assert_eq!(err.code(), "GIT_008");
    }
}
