//! Error types for planning contribution art.

use thiserror::Error;

/// Error codes for planning failures.
///
/// These codes are stable and surface in machine-readable CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// ART_001: A character in the word has no glyph
    UnsupportedCharacter,
    /// ART_002: Window, intensity, word, or start date failed validation
    InvalidConfiguration,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "ART_001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::UnsupportedCharacter => "ART_001",
            ErrorCode::InvalidConfiguration => "ART_002",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Errors returned by the font table, calendar window, and planner.
///
/// Every variant is raised before a plan is produced, so a caller holding a
/// [`crate::Plan`] never has to deal with a partially valid one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The word contains a character the font table does not cover.
    #[error("unsupported character {0:?}: no glyph in the font table")]
    UnsupportedCharacter(char),

    /// A configuration value failed validation.
    #[error("invalid configuration: {field}: {message}")]
    InvalidConfiguration {
        /// Name of the offending field (e.g. "window_width").
        field: &'static str,
        /// What the check expected.
        message: String,
    },
}

impl PlanError {
    /// Shorthand for an [`PlanError::InvalidConfiguration`].
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        PlanError::InvalidConfiguration {
            field,
            message: message.into(),
        }
    }

    /// Returns the stable error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            PlanError::UnsupportedCharacter(_) => ErrorCode::UnsupportedCharacter,
            PlanError::InvalidConfiguration { .. } => ErrorCode::InvalidConfiguration,
        }
    }
}

/// Result type for planning operations.
pub type PlanResult<T> = Result<T, PlanError>;
