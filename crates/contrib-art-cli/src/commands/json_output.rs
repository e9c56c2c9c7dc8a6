//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag on `plan`, `preview`, and `paint`.

use contrib_art_core::{Anchor, LitCell, Plan, PlanError};
use contrib_art_git::{EmitError, EmitReport};
use serde::{Deserialize, Serialize};

use crate::input::InputError;

/// Error codes for CLI operations.
///
/// Planner errors pass through their own `ART_xxx` codes and emitter errors
/// their `GIT_xxx` codes.
pub mod error_codes {
    /// Config file could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Config file is not a valid art spec
    pub const JSON_PARSE: &str = "CLI_002";
    /// JSON serialization error
    pub const JSON_SERIALIZE: &str = "CLI_003";
    /// Conflicting or incomplete command-line options
    pub const INVALID_OPTIONS: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "ART_002", "GIT_003")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// Converts a planner error to a JSON error.
pub fn plan_error_to_json(err: &PlanError) -> JsonError {
    JsonError::new(err.code().code(), err.to_string())
}

/// Converts an input error to a JSON error.
pub fn input_error_to_json(err: &InputError) -> JsonError {
    match err {
        InputError::FileRead { path, .. } => {
            JsonError::new(error_codes::FILE_READ, err.to_string()).with_file(path.display().to_string())
        }
        InputError::JsonParse { path, .. } => {
            JsonError::new(error_codes::JSON_PARSE, err.to_string()).with_file(path.display().to_string())
        }
        InputError::Plan(e) => plan_error_to_json(e),
    }
}

/// Converts an emitter error to a JSON error.
pub fn emit_error_to_json(err: &EmitError) -> JsonError {
    JsonError::new(err.code(), err.to_string())
}

/// Placement summary shared by every command's JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacementSummary {
    pub word: String,
    pub anchor: Anchor,
    pub word_width: i64,
    pub base_offset: i64,
    pub extra_offset: i64,
    pub effective_offset: i64,
    pub intensity: u32,
    pub window_start: String,
    pub window_end: String,
    pub window_width: u32,
    pub window_height: u32,
    pub lit_cells: usize,
    pub clipped_pixels: usize,
    pub total_writes: u64,
}

impl From<&Plan> for PlacementSummary {
    fn from(plan: &Plan) -> Self {
        Self {
            word: plan.word.clone(),
            anchor: plan.anchor,
            word_width: plan.word_width,
            base_offset: plan.base_left,
            extra_offset: plan.offset,
            effective_offset: plan.final_left,
            intensity: plan.intensity,
            window_start: plan.window.start().to_string(),
            window_end: plan.window.end().to_string(),
            window_width: plan.window.width(),
            window_height: plan.window.height(),
            lit_cells: plan.cells.len(),
            clipped_pixels: plan.clipped,
            total_writes: plan.total_writes(),
        }
    }
}

/// JSON output for the `plan` command.
#[derive(Debug, Clone, Serialize)]
pub struct PlanOutput {
    /// Whether planning succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Placement summary (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<PlacementSummary>,
    /// Lit cells in write order (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cells: Option<Vec<LitCell>>,
}

impl PlanOutput {
    /// Creates a successful plan output.
    pub fn success(plan: &Plan) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            summary: Some(PlacementSummary::from(plan)),
            cells: Some(plan.cells.clone()),
        }
    }

    /// Creates a failed plan output.
    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            summary: None,
            cells: None,
        }
    }
}

/// JSON output for the `preview` command.
#[derive(Debug, Clone, Serialize)]
pub struct PreviewOutput {
    /// Whether planning succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Placement summary (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<PlacementSummary>,
    /// One string per weekday row (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<Vec<String>>,
}

/// Result data for a finished `paint`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaintResult {
    /// Repository written to
    pub repo: String,
    /// Whether commits were actually written
    pub dry_run: bool,
    /// Whether `git init` ran
    pub initialized: bool,
    /// Whether an initial commit was created
    pub initial_commit: bool,
    /// Commits written (or that would be written)
    pub commits: u64,
    /// Earliest backdated date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_date: Option<String>,
    /// Latest backdated date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_date: Option<String>,
}

impl PaintResult {
    /// Builds a result from an emitter report.
    pub fn from_report(repo: impl Into<String>, report: &EmitReport) -> Self {
        Self {
            repo: repo.into(),
            dry_run: false,
            initialized: false,
            initial_commit: false,
            commits: report.commits,
            first_date: report.first_date.map(|d| d.to_string()),
            last_date: report.last_date.map(|d| d.to_string()),
        }
    }
}

/// JSON output for the `paint` command.
#[derive(Debug, Clone, Serialize)]
pub struct PaintOutput {
    /// Whether painting succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Placement summary (when planning succeeded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<PlacementSummary>,
    /// Paint result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<PaintResult>,
}

/// Serializes `value` as pretty JSON, falling back to a minimal error document.
pub fn to_pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        format!(
            r#"{{"success": false, "errors": [{{"code": "{}", "message": "{}"}}]}}"#,
            error_codes::JSON_SERIALIZE,
            e.to_string().replace('"', "'")
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contrib_art_core::{plan, FixedClock, PlanRequest};

    fn sample_plan() -> Plan {
        let start = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        plan(
            &PlanRequest::new("SHOWKAT")
                .with_anchor(Anchor::Center)
                .with_start_date(start),
            &FixedClock(start),
        )
        .unwrap()
    }

    #[test]
    fn test_json_error_optional_file_skipped() {
        let error = JsonError::new("CLI_001", "boom");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"CLI_001\""));
        assert!(!json.contains("\"file\""));
    }

    #[test]
    fn test_plan_error_codes_pass_through() {
        let err = PlanError::UnsupportedCharacter('?');
        assert_eq!(plan_error_to_json(&err).code, "ART_001");
    }

    #[test]
    fn test_summary_fields() {
        let plan = sample_plan();
        let summary = PlacementSummary::from(&plan);
        assert_eq!(summary.word_width, 41);
        assert_eq!(summary.base_offset, 5);
        assert_eq!(summary.effective_offset, 5);
        assert_eq!(summary.window_start, "2024-01-07");
        assert_eq!(summary.total_writes, plan.cells.len() as u64 * 5);
    }

    #[test]
    fn test_plan_output_serialization() {
        let output = PlanOutput::success(&sample_plan());
        let json = to_pretty_json(&output);
        assert!(json.contains("\"success\": true"));
        assert!(json.contains("\"anchor\": \"center\""));
        assert!(json.contains("\"write_count\": 5"));

        let failed = PlanOutput::failure(vec![JsonError::new("ART_002", "bad")]);
        let json = to_pretty_json(&failed);
        assert!(json.contains("\"success\": false"));
        assert!(!json.contains("\"cells\""));
    }
}
