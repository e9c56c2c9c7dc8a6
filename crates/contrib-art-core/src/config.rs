//! Placement configuration.
//!
//! [`ArtConfig`] is the JSON-facing shape of an art spec. It is converted to a
//! [`PlanRequest`], which the planner validates before doing any work.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, PlanResult};
use crate::window::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};

/// The word rendered when none is configured.
pub const DEFAULT_WORD: &str = "SHOWKAT";
/// Commits per lit cell when none is configured.
pub const DEFAULT_INTENSITY: i64 = 5;
/// Format accepted for pinned start dates.
pub const START_DATE_FORMAT: &str = "%Y-%m-%d";

/// Horizontal alignment of the word within the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Anchor {
    /// Word starts at column 0.
    #[default]
    Left,
    /// Word is centered, rounding toward the left.
    Center,
    /// Word ends at the last column.
    Right,
}

impl Anchor {
    /// All anchors, in declaration order.
    pub const ALL: [Anchor; 3] = [Anchor::Left, Anchor::Center, Anchor::Right];

    /// Returns the string identifier for this anchor.
    pub fn as_str(&self) -> &'static str {
        match self {
            Anchor::Left => "left",
            Anchor::Center => "center",
            Anchor::Right => "right",
        }
    }
}

impl std::fmt::Display for Anchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Anchor {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Anchor::Left),
            "center" => Ok(Anchor::Center),
            "right" => Ok(Anchor::Right),
            other => Err(PlanError::invalid(
                "anchor",
                format!("expected one of left, center, right; got {other:?}"),
            )),
        }
    }
}

/// Parses a pinned start date in `YYYY-MM-DD` form.
pub fn parse_start_date(s: &str) -> PlanResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), START_DATE_FORMAT)
        .map_err(|_| PlanError::invalid("start_date", format!("expected YYYY-MM-DD, got {s:?}")))
}

/// An art spec as read from a JSON file.
///
/// Every field is optional in the file; missing fields take the defaults.
/// Numeric fields are signed so out-of-range values surface as
/// `InvalidConfiguration` rather than as parse failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ArtConfig {
    /// Text to render.
    pub word: String,
    /// Base alignment within the window.
    pub anchor: Anchor,
    /// Extra columns applied after anchoring (negative shifts left).
    pub offset: i64,
    /// Commits per lit cell.
    pub intensity: i64,
    /// Pinned Sunday for column 0 (`YYYY-MM-DD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Window width in weeks.
    pub window_width: i64,
    /// Window height in days.
    pub window_height: i64,
}

impl Default for ArtConfig {
    fn default() -> Self {
        Self {
            word: DEFAULT_WORD.to_string(),
            anchor: Anchor::default(),
            offset: 0,
            intensity: DEFAULT_INTENSITY,
            start_date: None,
            window_width: i64::from(DEFAULT_WINDOW_WIDTH),
            window_height: i64::from(DEFAULT_WINDOW_HEIGHT),
        }
    }
}

impl ArtConfig {
    /// Parses an art spec from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the art spec to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Converts to a plan request, parsing the start date.
    ///
    /// Numeric checks are left to the planner.
    pub fn to_request(&self) -> PlanResult<PlanRequest> {
        let start_date = self
            .start_date
            .as_deref()
            .map(parse_start_date)
            .transpose()?;
        Ok(PlanRequest {
            word: self.word.clone(),
            anchor: self.anchor,
            offset: self.offset,
            intensity: self.intensity,
            window_width: self.window_width,
            window_height: self.window_height,
            start_date,
        })
    }
}

/// Input to [`crate::plan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    /// Text to render; uppercased before glyph lookup.
    pub word: String,
    /// Base alignment within the window.
    pub anchor: Anchor,
    /// Extra columns applied after anchoring.
    pub offset: i64,
    /// Commits per lit cell; must be non-negative.
    pub intensity: i64,
    /// Window width in weeks; must be positive.
    pub window_width: i64,
    /// Window height in days; must be positive.
    pub window_height: i64,
    /// Pinned Sunday for column 0; `None` anchors to today.
    pub start_date: Option<NaiveDate>,
}

impl Default for PlanRequest {
    fn default() -> Self {
        Self::new(DEFAULT_WORD)
    }
}

impl PlanRequest {
    /// Creates a request for `word` with default placement.
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            anchor: Anchor::default(),
            offset: 0,
            intensity: DEFAULT_INTENSITY,
            window_width: i64::from(DEFAULT_WINDOW_WIDTH),
            window_height: i64::from(DEFAULT_WINDOW_HEIGHT),
            start_date: None,
        }
    }

    /// Sets the anchor.
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the column offset.
    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the commits per lit cell.
    pub fn with_intensity(mut self, intensity: i64) -> Self {
        self.intensity = intensity;
        self
    }

    /// Sets the window dimensions.
    pub fn with_window(mut self, width: i64, height: i64) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    /// Pins column 0 to `start`.
    pub fn with_start_date(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }
}
