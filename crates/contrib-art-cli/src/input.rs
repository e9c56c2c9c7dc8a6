//! Placement input loading.
//!
//! Reads an optional JSON art spec, then layers command-line overrides on
//! top of it to produce the [`PlanRequest`] handed to the planner.

use std::path::{Path, PathBuf};

use contrib_art_core::{plan, ArtConfig, Clock, Plan, PlanError, PlanRequest};

/// Placement values given on the command line. `None` keeps the value from
/// the config file (or the default).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlacementOverrides {
    /// Path to a JSON art spec.
    pub config: Option<String>,
    pub word: Option<String>,
    pub anchor: Option<String>,
    pub offset: Option<i64>,
    pub intensity: Option<i64>,
    pub start_date: Option<String>,
    pub window_width: Option<i64>,
    pub window_height: Option<i64>,
}

/// Errors that can occur while loading placement input.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON parsing failed.
    JsonParse { path: PathBuf, message: String },

    /// A value failed validation.
    Plan(PlanError),
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::JsonParse { path, message } => {
                write!(f, "failed to parse '{}': {}", path.display(), message)
            }
            InputError::Plan(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            InputError::Plan(e) => Some(e),
            InputError::JsonParse { .. } => None,
        }
    }
}

impl From<PlanError> for InputError {
    fn from(e: PlanError) -> Self {
        InputError::Plan(e)
    }
}

/// Loads an art spec from a JSON file.
pub fn load_config(path: &Path) -> Result<ArtConfig, InputError> {
    let content = std::fs::read_to_string(path).map_err(|source| InputError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    ArtConfig::from_json_str(&content).map_err(|e| InputError::JsonParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Applies command-line overrides to `config`.
pub fn apply_overrides(
    mut config: ArtConfig,
    overrides: &PlacementOverrides,
) -> Result<ArtConfig, InputError> {
    if let Some(word) = &overrides.word {
        config.word = word.clone();
    }
    if let Some(anchor) = &overrides.anchor {
        config.anchor = anchor.parse()?;
    }
    if let Some(offset) = overrides.offset {
        config.offset = offset;
    }
    if let Some(intensity) = overrides.intensity {
        config.intensity = intensity;
    }
    if let Some(start_date) = &overrides.start_date {
        config.start_date = Some(start_date.clone());
    }
    if let Some(width) = overrides.window_width {
        config.window_width = width;
    }
    if let Some(height) = overrides.window_height {
        config.window_height = height;
    }
    Ok(config)
}

/// Resolves the final art spec: config file (if any), then overrides.
pub fn resolve_config(overrides: &PlacementOverrides) -> Result<ArtConfig, InputError> {
    let base = match &overrides.config {
        Some(path) => load_config(Path::new(path))?,
        None => ArtConfig::default(),
    };
    apply_overrides(base, overrides)
}

/// Resolves overrides all the way to a plan request.
pub fn resolve_request(overrides: &PlacementOverrides) -> Result<PlanRequest, InputError> {
    Ok(resolve_config(overrides)?.to_request()?)
}

/// Resolves overrides and plans them against `clock`.
pub fn resolve_plan(overrides: &PlacementOverrides, clock: &dyn Clock) -> Result<Plan, InputError> {
    let request = resolve_request(overrides)?;
    Ok(plan(&request, clock)?)
}
