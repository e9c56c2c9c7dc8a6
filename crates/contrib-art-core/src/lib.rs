//! contrib-art core library
//!
//! Plans text art for a contribution graph: a rolling grid of weeks by
//! weekdays where every lit cell is a day with commits.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use contrib_art_core::{plan, Anchor, FixedClock, PlanRequest};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
//! let request = PlanRequest::new("SHOWKAT")
//!     .with_anchor(Anchor::Right)
//!     .with_intensity(3)
//!     .with_start_date(start);
//!
//! let plan = plan(&request, &FixedClock(start)).unwrap();
//! assert_eq!(plan.word_width, 41);
//! assert_eq!(plan.final_left, 11);
//! assert!(plan.cells.iter().all(|cell| cell.write_count == 3));
//! ```
//!
//! # Modules
//!
//! - [`font`]: Static 5x7 glyph table
//! - [`window`]: Calendar window and clock
//! - [`config`]: Anchor, JSON art spec, and plan request
//! - [`plan`]: Placement planner
//! - [`error`]: Error types and stable codes

pub mod config;
pub mod error;
pub mod font;
pub mod plan;
pub mod window;

// Re-export commonly used types at the crate root
pub use config::{
    parse_start_date, Anchor, ArtConfig, PlanRequest, DEFAULT_INTENSITY, DEFAULT_WORD,
};
pub use error::{ErrorCode, PlanError, PlanResult};
pub use font::{glyph_for, Glyph, GLYPH_GAP, GLYPH_HEIGHT, GLYPH_WIDTH};
pub use plan::{base_left, plan, word_width, LitCell, Plan, Word};
pub use window::{
    most_recent_sunday, Clock, FixedClock, SystemClock, Window, DEFAULT_WINDOW_HEIGHT,
    DEFAULT_WINDOW_WIDTH,
};
