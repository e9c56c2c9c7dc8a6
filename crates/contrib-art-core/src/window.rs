//! Calendar window: maps grid cells to dates.
//!
//! The contribution graph is a grid of weeks (columns) by weekdays (rows).
//! Column 0, row 0 is the Sunday that begins the window; each further column
//! is one week later and each further row one day later.

use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use serde::Serialize;

use crate::error::{PlanError, PlanResult};

/// Default window width in weeks.
pub const DEFAULT_WINDOW_WIDTH: u32 = 52;
/// Default window height in days.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 7;

/// Source of "today" for relative window anchoring.
pub trait Clock {
    /// Returns the current calendar date.
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock that always returns the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> NaiveDate,
{
    fn today(&self) -> NaiveDate {
        self()
    }
}

/// Returns the Sunday on or before `date`.
pub fn most_recent_sunday(date: NaiveDate) -> NaiveDate {
    let back = date.weekday().num_days_from_sunday();
    // At most six days back; only fails at the very start of the calendar.
    date.checked_sub_days(Days::new(u64::from(back)))
        .unwrap_or(NaiveDate::MIN)
}

/// A `width` x `height` grid of days starting on a Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Window {
    start: NaiveDate,
    width: u32,
    height: u32,
}

impl Window {
    /// Creates a window whose column 0 is the pinned Sunday `start`.
    ///
    /// Fails with `InvalidConfiguration` if `start` is not a Sunday, either
    /// dimension is zero, or the window would run past the end of the
    /// calendar.
    pub fn pinned(start: NaiveDate, width: u32, height: u32) -> PlanResult<Self> {
        if start.weekday() != Weekday::Sun {
            return Err(PlanError::invalid(
                "start_date",
                format!(
                    "{} is a {:?}; column 0 must start on a Sunday",
                    start,
                    start.weekday()
                ),
            ));
        }
        Self::build(start, width, height)
    }

    /// Creates a window that ends in the current week.
    ///
    /// Column 0 is the Sunday exactly `width` weeks before the most recent
    /// Sunday on or before `clock.today()`.
    pub fn relative(clock: &dyn Clock, width: u32, height: u32) -> PlanResult<Self> {
        let end_sunday = most_recent_sunday(clock.today());
        let start = end_sunday
            .checked_sub_days(Days::new(u64::from(width) * 7))
            .ok_or_else(|| {
                PlanError::invalid(
                    "window_width",
                    format!("{width} weeks before {end_sunday} is out of calendar range"),
                )
            })?;
        Self::build(start, width, height)
    }

    fn build(start: NaiveDate, width: u32, height: u32) -> PlanResult<Self> {
        if width == 0 {
            return Err(PlanError::invalid("window_width", "must be positive, got 0"));
        }
        if height == 0 {
            return Err(PlanError::invalid("window_height", "must be positive, got 0"));
        }
        let window = Self {
            start,
            width,
            height,
        };
        if window.date_for(width - 1, height - 1).is_none() {
            return Err(PlanError::invalid(
                "start_date",
                format!("window starting {start} runs past the end of the calendar"),
            ));
        }
        Ok(window)
    }

    /// The Sunday of column 0.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Width in columns (weeks).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in rows (days).
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns whether `(column, row)` lies inside the window.
    pub fn contains(&self, column: i64, row: i64) -> bool {
        (0..i64::from(self.width)).contains(&column) && (0..i64::from(self.height)).contains(&row)
    }

    /// Date of the cell at `(column, row)`: `start + column * 7 + row` days.
    ///
    /// Returns `None` for cells outside the window.
    pub fn date_for(&self, column: u32, row: u32) -> Option<NaiveDate> {
        if column >= self.width || row >= self.height {
            return None;
        }
        let offset = u64::from(column) * 7 + u64::from(row);
        self.start.checked_add_days(Days::new(offset))
    }

    /// Date of the last cell in the window.
    pub fn end(&self) -> NaiveDate {
        self.date_for(self.width - 1, self.height - 1)
            .unwrap_or(self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_most_recent_sunday() {
        // 2024-01-07 is a Sunday.
        assert_eq!(most_recent_sunday(date(2024, 1, 7)), date(2024, 1, 7));
        assert_eq!(most_recent_sunday(date(2024, 1, 10)), date(2024, 1, 7));
        assert_eq!(most_recent_sunday(date(2024, 1, 13)), date(2024, 1, 7));
        assert_eq!(most_recent_sunday(date(2024, 1, 14)), date(2024, 1, 14));
    }

    #[test]
    fn test_date_mapping() {
        let window = Window::pinned(date(2024, 1, 7), 52, 7).unwrap();
        assert_eq!(window.date_for(3, 2), Some(date(2024, 1, 30)));
        assert_eq!(window.date_for(0, 0), Some(date(2024, 1, 7)));
        assert_eq!(window.date_for(52, 0), None);
        assert_eq!(window.date_for(0, 7), None);
    }

    #[test]
    fn test_window_end() {
        let window = Window::pinned(date(2024, 1, 7), 52, 7).unwrap();
        // 51 weeks + 6 days after the start.
        assert_eq!(window.end(), date(2025, 1, 4));
    }

    #[test]
    fn test_pinned_requires_sunday() {
        let err = Window::pinned(date(2024, 1, 8), 52, 7).unwrap_err();
        assert!(matches!(
            err,
            PlanError::InvalidConfiguration {
                field: "start_date",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let start = date(2024, 1, 7);
        assert!(Window::pinned(start, 0, 7).is_err());
        assert!(Window::pinned(start, 52, 0).is_err());
    }

    #[test]
    fn test_relative_window_start() {
        // Wednesday 2025-06-18; most recent Sunday is 2025-06-15.
        let clock = FixedClock(date(2025, 6, 18));
        let window = Window::relative(&clock, 52, 7).unwrap();
        assert_eq!(window.start(), date(2024, 6, 16));
        assert_eq!(window.start().weekday(), Weekday::Sun);
    }

    #[test]
    fn test_closure_clock() {
        let today = || date(2025, 6, 15);
        let window = Window::relative(&today, 52, 7).unwrap();
        assert_eq!(window.start(), date(2024, 6, 16));
    }

    #[test]
    fn test_contains() {
        let window = Window::pinned(date(2024, 1, 7), 52, 7).unwrap();
        assert!(window.contains(0, 0));
        assert!(window.contains(51, 6));
        assert!(!window.contains(-1, 0));
        assert!(!window.contains(52, 0));
        assert!(!window.contains(0, 7));
    }
}
