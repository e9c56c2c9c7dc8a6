//! Property-based placement tests using proptest.
//!
//! These tests verify that planning never panics and that clipping, purity
//! and shape invariance hold for arbitrary words, offsets and dates.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p contrib-art-tests --test proptest_placement
//! ```

use std::collections::BTreeSet;

use chrono::{Datelike, Days, NaiveDate};
use proptest::prelude::*;

use contrib_art_core::{plan, Anchor, FixedClock, PlanError, PlanRequest, Word};

// ============================================================================
// Strategies
// ============================================================================

fn supported_word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z ]{1,12}").unwrap()
}

fn anchor() -> impl Strategy<Value = Anchor> {
    prop::sample::select(Anchor::ALL.to_vec())
}

fn any_day() -> impl Strategy<Value = NaiveDate> {
    // 1990-01-01 plus up to ~80 years
    (0u64..29_000).prop_map(|n| {
        NaiveDate::from_ymd_opt(1990, 1, 1)
            .and_then(|d| d.checked_add_days(Days::new(n)))
            .unwrap()
    })
}

fn shape(request: &PlanRequest, today: NaiveDate) -> BTreeSet<(u32, u32)> {
    plan(request, &FixedClock(today))
        .unwrap()
        .cells
        .iter()
        .map(|cell| (cell.column, cell.row))
        .collect()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Every lit cell is inside the window, and nothing is lost: each
    /// on-pixel is either a cell or counted as clipped.
    #[test]
    fn cells_stay_inside_window(
        word in supported_word(),
        anchor in anchor(),
        offset in -80i64..80,
        width in 1i64..80,
        height in 1i64..10,
        today in any_day(),
    ) {
        let request = PlanRequest::new(word.clone())
            .with_anchor(anchor)
            .with_offset(offset)
            .with_window(width, height);
        let plan = plan(&request, &FixedClock(today)).unwrap();

        for cell in &plan.cells {
            prop_assert!(i64::from(cell.column) < width);
            prop_assert!(i64::from(cell.row) < height);
        }
        let on = Word::new(&word).unwrap().pixels().count();
        prop_assert_eq!(plan.cells.len() + plan.clipped, on);
    }

    /// Cell dates follow `start + 7 * column + row` and start on a Sunday.
    #[test]
    fn cell_dates_follow_grid(
        word in supported_word(),
        offset in -10i64..40,
        today in any_day(),
    ) {
        let request = PlanRequest::new(word).with_offset(offset);
        let plan = plan(&request, &FixedClock(today)).unwrap();
        let start = plan.window.start();
        prop_assert_eq!(start.weekday(), chrono::Weekday::Sun);
        prop_assert!(start < today);

        for cell in &plan.cells {
            let days = u64::from(cell.column) * 7 + u64::from(cell.row);
            prop_assert_eq!(Some(cell.date), start.checked_add_days(Days::new(days)));
        }
    }

    /// Same request and same date always give the same plan.
    #[test]
    fn planning_is_deterministic(
        word in supported_word(),
        anchor in anchor(),
        offset in -60i64..60,
        intensity in 0i64..10,
        today in any_day(),
    ) {
        let request = PlanRequest::new(word)
            .with_anchor(anchor)
            .with_offset(offset)
            .with_intensity(intensity);
        let a = plan(&request, &FixedClock(today)).unwrap();
        let b = plan(&request, &FixedClock(today)).unwrap();
        prop_assert_eq!(a, b);
    }

    /// Moving the clock moves the dates, never the shape.
    #[test]
    fn shape_is_independent_of_today(
        word in supported_word(),
        anchor in anchor(),
        offset in -60i64..60,
        a in any_day(),
        b in any_day(),
    ) {
        let request = PlanRequest::new(word).with_anchor(anchor).with_offset(offset);
        prop_assert_eq!(shape(&request, a), shape(&request, b));
    }

    /// Total writes is lit cells times intensity.
    #[test]
    fn total_writes_is_cells_times_intensity(
        word in supported_word(),
        intensity in 0i64..20,
        today in any_day(),
    ) {
        let request = PlanRequest::new(word).with_intensity(intensity);
        let plan = plan(&request, &FixedClock(today)).unwrap();
        prop_assert_eq!(plan.total_writes(), plan.cells.len() as u64 * intensity as u64);
    }

    /// Any character outside A-Z and space is rejected, never panics.
    #[test]
    fn unsupported_characters_are_rejected(
        prefix in "[A-Z]{0,4}",
        bad in "[0-9!?.,#@-]",
    ) {
        let word = format!("{}{}", prefix, bad);
        let today = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        let err = plan(&PlanRequest::new(word), &FixedClock(today)).unwrap_err();
        let expected = bad.chars().next().unwrap();
        prop_assert_eq!(err, PlanError::UnsupportedCharacter(expected));
    }
}
