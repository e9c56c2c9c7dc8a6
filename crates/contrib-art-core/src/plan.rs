//! Placement planner.
//!
//! Turns a word and a [`PlanRequest`] into the ordered list of grid cells to
//! light, each carrying its calendar date and the number of commits to write.
//!
//! Placement never clamps: the anchor and offset give the word's leftmost
//! column, and any pixel that lands outside the window is dropped. Callers
//! can therefore scroll art partially or fully off the graph on purpose.

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::{Anchor, PlanRequest};
use crate::error::{PlanError, PlanResult};
use crate::font::{glyph_for, Glyph, GLYPH_GAP, GLYPH_WIDTH};
use crate::window::{Clock, Window};

/// Columns the cursor advances after each glyph.
const GLYPH_ADVANCE: i64 = (GLYPH_WIDTH + GLYPH_GAP) as i64;

/// A word resolved against the font table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    glyphs: Vec<Glyph>,
}

impl Word {
    /// Uppercases `text` and looks up every glyph.
    ///
    /// Fails with `UnsupportedCharacter` on the first character without a
    /// glyph, and with `InvalidConfiguration` for an empty word.
    pub fn new(text: &str) -> PlanResult<Self> {
        let text = text.to_uppercase();
        if text.is_empty() {
            return Err(PlanError::invalid("word", "must not be empty"));
        }
        let glyphs = text.chars().map(glyph_for).collect::<PlanResult<Vec<_>>>()?;
        Ok(Self { text, glyphs })
    }

    /// The uppercased text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Glyphs in word order.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Rendered width in columns, gaps included.
    pub fn width(&self) -> i64 {
        word_width(self.glyphs.len())
    }

    /// Lit pixels as `(column, row)` relative to the word's leftmost column.
    pub fn pixels(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.glyphs.iter().enumerate().flat_map(|(index, glyph)| {
            let left = (index as i64).saturating_mul(GLYPH_ADVANCE);
            glyph
                .pixels()
                .map(move |(x, y)| (left.saturating_add(i64::from(x)), i64::from(y)))
        })
    }
}

/// Width of `glyph_count` glyphs with one-column gaps between them.
pub fn word_width(glyph_count: usize) -> i64 {
    if glyph_count == 0 {
        return 0;
    }
    let count = i64::try_from(glyph_count).unwrap_or(i64::MAX);
    count
        .saturating_mul(GLYPH_ADVANCE)
        .saturating_sub(GLYPH_GAP as i64)
}

/// Leftmost column for a word of `word_width` under `anchor`, before offset.
///
/// `center` rounds toward negative infinity, so a word wider than the window
/// still centers consistently.
pub fn base_left(anchor: Anchor, word_width: i64, window_width: i64) -> i64 {
    let slack = window_width.saturating_sub(word_width);
    match anchor {
        Anchor::Left => 0,
        Anchor::Right => slack,
        Anchor::Center => slack.div_euclid(2),
    }
}

/// One lit grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LitCell {
    /// Week column, `0..window.width()`.
    pub column: u32,
    /// Weekday row, `0..window.height()`.
    pub row: u32,
    /// Calendar date of the cell.
    pub date: NaiveDate,
    /// Commits to write on `date`.
    pub write_count: u32,
}

/// A complete placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    /// Uppercased word.
    pub word: String,
    /// Anchor used.
    pub anchor: Anchor,
    /// Extra offset applied after anchoring.
    pub offset: i64,
    /// Commits per lit cell.
    pub intensity: u32,
    /// Rendered word width in columns.
    pub word_width: i64,
    /// Leftmost column chosen by the anchor alone.
    pub base_left: i64,
    /// Leftmost column after the offset.
    pub final_left: i64,
    /// Window the cells were mapped into.
    pub window: Window,
    /// Lit cells, ordered by column then row.
    pub cells: Vec<LitCell>,
    /// On-pixels dropped because they fell outside the window.
    pub clipped: usize,
}

impl Plan {
    /// Total commits the plan asks for.
    pub fn total_writes(&self) -> u64 {
        self.cells
            .iter()
            .map(|cell| u64::from(cell.write_count))
            .sum()
    }

    /// Returns whether no cell landed inside the window.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns whether `(column, row)` is lit.
    pub fn is_lit(&self, column: u32, row: u32) -> bool {
        self.cells
            .binary_search_by_key(&(column, row), |cell| (cell.column, cell.row))
            .is_ok()
    }

    /// Earliest and latest lit dates.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.cells.iter().map(|cell| cell.date).min()?;
        let last = self.cells.iter().map(|cell| cell.date).max()?;
        Some((first, last))
    }
}

fn positive(field: &'static str, value: i64) -> PlanResult<u32> {
    match u32::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(PlanError::invalid(
            field,
            format!("must be a positive integer, got {value}"),
        )),
    }
}

/// Plans the lit cells for `request`.
///
/// `clock` supplies today's date when no start date is pinned. The result is
/// a pure function of the request and that date.
pub fn plan(request: &PlanRequest, clock: &dyn Clock) -> PlanResult<Plan> {
    let width = positive("window_width", request.window_width)?;
    let height = positive("window_height", request.window_height)?;
    let intensity = u32::try_from(request.intensity).map_err(|_| {
        PlanError::invalid(
            "intensity",
            format!(
                "must be between 0 and {}, got {}",
                u32::MAX,
                request.intensity
            ),
        )
    })?;

    let word = Word::new(&request.word)?;

    let window = match request.start_date {
        Some(start) => Window::pinned(start, width, height)?,
        None => Window::relative(clock, width, height)?,
    };

    let word_width = word.width();
    let base_left = base_left(request.anchor, word_width, i64::from(width));
    let final_left = base_left.saturating_add(request.offset);

    let mut cells = Vec::new();
    let mut clipped = 0;
    for (x, y) in word.pixels() {
        let column = final_left.saturating_add(x);
        let cell = u32::try_from(column)
            .ok()
            .zip(u32::try_from(y).ok())
            .and_then(|(column, row)| Some((column, row, window.date_for(column, row)?)));
        match cell {
            Some((column, row, date)) => cells.push(LitCell {
                column,
                row,
                date,
                write_count: intensity,
            }),
            None => clipped += 1,
        }
    }
    cells.sort_by_key(|cell| (cell.column, cell.row));

    Ok(Plan {
        word: word.text().to_string(),
        anchor: request.anchor,
        offset: request.offset,
        intensity,
        word_width,
        base_left,
        final_left,
        window,
        cells,
        clipped,
    })
}
