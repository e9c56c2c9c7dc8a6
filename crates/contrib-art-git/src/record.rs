//! Commit records derived from a plan.
//!
//! Everything here is pure. Every cell is checked before any commit is
//! produced, so a day that cannot hold its commits is reported before the
//! first commit is made; the commits themselves are produced lazily.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use contrib_art_core::{LitCell, Plan};

use crate::error::{EmitError, EmitResult};

/// Default hour of day for the first commit on a lit date.
pub const DEFAULT_COMMIT_HOUR: u32 = 12;

/// Timestamp format handed to git (ISO-8601, local time, no zone).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Commit spacing, in seconds, when a cell's commits fit a minute apart.
pub const MINUTE_SPACING: u32 = 60;
/// Commit spacing, in seconds, for cells too busy for minute spacing.
pub const SECOND_SPACING: u32 = 1;

/// One commit to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCommit {
    /// Cell the commit lights.
    pub cell: LitCell,
    /// Zero-based index among the cell's commits.
    pub index: u32,
    /// Author and committer date.
    pub timestamp: NaiveDateTime,
}

impl PendingCommit {
    /// Timestamp formatted for `GIT_AUTHOR_DATE` / `GIT_COMMITTER_DATE`.
    pub fn git_date(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// Commit message, e.g. `pixel col=3 row=2 [1/5]`.
    pub fn message(&self) -> String {
        format!(
            "pixel col={} row={} [{}/{}]",
            self.cell.column,
            self.cell.row,
            self.index + 1,
            self.cell.write_count
        )
    }

    /// Line appended to the art file before committing.
    pub fn art_line(&self) -> String {
        format!(
            "{} col={} row={}\n",
            self.git_date(),
            self.cell.column,
            self.cell.row
        )
    }
}

/// Most commits that fit on one day starting at `hour:00:00`, one second
/// apart and ending no later than 23:59:59.
pub fn max_commits_per_day(hour: u32) -> u32 {
    24u32.saturating_sub(hour) * 3600
}

/// Seconds between consecutive commits for a cell with `count` commits.
///
/// Minute spacing while the commits fit before midnight, second spacing
/// after that; `None` if they do not fit even a second apart.
pub fn commit_spacing(hour: u32, count: u32) -> Option<u32> {
    let max = max_commits_per_day(hour);
    if count <= max / MINUTE_SPACING {
        Some(MINUTE_SPACING)
    } else if count <= max {
        Some(SECOND_SPACING)
    } else {
        None
    }
}

/// Timestamp of the `index`-th commit on `date`: `hour:00:00` plus
/// `index * spacing` seconds.
///
/// Returns `None` when the timestamp would not fall on `date`.
pub fn commit_timestamp(
    date: NaiveDate,
    hour: u32,
    index: u32,
    spacing: u32,
) -> Option<NaiveDateTime> {
    let offset = i64::from(index) * i64::from(spacing);
    let timestamp = date
        .and_hms_opt(hour, 0, 0)?
        .checked_add_signed(Duration::seconds(offset))?;
    (timestamp.date() == date).then_some(timestamp)
}

/// Spacing for `cell`, checking that its first and last commits land on
/// the cell's date.
fn cell_spacing(cell: &LitCell, hour: u32) -> EmitResult<u32> {
    let out_of_range = || EmitError::TimestampOutOfRange { date: cell.date };
    commit_timestamp(cell.date, hour, 0, MINUTE_SPACING).ok_or_else(out_of_range)?;
    if cell.write_count == 0 {
        return Ok(MINUTE_SPACING);
    }

    let spacing =
        commit_spacing(hour, cell.write_count).ok_or_else(|| EmitError::TooManyCommits {
            date: cell.date,
            count: cell.write_count,
            max: max_commits_per_day(hour),
        })?;
    commit_timestamp(cell.date, hour, cell.write_count - 1, spacing).ok_or_else(out_of_range)?;
    Ok(spacing)
}

/// Expands `plan` into commits, in plan order.
///
/// Every cell is checked up front: `TooManyCommits` if its commits do not
/// fit on its date, `TimestampOutOfRange` if the date cannot carry a
/// timestamp at `hour`. The returned iterator produces commits one at a
/// time; [`Plan::total_writes`] gives their number.
pub fn pending_commits(
    plan: &Plan,
    hour: u32,
) -> EmitResult<impl Iterator<Item = EmitResult<PendingCommit>> + '_> {
    let spacings = plan
        .cells
        .iter()
        .map(|cell| cell_spacing(cell, hour))
        .collect::<EmitResult<Vec<u32>>>()?;

    Ok(plan
        .cells
        .iter()
        .zip(spacings)
        .flat_map(move |(cell, spacing)| {
            (0..cell.write_count).map(move |index| {
                commit_timestamp(cell.date, hour, index, spacing)
                    .map(|timestamp| PendingCommit {
                        cell: *cell,
                        index,
                        timestamp,
                    })
                    .ok_or(EmitError::TimestampOutOfRange { date: cell.date })
            })
        }))
}
