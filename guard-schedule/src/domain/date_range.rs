use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Days in the default window, today included
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// Inclusive calendar range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// `[start, start + 6]`
    pub fn week_from(start: NaiveDate) -> Self {
        Self {
            start,
            end: start + Duration::days(DEFAULT_WINDOW_DAYS - 1),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// number of days, 0 for a reversed range
    pub fn len_days(&self) -> usize {
        let diff = (self.end - self.start).num_days();
        if diff < 0 {
            0
        } else {
            diff as usize + 1
        }
    }

    /// The seven days before `start`
    ///
    /// ```text
    ///  prev           self
    /// [s-7 .. s-1]   [s .. e]
    /// ```
    pub fn previous_week(&self) -> Self {
        Self {
            start: self.start - Duration::days(7),
            end: self.start - Duration::days(1),
        }
    }

    /// The seven days after `end`
    ///
    /// ```text
    ///  self       next
    /// [s .. e]   [e+1 .. e+7]
    /// ```
    pub fn next_week(&self) -> Self {
        Self {
            start: self.end + Duration::days(1),
            end: self.end + Duration::days(7),
        }
    }
}

/// Fills in the default window when no range is selected
pub fn effective_range(range: Option<DateRange>, today: NaiveDate) -> DateRange {
    range.unwrap_or_else(|| DateRange::week_from(today))
}

/// Every day of the range in ascending order, both ends included.
///
/// A reversed range resolves to no days.
pub fn resolve_days(range: Option<DateRange>, today: NaiveDate) -> Vec<NaiveDate> {
    let range = effective_range(range, today);

    if range.end < range.start {
        tracing::warn!(start = %range.start, end = %range.end, "date range is reversed, no days resolved");
        return Vec::new();
    }

    range.start
        .iter_days()
        .take(range.len_days())
        .collect()
}
