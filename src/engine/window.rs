use std::fmt;

use chrono::{DateTime, Datelike, Days, NaiveDate, TimeZone, Weekday};

use crate::models::RunMode;
use crate::models::api::SearchRequest;

const DAILY_LOOKBACK_DAYS: u64 = 2;
/// Monday runs reach back over the weekend to Thursday
const MONDAY_LOOKBACK_DAYS: u64 = 4;
const WEEKLY_LOOKBACK_DAYS: u64 = 7;

/// Inclusive range of filing dates to search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl SearchWindow {
    /// Days between the two endpoints
    pub fn span_days(&self) -> i64 {
        (self.to - self.from).num_days()
    }

    pub fn to_request(&self, court_id: &str) -> SearchRequest {
        SearchRequest {
            date_filed_from: self.from.format("%Y-%m-%d").to_string(),
            date_filed_to: self.to.format("%Y-%m-%d").to_string(),
            court_id: vec![court_id.to_string()],
        }
    }
}

impl fmt::Display for SearchWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.from.format("%Y-%m-%d"), self.to.format("%Y-%m-%d"))
    }
}

/// Search window for a run at `now`, using the calendar date in `now`'s time zone
pub fn compute_window<Tz: TimeZone>(mode: RunMode, now: &DateTime<Tz>) -> SearchWindow {
    window_ending_on(mode, now.date_naive())
}

/// Search window ending on `today`
pub fn window_ending_on(mode: RunMode, today: NaiveDate) -> SearchWindow {
    let lookback = match mode {
        RunMode::Daily if today.weekday() == Weekday::Mon => MONDAY_LOOKBACK_DAYS,
        RunMode::Daily => DAILY_LOOKBACK_DAYS,
        RunMode::Weekly => WEEKLY_LOOKBACK_DAYS,
    };

    // Subtracting a handful of days from a valid date cannot leave chrono's range
    let from = today.checked_sub_days(Days::new(lookback)).unwrap_or(NaiveDate::MIN);
    SearchWindow { from, to: today }
}
