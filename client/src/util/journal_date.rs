//! Journal day addressing.
//!
//! A journal day lives at `/journal#daily/<YYYY-MM-DD>`. Dates are calendar
//! days in UTC so every client agrees on what "today" means.

#[cfg(test)]
#[path = "journal_date_test.rs"]
mod journal_date_test;

use chrono::{DateTime, NaiveDate, Utc};

pub const JOURNAL_PATH: &str = "/journal";
const DAILY_PREFIX: &str = "daily/";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Location string for one journal day.
pub fn journal_target(date: NaiveDate) -> String {
    format!("{JOURNAL_PATH}#{DAILY_PREFIX}{}", date.format(DATE_FORMAT))
}

/// Location string for the UTC calendar day containing `now`.
pub fn journal_target_at(now: DateTime<Utc>) -> String {
    journal_target(now.date_naive())
}

/// Today's calendar date in UTC.
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Why a location hash does not name a journal day.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DailyHashError {
    #[error("No journal day selected")]
    NotDaily(String),

    #[error("Not a valid journal date: {date}")]
    InvalidDate {
        date: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Parse a location hash of the form `#daily/YYYY-MM-DD`. The `#` is optional.
///
/// # Errors
///
/// [`DailyHashError::NotDaily`] when the hash is not a `daily/` hash, and
/// [`DailyHashError::InvalidDate`] when the date part is not a calendar day.
pub fn parse_daily_hash(hash: &str) -> Result<NaiveDate, DailyHashError> {
    let raw = hash.strip_prefix('#').unwrap_or(hash);
    let date = raw
        .strip_prefix(DAILY_PREFIX)
        .ok_or_else(|| DailyHashError::NotDaily(hash.to_owned()))?;
    NaiveDate::parse_from_str(date, DATE_FORMAT)
        .map_err(|source| DailyHashError::InvalidDate { date: date.to_owned(), source })
}

/// Previous and next calendar days. Saturates at chrono's date range limits.
pub fn adjacent_days(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    (date.pred_opt().unwrap_or(date), date.succ_opt().unwrap_or(date))
}
