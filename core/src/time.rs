use chrono::{Datelike, Duration, NaiveDate};

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Canonical string key for a calendar date ("YYYY-MM-DD", zero-padded).
/// The sparse series is keyed exclusively by this, so lookups are exact
/// string matches rather than timestamp comparisons.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Inverse of `date_key`. Keys that do not parse belong to no month.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()
}

pub fn is_same_day(a: NaiveDate, b: NaiveDate) -> bool {
    a == b
}

/// Strict "before", comparing whole days only. Callers holding a
/// timestamp normalize with `date_naive()` first.
pub fn is_before(date: NaiveDate, reference: NaiveDate) -> bool {
    date < reference
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap()
}

/// Last day of the month containing `date`, derived as first-of-next-month
/// minus one day. No month-length table; leap February falls out of chrono.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1).unwrap()
    };
    next_month - Duration::days(1)
}

/// Every day of the month containing `date`, in order, day 1 to the last.
pub fn month_days(date: NaiveDate) -> Vec<NaiveDate> {
    let last_day = last_of_month(date).day();
    (1..=last_day)
        .map(|day| NaiveDate::from_ymd_opt(date.year(), date.month(), day).unwrap())
        .collect()
}
