use chrono::{Datelike, Local, NaiveDate};

/// Wire format of every date sent to the remote service.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Resolve an invoice date relative to `today`.
///
/// A non-empty input is returned untouched; the remote service decides
/// whether it is a valid date. An empty input resolves to the last day of
/// the month preceding `today`.
pub fn resolve_date(input: &str, today: NaiveDate) -> String {
    if !input.is_empty() {
        return input.to_string();
    }
    last_day_of_previous_month(today).format(DATE_FORMAT).to_string()
}

/// [`resolve_date`] evaluated against the local calendar date.
pub fn resolve_date_today(input: &str) -> String {
    resolve_date(input, Local::now().date_naive())
}

/// Last calendar day of the month before the one containing `date`.
pub fn last_day_of_previous_month(date: NaiveDate) -> NaiveDate {
    // Day 1 always exists and 0001-01-01 has a predecessor in chrono's range.
    let first = date.with_day(1).unwrap_or(date);
    first.pred_opt().unwrap_or(first)
}
