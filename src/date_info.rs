use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateInfo {
    pub long_date: String,
    pub week_number: u32,
    pub month_name: String,
}

impl DateInfo {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            long_date: date.format("%A, %B %-d, %Y").to_string(),
            week_number: approximate_week_number(date),
            month_name: date.format("%B").to_string(),
        }
    }
}

/// `ceil((days since Jan 1 + weekday of Jan 1 + 1) / 7)`, weekdays counted
/// from Sunday = 0.
///
/// This is not ISO-8601 week numbering and can disagree with it near the
/// start and end of the year; the header shows it exactly as computed.
pub fn approximate_week_number(date: NaiveDate) -> u32 {
    let elapsed = date.ordinal0();
    let jan1_weekday = NaiveDate::from_yo_opt(date.year(), 1)
        .map(|jan1| jan1.weekday().num_days_from_sunday())
        .unwrap_or_default();
    (elapsed + jan1_weekday + 1).div_ceil(7)
}
