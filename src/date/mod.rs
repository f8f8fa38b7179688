pub mod guess;
pub mod iso;

use chrono::NaiveDate;

/// Where a catalog date came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    /// The record's own `date` field
    Field,
    /// The `YY.MM.DD` prefix of the record name
    Name,
}

pub struct DateResult {
    pub date: NaiveDate,
    pub source: DateSource,
}

/// Resolve a catalog record's date, explicit field first.
pub fn record_date(explicit: Option<&str>, name: Option<&str>) -> Option<DateResult> {
    // 1. Explicit ISO date
    if let Some(date) = explicit.and_then(iso::parse_explicit_date) {
        return Some(DateResult { date, source: DateSource::Field });
    }

    // 2. Name prefix
    if let Some(date) = name.and_then(guess::date_from_name) {
        return Some(DateResult { date, source: DateSource::Name });
    }

    None
}
