use chrono::NaiveDate;

use crate::catalog::DatedName;

/// First catalog entry dated strictly after `date`.
///
/// `dates` must be sorted ascending; on equal dates the earliest entry wins.
pub fn next_after(dates: &[DatedName], date: NaiveDate) -> Option<&DatedName> {
    dates.iter().find(|d| d.date > date)
}
