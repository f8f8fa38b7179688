use chrono::{NaiveDate, NaiveTime};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `YYYY-MM-DD` or `YYYYMMDD`, optionally followed by `T`/space and a time.
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?P<y>[0-9]{4})-(?P<m>[0-9]{2})-(?P<d>[0-9]{2})|(?P<by>[0-9]{4})(?P<bm>[0-9]{2})(?P<bd>[0-9]{2}))(?:[T ](?P<time>.+))?$",
    )
    .unwrap()
});

/// `HH[:MM[:SS[.fff]]]` (colons optional) with an optional `Z` or `±HH[:MM]` offset.
static TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<h>[0-9]{2})(?::?(?P<mi>[0-9]{2})(?::?(?P<s>[0-9]{2})(?:[.,][0-9]{1,9})?)?)?(?:Z|[+-](?P<oh>[0-9]{2})(?::?(?P<om>[0-9]{2}))?)?$",
    )
    .unwrap()
});

fn number(caps: &Captures, name: &str) -> Option<u32> {
    caps.name(name).map_or(Some(0), |m| m.as_str().parse().ok())
}

fn valid_time(s: &str) -> bool {
    let Some(caps) = TIME_RE.captures(s) else {
        return false;
    };
    let (Some(h), Some(mi), Some(sec), Some(oh), Some(om)) = (
        number(&caps, "h"),
        number(&caps, "mi"),
        number(&caps, "s"),
        number(&caps, "oh"),
        number(&caps, "om"),
    ) else {
        return false;
    };
    NaiveTime::from_hms_opt(h, mi, sec).is_some() && oh < 24 && om < 60
}

/// Parse the explicit `date` field of a catalog record.
///
/// Only ISO 8601 calendar dates are accepted, with an optional time of day.
/// The time is validated but the calendar date is kept as written, offsets
/// are not applied.
pub fn parse_explicit_date(s: &str) -> Option<NaiveDate> {
    let caps = DATE_RE.captures(s)?;
    if let Some(time) = caps.name("time") {
        if !valid_time(time.as_str()) {
            return None;
        }
    }

    let (y, m, d) = match caps.name("y") {
        Some(y) => (y, caps.name("m")?, caps.name("d")?),
        None => (caps.name("by")?, caps.name("bm")?, caps.name("bd")?),
    };
    let year: i32 = y.as_str().parse().ok()?;
    if year < 1 {
        return None;
    }
    NaiveDate::from_ymd_opt(year, m.as_str().parse().ok()?, d.as_str().parse().ok()?)
}
