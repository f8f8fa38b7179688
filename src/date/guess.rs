use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// `YY.MM.DD` at the start of a name; each separator is any of `.`, `-`, `_`.
static PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<yy>[0-9]{2})[._-](?P<mm>[0-9]{2})[._-](?P<dd>[0-9]{2})").unwrap()
});

/// Two-digit years always land in this century.
const CENTURY: i32 = 2000;

/// Read the `YY.MM.DD` prefix of a file or track name.
///
/// Returns `None` when the prefix is missing or names a day that does not
/// exist (`23.02.30`, `24.13.01`).
pub fn date_from_name(name: &str) -> Option<NaiveDate> {
    let caps = PREFIX_RE.captures(name)?;
    let yy: i32 = caps.name("yy")?.as_str().parse().ok()?;
    let mm: u32 = caps.name("mm")?.as_str().parse().ok()?;
    let dd: u32 = caps.name("dd")?.as_str().parse().ok()?;
    NaiveDate::from_ymd_opt(CENTURY + yy, mm, dd)
}
