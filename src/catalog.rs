use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{bail, Context};
use chrono::NaiveDate;
use serde_json::Value;

use crate::date::{self, DateSource};

/// Key under which a manifest object keeps its record list.
pub const RECORDS_KEY: &str = "tracks";

/// A catalog entry reduced to its date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatedName {
    pub date: NaiveDate,
    /// Record name, absent when the record was dated by its `date` field alone
    pub name: Option<String>,
    pub source: DateSource,
}

/// A loaded manifest.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Records in the manifest list, dated or not
    pub records: usize,
    /// Dated entries, oldest first
    pub dated: Vec<DatedName>,
}

impl Catalog {
    /// Records that yielded no date.
    pub fn undated(&self) -> usize {
        self.records - self.dated.len()
    }

    /// Dated entries whose date came from `source`.
    pub fn count_from(&self, source: DateSource) -> usize {
        self.dated.iter().filter(|d| d.source == source).count()
    }
}

/// Read the manifest at `path` and date its records.
pub fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open manifest {}", path.display()))?;
    let value: Value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse manifest {}", path.display()))?;
    let records = records(&value)
        .with_context(|| format!("Unexpected manifest layout in {}", path.display()))?;
    Ok(Catalog {
        records: records.len(),
        dated: dated_names(records),
    })
}

/// Locate the record list: `{"tracks": [...]}` first, otherwise the value itself.
pub fn records(value: &Value) -> anyhow::Result<&[Value]> {
    let list = value.get(RECORDS_KEY).unwrap_or(value);
    match list.as_array() {
        Some(items) => Ok(items.as_slice()),
        None => bail!("expected a list of records or an object with a \"{}\" list", RECORDS_KEY),
    }
}

/// Date every record that has a usable date and sort them (stable) by date.
///
/// Records without a date are dropped without notice.
pub fn dated_names(records: &[Value]) -> Vec<DatedName> {
    let mut dated: Vec<DatedName> = records
        .iter()
        .filter_map(|record| {
            let explicit = record.get("date").and_then(Value::as_str);
            let name = record.get("name").and_then(Value::as_str);
            let result = date::record_date(explicit, name)?;
            Some(DatedName {
                date: result.date,
                name: name.map(str::to_string),
                source: result.source,
            })
        })
        .collect();

    dated.sort_by_key(|d| d.date);
    dated
}
