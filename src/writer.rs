use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::catalog::DatedName;
use crate::date::guess;
use crate::matcher;

/// Extras grouped under the date key of the catalog entry they precede.
///
/// Keys keep the order in which they were first pushed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResultMapping {
    entries: Vec<(String, Vec<String>)>,
}

impl ResultMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `filename` to the list under `key`, creating the key if needed.
    pub fn push(&mut self, key: String, filename: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, files)) => files.push(filename),
            None => self.entries.push((key, vec![filename])),
        }
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of files across all keys.
    pub fn file_count(&self) -> usize {
        self.entries.iter().map(|(_, files)| files.len()).sum()
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, files)| files.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for ResultMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, files) in &self.entries {
            map.serialize_entry(key, files)?;
        }
        map.end()
    }
}

/// Format a catalog date as the `yy.mm.dd` output key.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%y.%m.%d").to_string()
}

/// Match each dated extra to the next catalog date.
///
/// `files` should already be sorted; undated and unmatched files are left out.
pub fn build_mapping(files: &[String], dates: &[DatedName]) -> ResultMapping {
    let mut mapping = ResultMapping::new();

    for filename in files {
        let Some(file_date) = guess::date_from_name(filename) else {
            continue;
        };
        let Some(next) = matcher::next_after(dates, file_date) else {
            continue;
        };
        mapping.push(date_key(next.date), filename.clone());
    }

    mapping
}

/// Write the mapping as indented JSON, replacing any existing file.
pub fn write_mapping(mapping: &ResultMapping, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, mapping)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::DateSource;
    use tempfile::tempdir;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn catalog(dates: &[NaiveDate]) -> Vec<DatedName> {
        dates
            .iter()
            .map(|&date| DatedName {
                date,
                name: None,
                source: DateSource::Field,
            })
            .collect()
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_date_key() {
        assert_eq!(date_key(ymd(2024, 3, 5)), "24.03.05");
        assert_eq!(date_key(ymd(2009, 12, 31)), "09.12.31");
        assert_eq!(date_key(ymd(2000, 1, 1)), "00.01.01");
    }

    #[test]
    fn test_build_mapping_groups_by_next_date() {
        let dates = catalog(&[ymd(2024, 1, 10), ymd(2024, 3, 5)]);
        let files = names(&[
            "23.12.24 eve.jpg",
            "24.01.10 same-day.png",
            "24.02.01 feb.mp4",
            "24.04.01 too-late.jpg",
            "cover.jpg",
            "24.02.30 bogus.jpg",
        ]);

        let mapping = build_mapping(&files, &dates);
        assert_eq!(mapping.keys().collect::<Vec<_>>(), vec!["24.01.10", "24.03.05"]);
        assert_eq!(mapping.get("24.01.10").unwrap(), ["23.12.24 eve.jpg"]);
        assert_eq!(
            mapping.get("24.03.05").unwrap(),
            ["24.01.10 same-day.png", "24.02.01 feb.mp4"]
        );
        assert_eq!(mapping.file_count(), 3);
    }

    #[test]
    fn test_build_mapping_empty_catalog() {
        let files = names(&["24.02.01 feb.mp4"]);
        assert!(build_mapping(&files, &[]).is_empty());
    }

    #[test]
    fn test_keys_follow_file_order() {
        // "a..." sorts before "b..." but maps to the later catalog date
        let dates = catalog(&[ymd(2024, 1, 10), ymd(2024, 3, 5)]);
        let files = names(&["24-02-01 a.jpg", "24_01_01 b.jpg"]);

        let mapping = build_mapping(&files, &dates);
        assert_eq!(mapping.keys().collect::<Vec<_>>(), vec!["24.03.05", "24.01.10"]);
    }

    #[test]
    fn test_write_mapping_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("extras.json");
        std::fs::write(&path, "stale content that is much longer than the new output").unwrap();

        let mut mapping = ResultMapping::new();
        mapping.push("24.03.05".to_string(), "24.02.01 Café.jpg".to_string());
        mapping.push("24.03.05".to_string(), "24.02.02 b.jpg".to_string());
        mapping.push("24.01.10".to_string(), "24.01.01 a.jpg".to_string());
        write_mapping(&mapping, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let expected = "{\n  \"24.03.05\": [\n    \"24.02.01 Café.jpg\",\n    \"24.02.02 b.jpg\"\n  ],\n  \"24.01.10\": [\n    \"24.01.01 a.jpg\"\n  ]\n}";
        assert_eq!(written, expected);
    }

    #[test]
    fn test_write_empty_mapping() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("extras.json");
        write_mapping(&ResultMapping::new(), &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }
}
