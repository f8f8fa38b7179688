pub mod catalog;
pub mod date;
pub mod extras;
pub mod matcher;
pub mod writer;

use std::path::PathBuf;

use catalog::Catalog;
use date::DateSource;

/// Manifest read by default, relative to the working directory.
pub const MANIFEST_FILE: &str = "manifest.json";
/// Directory scanned for extras by default.
pub const EXTRAS_DIR: &str = "media/extras";
/// Mapping written by default.
pub const OUTPUT_FILE: &str = "extras.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOptions {
    pub manifest: PathBuf,
    pub extras_dir: PathBuf,
    pub output: PathBuf,
}

impl Default for ProcessOptions {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from(MANIFEST_FILE),
            extras_dir: PathBuf::from(EXTRAS_DIR),
            output: PathBuf::from(OUTPUT_FILE),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    /// Records in the manifest list
    pub catalog_records: u64,
    /// Manifest entries that yielded a date
    pub catalog_dates: u64,
    /// Media files found in the extras directory
    pub media_files: u64,
    /// Media files placed in the mapping
    pub files_matched: u64,
    /// Keys in the written mapping
    pub entries: u64,
}

/// Load the manifest, scan the extras, match them and write the mapping.
pub fn process(options: &ProcessOptions) -> anyhow::Result<ProcessResult> {
    // Stage 1: Catalog dates
    let catalog = catalog::load_catalog(&options.manifest)?;
    report_catalog(&catalog);
    let dates = &catalog.dated;

    // Stage 2: Extras listing
    let files = extras::list_media(&options.extras_dir)?;
    eprintln!("Media files in {}: {}", options.extras_dir.display(), files.len());

    // Stage 3: Match
    let mapping = writer::build_mapping(&files, dates);
    let files_matched = mapping.file_count();
    eprintln!(
        "Matched {} files, {} left without a later manifest date",
        files_matched,
        files.len() - files_matched
    );

    // Stage 4: Write
    writer::write_mapping(&mapping, &options.output)?;

    Ok(ProcessResult {
        catalog_records: catalog.records as u64,
        catalog_dates: dates.len() as u64,
        media_files: files.len() as u64,
        files_matched: files_matched as u64,
        entries: mapping.len() as u64,
    })
}

fn report_catalog(catalog: &Catalog) {
    eprintln!(
        "Dated manifest entries: {}/{} ({} from date field, {} from name, {} undated)",
        catalog.dated.len(),
        catalog.records,
        catalog.count_from(DateSource::Field),
        catalog.count_from(DateSource::Name),
        catalog.undated()
    );
}
