use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use walkdir::WalkDir;

/// Image and video extensions accepted as extras (matched case-insensitively)
const MEDIA_EXTENSIONS: &[&str] = &[
    "jpg",  // image
    "jpeg", // image
    "png",  // image
    "gif",  // image
    "webp", // image
    "mp4",  // video
    "mov",  // video
];

/// Check if a file name ends in one of the media extensions
pub fn is_media_name(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => MEDIA_EXTENSIONS.iter().any(|m| ext.eq_ignore_ascii_case(m)),
        None => false,
    }
}

/// List media file names directly inside `dir`, sorted by name.
///
/// Names that are not valid UTF-8 are skipped.
pub fn list_media(dir: &Path) -> anyhow::Result<Vec<String>> {
    let meta = fs::metadata(dir)
        .with_context(|| format!("Failed to read extras directory {}", dir.display()))?;
    if !meta.is_dir() {
        bail!("Extras path is not a directory: {}", dir.display());
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("Failed to list extras in {}", dir.display()))?;
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        if is_media_name(name) {
            names.push(name.to_string());
        }
    }

    names.sort();
    Ok(names)
}
