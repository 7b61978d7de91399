//! Archive adapters reading artifact metadata from jar/zip files
//!
//! Supported archives are recognized by extension. Any other file type
//! yields empty metadata rather than an error.

mod license_files_reader;
mod manifest_reader;
mod pom_reader;

pub use license_files_reader::ArchiveLicenseFilesLoader;
pub use manifest_reader::JarManifestLoader;
pub use pom_reader::EmbeddedPomLoader;

use crate::shared::security::{self, MAX_ENTRY_SIZE};
use crate::shared::Result;
use anyhow::Context;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

const ARCHIVE_EXTENSIONS: [&str; 4] = ["zip", "jar", "war", "ear"];

/// Lowercased extension of `path`, if any
fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
}

fn is_archive(path: &Path) -> bool {
    extension_of(path).is_some_and(|ext| ARCHIVE_EXTENSIONS.contains(&ext.as_str()))
}

/// Opens `path` as a zip archive after the usual file checks
fn open_archive(path: &Path) -> Result<ZipArchive<File>> {
    security::validate_regular_file(path, "artifact", u64::MAX)?;
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    ZipArchive::new(file).with_context(|| format!("Failed to read archive {}", path.display()))
}

/// Reads entry `name` of `archive` as text; `None` when there is no such entry
fn read_entry(archive: &mut ZipArchive<File>, path: &Path, name: &str) -> Result<Option<String>> {
    match archive.by_name(name) {
        Ok(entry) => {
            let size = entry.size();
            read_entry_text(entry, name, size, path).map(Some)
        }
        Err(ZipError::FileNotFound) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to read {} in {}", name, path.display())),
    }
}

/// Reads an entry as UTF-8, replacing invalid sequences
fn read_entry_text(entry: impl Read, name: &str, size: u64, path: &Path) -> Result<String> {
    let entry_path = path.join(name);
    security::validate_size(size, &entry_path, MAX_ENTRY_SIZE)?;
    let mut bytes = Vec::new();
    entry
        .take(MAX_ENTRY_SIZE + 1)
        .read_to_end(&mut bytes)
        .with_context(|| format!("Failed to read {}", entry_path.display()))?;
    security::validate_size(bytes.len() as u64, &entry_path, MAX_ENTRY_SIZE)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
