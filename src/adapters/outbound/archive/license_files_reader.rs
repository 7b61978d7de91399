use super::{is_archive, open_archive, read_entry_text};
use crate::license_compliance::domain::SomeFile;
use crate::ports::outbound::LicenseFilesLoader;
use crate::shared::Result;
use anyhow::Context;
use std::path::Path;

const LICENSE_FILE_NAMES: [&str; 5] = ["license", "copyright", "copying", "copying.lesser", "notice"];

/// ArchiveLicenseFilesLoader adapter extracting license files from archives
///
/// An entry is kept when its file name, lowercased and without its last
/// extension, is one of `license`, `copyright`, `copying`,
/// `copying.lesser` or `notice`, wherever it sits in the archive.
pub struct ArchiveLicenseFilesLoader;

impl ArchiveLicenseFilesLoader {
    pub fn new() -> Self {
        Self
    }

    /// Matching key of an entry path, e.g. `META-INF/LICENSE.txt` -> `license`
    fn license_file_key(entry_name: &str) -> String {
        let file_name = entry_name.rsplit('/').next().unwrap_or(entry_name);
        let stem = match file_name.rfind('.') {
            Some(index) => &file_name[..index],
            None => file_name,
        };
        stem.to_lowercase()
    }
}

impl Default for ArchiveLicenseFilesLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl LicenseFilesLoader for ArchiveLicenseFilesLoader {
    fn load_license_files(&self, file: &Path) -> Result<Vec<SomeFile>> {
        if !is_archive(file) {
            return Ok(Vec::new());
        }

        let mut archive = open_archive(file)?;
        let mut found = Vec::new();
        for index in 0..archive.len() {
            let entry = archive
                .by_index(index)
                .with_context(|| format!("Failed to read entry {} of {}", index, file.display()))?;
            if entry.is_dir() {
                continue;
            }
            let name = entry.name().to_string();
            let key = Self::license_file_key(&name);
            if !LICENSE_FILE_NAMES.contains(&key.as_str()) {
                continue;
            }
            let size = entry.size();
            let content = read_entry_text(entry, &name, size, file)?;
            found.push(SomeFile::new(key, name, content));
        }
        Ok(found)
    }
}
