use crate::license_compliance::domain::SomeFile;
use crate::shared::Result;
use std::path::Path;

/// LicenseFilesLoader port for extracting license, notice and copying files
pub trait LicenseFilesLoader {
    /// Returns the license-bearing files contained in `file`
    ///
    /// # Errors
    /// Returns an error if the artifact cannot be read
    fn load_license_files(&self, file: &Path) -> Result<Vec<SomeFile>>;
}
