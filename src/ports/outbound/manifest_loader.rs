use crate::license_compliance::domain::Manifest;
use crate::shared::Result;
use std::path::Path;

/// ManifestLoader port for reading the manifest packaged with an artifact
pub trait ManifestLoader {
    /// Loads the manifest of `file`
    ///
    /// Returns [`Manifest::EMPTY`] when the file has no manifest or is of an
    /// unsupported type.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read
    fn load_manifest(&self, file: &Path) -> Result<Manifest>;
}
