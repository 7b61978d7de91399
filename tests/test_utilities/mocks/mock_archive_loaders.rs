use honker::license_compliance::domain::{Gav, Manifest, Pom, PomLicense, SomeFile};
use honker::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock ManifestLoader keyed by artifact file
///
/// Files without a registered manifest have none.
#[derive(Default)]
pub struct MockManifestLoader {
    manifests: HashMap<PathBuf, Manifest>,
    failing: Option<PathBuf>,
}

impl MockManifestLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest(mut self, file: PathBuf, vendor: &str, license: &str) -> Self {
        self.manifests.insert(
            file,
            Manifest::new(
                None,
                None,
                Some(vendor.to_string()),
                None,
                Some(license.to_string()),
            ),
        );
        self
    }

    pub fn with_failure(mut self, file: PathBuf) -> Self {
        self.failing = Some(file);
        self
    }
}

impl ManifestLoader for MockManifestLoader {
    fn load_manifest(&self, file: &Path) -> Result<Manifest> {
        if self.failing.as_deref() == Some(file) {
            anyhow::bail!("Mock archive failure: invalid Zip archive");
        }
        Ok(self.manifests.get(file).cloned().unwrap_or(Manifest::EMPTY))
    }
}

/// Mock PomLoader keyed by artifact file
#[derive(Default)]
pub struct MockPomLoader {
    poms: HashMap<PathBuf, Pom>,
}

impl MockPomLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a descriptor with an organization and one license entry
    pub fn with_pom(
        mut self,
        file: PathBuf,
        organization: &str,
        license_name: Option<&str>,
        license_url: Option<&str>,
    ) -> Self {
        let license = PomLicense::new(
            license_name.map(str::to_string),
            license_url.map(str::to_string),
            None,
            None,
        );
        self.poms.insert(
            file,
            Pom::new(
                Some(organization.to_string()),
                None,
                None,
                None,
                None,
                vec![license],
            ),
        );
        self
    }
}

impl PomLoader for MockPomLoader {
    fn load_pom(&self, file: &Path, gav: &Gav) -> Result<Pom> {
        let mut pom = self.poms.get(file).cloned().unwrap_or_default();
        if pom.version.is_none() {
            pom.version = Some(gav.version().to_string());
        }
        Ok(pom)
    }
}

/// Mock LicenseFilesLoader keyed by artifact file
#[derive(Default)]
pub struct MockLicenseFilesLoader {
    files: HashMap<PathBuf, Vec<SomeFile>>,
}

impl MockLicenseFilesLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, file: PathBuf, name: &str, content: &str) -> Self {
        let original_path = format!("{}!/META-INF/{}", file.display(), name.to_uppercase());
        self.files.entry(file).or_default().push(SomeFile::new(
            name.to_string(),
            original_path,
            content.to_string(),
        ));
        self
    }
}

impl LicenseFilesLoader for MockLicenseFilesLoader {
    fn load_license_files(&self, file: &Path) -> Result<Vec<SomeFile>> {
        Ok(self.files.get(file).cloned().unwrap_or_default())
    }
}
