use super::license::License;
use crate::license_compliance::policies::AttributePriority;
use std::hash::{Hash, Hasher};

const UNKNOWN_ORGANIZATION: &str = "Unknown Organization";
const UNKNOWN_NAME: &str = "Unknown Name";

/// Metadata packaged inside an artifact (e.g. `META-INF/MANIFEST.MF`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Manifest {
    pub name: Option<String>,
    pub version: Option<String>,
    pub vendor: Option<String>,
    pub url: Option<String>,
    pub license: Option<String>,
}

impl Manifest {
    /// Manifest of an artifact that has none
    pub const EMPTY: Manifest = Manifest {
        name: None,
        version: None,
        vendor: None,
        url: None,
        license: None,
    };

    pub fn new(
        name: Option<String>,
        version: Option<String>,
        vendor: Option<String>,
        url: Option<String>,
        license: Option<String>,
    ) -> Self {
        Self {
            name,
            version,
            vendor,
            url,
            license,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

/// A license entry as declared by a dependency's descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PomLicense {
    pub name: Option<String>,
    pub url: Option<String>,
    pub distribution: Option<String>,
    pub comments: Option<String>,
}

impl PomLicense {
    pub fn new(
        name: Option<String>,
        url: Option<String>,
        distribution: Option<String>,
        comments: Option<String>,
    ) -> Self {
        Self {
            name,
            url,
            distribution,
            comments,
        }
    }

    /// Entry naming a catalog license by its preferred name and URL
    pub fn for_license(license: License) -> Self {
        Self::new(
            Some(license.preferred_name().to_string()),
            Some(license.preferred_url().to_string()),
            None,
            None,
        )
    }
}

/// Project metadata declared by a dependency itself (its POM)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pom {
    pub organization: Option<String>,
    pub organization_url: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub url: Option<String>,
    licenses: Vec<PomLicense>,
}

impl Pom {
    pub fn new(
        organization: Option<String>,
        organization_url: Option<String>,
        name: Option<String>,
        version: Option<String>,
        url: Option<String>,
        licenses: Vec<PomLicense>,
    ) -> Self {
        let mut pom = Self {
            organization,
            organization_url,
            name,
            version,
            url,
            licenses: Vec::with_capacity(licenses.len()),
        };
        for license in licenses {
            pom.add_license(license);
        }
        pom
    }

    /// Adds a license entry unless an equal one is already declared
    pub fn add_license(&mut self, license: PomLicense) {
        if !self.licenses.contains(&license) {
            self.licenses.push(license);
        }
    }

    pub fn licenses(&self) -> &[PomLicense] {
        &self.licenses
    }
}

/// A license, notice or copying file discovered inside an artifact
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SomeFile {
    /// Lowercased basename without extension, e.g. `notice`
    pub name: String,
    /// Path of the entry inside the archive
    pub original_path: String,
    pub content: String,
}

impl SomeFile {
    pub fn new(name: String, original_path: String, content: String) -> Self {
        Self {
            name,
            original_path,
            content,
        }
    }
}

/// A resolved artifact file of a dependency, with everything known about its license
///
/// The detected licenses are computed once at construction by matching the
/// manifest license, every descriptor license entry (name and URL) and the
/// manual override against the catalog.
///
/// License files form a set: two artifacts holding the same files in a
/// different order are equal.
#[derive(Debug, Clone)]
pub struct Artifact {
    coordinates: String,
    manifest: Manifest,
    pom: Pom,
    license_files: Vec<SomeFile>,
    overridden_license: Option<String>,
    detected_licenses: Vec<License>,
}

/// Whether two deduplicated slices hold the same elements, in any order
pub(super) fn same_members<T: PartialEq>(left: &[T], right: &[T]) -> bool {
    left.len() == right.len() && left.iter().all(|item| right.contains(item))
}

impl PartialEq for Artifact {
    fn eq(&self, other: &Self) -> bool {
        self.coordinates == other.coordinates
            && self.manifest == other.manifest
            && self.pom == other.pom
            && self.overridden_license == other.overridden_license
            && same_members(&self.license_files, &other.license_files)
    }
}

impl Eq for Artifact {}

impl Hash for Artifact {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coordinates.hash(state);
        self.manifest.hash(state);
        self.pom.hash(state);
        self.overridden_license.hash(state);
        self.license_files.len().hash(state);
    }
}

impl Artifact {
    pub fn new(
        coordinates: String,
        manifest: Manifest,
        pom: Pom,
        license_files: Vec<SomeFile>,
        overridden_license: Option<String>,
    ) -> Self {
        let mut unique_files: Vec<SomeFile> = Vec::with_capacity(license_files.len());
        for file in license_files {
            if !unique_files.contains(&file) {
                unique_files.push(file);
            }
        }
        let detected_licenses =
            Self::detect_licenses(&manifest, &pom, overridden_license.as_deref());
        Self {
            coordinates,
            manifest,
            pom,
            license_files: unique_files,
            overridden_license,
            detected_licenses,
        }
    }

    fn detect_licenses(manifest: &Manifest, pom: &Pom, overridden: Option<&str>) -> Vec<License> {
        let mut candidates: Vec<Option<&str>> = vec![manifest.license.as_deref()];
        for entry in pom.licenses() {
            candidates.push(entry.name.as_deref());
            candidates.push(entry.url.as_deref());
        }
        candidates.push(overridden);

        let mut detected = Vec::new();
        for text in candidates.into_iter().flatten() {
            let matches = [License::resolve_by_name(text), License::resolve_by_url(text)];
            for license in matches.into_iter().flatten() {
                if !detected.contains(&license) {
                    detected.push(license);
                }
            }
        }
        detected
    }

    pub fn coordinates(&self) -> &str {
        &self.coordinates
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn pom(&self) -> &Pom {
        &self.pom
    }

    pub fn license_files(&self) -> &[SomeFile] {
        &self.license_files
    }

    pub fn overridden_license(&self) -> Option<&str> {
        self.overridden_license.as_deref()
    }

    /// Detected catalog licenses, in detection order, without duplicates
    pub fn detected_licenses(&self) -> &[License] {
        &self.detected_licenses
    }

    pub fn organization(&self) -> &str {
        AttributePriority::select(
            self.pom.organization.as_deref(),
            self.manifest.vendor.as_deref(),
            UNKNOWN_ORGANIZATION,
        )
    }

    pub fn organization_url(&self) -> &str {
        AttributePriority::select(self.pom.organization_url.as_deref(), None, "")
    }

    pub fn name(&self) -> &str {
        AttributePriority::select(
            self.pom.name.as_deref(),
            self.manifest.name.as_deref(),
            UNKNOWN_NAME,
        )
    }

    pub fn version(&self) -> &str {
        AttributePriority::select(
            self.pom.version.as_deref(),
            self.manifest.version.as_deref(),
            "",
        )
    }

    pub fn url(&self) -> &str {
        AttributePriority::select(self.pom.url.as_deref(), self.manifest.url.as_deref(), "")
    }
}
