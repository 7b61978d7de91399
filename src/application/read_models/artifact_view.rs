//! Artifact view structs for read model
//!
//! These structs provide a flattened, serializable view of artifact data.

use crate::license_compliance::domain::{Artifact, License};
use serde::Serialize;

/// View representation of a resolved artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactView {
    /// Full artifact coordinates, `group:artifact:version:type[:classifier]`
    pub coordinates: String,
    pub organization: String,
    pub organization_url: String,
    pub name: String,
    pub version: String,
    pub url: String,
    /// Catalog licenses detected for the artifact
    pub licenses: Vec<LicenseView>,
    /// License string found in the archive manifest, as written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_license: Option<String>,
    /// License declared through configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overridden_license: Option<String>,
    /// Archive paths of the bundled license files
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub license_files: Vec<String>,
}

impl From<&Artifact> for ArtifactView {
    fn from(artifact: &Artifact) -> Self {
        Self {
            coordinates: artifact.coordinates().to_string(),
            organization: artifact.organization().to_string(),
            organization_url: artifact.organization_url().to_string(),
            name: artifact.name().to_string(),
            version: artifact.version().to_string(),
            url: artifact.url().to_string(),
            licenses: artifact
                .detected_licenses()
                .iter()
                .copied()
                .map(LicenseView::from)
                .collect(),
            declared_license: artifact.manifest().license.clone(),
            overridden_license: artifact.overridden_license().map(str::to_string),
            license_files: artifact
                .license_files()
                .iter()
                .map(|file| file.original_path.clone())
                .collect(),
        }
    }
}

/// View representation of a catalog license
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LicenseView {
    /// Stable catalog identifier, e.g. `APACHE_2`
    pub id: String,
    pub name: String,
    pub url: String,
}

impl From<License> for LicenseView {
    fn from(license: License) -> Self {
        Self {
            id: license.identifier().to_string(),
            name: license.preferred_name().to_string(),
            url: license.preferred_url().to_string(),
        }
    }
}
