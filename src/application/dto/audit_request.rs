use super::{LicenseOverrides, ProjectIdentity};
use std::path::PathBuf;

/// AuditRequest - Request DTO for the license audit use case
#[derive(Debug, Clone)]
pub struct AuditRequest {
    /// Location of the dependency description
    pub dependencies_file: PathBuf,
    /// Audited project; its license is the reference license
    pub project: ProjectIdentity,
    pub license_overrides: LicenseOverrides,
}

impl AuditRequest {
    pub fn new(
        dependencies_file: PathBuf,
        project: ProjectIdentity,
        license_overrides: LicenseOverrides,
    ) -> Self {
        Self {
            dependencies_file,
            project,
            license_overrides,
        }
    }
}
