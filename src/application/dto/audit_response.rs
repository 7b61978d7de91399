use crate::license_compliance::domain::{Artifact, DepTree, License, TemplateKind};
use crate::license_compliance::services::{OrganizationBuckets, TreeStatistics};

/// Template text of a license that has to be mentioned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseText {
    pub license: License,
    pub kind: TemplateKind,
    /// `None` when no template exists for the license
    pub text: Option<String>,
}

/// AuditResponse - Result DTO of the license audit use case
#[derive(Debug, Clone)]
pub struct AuditResponse {
    pub reference_license: License,
    pub tree: DepTree,
    pub organizations: OrganizationBuckets,
    /// Artifacts none of whose licenses is compatible with the reference
    pub conflicts: Vec<Artifact>,
    pub mentions_in_license: Vec<Artifact>,
    pub mentions_in_notice: Vec<Artifact>,
    pub statistics: TreeStatistics,
    pub license_texts: Vec<LicenseText>,
}

impl AuditResponse {
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}
