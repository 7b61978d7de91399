//! Audit read model for query operations
//!
//! This module provides the main read model struct that aggregates
//! every audit finding in a presentation-ready form.

use super::artifact_view::{ArtifactView, LicenseView};
use serde::Serialize;

/// Main read model of a license audit
///
/// Denormalized view of an [`AuditResponse`](crate::application::dto::AuditResponse),
/// serialized as-is by the JSON formatter.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReadModel {
    pub metadata: AuditMetadataView,
    pub summary: AuditSummaryView,
    /// Dependency tree, roots in declaration order
    pub dependencies: Vec<DependencyNodeView>,
    /// Artifacts grouped by organization, ordered case-insensitively
    pub organizations: Vec<OrganizationView>,
    pub conflicts: Vec<ArtifactView>,
    pub mentions_in_license: Vec<ArtifactView>,
    pub mentions_in_notice: Vec<ArtifactView>,
    pub license_texts: Vec<LicenseTextView>,
}

/// View representation of audit metadata
#[derive(Debug, Clone, Serialize)]
pub struct AuditMetadataView {
    /// RFC 3339 timestamp of the audit
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    /// License of the audited project
    pub reference_license: LicenseView,
}

/// Summary figures of an audit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuditSummaryView {
    pub dependency_nodes: usize,
    pub artifacts: usize,
    pub max_depth: usize,
    pub undetected_licenses: usize,
    pub conflicts: usize,
    pub mentions_in_license: usize,
    pub mentions_in_notice: usize,
}

/// One node of the dependency tree
#[derive(Debug, Clone, Serialize)]
pub struct DependencyNodeView {
    /// `group:artifact:version`
    pub coordinates: String,
    pub artifacts: Vec<ArtifactView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<DependencyNodeView>,
}

/// Artifacts of one organization
#[derive(Debug, Clone, Serialize)]
pub struct OrganizationView {
    pub name: String,
    pub artifacts: Vec<ArtifactView>,
}

/// Text to carry into the project's LICENSE or NOTICE file
#[derive(Debug, Clone, Serialize)]
pub struct LicenseTextView {
    pub license: LicenseView,
    /// `LICENSE` or `NOTICE`
    pub kind: String,
    /// `None` when no template exists for the license
    pub text: Option<String>,
}
