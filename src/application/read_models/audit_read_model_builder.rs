//! Builder for constructing AuditReadModel from an audit response

use super::artifact_view::{ArtifactView, LicenseView};
use super::audit_read_model::{
    AuditMetadataView, AuditReadModel, AuditSummaryView, DependencyNodeView, LicenseTextView,
    OrganizationView,
};
use crate::application::dto::{AuditResponse, LicenseText};
use crate::license_compliance::domain::{Artifact, DepTreeNode, License};
use chrono::Utc;

const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builder for constructing AuditReadModel from an audit response
pub struct AuditReadModelBuilder;

impl AuditReadModelBuilder {
    /// Builds the read model, stamped with the current time
    pub fn build(response: &AuditResponse) -> AuditReadModel {
        Self::build_with_timestamp(response, Utc::now().to_rfc3339())
    }

    /// Builds the read model with an explicit timestamp
    ///
    /// # Arguments
    /// * `response` - Result of the audit use case
    /// * `timestamp` - RFC 3339 timestamp recorded in the metadata
    pub fn build_with_timestamp(response: &AuditResponse, timestamp: String) -> AuditReadModel {
        AuditReadModel {
            metadata: Self::build_metadata(response.reference_license, timestamp),
            summary: Self::build_summary(response),
            dependencies: response.tree.roots().iter().map(Self::build_node).collect(),
            organizations: response
                .organizations
                .iter()
                .map(|(name, artifacts)| OrganizationView {
                    name: name.to_string(),
                    artifacts: Self::build_artifacts(artifacts),
                })
                .collect(),
            conflicts: Self::build_artifacts(&response.conflicts),
            mentions_in_license: Self::build_artifacts(&response.mentions_in_license),
            mentions_in_notice: Self::build_artifacts(&response.mentions_in_notice),
            license_texts: response
                .license_texts
                .iter()
                .map(Self::build_license_text)
                .collect(),
        }
    }

    fn build_metadata(reference: License, timestamp: String) -> AuditMetadataView {
        AuditMetadataView {
            timestamp,
            tool_name: TOOL_NAME.to_string(),
            tool_version: TOOL_VERSION.to_string(),
            reference_license: LicenseView::from(reference),
        }
    }

    fn build_summary(response: &AuditResponse) -> AuditSummaryView {
        let statistics = response.statistics;
        AuditSummaryView {
            dependency_nodes: statistics.nodes,
            artifacts: statistics.artifacts,
            max_depth: statistics.max_depth,
            undetected_licenses: statistics.undetected,
            conflicts: response.conflicts.len(),
            mentions_in_license: response.mentions_in_license.len(),
            mentions_in_notice: response.mentions_in_notice.len(),
        }
    }

    fn build_node(node: &DepTreeNode) -> DependencyNodeView {
        DependencyNodeView {
            coordinates: node.data().coordinates().to_string(),
            artifacts: Self::build_artifacts(node.data().artifacts()),
            children: node.children().iter().map(Self::build_node).collect(),
        }
    }

    fn build_artifacts(artifacts: &[Artifact]) -> Vec<ArtifactView> {
        artifacts.iter().map(ArtifactView::from).collect()
    }

    fn build_license_text(text: &LicenseText) -> LicenseTextView {
        LicenseTextView {
            license: LicenseView::from(text.license),
            kind: text.kind.to_string(),
            text: text.text.clone(),
        }
    }
}
