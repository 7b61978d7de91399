use super::visitor::DepTreeVisitor;
use crate::license_compliance::domain::{Artifact, DepTreeNode, License};

/// Collects artifacts whose licenses all conflict with a reference license
///
/// An artifact offered under several licenses is only flagged when none of
/// them is compatible. Artifacts without a detected license are never flagged.
#[derive(Debug)]
pub struct LicenseConflictVisitor {
    reference: License,
    conflicts: Vec<Artifact>,
}

impl LicenseConflictVisitor {
    pub fn new(reference: License) -> Self {
        Self {
            reference,
            conflicts: Vec::new(),
        }
    }

    pub fn conflicts(&self) -> &[Artifact] {
        &self.conflicts
    }

    pub fn into_conflicts(self) -> Vec<Artifact> {
        self.conflicts
    }

    fn is_conflicting(&self, artifact: &Artifact) -> bool {
        let detected = artifact.detected_licenses();
        !detected.is_empty()
            && detected
                .iter()
                .all(|license| license.conflicts_with(self.reference))
    }
}

impl DepTreeVisitor for LicenseConflictVisitor {
    fn visit_enter(&mut self, node: &DepTreeNode) -> bool {
        for artifact in node.data().artifacts() {
            if self.is_conflicting(artifact) && !self.conflicts.contains(artifact) {
                self.conflicts.push(artifact.clone());
            }
        }
        true
    }

    fn visit_exit(&mut self, _node: &DepTreeNode) -> bool {
        true
    }
}
