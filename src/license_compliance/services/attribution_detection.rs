use super::visitor::DepTreeVisitor;
use crate::license_compliance::domain::{Artifact, DepTreeNode, License};

/// Where a dependency license has to be mentioned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MentionKind {
    /// In the aggregated LICENSE file
    InLicense,
    /// In the aggregated NOTICE file
    InNotice,
}

/// Collects artifacts carrying a license that requires attribution
#[derive(Debug)]
pub struct MentionsVisitor {
    kind: MentionKind,
    reference: License,
    mentions: Vec<Artifact>,
}

impl MentionsVisitor {
    pub fn new(kind: MentionKind, reference: License) -> Self {
        Self {
            kind,
            reference,
            mentions: Vec::new(),
        }
    }

    pub fn in_license(reference: License) -> Self {
        Self::new(MentionKind::InLicense, reference)
    }

    pub fn in_notice(reference: License) -> Self {
        Self::new(MentionKind::InNotice, reference)
    }

    pub fn kind(&self) -> MentionKind {
        self.kind
    }

    pub fn mentions(&self) -> &[Artifact] {
        &self.mentions
    }

    pub fn into_mentions(self) -> Vec<Artifact> {
        self.mentions
    }

    fn requires_mention(&self, license: License) -> bool {
        match self.kind {
            MentionKind::InLicense => license.requires_mention_in_license_for(self.reference),
            MentionKind::InNotice => license.requires_mention_in_notice_for(self.reference),
        }
    }
}

impl DepTreeVisitor for MentionsVisitor {
    fn visit_enter(&mut self, node: &DepTreeNode) -> bool {
        for artifact in node.data().artifacts() {
            let required = artifact
                .detected_licenses()
                .iter()
                .any(|license| self.requires_mention(*license));
            if required && !self.mentions.contains(artifact) {
                self.mentions.push(artifact.clone());
            }
        }
        true
    }

    fn visit_exit(&mut self, _node: &DepTreeNode) -> bool {
        true
    }
}
