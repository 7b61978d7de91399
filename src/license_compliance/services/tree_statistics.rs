use super::visitor::DepTreeVisitor;
use crate::license_compliance::domain::{Artifact, DepTreeNode};

/// Summary figures of a dependency tree
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStatistics {
    pub nodes: usize,
    /// Distinct artifacts across all nodes
    pub artifacts: usize,
    /// Depth of the deepest node, roots being at depth 1
    pub max_depth: usize,
    /// Distinct artifacts for which no catalog license was detected
    pub undetected: usize,
}

/// Computes [`TreeStatistics`] in a single traversal
#[derive(Debug, Default)]
pub struct TreeStatisticsVisitor {
    depth: usize,
    statistics: TreeStatistics,
    seen: Vec<Artifact>,
}

impl TreeStatisticsVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn statistics(&self) -> TreeStatistics {
        self.statistics
    }
}

impl DepTreeVisitor for TreeStatisticsVisitor {
    fn visit_enter(&mut self, node: &DepTreeNode) -> bool {
        self.depth += 1;
        self.statistics.nodes += 1;
        self.statistics.max_depth = self.statistics.max_depth.max(self.depth);
        for artifact in node.data().artifacts() {
            if self.seen.contains(artifact) {
                continue;
            }
            self.statistics.artifacts += 1;
            if artifact.detected_licenses().is_empty() {
                self.statistics.undetected += 1;
            }
            self.seen.push(artifact.clone());
        }
        true
    }

    fn visit_exit(&mut self, _node: &DepTreeNode) -> bool {
        self.depth -= 1;
        true
    }
}
