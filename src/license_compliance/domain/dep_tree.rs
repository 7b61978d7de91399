use super::artifact::{same_members, Artifact};
use crate::license_compliance::services::DepTreeVisitor;
use std::hash::{Hash, Hasher};

/// Metadata of one dependency node: its coordinates and resolved artifacts
///
/// Artifacts form a set: their order plays no part in equality.
#[derive(Debug, Clone)]
pub struct DepTreeData {
    coordinates: String,
    artifacts: Vec<Artifact>,
}

impl DepTreeData {
    /// Creates node data; artifacts equal by value are kept once
    pub fn new(coordinates: impl Into<String>, artifacts: Vec<Artifact>) -> Self {
        let mut unique: Vec<Artifact> = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            if !unique.contains(&artifact) {
                unique.push(artifact);
            }
        }
        Self {
            coordinates: coordinates.into(),
            artifacts: unique,
        }
    }

    pub fn coordinates(&self) -> &str {
        &self.coordinates
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }
}

impl PartialEq for DepTreeData {
    fn eq(&self, other: &Self) -> bool {
        self.coordinates == other.coordinates && same_members(&self.artifacts, &other.artifacts)
    }
}

impl Eq for DepTreeData {}

impl Hash for DepTreeData {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coordinates.hash(state);
        self.artifacts.len().hash(state);
    }
}

/// A node of the dependency tree
///
/// Children are kept in insertion order. A child structurally equal to an
/// existing one (same data, same subtree) is not added twice.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DepTreeNode {
    data: DepTreeData,
    children: Vec<DepTreeNode>,
}

impl DepTreeNode {
    /// Creates a node without parent, typically a root
    pub fn new(data: DepTreeData) -> Self {
        Self {
            data,
            children: Vec::new(),
        }
    }

    /// Creates a node registered as a child of `parent`
    ///
    /// Returns the child as stored in the parent, so further children can be
    /// attached to it.
    pub fn with_parent(parent: &mut DepTreeNode, data: DepTreeData) -> &mut DepTreeNode {
        let index = parent.attach(DepTreeNode::new(data));
        &mut parent.children[index]
    }

    /// Attaches a fully built subtree as a child
    pub fn add_child(&mut self, child: DepTreeNode) {
        self.attach(child);
    }

    fn attach(&mut self, child: DepTreeNode) -> usize {
        match self.children.iter().position(|existing| *existing == child) {
            Some(index) => index,
            None => {
                self.children.push(child);
                self.children.len() - 1
            }
        }
    }

    pub fn data(&self) -> &DepTreeData {
        &self.data
    }

    pub fn children(&self) -> &[DepTreeNode] {
        &self.children
    }

    /// Runs `visitor` over this subtree
    ///
    /// `visit_enter` returning false skips the children. A child returning
    /// false stops the iteration over its remaining siblings. The result of
    /// `visit_exit` is returned as the result of this node.
    pub fn accept<V: DepTreeVisitor + ?Sized>(&self, visitor: &mut V) -> bool {
        if visitor.visit_enter(self) {
            for child in &self.children {
                if !child.accept(visitor) {
                    break;
                }
            }
        }
        visitor.visit_exit(self)
    }

    fn count_nodes(&self) -> usize {
        1 + self.children.iter().map(DepTreeNode::count_nodes).sum::<usize>()
    }

    fn collect_artifacts<'a>(&'a self, into: &mut Vec<&'a Artifact>) {
        for artifact in self.data.artifacts() {
            if !into.contains(&artifact) {
                into.push(artifact);
            }
        }
        for child in &self.children {
            child.collect_artifacts(into);
        }
    }
}

/// A dependency tree: one root node per first-level dependency
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DepTree {
    roots: Vec<DepTreeNode>,
}

impl DepTree {
    pub fn new(roots: Vec<DepTreeNode>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[DepTreeNode] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Runs `visitor` over every root in order
    ///
    /// Returns false when a root aborted the traversal, in which case the
    /// remaining roots are not visited.
    pub fn accept<V: DepTreeVisitor + ?Sized>(&self, visitor: &mut V) -> bool {
        for root in &self.roots {
            if !root.accept(visitor) {
                return false;
            }
        }
        true
    }

    pub fn node_count(&self) -> usize {
        self.roots.iter().map(DepTreeNode::count_nodes).sum()
    }

    /// Distinct artifacts of the whole tree, in pre-order
    pub fn artifacts(&self) -> Vec<&Artifact> {
        let mut artifacts = Vec::new();
        for root in &self.roots {
            root.collect_artifacts(&mut artifacts);
        }
        artifacts
    }
}
