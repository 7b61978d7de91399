use crate::license_compliance::domain::DepTreeNode;

/// An analysis driven over a dependency tree
///
/// Both hooks return a continuation flag. Returning false from
/// `visit_enter` skips the node's children. Returning false from
/// `visit_exit` stops the traversal of the node's remaining siblings.
/// Accumulating visitors return true from both so the traversal completes.
pub trait DepTreeVisitor {
    fn visit_enter(&mut self, node: &DepTreeNode) -> bool;

    fn visit_exit(&mut self, node: &DepTreeNode) -> bool;
}
