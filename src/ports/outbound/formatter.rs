use crate::application::read_models::AuditReadModel;
use crate::shared::Result;

/// AuditFormatter port for rendering an audit report
///
/// This port abstracts the output format of the report (JSON, Markdown).
pub trait AuditFormatter {
    /// Formats the audit report
    ///
    /// # Arguments
    /// * `model` - Read model holding the tree, findings and license texts
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, model: &AuditReadModel) -> Result<String>;
}
