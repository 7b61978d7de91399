/// TemplateStore port giving access to LICENSE/NOTICE templates
///
/// Templates are addressed by resource name, e.g. `LICENSE_EPL.template`.
pub trait TemplateStore {
    /// Returns the template content, or `None` when it does not exist or
    /// cannot be read
    fn template(&self, name: &str) -> Option<String>;
}
