use honker::prelude::*;
use std::collections::HashMap;

/// Mock TemplateStore serving templates from memory
#[derive(Default)]
pub struct MockTemplateStore {
    templates: HashMap<String, String>,
}

impl MockTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(mut self, license: License, kind: TemplateKind, text: &str) -> Self {
        self.templates
            .insert(license.template_name(kind), text.to_string());
        self
    }
}

impl TemplateStore for MockTemplateStore {
    fn template(&self, name: &str) -> Option<String> {
        self.templates.get(name).cloned()
    }
}
