use crate::application::read_models::AuditReadModel;
use crate::ports::outbound::AuditFormatter;
use crate::shared::Result;

/// JsonFormatter adapter serializing the audit read model as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditFormatter for JsonFormatter {
    fn format(&self, model: &AuditReadModel) -> Result<String> {
        serde_json::to_string_pretty(model).map_err(Into::into)
    }
}
