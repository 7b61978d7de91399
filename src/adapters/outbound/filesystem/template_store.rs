use crate::ports::outbound::TemplateStore;
use crate::shared::security;
use std::path::PathBuf;

/// DirectoryTemplateStore adapter reading templates from a directory
///
/// A template named `LICENSE_EPL.template` is read from
/// `<directory>/LICENSE_EPL.template`. Missing, oversized or unreadable
/// files, as well as symlinks, count as absent.
pub struct DirectoryTemplateStore {
    directory: PathBuf,
}

impl DirectoryTemplateStore {
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }
}

impl TemplateStore for DirectoryTemplateStore {
    fn template(&self, name: &str) -> Option<String> {
        if name.contains(['/', '\\']) || name.starts_with('.') {
            return None;
        }
        security::read_text_file(&self.directory.join(name), "template").ok()
    }
}
