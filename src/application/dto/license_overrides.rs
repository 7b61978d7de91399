use std::collections::HashMap;

/// Manual license declarations for artifacts with missing or wrong metadata
///
/// Keys are either a module key (`group:artifact`) or full artifact
/// coordinates (`group:artifact:version:type[:classifier]`). Full
/// coordinates take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseOverrides {
    overrides: HashMap<String, String>,
}

impl LicenseOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, license: impl Into<String>) {
        self.overrides.insert(key.into(), license.into());
    }

    /// Override for an artifact, by coordinates first then by module key
    pub fn lookup(&self, coordinates: &str, module_key: &str) -> Option<&str> {
        self.overrides
            .get(coordinates)
            .or_else(|| self.overrides.get(module_key))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

impl FromIterator<(String, String)> for LicenseOverrides {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            overrides: iter.into_iter().collect(),
        }
    }
}
