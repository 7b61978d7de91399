use crate::license_compliance::domain::License;

/// Identity of the audited project
///
/// Project modules appearing in the dependency graph have no third-party
/// metadata; their descriptor is synthesized from this identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectIdentity {
    /// License of the project, the reference of every compliance check
    pub license: License,
    /// Organization reported for project modules, defaults to the module group
    pub organization: Option<String>,
    /// Name reported for project modules, defaults to the artifact name
    pub name: Option<String>,
}

impl ProjectIdentity {
    pub fn new(license: License) -> Self {
        Self {
            license,
            organization: None,
            name: None,
        }
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
