use crate::shared::error::HonkerError;
use std::fmt;
use std::str::FromStr;

/// Group/artifact/version identity of a dependency module
///
/// Used as the key when deduplicating dependencies and breaking cycles
/// while a tree is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Gav {
    group: String,
    artifact: String,
    version: String,
}

impl Gav {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn artifact(&self) -> &str {
        &self.artifact
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// `group:artifact`, the version-less module key
    pub fn module_key(&self) -> String {
        format!("{}:{}", self.group, self.artifact)
    }
}

impl fmt::Display for Gav {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

impl FromStr for Gav {
    type Err = HonkerError;

    /// Parses `group:artifact:version`; every segment must be non-empty
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = s.split(':').collect();
        match segments.as_slice() {
            [group, artifact, version]
                if !group.is_empty() && !artifact.is_empty() && !version.is_empty() =>
            {
                Ok(Gav::new(*group, *artifact, *version))
            }
            _ => Err(HonkerError::Validation {
                message: format!(
                    "Invalid dependency coordinates \"{}\": expected group:artifact:version",
                    s
                ),
            }),
        }
    }
}
