use crate::license_compliance::domain::Gav;
use crate::shared::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// A resolved artifact file of a dependency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedArtifact {
    /// Identity of the dependency module the artifact belongs to
    pub gav: Gav,
    pub name: String,
    pub artifact_type: String,
    pub classifier: Option<String>,
    pub file: PathBuf,
}

impl ResolvedArtifact {
    pub fn new(
        gav: Gav,
        name: impl Into<String>,
        artifact_type: impl Into<String>,
        classifier: Option<String>,
        file: PathBuf,
    ) -> Self {
        Self {
            gav,
            name: name.into(),
            artifact_type: artifact_type.into(),
            classifier,
            file,
        }
    }

    /// `group:artifact:version:type[:classifier]`
    pub fn coordinates(&self) -> String {
        match self.classifier.as_deref().filter(|c| !c.is_empty()) {
            Some(classifier) => format!("{}:{}:{}", self.gav, self.artifact_type, classifier),
            None => format!("{}:{}", self.gav, self.artifact_type),
        }
    }
}

/// A dependency of the resolved graph
///
/// Children are indices into the owning [`ResolvedGraph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDependency {
    pub gav: Gav,
    pub coordinates: String,
    pub artifacts: Vec<ResolvedArtifact>,
    pub children: Vec<usize>,
}

impl ResolvedDependency {
    pub fn new(gav: Gav, artifacts: Vec<ResolvedArtifact>) -> Self {
        Self {
            coordinates: gav.to_string(),
            gav,
            artifacts,
            children: Vec::new(),
        }
    }
}

/// Dependency graph as produced by a resolver
///
/// Dependencies live in an arena and reference each other by index, so the
/// graph may contain cycles.
#[derive(Debug, Clone, Default)]
pub struct ResolvedGraph {
    dependencies: Vec<ResolvedDependency>,
    roots: Vec<usize>,
    project_modules: HashSet<Gav>,
}

impl ResolvedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a dependency and returns its index
    pub fn add(&mut self, dependency: ResolvedDependency) -> usize {
        self.dependencies.push(dependency);
        self.dependencies.len() - 1
    }

    /// Declares `child` as a dependency of `parent`
    ///
    /// # Panics
    /// Panics if `parent` is not an index of this graph.
    pub fn add_child(&mut self, parent: usize, child: usize) {
        self.dependencies[parent].children.push(child);
    }

    pub fn add_root(&mut self, index: usize) {
        self.roots.push(index);
    }

    /// Marks a module as part of the project itself
    pub fn mark_project_module(&mut self, gav: Gav) {
        self.project_modules.insert(gav);
    }

    pub fn get(&self, index: usize) -> Option<&ResolvedDependency> {
        self.dependencies.get(index)
    }

    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    pub fn is_project_module(&self, gav: &Gav) -> bool {
        self.project_modules.contains(gav)
    }

    pub fn len(&self) -> usize {
        self.dependencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty()
    }
}

/// DependencyResolver port for obtaining the dependency graph of a project
pub trait DependencyResolver {
    /// Resolves the dependency graph described at `source`
    ///
    /// # Arguments
    /// * `source` - Location of the dependency description
    ///
    /// # Errors
    /// Returns an error if the description cannot be read or is invalid
    fn resolve(&self, source: &Path) -> Result<ResolvedGraph>;
}
