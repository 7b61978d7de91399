use honker::license_compliance::domain::Gav;
use honker::ports::outbound::{ResolvedArtifact, ResolvedDependency, ResolvedGraph};
use honker::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock DependencyResolver returning a graph assembled in the test
///
/// Each dependency gets one jar artifact at `<artifact>-<version>.jar`.
pub struct MockDependencyResolver {
    graph: ResolvedGraph,
    indices: HashMap<String, usize>,
    should_fail: bool,
}

impl MockDependencyResolver {
    pub fn new() -> Self {
        Self {
            graph: ResolvedGraph::new(),
            indices: HashMap::new(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    /// Adds a dependency depending on the already declared `children`
    pub fn with_dependency(mut self, coordinates: &str, children: &[&str]) -> Self {
        let gav: Gav = coordinates.parse().unwrap();
        let artifact = ResolvedArtifact::new(
            gav.clone(),
            gav.artifact(),
            "jar",
            None,
            Self::jar_path(coordinates),
        );
        let index = self.graph.add(ResolvedDependency::new(gav, vec![artifact]));
        self.indices.insert(coordinates.to_string(), index);
        for child in children {
            self.graph.add_child(index, self.indices[*child]);
        }
        self
    }

    /// Declares a dependency edge after both ends exist, e.g. to close a cycle
    pub fn with_edge(mut self, parent: &str, child: &str) -> Self {
        self.graph
            .add_child(self.indices[parent], self.indices[child]);
        self
    }

    pub fn with_root(mut self, coordinates: &str) -> Self {
        self.graph.add_root(self.indices[coordinates]);
        self
    }

    pub fn with_project_module(mut self, coordinates: &str) -> Self {
        self.graph.mark_project_module(coordinates.parse().unwrap());
        self
    }

    /// File of the artifact of `coordinates`
    pub fn jar_path(coordinates: &str) -> PathBuf {
        let gav: Gav = coordinates.parse().unwrap();
        PathBuf::from(format!("{}-{}.jar", gav.artifact(), gav.version()))
    }
}

impl DependencyResolver for MockDependencyResolver {
    fn resolve(&self, source: &Path) -> Result<ResolvedGraph> {
        if self.should_fail {
            anyhow::bail!("Mock resolution failure for {}", source.display());
        }
        Ok(self.graph.clone())
    }
}
