use crate::license_compliance::domain::Gav;
use crate::ports::outbound::{
    DependencyResolver, ResolvedArtifact, ResolvedDependency, ResolvedGraph,
};
use crate::shared::error::HonkerError;
use crate::shared::{security, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Default file name of a dependency description
pub const DEPENDENCIES_FILE_NAME: &str = "honker-deps.toml";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DependencyFile {
    #[serde(default)]
    roots: Vec<String>,
    #[serde(default, rename = "dependency")]
    dependencies: Vec<DependencyEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DependencyEntry {
    group: String,
    name: String,
    version: String,
    #[serde(default)]
    project: bool,
    #[serde(default)]
    artifacts: Vec<ArtifactEntry>,
    #[serde(default)]
    dependencies: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ArtifactEntry {
    file: PathBuf,
    /// Artifact name, defaults to the module name
    name: Option<String>,
    #[serde(rename = "type", default = "default_artifact_type")]
    artifact_type: String,
    classifier: Option<String>,
}

fn default_artifact_type() -> String {
    "jar".to_string()
}

/// TomlDependencyResolver adapter reading a resolved graph from `honker-deps.toml`
///
/// The description lists every module once, with its artifact files and
/// the modules it depends on:
///
/// ```toml
/// roots = ["org.acme:app:1.0"]
///
/// [[dependency]]
/// group = "org.acme"
/// name = "app"
/// version = "1.0"
/// project = true
/// dependencies = ["org.slf4j:slf4j-api:1.7.12"]
///
/// [[dependency]]
/// group = "org.slf4j"
/// name = "slf4j-api"
/// version = "1.7.12"
/// artifacts = [{ file = "libs/slf4j-api-1.7.12.jar" }]
/// ```
///
/// Relative artifact paths are resolved against the directory of the
/// description file.
pub struct TomlDependencyResolver;

impl TomlDependencyResolver {
    pub fn new() -> Self {
        Self
    }

    fn parse_error(path: &Path, details: impl Into<String>) -> HonkerError {
        HonkerError::DependencyFileParseError {
            path: path.to_path_buf(),
            details: details.into(),
        }
    }

    fn build_graph(path: &Path, file: DependencyFile) -> Result<ResolvedGraph> {
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        let mut graph = ResolvedGraph::new();
        let mut indices: HashMap<Gav, usize> = HashMap::new();
        let mut edges: Vec<(usize, Vec<String>)> = Vec::with_capacity(file.dependencies.len());

        for entry in file.dependencies {
            let gav = Gav::new(entry.group, entry.name, entry.version);
            if indices.contains_key(&gav) {
                return Err(Self::parse_error(path, format!("Dependency {} is declared twice", gav)).into());
            }

            let artifacts = entry
                .artifacts
                .into_iter()
                .map(|artifact| {
                    ResolvedArtifact::new(
                        gav.clone(),
                        artifact.name.unwrap_or_else(|| gav.artifact().to_string()),
                        artifact.artifact_type,
                        artifact.classifier,
                        base_dir.join(artifact.file),
                    )
                })
                .collect();

            if entry.project {
                graph.mark_project_module(gav.clone());
            }
            let index = graph.add(ResolvedDependency::new(gav.clone(), artifacts));
            indices.insert(gav, index);
            edges.push((index, entry.dependencies));
        }

        let lookup = |reference: &str| -> Result<usize> {
            let gav: Gav = reference
                .parse()
                .map_err(|e: HonkerError| Self::parse_error(path, e.to_string()))?;
            indices.get(&gav).copied().ok_or_else(|| {
                Self::parse_error(path, format!("Reference to undeclared dependency {}", gav)).into()
            })
        };

        for (parent, children) in edges {
            for child in children {
                let child = lookup(&child)?;
                graph.add_child(parent, child);
            }
        }
        for root in &file.roots {
            let root = lookup(root)?;
            graph.add_root(root);
        }

        Ok(graph)
    }
}

impl Default for TomlDependencyResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyResolver for TomlDependencyResolver {
    fn resolve(&self, source: &Path) -> Result<ResolvedGraph> {
        if !source.exists() {
            return Err(HonkerError::DependencyFileNotFound {
                path: source.to_path_buf(),
                suggestion: format!(
                    "Create a {} file describing the resolved dependencies, or specify its location with the --dependencies option.",
                    DEPENDENCIES_FILE_NAME
                ),
            }
            .into());
        }

        let content = security::read_text_file(source, DEPENDENCIES_FILE_NAME)
            .map_err(|e| Self::parse_error(source, e.to_string()))?;
        let file: DependencyFile =
            toml::from_str(&content).map_err(|e| Self::parse_error(source, e.to_string()))?;

        Self::build_graph(source, file)
    }
}
