use crate::application::dto::{LicenseOverrides, ProjectIdentity};
use crate::license_compliance::domain::{
    Artifact, DepTree, DepTreeData, DepTreeNode, Gav, Manifest, Pom, PomLicense, SomeFile,
};
use crate::ports::outbound::{
    LicenseFilesLoader, ManifestLoader, PomLoader, ProgressReporter, ResolvedArtifact,
    ResolvedGraph,
};
use crate::shared::error::HonkerError;
use crate::shared::Result;
use std::collections::HashSet;

#[cfg(test)]
mod tests;

/// State of one tree build
///
/// Created per `execute` call, so successive builds never share visited
/// modules.
struct BuildContext<'a> {
    graph: &'a ResolvedGraph,
    project: &'a ProjectIdentity,
    overrides: &'a LicenseOverrides,
    visited: HashSet<Gav>,
    loaded: usize,
}

/// LoadDependencyTreeUseCase - Builds the dependency tree of a project
///
/// Walks the resolved graph depth-first from its roots. A module already
/// visited during the build is skipped together with its subtree, which
/// breaks cycles and keeps each module in the tree once.
///
/// # Type Parameters
/// * `ML` - ManifestLoader implementation
/// * `PL` - PomLoader implementation
/// * `LFL` - LicenseFilesLoader implementation
/// * `PR` - ProgressReporter implementation
pub struct LoadDependencyTreeUseCase<ML, PL, LFL, PR> {
    manifest_loader: ML,
    pom_loader: PL,
    license_files_loader: LFL,
    progress_reporter: PR,
}

impl<ML, PL, LFL, PR> LoadDependencyTreeUseCase<ML, PL, LFL, PR>
where
    ML: ManifestLoader,
    PL: PomLoader,
    LFL: LicenseFilesLoader,
    PR: ProgressReporter,
{
    /// Creates a new LoadDependencyTreeUseCase with injected dependencies
    pub fn new(
        manifest_loader: ML,
        pom_loader: PL,
        license_files_loader: LFL,
        progress_reporter: PR,
    ) -> Self {
        Self {
            manifest_loader,
            pom_loader,
            license_files_loader,
            progress_reporter,
        }
    }

    pub fn progress_reporter(&self) -> &PR {
        &self.progress_reporter
    }

    /// Builds the dependency tree of `graph`
    ///
    /// # Arguments
    /// * `graph` - Resolved dependency graph
    /// * `project` - Identity used for the project's own modules
    /// * `overrides` - Manual license declarations
    ///
    /// # Errors
    /// Returns [`HonkerError::ArtifactLoadError`] for the first artifact whose
    /// metadata cannot be loaded; no partial tree is returned.
    pub fn execute(
        &self,
        graph: &ResolvedGraph,
        project: &ProjectIdentity,
        overrides: &LicenseOverrides,
    ) -> Result<DepTree> {
        let mut context = BuildContext {
            graph,
            project,
            overrides,
            visited: HashSet::new(),
            loaded: 0,
        };

        let mut roots = Vec::with_capacity(graph.roots().len());
        for &root in graph.roots() {
            if let Some(node) = self.build_node(&mut context, root)? {
                roots.push(node);
            }
        }
        Ok(DepTree::new(roots))
    }

    /// Builds the subtree of dependency `index`, `None` when already visited
    fn build_node(&self, context: &mut BuildContext<'_>, index: usize) -> Result<Option<DepTreeNode>> {
        let graph = context.graph;
        let Some(dependency) = graph.get(index) else {
            return Ok(None);
        };
        if !context.visited.insert(dependency.gav.clone()) {
            return Ok(None);
        }

        context.loaded += 1;
        self.progress_reporter.report_progress(
            context.loaded,
            graph.len(),
            Some(&dependency.coordinates),
        );

        let is_project_module = graph.is_project_module(&dependency.gav);
        let mut artifacts = Vec::with_capacity(dependency.artifacts.len());
        for resolved in &dependency.artifacts {
            let artifact = if is_project_module {
                Self::project_artifact(context, resolved)
            } else {
                self.external_artifact(context, resolved)?
            };
            artifacts.push(artifact);
        }

        let mut node = DepTreeNode::new(DepTreeData::new(dependency.coordinates.clone(), artifacts));
        for &child in &dependency.children {
            if let Some(child_node) = self.build_node(context, child)? {
                node.add_child(child_node);
            }
        }
        Ok(Some(node))
    }

    /// Artifact of a project module, described by the project identity
    fn project_artifact(context: &BuildContext<'_>, resolved: &ResolvedArtifact) -> Artifact {
        let project = context.project;
        let pom = Pom::new(
            Some(
                project
                    .organization
                    .clone()
                    .unwrap_or_else(|| resolved.gav.group().to_string()),
            ),
            None,
            Some(project.name.clone().unwrap_or_else(|| resolved.name.clone())),
            Some(resolved.gav.version().to_string()),
            None,
            vec![PomLicense::for_license(project.license)],
        );
        Self::artifact(context, resolved, Manifest::EMPTY, pom, Vec::new())
    }

    /// Artifact of a third-party dependency, described by its own metadata
    fn external_artifact(
        &self,
        context: &BuildContext<'_>,
        resolved: &ResolvedArtifact,
    ) -> Result<Artifact> {
        let file = resolved.file.as_path();
        let load_error = |e: anyhow::Error| HonkerError::ArtifactLoadError {
            coordinates: resolved.coordinates(),
            path: resolved.file.clone(),
            details: format!("{:#}", e),
        };

        let manifest = self.manifest_loader.load_manifest(file).map_err(load_error)?;
        let pom = self.pom_loader.load_pom(file, &resolved.gav).map_err(load_error)?;
        let license_files = self
            .license_files_loader
            .load_license_files(file)
            .map_err(load_error)?;

        Ok(Self::artifact(context, resolved, manifest, pom, license_files))
    }

    fn artifact(
        context: &BuildContext<'_>,
        resolved: &ResolvedArtifact,
        manifest: Manifest,
        pom: Pom,
        license_files: Vec<SomeFile>,
    ) -> Artifact {
        let coordinates = resolved.coordinates();
        let overridden = context
            .overrides
            .lookup(&coordinates, &resolved.gav.module_key())
            .map(str::to_string);
        Artifact::new(coordinates, manifest, pom, license_files, overridden)
    }
}
