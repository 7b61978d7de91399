use super::*;
use crate::license_compliance::domain::License;
use crate::ports::outbound::ResolvedDependency;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

// Mock implementations for testing
#[derive(Default)]
struct MockManifestLoader {
    licenses: HashMap<PathBuf, String>,
    failing: Option<PathBuf>,
}

impl ManifestLoader for MockManifestLoader {
    fn load_manifest(&self, file: &Path) -> Result<Manifest> {
        if self.failing.as_deref() == Some(file) {
            anyhow::bail!("zip archive is truncated");
        }
        Ok(match self.licenses.get(file) {
            Some(license) => Manifest::new(None, None, None, None, Some(license.clone())),
            None => Manifest::EMPTY,
        })
    }
}

struct MockPomLoader;

impl PomLoader for MockPomLoader {
    fn load_pom(&self, _file: &Path, gav: &Gav) -> Result<Pom> {
        Ok(Pom::new(
            Some(format!("{} Org", gav.group())),
            None,
            None,
            Some(gav.version().to_string()),
            None,
            vec![],
        ))
    }
}

struct MockLicenseFilesLoader;

impl LicenseFilesLoader for MockLicenseFilesLoader {
    fn load_license_files(&self, file: &Path) -> Result<Vec<SomeFile>> {
        Ok(vec![SomeFile::new(
            "license".to_string(),
            format!("{}!/META-INF/LICENSE", file.display()),
            "license text".to_string(),
        )])
    }
}

#[derive(Default)]
struct RecordingProgressReporter {
    progress: RefCell<Vec<(usize, usize, String)>>,
}

impl ProgressReporter for RecordingProgressReporter {
    fn report(&self, _message: &str) {}

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.progress
            .borrow_mut()
            .push((current, total, message.unwrap_or_default().to_string()));
    }

    fn report_error(&self, _message: &str) {}

    fn report_completion(&self, _message: &str) {}
}

type TestUseCase = LoadDependencyTreeUseCase<
    MockManifestLoader,
    MockPomLoader,
    MockLicenseFilesLoader,
    RecordingProgressReporter,
>;

fn use_case(manifest_loader: MockManifestLoader) -> TestUseCase {
    LoadDependencyTreeUseCase::new(
        manifest_loader,
        MockPomLoader,
        MockLicenseFilesLoader,
        RecordingProgressReporter::default(),
    )
}

fn jar(gav: &Gav) -> ResolvedArtifact {
    ResolvedArtifact::new(
        gav.clone(),
        gav.artifact(),
        "jar",
        None,
        PathBuf::from(format!("{}-{}.jar", gav.artifact(), gav.version())),
    )
}

fn add(graph: &mut ResolvedGraph, coordinates: &str) -> usize {
    let gav: Gav = coordinates.parse().unwrap();
    let artifact = jar(&gav);
    graph.add(ResolvedDependency::new(gav, vec![artifact]))
}

fn coordinates_of(node: &DepTreeNode) -> &str {
    node.data().coordinates()
}

fn apache_project() -> ProjectIdentity {
    ProjectIdentity::new(License::Apache2)
}

#[test]
fn test_builds_tree_in_declaration_order() {
    let mut graph = ResolvedGraph::new();
    let a = add(&mut graph, "g:a:1");
    let b = add(&mut graph, "g:b:1");
    let c = add(&mut graph, "g:c:1");
    graph.add_child(a, b);
    graph.add_root(a);
    graph.add_root(c);

    let tree = use_case(MockManifestLoader::default())
        .execute(&graph, &apache_project(), &LicenseOverrides::new())
        .unwrap();

    let roots: Vec<&str> = tree.roots().iter().map(coordinates_of).collect();
    assert_eq!(roots, vec!["g:a:1", "g:c:1"]);
    assert_eq!(coordinates_of(&tree.roots()[0].children()[0]), "g:b:1");
    assert_eq!(tree.node_count(), 3);

    let artifact = &tree.roots()[0].data().artifacts()[0];
    assert_eq!(artifact.coordinates(), "g:a:1:jar");
    assert_eq!(artifact.organization(), "g Org");
    assert_eq!(artifact.license_files().len(), 1);
}

#[test]
fn test_cycle_terminates_with_each_module_once() {
    let mut graph = ResolvedGraph::new();
    let a = add(&mut graph, "g:a:1");
    let b = add(&mut graph, "g:b:1");
    graph.add_child(a, b);
    graph.add_child(b, a);
    graph.add_root(a);

    let tree = use_case(MockManifestLoader::default())
        .execute(&graph, &apache_project(), &LicenseOverrides::new())
        .unwrap();

    assert_eq!(tree.roots().len(), 1);
    let b_node = &tree.roots()[0].children()[0];
    assert_eq!(coordinates_of(b_node), "g:b:1");
    assert!(b_node.children().is_empty());
    assert_eq!(tree.node_count(), 2);
}

#[test]
fn test_root_already_visited_is_omitted() {
    let mut graph = ResolvedGraph::new();
    let a = add(&mut graph, "g:a:1");
    let shared = add(&mut graph, "g:shared:1");
    graph.add_child(a, shared);
    graph.add_root(a);
    graph.add_root(shared);

    let tree = use_case(MockManifestLoader::default())
        .execute(&graph, &apache_project(), &LicenseOverrides::new())
        .unwrap();

    let roots: Vec<&str> = tree.roots().iter().map(coordinates_of).collect();
    assert_eq!(roots, vec!["g:a:1"]);
}

#[test]
fn test_successive_builds_do_not_share_visited_modules() {
    let mut graph = ResolvedGraph::new();
    let a = add(&mut graph, "g:a:1");
    graph.add_root(a);

    let use_case = use_case(MockManifestLoader::default());
    let first = use_case
        .execute(&graph, &apache_project(), &LicenseOverrides::new())
        .unwrap();
    let second = use_case
        .execute(&graph, &apache_project(), &LicenseOverrides::new())
        .unwrap();

    assert_eq!(first.node_count(), 1);
    assert_eq!(first, second);
}

#[test]
fn test_project_module_uses_project_identity() {
    let mut graph = ResolvedGraph::new();
    let core = add(&mut graph, "org.acme:core:3.0");
    graph.mark_project_module("org.acme:core:3.0".parse().unwrap());
    graph.add_root(core);

    let mut manifest_loader = MockManifestLoader::default();
    manifest_loader.failing = Some(PathBuf::from("core-3.0.jar"));
    let project = ProjectIdentity::new(License::Epl).with_organization("Acme Foundation");

    let tree = use_case(manifest_loader)
        .execute(&graph, &project, &LicenseOverrides::new())
        .unwrap();

    let artifact = &tree.roots()[0].data().artifacts()[0];
    assert_eq!(artifact.organization(), "Acme Foundation");
    assert_eq!(artifact.name(), "core");
    assert_eq!(artifact.version(), "3.0");
    assert_eq!(artifact.detected_licenses(), &[License::Epl]);
    assert!(artifact.manifest().is_empty());
    assert!(artifact.license_files().is_empty());
}

#[test]
fn test_project_module_defaults_to_group() {
    let mut graph = ResolvedGraph::new();
    let core = add(&mut graph, "org.acme:core:3.0");
    graph.mark_project_module("org.acme:core:3.0".parse().unwrap());
    graph.add_root(core);

    let project = ProjectIdentity::new(License::Apache2).with_name("Acme Platform");
    let tree = use_case(MockManifestLoader::default())
        .execute(&graph, &project, &LicenseOverrides::new())
        .unwrap();

    let artifact = &tree.roots()[0].data().artifacts()[0];
    assert_eq!(artifact.organization(), "org.acme");
    assert_eq!(artifact.name(), "Acme Platform");
}

#[test]
fn test_detects_licenses_from_loaded_manifest() {
    let mut graph = ResolvedGraph::new();
    let a = add(&mut graph, "g:a:1");
    graph.add_root(a);

    let mut manifest_loader = MockManifestLoader::default();
    manifest_loader
        .licenses
        .insert(PathBuf::from("a-1.jar"), "GPL".to_string());

    let tree = use_case(manifest_loader)
        .execute(&graph, &apache_project(), &LicenseOverrides::new())
        .unwrap();
    assert_eq!(
        tree.roots()[0].data().artifacts()[0].detected_licenses(),
        &[License::Gpl]
    );
}

#[test]
fn test_applies_license_overrides() {
    let mut graph = ResolvedGraph::new();
    let a = add(&mut graph, "g:a:1");
    let b = add(&mut graph, "g:b:1");
    graph.add_root(a);
    graph.add_root(b);

    let mut overrides = LicenseOverrides::new();
    overrides.insert("g:a", "MIT");
    overrides.insert("g:b", "GPL");
    overrides.insert("g:b:1:jar", "CDDL");

    let tree = use_case(MockManifestLoader::default())
        .execute(&graph, &apache_project(), &overrides)
        .unwrap();

    let a_artifact = &tree.roots()[0].data().artifacts()[0];
    assert_eq!(a_artifact.overridden_license(), Some("MIT"));
    assert_eq!(a_artifact.detected_licenses(), &[License::MitX11]);
    let b_artifact = &tree.roots()[1].data().artifacts()[0];
    assert_eq!(b_artifact.detected_licenses(), &[License::Cddl]);
}

#[test]
fn test_load_failure_aborts_build() {
    let mut graph = ResolvedGraph::new();
    let a = add(&mut graph, "g:a:1");
    let broken = add(&mut graph, "g:broken:2");
    graph.add_child(a, broken);
    graph.add_root(a);

    let manifest_loader = MockManifestLoader {
        failing: Some(PathBuf::from("broken-2.jar")),
        ..Default::default()
    };

    let err = use_case(manifest_loader)
        .execute(&graph, &apache_project(), &LicenseOverrides::new())
        .unwrap_err();

    match err.downcast_ref::<HonkerError>() {
        Some(HonkerError::ArtifactLoadError {
            coordinates,
            path,
            details,
        }) => {
            assert_eq!(coordinates, "g:broken:2:jar");
            assert_eq!(path, &PathBuf::from("broken-2.jar"));
            assert!(details.contains("truncated"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_reports_progress_per_dependency() {
    let mut graph = ResolvedGraph::new();
    let a = add(&mut graph, "g:a:1");
    let b = add(&mut graph, "g:b:1");
    graph.add_child(a, b);
    graph.add_child(b, a);
    graph.add_root(a);

    let use_case = use_case(MockManifestLoader::default());
    use_case
        .execute(&graph, &apache_project(), &LicenseOverrides::new())
        .unwrap();

    assert_eq!(
        *use_case.progress_reporter().progress.borrow(),
        vec![
            (1, 2, "g:a:1".to_string()),
            (2, 2, "g:b:1".to_string())
        ]
    );
}
