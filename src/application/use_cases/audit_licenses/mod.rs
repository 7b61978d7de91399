use crate::application::dto::{AuditRequest, AuditResponse, LicenseText};
use crate::application::use_cases::LoadDependencyTreeUseCase;
use crate::license_compliance::domain::{Artifact, DepTree, License, TemplateKind};
use crate::license_compliance::services::{
    DependenciesByOrganizationVisitor, LicenseConflictVisitor, MentionsVisitor,
    TreeStatisticsVisitor,
};
use crate::ports::outbound::{
    DependencyResolver, LicenseFilesLoader, ManifestLoader, PomLoader, ProgressReporter,
    ResolvedGraph, TemplateStore,
};
use crate::shared::Result;


/// AuditLicensesUseCase - Core use case auditing a project's dependencies
///
/// Resolves the dependency graph, builds the dependency tree and runs every
/// analysis over it against the project license.
///
/// # Type Parameters
/// * `DR` - DependencyResolver implementation
/// * `TS` - TemplateStore implementation
/// * `ML`, `PL`, `LFL`, `PR` - collaborators of [`LoadDependencyTreeUseCase`]
pub struct AuditLicensesUseCase<DR, TS, ML, PL, LFL, PR> {
    dependency_resolver: DR,
    template_store: TS,
    tree_loader: LoadDependencyTreeUseCase<ML, PL, LFL, PR>,
}

impl<DR, TS, ML, PL, LFL, PR> AuditLicensesUseCase<DR, TS, ML, PL, LFL, PR>
where
    DR: DependencyResolver,
    TS: TemplateStore,
    ML: ManifestLoader,
    PL: PomLoader,
    LFL: LicenseFilesLoader,
    PR: ProgressReporter,
{
    /// Creates a new AuditLicensesUseCase with injected dependencies
    pub fn new(
        dependency_resolver: DR,
        template_store: TS,
        tree_loader: LoadDependencyTreeUseCase<ML, PL, LFL, PR>,
    ) -> Self {
        Self {
            dependency_resolver,
            template_store,
            tree_loader,
        }
    }

    /// Executes the audit
    ///
    /// # Arguments
    /// * `request` - Dependency description location, project identity and overrides
    ///
    /// # Errors
    /// Returns an error if the graph cannot be resolved or an artifact cannot be loaded
    pub fn execute(&self, request: AuditRequest) -> Result<AuditResponse> {
        // Step 1: Resolve the dependency graph
        let graph = self.resolve_graph(&request)?;

        // Step 2: Build the dependency tree
        let tree = self
            .tree_loader
            .execute(&graph, &request.project, &request.license_overrides)?;
        self.progress()
            .report_completion(&format!("✅ Loaded {} dependency node(s)", tree.node_count()));

        // Step 3: Analyse the tree against the project license
        let reference = request.project.license;
        self.progress().report(&format!(
            "🔍 Checking licenses against: {}",
            reference.preferred_name()
        ));
        if !reference.has_compliance_rules() {
            self.progress().report_error(&format!(
                "⚠️  Warning: No license rules are defined for {}, no conflict or mention can be detected",
                reference
            ));
        }
        let response = self.analyse(tree, reference);
        self.report_findings(&response);

        Ok(response)
    }

    fn progress(&self) -> &PR {
        self.tree_loader.progress_reporter()
    }

    fn resolve_graph(&self, request: &AuditRequest) -> Result<ResolvedGraph> {
        self.progress().report(&format!(
            "📖 Loading dependency description from: {}",
            request.dependencies_file.display()
        ));
        let graph = self.dependency_resolver.resolve(&request.dependencies_file)?;
        self.progress().report(&format!(
            "✅ Resolved {} dependency module(s), {} first-level",
            graph.len(),
            graph.roots().len()
        ));
        Ok(graph)
    }

    /// Runs one fresh instance of each visitor over `tree`
    fn analyse(&self, tree: DepTree, reference: License) -> AuditResponse {
        let mut organizations = DependenciesByOrganizationVisitor::new();
        let mut conflicts = LicenseConflictVisitor::new(reference);
        let mut in_license = MentionsVisitor::in_license(reference);
        let mut in_notice = MentionsVisitor::in_notice(reference);
        let mut statistics = TreeStatisticsVisitor::new();

        tree.accept(&mut organizations);
        tree.accept(&mut conflicts);
        tree.accept(&mut in_license);
        tree.accept(&mut in_notice);
        tree.accept(&mut statistics);

        let mentions_in_license = in_license.into_mentions();
        let mentions_in_notice = in_notice.into_mentions();
        let mut license_texts = self.license_texts(
            &mentions_in_license,
            TemplateKind::License,
            |license| license.requires_mention_in_license_for(reference),
        );
        license_texts.extend(self.license_texts(
            &mentions_in_notice,
            TemplateKind::Notice,
            |license| license.requires_mention_in_notice_for(reference),
        ));

        AuditResponse {
            reference_license: reference,
            tree,
            organizations: organizations.into_buckets(),
            conflicts: conflicts.into_conflicts(),
            mentions_in_license,
            mentions_in_notice,
            statistics: statistics.statistics(),
            license_texts,
        }
    }

    /// Templates of every license of `artifacts` matching `requires_mention`
    ///
    /// Each license appears once, in order of first occurrence.
    fn license_texts(
        &self,
        artifacts: &[Artifact],
        kind: TemplateKind,
        requires_mention: impl Fn(License) -> bool,
    ) -> Vec<LicenseText> {
        let mut licenses: Vec<License> = Vec::new();
        for license in artifacts
            .iter()
            .flat_map(|artifact| artifact.detected_licenses().iter().copied())
        {
            if requires_mention(license) && !licenses.contains(&license) {
                licenses.push(license);
            }
        }

        licenses
            .into_iter()
            .map(|license| LicenseText {
                license,
                kind,
                text: license.template_text(kind, &self.template_store),
            })
            .collect()
    }

    fn report_findings(&self, response: &AuditResponse) {
        for artifact in &response.conflicts {
            let licenses: Vec<String> = artifact
                .detected_licenses()
                .iter()
                .map(ToString::to_string)
                .collect();
            self.progress().report_error(&format!(
                "⚠️  Warning: {} is licensed under {}, which conflicts with {}",
                artifact.coordinates(),
                licenses.join(" / "),
                response.reference_license
            ));
        }

        let undetected = response.statistics.undetected;
        if undetected > 0 {
            self.progress().report_error(&format!(
                "⚠️  Warning: No known license detected for {} artifact(s)",
                undetected
            ));
        }

        for text in response.license_texts.iter().filter(|t| t.text.is_none()) {
            self.progress().report(&format!(
                "💡 No {} template for {}",
                text.kind, text.license
            ));
        }
    }
}
