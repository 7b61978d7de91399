use crate::application::read_models::{
    ArtifactView, AuditReadModel, DependencyNodeView, LicenseTextView, LicenseView,
    OrganizationView,
};
use crate::ports::outbound::AuditFormatter;
use crate::shared::Result;

/// Markdown table header for artifact information
const TABLE_HEADER: &str = "| Artifact | Organization | Version | License |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|----------|--------------|---------|---------|\n";

/// MarkdownFormatter adapter for generating a human-readable audit report
///
/// Renders the findings as tables and appends the LICENSE and NOTICE texts
/// the project has to carry.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn format_licenses(licenses: &[LicenseView]) -> String {
        if licenses.is_empty() {
            return "N/A".to_string();
        }
        licenses
            .iter()
            .map(|license| license.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Artifact name, linked to its project URL when known
    fn format_artifact_name(artifact: &ArtifactView) -> String {
        let name = Self::escape_markdown_table_cell(&artifact.name);
        if artifact.url.is_empty() {
            name
        } else {
            format!("[{}]({})", name, artifact.url)
        }
    }

    fn plural(count: usize, singular: &str, plural: &str) -> String {
        if count == 1 {
            format!("{} {}", count, singular)
        } else {
            format!("{} {}", count, plural)
        }
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, model: &AuditReadModel) {
        let metadata = &model.metadata;
        output.push_str("# License Compliance Report\n\n");
        output.push_str(&format!(
            "Project license: **{}** (`{}`)\n\n",
            metadata.reference_license.name, metadata.reference_license.id
        ));
        output.push_str(&format!(
            "*Generated by {} {} on {}*\n\n",
            metadata.tool_name, metadata.tool_version, metadata.timestamp
        ));
    }

    fn render_summary(&self, output: &mut String, model: &AuditReadModel) {
        let summary = &model.summary;
        output.push_str("## Summary\n\n");
        output.push_str("| Metric | Value |\n");
        output.push_str("|--------|-------|\n");
        for (metric, value) in [
            ("Dependencies", summary.dependency_nodes),
            ("Artifacts", summary.artifacts),
            ("Maximum depth", summary.max_depth),
            ("Artifacts without detected license", summary.undetected_licenses),
            ("License conflicts", summary.conflicts),
            ("Mentions required in LICENSE", summary.mentions_in_license),
            ("Mentions required in NOTICE", summary.mentions_in_notice),
        ] {
            output.push_str(&format!("| {} | {} |\n", metric, value));
        }
        output.push('\n');
    }

    fn render_artifact_table(&self, output: &mut String, artifacts: &[ArtifactView]) {
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);
        for artifact in artifacts {
            self.render_artifact_row(output, artifact);
        }
        output.push('\n');
    }

    fn render_artifact_row(&self, output: &mut String, artifact: &ArtifactView) {
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            Self::escape_markdown_table_cell(&artifact.coordinates),
            Self::escape_markdown_table_cell(&artifact.organization),
            Self::escape_markdown_table_cell(&artifact.version),
            Self::escape_markdown_table_cell(&Self::format_licenses(&artifact.licenses)),
        ));
    }

    fn render_conflicts(&self, output: &mut String, conflicts: &[ArtifactView]) {
        output.push_str("## License Conflicts\n\n");
        if conflicts.is_empty() {
            output.push_str("*No license conflicts*\n\n");
            return;
        }
        output.push_str(&format!(
            "### ⚠️Warning Found {} licensed incompatibly with the project.\n\n",
            Self::plural(conflicts.len(), "artifact", "artifacts")
        ));
        self.render_artifact_table(output, conflicts);
    }

    fn render_mentions(&self, output: &mut String, kind: &str, mentions: &[ArtifactView]) {
        output.push_str(&format!("## Mentions Required in {}\n\n", kind));
        if mentions.is_empty() {
            output.push_str(&format!("*No artifact requires a mention in {}*\n\n", kind));
            return;
        }
        self.render_artifact_table(output, mentions);
    }

    fn render_organizations(&self, output: &mut String, organizations: &[OrganizationView]) {
        output.push_str("## Dependencies by Organization\n\n");
        if organizations.is_empty() {
            output.push_str("*No dependencies*\n\n");
            return;
        }
        output.push_str("| Organization | Artifact | Version | License |\n");
        output.push_str("|--------------|----------|---------|---------|\n");
        for organization in organizations {
            for artifact in &organization.artifacts {
                output.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    Self::escape_markdown_table_cell(&organization.name),
                    Self::format_artifact_name(artifact),
                    Self::escape_markdown_table_cell(&artifact.version),
                    Self::escape_markdown_table_cell(&Self::format_licenses(&artifact.licenses)),
                ));
            }
        }
        output.push('\n');
    }

    fn render_tree(&self, output: &mut String, roots: &[DependencyNodeView]) {
        output.push_str("## Dependency Tree\n\n");
        if roots.is_empty() {
            output.push_str("*No dependencies*\n\n");
            return;
        }
        for root in roots {
            self.render_tree_node(output, root, 0);
        }
        output.push('\n');
    }

    fn render_tree_node(&self, output: &mut String, node: &DependencyNodeView, depth: usize) {
        let licenses: Vec<String> = node
            .artifacts
            .iter()
            .map(|artifact| Self::format_licenses(&artifact.licenses))
            .collect();
        output.push_str(&format!(
            "{}- `{}` ({})\n",
            "  ".repeat(depth),
            node.coordinates,
            licenses.join("; ")
        ));
        for child in &node.children {
            self.render_tree_node(output, child, depth + 1);
        }
    }

    fn render_license_texts(&self, output: &mut String, texts: &[LicenseTextView]) {
        if texts.is_empty() {
            return;
        }
        output.push_str("## License Texts\n\n");
        for text in texts {
            output.push_str(&format!("### {}: {}\n\n", text.kind, text.license.name));
            match &text.text {
                Some(content) => {
                    output.push_str("```text\n");
                    output.push_str(content.trim_end());
                    output.push_str("\n```\n\n");
                }
                None => output.push_str(&format!(
                    "*No template available for `{}_{}`*\n\n",
                    text.kind, text.license.id
                )),
            }
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditFormatter for MarkdownFormatter {
    fn format(&self, model: &AuditReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, model);
        self.render_summary(&mut output, model);
        self.render_conflicts(&mut output, &model.conflicts);
        self.render_mentions(&mut output, "LICENSE", &model.mentions_in_license);
        self.render_mentions(&mut output, "NOTICE", &model.mentions_in_notice);
        self.render_organizations(&mut output, &model.organizations);
        self.render_tree(&mut output, &model.dependencies);
        self.render_license_texts(&mut output, &model.license_texts);

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::{AuditMetadataView, AuditSummaryView};
    use crate::license_compliance::domain::License;

    fn artifact_view(coordinates: &str, organization: &str, license: Option<License>) -> ArtifactView {
        ArtifactView {
            coordinates: coordinates.to_string(),
            organization: organization.to_string(),
            organization_url: String::new(),
            name: coordinates.split(':').nth(1).unwrap_or_default().to_string(),
            version: coordinates.split(':').nth(2).unwrap_or_default().to_string(),
            url: String::new(),
            licenses: license.into_iter().map(LicenseView::from).collect(),
            declared_license: None,
            overridden_license: None,
            license_files: vec![],
        }
    }

    fn create_test_read_model() -> AuditReadModel {
        let mail = artifact_view("javax.mail:mail:1.4:jar", "Oracle", Some(License::Cddl));
        let readline = artifact_view("org.gnu:readline:8.0:jar", "GNU", Some(License::Gpl));
        AuditReadModel {
            metadata: AuditMetadataView {
                timestamp: "2024-01-01T00:00:00Z".to_string(),
                tool_name: "honker".to_string(),
                tool_version: "1.0.0".to_string(),
                reference_license: LicenseView::from(License::Apache2),
            },
            summary: AuditSummaryView {
                dependency_nodes: 2,
                artifacts: 2,
                max_depth: 2,
                undetected_licenses: 0,
                conflicts: 1,
                mentions_in_license: 1,
                mentions_in_notice: 1,
            },
            dependencies: vec![DependencyNodeView {
                coordinates: "javax.mail:mail:1.4".to_string(),
                artifacts: vec![mail.clone()],
                children: vec![DependencyNodeView {
                    coordinates: "org.gnu:readline:8.0".to_string(),
                    artifacts: vec![readline.clone()],
                    children: vec![],
                }],
            }],
            organizations: vec![
                OrganizationView {
                    name: "GNU".to_string(),
                    artifacts: vec![readline.clone()],
                },
                OrganizationView {
                    name: "Oracle".to_string(),
                    artifacts: vec![mail.clone()],
                },
            ],
            conflicts: vec![readline],
            mentions_in_license: vec![mail.clone()],
            mentions_in_notice: vec![mail],
            license_texts: vec![
                LicenseTextView {
                    license: LicenseView::from(License::Cddl),
                    kind: "LICENSE".to_string(),
                    text: Some("COMMON DEVELOPMENT AND DISTRIBUTION LICENSE\n".to_string()),
                },
                LicenseTextView {
                    license: LicenseView::from(License::Cddl),
                    kind: "NOTICE".to_string(),
                    text: None,
                },
            ],
        }
    }

    #[test]
    fn test_format_header_and_summary() {
        let output = MarkdownFormatter::new()
            .format(&create_test_read_model())
            .unwrap();

        assert!(output.starts_with("# License Compliance Report\n\n"));
        assert!(output.contains("Project license: **The Apache Software License, Version 2.0** (`APACHE_2`)"));
        assert!(output.contains("| License conflicts | 1 |"));
        assert!(output.contains("| Maximum depth | 2 |"));
    }

    #[test]
    fn test_format_conflicts_table() {
        let output = MarkdownFormatter::new()
            .format(&create_test_read_model())
            .unwrap();

        assert!(output.contains("### ⚠️Warning Found 1 artifact licensed incompatibly with the project."));
        assert!(output.contains("| org.gnu:readline:8.0:jar | GNU | 8.0 |"));
    }

    #[test]
    fn test_format_without_conflicts() {
        let mut model = create_test_read_model();
        model.conflicts.clear();
        let output = MarkdownFormatter::new().format(&model).unwrap();
        assert!(output.contains("*No license conflicts*"));
    }

    #[test]
    fn test_format_nested_tree() {
        let output = MarkdownFormatter::new()
            .format(&create_test_read_model())
            .unwrap();

        assert!(output.contains("- `javax.mail:mail:1.4` (Common Development and Distribution License)\n"));
        assert!(output.contains("\n  - `org.gnu:readline:8.0` ("));
    }

    #[test]
    fn test_format_appends_license_texts() {
        let output = MarkdownFormatter::new()
            .format(&create_test_read_model())
            .unwrap();

        assert!(output.contains("## License Texts"));
        assert!(output.contains("```text\nCOMMON DEVELOPMENT AND DISTRIBUTION LICENSE\n```"));
        assert!(output.contains("*No template available for `NOTICE_CDDL`*"));
    }

    #[test]
    fn test_escape_markdown_table_cell() {
        assert_eq!(
            MarkdownFormatter::escape_markdown_table_cell("a|b\nc"),
            "a\\|b c"
        );
    }

    #[test]
    fn test_format_artifact_name_with_url() {
        let mut artifact = artifact_view("g:a:1:jar", "G", None);
        assert_eq!(MarkdownFormatter::format_artifact_name(&artifact), "a");
        artifact.url = "https://example.org".to_string();
        assert_eq!(
            MarkdownFormatter::format_artifact_name(&artifact),
            "[a](https://example.org)"
        );
        assert_eq!(MarkdownFormatter::format_licenses(&artifact.licenses), "N/A");
    }
}
