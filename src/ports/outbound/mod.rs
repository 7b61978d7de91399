/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (archives, file system, console).
pub mod dependency_resolver;
pub mod formatter;
pub mod license_files_loader;
pub mod manifest_loader;
pub mod output_presenter;
pub mod pom_loader;
pub mod progress_reporter;
pub mod template_store;

pub use dependency_resolver::{
    DependencyResolver, ResolvedArtifact, ResolvedDependency, ResolvedGraph,
};
pub use formatter::AuditFormatter;
pub use license_files_loader::LicenseFilesLoader;
pub use manifest_loader::ManifestLoader;
pub use output_presenter::OutputPresenter;
pub use pom_loader::PomLoader;
pub use progress_reporter::ProgressReporter;
pub use template_store::TemplateStore;
