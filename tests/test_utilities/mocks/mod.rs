/// Mock implementations for testing
mod mock_archive_loaders;
mod mock_dependency_resolver;
mod mock_progress_reporter;
mod mock_template_store;

pub use mock_archive_loaders::{MockLicenseFilesLoader, MockManifestLoader, MockPomLoader};
pub use mock_dependency_resolver::MockDependencyResolver;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_template_store::MockTemplateStore;
