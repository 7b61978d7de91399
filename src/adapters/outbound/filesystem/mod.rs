/// Filesystem adapters for dependency descriptions, templates and report output
mod dependency_resolver;
mod file_writer;
mod template_store;

pub use dependency_resolver::{TomlDependencyResolver, DEPENDENCIES_FILE_NAME};
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use template_store::DirectoryTemplateStore;
