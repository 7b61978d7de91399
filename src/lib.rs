//! honker - license compliance auditing for dependency trees
//!
//! This library builds the dependency tree of a project from a resolved
//! dependency graph, detects the license of every artifact from its archive
//! metadata, and reports license conflicts and LICENSE/NOTICE attribution
//! requirements. It follows hexagonal architecture and Domain-Driven Design
//! principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`license_compliance`): License catalog, dependency tree and analysis visitors
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use honker::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let tree_loader = LoadDependencyTreeUseCase::new(
//!     JarManifestLoader::new(),
//!     EmbeddedPomLoader::new(),
//!     ArchiveLicenseFilesLoader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Create use case
//! let use_case = AuditLicensesUseCase::new(
//!     TomlDependencyResolver::new(),
//!     DirectoryTemplateStore::new(PathBuf::from("templates")),
//!     tree_loader,
//! );
//!
//! // Execute
//! let request = AuditRequest::new(
//!     PathBuf::from("honker-deps.toml"),
//!     ProjectIdentity::new(License::Apache2),
//!     LicenseOverrides::new(),
//! );
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let model = AuditReadModelBuilder::build(&response);
//! println!("{}", MarkdownFormatter::new().format(&model)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod license_compliance;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::archive::{
        ArchiveLicenseFilesLoader, EmbeddedPomLoader, JarManifestLoader,
    };
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        DirectoryTemplateStore, FileSystemWriter, StdoutPresenter, TomlDependencyResolver,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{
        AuditRequest, AuditResponse, LicenseOverrides, OutputFormat, ProjectIdentity,
    };
    pub use crate::application::read_models::{AuditReadModel, AuditReadModelBuilder};
    pub use crate::application::use_cases::{AuditLicensesUseCase, LoadDependencyTreeUseCase};
    pub use crate::license_compliance::domain::{
        Artifact, DepTree, DepTreeData, DepTreeNode, Gav, License, TemplateKind,
    };
    pub use crate::license_compliance::services::DepTreeVisitor;
    pub use crate::ports::outbound::{
        AuditFormatter, DependencyResolver, LicenseFilesLoader, ManifestLoader, OutputPresenter,
        PomLoader, ProgressReporter, TemplateStore,
    };
    pub use crate::shared::Result;
}
