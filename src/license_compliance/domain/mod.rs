pub mod artifact;
pub mod dep_tree;
pub mod gav;
pub mod license;
pub mod relations;

pub use artifact::{Artifact, Manifest, Pom, PomLicense, SomeFile};
pub use dep_tree::{DepTree, DepTreeData, DepTreeNode};
pub use gav::Gav;
pub use license::{License, LicenseRecord, TemplateKind, CATALOG};
pub use relations::Relation;
