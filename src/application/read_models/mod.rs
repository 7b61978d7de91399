//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of audit results for the formatters.

mod artifact_view;
mod audit_read_model;
mod audit_read_model_builder;

pub use artifact_view::{ArtifactView, LicenseView};
pub use audit_read_model::{
    AuditMetadataView, AuditReadModel, AuditSummaryView, DependencyNodeView, LicenseTextView,
    OrganizationView,
};
pub use audit_read_model_builder::AuditReadModelBuilder;
