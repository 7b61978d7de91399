/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod audit_request;
mod audit_response;
mod license_overrides;
mod output_format;
mod project_identity;

pub use audit_request::AuditRequest;
pub use audit_response::{AuditResponse, LicenseText};
pub use license_overrides::LicenseOverrides;
pub use output_format::OutputFormat;
pub use project_identity::ProjectIdentity;
