/// Use cases module containing application business logic orchestration
mod audit_licenses;
mod load_dependency_tree;

pub use audit_licenses::AuditLicensesUseCase;
pub use load_dependency_tree::LoadDependencyTreeUseCase;
