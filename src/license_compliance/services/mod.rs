mod attribution_detection;
mod conflict_detection;
mod organization_grouping;
mod tree_statistics;
mod visitor;

pub use attribution_detection::{MentionKind, MentionsVisitor};
pub use conflict_detection::LicenseConflictVisitor;
pub use organization_grouping::{DependenciesByOrganizationVisitor, OrganizationBuckets};
pub use tree_statistics::{TreeStatistics, TreeStatisticsVisitor};
pub use visitor::DepTreeVisitor;
