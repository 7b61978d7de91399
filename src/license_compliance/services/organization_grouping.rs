use super::visitor::DepTreeVisitor;
use crate::license_compliance::domain::{Artifact, DepTreeNode};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Organization name compared and ordered ignoring case
///
/// Equal keys in different casing collapse into one map entry; the entry
/// keeps the casing it was first inserted with.
#[derive(Debug, Clone)]
struct OrganizationKey {
    name: String,
    folded: String,
}

impl OrganizationKey {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            folded: name.to_lowercase(),
        }
    }
}

impl PartialEq for OrganizationKey {
    fn eq(&self, other: &Self) -> bool {
        self.folded == other.folded
    }
}

impl Eq for OrganizationKey {}

impl PartialOrd for OrganizationKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrganizationKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.folded.cmp(&other.folded)
    }
}

/// Artifacts grouped by organization, ordered case-insensitively
#[derive(Debug, Clone, Default)]
pub struct OrganizationBuckets {
    buckets: BTreeMap<OrganizationKey, Vec<Artifact>>,
}

impl OrganizationBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `artifact` to the bucket of `organization` unless already present
    pub fn insert(&mut self, organization: &str, artifact: Artifact) {
        let bucket = self
            .buckets
            .entry(OrganizationKey::new(organization))
            .or_default();
        if !bucket.contains(&artifact) {
            bucket.push(artifact);
        }
    }

    /// Artifacts of `organization`, looked up ignoring case
    pub fn get(&self, organization: &str) -> Option<&[Artifact]> {
        self.buckets
            .get(&OrganizationKey::new(organization))
            .map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Artifact])> {
        self.buckets
            .iter()
            .map(|(key, artifacts)| (key.name.as_str(), artifacts.as_slice()))
    }

    pub fn organizations(&self) -> Vec<&str> {
        self.buckets.keys().map(|key| key.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Groups every artifact of the tree by its resolved organization
#[derive(Debug, Default)]
pub struct DependenciesByOrganizationVisitor {
    buckets: OrganizationBuckets,
}

impl DependenciesByOrganizationVisitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buckets(&self) -> &OrganizationBuckets {
        &self.buckets
    }

    pub fn into_buckets(self) -> OrganizationBuckets {
        self.buckets
    }
}

impl DepTreeVisitor for DependenciesByOrganizationVisitor {
    fn visit_enter(&mut self, node: &DepTreeNode) -> bool {
        for artifact in node.data().artifacts() {
            self.buckets
                .insert(artifact.organization(), artifact.clone());
        }
        true
    }

    fn visit_exit(&mut self, _node: &DepTreeNode) -> bool {
        true
    }
}
