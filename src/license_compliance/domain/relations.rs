//! Compatibility and attribution rules between catalog licenses
//!
//! Rules are defined per reference license (the license of the consuming
//! project). A reference without a table has no rule, and every lookup
//! against it answers `false`.

use super::license::License;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Kind of relation a candidate license can have with a reference license
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Candidate cannot be used by a project under the reference license
    Conflict,
    /// Candidate must be mentioned in the project's LICENSE
    MentionInLicense,
    /// Candidate must be mentioned in the project's NOTICE
    MentionInNotice,
}

type RelationTable = HashMap<(License, Relation), HashSet<License>>;

static RELATIONS: LazyLock<RelationTable> = LazyLock::new(build_relations);

/// Licenses a project under Apache 2 may depend on
const APACHE_2_COMPATIBLE: &[License] = &[
    License::Apache2,
    License::Apache11,
    License::Php301,
    License::Bsd2Clauses,
    License::Bsd3Clauses,
    License::MitX11,
    License::Icu,
    License::UolNcsa,
    License::W3c,
    License::Zlib,
    License::Afl,
    License::MsPl,
    License::CcA,
    License::Python,
    License::Bsl,
    License::Edl,
    License::Wtfpl,
    License::Ruby,
    License::Cpl,
    License::PublicDomain,
    License::Cddl,
    License::Json,
];

/// Licenses whose text has to be carried along by an Apache 2 project
const APACHE_2_ATTRIBUTION: &[License] = &[
    License::Bsd2Clauses,
    License::Bsd3Clauses,
    License::Cddl,
    License::Cpl,
    License::Epl,
    License::Mozilla,
];

fn build_relations() -> RelationTable {
    let mut table = RelationTable::new();

    let apache_2_conflicts: HashSet<License> = License::ALL
        .iter()
        .copied()
        .filter(|license| !APACHE_2_COMPATIBLE.contains(license))
        .collect();
    table.insert((License::Apache2, Relation::Conflict), apache_2_conflicts);

    let attribution: HashSet<License> = APACHE_2_ATTRIBUTION.iter().copied().collect();
    table.insert(
        (License::Apache2, Relation::MentionInLicense),
        attribution.clone(),
    );
    table.insert((License::Apache2, Relation::MentionInNotice), attribution);

    table
}

/// Whether `candidate` has `relation` with `reference`
pub fn is_related(candidate: License, reference: License, relation: Relation) -> bool {
    RELATIONS
        .get(&(reference, relation))
        .is_some_and(|related| related.contains(&candidate))
}

/// Whether any rule of kind `relation` is defined for `reference`
pub fn has_rules_for(reference: License, relation: Relation) -> bool {
    RELATIONS.contains_key(&(reference, relation))
}
