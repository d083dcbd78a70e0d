//! Dataset-level consistency checks.
//!
//! The query layer tolerates a malformed dataset (duplicates never panic,
//! orphans simply have no parent to find), so these properties are checked
//! out of band: the `pcf check` command runs them against a local snapshot
//! before publication.
//!
//! A category root is published as `N.0` at [`ProcessLevel::Category`];
//! the checks below treat it as a root, not as a depth-2 record.

use std::collections::{HashMap, HashSet};

use crate::hierarchy;
use crate::types::{Process, ProcessLevel};

/// One finding against a dataset. Ordered by the record that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("duplicate code {code:?} (first seen at {first}, again at {again})")]
    DuplicateCode {
        code: String,
        first: String,
        again: String,
    },
    #[error("duplicate @id {id:?}")]
    DuplicateId { id: String },
    #[error("{hierarchy_id}: no record at parent position {parent}")]
    MissingParent {
        hierarchy_id: String,
        parent: String,
    },
    #[error("{hierarchy_id}: level {level} does not match depth (expected {expected})")]
    LevelMismatch {
        hierarchy_id: String,
        level: ProcessLevel,
        expected: ProcessLevel,
    },
    #[error("{hierarchy_id}: advisory parent reference {parent:?} resolves to no record")]
    DanglingParentRef {
        hierarchy_id: String,
        parent: String,
    },
    #[error("{hierarchy_id}: advisory parent reference {parent:?} is not the lexical parent")]
    ParentRefMismatch {
        hierarchy_id: String,
        parent: String,
    },
}

/// Check every dataset-level invariant, returning all findings in record
/// order. An empty result means the dataset is publishable.
pub fn validate(items: &[Process]) -> Vec<Violation> {
    let mut violations = Vec::new();

    let mut seen_codes: HashMap<&str, &str> = HashMap::new();
    let mut seen_ids: HashSet<&str> = HashSet::new();
    let positions: HashSet<&str> = items.iter().map(|p| p.hierarchy_id.as_str()).collect();
    let by_id: HashMap<&str, &Process> = items.iter().map(|p| (p.id.as_str(), p)).collect();

    for item in items {
        match seen_codes.get(item.code.as_str()) {
            Some(first) => violations.push(Violation::DuplicateCode {
                code: item.code.clone(),
                first: (*first).to_string(),
                again: item.hierarchy_id.clone(),
            }),
            None => {
                seen_codes.insert(&item.code, &item.hierarchy_id);
            }
        }

        if !seen_ids.insert(&item.id) {
            violations.push(Violation::DuplicateId {
                id: item.id.clone(),
            });
        }

        if let Some(parent) = lexical_parent(&item.hierarchy_id) {
            let sentinel = format!("{parent}.0");
            if !positions.contains(parent) && !positions.contains(sentinel.as_str()) {
                violations.push(Violation::MissingParent {
                    hierarchy_id: item.hierarchy_id.clone(),
                    parent: parent.to_string(),
                });
            }
        }

        if let Some(expected) = ProcessLevel::from_depth(effective_depth(&item.hierarchy_id)) {
            if item.level != expected {
                violations.push(Violation::LevelMismatch {
                    hierarchy_id: item.hierarchy_id.clone(),
                    level: item.level,
                    expected,
                });
            }
        }

        if let Some(parent_ref) = &item.parent {
            match by_id.get(parent_ref.as_str()) {
                None => violations.push(Violation::DanglingParentRef {
                    hierarchy_id: item.hierarchy_id.clone(),
                    parent: parent_ref.clone(),
                }),
                Some(parent) => {
                    let lexical = lexical_parent(&item.hierarchy_id);
                    let sentinel = lexical.map(|p| format!("{p}.0"));
                    let matches = lexical == Some(parent.hierarchy_id.as_str())
                        || sentinel.as_deref() == Some(parent.hierarchy_id.as_str());
                    if !matches {
                        violations.push(Violation::ParentRefMismatch {
                            hierarchy_id: item.hierarchy_id.clone(),
                            parent: parent_ref.clone(),
                        });
                    }
                }
            }
        }
    }

    violations
}

/// Lexical parent position, with category roots (`N` and `N.0`) treated as
/// having none.
fn lexical_parent(hierarchy_id: &str) -> Option<&str> {
    if is_category_root(hierarchy_id) {
        return None;
    }
    hierarchy::parent_id(hierarchy_id)
}

/// Depth for level checking, counting the `N.0` sentinel as depth 1.
fn effective_depth(hierarchy_id: &str) -> usize {
    if is_category_root(hierarchy_id) {
        1
    } else {
        hierarchy::depth(hierarchy_id)
    }
}

fn is_category_root(hierarchy_id: &str) -> bool {
    hierarchy::depth(hierarchy_id) == 1
        || (hierarchy::depth(hierarchy_id) == 2 && hierarchy_id.ends_with(".0"))
}
