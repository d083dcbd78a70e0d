//! Shared assertion helpers for the integration harnesses.

use pcf_core::Process;

/// Project a result set onto its codes, preserving order.
pub fn codes(things: &[Process]) -> Vec<&str> {
    things.iter().map(|p| p.code.as_str()).collect()
}

/// Project a result set onto its hierarchy IDs, preserving order.
pub fn hierarchy_ids(things: &[Process]) -> Vec<&str> {
    things.iter().map(|p| p.hierarchy_id.as_str()).collect()
}

/// Assert that `subset`'s codes all appear in `superset`.
pub fn assert_subset(subset: &[Process], superset: &[Process]) {
    let superset = codes(superset);
    for process in subset {
        assert!(
            superset.contains(&process.code.as_str()),
            "code {} missing from superset {:?}",
            process.code,
            superset
        );
    }
}
