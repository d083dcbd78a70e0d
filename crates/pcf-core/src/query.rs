//! Pure query functions over a loaded taxonomy slice.
//!
//! Every function is a linear scan preserving insertion order. The dataset
//! is ~2,000 records, read-only after load; nothing here warrants an index.
//! The client crate wraps these behind its memoized collection.

use crate::hierarchy;
use crate::types::Process;

/// Exact lookup by taxonomy `code`, or by `@id` equal to the canonical
/// record URI `{base_url}/{code}`. First match wins; duplicate codes are a
/// dataset defect (see [`validate`](crate::validate)) but never a panic.
pub fn find_by_code<'a>(items: &'a [Process], base_url: &str, code: &str) -> Option<&'a Process> {
    let canonical = format!("{}/{}", base_url.trim_end_matches('/'), code);
    items
        .iter()
        .find(|item| item.code == code || item.id == canonical)
}

/// Case-insensitive substring search over `name` and `description`.
///
/// Records without a description match on name only. The empty query
/// matches every record.
pub fn search<'a>(items: &'a [Process], query: &str) -> Vec<&'a Process> {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.name.to_lowercase().contains(&needle)
                || item
                    .description
                    .as_ref()
                    .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Exact lookup by hierarchy ID.
pub fn find_by_hierarchy_id<'a>(items: &'a [Process], hierarchy_id: &str) -> Option<&'a Process> {
    items.iter().find(|item| item.hierarchy_id == hierarchy_id)
}

/// Direct children of the given position: one extra segment, dot-boundary
/// prefix match. Grandchildren and deeper descendants are excluded.
pub fn children_of<'a>(items: &'a [Process], hierarchy_id: &str) -> Vec<&'a Process> {
    items
        .iter()
        .filter(|item| hierarchy::is_direct_child(&item.hierarchy_id, hierarchy_id))
        .collect()
}

/// Every record under the given category number, including the `N.0`
/// category-root sentinel record itself.
pub fn in_category<'a>(items: &'a [Process], category: &str) -> Vec<&'a Process> {
    items
        .iter()
        .filter(|item| hierarchy::in_category(&item.hierarchy_id, category))
        .collect()
}
