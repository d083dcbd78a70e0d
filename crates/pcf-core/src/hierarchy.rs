//! Lexical hierarchy-ID logic.
//!
//! Tree position in the taxonomy is encoded entirely in the dot-separated
//! `hierarchy_id` string (`"3.4.2.5"`). All relationships here are computed
//! by string prefix matching on a `.` boundary plus segment counting —
//! never numeric comparison, so `"10.1"` can never collide with category
//! `"1"`. The advisory `parent`/`children` record fields play no part.

/// Number of dot-separated segments in a hierarchy ID.
///
/// `depth("3") == 1`, `depth("3.4.2") == 3`. The empty string counts as one
/// (empty) segment, matching `str::split` semantics.
pub fn depth(hierarchy_id: &str) -> usize {
    hierarchy_id.split('.').count()
}

/// Hierarchy ID of the lexical parent, or `None` for a root.
pub fn parent_id(hierarchy_id: &str) -> Option<&str> {
    hierarchy_id.rsplit_once('.').map(|(parent, _)| parent)
}

/// Whether `child` is a direct child of `parent`: prefix match on the `.`
/// boundary AND exactly one more segment.
pub fn is_direct_child(child: &str, parent: &str) -> bool {
    let mut prefix = String::with_capacity(parent.len() + 1);
    prefix.push_str(parent);
    prefix.push('.');
    child.starts_with(&prefix) && depth(child) == depth(parent) + 1
}

/// Whether `hierarchy_id` belongs to the given category: it either starts
/// with `category + "."` or is exactly the `category + ".0"` root sentinel.
pub fn in_category(hierarchy_id: &str, category: &str) -> bool {
    let mut prefix = String::with_capacity(category.len() + 1);
    prefix.push_str(category);
    prefix.push('.');
    hierarchy_id.starts_with(&prefix) || hierarchy_id == format!("{category}.0")
}

/// Whether a string is a well-formed hierarchy ID: one or more non-empty
/// all-digit segments separated by single dots.
pub fn is_valid_id(hierarchy_id: &str) -> bool {
    !hierarchy_id.is_empty()
        && hierarchy_id
            .split('.')
            .all(|seg| !seg.is_empty() && seg.bytes().all(|b| b.is_ascii_digit()))
}

/// Whether a string is a well-formed category number (a single segment).
pub fn is_valid_category(category: &str) -> bool {
    !category.is_empty() && category.bytes().all(|b| b.is_ascii_digit())
}
