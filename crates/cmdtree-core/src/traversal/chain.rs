use crate::errors::{HierarchyError, Result};
use crate::ops::HierarchyStore;

/// Compute the chain of command from the root down to `person_id`
///
/// Follows commander links upward and reverses, so the first element is
/// always the root and the last is `person_id`. Works on a dirty store: it
/// reads only the immutable parent links, never the memoized aggregates.
///
/// # Errors
/// * `UnknownQueryTarget` - If `person_id` is not in the hierarchy
pub fn chain_of_command(store: &HierarchyStore, person_id: &str) -> Result<Vec<String>> {
    let mut current = store
        .lookup(person_id)
        .ok_or_else(|| HierarchyError::UnknownQueryTarget {
            person_id: person_id.to_string(),
        })?;

    let mut path = Vec::new();
    loop {
        let node = store.node_at(current);
        path.push(node.id.clone());
        match node.parent {
            Some(parent) => current = parent,
            None => break,
        }
    }

    path.reverse();
    Ok(path)
}
