use crate::model::NodeIdx;
use crate::ops::HierarchyStore;

/// Render the hierarchy as an indented outline
///
/// One line per person in pre-order, children in insertion order, two spaces
/// of indent per level:
///
/// ```text
/// - ROOT (depth 0, subordinates 2)
///   - A (depth 1, subordinates 1)
///     - B (depth 2, subordinates 0)
/// ```
///
/// Recomputes aggregates first if the store is dirty. Uses an explicit stack,
/// so path-shaped hierarchies of any depth render without recursion.
pub fn render_hierarchy(store: &mut HierarchyStore) -> String {
    store.ensure_fresh();

    let mut output = String::new();
    let mut stack = vec![NodeIdx::ROOT];

    while let Some(idx) = stack.pop() {
        let node = store.node_at(idx);
        output.push_str(&"  ".repeat(node.depth));
        output.push_str(&format!(
            "- {} (depth {}, subordinates {})\n",
            node.id, node.depth, node.subtree_size
        ));
        stack.extend(node.children.iter().rev());
    }

    output
}
