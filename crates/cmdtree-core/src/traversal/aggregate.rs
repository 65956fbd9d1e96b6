//! Whole-forest aggregate computation
//!
//! Depth is assigned top-down on the way in and subtree size is summed
//! bottom-up on the way out, in a single pass driven by an explicit stack so
//! that tree depth is bounded by heap memory rather than the call stack.

use serde::Serialize;

use crate::model::{Node, NodeIdx};

/// Traversal work item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frame {
    /// Pre-order visit: assign depth, schedule children
    Enter(NodeIdx),
    /// Post-order finalize: sum children's subtree sizes
    Exit(NodeIdx),
}

/// Counters from one recompute pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RecomputeStats {
    /// Nodes finalized by the pass
    pub nodes_visited: usize,
    /// Enter and Exit frames pushed, including the root seed
    pub frames_pushed: usize,
    /// Largest work-stack length observed
    pub peak_stack_len: usize,
}

/// Recompute `depth` and `subtree_size` for every node reachable from the root
///
/// `nodes` is the store arena; `NodeIdx::ROOT` must be its first slot and all
/// parent/child slots must be in bounds. Children are finalized in insertion
/// order.
///
/// Each node is entered and exited once, so the pass is O(V) time. A node has
/// at most one frame on the stack at a time, so the stack never holds more
/// than V frames, whatever the shape of the tree.
pub fn recompute(nodes: &mut [Node]) -> RecomputeStats {
    let mut stats = RecomputeStats::default();
    if nodes.is_empty() {
        return stats;
    }

    let mut visited = vec![false; nodes.len()];
    let mut stack = vec![Frame::Enter(NodeIdx::ROOT)];
    stats.frames_pushed = 1;
    stats.peak_stack_len = 1;

    while let Some(frame) = stack.pop() {
        match frame {
            Frame::Enter(idx) => {
                let slot = idx.index();
                // Unreachable for a well-formed tree; guards against a child
                // scheduled twice.
                if visited[slot] {
                    continue;
                }
                visited[slot] = true;

                let depth = match nodes[slot].parent {
                    None => 0,
                    Some(parent) => nodes[parent.index()].depth + 1,
                };
                nodes[slot].depth = depth;

                stack.push(Frame::Exit(idx));
                // Reversed so the first-inserted child is popped first.
                stack.extend(nodes[slot].children.iter().rev().map(|&c| Frame::Enter(c)));
                stats.frames_pushed += 1 + nodes[slot].children.len();
                stats.peak_stack_len = stats.peak_stack_len.max(stack.len());
            }
            Frame::Exit(idx) => {
                let slot = idx.index();
                let size: usize = nodes[slot]
                    .children
                    .iter()
                    .map(|c| 1 + nodes[c.index()].subtree_size)
                    .sum();
                nodes[slot].subtree_size = size;
                stats.nodes_visited += 1;
            }
        }
    }

    stats
}
