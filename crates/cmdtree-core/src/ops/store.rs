use std::collections::HashMap;

use crate::errors::{HierarchyError, Result};
use crate::model::{Freshness, Node, NodeIdx};
use crate::traversal::{self, RecomputeStats};
use crate::{log_op_end, log_op_start};

/// Reserved key of the synthetic root every hierarchy starts from
pub const ROOT_ID: &str = "ROOT";

/// In-memory command hierarchy
///
/// Nodes live in an arena in insertion order; `index` interns each key to
/// its arena slot. The store owns every node exclusively.
/// Not thread-safe - wrap in a `Mutex` if shared, since both insert and
/// query touch the whole structure.
///
/// Aggregates (`depth`, `subtree_size`) are recomputed lazily: inserts only
/// mark the store [`Freshness::Dirty`], and the next read that needs
/// aggregates recomputes the whole forest once.
#[derive(Debug, Clone)]
pub struct HierarchyStore {
    nodes: Vec<Node>,
    index: HashMap<String, NodeIdx>,
    freshness: Freshness,
    last_recompute: Option<RecomputeStats>,
}

// The root always exists, so an `is_empty` would always be false.
#[allow(clippy::len_without_is_empty)]
impl HierarchyStore {
    /// Create a store holding only the root
    pub fn new() -> Self {
        let mut index = HashMap::new();
        index.insert(ROOT_ID.to_string(), NodeIdx::ROOT);
        Self {
            nodes: vec![Node::root(ROOT_ID)],
            index,
            freshness: Freshness::Fresh,
            last_recompute: None,
        }
    }

    /// Attach `person_id` as the newest subordinate of `commander_id`
    ///
    /// # Errors
    /// * `DuplicateId` - If `person_id` already exists (checked first)
    /// * `UnknownCommander` - If `commander_id` does not exist
    ///
    /// On error the store is unchanged, including its freshness.
    pub fn insert(&mut self, person_id: &str, commander_id: &str) -> Result<()> {
        if self.index.contains_key(person_id) {
            tracing::debug!(person_id, commander_id, "insert rejected: duplicate id");
            return Err(HierarchyError::DuplicateId {
                person_id: person_id.to_string(),
            });
        }

        let parent = match self.index.get(commander_id) {
            Some(&parent) => parent,
            None => {
                tracing::debug!(person_id, commander_id, "insert rejected: unknown commander");
                return Err(HierarchyError::UnknownCommander {
                    person_id: person_id.to_string(),
                    commander_id: commander_id.to_string(),
                });
            }
        };

        let idx = NodeIdx::new(self.nodes.len());
        self.nodes.push(Node::new(person_id, parent));
        self.nodes[parent.index()].children.push(idx);
        self.index.insert(person_id.to_string(), idx);
        self.freshness = Freshness::Dirty;

        Ok(())
    }

    /// Boolean form of [`insert`](Self::insert): `true` if the node was added
    pub fn try_insert(&mut self, person_id: &str, commander_id: &str) -> bool {
        self.insert(person_id, commander_id).is_ok()
    }

    /// Number of strict descendants of `person_id`
    ///
    /// Recomputes first if the store is dirty, even when the target turns out
    /// to be unknown.
    ///
    /// # Errors
    /// * `UnknownQueryTarget` - If `person_id` is not in the hierarchy
    pub fn query(&mut self, person_id: &str) -> Result<usize> {
        self.ensure_fresh();
        self.fresh_node(person_id).map(|node| node.subtree_size)
    }

    /// Edge count from the root to `person_id`
    ///
    /// # Errors
    /// * `UnknownQueryTarget` - If `person_id` is not in the hierarchy
    pub fn depth(&mut self, person_id: &str) -> Result<usize> {
        self.ensure_fresh();
        self.fresh_node(person_id).map(|node| node.depth)
    }

    /// Recompute aggregates if dirty
    ///
    /// Returns `true` if a recompute pass ran.
    pub fn ensure_fresh(&mut self) -> bool {
        if self.freshness.is_fresh() {
            return false;
        }
        self.recompute();
        true
    }

    fn recompute(&mut self) {
        log_op_start!("recompute", node_count = self.nodes.len());
        let start = std::time::Instant::now();

        let stats = traversal::recompute(&mut self.nodes);
        self.freshness = Freshness::Fresh;
        self.last_recompute = Some(stats);

        log_op_end!(
            "recompute",
            duration_ms = start.elapsed().as_millis() as u64,
            node_count = stats.nodes_visited,
            peak_stack = stats.peak_stack_len
        );
    }

    fn fresh_node(&self, person_id: &str) -> Result<&Node> {
        self.node(person_id)
            .ok_or_else(|| HierarchyError::UnknownQueryTarget {
                person_id: person_id.to_string(),
            })
    }

    /// Current staleness of the memoized aggregates
    pub fn freshness(&self) -> Freshness {
        self.freshness
    }

    /// Counters from the most recent recompute, if any ran
    pub fn last_recompute(&self) -> Option<RecomputeStats> {
        self.last_recompute
    }

    /// Check if `person_id` is in the hierarchy (the root always is)
    pub fn contains(&self, person_id: &str) -> bool {
        self.index.contains_key(person_id)
    }

    /// Number of nodes, including the root
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Arena slot of `person_id`
    pub fn lookup(&self, person_id: &str) -> Option<NodeIdx> {
        self.index.get(person_id).copied()
    }

    /// Node stored at `idx`
    ///
    /// # Panics
    ///
    /// Panics if `idx` was not issued by this store.
    pub fn node_at(&self, idx: NodeIdx) -> &Node {
        &self.nodes[idx.index()]
    }

    /// Read-only view of a node
    ///
    /// `depth` and `subtree_size` on the returned node are only meaningful
    /// while [`freshness`](Self::freshness) is `Fresh`.
    pub fn node(&self, person_id: &str) -> Option<&Node> {
        self.lookup(person_id).map(|idx| self.node_at(idx))
    }

    /// Commander of `person_id` (None for the root or unknown keys)
    pub fn parent_of(&self, person_id: &str) -> Option<&str> {
        let parent = self.node(person_id)?.parent?;
        Some(self.node_at(parent).id.as_str())
    }

    /// Direct subordinates of `person_id` in insertion order
    pub fn children_of(&self, person_id: &str) -> Option<Vec<&str>> {
        let node = self.node(person_id)?;
        Some(
            node.children
                .iter()
                .map(|&c| self.node_at(c).id.as_str())
                .collect(),
        )
    }

    /// All nodes in insertion order, root first
    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }
}

impl Default for HierarchyStore {
    fn default() -> Self {
        Self::new()
    }
}
