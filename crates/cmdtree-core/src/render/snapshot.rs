//! Serializable point-in-time view of a hierarchy
//!
//! Nodes are listed in insertion order with their commander and children by
//! key, so the snapshot is readable without knowing arena slots.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::model::Freshness;
use crate::ops::HierarchyStore;

/// One person in a [`HierarchySnapshot`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub id: String,
    pub commander: Option<String>,
    pub children: Vec<String>,
    pub depth: usize,
    pub subtree_size: usize,
}

/// Every node of a store with fresh aggregates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchySnapshot {
    /// Always `Fresh`: snapshots are only taken after a recompute
    pub freshness: Freshness,
    pub node_count: usize,
    pub nodes: Vec<NodeSnapshot>,
}

/// Take a snapshot, recomputing aggregates first if needed
pub fn snapshot(store: &mut HierarchyStore) -> HierarchySnapshot {
    store.ensure_fresh();

    let nodes: Vec<NodeSnapshot> = store
        .iter()
        .map(|node| NodeSnapshot {
            id: node.id.clone(),
            commander: node.parent.map(|p| store.node_at(p).id.clone()),
            children: node
                .children
                .iter()
                .map(|&c| store.node_at(c).id.clone())
                .collect(),
            depth: node.depth,
            subtree_size: node.subtree_size,
        })
        .collect();

    HierarchySnapshot {
        freshness: store.freshness(),
        node_count: nodes.len(),
        nodes,
    }
}

/// Snapshot rendered as pretty-printed JSON
///
/// # Errors
/// * `Serialization` - If JSON encoding fails
pub fn snapshot_json(store: &mut HierarchyStore) -> Result<String> {
    Ok(serde_json::to_string_pretty(&snapshot(store))?)
}
