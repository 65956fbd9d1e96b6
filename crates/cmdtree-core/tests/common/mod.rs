use cmdtree_core::{HierarchyStore, ROOT_ID};

/// Create a new empty store for testing
#[allow(dead_code)]
pub fn new_store() -> HierarchyStore {
    HierarchyStore::new()
}

/// Build a store from `(person, commander)` pairs, panicking on rejection
#[allow(dead_code)]
pub fn build_store(edges: &[(&str, &str)]) -> HierarchyStore {
    let mut store = HierarchyStore::new();
    for (person, commander) in edges {
        store
            .insert(person, commander)
            .unwrap_or_else(|e| panic!("setup insert {} -> {} failed: {}", person, commander, e));
    }
    store
}

/// Setup the reference tree: ROOT -> A -> {B -> D, C}
#[allow(dead_code)]
pub fn setup_reference_tree() -> HierarchyStore {
    build_store(&[("A", ROOT_ID), ("B", "A"), ("C", "A"), ("D", "B")])
}

/// Setup a path ROOT -> p0 -> p1 -> ... -> p{len-1}
#[allow(dead_code)]
pub fn setup_path(len: usize) -> HierarchyStore {
    let mut store = HierarchyStore::new();
    let mut commander = ROOT_ID.to_string();
    for i in 0..len {
        let person = format!("p{}", i);
        store.insert(&person, &commander).unwrap();
        commander = person;
    }
    store
}

/// Depth by walking commander links, independent of the recompute pass
#[allow(dead_code)]
pub fn depth_by_walking(store: &HierarchyStore, person_id: &str) -> usize {
    let mut depth = 0;
    let mut current = person_id;
    while let Some(parent) = store.parent_of(current) {
        depth += 1;
        current = parent;
    }
    depth
}

/// Subtree size by checking every node's ancestry, independent of the recompute pass
#[allow(dead_code)]
pub fn subtree_size_by_ancestry(store: &HierarchyStore, person_id: &str) -> usize {
    store
        .iter()
        .filter(|node| {
            let mut current = store.parent_of(&node.id);
            while let Some(parent) = current {
                if parent == person_id {
                    return true;
                }
                current = store.parent_of(parent);
            }
            false
        })
        .count()
}
