/// Slot of a node in the store's arena
///
/// Slots are handed out in insertion order and never reused, so a `NodeIdx`
/// stays valid for the lifetime of the store that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIdx(usize);

impl NodeIdx {
    /// The root always occupies the first slot
    pub const ROOT: NodeIdx = NodeIdx(0);

    pub(crate) fn new(slot: usize) -> Self {
        Self(slot)
    }

    /// Position of this node in the arena
    pub fn index(self) -> usize {
        self.0
    }
}

/// A person in the command hierarchy
///
/// `depth` and `subtree_size` are memoized aggregates: they are only
/// meaningful while the owning store is fresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Unique key, immutable once created
    pub id: String,

    /// Commanding node (None only for the root)
    pub parent: Option<NodeIdx>,

    /// Direct subordinates in insertion order
    pub children: Vec<NodeIdx>,

    /// Edge count from the root
    pub depth: usize,

    /// Count of all strict descendants
    pub subtree_size: usize,
}

impl Node {
    /// Create the synthetic root node
    pub fn root(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent: None,
            children: Vec::new(),
            depth: 0,
            subtree_size: 0,
        }
    }

    /// Create a node commanded by `parent`
    ///
    /// Aggregates start at zero and are filled in by the next recompute.
    pub fn new(id: impl Into<String>, parent: NodeIdx) -> Self {
        Self {
            id: id.into(),
            parent: Some(parent),
            children: Vec::new(),
            depth: 0,
            subtree_size: 0,
        }
    }

    /// Check if this node is the root (has no commander)
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Check if this node commands nobody
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
