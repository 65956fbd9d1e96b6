pub mod snapshot;
pub mod tree_render;

pub use snapshot::{snapshot, snapshot_json, HierarchySnapshot, NodeSnapshot};
pub use tree_render::render_hierarchy;
