pub mod freshness;
pub mod node;

pub use freshness::Freshness;
pub use node::{Node, NodeIdx};
