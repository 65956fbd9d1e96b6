pub mod store;

pub use store::{HierarchyStore, ROOT_ID};
