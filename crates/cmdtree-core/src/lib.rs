//! cmdtree Core - in-memory command hierarchy kernel
//!
//! This crate provides the command hierarchy store and everything that
//! drives it:
//! - `HierarchyStore`: insert people under existing commanders, query depth
//!   and subtree size with lazily recomputed aggregates
//! - Iterative enter/exit traversal safe for arbitrarily deep trees
//! - Line-oriented command script parsing and execution
//! - Text and JSON rendering of a hierarchy
//! - Influence-graph command propagation demo
//! - Structured logging facility and canonical error facility

pub mod apply;
pub mod commands;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod propagation;
pub mod render;
pub mod script;
pub mod traversal;

// Schema constants are re-exported so the logging macros resolve them
// through `$crate` for downstream crates.
pub use cmdtree_core_types::schema;

// Re-export commonly used types
pub use apply::{apply, Outcome};
pub use commands::Command;
pub use errors::{ExError, ExErrorKind, HierarchyError, Result};
pub use model::{Freshness, Node, NodeIdx};
pub use ops::{HierarchyStore, ROOT_ID};
pub use script::{run_script, RunSummary};
pub use traversal::RecomputeStats;
