//! Single entry point for executing commands
//!
//! `apply()` runs one [`Command`] against a store. A rejected command is
//! reported as an error and leaves the store exactly as it was; whether that
//! error is surfaced is the caller's decision (the script runner ignores it).
//!
//! ## Example
//!
//! ```
//! use cmdtree_core::{apply, Command, HierarchyStore, Outcome, ROOT_ID};
//!
//! let mut store = HierarchyStore::new();
//! apply(&mut store, Command::insert("A", ROOT_ID)).unwrap();
//!
//! let outcome = apply(&mut store, Command::query(ROOT_ID)).unwrap();
//! assert_eq!(outcome, Outcome::Answered(1));
//! ```

use crate::commands::Command;
use crate::errors::Result;
use crate::ops::HierarchyStore;

/// Successful result of applying a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The node was attached
    Inserted,
    /// The query's subtree size
    Answered(usize),
}

impl Outcome {
    /// Value to emit for this outcome, if any
    pub fn answer(&self) -> Option<usize> {
        match self {
            Outcome::Inserted => None,
            Outcome::Answered(size) => Some(*size),
        }
    }
}

/// Apply a command to a store
///
/// # Errors
///
/// * `DuplicateId` / `UnknownCommander` - Insert rejected, store unchanged
/// * `UnknownQueryTarget` - Query named an unknown person
pub fn apply(store: &mut HierarchyStore, cmd: Command) -> Result<Outcome> {
    match cmd {
        Command::Insert {
            person_id,
            commander_id,
        } => {
            store.insert(&person_id, &commander_id)?;
            Ok(Outcome::Inserted)
        }

        Command::Query { person_id } => store.query(&person_id).map(Outcome::Answered),
    }
}
