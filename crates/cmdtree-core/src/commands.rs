//! Command types accepted by the hierarchy
//!
//! Every line of a command script parses into one `Command`, which is then
//! executed through [`apply`](crate::apply::apply).

/// An operation against a [`HierarchyStore`](crate::ops::HierarchyStore)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Attach `person_id` under the existing `commander_id`
    Insert {
        person_id: String,
        commander_id: String,
    },

    /// Ask for the subtree size of `person_id`
    Query { person_id: String },
}

impl Command {
    /// Build an insert command
    pub fn insert(person_id: impl Into<String>, commander_id: impl Into<String>) -> Self {
        Command::Insert {
            person_id: person_id.into(),
            commander_id: commander_id.into(),
        }
    }

    /// Build a query command
    pub fn query(person_id: impl Into<String>) -> Self {
        Command::Query {
            person_id: person_id.into(),
        }
    }

    /// Stable operation name used in logs
    pub fn op_name(&self) -> &'static str {
        match self {
            Command::Insert { .. } => "insert",
            Command::Query { .. } => "query",
        }
    }
}
