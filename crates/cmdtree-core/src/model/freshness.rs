use serde::{Deserialize, Serialize};

/// Staleness of the memoized depth and subtree-size values
///
/// `Fresh` means every node's aggregates match the current tree shape.
/// Any successful insert moves the store to `Dirty`; the next query
/// recomputes and moves it back to `Fresh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Freshness {
    /// Aggregates are valid for the current tree shape
    #[default]
    Fresh,
    /// At least one insert happened since the last recompute
    Dirty,
}

impl Freshness {
    /// Check if aggregates can be read without a recompute
    pub fn is_fresh(&self) -> bool {
        matches!(self, Freshness::Fresh)
    }
}
