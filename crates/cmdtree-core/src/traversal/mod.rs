pub mod aggregate;
pub mod chain;

pub use aggregate::{recompute, Frame, RecomputeStats};
pub use chain::chain_of_command;
