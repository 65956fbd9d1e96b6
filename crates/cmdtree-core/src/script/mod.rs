//! Line-oriented command scripts
//!
//! ```text
//! 4                  <- optional count hint, first line only
//! INSERT A ROOT
//! INSERT B A
//! QUERY A            <- writes "1"
//! QUERY nobody       <- writes nothing
//! ```
//!
//! Blank lines are skipped, malformed lines are counted and skipped, and
//! rejected commands produce no output. Only I/O failures abort a run.

pub mod parser;
pub mod runner;

pub use parser::{parse_count_hint, parse_line};
pub use runner::{run_script, run_script_tagged, RunSummary};
