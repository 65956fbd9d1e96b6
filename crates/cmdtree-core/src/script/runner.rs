use std::io::{BufRead, Write};

use cmdtree_core_types::RequestId;
use serde::Serialize;

use super::parser::{parse_count_hint, parse_line};
use crate::apply::{apply, Outcome};
use crate::commands::Command;
use crate::errors::{HierarchyError, Result};
use crate::ops::HierarchyStore;
use crate::{log_op_end, log_op_error, log_op_start};

/// Tally of one script run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Value of the leading count line, if the script had one that parsed
    pub count_hint: Option<usize>,
    /// Inserts that attached a node
    pub inserted: usize,
    /// Inserts rejected as duplicate or under an unknown commander
    pub rejected: usize,
    /// Queries that produced an output line
    pub answered: usize,
    /// Queries for unknown people (no output)
    pub unanswered: usize,
    /// Lines skipped because they could not be parsed
    pub malformed: usize,
}

/// Run a command script against `store`
///
/// Reads `reader` line by line, applies each command and writes one line to
/// `writer` per answered query. A line that is not valid UTF-8 is counted as
/// malformed and skipped, never rewritten into another key. The store is left holding everything that
/// was inserted, so callers can render or query it afterwards.
///
/// # Errors
/// * `Io` - Reading the script or writing an answer failed
pub fn run_script<R: BufRead, W: Write>(
    store: &mut HierarchyStore,
    reader: R,
    writer: W,
) -> Result<RunSummary> {
    run_script_tagged(store, reader, writer, &RequestId::new())
}

/// Same as [`run_script`], tagging log events with the caller's `request_id`
///
/// # Errors
/// * `Io` - Reading the script or writing an answer failed
pub fn run_script_tagged<R: BufRead, W: Write>(
    store: &mut HierarchyStore,
    reader: R,
    mut writer: W,
    request_id: &RequestId,
) -> Result<RunSummary> {
    log_op_start!("run_script", request_id = request_id.as_str());
    let start = std::time::Instant::now();

    let result = run_lines(store, reader, &mut writer).map_err(|e| {
        log_op_error!(
            "run_script",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = request_id.as_str()
        );
        e
    })?;

    log_op_end!(
        "run_script",
        duration_ms = start.elapsed().as_millis() as u64,
        request_id = request_id.as_str(),
        inserted = result.inserted,
        rejected = result.rejected,
        answered = result.answered,
        unanswered = result.unanswered,
        malformed = result.malformed
    );

    Ok(result)
}

fn run_lines<R: BufRead, W: Write>(
    store: &mut HierarchyStore,
    reader: R,
    writer: &mut W,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for (i, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes.map_err(|e| HierarchyError::io("read_script", e))?;
        let line_no = i + 1;
        let line = match std::str::from_utf8(&bytes) {
            Ok(line) => line,
            Err(e) => {
                tracing::debug!(line_no, error = %e, "skipping line that is not UTF-8");
                summary.malformed += 1;
                continue;
            }
        };

        if line_no == 1 {
            if let Some(hint) = parse_count_hint(line) {
                summary.count_hint = hint;
                continue;
            }
        }

        let cmd = match parse_line(line, line_no) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                tracing::debug!(line_no, error = %e, "skipping malformed line");
                summary.malformed += 1;
                continue;
            }
        };

        let is_insert = matches!(cmd, Command::Insert { .. });
        match apply(store, cmd) {
            Ok(Outcome::Inserted) => summary.inserted += 1,
            Ok(Outcome::Answered(size)) => {
                writeln!(writer, "{}", size).map_err(|e| HierarchyError::io("write_answer", e))?;
                summary.answered += 1;
            }
            Err(e) if is_insert => {
                tracing::debug!(line_no, error = %e, "insert ignored");
                summary.rejected += 1;
            }
            Err(e) => {
                tracing::debug!(line_no, error = %e, "query produced no answer");
                summary.unanswered += 1;
            }
        }
    }

    writer
        .flush()
        .map_err(|e| HierarchyError::io("write_answer", e))?;

    Ok(summary)
}
