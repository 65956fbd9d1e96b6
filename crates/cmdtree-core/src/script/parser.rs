use crate::commands::Command;
use crate::errors::{HierarchyError, Result};

/// Parse one script line
///
/// Tokens are separated by ASCII whitespace and verbs are case-sensitive.
/// `line_no` is 1-based and only used for error context.
///
/// # Returns
/// * `Ok(None)` - Blank or whitespace-only line
/// * `Ok(Some(cmd))` - A well-formed `INSERT` or `QUERY`
///
/// # Errors
/// * `MalformedLine` - Unknown verb or wrong number of arguments
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<Command>> {
    let tokens: Vec<&str> = line.split_ascii_whitespace().collect();

    let malformed = |reason: String| HierarchyError::MalformedLine { line_no, reason };

    match tokens.as_slice() {
        [] => Ok(None),
        ["INSERT", person_id, commander_id] => Ok(Some(Command::insert(*person_id, *commander_id))),
        ["INSERT", args @ ..] => Err(malformed(format!(
            "INSERT expects 2 arguments, got {}",
            args.len()
        ))),
        ["QUERY", person_id] => Ok(Some(Command::query(*person_id))),
        ["QUERY", args @ ..] => Err(malformed(format!(
            "QUERY expects 1 argument, got {}",
            args.len()
        ))),
        [verb, ..] => Err(malformed(format!("unknown verb '{}'", verb))),
    }
}

/// Recognize a leading count line
///
/// A count line is non-blank and made only of ASCII digits and whitespace.
/// Returns `None` for anything else. The value is the first number on the
/// line; `Some(None)` means the line is a count line whose number does not fit
/// in `usize`.
pub fn parse_count_hint(line: &str) -> Option<Option<usize>> {
    let trimmed = line.trim();
    if trimmed.is_empty()
        || !trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_whitespace())
    {
        return None;
    }

    Some(
        trimmed
            .split_ascii_whitespace()
            .next()
            .and_then(|n| n.parse().ok()),
    )
}
