mod common;

use common::new_store;
use cmdtree_core::script::{parse_line, run_script};
use cmdtree_core::{Command, HierarchyError, RunSummary, ROOT_ID};

fn run(input: &str) -> (String, RunSummary) {
    let mut store = new_store();
    let mut out = Vec::new();
    let summary = run_script(&mut store, input.as_bytes(), &mut out).unwrap();
    (String::from_utf8(out).unwrap(), summary)
}

#[test]
fn test_reference_script_with_count_hint() {
    let input = "9\n\
                 INSERT A ROOT\n\
                 INSERT B A\n\
                 INSERT C A\n\
                 INSERT D B\n\
                 QUERY A\n\
                 QUERY B\n\
                 QUERY C\n\
                 QUERY D\n\
                 QUERY ROOT\n";

    let (out, summary) = run(input);

    assert_eq!(out, "3\n1\n0\n0\n4\n");
    assert_eq!(
        summary,
        RunSummary {
            count_hint: Some(9),
            inserted: 4,
            rejected: 0,
            answered: 5,
            unanswered: 0,
            malformed: 0,
        }
    );
}

#[test]
fn test_count_hint_does_not_limit_commands() {
    let (out, summary) = run("1\nINSERT A ROOT\nINSERT B ROOT\nQUERY ROOT\n");

    assert_eq!(out, "2\n");
    assert_eq!(summary.inserted, 2);
}

#[test]
fn test_script_without_count_hint() {
    let (out, summary) = run("INSERT A ROOT\nQUERY ROOT");

    assert_eq!(out, "1\n");
    assert_eq!(summary.count_hint, None);
}

#[test]
fn test_blank_lines_are_skipped() {
    let (out, summary) = run("\n\nINSERT A ROOT\n   \n\nQUERY A\n\n");

    assert_eq!(out, "0\n");
    assert_eq!(summary.malformed, 0);
}

#[test]
fn test_malformed_lines_are_skipped_and_counted() {
    let input = "INSERT A\nQUERY\nFROB A B\nINSERT A ROOT extra\nINSERT A ROOT\nQUERY ROOT\n";
    let (out, summary) = run(input);

    assert_eq!(out, "1\n");
    assert_eq!(summary.malformed, 4);
    assert_eq!(summary.inserted, 1);
}

#[test]
fn test_rejected_inserts_produce_no_output() {
    let input = "INSERT A ROOT\nINSERT A ROOT\nINSERT X Y\nQUERY ROOT\nQUERY Y\nQUERY X\n";
    let (out, summary) = run(input);

    assert_eq!(out, "1\n");
    assert_eq!(summary.rejected, 2);
    assert_eq!(summary.answered, 1);
    assert_eq!(summary.unanswered, 2);
}

#[test]
fn test_distinct_invalid_byte_ids_never_share_a_key() {
    let mut store = new_store();
    let mut out = Vec::new();
    let input: &[u8] = b"\xff\nINSERT \xff ROOT\nINSERT \xfe ROOT\nINSERT \xff\xfe ROOT\nQUERY ROOT\n";

    let summary = run_script(&mut store, input, &mut out).unwrap();

    assert_eq!(out, b"0\n");
    assert_eq!(summary.count_hint, None);
    assert_eq!(summary.malformed, 4);
    assert_eq!(summary.rejected, 0);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_windows_line_endings() {
    let (out, _) = run("2\r\nINSERT A ROOT\r\nQUERY ROOT\r\n");
    assert_eq!(out, "1\n");
}

#[test]
fn test_store_keeps_inserts_after_run() {
    let mut store = new_store();
    let mut out = Vec::new();
    run_script(&mut store, "INSERT A ROOT\nINSERT B A\n".as_bytes(), &mut out).unwrap();

    assert!(out.is_empty());
    assert_eq!(store.query(ROOT_ID).unwrap(), 2);
}

#[test]
fn test_write_failure_is_io_error() {
    struct BrokenPipe;

    impl std::io::Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let mut store = new_store();
    let result = run_script(&mut store, "QUERY ROOT\n".as_bytes(), BrokenPipe);

    assert!(matches!(result, Err(HierarchyError::Io { ref op, .. }) if op == "write_answer"));
}

#[test]
fn test_parse_line_reports_line_number() {
    let err = parse_line("QUERY", 17).unwrap_err();
    assert!(matches!(err, HierarchyError::MalformedLine { line_no: 17, .. }));
    assert_eq!(
        parse_line("INSERT p c", 1).unwrap(),
        Some(Command::insert("p", "c"))
    );
}
