// structured_log_test.rs
// JSONL log files written by the emitter must validate line by line.

use sinkfmt_harness::structured_log::{
    LogEmitter, LogEntry, LogLevel, Outcome, validate_log_file, validate_log_line,
};

fn temp_log(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("sinkfmt-{}-{name}.jsonl", std::process::id()))
}

#[test]
fn file_emitter_round_trip() {
    let path = temp_log("round-trip");
    {
        let mut emitter = LogEmitter::to_file(&path, "harness", "run-1").unwrap();
        emitter.emit(LogLevel::Info, "verify_start").unwrap();
        emitter
            .emit_entry(
                LogEntry::new("", LogLevel::Info, "case_result")
                    .with_case("decimal [exact]")
                    .with_template("{d}")
                    .with_outcome(Outcome::Pass)
                    .with_bytes(3),
            )
            .unwrap();
        emitter
            .emit_entry(
                LogEntry::new("", LogLevel::Warn, "case_result")
                    .with_case("hex [exact]")
                    .with_outcome(Outcome::Fail)
                    .with_error("ShortCount"),
            )
            .unwrap();
        emitter.flush().unwrap();
    }

    let (lines, errors) = validate_log_file(&path).unwrap();
    assert_eq!(lines, 3);
    assert!(errors.is_empty(), "{errors:?}");

    let content = std::fs::read_to_string(&path).unwrap();
    let last = content.lines().last().unwrap();
    let entry = validate_log_line(last, 3).unwrap();
    assert_eq!(entry.trace_id, "harness::run-1::003");
    assert_eq!(entry.outcome, Some(Outcome::Fail));
    assert_eq!(entry.error.as_deref(), Some("ShortCount"));

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn explicit_trace_id_is_kept() {
    let mut emitter = LogEmitter::to_buffer("harness", "run-2");
    emitter
        .emit_entry(LogEntry::new("custom::trace::7", LogLevel::Debug, "note"))
        .unwrap();
    let line = emitter.contents().lines().next().unwrap();
    assert_eq!(validate_log_line(line, 1).unwrap().trace_id, "custom::trace::7");
}

#[test]
fn invalid_lines_are_reported_with_line_numbers() {
    let path = temp_log("invalid");
    std::fs::write(
        &path,
        concat!(
            r#"{"timestamp":"t","trace_id":"a::b::1","level":"info","event":"ok"}"#,
            "\n\n",
            r#"{"timestamp":"t","trace_id":"a::b::2","level":"info"}"#,
            "\n",
            "garbage\n",
        ),
    )
    .unwrap();

    let (lines, errors) = validate_log_file(&path).unwrap();
    assert_eq!(lines, 3);
    assert!(errors.iter().any(|e| e.line_number == 3 && e.field == "event"));
    assert!(errors.iter().any(|e| e.line_number == 4 && e.field == "<json>"));
    std::fs::remove_file(&path).unwrap();
}
