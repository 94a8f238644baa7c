//! Conformance harness for sinkfmt.
//!
//! This crate provides:
//! - Fixture sets: JSON templates with typed arguments and expected output
//! - A runner that renders every case under an argument policy
//! - Verification summaries, diffs and markdown/JSON reports
//! - Structured JSONL logging of each run

#![forbid(unsafe_code)]

pub mod diff;
pub mod error;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use error::HarnessError;
pub use fixtures::{FixtureArg, FixtureCase, FixtureSet};
pub use report::{ConformanceReport, FixtureDigest};
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};

use std::path::Path;

use sinkfmt_core::ArgPolicy;
use structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};

/// Checked-in fixture directory, resolved at build time so it does not
/// depend on the working directory.
pub const DEFAULT_FIXTURE_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures");

/// Load every fixture under `dir`, run it under each of `policies`, and log
/// one entry per case plus a summary.
pub fn verify_fixtures<W: std::io::Write>(
    dir: &Path,
    policies: &[ArgPolicy],
    log: &mut LogEmitter<W>,
) -> Result<ConformanceReport, HarnessError> {
    let mut sets = Vec::new();
    let mut fixtures = Vec::new();
    for path in fixtures::fixture_paths(dir)? {
        let bytes = std::fs::read(&path)?;
        let set: FixtureSet = serde_json::from_slice(&bytes)?;
        fixtures.push(FixtureDigest {
            path: path
                .file_name()
                .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned()),
            family: set.family.clone(),
            sha256: report::sha256_hex(&bytes),
        });
        sets.push(set);
    }

    log.emit_entry(
        LogEntry::new("", LogLevel::Info, "verify_start").with_details(serde_json::json!({
            "fixture_sets": sets.len(),
            "policies": policies.iter().map(|p| p.as_str()).collect::<Vec<_>>(),
        })),
    )?;

    let mut results = Vec::new();
    for policy in policies {
        let runner = TestRunner::new("fixture-verify", *policy);
        for set in &sets {
            for result in runner.run(set) {
                let mut entry = LogEntry::new("", LogLevel::Info, "case_result")
                    .with_case(&result.case_name)
                    .with_template(&result.template)
                    .with_policy(&result.policy)
                    .with_bytes(result.bytes as u64);
                entry = if result.passed {
                    entry.with_outcome(Outcome::Pass)
                } else {
                    entry.level = LogLevel::Warn;
                    entry.with_outcome(Outcome::Fail).with_details(serde_json::json!({
                        "expected": &result.expected,
                        "actual": &result.actual,
                    }))
                };
                log.emit_entry(entry)?;
                results.push(result);
            }
        }
    }

    let summary = VerificationSummary::from_results(results);
    log.emit_entry(
        LogEntry::new("", LogLevel::Info, "verify_summary").with_details(serde_json::json!({
            "total": summary.total,
            "passed": summary.passed,
            "failed": summary.failed,
        })),
    )?;
    log.flush()?;

    Ok(ConformanceReport {
        title: String::from("sinkfmt Conformance Report"),
        policies: policies.iter().map(|p| p.as_str().to_string()).collect(),
        timestamp: structured_log::now_utc(),
        fixtures,
        summary,
    })
}

/// Parse a policy selector: `exact`, `widening`, or `both`.
pub fn parse_policies(raw: &str) -> Result<Vec<ArgPolicy>, HarnessError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "exact" => Ok(vec![ArgPolicy::Exact]),
        "widening" => Ok(vec![ArgPolicy::Widening]),
        "both" => Ok(vec![ArgPolicy::Exact, ArgPolicy::Widening]),
        _ => Err(HarnessError::UnknownPolicy(raw.to_string())),
    }
}
