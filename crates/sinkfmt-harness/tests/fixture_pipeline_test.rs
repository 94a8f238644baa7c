// fixture_pipeline_test.rs
// Integration tests for loading, running and reporting the checked-in
// fixture sets.

use std::path::{Path, PathBuf};

use sinkfmt_core::ArgPolicy;
use sinkfmt_harness::fixtures::fixture_paths;
use sinkfmt_harness::report::sha256_hex;
use sinkfmt_harness::structured_log::{LogEmitter, validate_log_text};
use sinkfmt_harness::{
    DEFAULT_FIXTURE_DIR, FixtureSet, HarnessError, TestRunner, parse_policies, verify_fixtures,
};

fn fixture_dir() -> PathBuf {
    PathBuf::from(DEFAULT_FIXTURE_DIR)
}

fn load_all() -> Vec<FixtureSet> {
    fixture_paths(&fixture_dir())
        .expect("fixture directory")
        .iter()
        .map(|p| FixtureSet::from_file(p).unwrap_or_else(|e| panic!("{}: {e}", p.display())))
        .collect()
}

#[test]
fn fixture_sets_parse_and_are_nonempty() {
    let sets = load_all();
    assert!(!sets.is_empty());
    for set in &sets {
        assert_eq!(set.version, "v1");
        assert!(!set.cases.is_empty(), "{} has no cases", set.family);
        for case in &set.cases {
            assert!(
                ["exact", "widening", "both"].contains(&case.policy.as_str()),
                "{}: bad policy {}",
                case.name,
                case.policy
            );
        }
    }
}

#[test]
fn case_names_are_unique_per_set() {
    for set in load_all() {
        let mut names: Vec<&str> = set.cases.iter().map(|c| c.name.as_str()).collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total, "duplicate case name in {}", set.family);
    }
}

#[test]
fn every_fixture_passes_under_both_policies() {
    for set in load_all() {
        for policy in [ArgPolicy::Exact, ArgPolicy::Widening] {
            let results = TestRunner::new("pipeline", policy).run(&set);
            assert!(!results.is_empty());
            let failures: Vec<String> = results
                .iter()
                .filter(|r| !r.passed)
                .map(|r| format!("{}:\n{}", r.case_name, r.diff.as_deref().unwrap_or("")))
                .collect();
            assert!(failures.is_empty(), "failures:\n{}", failures.join("\n"));
        }
    }
}

#[test]
fn verify_fixtures_reports_digests_and_logs_every_case() {
    let mut log = LogEmitter::to_buffer("harness", "pipeline");
    let report = verify_fixtures(&fixture_dir(), &parse_policies("both").unwrap(), &mut log)
        .expect("verify run");

    assert!(report.summary.all_passed());
    assert_eq!(report.policies, vec!["exact", "widening"]);
    for digest in &report.fixtures {
        assert_eq!(digest.sha256.len(), 64);
        let bytes = std::fs::read(fixture_dir().join(&digest.path)).unwrap();
        assert_eq!(digest.sha256, sha256_hex(&bytes));
    }

    let (lines, errors) = validate_log_text(log.contents());
    assert!(errors.is_empty(), "{errors:?}");
    // start + one per case + summary
    assert_eq!(lines, report.summary.total + 2);

    let md = report.to_markdown();
    assert!(md.starts_with("# sinkfmt Conformance Report"));
    assert!(md.contains("| decimal [exact] |"));
    assert!(!md.contains("## Failures"));
}

#[test]
fn default_fixture_dir_resolves_from_any_working_directory() {
    let dir = Path::new(DEFAULT_FIXTURE_DIR);
    assert!(dir.is_absolute(), "{}", dir.display());
    assert_eq!(dir, Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures"));
    assert!(!fixture_paths(dir).unwrap().is_empty());
}

#[test]
fn single_file_is_accepted_as_fixture_path() {
    let file = fixture_dir().join("print_core.v1.json");
    assert_eq!(fixture_paths(&file).unwrap(), vec![file]);
}

#[test]
fn empty_directory_is_an_error() {
    let dir = std::env::temp_dir().join(format!("sinkfmt-empty-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let err = fixture_paths(&dir).unwrap_err();
    assert!(matches!(err, HarnessError::NoFixtures { .. }));
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn unknown_policy_selector_is_rejected() {
    assert!(matches!(
        parse_policies("loose"),
        Err(HarnessError::UnknownPolicy(_))
    ));
    assert_eq!(parse_policies(" Exact ").unwrap(), vec![ArgPolicy::Exact]);
}
