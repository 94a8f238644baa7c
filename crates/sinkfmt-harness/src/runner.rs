//! Test execution engine.

use sinkfmt_core::{ArgPolicy, print_with};

use crate::diff;
use crate::fixtures::{FixtureCase, FixtureSet, to_args};
use crate::verify::{VerificationResult, render_outcome};

/// Runs a fixture set under one argument policy and collects results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
    pub policy: ArgPolicy,
}

impl TestRunner {
    #[must_use]
    pub fn new(campaign: impl Into<String>, policy: ArgPolicy) -> Self {
        Self {
            campaign: campaign.into(),
            policy,
        }
    }

    /// Run every case that applies to this runner's policy.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .filter(|case| policy_matches(self.policy, &case.policy))
            .map(|case| {
                let case_name = if case.policy.eq_ignore_ascii_case("both") {
                    format!("{} [{}]", case.name, self.policy.as_str())
                } else {
                    case.name.clone()
                };
                let expected = expected_outcome(case);
                let (actual, bytes) = execute_case(case, self.policy);
                let passed = actual == expected;
                let diff = (!passed).then(|| diff::render_diff(&expected, &actual));
                VerificationResult {
                    case_name,
                    family: fixture_set.family.clone(),
                    template: case.template.clone(),
                    policy: self.policy.as_str().to_string(),
                    passed,
                    expected,
                    actual,
                    bytes,
                    diff,
                }
            })
            .collect()
    }
}

fn policy_matches(active: ArgPolicy, case_policy: &str) -> bool {
    case_policy.eq_ignore_ascii_case("both") || case_policy.eq_ignore_ascii_case(active.as_str())
}

fn expected_outcome(case: &FixtureCase) -> String {
    render_outcome(
        case.expected_output.as_bytes(),
        case.expected_error.as_deref(),
    )
}

/// Render one case; returns its canonical outcome text and the number of
/// bytes the sink received.
pub fn execute_case(case: &FixtureCase, policy: ArgPolicy) -> (String, usize) {
    let args = match to_args(&case.args) {
        Ok(args) => args,
        Err(err) => return (format!("invalid fixture: {err}"), 0),
    };
    let mut out = Vec::new();
    let result = print_with(&mut out, &case.template, &args, policy);
    (
        render_outcome(&out, result.err().map(|e| e.kind_name())),
        out.len(),
    )
}
