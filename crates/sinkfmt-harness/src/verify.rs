//! Output comparison and verification.

use serde::{Deserialize, Serialize};

/// Result of verifying a single fixture case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Name of the test case, suffixed with the policy for `both` cases.
    pub case_name: String,
    /// Fixture family the case came from.
    pub family: String,
    pub template: String,
    /// Policy the case ran under.
    pub policy: String,
    pub passed: bool,
    /// Expected outcome, rendered with [`render_outcome`].
    pub expected: String,
    /// Actual outcome, rendered with [`render_outcome`].
    pub actual: String,
    /// Bytes the sink received.
    pub bytes: usize,
    /// Diff if the case failed.
    pub diff: Option<String>,
}

/// Aggregate verification summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub results: Vec<VerificationResult>,
}

impl VerificationSummary {
    /// Build a summary from a list of results.
    #[must_use]
    pub fn from_results(results: Vec<VerificationResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        Self {
            total,
            passed,
            failed: total - passed,
            results,
        }
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Results that did not pass.
    pub fn failures(&self) -> impl Iterator<Item = &VerificationResult> {
        self.results.iter().filter(|r| !r.passed)
    }
}

/// Canonical text form of a print outcome.
///
/// Output bytes are shown lossily as UTF-8. A failing print appends its
/// error kind on a final line, after whatever was written before the error.
#[must_use]
pub fn render_outcome(output: &[u8], error: Option<&str>) -> String {
    let text = String::from_utf8_lossy(output);
    match error {
        Some(kind) => format!("{text}\n[error: {kind}]"),
        None => text.into_owned(),
    }
}
