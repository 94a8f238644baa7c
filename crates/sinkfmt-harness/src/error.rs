//! Harness error type.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid argument {raw:?}: {reason}")]
    InvalidArg { raw: String, reason: String },
    #[error("no fixture JSON files found in {}", dir.display())]
    NoFixtures { dir: PathBuf },
    #[error("unknown policy {0:?}, expected exact|widening|both")]
    UnknownPolicy(String),
}

impl HarnessError {
    pub(crate) fn invalid_arg(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArg {
            raw: raw.into(),
            reason: reason.into(),
        }
    }
}
