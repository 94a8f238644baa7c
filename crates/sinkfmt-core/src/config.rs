//! Runtime configuration.
//!
//! The argument policy is set via the `SINKFMT_ARG_POLICY` environment
//! variable:
//! - `exact` (default): every argument must carry exactly the type its
//!   placeholder's length modifier names.
//! - `widening`: a narrower integer of the same signedness is also accepted
//!   and widened losslessly (`I16` for `{d}`, `U32` for `{ul}`).
//!
//! The variable is read once per process. [`crate::printf::print`] never
//! consults it; callers opt in with
//! `print_with(sink, template, args, config::arg_policy())`.

use std::sync::atomic::{AtomicU8, Ordering};

/// Name of the environment variable holding the argument policy.
pub const ARG_POLICY_ENV: &str = "SINKFMT_ARG_POLICY";

/// How strictly argument types are matched against placeholders.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgPolicy {
    /// Argument type must equal the placeholder's expected type.
    #[default]
    Exact,
    /// Narrower integers of the same signedness are widened.
    Widening,
}

impl ArgPolicy {
    /// Parse from string (case-insensitive). Unknown values map to `Exact`.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "widening" | "widen" | "lenient" => Self::Widening,
            _ => Self::Exact,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Widening => "widening",
        }
    }

    /// Returns true if narrower integers may stand in for wider ones.
    #[must_use]
    pub const fn allows_widening(self) -> bool {
        matches!(self, Self::Widening)
    }
}

// 0=unresolved, 1=Exact, 2=Widening.
static CACHED_POLICY: AtomicU8 = AtomicU8::new(0);

const POLICY_UNRESOLVED: u8 = 0;
const POLICY_EXACT: u8 = 1;
const POLICY_WIDENING: u8 = 2;

fn policy_to_u8(policy: ArgPolicy) -> u8 {
    match policy {
        ArgPolicy::Exact => POLICY_EXACT,
        ArgPolicy::Widening => POLICY_WIDENING,
    }
}

fn u8_to_policy(v: u8) -> ArgPolicy {
    match v {
        POLICY_WIDENING => ArgPolicy::Widening,
        _ => ArgPolicy::Exact,
    }
}

/// Get the configured argument policy (reads env var on first call, caches thereafter).
///
/// Two threads racing on the first call both read the environment and store
/// the same value, so no lock is needed.
#[must_use]
pub fn arg_policy() -> ArgPolicy {
    let cached = CACHED_POLICY.load(Ordering::Acquire);
    if cached != POLICY_UNRESOLVED {
        return u8_to_policy(cached);
    }
    let policy = std::env::var(ARG_POLICY_ENV)
        .map(|v| ArgPolicy::from_str_loose(&v))
        .unwrap_or_default();
    CACHED_POLICY.store(policy_to_u8(policy), Ordering::Release);
    policy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_loose_variants() {
        assert_eq!(ArgPolicy::from_str_loose("exact"), ArgPolicy::Exact);
        assert_eq!(ArgPolicy::from_str_loose("STRICT"), ArgPolicy::Exact);
        assert_eq!(ArgPolicy::from_str_loose(" Widening "), ArgPolicy::Widening);
        assert_eq!(ArgPolicy::from_str_loose("lenient"), ArgPolicy::Widening);
        assert_eq!(ArgPolicy::from_str_loose("garbage"), ArgPolicy::Exact);
    }

    #[test]
    fn default_is_exact() {
        assert_eq!(ArgPolicy::default(), ArgPolicy::Exact);
        assert!(!ArgPolicy::Exact.allows_widening());
        assert!(ArgPolicy::Widening.allows_widening());
    }

    #[test]
    fn encoding_round_trips() {
        for p in [ArgPolicy::Exact, ArgPolicy::Widening] {
            assert_eq!(u8_to_policy(policy_to_u8(p)), p);
        }
        assert_eq!(u8_to_policy(POLICY_UNRESOLVED), ArgPolicy::Exact);
    }
}
