//! Fixture loading and management.
//!
//! A fixture set is a JSON document listing templates, their typed
//! arguments, and the bytes (or error) each one must produce.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sinkfmt_core::Arg;

use crate::error::HarnessError;

/// A typed argument as written in fixture JSON: `{"type": "u32", "value": 7}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum FixtureArg {
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(i64),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(u64),
    /// Exactly one byte.
    Char(String),
    Str(String),
}

impl FixtureArg {
    /// Borrow this fixture value as a print argument.
    pub fn to_arg(&self) -> Result<Arg<'_>, HarnessError> {
        Ok(match self {
            Self::I16(v) => Arg::I16(*v),
            Self::I32(v) => Arg::I32(*v),
            Self::I64(v) => Arg::I64(*v),
            Self::Isize(v) => Arg::Isize(
                isize::try_from(*v)
                    .map_err(|_| HarnessError::invalid_arg(v.to_string(), "out of isize range"))?,
            ),
            Self::U16(v) => Arg::U16(*v),
            Self::U32(v) => Arg::U32(*v),
            Self::U64(v) => Arg::U64(*v),
            Self::Usize(v) => Arg::Usize(
                usize::try_from(*v)
                    .map_err(|_| HarnessError::invalid_arg(v.to_string(), "out of usize range"))?,
            ),
            Self::Char(s) => match s.as_bytes() {
                [b] => Arg::Char(*b),
                _ => return Err(HarnessError::invalid_arg(s.clone(), "char must be one byte")),
            },
            Self::Str(s) => Arg::Str(s.as_bytes()),
        })
    }

    /// Parse the command-line form `type:value`, e.g. `i32:-5` or `str:hello`.
    pub fn parse_typed(raw: &str) -> Result<Self, HarnessError> {
        let (ty, value) = raw
            .split_once(':')
            .ok_or_else(|| HarnessError::invalid_arg(raw, "expected type:value"))?;
        let bad = |e: std::num::ParseIntError| HarnessError::invalid_arg(raw, e.to_string());
        Ok(match ty {
            "i16" => Self::I16(value.parse().map_err(bad)?),
            "i32" => Self::I32(value.parse().map_err(bad)?),
            "i64" => Self::I64(value.parse().map_err(bad)?),
            "isize" => Self::Isize(value.parse().map_err(bad)?),
            "u16" => Self::U16(value.parse().map_err(bad)?),
            "u32" => Self::U32(value.parse().map_err(bad)?),
            "u64" => Self::U64(value.parse().map_err(bad)?),
            "usize" => Self::Usize(value.parse().map_err(bad)?),
            "char" => Self::Char(value.to_string()),
            "str" => Self::Str(value.to_string()),
            _ => return Err(HarnessError::invalid_arg(raw, format!("unknown type '{ty}'"))),
        })
    }
}

/// Borrow every fixture argument as a print argument.
pub fn to_args(args: &[FixtureArg]) -> Result<Vec<Arg<'_>>, HarnessError> {
    args.iter().map(FixtureArg::to_arg).collect()
}

fn default_policy() -> String {
    String::from("both")
}

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    pub template: String,
    #[serde(default)]
    pub args: Vec<FixtureArg>,
    /// Bytes written to the sink. For failing cases, the partial output
    /// written before the error.
    #[serde(default)]
    pub expected_output: String,
    /// Error kind name (`"FormatEnd"`, `"ArgumentMismatch"`, ...) when the
    /// case must fail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_error: Option<String>,
    /// Argument policy this case applies to: `exact`, `widening` or `both`.
    #[serde(default = "default_policy")]
    pub policy: String,
}

/// A collection of fixture cases for one feature family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    pub family: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}

/// Sorted `*.json` paths under `dir`, or `dir` itself if it is a file.
pub fn fixture_paths(dir: &Path) -> Result<Vec<PathBuf>, HarnessError> {
    if dir.is_file() {
        return Ok(vec![dir.to_path_buf()]);
    }
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    paths.sort();
    if paths.is_empty() {
        return Err(HarnessError::NoFixtures {
            dir: dir.to_path_buf(),
        });
    }
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_args_deserialize() {
        let args: Vec<FixtureArg> = serde_json::from_str(
            r#"[{"type":"i32","value":-5},{"type":"usize","value":9},{"type":"str","value":"hi"}]"#,
        )
        .unwrap();
        assert_eq!(
            args,
            vec![
                FixtureArg::I32(-5),
                FixtureArg::Usize(9),
                FixtureArg::Str("hi".into())
            ]
        );
        assert_eq!(to_args(&args).unwrap()[2], Arg::Str(b"hi"));
    }

    #[test]
    fn char_must_be_single_byte() {
        assert_eq!(FixtureArg::Char("q".into()).to_arg().unwrap(), Arg::Char(b'q'));
        assert!(FixtureArg::Char("qq".into()).to_arg().is_err());
        assert!(FixtureArg::Char(String::new()).to_arg().is_err());
    }

    #[test]
    fn parse_typed_command_line_args() {
        assert_eq!(FixtureArg::parse_typed("i16:-3").unwrap(), FixtureArg::I16(-3));
        assert_eq!(
            FixtureArg::parse_typed("str:a:b").unwrap(),
            FixtureArg::Str("a:b".into())
        );
        assert!(FixtureArg::parse_typed("u16:70000").is_err());
        assert!(FixtureArg::parse_typed("f64:1.0").is_err());
        assert!(FixtureArg::parse_typed("nocolon").is_err());
    }

    #[test]
    fn case_defaults() {
        let set = FixtureSet::from_json(
            r#"{"version":"v1","family":"x","cases":[{"name":"a","template":"hi","expected_output":"hi"}]}"#,
        )
        .unwrap();
        let case = &set.cases[0];
        assert!(case.args.is_empty());
        assert_eq!(case.policy, "both");
        assert_eq!(case.expected_error, None);
    }
}
