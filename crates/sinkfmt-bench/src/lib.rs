//! Shared inputs for the sinkfmt benchmarks.

use sinkfmt_core::Arg;
use sinkfmt_core::printf::IntValue;

/// Templates of increasing placeholder density.
pub const TEMPLATES: &[(&str, &str)] = &[
    ("literal", "a template with no placeholders at all, just text"),
    ("one_int", "value={d}"),
    ("mixed", "{s}: {ud} items, id {ulX}, flags {b}"),
    ("escaped", "{{{d}}} {{{x}}} {{{o}}}"),
];

/// Arguments matching [`TEMPLATES`] by index.
#[must_use]
pub fn template_args(index: usize) -> Vec<Arg<'static>> {
    match index {
        1 => vec![Arg::I32(-123_456)],
        2 => vec![
            Arg::from("inventory"),
            Arg::U32(4096),
            Arg::U64(0xdead_beef_cafe),
            Arg::I32(0b1011),
        ],
        3 => vec![Arg::I32(1), Arg::I32(255), Arg::I32(8)],
        _ => Vec::new(),
    }
}

/// Integers covering short, medium and full-width digit strings.
pub const INT_SAMPLES: &[(&str, IntValue)] = &[
    ("small", IntValue::Signed(7)),
    ("medium", IntValue::Signed(-1_234_567)),
    ("i64_min", IntValue::Signed(i64::MIN)),
    ("u64_max", IntValue::Unsigned(u64::MAX)),
];
