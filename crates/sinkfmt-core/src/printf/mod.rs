//! Brace-template formatting engine.
//!
//! Templates mix literal text with placeholders of the form
//! `{[length]specifier[:[fill][align][width][.precision]]}`; `{{` and `}}`
//! produce literal braces. Arguments are consumed strictly in placeholder
//! order, one per placeholder, and each must carry the type its placeholder
//! names.
//!
//! ```
//! use sinkfmt_core::printf::{Arg, print};
//!
//! let mut out = Vec::new();
//! print(&mut out, "{d} = {x} = {b}", &[Arg::I32(5), Arg::I32(5), Arg::I32(5)]).unwrap();
//! assert_eq!(out, b"5 = 0x5 = 0b101");
//! ```
//!
//! Output is written as it is produced. When a stage fails, everything
//! written before the failure stays in the sink.

pub mod arg;
pub mod integer;
pub mod scan;
pub mod spec;
pub mod string;

pub use arg::{Arg, ArgKind};
pub use integer::{IntBuffer, IntValue, Radix, format_integer};
pub use scan::{Segment, TemplateScanner, Token, compile};
pub use spec::{Alignment, LengthMod, PlaceholderSpec, Specifier, parse_placeholder};

use crate::array_list::ArrayList;
use crate::config::ArgPolicy;
use crate::error::WriterError;
use crate::sink::Sink;
use crate::writer::write_all;

/// Render `template` with `args` into `sink` under [`ArgPolicy::Exact`].
pub fn print<S: Sink + ?Sized>(
    sink: &mut S,
    template: &str,
    args: &[Arg<'_>],
) -> Result<(), WriterError> {
    print_with(sink, template, args, ArgPolicy::Exact)
}

/// Render `template` with `args` into `sink` under an explicit policy.
pub fn print_with<S: Sink + ?Sized>(
    sink: &mut S,
    template: &str,
    args: &[Arg<'_>],
    policy: ArgPolicy,
) -> Result<(), WriterError> {
    let mut next = 0;
    for token in TemplateScanner::new(template) {
        match token? {
            Token::Literal(text) => write_all(sink, text.as_bytes())?,
            Token::Placeholder(body) => {
                let spec = parse_placeholder(body)?;
                let arg = args
                    .get(next)
                    .ok_or(WriterError::MissingArgument { index: next })?;
                write_placeholder(sink, &spec, next, arg, policy)?;
                next += 1;
            }
        }
    }
    Ok(())
}

/// Render a pre-compiled template.
///
/// Produces the same bytes as [`print_with`] on the source template.
pub fn print_segments<S: Sink + ?Sized>(
    sink: &mut S,
    segments: &[Segment<'_>],
    args: &[Arg<'_>],
    policy: ArgPolicy,
) -> Result<(), WriterError> {
    let mut next = 0;
    for segment in segments {
        match segment {
            Segment::Literal(text) => write_all(sink, text.as_bytes())?,
            Segment::Placeholder(spec) => {
                let arg = args
                    .get(next)
                    .ok_or(WriterError::MissingArgument { index: next })?;
                write_placeholder(sink, spec, next, arg, policy)?;
                next += 1;
            }
        }
    }
    Ok(())
}

/// Render one argument according to `spec`. `index` is only used for errors.
pub fn write_placeholder<S: Sink + ?Sized>(
    sink: &mut S,
    spec: &PlaceholderSpec,
    index: usize,
    arg: &Arg<'_>,
    policy: ArgPolicy,
) -> Result<(), WriterError> {
    let mismatch = |expected: ArgKind| WriterError::ArgumentMismatch {
        index,
        expected,
        found: arg.kind(),
    };
    match spec.specifier {
        Specifier::String => match arg {
            Arg::Str(s) => string::write_str(sink, spec, s),
            _ => Err(mismatch(ArgKind::Str)),
        },
        Specifier::Char => match arg {
            Arg::Char(c) => string::write_char(sink, spec, *c),
            _ => Err(mismatch(ArgKind::Char)),
        },
        Specifier::Decimal
        | Specifier::Binary
        | Specifier::Octal
        | Specifier::HexLower
        | Specifier::HexUpper => {
            let expected = spec.length.int_kind();
            if !arg.kind().fits(expected, policy) {
                return Err(mismatch(expected));
            }
            let value = arg.int_value().ok_or_else(|| mismatch(expected))?;
            integer::write_integer(sink, spec, value)
        }
    }
}

/// Growable sink that remembers whether the list refused to grow.
struct ListSink {
    list: ArrayList<u8>,
    exhausted: bool,
}

impl Sink for ListSink {
    fn write(&mut self, bytes: &[u8]) -> usize {
        match self.list.append_slice(bytes) {
            Ok(()) => bytes.len(),
            Err(_) => {
                self.exhausted = true;
                0
            }
        }
    }
}

/// Render into a freshly allocated list under [`ArgPolicy::Exact`].
pub fn aprint(template: &str, args: &[Arg<'_>]) -> Result<ArrayList<u8>, WriterError> {
    aprint_with(template, args, ArgPolicy::Exact)
}

/// Render into a freshly allocated list under an explicit policy.
///
/// If the list cannot grow the error is [`WriterError::Resource`].
pub fn aprint_with(
    template: &str,
    args: &[Arg<'_>],
    policy: ArgPolicy,
) -> Result<ArrayList<u8>, WriterError> {
    let mut sink = ListSink {
        list: ArrayList::with_capacity(template.len())?,
        exhausted: false,
    };
    match print_with(&mut sink, template, args, policy) {
        Ok(()) => Ok(sink.list),
        Err(WriterError::ShortCount) if sink.exhausted => Err(WriterError::Resource),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(template: &str, args: &[Arg<'_>]) -> Result<Vec<u8>, WriterError> {
        let mut out = Vec::new();
        print_with(&mut out, template, args, ArgPolicy::Exact).map(|()| out)
    }

    #[test]
    fn mixed_template() {
        let out = render(
            "{s}: {d} items at {X}",
            &[Arg::from("cart"), Arg::I32(3), Arg::I32(0xbeef)],
        )
        .unwrap();
        assert_eq!(out, b"cart: 3 items at 0xBEEF");
    }

    #[test]
    fn escaped_braces_consume_no_args() {
        assert_eq!(render("{{{d}}}", &[Arg::I32(1)]).unwrap(), b"{1}");
    }

    #[test]
    fn length_modifiers_select_argument_type() {
        let out = render(
            "{sd} {ld} {ud} {ulx} {uzd} {zd} {usd}",
            &[
                Arg::I16(-7),
                Arg::I64(-8_000_000_000),
                Arg::U32(4_000_000_000),
                Arg::U64(u64::MAX),
                Arg::Usize(12),
                Arg::Isize(-12),
                Arg::U16(65535),
            ],
        )
        .unwrap();
        assert_eq!(
            out,
            b"-7 -8000000000 4000000000 0xffffffffffffffff 12 -12 65535".as_slice()
        );
    }

    #[test]
    fn char_placeholder() {
        assert_eq!(render("[{c}]", &[Arg::char(b'q')]).unwrap(), b"[q]");
    }

    #[test]
    fn type_mismatch_is_an_error() {
        assert_eq!(
            render("a{d}", &[Arg::from("x")]),
            Err(WriterError::ArgumentMismatch {
                index: 0,
                expected: ArgKind::I32,
                found: ArgKind::Str,
            })
        );
        assert_eq!(
            render("{s}", &[Arg::I32(1)]),
            Err(WriterError::ArgumentMismatch {
                index: 0,
                expected: ArgKind::Str,
                found: ArgKind::I32,
            })
        );
    }

    #[test]
    fn widening_policy_accepts_narrow_ints() {
        let mut out = Vec::new();
        print_with(&mut out, "{ld}", &[Arg::I16(-2)], ArgPolicy::Widening).unwrap();
        assert_eq!(out, b"-2");
        assert!(render("{ld}", &[Arg::I16(-2)]).is_err());
    }

    #[test]
    fn missing_argument_reports_index() {
        let mut out = Vec::new();
        let err = print_with(&mut out, "{d} {d}", &[Arg::I32(1)], ArgPolicy::Exact);
        assert_eq!(err, Err(WriterError::MissingArgument { index: 1 }));
        assert_eq!(out, b"1 ");
    }

    #[test]
    fn surplus_arguments_ignored() {
        assert_eq!(render("{d}", &[Arg::I32(1), Arg::I32(2)]).unwrap(), b"1");
    }

    #[test]
    fn output_before_error_is_kept() {
        let mut out = Vec::new();
        let err = print_with(&mut out, "ok {d} then {q}", &[Arg::I32(9)], ArgPolicy::Exact);
        assert_eq!(err, Err(WriterError::FormatSpecifier));
        assert_eq!(out, b"ok 9 then ");
    }

    #[test]
    fn compiled_segments_match_direct_print() {
        let template = "<{s:2}|{ux}|{{}}>";
        let args = [Arg::from("abc"), Arg::U32(0x1f)];
        let segments = compile(template).unwrap();
        let mut compiled = Vec::new();
        print_segments(&mut compiled, &segments, &args, ArgPolicy::Exact).unwrap();
        assert_eq!(compiled, render(template, &args).unwrap());
        assert_eq!(compiled, b"<ab|0x1f|{}>");
    }

    #[test]
    fn aprint_collects_into_list() {
        let list = aprint_with("{d}-{d}", &[Arg::I32(1), Arg::I32(2)], ArgPolicy::Exact).unwrap();
        assert_eq!(list.as_slice(), b"1-2");
    }

    #[test]
    fn aprint_passes_format_errors_through() {
        assert_eq!(
            aprint_with("{d", &[Arg::I32(1)], ArgPolicy::Exact).map(|l| l.into_vec()),
            Err(WriterError::FormatEnd)
        );
    }
}
