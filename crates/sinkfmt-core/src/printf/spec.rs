//! Placeholder parsing.
//!
//! A placeholder body (the text between `{` and `}`) has the shape
//! `[length] specifier [':' [fill] [align] [width] ['.' precision]]`.
//! The specifier is always the last character before the first `:`, so the
//! length modifier never needs its own terminator.

use crate::error::WriterError;
use crate::printf::ArgKind;
use crate::printf::integer::Radix;

/// Length modifier: selects the width and signedness of the argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMod {
    #[default]
    Default, // ""
    Short,     // 's'
    Long,      // 'l'
    LongLong,  // 'll'
    Size,      // 'z'
    Unsigned,  // 'u'
    UShort,    // 'us'
    ULong,     // 'ul'
    ULongLong, // 'ull'
    USize,     // 'uz'
}

impl LengthMod {
    /// Exact match against the recognized modifier spellings.
    #[must_use]
    pub fn from_text(text: &str) -> Option<Self> {
        Some(match text {
            "" => Self::Default,
            "s" => Self::Short,
            "l" => Self::Long,
            "ll" => Self::LongLong,
            "z" => Self::Size,
            "u" => Self::Unsigned,
            "us" => Self::UShort,
            "ul" => Self::ULong,
            "ull" => Self::ULongLong,
            "uz" => Self::USize,
            _ => return None,
        })
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Short => "s",
            Self::Long => "l",
            Self::LongLong => "ll",
            Self::Size => "z",
            Self::Unsigned => "u",
            Self::UShort => "us",
            Self::ULong => "ul",
            Self::ULongLong => "ull",
            Self::USize => "uz",
        }
    }

    /// Argument type an integer placeholder with this modifier consumes.
    ///
    /// `long` is taken as 64 bits (LP64).
    #[must_use]
    pub const fn int_kind(self) -> ArgKind {
        match self {
            Self::Default => ArgKind::I32,
            Self::Short => ArgKind::I16,
            Self::Long | Self::LongLong => ArgKind::I64,
            Self::Size => ArgKind::Isize,
            Self::Unsigned => ArgKind::U32,
            Self::UShort => ArgKind::U16,
            Self::ULong | Self::ULongLong => ArgKind::U64,
            Self::USize => ArgKind::Usize,
        }
    }
}

/// Output form of a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Specifier {
    Decimal,  // 'd'
    Binary,   // 'b'
    Octal,    // 'o'
    HexLower, // 'x'
    HexUpper, // 'X'
    Char,     // 'c'
    String,   // 's'
}

impl Specifier {
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        Some(match c {
            'd' => Self::Decimal,
            'b' => Self::Binary,
            'o' => Self::Octal,
            'x' => Self::HexLower,
            'X' => Self::HexUpper,
            'c' => Self::Char,
            's' => Self::String,
            _ => return None,
        })
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Decimal => 'd',
            Self::Binary => 'b',
            Self::Octal => 'o',
            Self::HexLower => 'x',
            Self::HexUpper => 'X',
            Self::Char => 'c',
            Self::String => 's',
        }
    }

    /// Radix for integer specifiers; `None` for `c` and `s`.
    #[must_use]
    pub const fn radix(self) -> Option<Radix> {
        match self {
            Self::Decimal => Some(Radix::Decimal),
            Self::Binary => Some(Radix::Binary),
            Self::Octal => Some(Radix::Octal),
            Self::HexLower => Some(Radix::HexLower),
            Self::HexUpper => Some(Radix::HexUpper),
            Self::Char | Self::String => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    #[default]
    Left, // '<'
    Center, // '^'
    Right,  // '>'
}

impl Alignment {
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Self::Left),
            '^' => Some(Self::Center),
            '>' => Some(Self::Right),
            _ => None,
        }
    }
}

/// A parsed placeholder.
///
/// `fill`, `alignment` and `precision` are validated and carried along but
/// do not change the bytes written. `width` caps string output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderSpec {
    pub length: LengthMod,
    pub specifier: Specifier,
    pub fill: char,
    pub alignment: Alignment,
    pub width: Option<usize>,
    pub precision: Option<usize>,
}

impl PlaceholderSpec {
    /// Spec with the given length and specifier and every field defaulted.
    #[must_use]
    pub const fn new(length: LengthMod, specifier: Specifier) -> Self {
        Self {
            length,
            specifier,
            fill: ' ',
            alignment: Alignment::Left,
            width: None,
            precision: None,
        }
    }
}

/// Parse a placeholder body. The surrounding braces must not be included.
pub fn parse_placeholder(body: &str) -> Result<PlaceholderSpec, WriterError> {
    let (head, tail) = match body.find(':') {
        Some(sep) => (&body[..sep], Some(&body[sep + 1..])),
        None => (body, None),
    };

    let last = head.chars().next_back().ok_or(WriterError::FormatSpecifier)?;
    let specifier = Specifier::from_char(last).ok_or(WriterError::FormatSpecifier)?;
    let length_text = &head[..head.len() - last.len_utf8()];
    let length = LengthMod::from_text(length_text).ok_or(WriterError::FormatLength)?;

    if matches!(specifier, Specifier::Char | Specifier::String) && length != LengthMod::Default {
        return Err(WriterError::FormatLength);
    }

    let mut spec = PlaceholderSpec::new(length, specifier);
    if let Some(tail) = tail {
        parse_tail(tail, &mut spec)?;
    }
    Ok(spec)
}

/// Parse `[fill] [align] [width] ['.' precision]`.
fn parse_tail(tail: &str, spec: &mut PlaceholderSpec) -> Result<(), WriterError> {
    let mut rest = tail;
    let mut chars = rest.chars();
    let aligned = match (chars.next(), chars.next()) {
        (Some(fill), Some(a)) if Alignment::from_char(a).is_some() => {
            spec.fill = fill;
            spec.alignment = Alignment::from_char(a).unwrap_or_default();
            rest = &rest[fill.len_utf8() + 1..];
            true
        }
        (Some(a), _) if Alignment::from_char(a).is_some() => {
            spec.alignment = Alignment::from_char(a).unwrap_or_default();
            rest = &rest[1..];
            true
        }
        _ => false,
    };

    let width_len = leading_digits(rest);
    if width_len > 0 {
        spec.width = Some(parse_decimal(&rest[..width_len]).ok_or(WriterError::FormatWidth)?);
    }
    rest = &rest[width_len..];

    if rest.is_empty() {
        return Ok(());
    }
    if let Some(prec) = rest.strip_prefix('.') {
        if prec.is_empty() || leading_digits(prec) != prec.len() {
            return Err(WriterError::FormatPrecision);
        }
        spec.precision = Some(parse_decimal(prec).ok_or(WriterError::FormatPrecision)?);
        return Ok(());
    }

    // A stray character where fill/align could still have appeared is an
    // alignment problem; after an alignment or width it is a width problem.
    if !aligned && width_len == 0 {
        Err(WriterError::FormatAlignment)
    } else {
        Err(WriterError::FormatWidth)
    }
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// Parse ASCII digits; `None` on overflow.
fn parse_decimal(digits: &str) -> Option<usize> {
    digits.bytes().try_fold(0_usize, |acc, d| {
        acc.checked_mul(10)?.checked_add(usize::from(d - b'0'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_specifiers() {
        for (body, specifier) in [
            ("d", Specifier::Decimal),
            ("b", Specifier::Binary),
            ("o", Specifier::Octal),
            ("x", Specifier::HexLower),
            ("X", Specifier::HexUpper),
            ("c", Specifier::Char),
            ("s", Specifier::String),
        ] {
            let spec = parse_placeholder(body).unwrap();
            assert_eq!(spec.specifier, specifier, "{body}");
            assert_eq!(spec.length, LengthMod::Default);
            assert_eq!(spec.width, None);
            assert_eq!(spec.precision, None);
            assert_eq!(spec.fill, ' ');
            assert_eq!(spec.alignment, Alignment::Left);
        }
    }

    #[test]
    fn length_modifiers() {
        for (body, length) in [
            ("sd", LengthMod::Short),
            ("lx", LengthMod::Long),
            ("llo", LengthMod::LongLong),
            ("zd", LengthMod::Size),
            ("ud", LengthMod::Unsigned),
            ("usb", LengthMod::UShort),
            ("ulX", LengthMod::ULong),
            ("ulld", LengthMod::ULongLong),
            ("uzx", LengthMod::USize),
        ] {
            assert_eq!(parse_placeholder(body).unwrap().length, length, "{body}");
        }
    }

    #[test]
    fn unknown_length_rejected() {
        assert_eq!(parse_placeholder("qd"), Err(WriterError::FormatLength));
        assert_eq!(parse_placeholder("lll"), Err(WriterError::FormatSpecifier));
        assert_eq!(parse_placeholder("llld"), Err(WriterError::FormatLength));
    }

    #[test]
    fn string_and_char_require_default_length() {
        assert_eq!(parse_placeholder("ls"), Err(WriterError::FormatLength));
        assert_eq!(parse_placeholder("uc"), Err(WriterError::FormatLength));
        assert!(parse_placeholder("s:5").is_ok());
    }

    #[test]
    fn missing_or_unknown_specifier() {
        assert_eq!(parse_placeholder(""), Err(WriterError::FormatSpecifier));
        assert_eq!(parse_placeholder(":5"), Err(WriterError::FormatSpecifier));
        assert_eq!(parse_placeholder("q"), Err(WriterError::FormatSpecifier));
        assert_eq!(parse_placeholder("dé"), Err(WriterError::FormatSpecifier));
    }

    #[test]
    fn fill_align_width_precision() {
        let spec = parse_placeholder("d:*>10.3").unwrap();
        assert_eq!(spec.fill, '*');
        assert_eq!(spec.alignment, Alignment::Right);
        assert_eq!(spec.width, Some(10));
        assert_eq!(spec.precision, Some(3));
    }

    #[test]
    fn align_without_fill() {
        let spec = parse_placeholder("x:^4").unwrap();
        assert_eq!(spec.fill, ' ');
        assert_eq!(spec.alignment, Alignment::Center);
        assert_eq!(spec.width, Some(4));
    }

    #[test]
    fn multibyte_fill() {
        let spec = parse_placeholder("s:→<3").unwrap();
        assert_eq!(spec.fill, '→');
        assert_eq!(spec.width, Some(3));
    }

    #[test]
    fn empty_tail_is_default() {
        assert_eq!(
            parse_placeholder("d:").unwrap(),
            PlaceholderSpec::new(LengthMod::Default, Specifier::Decimal)
        );
    }

    #[test]
    fn fill_without_alignment_rejected() {
        assert_eq!(parse_placeholder("d:*5"), Err(WriterError::FormatAlignment));
        assert_eq!(parse_placeholder("d:*"), Err(WriterError::FormatAlignment));
    }

    #[test]
    fn garbage_after_width_rejected() {
        assert_eq!(parse_placeholder("d:5x"), Err(WriterError::FormatWidth));
        assert_eq!(parse_placeholder("d:<x"), Err(WriterError::FormatWidth));
        assert_eq!(
            parse_placeholder("d:99999999999999999999999"),
            Err(WriterError::FormatWidth)
        );
    }

    #[test]
    fn malformed_precision_rejected() {
        assert_eq!(parse_placeholder("d:."), Err(WriterError::FormatPrecision));
        assert_eq!(parse_placeholder("d:5.x"), Err(WriterError::FormatPrecision));
        assert_eq!(parse_placeholder("d:.3.4"), Err(WriterError::FormatPrecision));
    }

    #[test]
    fn precision_without_width() {
        let spec = parse_placeholder("s:.7").unwrap();
        assert_eq!(spec.width, None);
        assert_eq!(spec.precision, Some(7));
    }
}
