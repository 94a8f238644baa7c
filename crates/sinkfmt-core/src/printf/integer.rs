//! Integer to text conversion.
//!
//! Digits are produced back to front, two per division, using a digit-pair
//! table for the selected radix. All tables are built at compile time from
//! the one-digit alphabets.
//!
//! Output shape: `[-][prefix]digits`, with prefix `0b`, `0o`, `0x` for binary,
//! octal and hex; decimal has none. Hex case only affects the digits.

use crate::error::WriterError;
use crate::printf::spec::PlaceholderSpec;
use crate::sink::Sink;
use crate::writer::write_all;

/// Widest supported integer, in bits.
pub const MAX_INT_BITS: usize = 64;

/// Scratch length covering the worst case: 64 binary digits, a two-byte
/// prefix and a sign.
pub const INT_BUFFER_LEN: usize = MAX_INT_BITS + 2 + 1;

const BIN_DIGITS: &[u8] = b"01";
const OCT_DIGITS: &[u8] = b"01234567";
const DEC_DIGITS: &[u8] = b"0123456789";
const HEX_LOWER_DIGITS: &[u8] = b"0123456789abcdef";
const HEX_UPPER_DIGITS: &[u8] = b"0123456789ABCDEF";

static BIN_PAIRS: [u8; 2 * 2 * 2] = pair_table(BIN_DIGITS);
static OCT_PAIRS: [u8; 2 * 8 * 8] = pair_table(OCT_DIGITS);
static DEC_PAIRS: [u8; 2 * 10 * 10] = pair_table(DEC_DIGITS);
static HEX_LOWER_PAIRS: [u8; 2 * 16 * 16] = pair_table(HEX_LOWER_DIGITS);
static HEX_UPPER_PAIRS: [u8; 2 * 16 * 16] = pair_table(HEX_UPPER_DIGITS);

/// Entry `v` (for `v < base²`) is the two-character rendering of `v` at
/// offset `2 * v`.
const fn pair_table<const N: usize>(alphabet: &[u8]) -> [u8; N] {
    let base = alphabet.len();
    let mut out = [0_u8; N];
    let mut v = 0;
    while v < base * base {
        out[2 * v] = alphabet[v / base];
        out[2 * v + 1] = alphabet[v % base];
        v += 1;
    }
    out
}

/// Base and digit case of an integer rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    HexLower,
    HexUpper,
}

impl Radix {
    #[must_use]
    pub const fn base(self) -> u64 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::HexLower | Self::HexUpper => 16,
        }
    }

    #[must_use]
    pub const fn prefix(self) -> &'static [u8] {
        match self {
            Self::Binary => b"0b",
            Self::Octal => b"0o",
            Self::Decimal => b"",
            Self::HexLower | Self::HexUpper => b"0x",
        }
    }

    const fn digits(self) -> &'static [u8] {
        match self {
            Self::Binary => BIN_DIGITS,
            Self::Octal => OCT_DIGITS,
            Self::Decimal => DEC_DIGITS,
            Self::HexLower => HEX_LOWER_DIGITS,
            Self::HexUpper => HEX_UPPER_DIGITS,
        }
    }

    fn pairs(self) -> &'static [u8] {
        match self {
            Self::Binary => &BIN_PAIRS,
            Self::Octal => &OCT_PAIRS,
            Self::Decimal => &DEC_PAIRS,
            Self::HexLower => &HEX_LOWER_PAIRS,
            Self::HexUpper => &HEX_UPPER_PAIRS,
        }
    }
}

/// An integer argument after width selection.
///
/// Narrower types are widened to 64 bits before conversion; that never
/// changes the digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntValue {
    Signed(i64),
    Unsigned(u64),
}

impl IntValue {
    /// Sign flag and absolute value, without overflowing on `i64::MIN`.
    #[must_use]
    pub const fn sign_and_magnitude(self) -> (bool, u64) {
        match self {
            Self::Signed(v) if v == i64::MIN => (true, (-(v + 1)) as u64 + 1),
            Self::Signed(v) if v < 0 => (true, (-v) as u64),
            Self::Signed(v) => (false, v as u64),
            Self::Unsigned(v) => (false, v),
        }
    }
}

/// Reusable scratch space for [`format_integer`].
#[derive(Debug, Clone)]
pub struct IntBuffer {
    bytes: [u8; INT_BUFFER_LEN],
}

impl IntBuffer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: [0; INT_BUFFER_LEN],
        }
    }
}

impl Default for IntBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render `value` in `radix` into `buf` and return the rendered bytes.
pub fn format_integer(value: IntValue, radix: Radix, buf: &mut IntBuffer) -> &[u8] {
    let (negative, mut n) = value.sign_and_magnitude();
    let base = radix.base();
    let base2 = base * base;
    let digits = radix.digits();
    let pairs = radix.pairs();
    let out = &mut buf.bytes;
    let mut i = out.len();

    while n >= base2 {
        let d = (n % base2) as usize;
        i -= 2;
        out[i..i + 2].copy_from_slice(&pairs[2 * d..2 * d + 2]);
        n /= base2;
    }
    if n < base {
        i -= 1;
        out[i] = digits[n as usize];
    } else {
        let d = n as usize;
        i -= 2;
        out[i..i + 2].copy_from_slice(&pairs[2 * d..2 * d + 2]);
    }

    let prefix = radix.prefix();
    i -= prefix.len();
    out[i..i + prefix.len()].copy_from_slice(prefix);

    if negative {
        i -= 1;
        out[i] = b'-';
    }
    &out[i..]
}

/// Render an integer placeholder to `sink`.
pub(crate) fn write_integer<S: Sink + ?Sized>(
    sink: &mut S,
    spec: &PlaceholderSpec,
    value: IntValue,
) -> Result<(), WriterError> {
    let radix = spec.specifier.radix().ok_or(WriterError::FormatSpecifier)?;
    let mut buf = IntBuffer::new();
    write_all(sink, format_integer(value, radix, &mut buf))
}
