//! Typed print arguments.
//!
//! Every argument carries its own type tag, so the print driver can check it
//! against the placeholder it is consumed by instead of trusting the caller.

use std::ffi::CStr;

use crate::config::ArgPolicy;
use crate::printf::integer::IntValue;

/// A single argument to [`print`](crate::printf::print).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arg<'a> {
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    /// One byte, consumed by `{c}`.
    Char(u8),
    /// Byte string, consumed by `{s}`. Ends at the first NUL or the slice end.
    Str(&'a [u8]),
}

/// Type tag of an [`Arg`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    I16,
    I32,
    I64,
    Isize,
    U16,
    U32,
    U64,
    Usize,
    Char,
    Str,
}

impl ArgKind {
    /// Bit width for integer kinds.
    #[must_use]
    pub const fn bits(self) -> Option<u32> {
        match self {
            Self::I16 | Self::U16 => Some(16),
            Self::I32 | Self::U32 => Some(32),
            Self::I64 | Self::U64 => Some(64),
            Self::Isize => Some(isize::BITS),
            Self::Usize => Some(usize::BITS),
            Self::Char | Self::Str => None,
        }
    }

    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(self, Self::I16 | Self::I32 | Self::I64 | Self::Isize)
    }

    /// Whether an argument of this kind may fill a slot expecting `expected`.
    #[must_use]
    pub fn fits(self, expected: Self, policy: ArgPolicy) -> bool {
        if self == expected {
            return true;
        }
        if !policy.allows_widening() || self.is_signed() != expected.is_signed() {
            return false;
        }
        match (self.bits(), expected.bits()) {
            (Some(have), Some(want)) => have <= want,
            _ => false,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::Char => "char",
            Self::Str => "str",
        }
    }
}

impl Arg<'_> {
    #[must_use]
    pub const fn kind(&self) -> ArgKind {
        match self {
            Self::I16(_) => ArgKind::I16,
            Self::I32(_) => ArgKind::I32,
            Self::I64(_) => ArgKind::I64,
            Self::Isize(_) => ArgKind::Isize,
            Self::U16(_) => ArgKind::U16,
            Self::U32(_) => ArgKind::U32,
            Self::U64(_) => ArgKind::U64,
            Self::Usize(_) => ArgKind::Usize,
            Self::Char(_) => ArgKind::Char,
            Self::Str(_) => ArgKind::Str,
        }
    }

    /// One-byte character argument.
    #[must_use]
    pub const fn char(c: u8) -> Self {
        Self::Char(c)
    }

    /// Integer payload widened to 64 bits; `None` for `Char` and `Str`.
    #[must_use]
    pub fn int_value(&self) -> Option<IntValue> {
        Some(match *self {
            Self::I16(v) => IntValue::Signed(v.into()),
            Self::I32(v) => IntValue::Signed(v.into()),
            Self::I64(v) => IntValue::Signed(v),
            Self::Isize(v) => IntValue::Signed(v as i64),
            Self::U16(v) => IntValue::Unsigned(v.into()),
            Self::U32(v) => IntValue::Unsigned(v.into()),
            Self::U64(v) => IntValue::Unsigned(v),
            Self::Usize(v) => IntValue::Unsigned(v as u64),
            Self::Char(_) | Self::Str(_) => return None,
        })
    }
}

macro_rules! arg_from {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for Arg<'_> {
                fn from(v: $t) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

arg_from! {
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Self::Str(s.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for Arg<'a> {
    fn from(s: &'a [u8]) -> Self {
        Self::Str(s)
    }
}

impl<'a> From<&'a CStr> for Arg<'a> {
    fn from(s: &'a CStr) -> Self {
        Self::Str(s.to_bytes())
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(s: &'a String) -> Self {
        Self::Str(s.as_bytes())
    }
}
