//! Error kinds surfaced by the writer and the formatting engine.
//!
//! Every stage returns a [`WriterError`] by value; the print driver is the
//! single aggregation point and forwards the first error it sees verbatim.

use thiserror::Error;

use crate::printf::ArgKind;

/// Failure of a write or print operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WriterError {
    /// The sink accepted fewer bytes than were requested.
    #[error("sink accepted fewer bytes than requested")]
    ShortCount,
    /// A `}` appeared outside a placeholder without being doubled.
    #[error("unmatched '}}' in template")]
    FormatStart,
    /// A placeholder was opened with `{` but never closed.
    #[error("unterminated placeholder in template")]
    FormatEnd,
    /// The length modifier is unknown or not allowed for the specifier.
    #[error("unrecognized or disallowed length modifier")]
    FormatLength,
    /// The specifier character is missing or unknown.
    #[error("missing or unrecognized specifier")]
    FormatSpecifier,
    /// The fill/alignment part of the placeholder is malformed.
    #[error("invalid alignment character")]
    FormatAlignment,
    /// The width field is malformed or out of range.
    #[error("malformed width")]
    FormatWidth,
    /// The precision field is malformed or out of range.
    #[error("malformed precision")]
    FormatPrecision,
    /// Storage for the rendered output could not be reserved.
    #[error("could not reserve output storage")]
    Resource,
    /// The argument at `index` does not have the type its placeholder requires.
    #[error("argument {index} is {found:?}, placeholder expects {expected:?}")]
    ArgumentMismatch {
        index: usize,
        expected: ArgKind,
        found: ArgKind,
    },
    /// The template has more placeholders than arguments were supplied.
    #[error("no argument supplied for placeholder {index}")]
    MissingArgument { index: usize },
}

/// Stable numeric codes, for callers that carry errors across a C boundary.
pub const E_SHORT_COUNT: i32 = 1;
pub const E_FORMAT_START: i32 = 2;
pub const E_FORMAT_END: i32 = 3;
pub const E_FORMAT_LENGTH: i32 = 4;
pub const E_FORMAT_SPECIFIER: i32 = 5;
pub const E_FORMAT_ALIGNMENT: i32 = 6;
pub const E_FORMAT_WIDTH: i32 = 7;
pub const E_FORMAT_PRECISION: i32 = 8;
pub const E_RESOURCE: i32 = 9;
pub const E_ARGUMENT_MISMATCH: i32 = 10;
pub const E_MISSING_ARGUMENT: i32 = 11;

impl WriterError {
    /// Numeric code for this error. Never zero; zero means success.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::ShortCount => E_SHORT_COUNT,
            Self::FormatStart => E_FORMAT_START,
            Self::FormatEnd => E_FORMAT_END,
            Self::FormatLength => E_FORMAT_LENGTH,
            Self::FormatSpecifier => E_FORMAT_SPECIFIER,
            Self::FormatAlignment => E_FORMAT_ALIGNMENT,
            Self::FormatWidth => E_FORMAT_WIDTH,
            Self::FormatPrecision => E_FORMAT_PRECISION,
            Self::Resource => E_RESOURCE,
            Self::ArgumentMismatch { .. } => E_ARGUMENT_MISMATCH,
            Self::MissingArgument { .. } => E_MISSING_ARGUMENT,
        }
    }

    /// Short stable name of the error kind (`"FormatEnd"`, `"ShortCount"`, ...).
    #[must_use]
    pub const fn kind_name(self) -> &'static str {
        match self {
            Self::ShortCount => "ShortCount",
            Self::FormatStart => "FormatStart",
            Self::FormatEnd => "FormatEnd",
            Self::FormatLength => "FormatLength",
            Self::FormatSpecifier => "FormatSpecifier",
            Self::FormatAlignment => "FormatAlignment",
            Self::FormatWidth => "FormatWidth",
            Self::FormatPrecision => "FormatPrecision",
            Self::Resource => "Resource",
            Self::ArgumentMismatch { .. } => "ArgumentMismatch",
            Self::MissingArgument { .. } => "MissingArgument",
        }
    }
}

/// Failure of an [`ArrayList`](crate::array_list::ArrayList) operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The allocator could not provide the requested capacity.
    #[error("allocation of {requested} elements failed")]
    Resource { requested: usize },
    /// The list has no elements to remove.
    #[error("list is empty")]
    Empty,
    /// The index is not below the current length.
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },
}

impl From<ListError> for WriterError {
    fn from(_: ListError) -> Self {
        Self::Resource
    }
}
