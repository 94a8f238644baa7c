//! String and character placeholders.

use crate::error::WriterError;
use crate::printf::spec::{LengthMod, PlaceholderSpec};
use crate::sink::Sink;
use crate::writer::{bounded, write_all, write_byte};

/// Bytes of `s` that a `{s}` placeholder emits.
///
/// The natural end of the string is its first NUL or the end of the slice.
/// With a width, at most `width` bytes are taken, stopping earlier at the
/// natural end.
#[must_use]
pub fn bounded_str<'a>(s: &'a [u8], spec: &PlaceholderSpec) -> &'a [u8] {
    bounded(s, spec.width.unwrap_or(usize::MAX))
}

pub(crate) fn write_str<S: Sink + ?Sized>(
    sink: &mut S,
    spec: &PlaceholderSpec,
    s: &[u8],
) -> Result<(), WriterError> {
    if spec.length != LengthMod::Default {
        return Err(WriterError::FormatLength);
    }
    write_all(sink, bounded_str(s, spec))
}

pub(crate) fn write_char<S: Sink + ?Sized>(
    sink: &mut S,
    spec: &PlaceholderSpec,
    c: u8,
) -> Result<(), WriterError> {
    if spec.length != LengthMod::Default {
        return Err(WriterError::FormatLength);
    }
    write_byte(sink, c)
}
