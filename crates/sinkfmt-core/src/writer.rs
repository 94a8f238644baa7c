//! Reliable writes on top of [`Sink`].
//!
//! Every function here either transfers its whole payload or returns
//! [`WriterError::ShortCount`]. Bytes accepted before a short write stay
//! written; nothing is rolled back.

use crate::error::WriterError;
use crate::sink::Sink;

/// Size of the stack chunk used by the repetition writers.
pub const REPEAT_CHUNK: usize = 256;

/// Forward `bytes` to the sink once and return how many were accepted.
///
/// The count is clamped to `bytes.len()` so a misbehaving sink cannot make
/// callers index past the payload.
pub fn write<S: Sink + ?Sized>(sink: &mut S, bytes: &[u8]) -> usize {
    sink.write(bytes).min(bytes.len())
}

/// Write every byte of `bytes`, failing on the first short write.
pub fn write_all<S: Sink + ?Sized>(sink: &mut S, bytes: &[u8]) -> Result<(), WriterError> {
    let mut rest = bytes;
    while !rest.is_empty() {
        let written = write(sink, rest);
        if written < rest.len() {
            return Err(WriterError::ShortCount);
        }
        rest = &rest[written..];
    }
    Ok(())
}

/// Write a whole string.
pub fn write_str<S: Sink + ?Sized>(sink: &mut S, s: &str) -> Result<(), WriterError> {
    write_all(sink, s.as_bytes())
}

/// Write at most `n` bytes of `bytes`, stopping early at the first NUL.
pub fn write_str_n<S: Sink + ?Sized>(sink: &mut S, bytes: &[u8], n: usize) -> Result<(), WriterError> {
    write_all(sink, bounded(bytes, n))
}

/// Write a single byte.
pub fn write_byte<S: Sink + ?Sized>(sink: &mut S, byte: u8) -> Result<(), WriterError> {
    write_all(sink, &[byte])
}

/// Write `byte` exactly `n` times using a fixed stack chunk.
pub fn write_byte_n_times<S: Sink + ?Sized>(
    sink: &mut S,
    byte: u8,
    n: usize,
) -> Result<(), WriterError> {
    let chunk = [byte; REPEAT_CHUNK];
    let mut left = n;
    while left > 0 {
        let take = left.min(REPEAT_CHUNK);
        write_all(sink, &chunk[..take])?;
        left -= take;
    }
    Ok(())
}

/// Write the whole of `bytes`, `n` times in a row.
///
/// Patterns that fit the stack chunk are tiled into it whole, so each sink
/// call carries as many copies as fit. Longer patterns go out one copy per
/// call.
pub fn write_bytes_n_times<S: Sink + ?Sized>(
    sink: &mut S,
    bytes: &[u8],
    n: usize,
) -> Result<(), WriterError> {
    if bytes.is_empty() || n == 0 {
        return Ok(());
    }
    if bytes.len() > REPEAT_CHUNK {
        for _ in 0..n {
            write_all(sink, bytes)?;
        }
        return Ok(());
    }

    let per_chunk = REPEAT_CHUNK / bytes.len();
    let mut chunk = [0_u8; REPEAT_CHUNK];
    for slot in chunk.chunks_exact_mut(bytes.len()).take(per_chunk) {
        slot.copy_from_slice(bytes);
    }
    let mut left = n;
    while left > 0 {
        let copies = left.min(per_chunk);
        write_all(sink, &chunk[..copies * bytes.len()])?;
        left -= copies;
    }
    Ok(())
}

/// Prefix of `bytes` up to `cap` bytes or the first NUL, whichever is first.
pub(crate) fn bounded(bytes: &[u8], cap: usize) -> &[u8] {
    let window = &bytes[..bytes.len().min(cap)];
    match window.iter().position(|&b| b == 0) {
        Some(end) => &window[..end],
        None => window,
    }
}
