//! Byte sinks.
//!
//! A [`Sink`] is the raw write capability everything else is built on. It
//! may accept fewer bytes than offered; turning that into an all-or-error
//! contract is the job of [`crate::writer`].

#[cfg(unix)]
#[allow(unsafe_code)]
pub mod fd;

#[cfg(unix)]
pub use fd::FdSink;

use std::io;

use crate::array_list::ArrayList;

/// Destination that accepts raw bytes.
pub trait Sink {
    /// Transfer up to `bytes.len()` bytes and return how many were taken.
    ///
    /// A return of `0` is legal; the reliable writer treats any shortfall as
    /// a failed write.
    fn write(&mut self, bytes: &[u8]) -> usize;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn write(&mut self, bytes: &[u8]) -> usize {
        (**self).write(bytes)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn write(&mut self, bytes: &[u8]) -> usize {
        (**self).write(bytes)
    }
}

impl Sink for Vec<u8> {
    fn write(&mut self, bytes: &[u8]) -> usize {
        self.extend_from_slice(bytes);
        bytes.len()
    }
}

impl Sink for ArrayList<u8> {
    fn write(&mut self, bytes: &[u8]) -> usize {
        match self.append_slice(bytes) {
            Ok(()) => bytes.len(),
            Err(_) => 0,
        }
    }
}

/// Caller-owned context paired with a plain write function.
///
/// The sink borrows nothing and frees nothing: the context lives exactly as
/// long as the caller keeps the `FnSink` around.
pub struct FnSink<C> {
    ctx: C,
    write_fn: fn(&mut C, &[u8]) -> usize,
}

impl<C> FnSink<C> {
    pub const fn new(ctx: C, write_fn: fn(&mut C, &[u8]) -> usize) -> Self {
        Self { ctx, write_fn }
    }

    pub fn context(&self) -> &C {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut C {
        &mut self.ctx
    }

    pub fn into_context(self) -> C {
        self.ctx
    }
}

impl<C> Sink for FnSink<C> {
    fn write(&mut self, bytes: &[u8]) -> usize {
        (self.write_fn)(&mut self.ctx, bytes)
    }
}

impl<C: std::fmt::Debug> std::fmt::Debug for FnSink<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnSink").field("ctx", &self.ctx).finish()
    }
}

/// Adapter over any [`io::Write`].
///
/// Each sink write maps to exactly one `io::Write::write` call, so partial
/// writes surface unchanged. I/O errors are reported as zero bytes written.
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
}

impl<W: io::Write> IoSink<W> {
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Flush the wrapped writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl IoSink<io::Stdout> {
    /// Sink bound to the process standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl IoSink<io::Stderr> {
    /// Sink bound to the process standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    fn write(&mut self, bytes: &[u8]) -> usize {
        loop {
            match self.inner.write(bytes) {
                Ok(n) => return n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(_) => return 0,
            }
        }
    }
}

/// Convenience constructor for the common case of writing to stdout.
#[must_use]
pub fn stdout() -> IoSink<io::Stdout> {
    IoSink::stdout()
}

/// Fixed-capacity sink over a borrowed buffer.
///
/// Accepts bytes until the buffer is full and then reports short writes.
#[derive(Debug)]
pub struct SliceSink<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> SliceSink<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    pub fn len(&self) -> usize {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.pos == 0
    }

    /// Space left before writes start falling short.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn clear(&mut self) {
        self.pos = 0;
    }
}

impl Sink for SliceSink<'_> {
    fn write(&mut self, bytes: &[u8]) -> usize {
        let n = bytes.len().min(self.remaining());
        self.buf[self.pos..self.pos + n].copy_from_slice(&bytes[..n]);
        self.pos += n;
        n
    }
}
