//! Raw file-descriptor sink.

use std::io;
use std::os::fd::RawFd;

use super::Sink;

/// Writes straight to a file descriptor with `write(2)`.
///
/// The descriptor is borrowed: the sink never closes it. Writes interrupted
/// by a signal are retried; any other failure is reported as zero bytes
/// written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FdSink {
    fd: RawFd,
}

impl FdSink {
    pub const fn new(fd: RawFd) -> Self {
        Self { fd }
    }

    pub const fn stdout() -> Self {
        Self::new(libc::STDOUT_FILENO)
    }

    pub const fn stderr() -> Self {
        Self::new(libc::STDERR_FILENO)
    }

    pub const fn fd(&self) -> RawFd {
        self.fd
    }
}

impl Sink for FdSink {
    fn write(&mut self, bytes: &[u8]) -> usize {
        if bytes.is_empty() {
            return 0;
        }
        retry_interrupted(|| {
            // SAFETY: the pointer/length pair comes from a live slice, and
            // write(2) only reads from it. An invalid fd yields -1, not UB.
            let n = unsafe { libc::write(self.fd, bytes.as_ptr().cast(), bytes.len()) };
            usize::try_from(n).map_err(|_| io::Error::last_os_error())
        })
    }
}

/// Repeat `op` while it fails with `EINTR`; other errors become zero.
fn retry_interrupted(mut op: impl FnMut() -> io::Result<usize>) -> usize {
    loop {
        match op() {
            Ok(n) => return n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(_) => return 0,
        }
    }
}
