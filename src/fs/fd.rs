use std::ffi::CStr;
use std::io;
use std::thread;

use libc::c_int;
use log::warn;

use super::panic::{BadAddrPanic, BadFdPanic, Panic};

/// Returns the error number of the last failed system call on this thread.
pub(crate) fn err_no() -> c_int {
    io::Error::last_os_error().raw_os_error().unwrap_or(0)
}

/// An owned file descriptor, closed when dropped.
#[derive(Debug)]
pub(crate) struct Fd(c_int);

impl Fd {
    /// Opens the file at `path` for reading.
    pub fn open_read(path: &CStr) -> Result<Fd, c_int> {
        // SAFETY: path is a valid nul-terminated string for the duration of the call.
        match unsafe { libc::open(path.as_ptr(), libc::O_RDONLY | libc::O_CLOEXEC) } {
            -1 => Err(err_no()),
            fd => Ok(Fd(fd)),
        }
    }

    /// Reads once into `buf`, retrying if interrupted, and returns the number of bytes read.
    pub fn read(&self, buf: &mut [u8]) -> Result<usize, c_int> {
        loop {
            // SAFETY: buf is valid for writes of buf.len() bytes and is uniquely borrowed.
            let count = unsafe { libc::read(self.0, buf.as_mut_ptr().cast(), buf.len()) };

            if let Ok(count) = usize::try_from(count) {
                return Ok(count);
            }

            match err_no() {
                libc::EINTR => continue,
                libc::EBADF => BadFdPanic.panic(),
                libc::EFAULT => BadAddrPanic.panic(),
                e => return Err(e),
            }
        }
    }

    /// Reads until `buf` is full or the end of the file is reached, returning the number of
    /// bytes read.
    pub fn read_to_fill(&self, buf: &mut [u8]) -> Result<usize, c_int> {
        let mut filled = 0;

        while filled < buf.len() {
            match self.read(&mut buf[filled..])? {
                0 => break,
                count => filled += count,
            }
        }

        Ok(filled)
    }
}

impl Drop for Fd {
    fn drop(&mut self) {
        // SAFETY: After this, the file descriptor is invalidated but we are dropping self so it
        // doesn't matter.
        if unsafe { libc::close(self.0) } == -1 {
            match err_no() {
                // Panic only if we aren't already, to prevent aborting an existing unwind.
                libc::EBADF if !thread::panicking() => BadFdPanic.panic(),
                // Read-only descriptors lose no data on a failed close.
                e => warn!("error while closing file descriptor {}: os error {e}", self.0),
            }
        }
    }
}
