use std::ffi::CString;
use std::mem::MaybeUninit;

use libc::c_int;
use log::debug;

use super::fd::{Fd, err_no};
use super::{BufferTooSmall, FileNotFound, FsError, InvalidPath, OpenFailure, ReadFailure};
use crate::buffer::Buffer;
use crate::collections::contiguous::Vector;
use crate::expected::Expected;

/// Returns the size in bytes of the file at `path`.
///
/// # Errors
/// Returns [`FileNotFound`] if nothing exists at `path`, [`OpenFailure`] if it can't be queried
/// for another reason or [`InvalidPath`] if `path` contains a nul byte.
pub fn file_size(path: impl AsRef<[u8]>) -> Expected<u64, FsError> {
    c_path(path.as_ref())
        .and_then(|path| try_file_size(&path))
        .into()
}

/// Returns true if a file exists at `path` and can be queried.
pub fn file_exists(path: impl AsRef<[u8]>) -> bool {
    file_size(path).is_ok()
}

/// Reads the entire file at `path` into the start of `out`, returning the number of bytes read.
/// Bytes in `out` past the end of the file are left untouched.
///
/// # Errors
/// Returns [`BufferTooSmall`] if the file doesn't fit in `out`, [`ReadFailure`] if reading
/// fails, or any of the errors of [`file_size`]. On failure, the contents of `out` are
/// unspecified.
pub fn load_file(out: &mut [u8], path: impl AsRef<[u8]>) -> Expected<usize, FsError> {
    try_load_file(out, path.as_ref()).into()
}

/// Reads the entire file at `path` into a new, fixed size [`Buffer`] with the head at the start.
///
/// # Errors
/// Returns [`AllocationFailure`](crate::collections::error::AllocationFailure) if the contents
/// can't be allocated, or any of the errors of [`load_file`].
///
/// # Examples
/// ```no_run
/// # use sf_lib::fs::file_buffer;
/// let buffer = file_buffer("/etc/hostname").throw();
/// println!("{} bytes", buffer.size());
/// ```
pub fn file_buffer(path: impl AsRef<[u8]>) -> Expected<Buffer, FsError> {
    try_file_buffer(path.as_ref()).into()
}

fn c_path(path: &[u8]) -> Result<CString, FsError> {
    CString::new(path).map_err(|_| InvalidPath.into())
}

fn missing_or(errno: c_int, other: impl FnOnce(c_int) -> FsError) -> FsError {
    match errno {
        libc::ENOENT | libc::ENOTDIR => FileNotFound.into(),
        e => other(e),
    }
}

fn try_file_size(path: &CString) -> Result<u64, FsError> {
    let mut raw_meta: MaybeUninit<libc::stat> = MaybeUninit::uninit();

    // SAFETY: path is nul-terminated and raw_meta is valid for writes of a stat struct.
    if unsafe { libc::stat(path.as_ptr(), raw_meta.as_mut_ptr()) } == -1 {
        return Err(missing_or(err_no(), |errno| OpenFailure { errno }.into()));
    }

    // SAFETY: stat either initializes raw_meta or returns -1, which has been handled.
    let raw = unsafe { raw_meta.assume_init() };

    Ok(u64::try_from(raw.st_size).unwrap_or(0))
}

fn try_load_file(out: &mut [u8], path: &[u8]) -> Result<usize, FsError> {
    let path = c_path(path)?;
    let size = usize::try_from(try_file_size(&path)?).unwrap_or(usize::MAX);

    if size > out.len() {
        return Err(BufferTooSmall { required: size, available: out.len() }.into());
    }

    let fd = Fd::open_read(&path)
        .map_err(|errno| missing_or(errno, |errno| OpenFailure { errno }.into()))?;

    let read = fd.read_to_fill(&mut out[..size])
        .map_err(|errno| FsError::from(ReadFailure { errno }))?;

    debug!("Loaded {read} bytes from {}", path.to_string_lossy());
    Ok(read)
}

fn try_file_buffer(path: &[u8]) -> Result<Buffer, FsError> {
    let size = usize::try_from(try_file_size(&c_path(path)?)?).unwrap_or(usize::MAX);
    let mut bytes = Vector::try_alloc(size, 0)?;

    let read = try_load_file(&mut bytes, path)?;
    if read < bytes.len() {
        // The file shrank between the two queries.
        bytes = Vector::from(&bytes[..read]);
    }

    Ok(Buffer::own(bytes))
}
