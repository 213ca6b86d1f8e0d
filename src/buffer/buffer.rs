use std::cmp;
use std::fmt::{self, Debug, Formatter};

use super::{BufferError, NoSpace, OutOfBounds, ReadOnly};
use crate::collections::contiguous::Vector;
use crate::collections::error::AllocationFailure;
use crate::expected::Expected;

/// A position to [`seek`](Buffer::seek) to, relative to either end of a [`Buffer`]. Offsets past
/// the other end are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeekFrom {
    /// The provided number of bytes after the start of the buffer.
    Start(usize),
    /// The provided number of bytes before the end of the buffer.
    End(usize),
}

/// A block of bytes with a head, where the next insert writes or the next read starts.
///
/// Buffers come in a few modes, chosen by their constructor:
/// - [`fixed`](Buffer::fixed) and [`own`](Buffer::own) buffers have a fixed size. Writing past
///   the end fails with [`NoSpace`].
/// - [`growable`](Buffer::growable) buffers start empty and extend by exactly as many bytes as a
///   write needs.
/// - [`read_only`](Buffer::read_only) buffers reject every insert with [`ReadOnly`].
///
/// After [`clear`](Buffer::clear) a buffer holds no storage, and the next insert allocates
/// exactly the bytes it writes, regardless of mode.
///
/// # Examples
/// ```
/// # use sf_lib::buffer::{Buffer, SeekFrom};
/// let mut buffer = Buffer::growable();
/// buffer.insert(b"hello").throw();
/// buffer.insert(b" world").throw();
/// assert_eq!(buffer.size(), 11);
///
/// buffer.seek(SeekFrom::End(5));
/// let mut out = [0_u8; 5];
/// buffer.read(&mut out).throw();
/// assert_eq!(&out, b"world");
/// ```
pub struct Buffer {
    pub(crate) data: Vector<u8>,
    pub(crate) head: usize,
    pub(crate) growable: bool,
    pub(crate) read_only: bool,
    pub(crate) empty: bool,
}

impl Buffer {
    /// Creates a fixed size buffer of `size` zeroed bytes, with the head at the start.
    ///
    /// # Errors
    /// Returns [`AllocationFailure`] if the bytes can't be allocated.
    pub fn try_fixed(size: usize) -> Result<Buffer, AllocationFailure> {
        Ok(Buffer::own(Vector::try_alloc(size, 0)?))
    }

    /// Creates a fixed size buffer of `size` zeroed bytes. See [`Buffer::try_fixed`].
    ///
    /// # Panics
    /// Panics if the bytes can't be allocated.
    pub fn fixed(size: usize) -> Buffer {
        Buffer::own(Vector::alloc(size, 0))
    }

    /// Creates an empty buffer which grows to fit every insert.
    pub const fn growable() -> Buffer {
        Buffer {
            data: Vector::new(),
            head: 0,
            growable: true,
            read_only: false,
            empty: true,
        }
    }

    /// Creates a fixed size buffer over existing bytes, with the head at the start.
    pub const fn own(bytes: Vector<u8>) -> Buffer {
        Buffer {
            data: bytes,
            head: 0,
            growable: false,
            read_only: false,
            empty: false,
        }
    }

    /// Creates a buffer over existing bytes which can only be read.
    pub const fn read_only(bytes: Vector<u8>) -> Buffer {
        Buffer {
            data: bytes,
            head: 0,
            growable: false,
            read_only: true,
            empty: false,
        }
    }

    /// Returns the size of the buffer in bytes.
    pub const fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns the position of the head, as an offset from the start.
    pub const fn position(&self) -> usize {
        self.head
    }

    /// Returns the number of bytes between the head and the end of the buffer.
    pub const fn remaining(&self) -> usize {
        self.size() - self.head
    }

    /// Returns true if inserts past the end extend the buffer.
    pub const fn is_growable(&self) -> bool {
        self.growable
    }

    /// Returns true if the buffer rejects every insert.
    pub const fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Returns true if the buffer currently holds no storage.
    pub const fn is_empty(&self) -> bool {
        self.empty
    }

    /// Returns the entire contents of the buffer, regardless of the head.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer, returning its bytes.
    pub fn into_bytes(self) -> Vector<u8> {
        self.data
    }

    /// Writes `bytes` at the head and moves the head past them. Bytes already in the buffer are
    /// overwritten, and if the write runs past the end:
    /// - a buffer with no storage allocates exactly the bytes needed;
    /// - a growable buffer extends by exactly the shortfall;
    /// - a fixed buffer fails, leaving its contents and head unchanged.
    ///
    /// # Errors
    /// Returns [`ReadOnly`] for read-only buffers, [`NoSpace`] if a fixed buffer can't fit
    /// `bytes`, or [`AllocationFailure`] if the buffer can't grow.
    pub fn insert(&mut self, bytes: &[u8]) -> Expected<(), BufferError> {
        self.try_insert(bytes).into()
    }

    /// Copies bytes from the head into `out`, filling it, and moves the head past them.
    ///
    /// # Errors
    /// Returns [`OutOfBounds`] if fewer than `out.len()` bytes remain, in which case nothing is
    /// read and the head doesn't move.
    pub fn read(&mut self, out: &mut [u8]) -> Expected<(), BufferError> {
        self.try_read(out).into()
    }

    /// Moves the head to the provided position, clamped to the buffer, and returns the new
    /// position.
    pub fn seek(&mut self, pos: SeekFrom) -> usize {
        let size = self.size();

        self.head = match pos {
            SeekFrom::Start(offset) => cmp::min(offset, size),
            SeekFrom::End(offset) => size - cmp::min(offset, size),
        };

        self.head
    }

    /// Releases the storage of the buffer, leaving it with size 0 and the head at the start.
    pub fn clear(&mut self) {
        self.data.free();
        self.head = 0;
        self.empty = true;
    }

    fn try_insert(&mut self, bytes: &[u8]) -> Result<(), BufferError> {
        if self.read_only {
            return Err(ReadOnly.into());
        }

        let remaining = self.remaining();
        let (overwrite, extend) = bytes.split_at(cmp::min(remaining, bytes.len()));

        if !extend.is_empty() {
            if !(self.empty || self.growable) {
                return Err(NoSpace { requested: bytes.len(), remaining }.into());
            }

            // The head is at the end whenever there is anything left to extend by.
            self.data.try_append(extend)?;
        }

        self.data[self.head..self.head + overwrite.len()].copy_from_slice(overwrite);
        self.head += bytes.len();

        if !bytes.is_empty() {
            self.empty = false;
        }

        Ok(())
    }

    fn try_read(&mut self, out: &mut [u8]) -> Result<(), BufferError> {
        let remaining = self.remaining();

        if remaining < out.len() {
            return Err(OutOfBounds { requested: out.len(), remaining }.into());
        }

        out.copy_from_slice(&self.data[self.head..self.head + out.len()]);
        self.head += out.len();

        Ok(())
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Buffer::growable()
    }
}

impl Debug for Buffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("size", &self.size())
            .field("head", &self.head)
            .field("growable", &self.growable)
            .field("read_only", &self.read_only)
            .field("empty", &self.empty)
            .finish()
    }
}
