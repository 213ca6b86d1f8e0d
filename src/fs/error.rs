use derive_more::{Display, Error, From, IsVariant, TryInto};

use crate::collections::error::AllocationFailure;

/// No file exists at the requested path.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("requested file could not be found")]
pub struct FileNotFound;

/// `open` or `stat` failed for a reason other than the file being missing, with the raw OS error
/// number.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("failed to open requested file (os error {errno})")]
pub struct OpenFailure {
    pub errno: i32,
}

/// `read` failed partway through a file, with the raw OS error number.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("failed to read requested file (os error {errno})")]
pub struct ReadFailure {
    pub errno: i32,
}

/// A path contained an interior nul byte, so it can't be passed to the OS.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("path contains a nul byte")]
pub struct InvalidPath;

/// The output slice is smaller than the file being loaded into it.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("file holds {required} bytes but the buffer only fits {available}")]
pub struct BufferTooSmall {
    pub required: usize,
    pub available: usize,
}

/// Every way that a file system operation can fail.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum FsError {
    FileNotFound(FileNotFound),
    OpenFailure(OpenFailure),
    ReadFailure(ReadFailure),
    InvalidPath(InvalidPath),
    BufferTooSmall(BufferTooSmall),
    AllocationFailure(AllocationFailure),
}
