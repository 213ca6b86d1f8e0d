use derive_more::{Display, Error, From, IsVariant, TryInto};

use crate::collections::error::AllocationFailure;

/// An insert ran past the end of a buffer that can't grow.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("buffer is fixed size and can't fit {requested} bytes at the head, {remaining} remain")]
pub struct NoSpace {
    pub requested: usize,
    pub remaining: usize,
}

/// A read requested more bytes than remain after the head.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("out of bounds read of {requested} bytes at the head, {remaining} remain")]
pub struct OutOfBounds {
    pub requested: usize,
    pub remaining: usize,
}

/// An insert was attempted on a read-only buffer.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("buffer is read-only")]
pub struct ReadOnly;

/// Every way that a [`Buffer`](super::Buffer) operation can fail.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    NoSpace(NoSpace),
    OutOfBounds(OutOfBounds),
    ReadOnly(ReadOnly),
    AllocationFailure(AllocationFailure),
}
