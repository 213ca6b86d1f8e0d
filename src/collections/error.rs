use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside of the occupied range of a collection.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("index {index} out of range for collection with {len} elements")]
pub struct IndexOutOfRange {
    pub index: usize,
    pub len: usize,
}

/// An element was requested from a collection with no elements.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("collection is empty")]
pub struct EmptyContainer;

/// The global allocator couldn't provide the requested memory, or the requested size can't be
/// represented as a valid layout.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("failed to allocate {bytes} bytes")]
pub struct AllocationFailure {
    pub bytes: usize,
}

/// A lookup didn't find an entry for the provided key.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("no entry found for key")]
pub struct NotFound;

#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum IndexOrAllocError {
    IndexOutOfRange(IndexOutOfRange),
    AllocationFailure(AllocationFailure),
}
