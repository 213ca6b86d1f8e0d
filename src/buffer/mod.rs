//! A module containing [`Buffer`], a block of bytes with a cursor for sequential writes and reads,
//! and the errors it reports.

mod buffer;
mod error;
mod tests;

pub use buffer::*;
pub use error::*;
