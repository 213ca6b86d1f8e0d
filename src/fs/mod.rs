//! File system helpers built directly on the platform's system calls: querying the size of a
//! file and loading its contents into a caller provided slice or a new [`Buffer`](
//! crate::buffer::Buffer).
//!
//! Paths are accepted as anything that can be viewed as bytes (such as `&str` or
//! [`Str`](crate::str::Str)) and mustn't contain a nul byte.
#![cfg(unix)]

mod error;
mod fd;
mod file;
mod panic;
mod tests;

pub use error::*;
pub use file::*;
