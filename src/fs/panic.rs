use std::error::Error;

use derive_more::{Display, Error};

/// An OS error which can only be caused by a bug in this crate, rather than by the environment.
pub(crate) trait Panic: Error {
    fn panic(&self) -> ! {
        panic!("{}", self)
    }
}

#[derive(Debug, Display, Error)]
#[display("file descriptor corruption")]
pub(crate) struct BadFdPanic;
impl Panic for BadFdPanic {}

#[derive(Debug, Display, Error)]
#[display("pointer outside of the accessible address space")]
pub(crate) struct BadAddrPanic;
impl Panic for BadAddrPanic {}
