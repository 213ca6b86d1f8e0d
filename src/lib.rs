//! A small foundation library of strongly typed containers and helpers: a growable
//! [`Vector`](collections::contiguous::Vector), a separately chained
//! [`HashMap`](collections::hash::HashMap), the [`Expected`] success-or-failure value, a tagged
//! byte string [`Str`](str::Str), a cursor based [`Buffer`](buffer::Buffer) and file loading
//! helpers in [`fs`].
//!
//! # Error Handling
//! Every precondition is checked and reported as a small error type, rather than being left as
//! undefined behavior. Lookups and I/O, where failure is an ordinary answer, return [`Expected`].
//! Vector operations return [`Result`], with a `try_` variant for each operation that allocates
//! so that allocation failure can be handled too. The plain variants panic if allocation fails.
//!
//! Errors are strongly typed, using enums for static dispatch rather than dynamic, with structs
//! (often ZSTs) that implement [`Error`](std::error::Error). Where an operation can fail in more
//! than one way, the union enum converts from each of its variants, so `?` works as expected.
//!
//! # Logging
//! Reallocations, rehashes and file loads are reported through the [`log`] facade, at `trace` or
//! `debug` level. This crate never installs a logger itself.
//!
//! # Dependencies
//! The [`fs`] module relies on `libc` for its thin syscall wrappers. It can be disabled along
//! with [`buffer`] through Cargo features.
//!
//! This crate also depends on some derive macros because they're helpful and remove the need for
//! some very repetitive programming.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "buffer")]
pub mod buffer;
pub mod collections;
pub mod expected;
#[cfg(feature = "fs")]
pub mod fs;
pub mod str;

pub(crate) mod util;

#[doc(inline)]
pub use expected::Expected;
