//! A module containing [`Expected`], the value type returned by lookups and I/O operations that
//! can fail in an anticipated way.
//!
//! [`Expected`] is also re-exported at the crate root.

mod expected;

pub use expected::*;
