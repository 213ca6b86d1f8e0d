//! A module containing [`Str`], a length-prefixed byte string which records whether it owns its
//! bytes.

mod str;
mod tests;

pub use str::*;
