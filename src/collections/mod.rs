//! General-purpose collection types and the errors they report.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves repeating a lot of the slice functionality.

pub mod contiguous;
pub mod error;
pub mod hash;
