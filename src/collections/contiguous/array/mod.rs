//! A module containing [`Array`], the raw backing store used by [`Vector`](super::Vector) and
//! [`HashMap`](crate::collections::hash::HashMap).
//!
//! Borrowed iteration uses [`Iter`](std::slice::Iter) and [`IterMut`](std::slice::IterMut) via
//! [`Deref<Target = [T]>`](std::ops::Deref).

mod array;

pub use array::*;
