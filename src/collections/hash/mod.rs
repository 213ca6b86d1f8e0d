//! Hash-based collection types and the hashing they use. Namely [`HashMap`], a separately chained
//! map, and [`fnv1a`], the 32-bit FNV-1a hash that the map uses by default.

pub mod fnv;
pub mod map;

#[doc(inline)]
pub use fnv::{Fnv1aBuildHasher, Fnv1aHasher, fnv1a};
#[doc(inline)]
pub use map::HashMap;
