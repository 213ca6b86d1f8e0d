//! The 32-bit FNV-1a hash, both as a plain function over bytes and as a [`Hasher`].

use std::hash::{BuildHasher, Hasher};

/// The offset basis of 32-bit FNV-1a.
pub const FNV1A_SEED: u32 = 0x811C_9DC5;

/// The prime multiplier of 32-bit FNV-1a.
pub const FNV1A_PRIME: u32 = 0x0100_0193;

/// Hashes `bytes` with 32-bit FNV-1a.
///
/// # Examples
/// ```
/// # use sf_lib::collections::hash::fnv1a;
/// assert_eq!(fnv1a(b""), 0x811C9DC5);
/// assert_eq!(fnv1a(b"a"), 0xE40C292C);
/// ```
pub const fn fnv1a(bytes: &[u8]) -> u32 {
    let mut hash = FNV1A_SEED;
    let mut i = 0;

    while i < bytes.len() {
        hash = (hash ^ bytes[i] as u32).wrapping_mul(FNV1A_PRIME);
        i += 1;
    }

    hash
}

/// A [`Hasher`] which feeds every written byte through 32-bit FNV-1a. [`finish`](Hasher::finish)
/// returns the 32-bit state zero-extended, so hashing a value that writes exactly its bytes
/// matches [`fnv1a`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fnv1aHasher {
    state: u32,
}

impl Default for Fnv1aHasher {
    fn default() -> Self {
        Fnv1aHasher { state: FNV1A_SEED }
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state as u64
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state = (self.state ^ *byte as u32).wrapping_mul(FNV1A_PRIME);
        }
    }
}

/// Builds [`Fnv1aHasher`]s, the default hasher of [`HashMap`](super::HashMap).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Fnv1aBuildHasher;

impl BuildHasher for Fnv1aBuildHasher {
    type Hasher = Fnv1aHasher;

    fn build_hasher(&self) -> Self::Hasher {
        Fnv1aHasher::default()
    }
}
