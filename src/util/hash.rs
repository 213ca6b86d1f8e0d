use std::hash::{BuildHasher, Hash, Hasher};

/// A key with an explicitly chosen hash, used to force collisions in tests. Equality only
/// considers the value.
#[derive(Debug, Clone)]
pub struct FixedHash<T: Eq> {
    hash: u64,
    value: T,
}

impl<T: Eq> FixedHash<T> {
    pub const fn new(hash: u64, value: T) -> FixedHash<T> {
        FixedHash {
            hash,
            value,
        }
    }

    pub fn value(self) -> T {
        self.value
    }
}

impl<T: Eq> Hash for FixedHash<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl<T: Eq> PartialEq for FixedHash<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for FixedHash<T> {}

/// A hasher which returns the last u64 written to it unchanged.
#[derive(Debug, Default)]
pub struct PassThroughHasher {
    state: u64,
}

impl Hasher for PassThroughHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state = (self.state << 8) | *byte as u64;
        }
    }

    fn write_u64(&mut self, i: u64) {
        self.state = i;
    }
}

#[derive(Debug, Default, Clone)]
pub struct PassThroughBuilder;

impl BuildHasher for PassThroughBuilder {
    type Hasher = PassThroughHasher;

    fn build_hasher(&self) -> Self::Hasher {
        PassThroughHasher::default()
    }
}
