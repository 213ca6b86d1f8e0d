use std::hash::BuildHasher;

use super::HashMap;
use crate::collections::error::NotFound;
use crate::collections::hash::Fnv1aBuildHasher;
use crate::expected::Expected;
use crate::str::Str;

/// An owned, immutable block of bytes, stored as a value by a [`BlobMap`].
pub type Blob = Box<[u8]>;

/// A map of owned strings to owned byte blobs. Keys and values are copied in, so callers can keep
/// using their own (possibly borrowed) data.
pub type BlobMap<B = Fnv1aBuildHasher> = HashMap<Str<'static>, Blob, B>;

impl<B: BuildHasher> HashMap<Str<'static>, Blob, B> {
    /// Copies `key` and `value` into the map, returning the previous value for `key` if there was
    /// one.
    ///
    /// # Examples
    /// ```
    /// # use sf_lib::collections::hash::map::BlobMap;
    /// # use sf_lib::str::Str;
    /// let mut map: BlobMap = BlobMap::new();
    /// let name = String::from("config");
    /// map.set_blob(&Str::from_ref(&name), b"\x01\x02");
    /// assert_eq!(map.get_blob(&Str::lit("config")).ok_ref(), Some(&&b"\x01\x02"[..]));
    /// ```
    pub fn set_blob(&mut self, key: &Str<'_>, value: &[u8]) -> Option<Blob> {
        self.set(key.dup(), Box::from(value))
    }

    /// Returns the bytes associated with `key`, which may borrow from any lifetime.
    ///
    /// # Errors
    /// Returns [`NotFound`] if the map contains no entry for `key`.
    pub fn get_blob(&self, key: &Str<'_>) -> Expected<&[u8], NotFound> {
        let hash = self.hasher.hash_one(key);
        self.find_by(hash, |k| k == key)
            .map(|entry| &*entry.value)
            .ok_or(NotFound)
            .into()
    }

    /// Removes the entry associated with `key`, returning its bytes.
    ///
    /// # Errors
    /// Returns [`NotFound`] if the map contains no entry for `key`.
    pub fn delete_blob(&mut self, key: &Str<'_>) -> Expected<Blob, NotFound> {
        let hash = self.hasher.hash_one(key);
        self.unlink_by(hash, |k| k == key)
            .map(|entry| entry.value)
            .ok_or(NotFound)
            .into()
    }
}
