use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash};
use std::mem;

use log::debug;

use super::{IntoKeys, IntoValues, Iter, IterMut, Keys, Values, ValuesMut};
use crate::collections::contiguous::Array;
use crate::collections::error::NotFound;
use crate::collections::hash::Fnv1aBuildHasher;
use crate::expected::Expected;
use crate::util::fmt::DebugRaw;
use crate::util::option::OptionExtension;

/// The number of buckets allocated by [`HashMap::new`] and restored by [`HashMap::clear`].
pub const DEFAULT_BUCKETS: usize = 8;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 3;
const LOAD_FACTOR_DENOMINATOR: usize = 4;

/// A map of keys to values which relies on the keys implementing [`Hash`] and [`Eq`].
///
/// A HashMap isn't internally synchronized. Mutation requires `&mut`, so sharing one between
/// threads needs external synchronization, such as a [`Mutex`](std::sync::Mutex).
///
/// Collisions are resolved by separate chaining: each bucket holds a singly linked chain of
/// entries, and new entries are prepended to the chain of bucket `hash & (bucket_count - 1)`. The
/// bucket count is always a power of two (or 0 after [`free`](HashMap::free)). Whenever an
/// insertion pushes the load factor above 3/4, every entry is rehashed into twice as many buckets.
///
/// Hashing goes through the key's [`Hash`] impl and the map's [`BuildHasher`], which defaults to
/// [`Fnv1aBuildHasher`]. Custom equality is provided through the key's [`Eq`] impl.
///
/// It is a logic error for keys in a HashMap to be manipulated in a way that changes their hash.
/// Because of this, HashMap's API prevents mutable access to its keys.
///
/// Lookups that can miss return [`Expected`], with [`NotFound`] as the error. Iteration visits
/// buckets in index order and each chain from its most recent entry, callers shouldn't rely on
/// any particular order.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the HashMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `set` | `O(1)`**, `O(n)` |
/// | `get` | `O(1)`* |
/// | `delete` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `clear` | `O(n)` |
///
/// \* Each lookup walks one chain, which stays short while the load factor is respected.
///
/// \** If the insertion overloads the HashMap, `set` rehashes every entry. \* applies as well.
pub struct HashMap<K: Hash + Eq, V, B: BuildHasher = Fnv1aBuildHasher> {
    pub(crate) arr: Array<Chain<K, V>>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

pub(crate) type Chain<K, V> = Option<Box<Entry<K, V>>>;

pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) next: Chain<K, V>,
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> HashMap<K, V, B> {
    /// Creates a new, empty HashMap with [`DEFAULT_BUCKETS`] buckets and the default value for
    /// `B`.
    ///
    /// # Panics
    /// Panics if the bucket array can't be allocated.
    ///
    /// # Examples
    /// ```
    /// # use sf_lib::collections::hash::HashMap;
    /// let map: HashMap<u32, u32> = HashMap::new();
    /// assert_eq!(map.len(), 0);
    /// assert_eq!(map.bucket_count(), 8);
    /// ```
    pub fn new() -> HashMap<K, V, B> {
        HashMap::with_hasher(B::default())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Creates a new, empty HashMap with [`DEFAULT_BUCKETS`] buckets and the provided `hasher`.
    ///
    /// # Panics
    /// Panics if the bucket array can't be allocated.
    pub fn with_hasher(hasher: B) -> HashMap<K, V, B> {
        HashMap {
            arr: Array::repeat_default(DEFAULT_BUCKETS),
            len: 0,
            hasher,
        }
    }

    /// Returns the number of entries in the HashMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current number of buckets.
    pub const fn bucket_count(&self) -> usize {
        self.arr.size()
    }

    /// Returns a reference to the map's [`BuildHasher`].
    pub const fn hasher(&self) -> &B {
        &self.hasher
    }

    /// Associates `value` with `key`. If an equal key is already present, its value is replaced
    /// in place and the previous value is returned, leaving the length and the stored key
    /// unchanged. Otherwise a new entry is added, and the HashMap rehashes into twice as many
    /// buckets if that pushes the load factor above 3/4.
    ///
    /// A HashMap that has been [`free`](HashMap::free)d is given [`DEFAULT_BUCKETS`] buckets
    /// again first.
    ///
    /// # Panics
    /// Panics if a bucket array can't be allocated.
    ///
    /// # Examples
    /// ```
    /// # use sf_lib::collections::hash::HashMap;
    /// let mut map = HashMap::<&str, u32>::new();
    /// assert_eq!(map.set("a", 1), None);
    /// assert_eq!(map.set("a", 2), Some(1));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn set(&mut self, key: K, value: V) -> Option<V> {
        if self.bucket_count() == 0 {
            self.arr = Array::repeat_default(DEFAULT_BUCKETS);
        }

        let hash = self.hasher.hash_one(&key);
        if let Some(entry) = self.find_by_mut(hash, |k| *k == key) {
            return Some(mem::replace(&mut entry.value, value));
        }

        // SAFETY: A bucket array was allocated above if there wasn't one, and hash came from
        // this map's hasher.
        unsafe { self.prepend(hash, key, value) };

        if self.is_overloaded() {
            self.rehash(self.bucket_count() * GROWTH_FACTOR);
        }

        None
    }

    /// Returns a reference to the value associated with `key`.
    ///
    /// # Errors
    /// Returns [`NotFound`] if the HashMap contains no entry for `key`.
    ///
    /// # Examples
    /// ```
    /// # use sf_lib::collections::hash::HashMap;
    /// # use sf_lib::Expected;
    /// let mut map = HashMap::<String, u32>::new();
    /// map.set(String::from("one"), 1);
    /// assert_eq!(map.get("one"), Expected::Ok(&1));
    /// assert!(map.get("two").is_err());
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Expected<&V, NotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).map(|(_, v)| v)
    }

    /// Returns references to the stored key and the value associated with `key`.
    ///
    /// # Errors
    /// Returns [`NotFound`] if the HashMap contains no entry for `key`.
    pub fn get_entry<Q>(&self, key: &Q) -> Expected<(&K, &V), NotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hasher.hash_one(key);
        self.find_by(hash, |k| k.borrow() == key)
            .map(|entry| (&entry.key, &entry.value))
            .ok_or(NotFound)
            .into()
    }

    /// Returns a mutable reference to the value associated with `key`.
    ///
    /// # Errors
    /// Returns [`NotFound`] if the HashMap contains no entry for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Expected<&mut V, NotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hasher.hash_one(key);
        self.find_by_mut(hash, |k| k.borrow() == key)
            .map(|entry| &mut entry.value)
            .ok_or(NotFound)
            .into()
    }

    /// Returns true if there is a value associated with `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_entry(key).is_ok()
    }

    /// Removes the entry associated with `key`, returning both the stored key and the value.
    ///
    /// # Errors
    /// Returns [`NotFound`] if the HashMap contains no entry for `key`, in which case nothing is
    /// changed.
    pub fn delete_entry<Q>(&mut self, key: &Q) -> Expected<(K, V), NotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = self.hasher.hash_one(key);
        self.unlink_by(hash, |k| k.borrow() == key)
            .map(|entry| (entry.key, entry.value))
            .ok_or(NotFound)
            .into()
    }

    /// Removes the entry associated with `key`, returning the value. The length only decreases
    /// when an entry is actually removed.
    ///
    /// # Errors
    /// Returns [`NotFound`] if the HashMap contains no entry for `key`, in which case nothing is
    /// changed.
    ///
    /// # Examples
    /// ```
    /// # use sf_lib::collections::hash::HashMap;
    /// # use sf_lib::Expected;
    /// let mut map = HashMap::<&str, u32>::new();
    /// map.set("a", 1);
    /// assert_eq!(map.delete("a"), Expected::Ok(1));
    /// assert!(map.delete("a").is_err());
    /// assert_eq!(map.len(), 0);
    /// ```
    pub fn delete<Q>(&mut self, key: &Q) -> Expected<V, NotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.delete_entry(key).map(|(_, v)| v)
    }

    /// Drops every entry and replaces the bucket array with [`DEFAULT_BUCKETS`] empty buckets.
    ///
    /// # Panics
    /// Panics if the new bucket array can't be allocated.
    pub fn clear(&mut self) {
        let dropped = self.len;
        self.release_chains();
        self.arr = Array::repeat_default(DEFAULT_BUCKETS);
        debug!("HashMap cleared, {dropped} entries dropped");
    }

    /// Drops every entry and the bucket array itself, leaving a HashMap with 0 buckets. A freed
    /// HashMap can still be used, the next [`set`](HashMap::set) allocates buckets again.
    pub fn free(&mut self) {
        self.release_chains();
        self.arr = Array::new();
    }

    /// Calls `visitor` with every key-value pair in the HashMap. The visiting order is
    /// unspecified.
    pub fn foreach<F: FnMut(&K, &V)>(&self, mut visitor: F) {
        for (key, value) in self.iter() {
            visitor(key, value);
        }
    }

    /// Returns an iterator over all key-value pairs in the HashMap, as references.
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all key-value pairs in the HashMap, with mutable references to
    /// the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.into_iter()
    }

    /// Returns an iterator over all keys in the HashMap, as references.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Consumes self and returns an iterator over all contained keys.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Returns an iterator over all values in the HashMap, as references.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Returns an iterator over all values in the HashMap, as mutable references.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.iter_mut())
    }

    /// Consumes self and returns an iterator over all contained values.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.into_iter())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashMap<K, V, B> {
    /// Determines whether the load factor has been exceeded, meaning that the HashMap should be
    /// rehashed into more buckets.
    pub(crate) const fn is_overloaded(&self) -> bool {
        self.len * LOAD_FACTOR_DENOMINATOR > self.bucket_count() * LOAD_FACTOR_NUMERATOR
    }

    /// Returns the index of the bucket for the provided hash, or None if there are no buckets.
    pub(crate) fn bucket_for(&self, hash: u64) -> Option<usize> {
        let mask = self.bucket_count().checked_sub(1)?;
        Some(hash as usize & mask)
    }

    /// Finds the entry with the provided `hash` that satisfies `is_key`.
    pub(crate) fn find_by(&self, hash: u64, is_key: impl Fn(&K) -> bool) -> Option<&Entry<K, V>> {
        let mut link = self.arr[self.bucket_for(hash)?].as_deref();

        while let Some(entry) = link {
            if is_key(&entry.key) {
                return Some(entry);
            }
            link = entry.next.as_deref();
        }

        None
    }

    /// Finds the entry with the provided `hash` that satisfies `is_key`, mutably.
    pub(crate) fn find_by_mut(
        &mut self,
        hash: u64,
        is_key: impl Fn(&K) -> bool,
    ) -> Option<&mut Entry<K, V>> {
        let index = self.bucket_for(hash)?;
        seek_link(&mut self.arr[index], is_key).as_deref_mut()
    }

    /// Unlinks and returns the entry with the provided `hash` that satisfies `is_key`, relinking
    /// the rest of its chain.
    pub(crate) fn unlink_by(
        &mut self,
        hash: u64,
        is_key: impl Fn(&K) -> bool,
    ) -> Option<Box<Entry<K, V>>> {
        let index = self.bucket_for(hash)?;
        let link = seek_link(&mut self.arr[index], is_key);

        let mut entry = link.take()?;
        *link = entry.next.take();
        self.len -= 1;

        Some(entry)
    }

    /// Prepends a new entry to the chain for `hash`, without checking for an equal key.
    ///
    /// # Safety
    /// The HashMap must have at least one bucket, and `hash` must be the hash of `key` under the
    /// HashMap's hasher.
    pub(crate) unsafe fn prepend(&mut self, hash: u64, key: K, value: V) {
        // SAFETY: The caller guarantees that the HashMap has buckets.
        let index = unsafe { self.bucket_for(hash).unreachable() };
        let head = &mut self.arr[index];

        let next = head.take();
        *head = Some(Box::new(Entry { key, value, next }));
        self.len += 1;
    }

    /// Moves every entry into a new bucket array of size `new_count`, which must be a non-zero
    /// power of two. All entries are first unlinked into a single pending chain, then reinserted
    /// at the head of their new bucket.
    pub(crate) fn rehash(&mut self, new_count: usize) {
        let mut old_arr = mem::replace(&mut self.arr, Array::repeat_default(new_count));
        let mut pending: Chain<K, V> = None;

        for bucket in old_arr.iter_mut() {
            while let Some(mut entry) = bucket.take() {
                *bucket = entry.next.take();
                entry.next = pending;
                pending = Some(entry);
            }
        }

        while let Some(mut entry) = pending {
            pending = entry.next.take();

            let hash = self.hasher.hash_one(&entry.key);
            // SAFETY: new_count is non-zero, so a bucket always exists.
            let index = unsafe { self.bucket_for(hash).unreachable() };
            let head = &mut self.arr[index];
            entry.next = head.take();
            *head = Some(entry);
        }

        debug!(
            "HashMap rehashed {} entries from {} to {new_count} buckets",
            self.len,
            old_arr.size()
        );
    }

    /// Drops every entry, one at a time so that long chains don't recurse.
    pub(crate) fn release_chains(&mut self) {
        for bucket in self.arr.iter_mut() {
            let mut link = bucket.take();
            while let Some(mut entry) = link {
                link = entry.next.take();
            }
        }

        self.len = 0;
    }
}

/// Walks the chain starting at `link` until it reaches the link holding a key that satisfies
/// `is_key`, or the empty link at the end of the chain.
fn seek_link<'a, K, V>(
    mut link: &'a mut Chain<K, V>,
    is_key: impl Fn(&K) -> bool,
) -> &'a mut Chain<K, V> {
    while link.as_ref().is_some_and(|entry| !is_key(&entry.key)) {
        // SAFETY: The loop condition has just checked that link is Some.
        link = unsafe { &mut link.as_mut().unreachable().next };
    }

    link
}

impl<K: Hash + Eq, V, B: BuildHasher> Drop for HashMap<K, V, B> {
    fn drop(&mut self) {
        self.release_chains();
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> Default for HashMap<K, V, B> {
    fn default() -> Self {
        HashMap::new()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for HashMap<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher + Default> FromIterator<(K, V)> for HashMap<K, V, B> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HashMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq + Clone, V: Clone, B: BuildHasher + Clone> Clone for HashMap<K, V, B> {
    fn clone(&self) -> Self {
        let mut map = HashMap {
            arr: Array::repeat_default(self.bucket_count()),
            len: 0,
            hasher: self.hasher.clone(),
        };

        for (key, value) in self.iter() {
            // Keys are already unique and the bucket count matches, so no lookup or rehash is
            // needed.
            let hash = map.hasher.hash_one(key);
            // SAFETY: map has as many buckets as self, which has entries and so at least one
            // bucket.
            unsafe { map.prepend(hash, key.clone(), value.clone()) };
        }

        map
    }
}

impl<K: Hash + Eq, V: PartialEq, B: BuildHasher> PartialEq for HashMap<K, V, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self.iter().all(|(key, value)| other.get(key).ok_ref() == Some(&value))
    }
}

impl<K: Hash + Eq, V: Eq, B: BuildHasher> Eq for HashMap<K, V, B> {}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher + Debug> Debug for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let buckets: Vec<DebugRaw> = self.arr.iter()
            .map(|bucket| {
                let mut chain = Vec::new();
                let mut link = bucket;
                while let Some(entry) = link {
                    chain.push(format!("({:?}: {:?})", entry.key, entry.value));
                    link = &entry.next;
                }

                DebugRaw(if chain.is_empty() { "-".into() } else { chain.join(" -> ") })
            })
            .collect();

        f.debug_struct("HashMap")
            .field("buckets", &buckets)
            .field("len", &self.len)
            .field("bucket_count", &self.bucket_count())
            .field("hasher", &self.hasher)
            .finish()
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Display for HashMap<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.iter()).finish()
    }
}
