use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::mem;
use std::slice::Iter as ArrIter;
use std::slice::IterMut as ArrIterMut;

use super::hash_map::{Chain, Entry};
use super::HashMap;
use crate::collections::contiguous::Array;

impl<K: Hash + Eq, V, B: BuildHasher> IntoIterator for HashMap<K, V, B> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = mem::replace(&mut self.len, 0);

        IntoIter {
            buckets: mem::take(&mut self.arr),
            index: 0,
            chain: None,
            len,
        }
    }
}

/// An owned iterator over the entries of a [`HashMap`]. See [`HashMap::into_iter`].
pub struct IntoIter<K, V> {
    pub(crate) buckets: Array<Chain<K, V>>,
    pub(crate) index: usize,
    pub(crate) chain: Chain<K, V>,
    pub(crate) len: usize,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(mut entry) = self.chain.take() {
                self.chain = entry.next.take();
                self.len -= 1;

                let Entry { key, value, .. } = *entry;
                return Some((key, value));
            }

            self.chain = self.buckets.get_mut(self.index)?.take();
            self.index += 1;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> Drop for IntoIter<K, V> {
    fn drop(&mut self) {
        // Entries are dropped one at a time, rather than recursively through each chain.
        self.by_ref().for_each(drop);
    }
}

impl<'a, K: Hash + Eq, V, B: BuildHasher> IntoIterator for &'a HashMap<K, V, B> {
    type Item = (&'a K, &'a V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            buckets: self.arr.iter(),
            entry: None,
            len: self.len,
        }
    }
}

/// An iterator over the entries of a [`HashMap`], as references. See [`HashMap::iter`].
pub struct Iter<'a, K, V> {
    pub(crate) buckets: ArrIter<'a, Chain<K, V>>,
    pub(crate) entry: Option<&'a Entry<K, V>>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.entry {
                self.entry = entry.next.as_deref();
                self.len -= 1;
                return Some((&entry.key, &entry.value));
            }

            self.entry = self.buckets.next()?.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<'a, K: Hash + Eq, V, B: BuildHasher> IntoIterator for &'a mut HashMap<K, V, B> {
    type Item = (&'a K, &'a mut V);

    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            buckets: self.arr.iter_mut(),
            entry: None,
            len: self.len,
        }
    }
}

/// An iterator over the entries of a [`HashMap`], with mutable references to the values. See
/// [`HashMap::iter_mut`].
pub struct IterMut<'a, K, V> {
    pub(crate) buckets: ArrIterMut<'a, Chain<K, V>>,
    pub(crate) entry: Option<&'a mut Entry<K, V>>,
    pub(crate) len: usize,
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.entry.take() {
                self.entry = entry.next.as_deref_mut();
                self.len -= 1;
                return Some((&entry.key, &mut entry.value));
            }

            self.entry = self.buckets.next()?.as_deref_mut();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}
impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}
impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}
impl<K, V> FusedIterator for IterMut<'_, K, V> {}

/// An owned iterator over the keys of a [`HashMap`]. See [`HashMap::into_keys`].
pub struct IntoKeys<K, V>(
    pub(crate) IntoIter<K, V>
);

impl<K, V> Iterator for IntoKeys<K, V> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

/// An iterator over the keys of a [`HashMap`], as references. See [`HashMap::keys`].
pub struct Keys<'a, K, V>(
    pub(crate) Iter<'a, K, V>
);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

/// An owned iterator over the values of a [`HashMap`]. See [`HashMap::into_values`].
pub struct IntoValues<K, V>(
    pub(crate) IntoIter<K, V>
);

impl<K, V> Iterator for IntoValues<K, V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

/// An iterator over the values of a [`HashMap`], as mutable references. See
/// [`HashMap::values_mut`].
pub struct ValuesMut<'a, K, V>(
    pub(crate) IterMut<'a, K, V>
);

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

/// An iterator over the values of a [`HashMap`], as references. See [`HashMap::values`].
pub struct Values<'a, K, V>(
    pub(crate) Iter<'a, K, V>
);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|e| e.1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for IntoKeys<K, V> {}
impl<K, V> FusedIterator for IntoKeys<K, V> {}
impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}
impl<K, V> ExactSizeIterator for IntoValues<K, V> {}
impl<K, V> FusedIterator for IntoValues<K, V> {}
impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}
impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}
impl<K, V> FusedIterator for ValuesMut<'_, K, V> {}
