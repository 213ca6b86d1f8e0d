use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use log::warn;

use crate::collections::contiguous::Array;
use crate::collections::error::{
    AllocationFailure, EmptyContainer, IndexOrAllocError, IndexOutOfRange,
};
use crate::util::fmt::DebugSlice;
use crate::util::result::ResultExtension;

/// The capacity of a Vector after its first allocation by [`push`](Vector::push), and the
/// smallest capacity that a Vector will shrink to.
pub const MIN_CAP: usize = 4;

/// Bulk appends round the new capacity up to a multiple of this value.
pub const APPEND_GRANULARITY: usize = 8;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, based on [`Array<T>`].
///
/// Elements are stored by value and moved in and out of the Vector. The backing allocation may
/// move during any operation that changes the length, so references into a Vector never outlive a
/// mutation (the borrow checker enforces this).
///
/// The Vector grows by doubling, starting at [`MIN_CAP`], and halves its capacity whenever
/// removing an element leaves it at most half full (never going below [`MIN_CAP`]).
///
/// A Vector isn't internally synchronized. Mutation requires `&mut`, so sharing one between
/// threads needs external synchronization, such as a [`Mutex`](std::sync::Mutex).
///
/// Each operation with a precondition reports a violation as an error rather than panicking.
/// Allocation failures are reported by the `try_` variants, while the plain variants panic.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
/// - `m`: The number of items being appended.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `set` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)`*, `O(n)` |
/// | `insert` | `O(n-i)` |
/// | `delete` | `O(n-i)` |
/// | `append` | `O(m)`*, `O(n+m)` |
///
/// \* Amortized, when no reallocation takes place.
pub struct Vector<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Nothing is allocated until the first
    /// element is added.
    ///
    /// # Examples
    /// ```
    /// # use sf_lib::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// assert!(!vec.is_allocated());
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            arr: Array::new(),
            len: 0,
        }
    }

    /// Returns the number of elements in the Vector.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the Vector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots currently allocated.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Returns true if the Vector currently owns a backing store.
    pub const fn is_allocated(&self) -> bool {
        self.cap() != 0
    }

    /// Pushes the provided value onto the end of the Vector, allocating [`MIN_CAP`] slots if the
    /// Vector is unallocated or doubling the capacity if it is full.
    ///
    /// # Errors
    /// Returns [`AllocationFailure`] if growing fails, in which case the Vector is unchanged and
    /// `value` is dropped.
    pub fn try_push(&mut self, value: T) -> Result<(), AllocationFailure> {
        if self.len == self.cap() {
            self.try_grow()?;
        }
        // SAFETY: The capacity has just been adjusted to fit the new value.
        unsafe { self.push_unchecked(value) }
        Ok(())
    }

    /// Pushes the provided value onto the end of the Vector. See [`Vector::try_push`].
    ///
    /// # Panics
    /// Panics if growing the Vector fails.
    ///
    /// # Examples
    /// ```
    /// # use sf_lib::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 8);
    /// ```
    pub fn push(&mut self, value: T) {
        self.try_push(value).throw()
    }

    /// Writes the provided value into the slot after the last element.
    ///
    /// # Safety
    /// The Vector must have spare capacity.
    pub(crate) unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: The caller guarantees that len < cap, so the slot is in bounds.
        unsafe { self.arr.ptr.add(self.len).write(MaybeUninit::new(value)) }
        self.len += 1;
    }

    /// Removes and returns the last element, halving the capacity if the Vector is left at most
    /// half full.
    ///
    /// # Errors
    /// Returns [`EmptyContainer`] if the Vector has no elements.
    ///
    /// # Examples
    /// ```
    /// # use sf_lib::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// assert_eq!(vec.pop(), Ok(2));
    /// assert_eq!(vec.pop(), Ok(1));
    /// assert_eq!(vec.pop(), Ok(0));
    /// assert!(vec.pop().is_err());
    /// ```
    pub fn pop(&mut self) -> Result<T, EmptyContainer> {
        if self.len == 0 {
            return Err(EmptyContainer);
        }

        self.len -= 1;
        // SAFETY: The value at the old last index is initialized. Now that len has been
        // decremented, it's no longer considered part of the Vector, so it's moved out.
        let value = unsafe { self.arr.ptr.add(self.len).read().assume_init() };

        self.shrink_if_sparse();
        Ok(value)
    }

    /// Inserts the provided value at `index`, moving all following elements one slot to the
    /// right. An `index` equal to the length appends the value.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index > len`, or [`AllocationFailure`] if growing fails.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOrAllocError> {
        if index > self.len {
            return Err(IndexOutOfRange { index, len: self.len }.into());
        }

        if self.len == self.cap() {
            self.try_grow()?;
        }

        // SAFETY: index <= len < cap, so both the source and the destination ranges are within
        // the allocation. ptr::copy handles the overlap.
        unsafe {
            let base = self.base_ptr();
            ptr::copy(base.add(index), base.add(index + 1), self.len - index);
            base.add(index).write(value);
        }

        self.len += 1;
        Ok(())
    }

    /// Inserts the provided value at `index`. See [`Vector::try_insert`].
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index > len`.
    ///
    /// # Panics
    /// Panics if growing the Vector fails.
    ///
    /// # Examples
    /// ```
    /// # use sf_lib::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// vec.insert(1, 100).unwrap();
    /// vec.insert(4, 200).unwrap();
    /// assert_eq!(&*vec, &[0, 100, 1, 2, 200]);
    /// assert!(vec.insert(6, 300).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfRange> {
        match self.try_insert(index, value) {
            Ok(()) => Ok(()),
            Err(IndexOrAllocError::IndexOutOfRange(e)) => Err(e),
            Err(IndexOrAllocError::AllocationFailure(e)) => panic!("{e}"),
        }
    }

    /// Overwrites the element at `index`, returning the previous value.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index >= len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfRange> {
        let slot = self.get_mut(index)?;
        Ok(mem::replace(slot, value))
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index >= len`.
    pub fn get_ref(&self, index: usize) -> Result<&T, IndexOutOfRange> {
        self.check_index(index)?;
        Ok(&self[index])
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfRange> {
        self.check_index(index)?;
        Ok(&mut self[index])
    }

    /// Removes and returns the element at `index`, moving all following elements one slot to the
    /// left. The capacity is halved if the Vector is left at most half full.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use sf_lib::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.delete(1), Ok('e'));
    /// assert_eq!(vec.delete(4), Ok(' '));
    /// assert_eq!(vec, "Hlloworld!".chars().collect());
    /// ```
    pub fn delete(&mut self, index: usize) -> Result<T, IndexOutOfRange> {
        self.check_index(index)?;

        // SAFETY: index < len, so the value is initialized and the following len - index - 1
        // values are within the allocation. The value is moved out before being overwritten.
        let value = unsafe {
            let base = self.base_ptr();
            let value = base.add(index).read();
            ptr::copy(base.add(index + 1), base.add(index), self.len - index - 1);
            value
        };

        self.len -= 1;
        self.shrink_if_sparse();
        Ok(value)
    }

    /// Drops every element, keeping the current allocation.
    pub fn clear(&mut self) {
        let len = self.len;
        // Reset len first so that a panicking drop can't cause a double drop.
        self.len = 0;
        // SAFETY: The first len values are initialized and are no longer part of the Vector.
        unsafe { ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.base_ptr(), len)) }
    }

    /// Drops every element and releases the backing store, returning the Vector to its
    /// unallocated state. Calling this repeatedly (or dropping the Vector afterwards) releases
    /// nothing further.
    ///
    /// # Examples
    /// ```
    /// # use sf_lib::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..10).collect();
    /// vec.free();
    /// vec.free();
    /// assert_eq!(vec.len(), 0);
    /// assert!(!vec.is_allocated());
    /// ```
    pub fn free(&mut self) {
        self.clear();
        self.arr = Array::new();
    }

    /// Checks that `index` refers to an element of the Vector.
    pub(crate) const fn check_index(&self, index: usize) -> Result<(), IndexOutOfRange> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexOutOfRange { index, len: self.len })
        }
    }

    /// Grows the Vector so that it can hold at least one more element: [`MIN_CAP`] slots when
    /// unallocated, double the capacity otherwise.
    pub(crate) fn try_grow(&mut self) -> Result<(), AllocationFailure> {
        let new_cap = match self.cap() {
            0 => MIN_CAP,
            cap => cap
                .checked_mul(GROWTH_FACTOR)
                .ok_or(AllocationFailure { bytes: usize::MAX })?,
        };

        self.arr.try_realloc(new_cap)
    }

    /// Halves the capacity if at most half of it is in use, without going below [`MIN_CAP`].
    pub(crate) fn shrink_if_sparse(&mut self) {
        let cap = self.cap();

        if cap > MIN_CAP && self.len <= cap / GROWTH_FACTOR {
            let new_cap = cmp::max(cap / GROWTH_FACTOR, MIN_CAP);

            // The existing allocation remains valid if this fails.
            if let Err(error) = self.arr.try_realloc(new_cap) {
                warn!("Vector failed to shrink from {cap} to {new_cap} slots: {error}");
            }
        }
    }

    pub(crate) const fn base_ptr(&self) -> *mut T {
        self.arr.ptr.as_ptr().cast()
    }
}

impl<T: Clone> Vector<T> {
    /// Creates a Vector with exactly `count` slots, each holding a clone of `default`.
    ///
    /// # Errors
    /// Returns [`AllocationFailure`] if the allocation fails.
    pub fn try_alloc(count: usize, default: T) -> Result<Vector<T>, AllocationFailure> {
        let mut vec = Vector {
            arr: Array::try_new_uninit(count)?,
            len: 0,
        };

        for _ in 0..count {
            // SAFETY: vec has been allocated with exactly count slots.
            unsafe { vec.push_unchecked(default.clone()) }
        }

        Ok(vec)
    }

    /// Creates a Vector with exactly `count` slots, each holding a clone of `default`.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    ///
    /// # Examples
    /// ```
    /// # use sf_lib::collections::contiguous::Vector;
    /// let vec = Vector::alloc(3, 7_u8);
    /// assert_eq!(&*vec, &[7, 7, 7]);
    /// assert_eq!(vec.cap(), 3);
    /// ```
    pub fn alloc(count: usize, default: T) -> Vector<T> {
        Vector::try_alloc(count, default).throw()
    }

    /// Returns a copy of the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<T, IndexOutOfRange> {
        self.get_ref(index).cloned()
    }

    /// Pushes a copy of every value in `values`. If the Vector needs to grow, the new capacity is
    /// the required length rounded up to a multiple of [`APPEND_GRANULARITY`], so that repeated
    /// appends reallocate less often.
    ///
    /// # Errors
    /// Returns [`AllocationFailure`] if growing fails, in which case the Vector is unchanged.
    pub fn try_append(&mut self, values: &[T]) -> Result<(), AllocationFailure> {
        let required = self.len
            .checked_add(values.len())
            .ok_or(AllocationFailure { bytes: usize::MAX })?;

        if required > self.cap() {
            let new_cap = required
                .checked_next_multiple_of(APPEND_GRANULARITY)
                .ok_or(AllocationFailure { bytes: usize::MAX })?;
            self.arr.try_realloc(new_cap)?;
        }

        for value in values {
            // SAFETY: The capacity is at least len + values.len().
            unsafe { self.push_unchecked(value.clone()) }
        }

        Ok(())
    }

    /// Pushes a copy of every value in `values`. See [`Vector::try_append`].
    ///
    /// # Panics
    /// Panics if growing the Vector fails.
    ///
    /// # Examples
    /// ```
    /// # use sf_lib::collections::contiguous::Vector;
    /// let mut vec = Vector::new();
    /// vec.append(&[1, 2, 3]);
    /// assert_eq!(vec.cap(), 8);
    /// vec.append(&[4, 5, 6, 7, 8, 9]);
    /// assert_eq!(&*vec, &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
    /// assert_eq!(vec.cap(), 16);
    /// ```
    pub fn append(&mut self, values: &[T]) {
        self.try_append(values).throw()
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Vector::new();
        vec.extend(iter);
        vec
    }
}

impl<T: Clone> From<&[T]> for Vector<T> {
    fn from(value: &[T]) -> Self {
        let mut vec = Vector::new();
        vec.append(value);
        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        self.clear();
        // self.arr only holds MaybeUninit values now, dropping it just deallocates.
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len values are initialized and within the allocation, which is
        // properly aligned (or dangling with len 0). The borrow prevents mutation meanwhile.
        unsafe { slice::from_raw_parts(self.base_ptr(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As with deref, and self is uniquely borrowed for the lifetime of the slice.
        unsafe { slice::from_raw_parts_mut(self.base_ptr(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self
    }
}

// SAFETY: Vectors uniquely own their allocation, so they can be sent whenever T can.
unsafe impl<T: Send> Send for Vector<T> {}
// SAFETY: Vector's safe API follows the borrow rules without interior mutability.
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Vector {
            arr: Array::new_uninit(self.cap()),
            len: 0,
        };

        for value in self.iter() {
            // SAFETY: vec has the same capacity as self, which holds at least len values.
            unsafe { vec.push_unchecked(value.clone()) }
        }

        vec
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &DebugSlice(self))
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "!")?;
        f.debug_list().entries(self.iter()).finish()
    }
}
