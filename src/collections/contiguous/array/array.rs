use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use log::trace;

use crate::collections::error::AllocationFailure;
use crate::util::fmt::DebugSlice;
use crate::util::result::ResultExtension;

/// A fixed-size, heap allocated block of `T`, sized at runtime. Similar to a
/// [`Box<[T]>`](Box<T>), except that the size can be changed with an explicit reallocation and
/// allocation failures are reported rather than aborting.
///
/// An Array with size 0 never holds an allocation. Arrays of zero-sized types never allocate.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `try_realloc` | `O(n)`*, `O(1)` |
///
/// \* Depending on whether the allocator can resize in place.
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Returns the size of the Array.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Creates a new Array with size 0, without allocating.
    ///
    /// # Examples
    /// ```
    /// # use sf_lib::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// assert_eq!(&*arr, &[]);
    /// ```
    pub const fn new() -> Array<T> {
        Array {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`, all values
    /// uninitialized.
    ///
    /// # Errors
    /// Returns [`AllocationFailure`] if the layout would exceed [`isize::MAX`] bytes or the
    /// allocator returns null.
    pub fn try_new_uninit(size: usize) -> Result<Array<MaybeUninit<T>>, AllocationFailure> {
        let layout = Array::<MaybeUninit<T>>::make_layout(size)?;
        let ptr = Array::<MaybeUninit<T>>::make_ptr(layout)?;

        Ok(Array {
            ptr,
            size,
            _phantom: PhantomData,
        })
    }

    /// Infallible version of [`Array::try_new_uninit`].
    ///
    /// # Panics
    /// Panics if the allocation fails.
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        Array::try_new_uninit(size).throw()
    }

    /// Decomposes an Array into its pointer and size without dropping or deallocating anything.
    /// The parts can be turned back into an Array with [`Array::from_parts`].
    pub const fn into_parts(self) -> (NonNull<T>, usize) {
        let ret = (self.ptr, self.size);
        mem::forget(self);
        ret
    }

    /// Creates an Array from its raw parts.
    ///
    /// # Safety
    /// `ptr` must have been allocated by the global allocator with the layout of `[T; size]` (or
    /// be dangling if that layout has size 0) and must point to `size` initialized values of `T`.
    pub const unsafe fn from_parts(ptr: NonNull<T>, size: usize) -> Array<T> {
        Array {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Interprets self as an `Array<MaybeUninit<T>>`, so that it can be reallocated. Values are
    /// not dropped by the returned Array.
    pub fn forget_init(self) -> Array<MaybeUninit<T>> {
        let (ptr, size) = self.into_parts();
        // SAFETY: MaybeUninit<T> has the same layout as T and every value is trivially a valid
        // MaybeUninit<T>.
        unsafe { Array::from_parts(ptr.cast(), size) }
    }

    /// Creates the [`Layout`] of `size` elements of `T`.
    pub(crate) fn make_layout(size: usize) -> Result<Layout, AllocationFailure> {
        Layout::array::<T>(size).map_err(|_| AllocationFailure {
            bytes: size.saturating_mul(size_of::<T>()),
        })
    }

    /// Allocates memory for the provided [`Layout`], or returns a dangling pointer if the layout
    /// has size 0.
    pub(crate) fn make_ptr(layout: Layout) -> Result<NonNull<T>, AllocationFailure> {
        if layout.size() == 0 {
            Ok(NonNull::dangling())
        } else {
            // SAFETY: Zero-sized layouts have been guarded against.
            let raw_ptr: *mut T = unsafe { alloc::alloc(layout).cast() };
            NonNull::new(raw_ptr).ok_or(AllocationFailure { bytes: layout.size() })
        }
    }
}

impl<T: Default> Array<T> {
    /// Creates a new Array holding `count` default values of `T`.
    ///
    /// # Panics
    /// Panics if the allocation fails.
    pub fn repeat_default(count: usize) -> Array<T> {
        let arr = Array::<T>::new_uninit(count);

        for i in 0..count {
            // SAFETY: i is within the allocated range of the Array.
            unsafe { arr.ptr.add(i).write(MaybeUninit::new(T::default())) }
        }

        // SAFETY: Every value has been initialized.
        unsafe { arr.assume_init() }
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Assumes that every value of the Array is initialized.
    ///
    /// # Safety
    /// Every one of the `size` values must be initialized.
    pub unsafe fn assume_init(self) -> Array<T> {
        let (ptr, size) = self.into_parts();
        // SAFETY: The caller guarantees that all values are initialized, and the layouts are equal.
        unsafe { Array::from_parts(ptr.cast(), size) }
    }

    /// Reallocates the Array to hold `new_size` values. New values are uninitialized, values past
    /// `new_size` are discarded without being dropped.
    ///
    /// # Errors
    /// Returns [`AllocationFailure`] if the new layout is invalid or the allocator fails. In that
    /// case the Array keeps its previous allocation and size.
    pub fn try_realloc(&mut self, new_size: usize) -> Result<(), AllocationFailure> {
        let old_size = self.size;

        if old_size == new_size {
            return Ok(());
        }

        if size_of::<T>() == 0 {
            // Nothing is ever allocated for zero-sized types, the dangling pointer stays valid.
            self.size = new_size;
            return Ok(());
        }

        let new_layout = Self::make_layout(new_size)?;

        let new_ptr = match (old_size, new_size) {
            (0, _) => Self::make_ptr(new_layout)?,
            (_, 0) => {
                let old_layout = Self::make_layout(old_size)?;
                // SAFETY: ptr was allocated by the global allocator with old_layout, which has a
                // non-zero size.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout) }
                NonNull::dangling()
            },
            (_, _) => {
                let old_layout = Self::make_layout(old_size)?;
                // SAFETY: ptr was allocated by the global allocator with old_layout. The new size
                // is non-zero and no greater than isize::MAX, as checked by make_layout.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()).cast()
                };
                NonNull::new(raw_ptr).ok_or(AllocationFailure { bytes: new_layout.size() })?
            },
        };

        trace!("Array reallocated from {old_size} to {new_size} slots");

        self.ptr = new_ptr;
        self.size = new_size;
        Ok(())
    }

    /// Infallible version of [`Array::try_realloc`].
    ///
    /// # Panics
    /// Panics if the reallocation fails.
    pub fn realloc(&mut self, new_size: usize) {
        self.try_realloc(new_size).throw()
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // SAFETY: All size values are initialized, and are never accessed again.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size));
        }

        if let Ok(layout) = Self::make_layout(self.size)
            && layout.size() != 0
        {
            // SAFETY: ptr was allocated by the global allocator with this same layout. Zero-sized
            // layouts are never allocated, so they are never deallocated.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: ptr is valid and properly aligned for size initialized values (or dangling with
        // size 0). The borrow checker prevents mutation for the lifetime of the slice.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As with deref, and self is uniquely borrowed for the lifetime of the slice.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

// SAFETY: Arrays uniquely own their allocation, so they can be sent whenever T can.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API follows the borrow rules without interior mutability.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &DebugSlice(self))
            .field("size", &self.size)
            .finish()
    }
}
