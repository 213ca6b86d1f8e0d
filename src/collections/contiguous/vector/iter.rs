use std::iter::FusedIterator;
use std::ptr;

use super::Vector;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            vec: self,
            front: 0,
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Vector<T> {
    type Item = &'a mut T;

    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A type for owned iteration over a [`Vector`]. See [`Vector::into_iter`].
///
/// Values are moved out from both ends, the values still held when the iterator is dropped are
/// dropped along with it.
pub struct IntoIter<T> {
    // Values in front..vec.len are still initialized.
    vec: Vector<T>,
    front: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front < self.vec.len {
            // SAFETY: front is within the initialized range. Incrementing it afterwards means that
            // the value is effectively moved out of the Vector.
            let value = unsafe { self.vec.base_ptr().add(self.front).read() };
            self.front += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.vec.len - self.front;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front < self.vec.len {
            self.vec.len -= 1;
            // SAFETY: The newly decremented len is within the initialized range and is no longer
            // considered part of the Vector.
            Some(unsafe { self.vec.base_ptr().add(self.vec.len).read() })
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = self.vec.len - self.front;
        // The Vector's own Drop must not see the values that have been moved out.
        self.vec.len = 0;
        // SAFETY: The values in front..front + remaining are initialized and owned by self.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.vec.base_ptr().add(self.front),
                remaining,
            ));
        }
    }
}
