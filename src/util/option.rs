use std::hint;

pub(crate) trait OptionExtension<T> {
    /// Unwraps a [`Some`] that the caller has already proven to be present. Debug builds still
    /// check with [`unreachable!`], release builds use [`hint::unreachable_unchecked`].
    ///
    /// # Safety
    /// The caller must guarantee that self is [`Some`].
    unsafe fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    unsafe fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None if cfg!(debug_assertions) => unreachable!(),
            // SAFETY: The caller guarantees that None is impossible here.
            None => unsafe { hint::unreachable_unchecked() },
        }
    }
}
