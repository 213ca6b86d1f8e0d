use std::fmt::{self, Debug, Formatter};

/// Writes the contained string verbatim when debug formatted, used for placeholder entries.
pub struct DebugRaw(pub String);

impl Debug for DebugRaw {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Debug formats a slice as a list, so that it can be used as a single struct field.
pub struct DebugSlice<'a, T>(pub &'a [T]);

impl<T: Debug> Debug for DebugSlice<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}
