use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter, Write};
use std::hash::{Hash, Hasher};
use std::str::{self as core_str, Utf8Error};

use crate::collections::contiguous::Vector;

/// A string of bytes with an explicit length, tagged with where those bytes live.
///
/// - [`Literal`](Str::Literal) strings point to static data and are never copied or freed.
/// - [`Borrowed`](Str::Borrowed) strings point to data owned by the caller for `'a`.
/// - [`Owned`](Str::Owned) strings hold their own [`Vector`], released when the Str is dropped.
///
/// The contents don't have to be valid UTF-8. Equality, ordering and hashing only consider the
/// bytes, regardless of the variant, so a Str can be used as a key and looked up with a Str of any
/// other variant or lifetime. Hashing writes exactly the bytes, without a length prefix or
/// terminator, so hashing with [`Fnv1aHasher`](crate::collections::hash::Fnv1aHasher) gives the
/// same result as [`fnv1a`](crate::collections::hash::fnv1a). As a consequence, composite keys
/// holding several Strs (such as `(Str, Str)`) hash `("ab", "c")` and `("a", "bc")` identically.
/// Equality still tells them apart, but such keys collide into the same chain.
#[derive(Clone)]
pub enum Str<'a> {
    /// Static bytes, usually from a string literal.
    Literal(&'static [u8]),
    /// Bytes borrowed for `'a`.
    Borrowed(&'a [u8]),
    /// Bytes owned by the Str.
    Owned(Vector<u8>),
}

impl Str<'static> {
    /// Creates an empty Str, without allocating.
    pub const fn empty() -> Str<'static> {
        Str::Literal(&[])
    }

    /// Creates a Str referencing a string literal.
    ///
    /// # Examples
    /// ```
    /// # use sf_lib::str::Str;
    /// let hello = Str::lit("hello");
    /// assert_eq!(hello.len(), 5);
    /// assert!(hello.is_literal());
    /// ```
    pub const fn lit(literal: &'static str) -> Str<'static> {
        Str::Literal(literal.as_bytes())
    }

    /// Creates a Str which takes ownership of the bytes of `string`.
    pub fn own(string: String) -> Str<'static> {
        Str::Owned(Vector::from(string.as_bytes()))
    }

    /// Creates an owned Str from format arguments, usually provided by [`format_args!`].
    ///
    /// # Examples
    /// ```
    /// # use sf_lib::str::Str;
    /// let twelve = Str::format(format_args!("twelve{{{}}}", 12));
    /// assert_eq!(twelve, Str::lit("twelve{12}"));
    /// ```
    pub fn format(args: fmt::Arguments<'_>) -> Str<'static> {
        let mut bytes = Vector::new();
        match args.as_str() {
            Some(text) => bytes.append(text.as_bytes()),
            None => bytes.append(fmt::format(args).as_bytes()),
        }
        Str::Owned(bytes)
    }
}

impl<'a> Str<'a> {
    /// Creates a Str borrowing the provided string.
    pub const fn from_ref(string: &'a str) -> Str<'a> {
        Str::Borrowed(string.as_bytes())
    }

    /// Creates a Str borrowing the provided bytes, which don't need to be valid UTF-8.
    pub const fn from_bytes(bytes: &'a [u8]) -> Str<'a> {
        Str::Borrowed(bytes)
    }

    /// Returns the contents of the Str.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Str::Literal(bytes) => *bytes,
            Str::Borrowed(bytes) => *bytes,
            Str::Owned(vec) => &vec[..],
        }
    }

    /// Returns the length of the Str in bytes.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Returns true if the Str has a length of 0.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the Str references static data.
    pub const fn is_literal(&self) -> bool {
        matches!(self, Str::Literal(_))
    }

    /// Returns true if the Str owns its bytes.
    pub const fn is_owned(&self) -> bool {
        matches!(self, Str::Owned(_))
    }

    /// Returns the contents as a [`str`], if they are valid UTF-8.
    ///
    /// # Errors
    /// Returns [`Utf8Error`] if the contents aren't valid UTF-8.
    pub fn to_str(&self) -> Result<&str, Utf8Error> {
        core_str::from_utf8(self.as_bytes())
    }

    /// Copies the contents into a new, owned Str.
    pub fn dup(&self) -> Str<'static> {
        Str::Owned(Vector::from(self.as_bytes()))
    }

    /// Converts self into a Str which doesn't borrow, copying only if the bytes are borrowed.
    pub fn into_owned(self) -> Str<'static> {
        match self {
            Str::Literal(bytes) => Str::Literal(bytes),
            Str::Borrowed(bytes) => Str::Owned(Vector::from(bytes)),
            Str::Owned(vec) => Str::Owned(vec),
        }
    }

    /// Creates a new, owned Str holding the contents of self followed by the contents of `other`.
    ///
    /// # Examples
    /// ```
    /// # use sf_lib::str::Str;
    /// let joined = Str::lit("foo").join(&Str::from_ref("bar"));
    /// assert_eq!(joined, Str::lit("foobar"));
    /// assert!(joined.is_owned());
    /// ```
    pub fn join(&self, other: &Str<'_>) -> Str<'static> {
        let mut bytes = Vector::new();
        bytes.append(self.as_bytes());
        bytes.append(other.as_bytes());
        Str::Owned(bytes)
    }
}

impl Default for Str<'_> {
    fn default() -> Self {
        Str::empty()
    }
}

impl<'a> From<&'a str> for Str<'a> {
    fn from(value: &'a str) -> Self {
        Str::from_ref(value)
    }
}

impl From<String> for Str<'static> {
    fn from(value: String) -> Self {
        Str::own(value)
    }
}

impl AsRef<[u8]> for Str<'_> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<'b> PartialEq<Str<'b>> for Str<'_> {
    fn eq(&self, other: &Str<'b>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Str<'_> {}

impl<'b> PartialOrd<Str<'b>> for Str<'_> {
    fn partial_cmp(&self, other: &Str<'b>) -> Option<Ordering> {
        Some(self.as_bytes().cmp(other.as_bytes()))
    }
}

impl Ord for Str<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl Hash for Str<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write(self.as_bytes());
    }
}

impl Display for Str<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for chunk in self.as_bytes().utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_char(char::REPLACEMENT_CHARACTER)?;
            }
        }
        Ok(())
    }
}

impl Debug for Str<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let variant = match self {
            Str::Literal(_) => "Literal",
            Str::Borrowed(_) => "Borrowed",
            Str::Owned(_) => "Owned",
        };

        f.debug_tuple(variant)
            .field(&String::from_utf8_lossy(self.as_bytes()))
            .finish()
    }
}
