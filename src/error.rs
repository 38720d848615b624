//! Errors reported by `RingBuffer` operations.

#[cfg(feature = "std")]
use std::error::Error;
use std::fmt;

/// Error value indicating insufficient capacity
///
/// Returned by `push` on a full buffer, in either discipline.
/// `force_push` never produces it.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd, Hash)]
pub struct OverflowError<T = ()> {
    /// The element that caused the error.
    pub element: T,
}

/// Error value indicating that there is no element to remove or inspect.
///
/// Returned by `pop` and `peek` on an empty buffer, in either discipline.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd, Hash)]
pub struct UnderflowError;

/// The two kinds of failure a `RingBuffer` operation can report.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd, Hash)]
pub enum ErrorKind {
    /// Insertion attempted on a buffer already holding `capacity` elements.
    Overflow,
    /// Removal or peek attempted on a buffer holding no elements.
    Underflow,
}

const CAPERROR: &str = "insufficient capacity";
const EMPTYERROR: &str = "buffer is empty";

impl<T> OverflowError<T> {
    /// Creates a new `OverflowError` holding the rejected element.
    #[inline]
    pub const fn new(element: T) -> Self {
        OverflowError { element }
    }

    /// Returns the rejected element.
    #[inline]
    pub fn into_inner(self) -> T {
        self.element
    }

    /// Drops the rejected element, keeping only the error.
    #[inline]
    pub fn simplify(self) -> OverflowError {
        OverflowError { element: () }
    }

    /// Always `ErrorKind::Overflow`.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Overflow
    }
}

impl UnderflowError {
    /// Always `ErrorKind::Underflow`.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Underflow
    }
}

impl ErrorKind {
    fn as_str(&self) -> &'static str {
        match *self {
            ErrorKind::Overflow => CAPERROR,
            ErrorKind::Underflow => EMPTYERROR,
        }
    }
}

impl<T> From<OverflowError<T>> for ErrorKind {
    fn from(_: OverflowError<T>) -> Self {
        ErrorKind::Overflow
    }
}

impl From<UnderflowError> for ErrorKind {
    fn from(_: UnderflowError) -> Self {
        ErrorKind::Underflow
    }
}

#[cfg(feature = "std")]
impl<T> Error for OverflowError<T> {}

#[cfg(feature = "std")]
impl Error for UnderflowError {}

#[cfg(feature = "std")]
impl Error for ErrorKind {}

impl<T> fmt::Display for OverflowError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", CAPERROR)
    }
}

impl<T> fmt::Debug for OverflowError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", "OverflowError", CAPERROR)
    }
}

impl fmt::Display for UnderflowError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", EMPTYERROR)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
