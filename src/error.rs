//! Error types for encoding operations.

use core::fmt;

/// A fatal encoding error: a code point had no representation in the
/// target encoding while [`ErrorMode::Fatal`](crate::ErrorMode::Fatal)
/// was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FatalEncodingError {
    code_point: char,
}

impl FatalEncodingError {
    #[inline]
    pub(crate) const fn new(code_point: char) -> Self {
        Self { code_point }
    }

    /// Returns the code point that could not be represented.
    #[inline]
    pub const fn code_point(&self) -> char {
        self.code_point
    }
}

impl fmt::Display for FatalEncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fatal encoding error: U+{:04X} has no representation",
            self.code_point as u32
        )
    }
}

impl core::error::Error for FatalEncodingError {}

/// An error returned by [`Encoder::process`](crate::Encoder::process).
///
/// `E` is whatever error type the byte sink reports; a sink failure is
/// propagated verbatim, never wrapped or retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError<E> {
    /// The error policy aborted on an unmappable code point.
    Fatal(FatalEncodingError),
    /// The sink refused a byte. Encoding stopped at that byte boundary.
    Sink(E),
}

impl<E> From<FatalEncodingError> for EncodeError<E> {
    #[inline]
    fn from(error: FatalEncodingError) -> Self {
        EncodeError::Fatal(error)
    }
}

impl<E: fmt::Display> fmt::Display for EncodeError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::Fatal(e) => fmt::Display::fmt(e, f),
            EncodeError::Sink(e) => write!(f, "byte sink error: {}", e),
        }
    }
}

impl<E: core::error::Error + 'static> core::error::Error for EncodeError<E> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            EncodeError::Fatal(e) => Some(e),
            EncodeError::Sink(e) => Some(e),
        }
    }
}
