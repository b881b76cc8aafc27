//! When parsing a decimal integer literal goes wrong.

use core::fmt::{self, Debug, Display};
use core::result;

/// This type represents all possible errors that can occur when constructing
/// a [`BigNum`](crate::BigNum) from a decimal string.
#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    index: usize,
}

/// Alias for a `Result` with the error type `bignum::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Zero-based byte offset at which the error was detected.
    ///
    /// For errors that concern the literal as a whole rather than a single
    /// byte, such as an empty input, the index is 0.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.code
    }

    #[cold]
    pub(crate) fn new(code: ErrorCode, index: usize) -> Self {
        Error { code, index }
    }
}

/// Categorizes the cause of a literal [`Error`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    /// The literal was empty.
    Empty,

    /// The literal was a single `-` with no digits after it.
    LoneSign,

    /// A byte outside `0`-`9` appeared where a digit was required.
    InvalidDigit(u8),
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::Empty => f.write_str("cannot parse integer from empty string"),
            ErrorCode::LoneSign => f.write_str("expected digits after the sign"),
            ErrorCode::InvalidDigit(byte) => {
                write!(f, "invalid digit `{}`", byte.escape_ascii())
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.code {
            ErrorCode::InvalidDigit(_) => {
                write!(f, "{} at index {}", self.code, self.index)
            }
            _ => Display::fmt(&self.code, f),
        }
    }
}

// Condensed debug representation, since this is what unwrap() prints.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error({:?}, index: {})", self.code, self.index)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
