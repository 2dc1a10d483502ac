//! When a BigInt operation cannot produce a value.

use alloc::boxed::Box;
use core::fmt::{self, Debug, Display};
use core::result;
#[cfg(feature = "std")]
use std::error;

/// This type represents all possible errors that can occur when operating on
/// a [`BigInt`](crate::BigInt).
///
/// Plain arithmetic never fails. Errors come from operations that are not
/// supported yet, from rendering a value whose text would exceed
/// [`MAX_STRING_LENGTH`](crate::MAX_STRING_LENGTH), and from building a
/// value out of digits that are not in canonical form.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible.
    /// Every arithmetic entry point that can fail returns `Result<T, Error>`.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `bigint_core::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Specifies the cause of this error.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Unsupported` - the operation is not implemented
    /// - `Category::TooLarge` - the result cannot be represented as text
    /// - `Category::Data` - input digits that are not a canonical BigInt
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::Unsupported(_) => Category::Unsupported,
            ErrorCode::ResultTooLarge => Category::TooLarge,
            ErrorCode::LeadingZeroDigit | ErrorCode::NegativeZero => Category::Data,
        }
    }

    /// Returns true if this error was caused by calling an operation that is
    /// not implemented in this version.
    pub fn is_unsupported(&self) -> bool {
        self.classify() == Category::Unsupported
    }

    /// Returns true if this error was caused by a result too large to be
    /// rendered.
    pub fn is_too_large(&self) -> bool {
        self.classify() == Category::TooLarge
    }

    /// Returns true if this error was caused by input digits that do not
    /// describe a canonical BigInt.
    pub fn is_data(&self) -> bool {
        self.classify() == Category::Data
    }

    #[cold]
    pub(crate) fn unsupported(operation: Operation) -> Self {
        tracing::warn!(operation = %operation, "unsupported BigInt operation");
        Error::new(ErrorCode::Unsupported(operation))
    }

    #[cold]
    pub(crate) fn new(code: ErrorCode) -> Self {
        Error {
            err: Box::new(ErrorImpl { code }),
        }
    }
}

/// Categorizes the cause of a `bigint_core::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The operation is a deliberate gap in this version: it exists so that
    /// callers can route to it, but it never produces a value.
    Unsupported,

    /// The result is well-defined but too large to materialize.
    TooLarge,

    /// Input digits did not describe a canonical BigInt.
    Data,
}

#[cfg(feature = "std")]
#[allow(clippy::fallible_impl_from)]
impl From<Error> for std::io::Error {
    /// Convert a `bigint_core::Error` into an `io::Error`.
    ///
    /// Unsupported operations become `Unsupported` IO errors, oversized
    /// results `OutOfMemory`, and malformed input `InvalidData`.
    fn from(err: Error) -> Self {
        let kind = match err.classify() {
            Category::Unsupported => std::io::ErrorKind::Unsupported,
            Category::TooLarge => std::io::ErrorKind::OutOfMemory,
            Category::Data => std::io::ErrorKind::InvalidData,
        };
        std::io::Error::new(kind, err)
    }
}

struct ErrorImpl {
    code: ErrorCode,
}

/// This type describes all possible errors that can occur when operating on
/// a BigInt.
#[derive(Clone, PartialEq, Eq)]
pub enum ErrorCode {
    /// The named operation is not implemented in this version.
    Unsupported(Operation),

    /// The textual representation would be longer than the maximum string
    /// length.
    ResultTooLarge,

    /// A magnitude whose most-significant chunk is zero.
    LeadingZeroDigit,

    /// A zero magnitude carrying a negative sign.
    NegativeZero,
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::Unsupported(operation) => {
                write!(f, "BigInt operation `{}` is not supported", operation)
            }
            ErrorCode::ResultTooLarge => f.write_str("BigInt too large to convert to a string"),
            ErrorCode::LeadingZeroDigit => f.write_str("BigInt digits have a leading zero"),
            ErrorCode::NegativeZero => f.write_str("BigInt zero cannot be negative"),
        }
    }
}

impl Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::Unsupported(operation) => write!(f, "Unsupported({:?})", operation),
            ErrorCode::ResultTooLarge => f.write_str("ResultTooLarge"),
            ErrorCode::LeadingZeroDigit => f.write_str("LeadingZeroDigit"),
            ErrorCode::NegativeZero => f.write_str("NegativeZero"),
        }
    }
}

/// The BigInt operations that are part of the API surface but not
/// implemented in this version.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Operation {
    /// `~x`
    BitwiseNot,
    /// `x ** y`
    Exponentiate,
    /// `x / y`
    Divide,
    /// `x % y`
    Remainder,
    /// `x << y`
    LeftShift,
    /// `x >> y`
    SignedRightShift,
    /// `x >>> y`
    UnsignedRightShift,
    /// `x < y`
    LessThan,
    /// `x & y`
    BitwiseAnd,
    /// `x ^ y`
    BitwiseXor,
    /// `x | y`
    BitwiseOr,
}

impl Operation {
    /// The operation's name, as used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Operation::BitwiseNot => "BitwiseNot",
            Operation::Exponentiate => "Exponentiate",
            Operation::Divide => "Divide",
            Operation::Remainder => "Remainder",
            Operation::LeftShift => "LeftShift",
            Operation::SignedRightShift => "SignedRightShift",
            Operation::UnsignedRightShift => "UnsignedRightShift",
            Operation::LessThan => "LessThan",
            Operation::BitwiseAnd => "BitwiseAnd",
            Operation::BitwiseXor => "BitwiseXor",
            Operation::BitwiseOr => "BitwiseOr",
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.err.code, f)
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error({:?})", self.err.code)
    }
}
