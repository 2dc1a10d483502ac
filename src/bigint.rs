//! The canonical, variable-length signed integer type.

use crate::digit::{Digit, DIGIT_BITS};
use crate::error::{Error, ErrorCode, Result};
use alloc::vec::Vec;
use core::fmt::{self, Debug};

/// An arbitrary-precision signed integer.
///
/// The magnitude is stored as a little-endian sequence of [`Digit`]s, so for
/// `digits == [0, 1, 2, 3]`, `3` is the most significant digit and `0` the
/// least significant. The sign is kept out-of-band.
///
/// Every `BigInt` observable outside this crate is canonical:
///
/// - the most-significant digit is nonzero, and
/// - zero has no digits and is never negative.
///
/// Equality is therefore exact structural equality and no operation needs to
/// normalize its inputs.
#[derive(Clone, Hash)]
pub struct BigInt {
    /// True if the value is negative.
    sign: bool,
    /// Magnitude, least significant digit first.
    digits: Vec<Digit>,
}

impl BigInt {
    /// The integer 0.
    ///
    /// ```
    /// use bigint_core::BigInt;
    ///
    /// let zero = BigInt::zero();
    /// assert!(zero.is_zero());
    /// assert_eq!(zero.len(), 0);
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        BigInt {
            sign: false,
            digits: Vec::new(),
        }
    }

    /// Allocate a value of `length` digits, all zero.
    ///
    /// The result is not canonical until it is trimmed.
    pub(crate) fn new_zeroed(length: usize) -> Self {
        BigInt {
            sign: false,
            digits: alloc::vec![0; length],
        }
    }

    /// Reserve storage for a value of exactly `length` digits without
    /// writing any of them.
    ///
    /// Digits are appended with [`push_digit`](Self::push_digit); there is no
    /// way to read a digit that has not been written yet.
    pub(crate) fn new_raw(length: usize) -> Self {
        BigInt {
            sign: false,
            digits: Vec::with_capacity(length),
        }
    }

    /// Append the next more-significant digit to a raw value.
    #[inline]
    pub(crate) fn push_digit(&mut self, digit: Digit) {
        debug_assert!(self.digits.len() < self.digits.capacity());
        self.digits.push(digit);
    }

    #[inline]
    pub(crate) fn digits_mut(&mut self) -> &mut [Digit] {
        &mut self.digits
    }

    #[inline]
    pub(crate) fn set_sign(&mut self, sign: bool) {
        self.sign = sign;
    }

    /// Drop most-significant zero digits and canonicalize negative zero.
    ///
    /// Every value built by an arithmetic operation goes through this before
    /// it is returned.
    pub(crate) fn right_trim(&mut self) {
        let new_length = self
            .digits
            .iter()
            .rposition(|&digit| digit != 0)
            .map_or(0, |msd| msd + 1);
        self.digits.truncate(new_length);
        if new_length == 0 {
            self.sign = false;
        }
    }

    /// Build a value from little-endian 32-bit chunks, independent of the
    /// platform's digit width.
    ///
    /// Most-significant zero chunks are allowed and trimmed, and a zero
    /// magnitude is never negative.
    ///
    /// ```
    /// use bigint_core::BigInt;
    ///
    /// let x = BigInt::from_u32_digits(true, &[0, 1]);
    /// assert_eq!(x, BigInt::from(-(1i64 << 32)));
    ///
    /// assert_eq!(BigInt::from_u32_digits(true, &[0, 0]), BigInt::zero());
    /// ```
    pub fn from_u32_digits(negative: bool, digits: &[u32]) -> Self {
        let mut value = BigInt::new_raw(digits.len());
        #[cfg(digit_width_32)]
        value.digits.extend_from_slice(digits);
        #[cfg(digit_width_64)]
        for pair in digits.chunks(2) {
            let low = Digit::from(pair[0]);
            let high = pair.get(1).map_or(0, |&high| Digit::from(high));
            value.push_digit((high << 32) | low);
        }
        value.sign = negative;
        value.right_trim();
        value
    }

    /// Like [`from_u32_digits`](Self::from_u32_digits), but refuses input
    /// that is not already canonical: a most-significant zero chunk, or a
    /// negative sign on an empty magnitude.
    ///
    /// ```
    /// use bigint_core::{BigInt, Category};
    ///
    /// assert_eq!(BigInt::try_from_u32_digits(false, &[1, 2])?.to_u32_digits(), [1, 2]);
    ///
    /// let err = BigInt::try_from_u32_digits(false, &[1, 0]).unwrap_err();
    /// assert_eq!(err.classify(), Category::Data);
    /// # Ok::<(), bigint_core::Error>(())
    /// ```
    pub fn try_from_u32_digits(negative: bool, digits: &[u32]) -> Result<Self> {
        match digits.last() {
            Some(0) => Err(Error::new(ErrorCode::LeadingZeroDigit)),
            None if negative => Err(Error::new(ErrorCode::NegativeZero)),
            _ => Ok(BigInt::from_u32_digits(negative, digits)),
        }
    }

    /// The magnitude as minimal little-endian 32-bit chunks: the last chunk
    /// is nonzero, and zero yields no chunks.
    ///
    /// ```
    /// use bigint_core::BigInt;
    ///
    /// assert_eq!(BigInt::from(-(1i64 << 32)).to_u32_digits(), [0, 1]);
    /// assert!(BigInt::zero().to_u32_digits().is_empty());
    /// ```
    pub fn to_u32_digits(&self) -> Vec<u32> {
        #[cfg(digit_width_32)]
        let chunks = self.digits.clone();
        #[cfg(digit_width_64)]
        let chunks = {
            let mut chunks: Vec<u32> = self
                .digits
                .iter()
                .flat_map(|&digit| [digit as u32, (digit >> 32) as u32])
                .collect();
            if chunks.last() == Some(&0) {
                chunks.pop();
            }
            chunks
        };
        chunks
    }

    /// Returns true if the value is 0.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Returns true if the value is strictly less than 0.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign
    }

    /// The sign bit: true means negative. Zero always reports false.
    #[inline]
    pub fn sign(&self) -> bool {
        self.sign
    }

    /// Number of digits in the magnitude. Zero has length 0.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// The magnitude, least significant digit first.
    #[inline]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Number of significant bits in the magnitude, or `None` if that count
    /// does not fit in a `usize`.
    pub(crate) fn bit_length(&self) -> Option<usize> {
        match self.digits.last() {
            None => Some(0),
            Some(msd) => {
                let msd_bits = DIGIT_BITS - msd.leading_zeros() as usize;
                DIGIT_BITS
                    .checked_mul(self.digits.len() - 1)?
                    .checked_add(msd_bits)
            }
        }
    }

    fn from_magnitude(negative: bool, mut magnitude: u128) -> Self {
        let mut value = BigInt::new_raw(128 / DIGIT_BITS);
        while magnitude != 0 {
            value.push_digit(magnitude as Digit);
            magnitude >>= DIGIT_BITS;
        }
        value.sign = negative && !value.is_zero();
        value
    }
}

impl Default for BigInt {
    #[inline]
    fn default() -> Self {
        BigInt::zero()
    }
}

macro_rules! impl_from_unsigned {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for BigInt {
                #[inline]
                fn from(n: $ty) -> Self {
                    BigInt::from_magnitude(false, n as u128)
                }
            }
        )*
    };
}

macro_rules! impl_from_signed {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for BigInt {
                #[inline]
                fn from(n: $ty) -> Self {
                    BigInt::from_magnitude(n < 0, (n as i128).unsigned_abs())
                }
            }
        )*
    };
}

impl_from_unsigned!(u8 u16 u32 u64 u128 usize);
impl_from_signed!(i8 i16 i32 i64 i128 isize);

struct HexDigits<'a>(&'a [Digit]);

impl Debug for HexDigits<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter
            .debug_list()
            .entries(self.0.iter().map(|digit| HexDigit(*digit)))
            .finish()
    }
}

struct HexDigit(Digit);

impl Debug for HexDigit {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{:#x}", self.0)
    }
}

impl Debug for BigInt {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter
            .debug_struct("BigInt")
            .field("length", &self.digits.len())
            .field("sign", &self.sign)
            .field("digits", &HexDigits(&self.digits))
            .finish()
    }
}

// TESTS
// -----
