//! Rendering a BigInt as text in a power-of-two radix.

use crate::bigint::BigInt;
use crate::digit::{Digit, DIGIT_BITS};
use crate::error::{Error, ErrorCode, Result};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

const CONVERSION_CHARS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Longest string [`BigInt::to_str_radix`] will produce.
///
/// Rust allocations are limited to `isize::MAX` bytes; a value whose text
/// would not fit is reported as [`ErrorCode::ResultTooLarge`] instead.
pub const MAX_STRING_LENGTH: usize = isize::MAX as usize;

impl BigInt {
    /// Render the value as text in the given radix.
    ///
    /// Only powers of two from 2 to 32 are supported; any other radix,
    /// decimal included, renders hexadecimal instead. Digits above 9 use the
    /// lowercase letters `a-z`, and negative values get a leading `-`.
    ///
    /// ```
    /// use bigint_core::BigInt;
    ///
    /// assert_eq!(BigInt::from(255).to_str_radix(16)?, "ff");
    /// assert_eq!(BigInt::from(-8).to_str_radix(2)?, "-1000");
    /// assert_eq!(BigInt::zero().to_str_radix(16)?, "0");
    /// assert_eq!(BigInt::from(255).to_str_radix(10)?, "ff");
    /// # Ok::<(), bigint_core::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error classified as
    /// [`Category::TooLarge`](crate::Category::TooLarge) if the text would be
    /// longer than [`MAX_STRING_LENGTH`].
    pub fn to_str_radix(&self, radix: u32) -> Result<String> {
        to_str_radix_bounded(self, radix, MAX_STRING_LENGTH)
    }
}

fn to_str_radix_bounded(x: &BigInt, radix: u32, max_length: usize) -> Result<String> {
    let radix = if radix.is_power_of_two() && (2..=32).contains(&radix) {
        radix
    } else {
        tracing::debug!(radix, "unsupported radix for BigInt conversion, using 16");
        16
    };
    let bytes = render(x, x.sign(), radix, max_length)?;
    Ok(bytes.into_iter().map(char::from).collect())
}

/// Number of characters needed for a magnitude of `bit_length` bits, plus
/// one for the sign, if that fits in `max_length`.
fn char_count(
    bit_length: usize,
    bits_per_char: usize,
    sign: bool,
    max_length: usize,
) -> Option<usize> {
    let chars = bit_length / bits_per_char + usize::from(bit_length % bits_per_char != 0);
    let chars = chars.checked_add(usize::from(sign))?;
    if chars > max_length {
        return None;
    }
    Some(chars)
}

/// Render the magnitude of `x` back to front into a buffer of exactly the
/// right length, with a leading `-` if `sign` is set.
///
/// When `bits_per_char` divides the digit width every non-final digit yields
/// `DIGIT_BITS / bits_per_char` characters. Otherwise (radix 8 and 32) the
/// bits left over at the top of a digit are combined with the bottom of the
/// next one.
fn render(x: &BigInt, sign: bool, radix: u32, max_length: usize) -> Result<Vec<u8>> {
    debug_assert!(radix.is_power_of_two() && (2..=32).contains(&radix));
    let (msd, rest) = match x.digits().split_last() {
        Some(split) => split,
        None => return Ok(alloc::vec![b'0']),
    };

    let bits_per_char = radix.trailing_zeros() as usize;
    let char_mask = Digit::from(radix - 1);
    let chars = x
        .bit_length()
        .and_then(|bits| char_count(bits, bits_per_char, sign, max_length));
    let chars = match chars {
        Some(chars) => chars,
        None => {
            tracing::warn!(
                digits = x.len(),
                max_length,
                "BigInt too large to convert to a string"
            );
            return Err(Error::new(ErrorCode::ResultTooLarge));
        }
    };

    let mut buffer = alloc::vec![0u8; chars];
    let mut pos = chars;
    let mut emit = |value: Digit| {
        pos -= 1;
        buffer[pos] = CONVERSION_CHARS[(value & char_mask) as usize];
    };

    // Bits of the previous digit not yet printed, and how many there are.
    let mut carry: Digit = 0;
    let mut available_bits = 0;
    for &digit in rest {
        // First character straddles the digit boundary when bits are left
        // over from the previous digit.
        emit(carry | (digit << available_bits));
        let mut digit = digit >> (bits_per_char - available_bits);
        available_bits = DIGIT_BITS - (bits_per_char - available_bits);
        while available_bits >= bits_per_char {
            emit(digit);
            digit >>= bits_per_char;
            available_bits -= bits_per_char;
        }
        carry = digit;
    }

    // The most significant digit prints no leading zero groups.
    emit(carry | (msd << available_bits));
    let mut msd = msd >> (bits_per_char - available_bits);
    while msd != 0 {
        emit(msd);
        msd >>= bits_per_char;
    }

    if sign {
        pos -= 1;
        buffer[pos] = b'-';
    }
    debug_assert_eq!(pos, 0);
    Ok(buffer)
}

fn fmt_radix(
    x: &BigInt,
    f: &mut fmt::Formatter,
    radix: u32,
    prefix: &str,
    upper: bool,
) -> fmt::Result {
    let mut bytes =
        render(x, false, radix, MAX_STRING_LENGTH).map_err(|_| fmt::Error)?;
    if upper {
        bytes.make_ascii_uppercase();
    }
    let text = core::str::from_utf8(&bytes).map_err(|_| fmt::Error)?;
    f.pad_integral(!x.is_negative(), prefix, text)
}

impl fmt::Binary for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_radix(self, f, 2, "0b", false)
    }
}

impl fmt::Octal for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_radix(self, f, 8, "0o", false)
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_radix(self, f, 16, "0x", false)
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_radix(self, f, 16, "0x", true)
    }
}

// TESTS
// -----
