//! Word-level building blocks for arbitrary-precision arithmetic.
//!
//! Every primitive here reports its overflow (carry, borrow or high word) as
//! part of its return value, so the magnitude engine can chain any number of
//! digits without re-deriving it.

// ALIASES
// -------

//  Type for a single digit of the big integer.
//
//  A digit is analogous to a digit in base10, except it stores a whole
//  32-bit or 64-bit machine word. `build.rs` picks 64-bit digits on targets
//  that can produce the high half of a 64x64 product cheaply.

// 32-BIT DIGIT
#[cfg(digit_width_32)]
/// One machine word of a [`BigInt`](crate::BigInt) magnitude.
pub type Digit = u32;

#[cfg(digit_width_32)]
#[cfg_attr(feature = "portable_mul", allow(dead_code))]
type TwoDigit = u64;

// 64-BIT DIGIT
#[cfg(digit_width_64)]
/// One machine word of a [`BigInt`](crate::BigInt) magnitude.
pub type Digit = u64;

#[cfg(digit_width_64)]
#[cfg_attr(feature = "portable_mul", allow(dead_code))]
type TwoDigit = u128;

/// Width of a [`Digit`] in bits.
pub const DIGIT_BITS: usize = Digit::BITS as usize;

#[cfg(any(test, feature = "portable_mul"))]
const HALF_DIGIT_BITS: u32 = Digit::BITS / 2;

#[cfg(any(test, feature = "portable_mul"))]
const HALF_DIGIT_MASK: Digit = (1 << HALF_DIGIT_BITS) - 1;

// ADDITION

/// Add two digits, returning the wrapped sum and a carry of 0 or 1.
///
/// Carries of successive calls are meant to be summed by the caller, which
/// is how a digit absorbs both its partner and an incoming carry.
#[inline]
pub(crate) fn digit_add(a: Digit, b: Digit) -> (Digit, Digit) {
    let (sum, overflow) = a.overflowing_add(b);
    (sum, Digit::from(overflow))
}

// SUBTRACTION

/// Subtract two digits, returning the wrapped difference and a borrow of 0
/// or 1.
#[inline]
pub(crate) fn digit_sub(a: Digit, b: Digit) -> (Digit, Digit) {
    let (difference, overflow) = a.overflowing_sub(b);
    (difference, Digit::from(overflow))
}

// MULTIPLICATION

/// Multiply two digits into a double-width product.
///
/// Returns the (low, high) components.
#[inline]
#[cfg(not(feature = "portable_mul"))]
pub(crate) fn digit_mul(a: Digit, b: Digit) -> (Digit, Digit) {
    digit_mul_wide(a, b)
}

/// Multiply two digits into a double-width product.
///
/// Returns the (low, high) components.
#[inline]
#[cfg(feature = "portable_mul")]
pub(crate) fn digit_mul(a: Digit, b: Digit) -> (Digit, Digit) {
    digit_mul_halves(a, b)
}

#[inline]
#[cfg_attr(feature = "portable_mul", allow(dead_code))]
fn digit_mul_wide(a: Digit, b: Digit) -> (Digit, Digit) {
    // Cannot overflow: (2^W - 1)^2 < 2^(2W).
    let product = TwoDigit::from(a) * TwoDigit::from(b);
    (product as Digit, (product >> DIGIT_BITS) as Digit)
}

/// Schoolbook 2x2 multiplication in half-digit chunks.
///
/// For inputs `[AH AL] * [BH BL]` the result is
///
/// ```text
///            [AL*BL]  // r_low
///    +    [AL*BH]     // r_mid1
///    +    [AH*BL]     // r_mid2
///    + [AH*BH]        // r_high
///    = [R4 R3 R2 R1]  // high = [R4 R3], low = [R2 R1]
/// ```
///
/// The low halves of the middle products land in the upper half of the low
/// word and may carry into the high word; each of those carries is folded in
/// exactly once.
#[inline]
#[cfg(any(test, feature = "portable_mul"))]
fn digit_mul_halves(a: Digit, b: Digit) -> (Digit, Digit) {
    let a_low = a & HALF_DIGIT_MASK;
    let a_high = a >> HALF_DIGIT_BITS;
    let b_low = b & HALF_DIGIT_MASK;
    let b_high = b >> HALF_DIGIT_BITS;

    let r_low = a_low * b_low;
    let r_mid1 = a_low * b_high;
    let r_mid2 = a_high * b_low;
    let r_high = a_high * b_high;

    let (low, carry1) = digit_add(r_low, r_mid1 << HALF_DIGIT_BITS);
    let (low, carry2) = digit_add(low, r_mid2 << HALF_DIGIT_BITS);
    let high = (r_mid1 >> HALF_DIGIT_BITS)
        + (r_mid2 >> HALF_DIGIT_BITS)
        + r_high
        + carry1
        + carry2;
    (low, high)
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: Digit = Digit::MAX;
    const HALF: Digit = 1 << HALF_DIGIT_BITS;

    #[test]
    fn digit_add_test() {
        assert_eq!(digit_add(5, 3), (8, 0));
        assert_eq!(digit_add(MAX, 0), (MAX, 0));
        assert_eq!(digit_add(MAX, 1), (0, 1));
        assert_eq!(digit_add(MAX, MAX), (MAX - 1, 1));

        // Carries from chained additions accumulate.
        let (sum, c1) = digit_add(MAX, MAX);
        let (sum, c2) = digit_add(sum, 1);
        assert_eq!((sum, c1 + c2), (MAX, 1));
        let (sum, c3) = digit_add(sum, 1);
        assert_eq!((sum, c1 + c2 + c3), (0, 2));
    }

    #[test]
    fn digit_sub_test() {
        assert_eq!(digit_sub(5, 3), (2, 0));
        assert_eq!(digit_sub(3, 5), (MAX - 1, 1));
        assert_eq!(digit_sub(0, 1), (MAX, 1));
        assert_eq!(digit_sub(0, MAX), (1, 1));
        assert_eq!(digit_sub(MAX, MAX), (0, 0));
    }

    #[test]
    fn digit_mul_test() {
        assert_eq!(digit_mul(0, MAX), (0, 0));
        assert_eq!(digit_mul(1, MAX), (MAX, 0));
        assert_eq!(digit_mul(HALF, HALF), (0, 1));
        assert_eq!(digit_mul(MAX, 2), (MAX - 1, 1));
        assert_eq!(digit_mul(MAX, MAX), (1, MAX - 1));
    }

    #[test]
    fn digit_mul_halves_matches_wide() {
        let samples = [
            0,
            1,
            2,
            3,
            0x1234_5678,
            0x9abc_def0,
            HALF - 1,
            HALF,
            HALF + 1,
            MAX / 3,
            MAX / 2,
            MAX / 2 + 1,
            MAX - HALF,
            MAX - 1,
            MAX,
        ];
        for &a in &samples {
            for &b in &samples {
                assert_eq!(digit_mul_halves(a, b), digit_mul_wide(a, b), "{:#x} * {:#x}", a, b);
            }
        }
    }

    #[test]
    fn digit_mul_halves_column_carries() {
        // Both middle products contribute to the low word's upper half and
        // overflow it together.
        let a = MAX;
        let b = MAX - HALF + 1;
        assert_eq!(digit_mul_halves(a, b), digit_mul_wide(a, b));

        // Only the low product is nonzero.
        assert_eq!(digit_mul_halves(HALF - 1, HALF - 1), ((HALF - 1) * (HALF - 1), 0));

        // Only the high product is nonzero.
        assert_eq!(digit_mul_halves(HALF, HALF), (0, 1));
    }
}
