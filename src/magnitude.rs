//! Unsigned arithmetic over digit sequences.
//!
//! These algorithms ignore the sign of their operands; the caller decides the
//! sign of the result. They assume canonical inputs in little-endian order,
//! so for `[0, 1, 2, 3]`, `3` is the most significant digit and `0` the
//! least significant.

use crate::bigint::BigInt;
use crate::digit::{digit_add, digit_mul, digit_sub, Digit};
use crate::ops;
use alloc::borrow::Cow;
use core::cmp::Ordering;

// RELATIVE OPERATORS

/// Compare `|x|` to `|y|`.
///
/// Comparing lengths first is only valid because canonical values have no
/// most-significant zero digits.
pub(crate) fn absolute_compare(x: &BigInt, y: &BigInt) -> Ordering {
    compare_digits(x.digits(), y.digits())
}

fn compare_digits(x: &[Digit], y: &[Digit]) -> Ordering {
    match x.len().cmp(&y.len()) {
        Ordering::Equal => {}
        unequal => return unequal,
    }
    for (xi, yi) in x.iter().rev().zip(y.iter().rev()) {
        match xi.cmp(yi) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
    }
    Ordering::Equal
}

/// Result of adding or subtracting zero: `x` itself when it already carries
/// `result_sign`, otherwise its negation.
fn with_sign(x: Cow<BigInt>, result_sign: bool) -> BigInt {
    if x.sign() == result_sign {
        x.into_owned()
    } else {
        ops::unary_minus(x)
    }
}

// ADDITION

/// Compute `|x| + |y|` with the given sign.
pub(crate) fn absolute_add<'a>(
    x: Cow<'a, BigInt>,
    y: Cow<'a, BigInt>,
    result_sign: bool,
) -> BigInt {
    // Iterate the longer operand last so the carry-only tail is bounded.
    if x.len() < y.len() {
        return absolute_add(y, x, result_sign);
    }
    if x.is_zero() {
        debug_assert!(y.is_zero());
        return x.into_owned();
    }
    if y.is_zero() {
        return with_sign(x, result_sign);
    }

    // One extra digit for a possible final carry.
    let length = x.len() + 1;
    let mut result = BigInt::new_raw(length);
    let (xd, yd) = (x.digits(), y.digits());
    let mut carry: Digit = 0;
    for (&xi, &yi) in xd.iter().zip(yd) {
        // At most one of the two additions overflows, so the carry into the
        // next digit is 0 or 1.
        let (sum, c1) = digit_add(xi, yi);
        let (sum, c2) = digit_add(sum, carry);
        result.push_digit(sum);
        carry = c1 + c2;
    }
    for &xi in &xd[yd.len()..] {
        let (sum, c) = digit_add(xi, carry);
        result.push_digit(sum);
        carry = c;
    }
    result.push_digit(carry);
    debug_assert_eq!(result.len(), length);

    result.set_sign(result_sign);
    result.right_trim();
    result
}

// SUBTRACTION

/// Compute `|x| - |y|` with the given sign.
///
/// Callers must order the operands so that `|x| >= |y|`.
pub(crate) fn absolute_sub<'a>(
    x: Cow<'a, BigInt>,
    y: Cow<'a, BigInt>,
    result_sign: bool,
) -> BigInt {
    debug_assert!(x.len() >= y.len());
    debug_assert!(absolute_compare(&x, &y) != Ordering::Less);
    if x.is_zero() {
        debug_assert!(y.is_zero());
        return x.into_owned();
    }
    if y.is_zero() {
        return with_sign(x, result_sign);
    }

    // No extra digit: with |x| >= |y| no borrow escapes the top.
    let length = x.len();
    let mut result = BigInt::new_raw(length);
    let (xd, yd) = (x.digits(), y.digits());
    let mut borrow: Digit = 0;
    for (&xi, &yi) in xd.iter().zip(yd) {
        let (difference, b1) = digit_sub(xi, yi);
        let (difference, b2) = digit_sub(difference, borrow);
        result.push_digit(difference);
        borrow = b1 + b2;
    }
    for &xi in &xd[yd.len()..] {
        let (difference, b) = digit_sub(xi, borrow);
        result.push_digit(difference);
        borrow = b;
    }
    debug_assert_eq!(borrow, 0);
    debug_assert_eq!(result.len(), length);

    result.set_sign(result_sign);
    result.right_trim();
    result
}

// MULTIPLICATION

/// Multiply `multiplicand` by the single digit `multiplier` and add the
/// product into `accumulator`, starting at `accumulator_index` for the least
/// significant digit.
///
/// Callers must ensure `accumulator` is big enough to hold the result,
/// including every carry that propagates past the multiplicand's extent.
pub(crate) fn multiply_accumulate(
    multiplicand: &[Digit],
    multiplier: Digit,
    accumulator: &mut [Digit],
    accumulator_index: usize,
) {
    // This is a minimum requirement; the second loop below asserts more as
    // needed.
    debug_assert!(accumulator.len() > multiplicand.len() + accumulator_index);
    if multiplier == 0 {
        return;
    }

    let mut carry: Digit = 0;
    let mut high: Digit = 0;
    let mut index = accumulator_index;
    for &m_digit in multiplicand {
        let acc = accumulator[index];
        // Add last round's carryovers.
        let (acc, c1) = digit_add(acc, high);
        let (acc, c2) = digit_add(acc, carry);
        // Compute this round's multiplication.
        let (low, new_high) = digit_mul(multiplier, m_digit);
        let (acc, c3) = digit_add(acc, low);
        // Store result and prepare for next round.
        accumulator[index] = acc;
        high = new_high;
        carry = c1 + c2 + c3;
        index += 1;
    }
    while carry != 0 || high != 0 {
        debug_assert!(index < accumulator.len());
        let (acc, c1) = digit_add(accumulator[index], high);
        high = 0;
        let (acc, c2) = digit_add(acc, carry);
        accumulator[index] = acc;
        carry = c1 + c2;
        index += 1;
    }
}

// TESTS
// -----
