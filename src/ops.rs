//! Signed arithmetic on top of the magnitude engine.
//!
//! Each operation settles the sign of its result, reduces the work to
//! unsigned magnitude arithmetic, and returns a canonical value. Operands
//! arrive as `Cow`s: an operand handed over by value can be returned as the
//! result without a copy (negating it, or adding zero to it).

use crate::bigint::BigInt;
use crate::error::{Error, Operation, Result};
use crate::magnitude::{absolute_add, absolute_compare, absolute_sub, multiply_accumulate};
use alloc::borrow::Cow;
use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// `-x`. There is no negative zero, so zero comes back unchanged.
pub(crate) fn unary_minus(x: Cow<BigInt>) -> BigInt {
    let mut result = x.into_owned();
    if !result.is_zero() {
        let sign = result.sign();
        result.set_sign(!sign);
    }
    result
}

/// `x + y`
pub(crate) fn add<'a>(x: Cow<'a, BigInt>, y: Cow<'a, BigInt>) -> BigInt {
    let xsign = x.sign();
    if xsign == y.sign() {
        // x + y == x + y
        // -x + -y == -(x + y)
        return absolute_add(x, y, xsign);
    }
    // x + -y == x - y == -(y - x)
    // -x + y == y - x == -(x - y)
    if absolute_compare(&x, &y) != Ordering::Less {
        return absolute_sub(x, y, xsign);
    }
    absolute_sub(y, x, !xsign)
}

/// `x - y`
pub(crate) fn subtract<'a>(x: Cow<'a, BigInt>, y: Cow<'a, BigInt>) -> BigInt {
    let xsign = x.sign();
    if xsign != y.sign() {
        // x - (-y) == x + y
        // (-x) - y == -(x + y)
        return absolute_add(x, y, xsign);
    }
    // x - y == -(y - x)
    // (-x) - (-y) == y - x == -(x - y)
    if absolute_compare(&x, &y) != Ordering::Less {
        return absolute_sub(x, y, xsign);
    }
    absolute_sub(y, x, !xsign)
}

/// `x * y`, by schoolbook long multiplication in O(len(x) * len(y)).
pub(crate) fn multiply<'a>(x: Cow<'a, BigInt>, y: Cow<'a, BigInt>) -> BigInt {
    if x.is_zero() {
        return x.into_owned();
    }
    if y.is_zero() {
        return y.into_owned();
    }
    let mut result = BigInt::new_zeroed(x.len() + y.len());
    for (i, &xi) in x.digits().iter().enumerate() {
        multiply_accumulate(y.digits(), xi, result.digits_mut(), i);
    }
    result.set_sign(x.sign() != y.sign());
    result.right_trim();
    result
}

/// Structural equality of two canonical values.
pub(crate) fn equal(x: &BigInt, y: &BigInt) -> bool {
    x.sign() == y.sign() && x.digits() == y.digits()
}

impl PartialEq for BigInt {
    #[inline]
    fn eq(&self, other: &BigInt) -> bool {
        equal(self, other)
    }
}

impl Eq for BigInt {}

impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        unary_minus(Cow::Owned(self))
    }
}

impl<'a> Neg for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        unary_minus(Cow::Borrowed(self))
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $assign_imp:ident, $assign_method:ident, $op:path) => {
        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: BigInt) -> BigInt {
                $op(Cow::Owned(self), Cow::Owned(other))
            }
        }

        impl<'a> $imp<&'a BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: &'a BigInt) -> BigInt {
                $op(Cow::Owned(self), Cow::Borrowed(other))
            }
        }

        impl<'a> $imp<BigInt> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: BigInt) -> BigInt {
                $op(Cow::Borrowed(self), Cow::Owned(other))
            }
        }

        impl<'a, 'b> $imp<&'b BigInt> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn $method(self, other: &'b BigInt) -> BigInt {
                $op(Cow::Borrowed(self), Cow::Borrowed(other))
            }
        }

        impl $assign_imp<BigInt> for BigInt {
            #[inline]
            fn $assign_method(&mut self, other: BigInt) {
                let this = core::mem::take(self);
                *self = $op(Cow::Owned(this), Cow::Owned(other));
            }
        }

        impl<'a> $assign_imp<&'a BigInt> for BigInt {
            #[inline]
            fn $assign_method(&mut self, other: &'a BigInt) {
                let this = core::mem::take(self);
                *self = $op(Cow::Owned(this), Cow::Borrowed(other));
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign, add);
forward_binop!(Sub, sub, SubAssign, sub_assign, subtract);
forward_binop!(Mul, mul, MulAssign, mul_assign, multiply);

// UNSUPPORTED
// -----------

// These exist so a host can route every operator here. None of them is
// implemented in this version, and none of the matching `core::ops` traits
// (or `PartialOrd`) is implemented, so a caller cannot reach them by
// accident through operator syntax.
#[allow(unused_variables)]
impl BigInt {
    /// `~self`. Not supported in this version; always returns an error.
    pub fn bitwise_not(&self) -> Result<BigInt> {
        Err(Error::unsupported(Operation::BitwiseNot))
    }

    /// `self ** exponent`. Not supported in this version; always returns an
    /// error.
    pub fn exponentiate(&self, exponent: &BigInt) -> Result<BigInt> {
        Err(Error::unsupported(Operation::Exponentiate))
    }

    /// `self / divisor`. Not supported in this version; always returns an
    /// error.
    pub fn divide(&self, divisor: &BigInt) -> Result<BigInt> {
        Err(Error::unsupported(Operation::Divide))
    }

    /// `self % divisor`. Not supported in this version; always returns an
    /// error.
    pub fn remainder(&self, divisor: &BigInt) -> Result<BigInt> {
        Err(Error::unsupported(Operation::Remainder))
    }

    /// `self << shift`. Not supported in this version; always returns an
    /// error.
    pub fn left_shift(&self, shift: &BigInt) -> Result<BigInt> {
        Err(Error::unsupported(Operation::LeftShift))
    }

    /// `self >> shift`, rounding towards negative infinity. Not supported in
    /// this version; always returns an error.
    pub fn signed_right_shift(&self, shift: &BigInt) -> Result<BigInt> {
        Err(Error::unsupported(Operation::SignedRightShift))
    }

    /// `self >>> shift`. Not supported in this version; always returns an
    /// error.
    pub fn unsigned_right_shift(&self, shift: &BigInt) -> Result<BigInt> {
        Err(Error::unsupported(Operation::UnsignedRightShift))
    }

    /// `self < other`. Not supported in this version; always returns an
    /// error.
    pub fn less_than(&self, other: &BigInt) -> Result<bool> {
        Err(Error::unsupported(Operation::LessThan))
    }

    /// `self & other`. Not supported in this version; always returns an
    /// error.
    pub fn bitwise_and(&self, other: &BigInt) -> Result<BigInt> {
        Err(Error::unsupported(Operation::BitwiseAnd))
    }

    /// `self ^ other`. Not supported in this version; always returns an
    /// error.
    pub fn bitwise_xor(&self, other: &BigInt) -> Result<BigInt> {
        Err(Error::unsupported(Operation::BitwiseXor))
    }

    /// `self | other`. Not supported in this version; always returns an
    /// error.
    pub fn bitwise_or(&self, other: &BigInt) -> Result<BigInt> {
        Err(Error::unsupported(Operation::BitwiseOr))
    }
}
