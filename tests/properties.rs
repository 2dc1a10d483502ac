//! Property-based tests for BigInt arithmetic and text conversion.
//!
//! Small operands are checked against `i128` arithmetic. Multi-digit operands
//! are checked against algebraic identities, and their text is parsed back
//! bit by bit.

use bigint_core::BigInt;
use proptest::prelude::*;

// -- Strategies --

/// Values of up to eight 32-bit chunks, with either sign.
fn bigint_strategy() -> impl Strategy<Value = BigInt> {
    (any::<bool>(), prop::collection::vec(any::<u32>(), 0..8))
        .prop_map(|(negative, chunks)| BigInt::from_u32_digits(negative, &chunks))
}

fn assert_canonical(x: &BigInt) {
    match x.digits().last() {
        Some(&msd) => assert_ne!(msd, 0, "leading zero digit in {:?}", x),
        None => assert!(!x.is_negative(), "negative zero"),
    }
}

/// Values of up to forty 32-bit chunks, enough for the character groups of
/// radix 8 and 32 to fall at every offset within a digit.
fn wide_bigint_strategy() -> impl Strategy<Value = BigInt> {
    (any::<bool>(), prop::collection::vec(any::<u32>(), 0..40))
        .prop_map(|(negative, chunks)| BigInt::from_u32_digits(negative, &chunks))
}

/// Parse text produced for radix `1 << bits` back into minimal 32-bit
/// chunks, least significant character first.
fn parse_bits(text: &str, bits: u32) -> (bool, Vec<u32>) {
    let (negative, magnitude) = match text.strip_prefix('-') {
        Some(magnitude) => (true, magnitude),
        None => (false, text),
    };
    let mut chunks = Vec::new();
    let mut pending: u64 = 0;
    let mut filled = 0;
    for c in magnitude.chars().rev() {
        let value = c.to_digit(1 << bits).unwrap();
        pending |= u64::from(value) << filled;
        filled += bits;
        if filled >= 32 {
            chunks.push(pending as u32);
            pending >>= 32;
            filled -= 32;
        }
    }
    if filled > 0 {
        chunks.push(pending as u32);
    }
    while chunks.last() == Some(&0) {
        chunks.pop();
    }
    (negative, chunks)
}

// -- Properties against i128 --

proptest! {
    #[test]
    fn add_matches_i128(x in any::<i64>(), y in any::<i64>()) {
        let sum = BigInt::from(x) + BigInt::from(y);
        prop_assert_eq!(sum, BigInt::from(i128::from(x) + i128::from(y)));
    }

    #[test]
    fn sub_matches_i128(x in any::<i64>(), y in any::<i64>()) {
        let difference = BigInt::from(x) - BigInt::from(y);
        prop_assert_eq!(difference, BigInt::from(i128::from(x) - i128::from(y)));
    }

    #[test]
    fn mul_matches_i128(x in any::<i64>(), y in any::<i64>()) {
        let product = BigInt::from(x) * BigInt::from(y);
        prop_assert_eq!(product, BigInt::from(i128::from(x) * i128::from(y)));
    }

    #[test]
    fn text_matches_i128(x in any::<i128>()) {
        let big = BigInt::from(x);
        for radix in [2, 4, 8, 16, 32] {
            let text = big.to_str_radix(radix).unwrap();
            prop_assert_eq!(i128::from_str_radix(&text, radix).unwrap(), x);
        }
    }

    #[test]
    fn unsupported_radix_is_hex(x in any::<i128>(), radix in 0u32..100) {
        prop_assume!(!radix.is_power_of_two() || radix > 32 || radix < 2);
        let big = BigInt::from(x);
        prop_assert_eq!(big.to_str_radix(radix).unwrap(), big.to_str_radix(16).unwrap());
    }
}

// -- Algebraic properties --

proptest! {
    #[test]
    fn results_are_canonical(x in bigint_strategy(), y in bigint_strategy()) {
        assert_canonical(&x);
        assert_canonical(&(&x + &y));
        assert_canonical(&(&x - &y));
        assert_canonical(&(&x * &y));
        assert_canonical(&-&x);
    }

    #[test]
    fn identity_and_inverse(x in bigint_strategy()) {
        prop_assert_eq!(&x + &BigInt::zero(), x.clone());
        prop_assert_eq!(&x - &BigInt::zero(), x.clone());
        prop_assert_eq!(&x * &BigInt::from(1), x.clone());
        prop_assert_eq!(-(-&x), x.clone());
        prop_assert!((&x - &x).is_zero());
        prop_assert!((&x + &-&x).is_zero());
        prop_assert!((&x * &BigInt::zero()).is_zero());
    }

    #[test]
    fn commutative(x in bigint_strategy(), y in bigint_strategy()) {
        prop_assert_eq!(&x + &y, &y + &x);
        prop_assert_eq!(&x * &y, &y * &x);
    }

    #[test]
    fn associative(x in bigint_strategy(), y in bigint_strategy(), z in bigint_strategy()) {
        prop_assert_eq!((&x + &y) + &z, &x + (&y + &z));
        prop_assert_eq!((&x * &y) * &z, &x * (&y * &z));
    }

    #[test]
    fn subtraction_is_negated_addition(x in bigint_strategy(), y in bigint_strategy()) {
        prop_assert_eq!(&x - &y, &x + &-&y);
        prop_assert_eq!((&x - &y) + &y, x.clone());
        prop_assert_eq!(&x - &y, -(&y - &x));
    }

    #[test]
    fn distributive(x in bigint_strategy(), y in bigint_strategy(), z in bigint_strategy()) {
        prop_assert_eq!(&x * (&y + &z), &x * &y + &x * &z);
    }

    #[test]
    fn product_sign_and_length(x in bigint_strategy(), y in bigint_strategy()) {
        let product = &x * &y;
        if x.is_zero() || y.is_zero() {
            prop_assert!(product.is_zero());
        } else {
            prop_assert_eq!(product.is_negative(), x.is_negative() != y.is_negative());
            let length = x.len() + y.len();
            prop_assert!(product.len() == length || product.len() == length - 1);
        }
    }

    #[test]
    fn equality_is_structural(x in bigint_strategy(), y in bigint_strategy()) {
        let same = x.is_negative() == y.is_negative() && x.digits() == y.digits();
        prop_assert_eq!(x == y, same);
    }

    #[test]
    fn text_round_trip(x in wide_bigint_strategy()) {
        let expected = (x.is_negative(), x.to_u32_digits());
        for bits in 1..=5 {
            let text = x.to_str_radix(1 << bits).unwrap();
            let magnitude = text.trim_start_matches('-');
            prop_assert!(magnitude == "0" || !magnitude.starts_with('0'), "{}", text);
            prop_assert_eq!(parse_bits(&text, bits), expected.clone());
        }
    }

    #[test]
    fn text_length(x in bigint_strategy()) {
        let chunks = x.to_u32_digits();
        let bits = chunks.last().map_or(0, |msd| {
            32 * (chunks.len() - 1) + (32 - msd.leading_zeros() as usize)
        });
        for (radix, bits_per_char) in [(2, 1), (4, 2), (8, 3), (16, 4), (32, 5)] {
            let text = x.to_str_radix(radix).unwrap();
            let expected = if bits == 0 { 1 } else { (bits + bits_per_char - 1) / bits_per_char };
            prop_assert_eq!(text.len(), expected + usize::from(x.is_negative()));
        }
    }

    #[test]
    fn u32_digits_round_trip(x in bigint_strategy()) {
        let chunks = x.to_u32_digits();
        prop_assert!(chunks.last() != Some(&0));
        prop_assert_eq!(BigInt::try_from_u32_digits(x.is_negative(), &chunks).unwrap(), x);
    }
}
