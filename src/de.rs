//! Deserialize a BigInt with serde.

use crate::bigint::BigInt;
use alloc::vec::Vec;
use core::fmt;
use serde_core::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};

struct BigIntVisitor;

impl<'de> Visitor<'de> for BigIntVisitor {
    type Value = BigInt;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a (negative, digits) pair describing a canonical BigInt")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<BigInt, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let negative: bool = match seq.next_element()? {
            Some(negative) => negative,
            None => return Err(de::Error::invalid_length(0, &self)),
        };
        let digits: Vec<u32> = match seq.next_element()? {
            Some(digits) => digits,
            None => return Err(de::Error::invalid_length(1, &self)),
        };
        BigInt::try_from_u32_digits(negative, &digits).map_err(de::Error::custom)
    }
}

/// Accepts exactly what [`Serialize`](serde_core::Serialize) produces and
/// rejects non-canonical input: a most-significant zero chunk, or a negative
/// sign on zero.
impl<'de> Deserialize<'de> for BigInt {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_tuple(2, BigIntVisitor)
    }
}
