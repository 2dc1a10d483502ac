//! Serialize a BigInt with serde.

use crate::bigint::BigInt;
use serde_core::ser::{Serialize, SerializeTuple, Serializer};

/// A BigInt serializes as the two-element tuple `(negative, digits)`, where
/// `digits` are the minimal little-endian 32-bit chunks of the magnitude.
///
/// The chunk width is fixed so the format does not depend on the width of a
/// [`Digit`](crate::Digit) on the serializing platform.
///
/// ```
/// use bigint_core::BigInt;
///
/// let x = BigInt::from(-(1i64 << 32) - 5);
/// assert_eq!(serde_json::to_string(&x).unwrap(), "[true,[5,1]]");
/// ```
impl Serialize for BigInt {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(2)?;
        tuple.serialize_element(&self.is_negative())?;
        tuple.serialize_element(&self.to_u32_digits())?;
        tuple.end()
    }
}
