//! # bigint_core
//!
//! Arbitrary-precision signed integers for a dynamic-language numeric tower.
//!
//! A [`BigInt`] is a sign bit plus a little-endian sequence of machine-word
//! [`Digit`]s. Every value handed out by this crate is *canonical*: the
//! most-significant digit is never zero and zero is never negative, so
//! equality is plain structural comparison and no caller ever needs to
//! re-normalize a result.
//!
//! ```
//! use bigint_core::BigInt;
//!
//! let x = BigInt::from(123456789u64);
//! let y = BigInt::from(-987654321i64);
//! let product = &x * &y;
//!
//! assert_eq!(product, BigInt::from(-121932631112635269i64));
//! assert_eq!(product.to_str_radix(16)?, "-1b13114fbd9d3a5");
//! # Ok::<(), bigint_core::Error>(())
//! ```
//!
//! # Supported operations
//!
//! Negation, addition, subtraction and multiplication are available through
//! the usual operator traits, for owned and borrowed operands alike. Operands
//! passed by value are reused where the result would otherwise be a plain
//! copy of them.
//!
//! ```
//! use bigint_core::BigInt;
//!
//! let a = BigInt::from(5);
//! let b = BigInt::from(3);
//!
//! assert_eq!(&a + &b, BigInt::from(8));
//! assert_eq!(-&a + &b, BigInt::from(-2));
//! assert_eq!(&b - &a, BigInt::from(-2));
//! assert_eq!(-(a - b), BigInt::from(-2));
//! ```
//!
//! Conversion to text is supported for every power-of-two radix from 2 to
//! 32, either through [`BigInt::to_str_radix`] or the `{:b}`, `{:o}`, `{:x}`
//! and `{:X}` format traits.
//!
//! ```
//! use bigint_core::BigInt;
//!
//! assert_eq!(BigInt::from(255).to_str_radix(16)?, "ff");
//! assert_eq!(BigInt::from(-8).to_str_radix(2)?, "-1000");
//! assert_eq!(format!("{:#x}", BigInt::from(-255)), "-0xff");
//! # Ok::<(), bigint_core::Error>(())
//! ```
//!
//! # Unsupported operations
//!
//! Bitwise operations, shifts, exponentiation, division, remainder and
//! ordering are not implemented yet. They are still part of the API so that
//! a host can route them here, but they always return an [`Error`] whose
//! [`classify`](Error::classify) is [`Category::Unsupported`] instead of an
//! approximate answer.
//!
//! ```
//! use bigint_core::{BigInt, Category};
//!
//! let err = BigInt::from(7).divide(&BigInt::from(2)).unwrap_err();
//! assert_eq!(err.classify(), Category::Unsupported);
//! ```
//!
//! # No-std support
//!
//! Disable the default `std` feature and enable `alloc` to use this crate
//! without the Rust standard library.
//!
//! ```toml
//! [dependencies]
//! bigint_core = { version = "0.1", default-features = false, features = ["alloc"] }
//! ```

#![doc(html_root_url = "https://docs.rs/bigint_core/0.1.0")]
// Ignored clippy lints
#![allow(
    clippy::comparison_chain,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::similar_names
)]
#![deny(missing_docs)]
#![no_std]

#[cfg(not(any(feature = "std", feature = "alloc")))]
mod features_check;

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[doc(inline)]
pub use crate::bigint::BigInt;
#[doc(inline)]
pub use crate::digit::{Digit, DIGIT_BITS};
#[doc(inline)]
pub use crate::error::{Category, Error, ErrorCode, Operation, Result};
#[doc(inline)]
pub use crate::radix::MAX_STRING_LENGTH;

mod bigint;
mod de;
mod digit;
pub mod error;
mod magnitude;
mod ops;
mod radix;
mod ser;
