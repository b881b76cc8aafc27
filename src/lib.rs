//! Exact arbitrary-precision signed integer arithmetic.
//!
//! This crate provides [`BigNum`], a signed integer type whose magnitude is
//! bounded only by memory. Values are stored as base-10<sup>9</sup> limbs, so
//! construction from decimal text and rendering back to decimal text are
//! cheap, and every arithmetic operation is exact.
//!
//! # Constructing values
//!
//! A `BigNum` is parsed from a decimal string, converted from any native
//! integer type, or produced by an arithmetic operation:
//!
//! ```
//! use bignum::BigNum;
//!
//! let a: BigNum = "6541654885416548".parse().unwrap();
//! let b = BigNum::from(486486584756989_u64);
//!
//! assert_eq!((&a + &b).to_string(), "7028141470173537");
//! assert_eq!((&a - &b).to_string(), "6055168300659559");
//! assert_eq!((&a / &b).to_string(), "13");
//! ```
//!
//! Parsing rejects anything that is not an optionally `-`-signed run of
//! ASCII digits:
//!
//! ```
//! use bignum::BigNum;
//!
//! assert!("".parse::<BigNum>().is_err());
//! assert!("-".parse::<BigNum>().is_err());
//! assert!("12x34".parse::<BigNum>().is_err());
//! ```
//!
//! # Arithmetic
//!
//! The binary operators `+`, `-`, `*`, `/` and `%` are implemented for owned
//! values and references, along with their compound-assignment forms.
//! Multiplication switches from schoolbook to Karatsuba's divide-and-conquer
//! algorithm once both operands are large; division uses a per-digit binary
//! search. Division and modulo by zero panic, matching the native integer
//! contract.
//!
//! `%` always yields the non-negative remainder of the operand magnitudes,
//! regardless of either sign:
//!
//! ```
//! use bignum::BigNum;
//!
//! let r = BigNum::from(-7) % BigNum::from(2);
//! assert_eq!(r, BigNum::from(1));
//! ```
//!
//! # No-std support
//!
//! As long as there is a memory allocator, it is possible to use this crate
//! without the rest of the Rust standard library. Disable the default "std"
//! feature and the crate falls back to `core` + `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

extern crate alloc;

mod bignum;
mod error;
mod math;
mod ops;

#[cfg(feature = "serde")]
mod de;
#[cfg(feature = "serde")]
mod ser;

pub use crate::bignum::BigNum;
pub use crate::error::{Error, ErrorCode, Result};
