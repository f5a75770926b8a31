#![cfg_attr(not(test), no_std)]
//! Exact arithmetic and exact square roots over arbitrary-precision integers.
//!
//! Integer division yields a [`Rational`] instead of truncating, and the
//! square root of a perfect square (or of a ratio of perfect squares) is exact,
//! computed on the big integer itself with floats only seeding the estimates.
//! Square roots of negative numbers are [`Complex`].
//!
//! Everything is opt-in through the [`Number`] type, whose operations always
//! return [canonical][canonicalize] results.
//!
//! ```
//! use exact_sqrt::{divide, sqrt, Integer, Number};
//!
//! let four_ninths = divide(&Integer::from(4), &Integer::from(9)).unwrap();
//! assert_eq!(sqrt(&four_ninths).to_string(), "2/3");
//! assert_eq!(sqrt(&Number::from(-4)).to_string(), "0+2i");
//! ```
//!
//! The machine digit width of [`Unsigned`] follows the target pointer width,
//! the `u32` and `u64` features force one.
//!
//! The crate is `no_std` and only needs `alloc`. The default `std` feature adds
//! the `std::error::Error` impl and takes float math from `std` instead of `libm`.

extern crate alloc;
#[cfg(all(feature = "std", not(test)))]
extern crate std;

mod arithmetic;
mod complex;
mod digit;
mod error;
mod integer;
mod number;
mod numbers;
mod rational;
mod sqrt;

#[cfg(test)]
mod fixtures;

pub use complex::Complex;
pub use digit::Digit;
pub use error::{Error, Result};
pub use integer::Integer;
pub use number::{canonicalize, divide, Number};
pub use numbers::{NonZero, One, Unsigned, Zero};
pub use rational::Rational;
pub use sqrt::{exact_sqrt, rsqrt, sqrt, DigitGroups};
