use alloc::{vec, vec::Vec};
use core::convert::TryFrom;

use num_traits::Float;
use ref_cast::RefCast;

use crate::digit::{Digit, DIGIT_BITS};
use crate::{Error, Result};

pub(crate) mod trait_implementations;

/// Bytes in a [`Digit`].
const DIGIT_BYTES: usize = DIGIT_BITS / 8;

/// Arbitrary-precision unsigned integer.
///
/// Internal representation as little-endian digits.
///
/// Implementation ***must ensure*** that the digits are normalized:
/// the highest digit is non-zero, and zero is the empty vector.
/// Everything else (length, comparison, equality) relies on this.
#[derive(Clone, Default, Eq, Hash, PartialEq)]
pub struct Unsigned(pub(crate) Vec<Digit>);

pub trait One: Sized + PartialEq {
    fn one() -> Self;

    fn is_one(&self) -> bool { *self == Self::one() }
    fn set_one(&mut self) { *self = Self::one(); }
}

pub trait Zero: Sized {
    fn zero() -> Self;

    fn is_zero(&self) -> bool;
    fn set_zero(&mut self) { *self = Self::zero(); }
}

impl Zero for Unsigned {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.0.is_empty()
    }
}

impl One for Unsigned {
    fn one() -> Self {
        Self(vec![1])
    }

    fn is_one(&self) -> bool {
        self.0 == [1]
    }
}

// c'tors and such
impl Unsigned {
    pub fn from_digit(digit: Digit) -> Self {
        Self::from_vec(vec![digit])
    }

    pub fn from_slice(slice: &[Digit]) -> Self {
        Self::from_vec(slice.to_vec())
    }

    pub(crate) fn from_vec(digits: Vec<Digit>) -> Self {
        let mut x = Self(digits);
        x.normalize();
        x
    }

    pub(crate) fn from_u128(mut value: u128) -> Self {
        let mut digits = Vec::new();
        while value != 0 {
            digits.push(value as Digit);
            value >>= DIGIT_BITS;
        }
        Self(digits)
    }

    /// Big-endian bytes, of any length (leading zeros are fine).
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        let digits = bytes
            .rchunks(DIGIT_BYTES)
            .map(|chunk| chunk.iter().fold(0 as Digit, |digit, &byte| (digit << 8) | byte as Digit))
            .collect();
        Self::from_vec(digits)
    }

    /// Minimal big-endian bytes; zero is `[0]`.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.0.len() * DIGIT_BYTES);
        for digit in self.0.iter().rev() {
            bytes.extend_from_slice(&digit.to_be_bytes());
        }
        let leading = bytes.iter().take_while(|&&byte| byte == 0).count();
        if leading == bytes.len() {
            return vec![0];
        }
        bytes.drain(..leading);
        bytes
    }

    /// Drop high zero digits.
    pub(crate) fn normalize(&mut self) {
        while let Some(&0) = self.0.last() {
            self.0.pop();
        }
    }
}

/// Trait methods as inherent methods, for convenience.
impl Unsigned {
    pub fn zero() -> Self {
        Zero::zero()
    }
    pub fn one() -> Self {
        One::one()
    }
    pub fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }
    pub fn is_one(&self) -> bool {
        One::is_one(self)
    }
}

impl Unsigned {
    /// Significant digits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn digits(&self) -> &[Digit] {
        &self.0
    }

    pub fn leading_digit(&self) -> Option<Digit> {
        self.0.last().copied()
    }

    pub fn is_even(&self) -> bool {
        self.0.first().map_or(true, |&digit| digit & 1 == 0)
    }

    /// Number of bits needed to represent the number, 0 for zero.
    pub fn bits(&self) -> usize {
        match self.leading_digit() {
            Some(leading) => self.0.len() * DIGIT_BITS - leading.leading_zeros() as usize,
            None => 0,
        }
    }

    /// Number of trailing zero bits, `None` for zero.
    pub fn trailing_zeros(&self) -> Option<usize> {
        let i = self.0.iter().position(|&digit| digit != 0)?;
        Some(i * DIGIT_BITS + self.0[i].trailing_zeros() as usize)
    }

    /// The 32 bits starting at bit `32 * index`.
    pub(crate) fn limb32(&self, index: usize) -> u32 {
        let bit = 32 * index;
        self.0
            .get(bit / DIGIT_BITS)
            .map_or(0, |&digit| (digit >> (bit % DIGIT_BITS)) as u32)
    }

    pub fn to_u64(&self) -> Option<u64> {
        if self.bits() > 64 {
            return None;
        }
        Some(self.0.iter().rev().fold(0u64, |value, &digit| {
            // shifting a u64 by 64 would overflow, in which case there is only one digit
            value.checked_shl(DIGIT_BITS as u32).unwrap_or(0) | digit as u64
        }))
    }

    /// Nearest `f64`, ties to even; overflows to infinity.
    pub fn to_f64(&self) -> f64 {
        let bits = self.bits();
        if bits <= 64 {
            return self.to_u64().unwrap_or(u64::MAX) as f64;
        }
        // Keep 64 significant bits and fold everything below into a sticky bit:
        // more than 53 + 2 bits, so the `u64 -> f64` rounding is still correct.
        let shift = bits - 64;
        let mut top = (self >> shift).to_u64().unwrap_or(u64::MAX);
        if self.trailing_zeros().map_or(false, |zeros| zeros < shift) {
            top |= 1;
        }
        scale_by_pow2(top as f64, shift as i64)
    }
}

/// `x * 2^exponent`, in steps that stay clear of intermediate overflow.
pub(crate) fn scale_by_pow2(mut x: f64, mut exponent: i64) -> f64 {
    const STEP: i64 = 1000;
    while exponent > STEP {
        x *= Float::powi(2f64, STEP as i32);
        exponent -= STEP;
    }
    while exponent < -STEP {
        x *= Float::powi(2f64, -STEP as i32);
        exponent += STEP;
    }
    x * Float::powi(2f64, exponent as i32)
}

/// Unsigned integer that is non-zero.
///
/// These are used as divisors and denominators.
#[derive(Clone, Eq, Hash, PartialEq, RefCast)]
#[repr(transparent)]
pub struct NonZero(Unsigned);

impl NonZero {
    pub fn one() -> Self {
        Self(Unsigned::one())
    }

    /// The caller guarantees `unsigned` is non-zero
    /// (products, powers and exact quotients of non-zero numbers).
    pub(crate) fn new_unchecked(unsigned: Unsigned) -> Self {
        debug_assert!(!unsigned.is_zero());
        Self(unsigned)
    }

    /// View a reference as non-zero, if it is.
    pub fn try_ref(unsigned: &Unsigned) -> Result<&Self> {
        if unsigned.is_zero() {
            Err(Error::DivisionByZero)
        } else {
            Ok(Self::ref_cast(unsigned))
        }
    }

    pub fn as_unsigned(&self) -> &Unsigned {
        &self.0
    }

    pub fn into_unsigned(self) -> Unsigned {
        self.0
    }
}

impl TryFrom<Unsigned> for NonZero {
    type Error = Error;

    fn try_from(unsigned: Unsigned) -> Result<Self> {
        if unsigned.is_zero() {
            return Err(Error::DivisionByZero);
        }
        Ok(Self(unsigned))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn normalized() {
        let x = Unsigned::from_slice(&[0, 1, 0, 2, 0, 0]);
        assert_eq!(x.len(), 4);
        assert_eq!(x.digits(), &[0, 1, 0, 2]);

        let x = Unsigned::from_slice(&[0, 0, 0]);
        assert_eq!(x.len(), 0);
        assert!(x.is_zero());
        assert_eq!(x, Unsigned::zero());
    }

    #[test]
    fn parity() {
        assert!(Unsigned::zero().is_even());
        assert!(!Unsigned::one().is_even());
        assert!(Unsigned::from(1u128 << 100).is_even());
        assert!(!Unsigned::from((1u128 << 100) + 1).is_even());
    }

    #[test]
    fn bits() {
        assert_eq!(Unsigned::zero().bits(), 0);
        assert_eq!(Unsigned::one().bits(), 1);
        assert_eq!(Unsigned::from(0xFFu32).bits(), 8);
        assert_eq!(Unsigned::from(1u128 << 100).bits(), 101);
        assert_eq!(Unsigned::from(1u128 << 100).trailing_zeros(), Some(100));
        assert_eq!(Unsigned::zero().trailing_zeros(), None);
    }

    #[test]
    fn bytes() {
        let x = Unsigned::from_be_bytes(&hex!("00000102030405060708090a0b"));
        assert_eq!(x, Unsigned::from(0x0102030405060708090a0bu128));
        assert_eq!(x.to_be_bytes(), hex!("0102030405060708090a0b"));
        assert_eq!(Unsigned::zero().to_be_bytes(), [0]);
        assert_eq!(Unsigned::from_be_bytes(&[]), Unsigned::zero());
    }

    #[test]
    fn limbs() {
        let x = Unsigned::from(0x1_2345_6789_89AB_CDEFu128);
        assert_eq!(x.limb32(0), 0x89AB_CDEF);
        assert_eq!(x.limb32(1), 0x2345_6789);
        assert_eq!(x.limb32(2), 0x1);
        assert_eq!(x.limb32(3), 0);
    }

    #[test]
    fn to_u64() {
        assert_eq!(Unsigned::zero().to_u64(), Some(0));
        assert_eq!(Unsigned::from(u64::MAX).to_u64(), Some(u64::MAX));
        assert_eq!(Unsigned::from(1u128 << 64).to_u64(), None);
    }

    #[test]
    fn to_f64() {
        assert_eq!(Unsigned::zero().to_f64(), 0.0);
        assert_eq!(Unsigned::from(1u128 << 100).to_f64(), 2f64.powi(100));

        // 2^64 + 2^11 + 1 rounds up, 2^64 + 2^11 ties to even (down)
        let x = (1u128 << 64) + (1 << 11) + 1;
        assert_eq!(Unsigned::from(x).to_f64(), x as f64);
        let x = (1u128 << 64) + (1 << 11);
        assert_eq!(Unsigned::from(x).to_f64(), x as f64);

        assert_eq!((&Unsigned::one() << 1024).to_f64(), f64::INFINITY);
        assert_eq!((&Unsigned::one() << 1023).to_f64(), 2f64.powi(1023));
    }

    #[test]
    fn non_zero() {
        assert_eq!(NonZero::try_ref(&Unsigned::zero()).err(), Some(Error::DivisionByZero));
        let seven = Unsigned::from(7u32);
        assert_eq!(NonZero::try_ref(&seven).unwrap().as_unsigned(), &seven);
        assert!(NonZero::try_from(Unsigned::zero()).is_err());
    }
}
