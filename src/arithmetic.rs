//! Arithmetic on [`Unsigned`], the magnitude underneath every exact number.
//!
//! The primitives work on raw little-endian digit slices (carries and borrows
//! are explicit), the operator implementations on `Unsigned` allocate as
//! needed and keep the result normalized.
//!
//! Operators that cannot fail in the type system (`-`, `/`, `%`) panic on
//! underflow or a zero divisor, exactly like the primitive integer types;
//! the `checked_*` methods report instead.

use crate::Unsigned;

mod add;
pub(crate) mod divide;
mod multiply;
mod shift;
mod subtract;

impl Unsigned {
    /// `self^exponent`, by square-and-multiply.
    pub fn pow(&self, mut exponent: u64) -> Self {
        let mut base = self.clone();
        let mut result = Unsigned::one();
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = &result * &base;
            }
            exponent >>= 1;
            if exponent > 0 {
                base = &base * &base;
            }
        }
        result
    }

    /// Greatest common divisor, `gcd(0, 0) = 0`.
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let r = &a % &b;
            a = b;
            b = r;
        }
        a
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pow() {
        let two = Unsigned::from(2u32);
        assert_eq!(two.pow(0), Unsigned::one());
        assert_eq!(two.pow(127), Unsigned::from(1u128 << 127));
        assert_eq!(Unsigned::zero().pow(0), Unsigned::one());
        assert_eq!(Unsigned::zero().pow(3), Unsigned::zero());
        assert_eq!(Unsigned::from(3u32).pow(40), Unsigned::from(3u128.pow(40)));
    }

    #[test]
    fn gcd() {
        let a = Unsigned::from(2u128.pow(40) * 3u128.pow(20));
        let b = Unsigned::from(2u128.pow(10) * 3u128.pow(30) * 7);
        assert_eq!(a.gcd(&b), Unsigned::from(2u128.pow(10) * 3u128.pow(20)));
        assert_eq!(a.gcd(&Unsigned::zero()), a);
        assert_eq!(Unsigned::zero().gcd(&Unsigned::zero()), Unsigned::zero());
        assert_eq!(Unsigned::from(17u32).gcd(&Unsigned::from(5u32)), Unsigned::one());
    }
}
