use core::ops::{Add, AddAssign};

use crate::digit::{Digit, DoubleDigit, DIGIT_BITS};
use crate::Unsigned;

//
// from num-bigint
//

// Add with carry:
#[inline]
pub fn adc(a: Digit, b: Digit, acc: &mut DoubleDigit) -> Digit {
    *acc += a as DoubleDigit;
    *acc += b as DoubleDigit;
    let lo = *acc as Digit;
    *acc >>= DIGIT_BITS;
    lo
}

#[inline]
/// Two argument addition of raw slices:
/// a += b
///
/// The caller _must_ ensure that a is big enough to store the result - typically this means
/// resizing a to max(a.len(), b.len()) + 1, to fit a possible carry.
pub(crate) fn add_assign_carry(a: &mut [Digit], b: &[Digit]) -> Digit {
    debug_assert!(a.len() >= b.len());

    let mut carry = 0;
    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = adc(*a, *b, &mut carry);
    }

    if carry != 0 {
        for a in a_hi {
            *a = adc(*a, 0, &mut carry);
            if carry == 0 {
                break;
            }
        }
    }

    carry as Digit
}

impl AddAssign<&Unsigned> for Unsigned {
    fn add_assign(&mut self, summand: &Unsigned) {
        if self.0.len() < summand.0.len() {
            self.0.resize(summand.0.len(), 0);
        }
        let carry = add_assign_carry(&mut self.0, &summand.0);
        if carry != 0 {
            self.0.push(carry);
        }
    }
}

impl AddAssign<Unsigned> for Unsigned {
    fn add_assign(&mut self, summand: Unsigned) {
        *self += &summand;
    }
}

impl Add for &Unsigned {
    type Output = Unsigned;

    fn add(self, summand: Self) -> Self::Output {
        let mut sum = self.clone();
        sum += summand;
        sum
    }
}

impl Add<&Unsigned> for Unsigned {
    type Output = Unsigned;

    fn add(mut self, summand: &Unsigned) -> Self::Output {
        self += summand;
        self
    }
}

impl Add for Unsigned {
    type Output = Unsigned;

    fn add(mut self, summand: Unsigned) -> Self::Output {
        self += &summand;
        self
    }
}

impl Unsigned {
    /// `self = self * mul + add`, the workhorse of parsing.
    pub(crate) fn mul_add_digit(&mut self, mul: Digit, add: Digit) {
        let mut carry = add as DoubleDigit;
        for digit in self.0.iter_mut() {
            carry += (*digit as DoubleDigit) * (mul as DoubleDigit);
            *digit = carry as Digit;
            carry >>= DIGIT_BITS;
        }
        if carry != 0 {
            self.0.push(carry as Digit);
        }
        self.normalize();
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn add() {
        let a = Unsigned::from(u64::MAX);
        let b = Unsigned::from(1u32);
        assert_eq!(&a + &b, Unsigned::from(1u128 << 64));
        assert_eq!(&b + &a, Unsigned::from(1u128 << 64));
        assert_eq!(&a + &Unsigned::zero(), a);

        let mut c = Unsigned::zero();
        c += &a;
        c += a.clone();
        assert_eq!(c, Unsigned::from(2 * (u64::MAX as u128)));
    }

    #[test]
    fn carry_ripples() {
        let mut a = [Digit::MAX, Digit::MAX, 0];
        assert_eq!(add_assign_carry(&mut a, &[1]), 0);
        assert_eq!(a, [0, 0, 1]);

        let mut a = [Digit::MAX];
        assert_eq!(add_assign_carry(&mut a, &[1]), 1);
    }

    #[test]
    fn mul_add_digit() {
        let mut x = Unsigned::zero();
        x.mul_add_digit(10, 0);
        assert!(x.is_zero());
        x.mul_add_digit(10, 7);
        x.mul_add_digit(1000, 999);
        assert_eq!(x, Unsigned::from(7999u32));
    }
}
