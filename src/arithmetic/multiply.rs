use alloc::{vec, vec::Vec};
use core::ops::{Mul, MulAssign};

use super::add::adc;
use crate::digit::{Digit, DoubleDigit, DIGIT_BITS};
use crate::Unsigned;

/// Multiply-accumulate with carry: `a + b * c + carry` fits a double digit.
#[inline]
fn mac_with_carry(a: Digit, b: Digit, c: Digit, acc: &mut DoubleDigit) -> Digit {
    *acc += a as DoubleDigit;
    *acc += (b as DoubleDigit) * (c as DoubleDigit);
    let lo = *acc as Digit;
    *acc >>= DIGIT_BITS;
    lo
}

/// acc += b * c
///
/// The caller must leave room in `acc` for the carry, i.e. `acc.len() > b.len()`
/// unless the product is known to fit.
pub(crate) fn mac_digit(acc: &mut [Digit], b: &[Digit], c: Digit) {
    if c == 0 {
        return;
    }

    let mut carry = 0;
    let (a_lo, a_hi) = acc.split_at_mut(b.len());

    for (a, &b) in a_lo.iter_mut().zip(b) {
        *a = mac_with_carry(*a, b, c, &mut carry);
    }

    for a in a_hi {
        if carry == 0 {
            break;
        }
        *a = adc(*a, 0, &mut carry);
    }
    debug_assert_eq!(carry, 0);
}

/// Operand-scanning (schoolbook) multiplication.
///
/// Each row is accumulated with `mac_digit`, so the accumulator never holds
/// more than one double digit.
pub(crate) fn mul_digits(x: &[Digit], y: &[Digit]) -> Vec<Digit> {
    // the row with the fewer digits drives the outer loop
    let (x, y) = if x.len() < y.len() { (x, y) } else { (y, x) };
    let mut product = vec![0; x.len() + y.len() + 1];
    for (i, &xi) in x.iter().enumerate() {
        mac_digit(&mut product[i..], y, xi);
    }
    product
}

impl Mul for &Unsigned {
    type Output = Unsigned;

    fn mul(self, other: Self) -> Self::Output {
        if self.is_zero() || other.is_zero() {
            return Unsigned::zero();
        }
        Unsigned::from_vec(mul_digits(self, other))
    }
}

impl Mul<&Unsigned> for Unsigned {
    type Output = Unsigned;

    fn mul(self, other: &Unsigned) -> Self::Output {
        &self * other
    }
}

impl Mul for Unsigned {
    type Output = Unsigned;

    fn mul(self, other: Unsigned) -> Self::Output {
        &self * &other
    }
}

impl MulAssign<&Unsigned> for Unsigned {
    fn mul_assign(&mut self, other: &Unsigned) {
        *self = &*self * other;
    }
}
