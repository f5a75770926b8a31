use core::iter;
use core::ops::{Shl, ShlAssign, Shr, ShrAssign};

use crate::digit::DIGIT_BITS;
use crate::Unsigned;

impl ShlAssign<usize> for Unsigned {
    #[inline]
    /// Compared to the fixed-size case, this never truncates: the number grows.
    ///
    /// Note that "left" means "higher number".
    fn shl_assign(&mut self, bits: usize) {
        if self.is_zero() {
            return;
        }

        let n_digits = bits / DIGIT_BITS;
        let n_bits = bits % DIGIT_BITS;

        // shift sub-digit amount of bits
        if n_bits > 0 {
            let mut carry = 0;
            for elem in self.0.iter_mut() {
                let new_carry = *elem >> (DIGIT_BITS - n_bits);
                *elem = (*elem << n_bits) | carry;
                carry = new_carry;
            }
            if carry != 0 {
                self.0.push(carry);
            }
        }

        // shift up by n_digits
        self.0.splice(..0, iter::repeat(0).take(n_digits));
    }
}

impl ShrAssign<usize> for Unsigned {
    #[inline]
    /// Note that "right" means "lower number".
    fn shr_assign(&mut self, bits: usize) {
        let n_digits = bits / DIGIT_BITS;

        if n_digits >= self.len() {
            self.0.clear();
            return;
        }

        // shift down by n_digits
        self.0.drain(..n_digits);

        let n_bits = bits % DIGIT_BITS;

        if n_bits > 0 {
            let mut borrow = 0;
            for elem in self.0.iter_mut().rev() {
                let new_borrow = *elem << (DIGIT_BITS - n_bits);
                *elem = (*elem >> n_bits) | borrow;
                borrow = new_borrow;
            }
        }
        self.normalize();
    }
}

impl Shl<usize> for &Unsigned {
    type Output = Unsigned;

    #[inline]
    fn shl(self, bits: usize) -> Self::Output {
        let mut result = self.clone();
        result <<= bits;
        result
    }
}

impl Shl<usize> for Unsigned {
    type Output = Unsigned;

    #[inline]
    fn shl(mut self, bits: usize) -> Self::Output {
        self <<= bits;
        self
    }
}

impl Shr<usize> for &Unsigned {
    type Output = Unsigned;

    #[inline]
    fn shr(self, bits: usize) -> Self::Output {
        let mut result = self.clone();
        result >>= bits;
        result
    }
}

impl Shr<usize> for Unsigned {
    type Output = Unsigned;

    #[inline]
    fn shr(mut self, bits: usize) -> Self::Output {
        self >>= bits;
        self
    }
}
