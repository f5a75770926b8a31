use core::ops::{Sub, SubAssign};

use crate::digit::{Digit, SignedDoubleDigit, DIGIT_BITS};
use crate::Unsigned;

/// Subtract with borrow:
#[inline]
pub fn sbb(a: Digit, b: Digit, acc: &mut SignedDoubleDigit) -> Digit {
    *acc += a as SignedDoubleDigit;
    *acc -= b as SignedDoubleDigit;
    let lo = *acc as Digit;
    *acc >>= DIGIT_BITS;
    lo
}

// A non-zero borrow (if a.len() == b.len()) is -1, which as unsigned is
// the same as "all bits set", i.e., 0xFFFF_FFFF for Digit = u32
pub fn sub_assign_borrow(a: &mut [Digit], b: &[Digit]) -> Digit {
    debug_assert!(a.len() >= b.len());
    let mut borrow = 0;

    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = sbb(*a, *b, &mut borrow);
    }

    if borrow != 0 {
        for a in a_hi {
            *a = sbb(*a, 0, &mut borrow);
            if borrow == 0 {
                break;
            }
        }
    }

    borrow as Digit
}

impl Unsigned {
    /// `None` if `subtrahend > self`.
    pub fn checked_sub(&self, subtrahend: &Self) -> Option<Self> {
        if subtrahend > self {
            return None;
        }
        let mut difference = self.clone();
        sub_assign_borrow(&mut difference.0, &subtrahend.0);
        difference.normalize();
        Some(difference)
    }
}

impl SubAssign<&Unsigned> for Unsigned {
    /// Panics if `subtrahend > self`: there are no negative magnitudes.
    fn sub_assign(&mut self, subtrahend: &Unsigned) {
        // note: we're _required_ to fail on underflow
        assert!(
            *subtrahend <= *self,
            "Cannot subtract b from a because b is larger than a."
        );
        sub_assign_borrow(&mut self.0, &subtrahend.0);
        self.normalize();
    }
}

impl Sub for &Unsigned {
    type Output = Unsigned;

    fn sub(self, subtrahend: &Unsigned) -> Self::Output {
        let mut difference = self.clone();
        difference -= subtrahend;
        difference
    }
}

impl Sub<&Unsigned> for Unsigned {
    type Output = Unsigned;

    fn sub(mut self, subtrahend: &Unsigned) -> Self::Output {
        self -= subtrahend;
        self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sub() {
        let a = Unsigned::from(1u128 << 64);
        let b = Unsigned::from(1u32);
        assert_eq!(&a - &b, Unsigned::from(u64::MAX));
        assert_eq!(&a - &a, Unsigned::zero());
        assert_eq!((&a - &a).len(), 0);
        assert_eq!(a.checked_sub(&b), Some(Unsigned::from(u64::MAX)));
        assert_eq!(b.checked_sub(&a), None);
    }

    #[test]
    #[should_panic]
    fn underflow() {
        let _ = &Unsigned::one() - &Unsigned::from(2u32);
    }

    #[test]
    fn borrow_ripples() {
        let mut a = [0, 0, 1];
        assert_eq!(sub_assign_borrow(&mut a, &[1]), 0);
        assert_eq!(a, [Digit::MAX, Digit::MAX, 0]);
    }
}
