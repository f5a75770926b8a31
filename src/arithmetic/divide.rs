use alloc::vec;
use core::cmp::Ordering;
use core::ops::{Div, Rem};

use super::add::add_assign_carry;
use super::subtract::sub_assign_borrow;
use crate::digit::{Digit, DoubleDigit, DIGIT_BITS};
use crate::numbers::trait_implementations::cmp_digits;
use crate::numbers::NonZero;
use crate::Unsigned;

/// Divide a two digit numerator by a one digit divisor, returns quotient and remainder:
///
/// Note: the caller must ensure that both the quotient and remainder will fit into a single digit.
/// This is _not_ true for an arbitrary numerator/denominator.
///
/// (This function also matches what the x86 divide instruction does).
///
/// REMARK: This is Knuth's operation c0), "memorizing the multiplication table in reverse."
#[inline]
pub fn div_digits(hi: Digit, lo: Digit, divisor: Digit) -> (Digit, Digit) {
    debug_assert!(hi < divisor);

    let x = ((hi as DoubleDigit) << DIGIT_BITS) + lo as DoubleDigit;
    let divisor = divisor as DoubleDigit;

    let q = x / divisor;
    let r = x % divisor;

    (q as Digit, r as Digit)
}

/// Divides the digits in-place by `divisor`, returning the remainder.
///
/// High zero digits are left in place; the caller normalizes.
pub fn div_rem_assign_digit(number: &mut [Digit], divisor: Digit) -> Digit {
    let mut remainder = 0;

    // run down the digits, dividing each by the divisor, while carrying along the remainder
    for digit in number.iter_mut().rev() {
        let (quotient, r) = div_digits(remainder, *digit, divisor);
        *digit = quotient;
        remainder = r;
    }

    remainder
}

/// "Multi-precision division of x by n".
///
/// Meaning: Return unique values `(q, r)` with `x = q*n + r`, and `0 <= r < n`.
///
/// To do this in the general case means making quite a few guesses. Following the
/// schoolbook division of [`num-bigint::biguint::division`][num-bigint], i.e.
/// Knuth, TAOCP vol 2 section 4.3, algorithm D(ivision).
///
/// The non-zero divisor is enforced by type.
///
/// [num-bigint]: https://docs.rs/num-bigint/0.4.0/src/num_bigint/biguint/division.rs.html#111-156
pub fn div_rem(x: &Unsigned, n: &NonZero) -> (Unsigned, Unsigned) {
    let n: &Unsigned = n;

    if x.is_zero() {
        return (Unsigned::zero(), Unsigned::zero());
    }

    if n.len() == 1 {
        let n = n[0];

        let mut div = x.clone();
        if n == 1 {
            return (div, Unsigned::zero());
        }
        let rem = div_rem_assign_digit(&mut div.0, n);
        div.normalize();
        return (div, Unsigned::from_digit(rem));
    }

    // Required or the q_len calculation below can underflow:
    match x.cmp(n) {
        Ordering::Less => return (Unsigned::zero(), x.clone()),
        Ordering::Equal => return (Unsigned::one(), Unsigned::zero()),
        Ordering::Greater => {} // Do nothing
    }

    // This shift has no influence on `q`, and will be reverted for `r` at the end.
    // After it, the leading digit of the divisor has its top bit set.
    let shift_bits = n[n.len() - 1].leading_zeros() as usize;

    let mut r = x << shift_bits;
    let n = n << shift_bits;
    let leading = n[n.len() - 1];

    // we now want to calculate r/n, in the sense r = qn + remainder
    // (r starts at x, goes down to the remainder by removing multiples of n, the
    // multipliers summed into q, which starts at 0)

    let q_len = r.len() - n.len() + 1;
    let mut q = vec![0; q_len + 1];

    for j in (0..q_len).rev() {
        // The estimate for digit j of the quotient only depends on the digits of r
        // from `offset` upwards, as the leading digit of n sits at `n.len() - 1`.
        let offset = j + n.len() - 1;
        if offset >= r.len() {
            continue;
        }

        let mut trial = Unsigned::from_slice(&r[offset..]);
        div_rem_assign_digit(&mut trial.0, leading);
        trial.normalize();
        let mut prod = &n * &trial;

        while cmp_digits(&prod, &r[j..]) == Ordering::Greater {
            trial -= &Unsigned::one();
            prod -= &n;
        }

        add_assign_carry(&mut q[j..], &trial);
        sub_assign_borrow(&mut r.0[j..], &prod);
        r.normalize();
    }

    debug_assert!(n > r);

    r >>= shift_bits;
    (Unsigned::from_vec(q), r)
}

impl Unsigned {
    /// Quotient and remainder, `None` for a zero divisor.
    pub fn checked_div_rem(&self, divisor: &Unsigned) -> Option<(Unsigned, Unsigned)> {
        NonZero::try_ref(divisor).ok().map(|divisor| div_rem(self, divisor))
    }

    /// Quotient and remainder.
    ///
    /// Panics if the divisor is zero, like the primitive integer types.
    pub fn div_rem(&self, divisor: &Unsigned) -> (Unsigned, Unsigned) {
        match self.checked_div_rem(divisor) {
            Some(quotient_remainder) => quotient_remainder,
            None => panic!("attempt to divide by zero"),
        }
    }
}

//
// Implement Div
//

impl Div for &Unsigned {
    type Output = Unsigned;
    fn div(self, divisor: &Unsigned) -> Self::Output {
        self.div_rem(divisor).0
    }
}

impl Div<&Unsigned> for Unsigned {
    type Output = Unsigned;
    fn div(self, divisor: &Unsigned) -> Self::Output {
        self.div_rem(divisor).0
    }
}

impl Div<&NonZero> for &Unsigned {
    type Output = Unsigned;
    fn div(self, divisor: &NonZero) -> Self::Output {
        div_rem(self, divisor).0
    }
}

//
// Implement Rem
//

impl Rem for &Unsigned {
    type Output = Unsigned;
    fn rem(self, divisor: &Unsigned) -> Self::Output {
        let (_quotient, remainder) = self.div_rem(divisor);
        remainder
    }
}

impl Rem<&Unsigned> for Unsigned {
    type Output = Unsigned;
    fn rem(self, divisor: &Unsigned) -> Self::Output {
        self.div_rem(divisor).1
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fixtures::{M, N1, N2};
    use quickcheck::{quickcheck, TestResult};

    /// Assert that an op works for all val/ref combinations
    macro_rules! assert_op {
        ($left:ident $op:tt $right:ident == $expected:expr) => {
            assert_eq!((&$left) $op (&$right), $expected);
            assert_eq!($left.clone() $op (&$right), $expected);
        };
    }

    pub const DIV_REM_QUADRUPLES: &'static [(
        &'static [Digit],
        &'static [Digit],
        &'static [Digit],
        &'static [Digit],
    )] = &[
        (&[1], &[2], &[], &[1]),
        (&[3], &[2], &[1], &[1]),
        (&[1, 1], &[2], &[M / 2 + 1], &[1]),
        (&[1, 1, 1], &[2], &[M / 2 + 1, M / 2 + 1], &[1]),
        (&[0, 1], &[N1], &[1], &[1]),
        (&[N1, N1], &[N2], &[2, 1], &[3]),
        (&[2, 4, 7, 6], &[1, 2], &[1, 2, 3], &[1]),
        (&[0, 0, 0, 1], &[0, 1], &[0, 0, 1], &[]),
    ];

    #[test]
    fn test_div_rem() {
        for &(a, b, c, d) in DIV_REM_QUADRUPLES {
            let a = Unsigned::from_slice(a);
            let b = Unsigned::from_slice(b);
            let c = Unsigned::from_slice(c);
            let d = Unsigned::from_slice(d);

            assert_op!(a / b == c);
            assert_op!(a % b == d);
            assert_eq!(a.div_rem(&b), (c, d));
        }
    }

    #[test]
    fn div_digit() {
        let mut digits = [7, 0, 1];
        let r = div_rem_assign_digit(&mut digits, 2);
        assert_eq!(r, 1);
        assert_eq!(digits, [3, M / 2 + 1, 0]);
    }

    #[test]
    fn by_zero() {
        assert_eq!(Unsigned::one().checked_div_rem(&Unsigned::zero()), None);
    }

    #[test]
    #[should_panic]
    fn by_zero_panics() {
        let _ = &Unsigned::one() / &Unsigned::zero();
    }

    #[test]
    fn div_rem_reconstructs() {
        fn prop(x: Unsigned, n: Unsigned) -> TestResult {
            if n.is_zero() {
                return TestResult::discard();
            }
            let (q, r) = x.div_rem(&n);
            TestResult::from_bool(r < n && &(&q * &n) + &r == x)
        }
        quickcheck(prop as fn(Unsigned, Unsigned) -> TestResult);
    }

    #[test]
    fn agrees_with_u128() {
        fn prop(x: u128, n: u128) -> TestResult {
            if n == 0 {
                return TestResult::discard();
            }
            let (q, r) = Unsigned::from(x).div_rem(&Unsigned::from(n));
            TestResult::from_bool(q == Unsigned::from(x / n) && r == Unsigned::from(x % n))
        }
        quickcheck(prop as fn(u128, u128) -> TestResult);
    }
}
