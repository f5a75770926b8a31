//! Signed arbitrary-precision integers: a sign on top of an [`Unsigned`] magnitude.

use alloc::string::ToString;
use core::{cmp::Ordering, fmt, str::FromStr};
use core::ops::{Add, AddAssign, Div, Mul, Neg, Rem, Sub, SubAssign};

use crate::numbers::{One, Zero};
use crate::{Error, Result, Unsigned};

/// Signed integer.
///
/// Zero is never negative, so the derived equality is equality of values.
#[derive(Clone, Default, Eq, Hash, PartialEq)]
pub struct Integer {
    negative: bool,
    magnitude: Unsigned,
}

impl Zero for Integer {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self::from(Unsigned::one())
    }
}

impl Integer {
    pub fn new(negative: bool, magnitude: Unsigned) -> Self {
        let negative = negative && !magnitude.is_zero();
        Self { negative, magnitude }
    }

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
        !self.negative && self.magnitude.is_one()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn magnitude(&self) -> &Unsigned {
        &self.magnitude
    }

    pub fn into_parts(self) -> (bool, Unsigned) {
        (self.negative, self.magnitude)
    }

    /// -1, 0 or 1, as an ordering against zero.
    pub fn signum(&self) -> Ordering {
        if self.negative {
            Ordering::Less
        } else if self.magnitude.is_zero() {
            Ordering::Equal
        } else {
            Ordering::Greater
        }
    }

    pub fn abs(&self) -> Self {
        Self::from(self.magnitude.clone())
    }

    pub fn pow(&self, exponent: u64) -> Self {
        let negative = self.negative && exponent & 1 == 1;
        Self::new(negative, self.magnitude.pow(exponent))
    }

    pub fn to_f64(&self) -> f64 {
        let magnitude = self.magnitude.to_f64();
        if self.negative {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Truncating division, `None` for a zero divisor.
    ///
    /// The remainder carries the sign of the dividend, as for the primitive types.
    pub fn checked_div_rem(&self, divisor: &Integer) -> Option<(Integer, Integer)> {
        let (q, r) = self.magnitude.checked_div_rem(&divisor.magnitude)?;
        Some((
            Integer::new(self.negative != divisor.negative, q),
            Integer::new(self.negative, r),
        ))
    }

    /// Panics if the divisor is zero.
    pub fn div_rem(&self, divisor: &Integer) -> (Integer, Integer) {
        match self.checked_div_rem(divisor) {
            Some(quotient_remainder) => quotient_remainder,
            None => panic!("attempt to divide by zero"),
        }
    }
}

impl From<Unsigned> for Integer {
    fn from(magnitude: Unsigned) -> Self {
        Self { negative: false, magnitude }
    }
}

macro_rules! from_primitive {
    ($($signed:ty => $unsigned:ty),*) => {
        $(
            impl From<$signed> for Integer {
                fn from(value: $signed) -> Self {
                    Self::new(value < 0, Unsigned::from(value.unsigned_abs() as $unsigned))
                }
            }

            impl From<$unsigned> for Integer {
                fn from(value: $unsigned) -> Self {
                    Self::from(Unsigned::from(value))
                }
            }
        )*
    };
}

from_primitive!(i32 => u32, i64 => u64, i128 => u128);

// Ordering by value: negatives reverse the order of magnitudes.
impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer::new(!self.negative, self.magnitude.clone())
    }
}

impl Neg for Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer::new(!self.negative, self.magnitude)
    }
}

impl AddAssign<&Integer> for Integer {
    fn add_assign(&mut self, summand: &Integer) {
        if self.negative == summand.negative {
            self.magnitude += &summand.magnitude;
            return;
        }
        // opposite signs: the larger magnitude wins the sign
        if self.magnitude >= summand.magnitude {
            self.magnitude -= &summand.magnitude;
            self.negative = self.negative && !self.magnitude.is_zero();
        } else {
            self.magnitude = &summand.magnitude - &self.magnitude;
            self.negative = summand.negative;
        }
    }
}

impl SubAssign<&Integer> for Integer {
    fn sub_assign(&mut self, subtrahend: &Integer) {
        *self += &-subtrahend;
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, summand: Self) -> Self::Output {
        let mut sum = self.clone();
        sum += summand;
        sum
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, subtrahend: Self) -> Self::Output {
        let mut difference = self.clone();
        difference -= subtrahend;
        difference
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, other: Self) -> Self::Output {
        Integer::new(self.negative != other.negative, &self.magnitude * &other.magnitude)
    }
}

impl Mul<&Unsigned> for &Integer {
    type Output = Integer;

    fn mul(self, other: &Unsigned) -> Self::Output {
        Integer::new(self.negative, &self.magnitude * other)
    }
}

impl Div for &Integer {
    type Output = Integer;

    fn div(self, divisor: Self) -> Self::Output {
        self.div_rem(divisor).0
    }
}

impl Rem for &Integer {
    type Output = Integer;

    fn rem(self, divisor: Self) -> Self::Output {
        self.div_rem(divisor).1
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "", &self.magnitude.to_string())
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Integer {
    type Err = Error;

    /// Decimal, with an optional leading sign.
    fn from_str(s: &str) -> Result<Self> {
        let (negative, digits) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        Ok(Self::new(negative, digits.parse()?))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fixtures::QUICKCHECK_TESTS;
    use quickcheck::{quickcheck, QuickCheck, TestResult};

    #[test]
    fn zero_is_not_negative() {
        assert_eq!(Integer::new(true, Unsigned::zero()), Integer::zero());
        assert_eq!(-Integer::zero(), Integer::zero());
        assert_eq!(&Integer::from(5) - &Integer::from(5), Integer::zero());
        assert!(!(&Integer::from(-5) + &Integer::from(5)).is_negative());
    }

    #[test]
    fn signs() {
        let a = Integer::from(-7);
        let b = Integer::from(3);
        assert_eq!(&a + &b, Integer::from(-4));
        assert_eq!(&b - &a, Integer::from(10));
        assert_eq!(&a * &b, Integer::from(-21));
        assert_eq!(&a / &b, Integer::from(-2));
        assert_eq!(&a % &b, Integer::from(-1));
        assert_eq!(a.abs(), Integer::from(7));
        assert_eq!(a.pow(3), Integer::from(-343));
        assert_eq!(a.pow(2), Integer::from(49));
        assert_eq!(a.signum(), Ordering::Less);
        assert!(a < b);
        assert!(Integer::from(-8) < a);
    }

    #[test]
    fn text() {
        assert_eq!(Integer::from(-12345).to_string(), "-12345");
        assert_eq!("-12345".parse::<Integer>(), Ok(Integer::from(-12345)));
        assert_eq!("+7".parse::<Integer>(), Ok(Integer::from(7)));
        assert_eq!("-0".parse::<Integer>(), Ok(Integer::zero()));
        assert_eq!("-".parse::<Integer>(), Err(Error::Parse));
        assert_eq!(format!("{:+}", Integer::from(3)), "+3");
    }

    #[test]
    fn checked_div_rem() {
        assert_eq!(Integer::from(1).checked_div_rem(&Integer::zero()), None);
    }

    #[test]
    fn agrees_with_i64() {
        fn prop(a: i64, b: i64) -> bool {
            let (x, y) = (Integer::from(a), Integer::from(b));
            let (a, b) = (a as i128, b as i128);
            &x + &y == Integer::from(a + b)
                && &x - &y == Integer::from(a - b)
                && &x * &y == Integer::from(a * b)
                && x.cmp(&y) == a.cmp(&b)
                && (b == 0 || x.div_rem(&y) == (Integer::from(a / b), Integer::from(a % b)))
        }
        quickcheck(prop as fn(i64, i64) -> bool);
    }

    #[test]
    fn truncating_division_of_large_operands() {
        fn prop(x: Integer, y: Integer) -> TestResult {
            if y.is_zero() {
                return TestResult::discard();
            }
            let (quotient, remainder) = x.div_rem(&y);
            TestResult::from_bool(
                &(&quotient * &y) + &remainder == x
                    && remainder.magnitude() < y.magnitude()
                    && (remainder.is_zero() || remainder.is_negative() == x.is_negative())
                    && &(&x + &y) - &y == x
                    && -(-x.clone()) == x,
            )
        }
        QuickCheck::new()
            .tests(QUICKCHECK_TESTS)
            .quickcheck(prop as fn(Integer, Integer) -> TestResult);
    }
}
