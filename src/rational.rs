//! Exact fractions.

use core::convert::TryFrom;
use core::{cmp::Ordering, fmt, str::FromStr};
use core::ops::{Add, Mul, Neg, Sub};

use crate::numbers::{scale_by_pow2, NonZero};
use crate::{Error, Integer, Result, Unsigned};

/// Ratio of two integers, always in lowest terms.
///
/// The sign lives in the numerator, the denominator is a positive [`NonZero`].
/// A rational with denominator one is still a rational: collapsing it to an
/// integer is the business of [`canonicalize`][crate::canonicalize].
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct Rational {
    numerator: Integer,
    denominator: NonZero,
}

impl Rational {
    /// `numerator / denominator`, reduced.
    ///
    /// Fails with [`Error::DivisionByZero`] for a zero denominator.
    pub fn new(numerator: Integer, denominator: Integer) -> Result<Self> {
        let (negative, denominator) = denominator.into_parts();
        let denominator = NonZero::try_from(denominator)?;
        let numerator = if negative { -numerator } else { numerator };
        Ok(Self::reduced(numerator, denominator))
    }

    pub fn from_integer(integer: Integer) -> Self {
        Self { numerator: integer, denominator: NonZero::one() }
    }

    pub(crate) fn reduced(numerator: Integer, denominator: NonZero) -> Self {
        // gcd(n, d) divides d != 0, so it is non-zero itself
        let divisor = NonZero::new_unchecked(numerator.magnitude().gcd(&denominator));
        if divisor.is_one() {
            return Self { numerator, denominator };
        }
        let (negative, magnitude) = numerator.into_parts();
        Self {
            numerator: Integer::new(negative, &magnitude / &divisor),
            denominator: NonZero::new_unchecked(&*denominator / &divisor),
        }
    }

    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    pub fn denominator(&self) -> &NonZero {
        &self.denominator
    }

    pub fn into_parts(self) -> (Integer, NonZero) {
        (self.numerator, self.denominator)
    }

    pub fn is_integer(&self) -> bool {
        self.denominator.is_one()
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.numerator.is_negative()
    }

    pub fn abs(&self) -> Self {
        Self { numerator: self.numerator.abs(), denominator: self.denominator.clone() }
    }

    /// `1 / self`, fails for zero.
    pub fn recip(&self) -> Result<Self> {
        let (negative, magnitude) = self.numerator.clone().into_parts();
        let denominator = NonZero::try_from(magnitude)?;
        let numerator = Integer::new(negative, self.denominator.as_unsigned().clone());
        // swapping numerator and denominator keeps the fraction reduced
        Ok(Self { numerator, denominator })
    }

    pub fn checked_div(&self, divisor: &Rational) -> Result<Self> {
        Ok(self * &divisor.recip()?)
    }

    /// Integer powers; negative exponents invert, which fails for zero.
    pub fn pow(&self, exponent: i64) -> Result<Self> {
        let base = if exponent < 0 { self.recip()? } else { self.clone() };
        let exponent = exponent.unsigned_abs();
        // powers of coprime numbers are coprime
        Ok(Self {
            numerator: base.numerator.pow(exponent),
            denominator: NonZero::new_unchecked(base.denominator.pow(exponent)),
        })
    }

    /// Nearest `f64` (up to one rounding of the quotient), also for numerators
    /// and denominators far outside the `f64` range.
    pub fn to_f64(&self) -> f64 {
        let numerator = self.numerator.magnitude();
        let denominator: &Unsigned = &self.denominator;
        if numerator.is_zero() {
            return 0.0;
        }

        // scale so that the integer quotient carries 64 significant bits
        let shift = denominator.bits() as i64 - numerator.bits() as i64 + 64;
        let quotient = if shift >= 0 {
            &(numerator << shift as usize) / denominator
        } else {
            numerator / &(denominator << (-shift) as usize)
        };
        let magnitude = scale_by_pow2(quotient.to_f64(), -shift);
        if self.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    }
}

impl From<Integer> for Rational {
    fn from(integer: Integer) -> Self {
        Self::from_integer(integer)
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = &self.numerator * other.denominator.as_unsigned();
        let rhs = &other.numerator * self.denominator.as_unsigned();
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational { numerator: -&self.numerator, denominator: self.denominator.clone() }
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational { numerator: -self.numerator, denominator: self.denominator }
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, summand: Self) -> Self::Output {
        let lhs = &self.numerator * summand.denominator.as_unsigned();
        let rhs = &summand.numerator * self.denominator.as_unsigned();
        Rational::reduced(&lhs + &rhs, product(&self.denominator, &summand.denominator))
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, subtrahend: Self) -> Self::Output {
        self + &-subtrahend
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, other: Self) -> Self::Output {
        Rational::reduced(
            &self.numerator * &other.numerator,
            product(&self.denominator, &other.denominator),
        )
    }
}

fn product(a: &NonZero, b: &NonZero) -> NonZero {
    NonZero::new_unchecked(a.as_unsigned() * b.as_unsigned())
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Rational {
    type Err = Error;

    /// `"n/d"` or `"n"`; a zero denominator is a [`Error::DivisionByZero`].
    fn from_str(s: &str) -> Result<Self> {
        match s.split_once('/') {
            Some((numerator, denominator)) => {
                Rational::new(numerator.trim().parse()?, denominator.trim().parse()?)
            }
            None => Ok(Rational::from_integer(s.trim().parse()?)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck::{quickcheck, TestResult};

    fn ratio(n: i64, d: i64) -> Rational {
        Rational::new(Integer::from(n), Integer::from(d)).unwrap()
    }

    #[test]
    fn lowest_terms() {
        let r = ratio(6, -4);
        assert_eq!(r.numerator(), &Integer::from(-3));
        assert_eq!(r.denominator().as_unsigned(), &Unsigned::from(2u32));
        assert_eq!(ratio(0, -5), Rational::from(Integer::zero()));
        assert!(ratio(4, 2).is_integer());
    }

    #[test]
    fn zero_denominator() {
        assert_eq!(
            Rational::new(Integer::one(), Integer::zero()).err(),
            Some(Error::DivisionByZero)
        );
        assert_eq!(ratio(0, 1).recip().err(), Some(Error::DivisionByZero));
        assert_eq!("1/0".parse::<Rational>().err(), Some(Error::DivisionByZero));
    }

    #[test]
    fn arithmetic() {
        let a = ratio(1, 6);
        let b = ratio(-1, 3);
        assert_eq!(&a + &b, ratio(-1, 6));
        assert_eq!(&a - &b, ratio(1, 2));
        assert_eq!(&a * &b, ratio(-1, 18));
        assert_eq!(a.checked_div(&b), Ok(ratio(-1, 2)));
        assert_eq!(b.pow(-3), Ok(ratio(-27, 1)));
        assert_eq!(b.pow(0), Ok(ratio(1, 1)));
        assert!(b < a);
        assert_eq!(-&a, ratio(-1, 6));
    }

    #[test]
    fn to_f64() {
        assert_eq!(ratio(1, 4).to_f64(), 0.25);
        assert_eq!(ratio(-2, 3).to_f64(), -2.0 / 3.0);
        assert_eq!(ratio(0, 3).to_f64(), 0.0);

        // both parts overflow f64, the quotient does not
        let huge = Integer::from(Unsigned::from(3u32).pow(1000));
        let r = Rational::new(&(&huge * &Integer::from(2)) + &Integer::one(), huge.clone()).unwrap();
        assert_eq!(r.to_f64(), 2.0);
        let r = Rational::new(huge.clone(), &(&huge * &Integer::from(8)) + &Integer::one()).unwrap();
        assert_eq!(r.to_f64(), 0.125);
    }

    #[test]
    fn text() {
        assert_eq!(ratio(-4, 9).to_string(), "-4/9");
        assert_eq!("-4/9".parse::<Rational>(), Ok(ratio(-4, 9)));
        assert_eq!("6/-4".parse::<Rational>(), Ok(ratio(-3, 2)));
        assert_eq!("7".parse::<Rational>(), Ok(ratio(7, 1)));
        assert_eq!("7/".parse::<Rational>(), Err(Error::Parse));
    }

    #[test]
    fn always_reduced() {
        fn prop(n: i64, d: i64) -> TestResult {
            if d == 0 {
                return TestResult::discard();
            }
            let r = ratio(n, d);
            let gcd = r.numerator().magnitude().gcd(r.denominator());
            TestResult::from_bool(gcd.is_one() || (n == 0 && r.denominator().is_one()))
        }
        quickcheck(prop as fn(i64, i64) -> TestResult);
    }
}
