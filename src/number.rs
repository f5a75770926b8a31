//! The numeric tower: integers, rationals, floats and complex numbers behind
//! one type, with arithmetic that keeps exact results exact.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use core::{fmt, str::FromStr};
use core::ops::{Add, Mul, Neg, Sub};

use num_traits::Float;

use crate::numbers::{One, Zero};
use crate::{Complex, Error, Integer, Rational, Result, Unsigned};

/// A number of any kind.
///
/// Every operation on `Number` returns a canonical result: no [`Rational`]
/// with denominator one and no [`Complex`] with an exactly zero imaginary part
/// (see [`Number::canonicalize`]). Values built directly from the variants
/// need not be canonical.
///
/// Equality is structural: `Integer(2)` and `Float(2.0)` are different numbers.
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(Integer),
    Rational(Rational),
    Float(f64),
    Complex(Box<Complex>),
}

/// Both operands of a binary operation, promoted to their common kind.
enum Pair<'a> {
    Integers(&'a Integer, &'a Integer),
    Rationals(Cow<'a, Rational>, Cow<'a, Rational>),
    Floats(f64, f64),
    Complexes(Cow<'a, Complex>, Cow<'a, Complex>),
}

impl<'a> Pair<'a> {
    /// Complex beats float beats rational beats integer.
    fn promote(a: &'a Number, b: &'a Number) -> Self {
        match (a, b) {
            (Number::Complex(_), _) | (_, Number::Complex(_)) => {
                Pair::Complexes(a.to_complex(), b.to_complex())
            }
            (Number::Float(x), y) => Pair::Floats(*x, y.real_f64()),
            (x, Number::Float(y)) => Pair::Floats(x.real_f64(), *y),
            (Number::Integer(x), Number::Integer(y)) => Pair::Integers(x, y),
            (Number::Rational(x), Number::Rational(y)) => {
                Pair::Rationals(Cow::Borrowed(x), Cow::Borrowed(y))
            }
            (Number::Rational(x), Number::Integer(y)) => {
                Pair::Rationals(Cow::Borrowed(x), Cow::Owned(Rational::from(y.clone())))
            }
            (Number::Integer(x), Number::Rational(y)) => {
                Pair::Rationals(Cow::Owned(Rational::from(x.clone())), Cow::Borrowed(y))
            }
        }
    }
}

/// Reduce `x` to its simplest representation, see [`Number::canonicalize`].
pub fn canonicalize(x: Number) -> Number {
    x.canonicalize()
}

/// Exact quotient `a / b` in lowest terms, an [`Integer`] if `b` divides `a`.
///
/// Fails with [`Error::DivisionByZero`] for `b == 0`.
pub fn divide(a: &Integer, b: &Integer) -> Result<Number> {
    let quotient = Rational::new(a.clone(), b.clone())?;
    Ok(Number::Rational(quotient).canonicalize())
}

impl Number {
    /// Collapse a rational with denominator one to its numerator, and a
    /// complex number with an *exactly* zero imaginary part to its real part.
    ///
    /// A float `0.0` imaginary part is not exact, such numbers stay complex.
    /// Idempotent.
    pub fn canonicalize(self) -> Number {
        match self {
            Number::Rational(rational) if rational.is_integer() => {
                Number::Integer(rational.into_parts().0)
            }
            Number::Complex(complex) => {
                let (re, im) = (*complex).into_parts();
                let (re, im) = (re.canonicalize(), im.canonicalize());
                if im.is_exact_zero() {
                    re
                } else {
                    Number::Complex(Box::new(Complex::from_parts(re, im)))
                }
            }
            x => x,
        }
    }

    /// `self / divisor`.
    ///
    /// Exact operands give exact results, and an exact zero divisor is an
    /// [`Error::DivisionByZero`]. Float operands follow IEEE-754 instead.
    pub fn divide(&self, divisor: &Number) -> Result<Number> {
        let quotient = match Pair::promote(self, divisor) {
            Pair::Integers(a, b) => divide(a, b)?,
            Pair::Rationals(a, b) => Number::Rational(a.checked_div(&b)?),
            Pair::Floats(a, b) => Number::Float(a / b),
            Pair::Complexes(a, b) => Number::from(a.checked_div(&b)?),
        };
        Ok(quotient.canonicalize())
    }

    /// Integer powers. Negative powers of exact zero are a division by zero.
    pub fn pow(&self, exponent: i64) -> Result<Number> {
        let power = match self {
            Number::Integer(integer) if exponent >= 0 => {
                Number::Integer(integer.pow(exponent.unsigned_abs()))
            }
            Number::Integer(integer) => {
                Number::Rational(Rational::from(integer.clone()).pow(exponent)?)
            }
            Number::Rational(rational) => Number::Rational(rational.pow(exponent)?),
            Number::Float(x) => Number::Float(Float::powf(*x, exponent as f64)),
            Number::Complex(complex) => Number::from(complex.pow(exponent)?),
        };
        Ok(power.canonicalize())
    }

    /// See [`crate::sqrt`].
    pub fn sqrt(&self) -> Number {
        crate::sqrt(self)
    }

    /// See [`crate::rsqrt`].
    pub fn rsqrt(&self) -> Result<Number> {
        crate::rsqrt(self)
    }

    /// Nearest `f64` of a real number, `None` for complex numbers.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Number::Integer(integer) => Some(integer.to_f64()),
            Number::Rational(rational) => Some(rational.to_f64()),
            Number::Float(x) => Some(*x),
            Number::Complex(_) => None,
        }
    }

    /// Integers, rationals, and complex numbers with exact parts.
    pub fn is_exact(&self) -> bool {
        match self {
            Number::Integer(_) | Number::Rational(_) => true,
            Number::Float(_) => false,
            Number::Complex(complex) => complex.is_exact(),
        }
    }

    pub fn is_nan(&self) -> bool {
        match self {
            Number::Float(x) => x.is_nan(),
            Number::Complex(complex) => complex.re().is_nan() || complex.im().is_nan(),
            _ => false,
        }
    }

    /// Strictly below zero; complex numbers are never negative.
    pub fn is_negative(&self) -> bool {
        match self {
            Number::Integer(integer) => integer.is_negative(),
            Number::Rational(rational) => rational.is_negative(),
            Number::Float(x) => *x < 0.0,
            Number::Complex(_) => false,
        }
    }

    /// Exact zero, or a float zero of either sign.
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Float(x) => *x == 0.0,
            Number::Complex(complex) => complex.re().is_zero() && complex.im().is_zero(),
            _ => self.is_exact_zero(),
        }
    }

    pub fn is_complex(&self) -> bool {
        matches!(self, Number::Complex(_))
    }

    pub(crate) fn is_exact_zero(&self) -> bool {
        match self {
            Number::Integer(integer) => integer.is_zero(),
            Number::Rational(rational) => rational.is_zero(),
            _ => false,
        }
    }

    /// Negative, including a float `-0.0`.
    pub(crate) fn is_sign_negative(&self) -> bool {
        match self {
            Number::Float(x) => x.is_sign_negative(),
            _ => self.is_negative(),
        }
    }

    /// Float value of a real number; only called on real numbers.
    pub(crate) fn real_f64(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    fn to_complex(&self) -> Cow<'_, Complex> {
        match self {
            Number::Complex(complex) => Cow::Borrowed(&**complex),
            real => Cow::Owned(Complex::from_parts(real.clone(), Number::zero())),
        }
    }
}

impl Zero for Number {
    fn zero() -> Self {
        Number::Integer(Integer::zero())
    }

    fn is_zero(&self) -> bool {
        Number::is_zero(self)
    }
}

impl One for Number {
    fn one() -> Self {
        Number::Integer(Integer::one())
    }
}

impl Neg for &Number {
    type Output = Number;

    fn neg(self) -> Self::Output {
        match self {
            Number::Integer(integer) => Number::Integer(-integer),
            Number::Rational(rational) => Number::Rational(-rational),
            Number::Float(x) => Number::Float(-x),
            Number::Complex(complex) => Number::from(-&**complex),
        }
        .canonicalize()
    }
}

impl Neg for Number {
    type Output = Number;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl Add for &Number {
    type Output = Number;

    fn add(self, summand: Self) -> Self::Output {
        match Pair::promote(self, summand) {
            Pair::Integers(a, b) => Number::Integer(a + b),
            Pair::Rationals(a, b) => Number::Rational(&*a + &*b),
            Pair::Floats(a, b) => Number::Float(a + b),
            Pair::Complexes(a, b) => Number::from(&*a + &*b),
        }
        .canonicalize()
    }
}

impl Sub for &Number {
    type Output = Number;

    fn sub(self, subtrahend: Self) -> Self::Output {
        match Pair::promote(self, subtrahend) {
            Pair::Integers(a, b) => Number::Integer(a - b),
            Pair::Rationals(a, b) => Number::Rational(&*a - &*b),
            Pair::Floats(a, b) => Number::Float(a - b),
            Pair::Complexes(a, b) => Number::from(&*a - &*b),
        }
        .canonicalize()
    }
}

impl Mul for &Number {
    type Output = Number;

    fn mul(self, other: Self) -> Self::Output {
        match Pair::promote(self, other) {
            Pair::Integers(a, b) => Number::Integer(a * b),
            Pair::Rationals(a, b) => Number::Rational(&*a * &*b),
            Pair::Floats(a, b) => Number::Float(a * b),
            Pair::Complexes(a, b) => Number::from(&*a * &*b),
        }
        .canonicalize()
    }
}

macro_rules! forward_owned_binop {
    ($($trait:ident, $method:ident;)*) => {
        $(
            impl $trait for Number {
                type Output = Number;

                fn $method(self, other: Self) -> Self::Output {
                    (&self).$method(&other)
                }
            }
        )*
    };
}

forward_owned_binop! {
    Add, add;
    Sub, sub;
    Mul, mul;
}

macro_rules! from_integer {
    ($($primitive:ty),*) => {
        $(
            impl From<$primitive> for Number {
                fn from(value: $primitive) -> Self {
                    Number::Integer(Integer::from(value))
                }
            }
        )*
    };
}

from_integer!(i32, u32, i64, u64, i128, u128);

impl From<Unsigned> for Number {
    fn from(value: Unsigned) -> Self {
        Number::Integer(Integer::from(value))
    }
}

impl From<Integer> for Number {
    fn from(integer: Integer) -> Self {
        Number::Integer(integer)
    }
}

impl From<Rational> for Number {
    fn from(rational: Rational) -> Self {
        Number::Rational(rational)
    }
}

impl From<f64> for Number {
    fn from(x: f64) -> Self {
        Number::Float(x)
    }
}

impl From<Complex> for Number {
    fn from(complex: Complex) -> Self {
        Number::Complex(Box::new(complex))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(integer) => fmt::Display::fmt(integer, f),
            Number::Rational(rational) => fmt::Display::fmt(rational, f),
            // keeps the `.0` of integral floats
            Number::Float(x) => fmt::Debug::fmt(x, f),
            Number::Complex(complex) => fmt::Display::fmt(complex, f),
        }
    }
}

impl FromStr for Number {
    type Err = Error;

    /// Integers (`"-12"`), rationals (`"-4/9"`) and floats (`"1.5e3"`),
    /// canonicalized.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.contains('/') {
            return Ok(Number::Rational(s.parse()?).canonicalize());
        }
        if let Ok(integer) = s.parse::<Integer>() {
            return Ok(Number::Integer(integer));
        }
        s.parse::<f64>().map(Number::Float).map_err(|_| Error::Parse)
    }
}
