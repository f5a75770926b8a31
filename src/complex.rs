//! Complex numbers with real [`Number`] parts.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use num_traits::Float;

use crate::{Error, Number, Result};

/// `re + im·i`, where both parts are real numbers (integer, rational or float).
///
/// Arithmetic keeps exact parts exact. Collapsing a complex number with an
/// exactly zero imaginary part to a real one is the business of
/// [`Number::canonicalize`], so a `Complex` may well have a zero imaginary part.
#[derive(Clone, PartialEq)]
pub struct Complex {
    re: Number,
    im: Number,
}

impl Complex {
    /// Fails with [`Error::NotReal`] if one of the parts is itself complex.
    pub fn new(re: Number, im: Number) -> Result<Self> {
        if re.is_complex() || im.is_complex() {
            return Err(Error::NotReal);
        }
        Ok(Self { re, im })
    }

    /// The caller guarantees both parts are real.
    pub(crate) fn from_parts(re: Number, im: Number) -> Self {
        debug_assert!(!re.is_complex() && !im.is_complex());
        Self { re, im }
    }

    /// The imaginary unit.
    pub fn i() -> Self {
        Self::from_parts(Number::from(0), Number::from(1))
    }

    pub fn one() -> Self {
        Self::from_parts(Number::from(1), Number::from(0))
    }

    pub fn re(&self) -> &Number {
        &self.re
    }

    pub fn im(&self) -> &Number {
        &self.im
    }

    pub fn into_parts(self) -> (Number, Number) {
        (self.re, self.im)
    }

    /// Imaginary part is an exact zero.
    pub fn is_real(&self) -> bool {
        self.im.is_exact_zero()
    }

    pub fn is_exact(&self) -> bool {
        self.re.is_exact() && self.im.is_exact()
    }

    pub fn conj(&self) -> Self {
        Self::from_parts(self.re.clone(), -&self.im)
    }

    /// `|z|`, as a float.
    pub fn norm(&self) -> f64 {
        Float::hypot(self.re.real_f64(), self.im.real_f64())
    }

    /// Exact if both operands are exact; an exact zero divisor is an
    /// [`Error::DivisionByZero`], float parts follow IEEE-754.
    pub fn checked_div(&self, divisor: &Complex) -> Result<Self> {
        let (c, d) = (&divisor.re, &divisor.im);
        let norm = c * c + d * d;
        let re = (&self.re * c + &self.im * d).divide(&norm)?;
        let im = (&self.im * c - &self.re * d).divide(&norm)?;
        Ok(Self::from_parts(re, im))
    }

    /// Integer powers by square-and-multiply; negative exponents invert first.
    pub fn pow(&self, exponent: i64) -> Result<Self> {
        let mut base = if exponent < 0 {
            Self::one().checked_div(self)?
        } else {
            self.clone()
        };
        let mut exponent = exponent.unsigned_abs();
        let mut result = Self::one();
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = &result * &base;
            }
            exponent >>= 1;
            if exponent > 0 {
                base = &base * &base;
            }
        }
        Ok(result)
    }

    /// Principal square root, computed in floating point.
    ///
    /// The branch cut runs along the negative real axis; a negative (or
    /// negative zero) imaginary part selects the lower half plane.
    pub fn sqrt(&self) -> Self {
        let (x, y) = (self.re.real_f64(), self.im.real_f64());
        if y.is_sign_negative() {
            return self.conj().sqrt().conj();
        }
        let r = Float::hypot(x, y);
        Self::from_parts(
            Number::Float(Float::sqrt((r + x) / 2.0)),
            Number::Float(Float::sqrt((r - x) / 2.0)),
        )
    }
}

impl Neg for &Complex {
    type Output = Complex;

    fn neg(self) -> Self::Output {
        Complex::from_parts(-&self.re, -&self.im)
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Self::Output {
        -&self
    }
}

impl Add for &Complex {
    type Output = Complex;

    fn add(self, summand: Self) -> Self::Output {
        Complex::from_parts(&self.re + &summand.re, &self.im + &summand.im)
    }
}

impl Sub for &Complex {
    type Output = Complex;

    fn sub(self, subtrahend: Self) -> Self::Output {
        Complex::from_parts(&self.re - &subtrahend.re, &self.im - &subtrahend.im)
    }
}

// (a + bi)(c + di) = (ac - bd) + (ad + bc)i
impl Mul for &Complex {
    type Output = Complex;

    fn mul(self, other: Self) -> Self::Output {
        let (a, b) = (&self.re, &self.im);
        let (c, d) = (&other.re, &other.im);
        Complex::from_parts(a * c - b * d, a * d + b * c)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.im.is_sign_negative() {
            write!(f, "{}-{}i", self.re, -&self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

impl fmt::Debug for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
