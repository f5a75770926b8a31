//! Square roots that stay exact whenever the root is exact.
//!
//! The integer root is computed 16 bits at a time from the 32-bit digit groups
//! of the radicand, schoolbook style: `main` is the running remainder and
//! `side` twice the partial root, both shifted into place for the next group.
//! Floats only seed the estimate of each 16-bit chunk, the exact correction
//! loop that follows makes sure rounding never reaches the result.

use alloc::vec::{self, Vec};
use core::cmp;

use log::{debug, trace};
use num_traits::Float;

use crate::numbers::scale_by_pow2;
use crate::{Complex, Error, NonZero, Number, Rational, Result, Unsigned};

/// Big-endian 32-bit groups of an [`Unsigned`], at least one (zero is `[0]`).
///
/// Independent of the machine [`Digit`][crate::Digit] width.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DigitGroups(Vec<u32>);

impl DigitGroups {
    pub fn new(a: &Unsigned) -> Self {
        let count = cmp::max(1, (a.bits() + 31) / 32);
        Self((0..count).rev().map(|index| a.limb32(index)).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }
}

impl From<&Unsigned> for DigitGroups {
    fn from(a: &Unsigned) -> Self {
        Self::new(a)
    }
}

impl IntoIterator for DigitGroups {
    type Item = u32;
    type IntoIter = vec::IntoIter<u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a DigitGroups {
    type Item = &'a u32;
    type IntoIter = core::slice::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// The square root of `a`, if `a` is a perfect square.
pub fn exact_sqrt(a: &Unsigned) -> Option<Unsigned> {
    let (root, remainder) = sqrt_rem(a);
    if remainder.is_zero() {
        Some(root)
    } else {
        None
    }
}

/// `(s, a - s²)` for the integer square root `s = floor(√a)`.
fn sqrt_rem(a: &Unsigned) -> (Unsigned, Unsigned) {
    let mut main = Unsigned::zero();
    let mut side = Unsigned::zero();
    let mut answer = Unsigned::zero();

    for group in DigitGroups::new(a) {
        main = (main << 32) + &Unsigned::from(group);
        side <<= 16;

        let mut applo = estimate(&main, &side, &answer);
        let product = loop {
            let product = &(&side + &applo) * &applo;
            if product <= main {
                break product;
            }
            applo -= &Unsigned::one();
        };

        main -= &product;
        answer = (answer << 16) + &applo;
        side += &(applo << 1);
        trace!("group {:08x}: root so far {:?}", group, answer);
    }

    (answer, main)
}

/// An upper bound for the next 16-bit chunk of the root, usually exact or one off.
fn estimate(main: &Unsigned, side: &Unsigned, answer: &Unsigned) -> Unsigned {
    if answer.is_zero() {
        // the first group, main < 2^32
        let root = Float::floor(Float::sqrt(main.to_f64())) as u64;
        return Unsigned::from(root + 1);
    }

    let side_squared = side * side;
    if (main << 2) < side_squared {
        return main / side;
    }

    // only for tiny roots so far, where every value is exact as f64
    let (main, side) = (main.to_f64(), side.to_f64());
    let chunk = Float::floor((Float::sqrt(side * side + 4.0 * main) - side) / 2.0) as u64;
    Unsigned::from(chunk + 1)
}

/// Float square root, also for radicands beyond the `f64` range.
fn float_sqrt(a: &Unsigned) -> f64 {
    const MAX_BITS: usize = 1000;

    let bits = a.bits();
    if bits <= MAX_BITS {
        return Float::sqrt(a.to_f64());
    }
    // sqrt(a) = sqrt(a / 2^2k) * 2^k
    let half_shift = (bits - MAX_BITS + 1) / 2;
    let scaled = Float::sqrt((a >> (2 * half_shift)).to_f64());
    scale_by_pow2(scaled, half_shift as i64)
}

/// Square root of an integer magnitude: exact if it is a perfect square,
/// a float otherwise.
fn integer_sqrt(a: &Unsigned) -> Number {
    match exact_sqrt(a) {
        Some(root) => Number::from(root),
        None => {
            debug!("{}-bit radicand is not a perfect square, taking the float root", a.bits());
            Number::Float(float_sqrt(a))
        }
    }
}

/// Square root of `|a|`: exact if numerator and denominator are perfect squares.
fn rational_sqrt(a: &Rational) -> Number {
    let numerator = integer_sqrt(a.numerator().magnitude());
    let denominator = integer_sqrt(a.denominator());
    match (numerator, denominator) {
        // roots of coprime squares are coprime, and the root of a non-zero is non-zero
        (Number::Integer(numerator), Number::Integer(denominator)) => {
            let denominator = NonZero::new_unchecked(denominator.into_parts().1);
            Number::Rational(Rational::reduced(numerator, denominator)).canonicalize()
        }
        (numerator, denominator) => Number::Float(numerator.real_f64() / denominator.real_f64()),
    }
}

/// `root` for a non-negative radicand, `root·i` for a negative one.
fn signed_root(negative: bool, root: Number) -> Number {
    if negative {
        Number::from(Complex::from_parts(Number::from(0), root)).canonicalize()
    } else {
        root
    }
}

/// Square root of a non-negative real number.
///
/// - integers: the exact root of perfect squares, a float otherwise;
/// - rationals `n/d`: `rsqrt(n) / rsqrt(d)`, exact if both are perfect squares,
///   otherwise only as precise as the float roots involved;
/// - floats: `f64::sqrt`.
///
/// Negative and complex numbers are an [`Error::Domain`], see [`sqrt`] for
/// the total version.
pub fn rsqrt(a: &Number) -> Result<Number> {
    match a {
        Number::Complex(_) => Err(Error::Domain),
        negative if negative.is_negative() => Err(Error::Domain),
        Number::Integer(integer) => Ok(integer_sqrt(integer.magnitude())),
        Number::Rational(rational) => Ok(rational_sqrt(rational)),
        Number::Float(x) => Ok(Number::Float(Float::sqrt(*x))),
    }
}

/// Square root of any number, canonicalized.
///
/// - complex numbers: the principal root, in floating point;
/// - NaN: itself;
/// - non-negative reals: [`rsqrt`];
/// - negative reals: `rsqrt(-a)·i`, exact if `rsqrt(-a)` is.
pub fn sqrt(a: &Number) -> Number {
    match a {
        Number::Complex(complex) => Number::from(complex.sqrt()).canonicalize(),
        Number::Float(x) if x.is_nan() => a.clone(),
        Number::Float(x) if *x < 0.0 => signed_root(true, Number::Float(Float::sqrt(-x))),
        Number::Float(x) => Number::Float(Float::sqrt(*x)),
        Number::Integer(integer) => {
            signed_root(integer.is_negative(), integer_sqrt(integer.magnitude()))
        }
        Number::Rational(rational) => signed_root(rational.is_negative(), rational_sqrt(rational)),
    }
}
