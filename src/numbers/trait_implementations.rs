use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::{cmp::Ordering, fmt, ops::Deref, str::FromStr};

use super::{NonZero, Unsigned};
use crate::digit::Digit;
use crate::{Error, Result};

// Read-only: mutable access to the digits could break normalization.
impl Deref for Unsigned {
    type Target = [Digit];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Deref for NonZero {
    type Target = Unsigned;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<NonZero> for Unsigned {
    fn from(non_zero: NonZero) -> Self {
        non_zero.0
    }
}

impl From<u32> for Unsigned {
    fn from(value: u32) -> Self {
        Self::from_u128(value as u128)
    }
}

impl From<u64> for Unsigned {
    fn from(value: u64) -> Self {
        Self::from_u128(value as u128)
    }
}

impl From<u128> for Unsigned {
    fn from(value: u128) -> Self {
        Self::from_u128(value)
    }
}

/// This is *little endian* ordering, as opposed to the default
/// ordering on slices! Both sides may carry high zero digits.
pub(crate) fn cmp_digits(m: &[Digit], n: &[Digit]) -> Ordering {
    let significant = |x: &[Digit]| x.iter().rposition(|&digit| digit != 0).map_or(0, |i| i + 1);
    let l_m = significant(m);
    let l_n = significant(n);
    match l_m.cmp(&l_n) {
        Ordering::Equal => {}
        not_equal => return not_equal,
    }

    for i in (0..l_m).rev() {
        match m[i].cmp(&n[i]) {
            Ordering::Equal => (),
            not_equal => return not_equal,
        }
    }
    Ordering::Equal
}

// Since we store little-endian, comparison needs to start at the last
// digit, instead of at the first as the derived / default implementation would.
impl Ord for Unsigned {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_digits(self, other)
    }
}

impl PartialOrd for Unsigned {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Unsigned {
    /// Big-endian hex, independent of the digit width.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.to_be_bytes();

        #[cfg(feature = "hex-debug")]
        {
            write!(f, "0x{}", delog::hex_str!(bytes.as_slice()))
        }

        #[cfg(not(feature = "hex-debug"))]
        {
            f.write_str("0x")?;
            for byte in bytes.iter() {
                write!(f, "{:02X}", byte)?;
            }
            Ok(())
        }
    }
}

impl fmt::Debug for NonZero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

/// Largest power of ten in a `u32` digit, which every digit width can hold.
const DECIMAL_CHUNK: Digit = 1_000_000_000;
const DECIMAL_CHUNK_DIGITS: usize = 9;

impl fmt::Display for Unsigned {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut chunks = Vec::new();
        let mut x = self.clone();
        while !x.is_zero() {
            let chunk = crate::arithmetic::divide::div_rem_assign_digit(&mut x.0, DECIMAL_CHUNK);
            x.normalize();
            chunks.push(chunk);
        }

        let mut decimal = String::with_capacity(chunks.len() * DECIMAL_CHUNK_DIGITS + 1);
        match chunks.split_last() {
            None => decimal.push('0'),
            Some((leading, rest)) => {
                decimal.push_str(&leading.to_string());
                for chunk in rest.iter().rev() {
                    decimal.push_str(&format!("{:09}", chunk));
                }
            }
        }
        f.pad_integral(true, "", &decimal)
    }
}

impl fmt::Display for NonZero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Unsigned {
    type Err = Error;

    /// Plain decimal digits, `_` separators allowed.
    fn from_str(s: &str) -> Result<Self> {
        let digits: Vec<u8> = s.bytes().filter(|&byte| byte != b'_').collect();
        if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
            return Err(Error::Parse);
        }

        let mut x = Unsigned::zero();
        for chunk in digits.chunks(DECIMAL_CHUNK_DIGITS) {
            let value = chunk.iter().fold(0 as Digit, |value, &byte| value * 10 + (byte - b'0') as Digit);
            let scale = (10 as Digit).pow(chunk.len() as u32);
            x.mul_add_digit(scale, value);
        }
        Ok(x)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ordering() {
        let small = Unsigned::from(u64::MAX);
        let large = Unsigned::from(1u128 << 64);
        assert!(small < large);
        assert!(large > small);
        assert_eq!(small.cmp(&small.clone()), Ordering::Equal);
        assert!(Unsigned::zero() < Unsigned::one());

        assert_eq!(cmp_digits(&[1, 2, 0, 0], &[1, 2]), Ordering::Equal);
        assert_eq!(cmp_digits(&[0, 3], &[5, 2, 0]), Ordering::Greater);
    }

    #[test]
    fn display() {
        assert_eq!(Unsigned::zero().to_string(), "0");
        assert_eq!(Unsigned::from(1_000_000_000u64).to_string(), "1000000000");
        assert_eq!(Unsigned::from(u128::MAX).to_string(), u128::MAX.to_string());
        assert_eq!(format!("{:>5}", Unsigned::from(42u32)), "   42");
    }

    #[test]
    fn from_str() {
        assert_eq!("0".parse::<Unsigned>(), Ok(Unsigned::zero()));
        assert_eq!("000123".parse::<Unsigned>(), Ok(Unsigned::from(123u32)));
        assert_eq!(
            "340282366920938463463374607431768211455".parse::<Unsigned>(),
            Ok(Unsigned::from(u128::MAX))
        );
        assert_eq!("1_000".parse::<Unsigned>(), Ok(Unsigned::from(1000u32)));
        assert_eq!("".parse::<Unsigned>(), Err(Error::Parse));
        assert_eq!("-1".parse::<Unsigned>(), Err(Error::Parse));
        assert_eq!("12a".parse::<Unsigned>(), Err(Error::Parse));
    }

    #[test]
    fn debug() {
        let x = Unsigned::from(0xFEDC_BA98_7654_3210u64);
        let debug = format!("{:?}", x);
        assert!(debug.starts_with("0x"));
        assert!(debug.to_uppercase().contains("FE"));
    }
}
