//! Test vectors and generators shared by the unit tests.

use hex_literal::hex;
use quickcheck::{Arbitrary, Gen};

use crate::digit::Digit;
use crate::{Integer, Unsigned};

pub const N1: Digit = Digit::MAX;
pub const N2: Digit = Digit::MAX - 1;
pub const M: Digit = Digit::MAX;

#[cfg(not(feature = "extended-testing"))]
pub const QUICKCHECK_TESTS: u64 = 100;
#[cfg(feature = "extended-testing")]
pub const QUICKCHECK_TESTS: u64 = 10_000;

/// A 256 bit number, big-endian.
pub const ROOT_256: [u8; 32] = hex!("
    c3a5c85c97cb3127b4e5f7a1e1d0f0a5
    d5c86e2b91c8d5f6a3b2c1d0e9f8a7b6
");

/// `ROOT_256²`, big-endian.
pub const SQUARE_512: [u8; 64] = hex!("
    9585fa98f36c077acba03c2702b8bb63
    f9773d45e8270c7ede00d8ee259337a9
    88da6eef18ede9041abd3317cac4125b
    2c414421cc8bdc68f3df868eaa7ef564
");

impl Arbitrary for Unsigned {
    fn arbitrary(g: &mut Gen) -> Self {
        Unsigned::from_vec(Vec::<Digit>::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Unsigned::from_vec))
    }
}

impl Arbitrary for Integer {
    fn arbitrary(g: &mut Gen) -> Self {
        Integer::new(bool::arbitrary(g), Unsigned::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let negative = self.is_negative();
        Box::new(self.magnitude().shrink().map(move |magnitude| Integer::new(negative, magnitude)))
    }
}
