use core::fmt;

/// The ways an exact computation can refuse to produce a number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Exact division by an exact zero.
    DivisionByZero,
    /// Real square root of a negative or complex value.
    Domain,
    /// A complex number needs real parts.
    NotReal,
    /// Text that is not a number.
    Parse,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::DivisionByZero => "division by zero",
            Error::Domain => "square root argument out of domain",
            Error::NotReal => "complex parts must be real",
            Error::Parse => "invalid number literal",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;
