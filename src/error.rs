use std::error;
use std::fmt;
use std::result;

/// Errors surfaced by the fallible collection operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// A required element was requested from an empty collection.
    EmptyCollection,
    /// An index fell outside the valid range `min..=max` of an indexed collection.
    OutOfBounds { index: isize, min: isize, max: isize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyCollection => write!(f, "collection is empty"),
            Error::OutOfBounds { index, min, max } => {
                write!(f, "index {} outside of bounds ({}:{})", index, min, max)
            },
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
