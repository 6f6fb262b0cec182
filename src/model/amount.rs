//! Numeric quantities interpolated into paths and payloads.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A gigabyte or bandwidth quantity.
///
/// Integers and floats are kept apart because some operations accept only
/// whole numbers. `Whole` renders without a decimal point. `Fractional`
/// renders in plain decimal notation, never with an exponent, and always
/// keeps a decimal point (`2.5`, `3.0`, `0.00005`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    Whole(i64),
    Fractional(f64),
}

impl Amount {
    pub fn is_whole(&self) -> bool {
        matches!(self, Amount::Whole(_))
    }

    /// Strictly greater than zero and finite.
    pub fn is_positive(&self) -> bool {
        match *self {
            Amount::Whole(n) => n > 0,
            Amount::Fractional(x) => x.is_finite() && x > 0.0,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Whole(n) => write!(f, "{}", n),
            // f64's Display is plain decimal but drops ".0" on integral values.
            Amount::Fractional(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{}.0", x),
            Amount::Fractional(x) => write!(f, "{}", x),
        }
    }
}

impl FromStr for Amount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if looks_integral(s) {
            return s
                .parse::<i64>()
                .map(Amount::Whole)
                .map_err(|_| Error::invalid(format!("'{}' is too large.", s)));
        }
        match s.parse::<f64>() {
            Ok(x) if x.is_finite() => Ok(Amount::Fractional(x)),
            _ => Err(Error::invalid(format!("'{}' is not a number.", s))),
        }
    }
}

/// An optional sign followed by ASCII digits only.
fn looks_integral(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Amount::Whole(n) => serializer.serialize_i64(n),
            Amount::Fractional(x) => serializer.serialize_f64(x),
        }
    }
}

macro_rules! whole_from {
    ($($t:ty),+) => {
        $(impl From<$t> for Amount {
            fn from(n: $t) -> Self {
                Amount::Whole(i64::from(n))
            }
        })+
    };
}

whole_from!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! whole_try_from {
    ($($t:ty),+) => {
        $(impl TryFrom<$t> for Amount {
            type Error = Error;

            fn try_from(n: $t) -> Result<Self, Self::Error> {
                i64::try_from(n)
                    .map(Amount::Whole)
                    .map_err(|_| Error::invalid(format!("'{}' is too large.", n)))
            }
        })+
    };
}

whole_try_from!(u64, usize, i128, u128);

impl From<f64> for Amount {
    fn from(x: f64) -> Self {
        Amount::Fractional(x)
    }
}
