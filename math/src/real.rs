use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::decimal::split_decimal;
use crate::error::ParseError;
use crate::traits::Field;

/// Element of ℝ, approximated by an IEEE 754 double.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, PartialOrd, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Real(pub f64);

impl Real {
    /// Values closer to zero than this are treated as zero.
    pub const EPSILON: f64 = f64::EPSILON;

    pub const ZERO: Self = Self(0.0);
    pub const ONE: Self = Self(1.0);

    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl_newtype_field_ops!(Real);

macro_rules! impl_from_primitive_for_real {
    ($($t:ident),+ $(,)?) => {$(
        impl From<$t> for Real {
            fn from(value: $t) -> Self {
                Self(f64::from(value))
            }
        }
    )+};
}

impl_from_primitive_for_real!(f64, f32, i8, i16, i32, u8, u16, u32);

impl From<Real> for f64 {
    fn from(value: Real) -> Self {
        value.0
    }
}

impl fmt::Display for Real {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // `-0` would otherwise leak out of expressions like `-c / b`.
        if self.0 == 0.0 {
            write!(f, "0")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl Field for Real {
    type Context = ();

    #[inline]
    fn zero(_: ()) -> Self {
        Self::ZERO
    }

    #[inline]
    fn one(_: ()) -> Self {
        Self::ONE
    }

    #[inline]
    fn context(&self) -> Self::Context {}

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.abs() < Self::EPSILON
    }

    #[inline]
    fn is_valid(&self) -> bool {
        !self.0.is_nan()
    }

    fn square_root(&self) -> Vec<Self> {
        if self.is_zero() {
            vec![Self::ZERO]
        } else if self.0 < 0.0 {
            vec![]
        } else {
            let root = self.0.sqrt();
            vec![Self(root), Self(-root)]
        }
    }

    fn parse(input: &str, _: ()) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::Empty);
        }
        match split_decimal(input) {
            Some((value, "")) if value.is_finite() => Ok(Self(value)),
            Some((_, "")) => Err(ParseError::NonFinite(input.to_owned())),
            _ => Err(ParseError::InvalidReal(input.to_owned())),
        }
    }
}
