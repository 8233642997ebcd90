use std::fmt::Debug;
use std::fmt::Display;
use std::ops::Add;
use std::ops::Div;
use std::ops::Mul;
use std::ops::Neg;
use std::ops::Sub;

use crate::error::ParseError;

pub trait ModPow {
    #[must_use]
    fn mod_pow(&self, exp: u32) -> Self;
}

pub trait Inverse
where
    Self: Sized,
{
    /// Multiplicative inverse.
    ///
    /// # Panics
    /// Panics when called on zero.
    fn inverse(&self) -> Self;
}

/// Arithmetic that every coefficient field has to supply.
///
/// Equation solving is written against this trait only. Constants other than
/// zero and one are never needed: `2a` is `a + a` and `4ac` is obtained by
/// doubling twice, which keeps the trait free of field-specific literals.
///
/// Fields whose elements depend on a runtime parameter (the modulus of ℤ/pℤ)
/// carry it as [`Field::Context`]; for the floating fields it is `()`.
pub trait Field:
    Copy
    + Debug
    + Display
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    type Context: Copy + Debug + PartialEq;

    fn zero(ctx: Self::Context) -> Self;

    fn one(ctx: Self::Context) -> Self;

    /// Parameters this value was created with.
    fn context(&self) -> Self::Context;

    fn is_zero(&self) -> bool;

    /// `false` for values that cannot stand as a result, e.g. NaN.
    ///
    /// Infinities are valid, so an overflowing real root is reported as
    /// `inf` even though that text does not parse back.
    fn is_valid(&self) -> bool {
        true
    }

    /// All square roots of `self` in the field, without duplicates.
    ///
    /// Zero has exactly one root. Other values have two, none, or a single
    /// one when `s == -s`.
    fn square_root(&self) -> Vec<Self>;

    /// Read a value from its textual form.
    fn parse(input: &str, ctx: Self::Context) -> Result<Self, ParseError>;

    #[inline(always)]
    fn square(self) -> Self {
        self * self
    }

    #[inline(always)]
    fn double(self) -> Self {
        self + self
    }
}
