use std::fmt;

use num_complex::Complex64;
use num_traits::One;
use num_traits::Zero;
use serde::Deserialize;
use serde::Serialize;

use crate::decimal::split_decimal;
use crate::error::ParseError;
use crate::real::Real;
use crate::traits::Field;

/// Element of ℂ as a pair of doubles.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Complex(pub Complex64);

impl Complex {
    /// The imaginary unit.
    pub const I: Self = Self(Complex64::new(0.0, 1.0));

    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self(Complex64::new(re, im))
    }

    #[inline]
    pub const fn re(&self) -> f64 {
        self.0.re
    }

    #[inline]
    pub const fn im(&self) -> f64 {
        self.0.im
    }
}

impl_newtype_field_ops!(Complex);

impl From<Complex64> for Complex {
    fn from(value: Complex64) -> Self {
        Self(value)
    }
}

impl From<Real> for Complex {
    fn from(value: Real) -> Self {
        Self::new(value.0, 0.0)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let re = Real(self.re());
        let im = Real(self.im());
        if !re.is_zero() {
            write!(f, "{re}")?;
        }
        if !im.is_zero() {
            if !re.is_zero() && im.0 > 0.0 {
                write!(f, "+")?;
            }
            write!(f, "{im}j")?;
        }
        Ok(())
    }
}

/// Suffixes that mark a literal as imaginary.
const IMAGINARY_MARKERS: [&str; 2] = ["j", "i"];

fn is_marker(s: &str) -> bool {
    IMAGINARY_MARKERS.contains(&s)
}

impl Field for Complex {
    type Context = ();

    #[inline]
    fn zero(_: ()) -> Self {
        Self(Complex64::zero())
    }

    #[inline]
    fn one(_: ()) -> Self {
        Self(Complex64::one())
    }

    #[inline]
    fn context(&self) -> Self::Context {}

    #[inline]
    fn is_zero(&self) -> bool {
        Real(self.re()).is_zero() && Real(self.im()).is_zero()
    }

    #[inline]
    fn is_valid(&self) -> bool {
        !self.0.is_nan()
    }

    fn square_root(&self) -> Vec<Self> {
        if self.is_zero() {
            return vec![Self::zero(())];
        }
        let root = self.0.sqrt();
        vec![Self(root), Self(-root)]
    }

    /// Accepts `a`, `bj`, `a+bj` and `a-bj`; the marker on the second
    /// literal may be left out.
    fn parse(input: &str, _: ()) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::Empty);
        }
        let invalid = || ParseError::InvalidComplex(input.to_owned());

        let (first, rest) = split_decimal(input).ok_or_else(invalid)?;
        let value = if rest.is_empty() {
            Complex64::new(first, 0.0)
        } else if is_marker(rest) {
            Complex64::new(0.0, first)
        } else if rest.starts_with(['+', '-']) {
            let (second, tail) = split_decimal(rest).ok_or_else(invalid)?;
            if !tail.is_empty() && !is_marker(tail) {
                return Err(invalid());
            }
            Complex64::new(first, second)
        } else {
            return Err(invalid());
        };

        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(ParseError::NonFinite(input.to_owned()))
        }
    }
}

#[cfg(test)]
mod complex_tests {
    use proptest::prelude::*;
    use test_strategy::proptest;

    use super::*;

    fn parse(input: &str) -> Result<Complex, ParseError> {
        Complex::parse(input, ())
    }

    #[test]
    fn accepted_forms() {
        assert_eq!(Ok(complex!(3)), parse("3"));
        assert_eq!(Ok(complex!(0, 2)), parse("2j"));
        assert_eq!(Ok(complex!(0, -1.5)), parse("-1.5j"));
        assert_eq!(Ok(complex!(3, -2)), parse("3-2j"));
        assert_eq!(Ok(complex!(3, 2)), parse("3+2j"));
        assert_eq!(Ok(complex!(3, 2)), parse("3+2"));
        assert_eq!(Ok(complex!(1, 1)), parse("1+1i"));
        assert_eq!(Ok(complex!(1000, 0.01)), parse("1e3+1e-2j"));
    }

    #[test]
    fn rejected_forms() {
        assert_eq!(Err(ParseError::Empty), parse(""));
        for input in ["j", "3x", "3jj", "3+2jx", "3+", "3 2j", "3.5.2j", "+j"]
        {
            assert_eq!(
                Err(ParseError::InvalidComplex(input.to_owned())),
                parse(input),
                "input {input:?}"
            );
        }
        assert_eq!(
            Err(ParseError::NonFinite("1e999j".into())),
            parse("1e999j")
        );
    }

    #[test]
    fn display_test() {
        assert_eq!("0", complex!(0).to_string());
        assert_eq!("3", complex!(3).to_string());
        assert_eq!("2j", complex!(0, 2).to_string());
        assert_eq!("-1j", complex!(0, -1).to_string());
        assert_eq!("3-2j", complex!(3, -2).to_string());
        assert_eq!("3+2.5j", complex!(3, 2.5).to_string());
    }

    #[test]
    fn square_roots() {
        assert_eq!(vec![complex!(0)], complex!(0).square_root());

        let roots = complex!(-1).square_root();
        assert_eq!(2, roots.len());
        assert!((roots[0] - Complex::I).0.norm() < 1e-12);
        assert!((roots[1] + Complex::I).0.norm() < 1e-12);

        for root in complex!(3, 4).square_root() {
            assert!((root.square() - complex!(3, 4)).0.norm() < 1e-12);
        }
    }

    #[test]
    fn zero_test_needs_both_components() {
        assert!(complex!(1e-20, -1e-20).is_zero());
        assert!(!complex!(0, 1e-3).is_zero());
        assert!(!complex!(1e-3, 0).is_zero());
    }

    #[test]
    fn nan_in_any_component_is_not_valid() {
        assert!(!complex!(f64::NAN, 0).is_valid());
        assert!(!complex!(0, f64::NAN).is_valid());
        assert!(complex!(1, 1).is_valid());
    }

    #[proptest]
    fn display_then_parse_is_identity(
        #[strategy(-1e9..1e9f64)] re: f64,
        #[strategy(-1e9..1e9f64)] im: f64,
    ) {
        let z = complex!(re, im);
        let reparsed = parse(&z.to_string()).unwrap();
        prop_assert!((reparsed - z).is_zero());
    }

    #[proptest]
    fn multiplication_with_inverse_gives_identity(
        #[strategy(1.0..1e3f64)] re: f64,
        #[strategy(1.0..1e3f64)] im: f64,
    ) {
        let z = complex!(re, im);
        let one = Complex::one(());
        let product = z * (one / z);
        prop_assert!((product - one).0.norm() < 1e-12);
    }
}
