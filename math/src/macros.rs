//! Shared macros for constructing and implementing field values.

/// Forward the arithmetic operators of a single-field newtype to the wrapped
/// value.
macro_rules! impl_newtype_field_ops {
    ($($t:ident),+ $(,)?) => {$(
        impl std::ops::Add for $t {
            type Output = Self;

            #[inline(always)]
            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl std::ops::Sub for $t {
            type Output = Self;

            #[inline(always)]
            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl std::ops::Mul for $t {
            type Output = Self;

            #[inline(always)]
            fn mul(self, rhs: Self) -> Self {
                Self(self.0 * rhs.0)
            }
        }

        impl std::ops::Div for $t {
            type Output = Self;

            #[inline(always)]
            fn div(self, rhs: Self) -> Self {
                Self(self.0 / rhs.0)
            }
        }

        impl std::ops::Neg for $t {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl std::ops::AddAssign for $t {
            #[inline(always)]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs
            }
        }

        impl std::ops::SubAssign for $t {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs
            }
        }

        impl std::ops::MulAssign for $t {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs
            }
        }

        impl std::ops::DivAssign for $t {
            #[inline(always)]
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs
            }
        }
    )+};
}

/// Simplifies constructing [`Real`](crate::real::Real)s.
///
/// ```
/// use field_math::prelude::*;
///
/// assert_eq!(real!(2.5), Real(2.5));
/// assert_eq!(real!(-3), Real(-3.0));
/// ```
#[macro_export]
macro_rules! real {
    ($value:expr) => {
        $crate::real::Real::from($value)
    };
}

/// Simplifies constructing [`Complex`](crate::complex::Complex) values.
///
/// ```
/// use field_math::prelude::*;
///
/// let z = complex!(1, -2);
/// assert_eq!(z.re(), 1.0);
/// assert_eq!(z.im(), -2.0);
/// assert_eq!(complex!(4), complex!(4, 0));
/// ```
#[macro_export]
macro_rules! complex {
    ($re:expr) => {
        $crate::complex::Complex::new(f64::from($re), 0.0)
    };
    ($re:expr, $im:expr) => {
        $crate::complex::Complex::new(f64::from($re), f64::from($im))
    };
}

/// Simplifies constructing [`Residue`](crate::residue::Residue)s.
///
/// The modulus is taken as is and must be a prime.
///
/// ```
/// use field_math::prelude::*;
///
/// let a = residue!(3; 5);
/// let b = residue!(4; 5);
/// assert_eq!(a + b, residue!(2; 5));
/// ```
#[macro_export]
macro_rules! residue {
    ($value:expr; $modulus:expr) => {
        $crate::residue::Residue::new($value, $modulus)
    };
}

/// Create a [`Vec`] of [`Residue`](crate::residue::Residue)s sharing one
/// modulus.
///
/// ```
/// use field_math::prelude::*;
///
/// let v = residues![7; 1, 2, 9];
/// assert_eq!(v, vec![residue!(1; 7), residue!(2; 7), residue!(2; 7)]);
/// ```
#[macro_export]
macro_rules! residues {
    ($modulus:expr; $($value:expr),* $(,)?) => {
        vec![$($crate::residue::Residue::new($value, $modulus)),*]
    };
}
