use std::fmt;
use std::ops::Add;
use std::ops::AddAssign;
use std::ops::Div;
use std::ops::DivAssign;
use std::ops::Mul;
use std::ops::MulAssign;
use std::ops::Neg;
use std::ops::Sub;
use std::ops::SubAssign;

use log::trace;
use serde::Deserialize;
use serde::Serialize;

use crate::error::ModulusError;
use crate::error::ParseError;
use crate::traits::Field;
use crate::traits::Inverse;
use crate::traits::ModPow;
use crate::utils::is_prime;

/// A verified prime modulus for ℤ/pℤ.
#[derive(
    Debug,
    Copy,
    Clone,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct Modulus(u32);

impl Modulus {
    /// Accepts `p` only if it is a prime.
    pub fn new(p: u32) -> Result<Self, ModulusError> {
        if p < 2 {
            Err(ModulusError::TooSmall(p))
        } else if !is_prime(p) {
            Err(ModulusError::NotPrime(p))
        } else {
            Ok(Self(p))
        }
    }

    /// Wraps `p` without the primality test.
    ///
    /// Field semantics only hold when `p` is prime.
    #[inline]
    pub const fn new_unchecked(p: u32) -> Self {
        Self(p)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Modulus {
    type Error = ModulusError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Modulus> for u32 {
    fn from(modulus: Modulus) -> Self {
        modulus.0
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Element of ℤ/pℤ for a prime `p` chosen at runtime.
///
/// The value is always kept in `[0, p)`. Combining residues of different
/// moduli is a bug in the caller and panics.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub struct Residue {
    value: u32,
    modulus: u32,
}

impl Residue {
    /// `value mod modulus`.
    ///
    /// Primality of `modulus` is not checked here, see [`Modulus::new`].
    #[inline]
    pub const fn new(value: u32, modulus: u32) -> Self {
        assert!(modulus != 0, "Residue modulus must be non-zero.");
        Self {
            value: value % modulus,
            modulus,
        }
    }

    #[inline]
    pub const fn from_u64(value: u64, modulus: Modulus) -> Self {
        Self {
            value: (value % modulus.0 as u64) as u32,
            modulus: modulus.0,
        }
    }

    #[inline]
    pub const fn value(&self) -> u32 {
        self.value
    }

    #[inline]
    pub const fn modulus(&self) -> u32 {
        self.modulus
    }

    #[inline]
    pub const fn is_one(&self) -> bool {
        self.value == 1
    }

    /// Euler's criterion: `1` for non-zero squares, `-1` for non-squares and
    /// `0` for zero.
    pub fn legendre_symbol(&self) -> i8 {
        if self.value == 0 {
            0
        } else if self.modulus == 2
            || self.mod_pow((self.modulus - 1) / 2).is_one()
        {
            1
        } else {
            -1
        }
    }

    /// Tonelli–Shanks for an odd prime modulus and a non-zero square.
    fn tonelli_shanks(&self) -> Self {
        let p = self.modulus;
        let s = (p - 1).trailing_zeros();
        let q = (p - 1) >> s;

        if s == 1 {
            return self.mod_pow(p / 4 + 1);
        }

        let mut z = Self::new(2, p);
        while z.legendre_symbol() != -1 {
            z += Self::new(1, p);
        }
        trace!("tonelli-shanks mod {p}: q = {q}, s = {s}, non-residue = {z}");

        let mut m = s;
        let mut c = z.mod_pow(q);
        let mut t = self.mod_pow(q);
        let mut r = self.mod_pow((q + 1) / 2);

        while !t.is_one() {
            let mut i = 0;
            let mut t_pow = t;
            while !t_pow.is_one() {
                t_pow = t_pow.square();
                i += 1;
            }

            let b = (0..m - i - 1).fold(c, |acc, _| acc.square());
            m = i;
            c = b.square();
            t *= c;
            r *= b;
        }
        r
    }

    #[inline(always)]
    #[track_caller]
    fn assert_same_modulus(&self, other: &Self) {
        assert_eq!(
            self.modulus, other.modulus,
            "Residues of different moduli cannot be combined."
        );
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<Residue> for u32 {
    fn from(residue: Residue) -> Self {
        residue.value
    }
}

impl ModPow for Residue {
    /// Left-to-right square and multiply.
    #[inline]
    fn mod_pow(&self, exp: u32) -> Self {
        let mut acc = Self::new(1, self.modulus);
        let bit_length = u32::BITS - exp.leading_zeros();
        for i in (0..bit_length).rev() {
            acc = acc.square();
            if exp & (1 << i) != 0 {
                acc *= *self;
            }
        }
        acc
    }
}

impl Inverse for Residue {
    #[inline]
    fn inverse(&self) -> Self {
        assert_ne!(
            self.value, 0,
            "Attempted to find the multiplicative inverse of zero."
        );
        self.mod_pow(self.modulus - 2)
    }
}

impl Add for Residue {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        self.assert_same_modulus(&rhs);
        let sum = u64::from(self.value) + u64::from(rhs.value);
        let modulus = u64::from(self.modulus);
        let value = if sum >= modulus { sum - modulus } else { sum };
        Self {
            value: value as u32,
            modulus: self.modulus,
        }
    }
}

impl Neg for Residue {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        let value = if self.value == 0 {
            0
        } else {
            self.modulus - self.value
        };
        Self {
            value,
            modulus: self.modulus,
        }
    }
}

impl Sub for Residue {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl Mul for Residue {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.assert_same_modulus(&rhs);
        let product = u64::from(self.value) * u64::from(rhs.value);
        Self {
            value: (product % u64::from(self.modulus)) as u32,
            modulus: self.modulus,
        }
    }
}

impl Div for Residue {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, rhs: Self) -> Self {
        self * rhs.inverse()
    }
}

impl AddAssign for Residue {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs
    }
}

impl SubAssign for Residue {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs
    }
}

impl MulAssign for Residue {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Residue {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Field for Residue {
    type Context = Modulus;

    #[inline]
    fn zero(ctx: Modulus) -> Self {
        Self::new(0, ctx.get())
    }

    #[inline]
    fn one(ctx: Modulus) -> Self {
        Self::new(1, ctx.get())
    }

    #[inline]
    fn context(&self) -> Modulus {
        Modulus::new_unchecked(self.modulus)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.value == 0
    }

    fn square_root(&self) -> Vec<Self> {
        if self.is_zero() || self.modulus == 2 {
            return vec![*self];
        }
        if self.legendre_symbol() != 1 {
            return vec![];
        }
        let root = self.tonelli_shanks();
        vec![root, -root]
    }

    /// Unsigned decimal digits, reduced modulo `p` while reading so that
    /// literals of any length are accepted.
    fn parse(input: &str, ctx: Modulus) -> Result<Self, ParseError> {
        if input.is_empty() {
            return Err(ParseError::Empty);
        }
        if !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidResidue(input.to_owned()));
        }
        let modulus = u64::from(ctx.get());
        let value = input
            .bytes()
            .fold(0u64, |acc, b| (acc * 10 + u64::from(b - b'0')) % modulus);
        Ok(Self::from_u64(value, ctx))
    }
}

#[cfg(test)]
mod residue_tests {
    use proptest::prelude::*;
    use proptest::sample::select;
    use test_strategy::proptest;

    use super::*;

    const PRIMES: [u32; 10] =
        [2, 3, 5, 7, 13, 17, 97, 65537, 8380417, 4294967291];

    fn modulus(p: u32) -> Modulus {
        Modulus::new(p).unwrap()
    }

    #[test]
    fn modulus_must_be_prime() {
        assert_eq!(Ok(Modulus::new_unchecked(5)), Modulus::new(5));
        assert_eq!(Err(ModulusError::NotPrime(4)), Modulus::new(4));
        assert_eq!(Err(ModulusError::TooSmall(1)), Modulus::new(1));
        assert_eq!(Err(ModulusError::TooSmall(0)), Modulus::new(0));
    }

    #[test]
    fn modulus_deserialization_checks_primality() {
        let ok: Modulus = serde_json::from_str("13").unwrap();
        assert_eq!(13, ok.get());
        assert!(serde_json::from_str::<Modulus>("15").is_err());
        assert_eq!("13", serde_json::to_string(&ok).unwrap());
    }

    #[test]
    fn values_are_reduced() {
        assert_eq!(2, Residue::new(7, 5).value());
        assert_eq!(0, Residue::new(5, 5).value());
        // 2^64 ≡ 1 (mod 5)
        assert_eq!(0, Residue::from_u64(u64::MAX, modulus(5)).value());
        assert_eq!(4, Residue::from_u64(u64::MAX - 1, modulus(5)).value());
    }

    #[test]
    fn add_sub_wrap_around_test() {
        let m = 4294967291;
        let max = Residue::new(m - 1, m);
        let four = Residue::new(4, m);
        let sum = max + four;
        assert_eq!(Residue::new(3, m), sum);
        assert_eq!(max, sum - four);
    }

    #[test]
    fn neg_test() {
        assert_eq!(residue!(0; 5), -residue!(0; 5));
        assert_eq!(residue!(4; 5), -residue!(1; 5));
        assert_eq!(residue!(1; 5), -residue!(4; 5));
    }

    #[test]
    fn multiplication_widens_before_reducing() {
        let m = 4294967291;
        let minus_one = Residue::new(m - 1, m);
        assert_eq!(Residue::new(1, m), minus_one * minus_one);
    }

    #[test]
    fn mod_pow_matches_naive_powers() {
        let three = residue!(3; 97);
        let mut expected = residue!(1; 97);
        for exp in 0..200 {
            assert_eq!(expected, three.mod_pow(exp));
            expected *= three;
        }
    }

    #[test]
    fn fixed_inverses() {
        assert_eq!(residue!(3; 5), residue!(2; 5).inverse());
        assert_eq!(residue!(1; 2), residue!(1; 2).inverse());
        assert_eq!(residue!(4; 7), residue!(2; 7).inverse());
        assert_eq!(residue!(3; 7), residue!(1; 7) / residue!(5; 7));
    }

    #[test]
    #[should_panic(
        expected = "Attempted to find the multiplicative inverse of zero."
    )]
    fn multiplicative_inverse_of_zero() {
        let _ = residue!(0; 5).inverse();
    }

    #[test]
    #[should_panic(
        expected = "Residues of different moduli cannot be combined."
    )]
    fn mismatched_moduli_panic() {
        let _ = residue!(1; 5) + residue!(1; 7);
    }

    #[test]
    #[should_panic(
        expected = "Attempted to find the multiplicative inverse of zero."
    )]
    fn division_by_zero_panics() {
        let _ = residue!(3; 5) / residue!(0; 5);
    }

    #[test]
    fn square_roots_are_exhaustive_for_small_primes() {
        for p in [2, 3, 5, 7, 13, 17, 41, 97] {
            for v in 0..p {
                let x = Residue::new(v, p);
                let mut expected: Vec<u32> =
                    (0..p).filter(|&r| (r * r) % p == v).collect();
                let mut roots: Vec<u32> =
                    x.square_root().into_iter().map(u32::from).collect();
                expected.sort_unstable();
                roots.sort_unstable();
                assert_eq!(expected, roots, "square roots of {v} mod {p}");
            }
        }
    }

    #[test]
    fn legendre_symbol_test() {
        assert_eq!(0, residue!(0; 7).legendre_symbol());
        assert_eq!(1, residue!(2; 7).legendre_symbol());
        assert_eq!(-1, residue!(3; 7).legendre_symbol());
        assert_eq!(1, residue!(1; 2).legendre_symbol());
    }

    #[test]
    fn parsing() {
        let m = modulus(5);
        assert_eq!(Ok(residue!(2; 5)), Residue::parse("17", m));
        assert_eq!(Ok(residue!(0; 5)), Residue::parse("0", m));
        assert_eq!(
            Ok(residue!(7; 11)),
            Residue::parse("123456789012345678901234567890", modulus(11))
        );
        assert_eq!(Err(ParseError::Empty), Residue::parse("", m));
        for input in ["-1", "+1", "1.0", "1e3", "x", " 1"] {
            assert_eq!(
                Err(ParseError::InvalidResidue(input.to_owned())),
                Residue::parse(input, m)
            );
        }
    }

    #[test]
    fn display_test() {
        assert_eq!("4", residue!(9; 5).to_string());
        assert_eq!("0", residue!(0; 2).to_string());
    }

    #[test]
    fn residues_macro_can_be_used() {
        let v = residues![5; 1, 6, 11];
        assert!(v.iter().all(|r| *r == residue!(1; 5)));
    }

    #[proptest]
    fn inverse_of_inverse_is_identity(
        #[strategy(select(PRIMES.to_vec()))] p: u32,
        #[strategy(1..#p)] v: u32,
    ) {
        let x = Residue::new(v, p);
        prop_assert_eq!(x, x.inverse().inverse());
    }

    #[proptest]
    fn multiplication_with_inverse_gives_identity(
        #[strategy(select(PRIMES.to_vec()))] p: u32,
        #[strategy(1..#p)] v: u32,
    ) {
        let x = Residue::new(v, p);
        prop_assert!((x * x.inverse()).is_one());
        prop_assert!((x / x).is_one());
    }

    #[proptest]
    fn multiplication_distributes_over_addition(
        #[strategy(select(PRIMES.to_vec()))] p: u32,
        #[strategy(0..#p)] a: u32,
        #[strategy(0..#p)] b: u32,
        #[strategy(0..#p)] c: u32,
    ) {
        let a = Residue::new(a, p);
        let b = Residue::new(b, p);
        let c = Residue::new(c, p);
        prop_assert_eq!(a * (b + c), a * b + a * c);
    }

    #[proptest]
    fn negation_is_additive_inverse(
        #[strategy(select(PRIMES.to_vec()))] p: u32,
        #[strategy(0..#p)] v: u32,
    ) {
        let x = Residue::new(v, p);
        prop_assert!((x + (-x)).is_zero());
        prop_assert!((-x).value() < p);
    }

    #[proptest]
    fn square_roots_square_back(
        #[strategy(select(PRIMES.to_vec()))] p: u32,
        #[strategy(0..#p)] v: u32,
    ) {
        let x = Residue::new(v, p);
        let roots = x.square_root();
        match x.legendre_symbol() {
            0 => prop_assert_eq!(vec![x], roots.clone()),
            1 if p == 2 => prop_assert_eq!(1, roots.len()),
            1 => prop_assert_eq!(2, roots.len()),
            _ => prop_assert!(roots.is_empty()),
        }
        for root in roots {
            prop_assert_eq!(x, root.square());
        }
    }

    #[proptest]
    fn squares_always_have_roots(
        #[strategy(select(PRIMES.to_vec()))] p: u32,
        #[strategy(0..#p)] v: u32,
    ) {
        let square = Residue::new(v, p).square();
        prop_assert!(square.square_root().contains(&Residue::new(v, p)));
    }

    #[proptest]
    fn display_then_parse_is_identity(
        #[strategy(select(PRIMES.to_vec()))] p: u32,
        #[strategy(0..#p)] v: u32,
    ) {
        let x = Residue::new(v, p);
        prop_assert_eq!(Ok(x), Residue::parse(&x.to_string(), modulus(p)));
    }
}
