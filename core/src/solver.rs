//! Field-independent solving of `a·x² + b·x + c = 0`.

use field_math::traits::Field;
use log::trace;

/// The coefficients of `a·x² + b·x + c`, all from one field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients<F: Field> {
    pub a: F,
    pub b: F,
    pub c: F,
}

impl<F: Field> Coefficients<F> {
    pub const fn new(a: F, b: F, c: F) -> Self {
        Self { a, b, c }
    }

    /// Evaluate the polynomial at `x`.
    pub fn evaluate(&self, x: F) -> F {
        (self.a * x + self.b) * x + self.c
    }
}

impl<F: Field> From<[F; 3]> for Coefficients<F> {
    fn from([a, b, c]: [F; 3]) -> Self {
        Self::new(a, b, c)
    }
}

/// Outcome of solving one equation.
#[derive(Debug, Clone, PartialEq)]
pub enum Solution<F> {
    /// Zero, one or two distinct roots.
    Roots(Vec<F>),
    /// All coefficients vanish, every field element is a root.
    Degenerate,
}

impl<F> Solution<F> {
    /// The enumerated roots; empty for a degenerate equation.
    pub fn roots(&self) -> &[F] {
        match self {
            Solution::Roots(roots) => roots,
            Solution::Degenerate => &[],
        }
    }

    pub fn is_degenerate(&self) -> bool {
        matches!(self, Solution::Degenerate)
    }

    /// Number of enumerated roots.
    pub fn len(&self) -> usize {
        self.roots().len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots().is_empty()
    }
}

fn valid_roots<F: Field>(
    candidates: impl IntoIterator<Item = F>,
) -> Solution<F> {
    Solution::Roots(candidates.into_iter().filter(F::is_valid).collect())
}

/// Solve `k·x + b = 0`.
///
/// With `k = 0` the equation is degenerate if `b = 0` as well and has no
/// solution otherwise.
pub fn solve_linear<F: Field>(k: F, b: F) -> Solution<F> {
    if !k.is_zero() {
        valid_roots([-b / k])
    } else if b.is_zero() {
        Solution::Degenerate
    } else {
        Solution::Roots(vec![])
    }
}

/// Solve `a·x² + b·x + c = 0`.
///
/// Falls back to [`solve_linear`] when `a` is zero by the field's own zero
/// test. Otherwise every square root `r` of `b² − 4ac` yields the root
/// `(r − b) / 2a`. Roots that the field reports as invalid are dropped.
pub fn solve<F: Field>(coefficients: &Coefficients<F>) -> Solution<F> {
    let Coefficients { a, b, c } = *coefficients;
    if a.is_zero() {
        return solve_linear(b, c);
    }

    let two_a = a.double();
    if two_a.is_zero() {
        return solve_characteristic_two(coefficients);
    }

    let discriminant = b.square() - (a * c).double().double();
    let square_roots = discriminant.square_root();
    trace!(
        "discriminant {discriminant} has {} square root(s)",
        square_roots.len()
    );

    valid_roots(square_roots.into_iter().map(|r| (r - b) / two_a))
}

/// `2a` vanishes, so the field is ℤ/2ℤ and its only elements are zero and
/// one; try both.
fn solve_characteristic_two<F: Field>(
    coefficients: &Coefficients<F>,
) -> Solution<F> {
    let ctx = coefficients.a.context();
    let candidates = [F::zero(ctx), F::one(ctx)];
    valid_roots(
        candidates
            .into_iter()
            .filter(|&x| coefficients.evaluate(x).is_zero()),
    )
}

/// Solve several independent equations, keeping their order.
pub fn solve_batch<F: Field>(
    equations: &[Coefficients<F>],
) -> Vec<Solution<F>> {
    equations.iter().map(solve).collect()
}
