//! The `solve a b c` command: parse, solve and render one equation.

use std::fmt;
use std::io::Write;

use field_math::prelude::*;
use log::debug;
use log::warn;

use crate::error::CommandError;
use crate::error::CommandResult;
use crate::error::Status;
use crate::field::FieldKind;
use crate::field::SolverConfig;
use crate::field::Variables;
use crate::solver::solve;
use crate::solver::Coefficients;
use crate::solver::Solution;

/// Rendered outcome of a successful solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Degenerate,
    Roots(Vec<String>),
}

impl Report {
    pub fn from_solution<F: Field>(solution: &Solution<F>) -> Self {
        match solution {
            Solution::Degenerate => Report::Degenerate,
            Solution::Roots(roots) => {
                Report::Roots(roots.iter().map(ToString::to_string).collect())
            }
        }
    }

    /// One line describing the outcome.
    pub fn summary(&self) -> String {
        match self {
            Report::Degenerate => {
                "Equation is degenerate: every value is its solution".to_owned()
            }
            Report::Roots(roots) => {
                let plural = if roots.len() == 1 { "" } else { "s" };
                format!("Equation has {} solution{plural}:", roots.len())
            }
        }
    }

    /// The roots separated by single spaces.
    pub fn roots_line(&self) -> Option<String> {
        match self {
            Report::Degenerate => None,
            Report::Roots(roots) => Some(roots.join(" ")),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())?;
        if let Some(line) = self.roots_line() {
            write!(f, "\n{line}")?;
        }
        Ok(())
    }
}

/// Parse three coefficient literals, stopping at the first malformed one.
pub fn parse_coefficients<F, S>(
    args: &[S],
    ctx: F::Context,
) -> CommandResult<Coefficients<F>>
where
    F: Field,
    S: AsRef<str>,
{
    let [a, b, c] = args else {
        return Err(CommandError::BadArguments {
            expected: SolveCommand::ARITY,
            found: args.len(),
        });
    };
    let parse = |index: usize, input: &S| {
        F::parse(input.as_ref(), ctx)
            .map_err(|source| CommandError::Parse { index, source })
    };
    Ok(Coefficients::new(parse(0, a)?, parse(1, b)?, parse(2, c)?))
}

fn solve_in<F, S>(args: &[S], ctx: F::Context) -> CommandResult<Report>
where
    F: Field,
    S: AsRef<str>,
{
    let coefficients = parse_coefficients::<F, S>(args, ctx)?;
    let solution = solve(&coefficients);
    debug!(
        "solved {}x^2 + {}x + {} = 0: {} root(s), degenerate: {}",
        coefficients.a,
        coefficients.b,
        coefficients.c,
        solution.len(),
        solution.is_degenerate()
    );
    Ok(Report::from_solution(&solution))
}

/// The `solve` command.
///
/// Checks are applied in a fixed order: argument count, then the field,
/// then each coefficient from left to right. The first failure wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveCommand;

impl SolveCommand {
    /// Number of coefficients the command takes.
    pub const ARITY: usize = 3;

    /// Solve with the field given as a selector string (`R`, `C`, `Z_<p>`).
    pub fn run<S: AsRef<str>>(
        args: &[S],
        selector: &str,
    ) -> CommandResult<Report> {
        Self::check_arity(args)?;
        Self::run_in(args, selector.parse()?)
    }

    /// Solve with the field taken from the shell variables.
    pub fn run_with_variables<S, V>(
        args: &[S],
        variables: &V,
    ) -> CommandResult<Report>
    where
        S: AsRef<str>,
        V: Variables + ?Sized,
    {
        Self::check_arity(args)?;
        let config = SolverConfig::from_variables(variables)?;
        Self::run_in(args, config.field)
    }

    /// Solve in an already selected field.
    pub fn run_in<S: AsRef<str>>(
        args: &[S],
        field: FieldKind,
    ) -> CommandResult<Report> {
        match field {
            FieldKind::Real => solve_in::<Real, S>(args, ()),
            FieldKind::Complex => solve_in::<Complex, S>(args, ()),
            FieldKind::Residue(modulus) => {
                solve_in::<Residue, S>(args, modulus)
            }
        }
    }

    /// Run the command as the dispatcher does: write the report to `out` and
    /// turn failures into a status.
    ///
    /// Only failures of `out` itself surface as errors.
    pub fn execute<S, V, W>(
        args: &[S],
        variables: &V,
        out: &mut W,
    ) -> std::io::Result<Status>
    where
        S: AsRef<str>,
        V: Variables + ?Sized,
        W: Write,
    {
        match Self::run_with_variables(args, variables) {
            Ok(report) => {
                writeln!(out, "{report}")?;
                Ok(Status::Ok)
            }
            Err(error) => {
                warn!("solve rejected: {error}");
                Ok(error.status())
            }
        }
    }

    fn check_arity<S>(args: &[S]) -> CommandResult<()> {
        if args.len() == Self::ARITY {
            Ok(())
        } else {
            Err(CommandError::BadArguments {
                expected: Self::ARITY,
                found: args.len(),
            })
        }
    }
}
