//! Selection of the coefficient field and the solver configuration.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;
use std::str::FromStr;

use field_math::error::ModulusError;
use field_math::residue::Modulus;
use log::debug;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Name of the variable that holds the field selector.
pub const FIELD_VARIABLE: &str = "field";

/// Selector used when [`FIELD_VARIABLE`] is not set.
pub const DEFAULT_FIELD: &str = "R";

const RESIDUE_PREFIX: &str = "Z_";

/// The field the coefficients of an equation are read from.
///
/// Textual form: `R` for the reals, `C` for the complex numbers and `Z_<p>`
/// for the integers modulo a prime `p`. The modulus is written without
/// leading zeros, so parsing and [`Display`](fmt::Display) are inverses.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum FieldKind {
    #[default]
    Real,
    Complex,
    Residue(Modulus),
}

/// Errors raised while interpreting a field selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FieldSelectionError {
    #[error("unknown field `{0}`, expected `R`, `C` or `Z_<prime>`")]
    Unknown(String),
    #[error("`{0}` is not a valid modulus")]
    InvalidModulus(String),
    #[error(transparent)]
    Modulus(#[from] ModulusError),
}

impl FromStr for FieldKind {
    type Err = FieldSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" => Ok(Self::Real),
            "C" => Ok(Self::Complex),
            _ => {
                let digits = s
                    .strip_prefix(RESIDUE_PREFIX)
                    .ok_or_else(|| FieldSelectionError::Unknown(s.to_owned()))?;
                if digits.is_empty()
                    || (digits.len() > 1 && digits.starts_with('0'))
                    || !digits.bytes().all(|b| b.is_ascii_digit())
                {
                    return Err(FieldSelectionError::InvalidModulus(
                        digits.to_owned(),
                    ));
                }
                let p: u32 = digits.parse().map_err(|_| {
                    FieldSelectionError::InvalidModulus(digits.to_owned())
                })?;
                Ok(Self::Residue(Modulus::new(p)?))
            }
        }
    }
}

impl TryFrom<String> for FieldKind {
    type Error = FieldSelectionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.to_string()
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Real => write!(f, "R"),
            FieldKind::Complex => write!(f, "C"),
            FieldKind::Residue(p) => write!(f, "{RESIDUE_PREFIX}{p}"),
        }
    }
}

/// Read access to the variables of the hosting shell.
pub trait Variables {
    fn variable(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> Variables for HashMap<String, String, S> {
    fn variable(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl Variables for BTreeMap<String, String> {
    fn variable(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

/// Settings a solve runs with.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize,
)]
pub struct SolverConfig {
    pub field: FieldKind,
}

impl SolverConfig {
    pub const fn new(field: FieldKind) -> Self {
        Self { field }
    }

    /// Build the configuration from shell variables, falling back to
    /// [`DEFAULT_FIELD`] when no field is set.
    pub fn from_variables<V>(variables: &V) -> Result<Self, FieldSelectionError>
    where
        V: Variables + ?Sized,
    {
        let selector = variables
            .variable(FIELD_VARIABLE)
            .unwrap_or(DEFAULT_FIELD);
        let field = selector.parse()?;
        debug!("selected field {field} from `{FIELD_VARIABLE}={selector}`");
        Ok(Self::new(field))
    }
}
