use std::fmt;

use field_math::error::ParseError;
use thiserror::Error;

use crate::field::FieldSelectionError;

/// Result type specialized for solve commands.
pub type CommandResult<T> = std::result::Result<T, CommandError>;

/// Status reported to the command dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Status {
    Ok = 0,
    /// Not exactly three coefficients were given.
    BadArguments = 1,
    /// The `field` selector is unknown or names a non-prime modulus.
    BadField = 2,
    /// A coefficient is not a literal of the selected field.
    ParseError = 3,
}

impl Status {
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Status::Ok),
            1 => Some(Status::BadArguments),
            2 => Some(Status::BadField),
            3 => Some(Status::ParseError),
            _ => None,
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::BadArguments => "Number of arguments should be exactly 3",
            Status::BadField => "'field' value is invalid",
            Status::ParseError => "Error while parsing coefficients",
        }
    }

    pub const fn is_ok(self) -> bool {
        matches!(self, Status::Ok)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Errors that abort a solve command before anything is solved.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("expected exactly {expected} coefficients, got {found}")]
    BadArguments { expected: usize, found: usize },
    #[error("invalid field: {0}")]
    BadField(#[from] FieldSelectionError),
    #[error("coefficient {index} cannot be parsed: {source}")]
    Parse {
        index: usize,
        #[source]
        source: ParseError,
    },
}

impl CommandError {
    pub const fn status(&self) -> Status {
        match self {
            CommandError::BadArguments { .. } => Status::BadArguments,
            CommandError::BadField(_) => Status::BadField,
            CommandError::Parse { .. } => Status::ParseError,
        }
    }
}

impl From<&CommandError> for Status {
    fn from(error: &CommandError) -> Self {
        error.status()
    }
}
