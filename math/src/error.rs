use thiserror::Error;

/// Errors returned when text cannot be read as a field value.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("invalid real number `{0}`")]
    InvalidReal(String),
    #[error("`{0}` does not fit into a finite double")]
    NonFinite(String),
    #[error("invalid complex number `{0}`, expected `a`, `bj` or `a+bj`")]
    InvalidComplex(String),
    #[error("invalid residue `{0}`, expected an unsigned decimal")]
    InvalidResidue(String),
}

/// Errors raised while validating a modulus for ℤ/pℤ.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum ModulusError {
    #[error("modulus must be at least 2, got {0}")]
    TooSmall(u32),
    #[error("modulus {0} is not prime")]
    NotPrime(u32),
}
