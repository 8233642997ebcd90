pub use crate::{complex, real, residue, residues};
pub use crate::{
    complex::Complex,
    error::{ModulusError, ParseError},
    real::Real,
    residue::{Modulus, Residue},
    traits::{Field, Inverse, ModPow},
    utils::is_prime,
};
