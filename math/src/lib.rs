//! Coefficient fields for equation solving: ℝ, ℂ and ℤ/pℤ behind one
//! [`Field`](traits::Field) trait.

#[macro_use]
mod macros;

mod decimal;
pub mod complex;
pub mod error;
pub mod prelude;
pub mod real;
pub mod residue;
pub mod traits;
pub mod utils;
