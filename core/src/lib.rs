pub mod command;
pub mod error;
pub mod field;
pub mod solver;

pub use command::Report;
pub use command::SolveCommand;
pub use error::CommandError;
pub use error::Status;
pub use field::FieldKind;
pub use field::SolverConfig;
pub use solver::solve;
pub use solver::Coefficients;
pub use solver::Solution;
