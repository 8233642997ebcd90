//! Solve one equation from the command line.
//!
//! ```text
//! field=Z_7 RUST_LOG=debug cargo run --example solve -- 1 0 6
//! ```
//!
//! The field selector is read from the `field` environment variable.

use std::collections::HashMap;
use std::io;
use std::process::ExitCode;

use quadratic_core::{SolveCommand, Status};

fn main() -> io::Result<ExitCode> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let variables: HashMap<String, String> = std::env::vars().collect();

    let status =
        SolveCommand::execute(&args, &variables, &mut io::stdout().lock())?;
    if status != Status::Ok {
        eprintln!("{status}");
    }
    Ok(ExitCode::from(status.code() as u8))
}
