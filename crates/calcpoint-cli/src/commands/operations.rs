//! Operations command handler

use crate::error::CliError;
use calcpoint::{Arity, Operation};

pub fn run_operations() -> Result<(), CliError> {
    println!("Supported operations:");
    for line in operation_lines() {
        println!("  {}", line);
    }
    println!("\nTrigonometric operations take degrees; log is the natural logarithm.");
    Ok(())
}

fn operation_lines() -> Vec<String> {
    Operation::all()
        .into_iter()
        .map(|op| {
            let usage = match op.arity() {
                Arity::Binary => format!("{} <a> <b>", op),
                Arity::Unary => format!("{} <a>", op),
            };
            format!("{:<16} {}", usage, op.arity())
        })
        .collect()
}
