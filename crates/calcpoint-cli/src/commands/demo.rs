//! Demo command handler
//!
//! Runs a fixed set of calculations, including ones that are expected to
//! fail, and prints each outcome.

use crate::error::CliError;
use calcpoint::{CalcError, Calculator, CalculatorHandler, InferenceHandler};

/// A sample calculation: operation, a, optional b
pub type DemoCase = (&'static str, f64, Option<f64>);

pub const DEMO_CASES: &[DemoCase] = &[
    ("add", 20.0, Some(22.0)),
    ("multiply", 6.0, Some(7.0)),
    ("power", 2.0, Some(10.0)),
    ("sqrt", 81.0, None),
    ("sin", 90.0, None),
    ("log", 1.0, None),
    ("divide", 10.0, Some(0.0)),
    ("invent", 1.0, Some(1.0)),
];

pub fn run_demo() -> Result<(), CliError> {
    println!("--- calcpoint calculator demo ---");
    let calculator = CalculatorHandler::new().load(None)?;

    for case in DEMO_CASES {
        println!("{}", "-".repeat(30));
        println!("Attempting: {}", describe(case));
        match run_case(&calculator, case) {
            Ok(result) => println!("  -> Success! Result: {}", result),
            Err(e) => println!("  -> Caught an error: {}", e),
        }
    }
    Ok(())
}

fn run_case(calculator: &Calculator, &(operation, a, b): &DemoCase) -> Result<f64, CalcError> {
    calculator.calculate(operation, a, b)
}

fn describe(&(operation, a, b): &DemoCase) -> String {
    match b {
        Some(b) => format!("{} a={} b={}", operation, a, b),
        None => format!("{} a={}", operation, a),
    }
}
