//! Calc command handler

use crate::error::CliError;
use calcpoint::{CalculatorHandler, InferenceHandler};

pub fn run_calc(operation: &str, a: f64, b: Option<f64>) -> Result<(), CliError> {
    let calculator = CalculatorHandler::new().load(None)?;
    let result = calculator.calculate(operation, a, b)?;
    println!("{}", result);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_calc_success() {
        assert!(run_calc("add", 20.0, Some(22.0)).is_ok());
    }

    #[test]
    fn test_run_calc_propagates_calculation_error() {
        let err = run_calc("divide", 10.0, Some(0.0)).unwrap_err();
        assert!(matches!(
            err,
            CliError::Calculation(calcpoint::CalcError::DivisionByZero)
        ));
        assert_eq!(
            err.to_string(),
            "Calculation error in 'divide': Division by zero"
        );
    }
}
