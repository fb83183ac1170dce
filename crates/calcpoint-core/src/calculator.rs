//! Operation dispatch and arithmetic

use crate::operation::{BinaryOp, Operation, UnaryOp};
use crate::request::{BinaryRequest, CalculationRequest, UnaryRequest};
use crate::{CalcError, Result};

/// Stateless calculator.
///
/// Holds no data, so a single instance can be shared freely across threads.
/// Every result it returns is a finite `f64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    /// Run `operation` on `a` (and `b` for binary operations).
    ///
    /// Trigonometric operations take degrees; `log` is the natural logarithm.
    pub fn calculate(&self, operation: &str, a: f64, b: Option<f64>) -> Result<f64> {
        let operation: Operation = operation.parse()?;
        let request = CalculationRequest::new(operation, a, b)?;
        self.evaluate(&request)
    }

    /// Evaluate a request whose arity has already been checked
    pub fn evaluate(&self, request: &CalculationRequest) -> Result<f64> {
        let value = match request {
            CalculationRequest::Binary(req) => binary(req)?,
            CalculationRequest::Unary(req) => unary(req)?,
        };
        ensure_finite(request.operation(), value)
    }

    pub fn supported_operations(&self) -> Vec<Operation> {
        Operation::all()
    }
}

fn binary(&BinaryRequest { operation, a, b }: &BinaryRequest) -> Result<f64> {
    Ok(match operation {
        BinaryOp::Add => a + b,
        BinaryOp::Subtract => a - b,
        BinaryOp::Multiply => a * b,
        BinaryOp::Divide => {
            if b == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            a / b
        }
        BinaryOp::Power => a.powf(b),
    })
}

fn unary(&UnaryRequest { operation, a }: &UnaryRequest) -> Result<f64> {
    Ok(match operation {
        UnaryOp::Sqrt => {
            if a < 0.0 {
                return Err(CalcError::NegativeSquareRoot);
            }
            a.sqrt()
        }
        UnaryOp::Sin => a.to_radians().sin(),
        UnaryOp::Cos => a.to_radians().cos(),
        UnaryOp::Tan => a.to_radians().tan(),
        UnaryOp::Log => {
            if a <= 0.0 {
                return Err(CalcError::NonPositiveLogarithm);
            }
            a.ln()
        }
    })
}

// f64 arithmetic never traps, so overflow and domain failures surface here
fn ensure_finite(operation: Operation, value: f64) -> Result<f64> {
    if value.is_finite() {
        return Ok(value);
    }
    let message = if value.is_nan() {
        "Result is not a real number"
    } else {
        "Numerical result out of range"
    };
    Err(CalcError::CalculationFailed {
        operation: operation.to_string(),
        message: message.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TOLERANCE: f64 = 1e-9;

    fn calc(operation: &str, a: f64, b: Option<f64>) -> Result<f64> {
        Calculator::new().calculate(operation, a, b)
    }

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(calc("add", 10.0, Some(5.0)).unwrap(), 15.0);
        assert_eq!(calc("subtract", 10.0, Some(5.0)).unwrap(), 5.0);
        assert_eq!(calc("multiply", 6.0, Some(7.0)).unwrap(), 42.0);
        assert_eq!(calc("divide", 10.0, Some(4.0)).unwrap(), 2.5);
    }

    #[test]
    fn test_power() {
        assert_eq!(calc("power", 2.0, Some(10.0)).unwrap(), 1024.0);
        assert_eq!(calc("power", 0.0, Some(0.0)).unwrap(), 1.0);
        assert_eq!(calc("power", 4.0, Some(0.5)).unwrap(), 2.0);
    }

    #[test]
    fn test_trig_uses_degrees() {
        assert!((calc("sin", 90.0, None).unwrap() - 1.0).abs() < TOLERANCE);
        assert!((calc("sin", 30.0, None).unwrap() - 0.5).abs() < TOLERANCE);
        assert!((calc("cos", 0.0, None).unwrap() - 1.0).abs() < TOLERANCE);
        assert!((calc("cos", 60.0, None).unwrap() - 0.5).abs() < TOLERANCE);
        assert!((calc("tan", 45.0, None).unwrap() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_sqrt_and_log() {
        assert_eq!(calc("sqrt", 81.0, None).unwrap(), 9.0);
        assert_eq!(calc("sqrt", 0.0, None).unwrap(), 0.0);
        assert_eq!(calc("log", 1.0, None).unwrap(), 0.0);
        assert!((calc("log", std::f64::consts::E, None).unwrap() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_division_by_zero() {
        let err = calc("divide", 10.0, Some(0.0)).unwrap_err();
        assert_eq!(err, CalcError::DivisionByZero);
        assert_eq!(
            err.to_string(),
            "Calculation error in 'divide': Division by zero"
        );
        assert_eq!(
            calc("divide", 1.0, Some(-0.0)).unwrap_err(),
            CalcError::DivisionByZero
        );
    }

    #[test]
    fn test_domain_errors() {
        assert_eq!(
            calc("sqrt", -4.0, None).unwrap_err(),
            CalcError::NegativeSquareRoot
        );
        assert_eq!(
            calc("log", 0.0, None).unwrap_err(),
            CalcError::NonPositiveLogarithm
        );
        assert_eq!(
            calc("log", -1.0, None).unwrap_err(),
            CalcError::NonPositiveLogarithm
        );
    }

    #[test]
    fn test_unsupported_operation_names_it() {
        let err = calc("invent", 1.0, Some(1.0)).unwrap_err();
        match &err {
            CalcError::UnsupportedOperation {
                operation,
                supported,
            } => {
                assert_eq!(operation, "invent");
                assert_eq!(supported.len(), 10);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.to_string().starts_with("Unsupported operation: invent"));
    }

    #[test]
    fn test_binary_without_b() {
        assert_eq!(
            calc("add", 1.0, None).unwrap_err(),
            CalcError::MissingField("b".to_string())
        );
    }

    #[test]
    fn test_overflow_is_wrapped() {
        let err = calc("power", 10.0, Some(400.0)).unwrap_err();
        assert_eq!(
            err,
            CalcError::CalculationFailed {
                operation: "power".to_string(),
                message: "Numerical result out of range".to_string(),
            }
        );
        assert!(matches!(
            calc("multiply", f64::MAX, Some(10.0)),
            Err(CalcError::CalculationFailed { .. })
        ));
    }

    #[test]
    fn test_non_real_power_is_wrapped() {
        let err = calc("power", -8.0, Some(1.0 / 3.0)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Calculation error in 'power': Result is not a real number"
        );
    }

    proptest! {
        #[test]
        fn prop_add_subtract_multiply_are_deterministic(
            a in -1e100f64..1e100,
            b in -1e100f64..1e100,
        ) {
            for op in ["add", "subtract", "multiply"] {
                let first = calc(op, a, Some(b)).unwrap();
                let second = calc(op, a, Some(b)).unwrap();
                prop_assert!(first.is_finite());
                prop_assert_eq!(first.to_bits(), second.to_bits());
            }
        }

        #[test]
        fn prop_divide_by_nonzero_is_finite(
            a in -1e100f64..1e100,
            b in prop_oneof![-1e100f64..-1e-100, 1e-100f64..1e100],
        ) {
            let value = calc("divide", a, Some(b)).unwrap();
            prop_assert!(value.is_finite());
        }

        #[test]
        fn prop_divide_by_zero_always_fails(a in proptest::num::f64::ANY) {
            prop_assert_eq!(calc("divide", a, Some(0.0)), Err(CalcError::DivisionByZero));
        }

        #[test]
        fn prop_sqrt_of_negative_fails(a in -1e300f64..-1e-300) {
            prop_assert_eq!(calc("sqrt", a, None), Err(CalcError::NegativeSquareRoot));
        }

        #[test]
        fn prop_sqrt_of_non_negative(a in 0f64..1e300) {
            prop_assert_eq!(calc("sqrt", a, None).unwrap(), a.sqrt());
        }

        #[test]
        fn prop_log_of_non_positive_fails(a in -1e300f64..=0.0) {
            prop_assert_eq!(calc("log", a, None), Err(CalcError::NonPositiveLogarithm));
        }
    }
}
