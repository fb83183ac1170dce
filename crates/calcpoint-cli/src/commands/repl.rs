//! Repl command handler

use crate::error::CliError;
use calcpoint::{Calculator, CalculatorHandler, InferenceHandler};
use rustyline::DefaultEditor;

/// One parsed line of REPL input
#[derive(Debug, Clone, PartialEq)]
pub enum ReplCommand {
    Calculate {
        operation: String,
        a: f64,
        b: Option<f64>,
    },
    Help,
    Exit,
    Empty,
}

/// Parse `<operation> <a> [b]`, `help` or `exit`
pub fn parse_line(line: &str) -> Result<ReplCommand, CliError> {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Ok(ReplCommand::Empty);
    };
    match first {
        "exit" | "quit" => return Ok(ReplCommand::Exit),
        "help" | "?" => return Ok(ReplCommand::Help),
        _ => {}
    }

    let a = words
        .next()
        .ok_or_else(|| CliError::InvalidInput(format!("Usage: {} <a> [b]", first)))
        .and_then(parse_number)?;
    let b = words.next().map(parse_number).transpose()?;
    if words.next().is_some() {
        return Err(CliError::InvalidInput(
            "Too many operands (expected at most two)".to_string(),
        ));
    }

    Ok(ReplCommand::Calculate {
        operation: first.to_string(),
        a,
        b,
    })
}

fn parse_number(word: &str) -> Result<f64, CliError> {
    word.parse()
        .map_err(|_| CliError::InvalidInput(format!("Not a number: {}", word)))
}

fn print_help() {
    println!("Enter a calculation as: <operation> <a> [b]");
    println!("Operations: {}", calcpoint::Operation::names().join(", "));
    println!("Type 'exit' to quit.");
}

pub fn run_repl() -> Result<(), CliError> {
    let calculator: Calculator = CalculatorHandler::new().load(None)?;
    println!("calcpoint REPL. Type 'help' for usage, 'exit' to quit.");

    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline("calc> ");
        match readline {
            Ok(line) => {
                let command = match parse_line(&line) {
                    Ok(command) => command,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };

                match command {
                    ReplCommand::Empty => continue,
                    ReplCommand::Exit => {
                        println!("Goodbye!");
                        break;
                    }
                    ReplCommand::Help => print_help(),
                    ReplCommand::Calculate { operation, a, b } => {
                        match calculator.calculate(&operation, a, b) {
                            Ok(result) => println!("{}", result),
                            Err(e) => println!("Error: {}", e),
                        }
                    }
                }

                rl.add_history_entry(&line).ok();
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("\nCtrl-C received. Use 'exit' to quit.");
                continue;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                return Err(err.into());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_binary() {
        assert_eq!(
            parse_line("add 10 5").unwrap(),
            ReplCommand::Calculate {
                operation: "add".to_string(),
                a: 10.0,
                b: Some(5.0),
            }
        );
    }

    #[test]
    fn test_parse_unary_with_negative() {
        assert_eq!(
            parse_line("  sqrt -4 ").unwrap(),
            ReplCommand::Calculate {
                operation: "sqrt".to_string(),
                a: -4.0,
                b: None,
            }
        );
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_line("").unwrap(), ReplCommand::Empty);
        assert_eq!(parse_line("   ").unwrap(), ReplCommand::Empty);
        assert_eq!(parse_line("exit").unwrap(), ReplCommand::Exit);
        assert_eq!(parse_line("quit").unwrap(), ReplCommand::Exit);
        assert_eq!(parse_line("help").unwrap(), ReplCommand::Help);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_line("add"), Err(CliError::InvalidInput(_))));
        assert!(matches!(parse_line("add x 1"), Err(CliError::InvalidInput(_))));
        assert!(matches!(parse_line("add 1 2 3"), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_unknown_operation_parses() {
        // rejected by the calculator, not the parser
        assert!(matches!(
            parse_line("invent 1 1").unwrap(),
            ReplCommand::Calculate { .. }
        ));
    }
}
