use std::fmt::Display;

use tracing::debug;

use crate::{operation::Error as OperationError, registry::Registry};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("At least one argument is required.")]
    NoArguments,
    #[error("Invalid number '{token}'.")]
    Parse { token: String },
    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// What the user sees after one operation/arguments pair.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Value(f64),
    InvalidOperation,
    Failed(Error),
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(v) => write!(f, "Result: {}", v),
            Self::InvalidOperation => write!(f, "Invalid operation."),
            Self::Failed(e) => write!(f, "Error: {}", e),
        }
    }
}

impl From<Result<f64, Error>> for Outcome {
    fn from(value: Result<f64, Error>) -> Self {
        match value {
            Ok(v) => Self::Value(v),
            Err(e) => Self::Failed(e),
        }
    }
}

fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

/// Splits on runs of spaces and tabs and parses every token as `f64`.
///
/// Stops at the first token that is not a number.
pub fn parse_arguments(text: &str) -> Result<Vec<f64>, Error> {
    let text = strip_line_ending(text);
    if text.trim().is_empty() {
        return Err(Error::NoArguments);
    }
    text.split([' ', '\t'])
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<f64>().map_err(|_| Error::Parse {
                token: token.to_string(),
            })
        })
        .collect()
}

/// Runs one calculator step. Arguments are checked before the operation
/// name is looked up, so a bad argument list wins over an unknown name.
pub fn evaluate(registry: &Registry, operation: &str, arguments: &str) -> Outcome {
    let args = match parse_arguments(arguments) {
        Ok(args) => args,
        Err(e) => {
            debug!(error = %e, "rejected arguments");
            return Outcome::Failed(e);
        }
    };
    let name = strip_line_ending(operation).trim();
    let Some(op) = registry.resolve(name) else {
        debug!(name, "unknown operation");
        return Outcome::InvalidOperation;
    };
    debug!(operation = op.name(), argc = args.len(), "dispatching");
    let res = op.call(&args).map_err(Error::from);
    if let Err(e) = &res {
        debug!(operation = op.name(), error = %e, "operation failed");
    }
    res.into()
}

#[cfg(test)]
mod dispatch_tests {
    use super::*;
    use crate::operation::{Arity, Operation};

    #[test]
    fn test_parse_splits_on_spaces_and_tabs() {
        assert_eq!(parse_arguments("1  2\t\t3 "), Ok(vec![1.0, 2.0, 3.0]));
    }

    #[test]
    fn test_parse_accepts_float_syntax() {
        assert_eq!(
            parse_arguments("-1.5 2e-3 .5 +4\r\n"),
            Ok(vec![-1.5, 2e-3, 0.5, 4.0])
        );
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!(parse_arguments(""), Err(Error::NoArguments));
        assert_eq!(parse_arguments(" \t \n"), Err(Error::NoArguments));
    }

    #[test]
    fn test_parse_reports_bad_token() {
        assert_eq!(
            parse_arguments("1 abc 2"),
            Err(Error::Parse {
                token: "abc".to_string()
            })
        );
    }

    #[test]
    fn test_evaluate_sum() {
        let registry = Registry::default();
        let outcome = evaluate(&registry, "+", "2 3 4");
        assert_eq!(outcome, Outcome::Value(9.0));
        assert_eq!(outcome.to_string(), "Result: 9");
    }

    #[test]
    fn test_evaluate_trims_operation() {
        let registry = Registry::default();
        assert_eq!(evaluate(&registry, "  SIN \n", "0"), Outcome::Value(0.0));
    }

    #[test]
    fn test_evaluate_unknown_operation() {
        let registry = Registry::default();
        let outcome = evaluate(&registry, "foo", "1 2");
        assert_eq!(outcome, Outcome::InvalidOperation);
        assert_eq!(outcome.to_string(), "Invalid operation.");
    }

    #[test]
    fn test_evaluate_unknown_operation_with_bad_arguments() {
        let registry = Registry::default();
        let outcome = evaluate(&registry, "foo", "x");
        assert!(matches!(outcome, Outcome::Failed(Error::Parse { .. })));
    }

    #[test]
    fn test_evaluate_wraps_operation_errors() {
        let registry = Registry::default();
        let outcome = evaluate(&registry, "sin", "1 2");
        assert_eq!(
            outcome,
            Outcome::Failed(Error::Operation(OperationError::InvalidArity {
                operation: Operation::Sin,
                arity: Arity::Exactly(1),
                given: 2,
            }))
        );
        assert_eq!(
            outcome.to_string(),
            "Error: Sin function requires exactly one argument."
        );
    }

    #[test]
    fn test_outcome_formatting() {
        assert_eq!(Outcome::Value(0.25).to_string(), "Result: 0.25");
        assert_eq!(Outcome::Value(-3.0).to_string(), "Result: -3");
        assert_eq!(
            Outcome::Failed(Error::NoArguments).to_string(),
            "Error: At least one argument is required."
        );
    }
}
