//! Evaluation errors
//!
//! Every failure aborts the current expression. None of them are fatal: the
//! evaluator stays usable, though the stack keeps whatever state it was in
//! when the error was raised.

use crate::token::Operator;

#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// A binary operator found fewer than two values; the stack is untouched
    InsufficientOperands {
        operator: Operator,
        needed: usize,
        available: usize,
    },
    /// A unary operator was applied to an empty stack
    EmptyStack { operator: Operator },
    /// `/` with a zero right operand; both operands have been consumed
    DivisionByZero { dividend: f64 },
    /// `sqrt` of a negative value; the operand has been consumed
    NegativeSquareRoot { value: f64 },
    /// `fib`/`pascal` argument is negative, fractional or non-finite
    InvalidSequenceArgument { operator: Operator, value: f64 },
    /// Neither a numeric literal nor a known operator
    UnknownToken { token: String },
    /// After the last token the stack did not hold exactly one value
    MalformedExpression { depth: usize },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::InsufficientOperands {
                operator,
                needed,
                available,
            } => write!(
                f,
                "insufficient operands for '{}': needs {}, stack has {}",
                operator, needed, available
            ),
            EvalError::EmptyStack { operator } => {
                write!(f, "stack empty: '{}' needs an operand", operator)
            }
            EvalError::DivisionByZero { dividend } => {
                write!(f, "division by zero (attempted {} / 0)", dividend)
            }
            EvalError::NegativeSquareRoot { value } => {
                write!(f, "negative square root: sqrt({})", value)
            }
            EvalError::InvalidSequenceArgument { operator, value } => write!(
                f,
                "'{}' argument must be non-negative integer, got {}",
                operator, value
            ),
            EvalError::UnknownToken { token } => write!(f, "unknown token '{}'", token),
            EvalError::MalformedExpression { depth } => write!(
                f,
                "incomplete or excess operands: expected 1 value on the stack, found {}",
                depth
            ),
        }
    }
}

impl std::error::Error for EvalError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_token_message_names_token() {
        let err = EvalError::UnknownToken {
            token: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "unknown token 'abc'");
    }

    #[test]
    fn test_messages_name_the_operator() {
        let err = EvalError::InsufficientOperands {
            operator: Operator::Add,
            needed: 2,
            available: 1,
        };
        assert_eq!(
            err.to_string(),
            "insufficient operands for '+': needs 2, stack has 1"
        );

        let err = EvalError::InvalidSequenceArgument {
            operator: Operator::Fib,
            value: 2.5,
        };
        assert_eq!(
            err.to_string(),
            "'fib' argument must be non-negative integer, got 2.5"
        );
    }

    #[test]
    fn test_malformed_message() {
        let err = EvalError::MalformedExpression { depth: 2 };
        assert!(err.to_string().starts_with("incomplete or excess operands"));
    }
}
