//! Tokenizer and classifier for RPN expressions
//!
//! Tokens are runs of non-whitespace characters. There is no quoting or
//! escaping, so a token never contains whitespace.

use std::fmt;

/// The closed set of recognized operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Sqrt,
    Power,
    Fib,
    Pascal,
}

impl Operator {
    /// Every operator, in the order they are listed in help output
    pub const ALL: [Operator; 8] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Sqrt,
        Operator::Power,
        Operator::Fib,
        Operator::Pascal,
    ];

    /// Look up an operator by its exact (case-sensitive) spelling
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            "sqrt" => Some(Operator::Sqrt),
            "^" => Some(Operator::Power),
            "fib" => Some(Operator::Fib),
            "pascal" => Some(Operator::Pascal),
            _ => None,
        }
    }

    /// The spelling used in expressions
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Sqrt => "sqrt",
            Operator::Power => "^",
            Operator::Fib => "fib",
            Operator::Pascal => "pascal",
        }
    }

    /// Number of operands consumed from the stack
    pub fn arity(self) -> usize {
        match self {
            Operator::Sqrt | Operator::Fib | Operator::Pascal => 1,
            Operator::Add
            | Operator::Subtract
            | Operator::Multiply
            | Operator::Divide
            | Operator::Power => 2,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// What a single token means to the evaluator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind<'a> {
    Number(f64),
    Operator(Operator),
    /// Neither a number nor an operator; carries the literal text
    Invalid(&'a str),
}

/// Split an expression into whitespace-separated tokens
pub fn tokenize(expression: &str) -> Vec<&str> {
    expression.split_whitespace().collect()
}

/// Classify a token
///
/// Numeric literals are checked first, so `-5` is a number while a lone `-`
/// is the subtraction operator.
pub fn classify(token: &str) -> TokenKind<'_> {
    if let Some(value) = parse_number(token) {
        TokenKind::Number(value)
    } else if let Some(op) = Operator::from_token(token) {
        TokenKind::Operator(op)
    } else {
        TokenKind::Invalid(token)
    }
}

/// Parse a token as a numeric literal
///
/// The whole token must parse. Spellings like `inf` or `NaN` are accepted by
/// `f64::from_str` but are not literals here: a literal needs at least one digit.
fn parse_number(token: &str) -> Option<f64> {
    if !token.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    // Out-of-range literals such as `1e400` parse to infinity
    token.parse::<f64>().ok().filter(|value| value.is_finite())
}
