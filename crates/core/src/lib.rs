//! RPN Core: evaluator engine for Reverse Polish Notation expressions
//!
//! An expression is a line of whitespace-separated tokens. Numbers are pushed
//! onto an operand stack; operators pop their operands and push one result.
//! A successful evaluation leaves exactly one value on the stack.
//!
//! # Modules
//!
//! - `token`: Tokenizer, classifier and the closed operator set
//! - `stack`: Operand stack with snapshot/restore
//! - `sequence`: Fibonacci and binomial row-sum recurrences
//! - `evaluator`: Operator dispatch and stack discipline
//! - `error`: Evaluation error taxonomy
//! - `trace`: Debug-mode trace events and sinks
//!
//! # Example
//!
//! ```
//! use rpn_core::Evaluator;
//!
//! let mut evaluator = Evaluator::new();
//! assert_eq!(evaluator.evaluate("5 2 + 3 *"), Ok(21.0));
//! assert_eq!(evaluator.peek_stack(), vec![21.0]);
//! ```

pub mod error;
pub mod evaluator;
pub mod sequence;
pub mod stack;
pub mod token;
pub mod trace;

pub use error::EvalError;
pub use evaluator::Evaluator;
pub use sequence::{fibonacci, pascal_row_sum};
pub use stack::{OperandStack, StackSnapshot};
pub use token::{Operator, TokenKind, classify, tokenize};
pub use trace::{TraceEvent, TraceSink, TracingSink};
