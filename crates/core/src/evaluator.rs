//! RPN evaluator
//!
//! Processes tokens strictly left to right against an operand stack that
//! persists between calls. Each operator checks its arity before touching
//! the stack, then pops its operands and validates their domain. A domain
//! failure therefore consumes the operands:
//!
//! ```text
//! [1]        1 0 /   ->  DivisionByZero, stack is [1]
//! [1]        5 +     ->  ok, stack is [6]
//! []         5 +     ->  InsufficientOperands, stack is [5]
//! ```
//!
//! Nothing is rolled back on failure. Callers that need isolation take a
//! [`StackSnapshot`] first and restore it afterwards.

use crate::error::EvalError;
use crate::sequence::{fibonacci, pascal_row_sum, sequence_index};
use crate::stack::{OperandStack, StackSnapshot};
use crate::token::{Operator, TokenKind, classify, tokenize};
use crate::trace::{TraceEvent, TraceSink, TracingSink};

/// Evaluates RPN expressions against an owned operand stack
///
/// Trace events go to `S` while debug mode is enabled.
#[derive(Debug, Clone)]
pub struct Evaluator<S: TraceSink = TracingSink> {
    stack: OperandStack,
    debug: bool,
    sink: S,
}

impl Evaluator {
    /// Create an evaluator with an empty stack that traces through `tracing`
    pub fn new() -> Self {
        Evaluator::with_sink(TracingSink)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::new()
    }
}

impl<S: TraceSink> Evaluator<S> {
    /// Create an evaluator that reports trace events to `sink`
    pub fn with_sink(sink: S) -> Self {
        Evaluator {
            stack: OperandStack::new(),
            debug: false,
            sink,
        }
    }

    /// Evaluate one expression
    ///
    /// On success the result is returned and remains the only value on the
    /// stack, so a following expression can build on it (`3 +`).
    pub fn evaluate(&mut self, expression: &str) -> Result<f64, EvalError> {
        tracing::trace!(expression, depth = self.stack.len(), "evaluating");

        for token in tokenize(expression) {
            match classify(token) {
                TokenKind::Number(value) => {
                    self.stack.push(value);
                    self.trace(TraceEvent::Push(value));
                }
                TokenKind::Operator(op) => self.apply(op)?,
                TokenKind::Invalid(text) => {
                    return Err(EvalError::UnknownToken {
                        token: text.to_string(),
                    });
                }
            }
        }

        match (self.stack.len(), self.stack.top()) {
            (1, Some(result)) => Ok(result),
            (depth, _) => Err(EvalError::MalformedExpression { depth }),
        }
    }

    /// Current stack contents, top first
    pub fn peek_stack(&self) -> Vec<f64> {
        self.stack.peek()
    }

    pub fn stack_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn clear_stack(&mut self) {
        self.stack.clear();
    }

    pub fn set_debug_mode(&mut self, enabled: bool) {
        self.debug = enabled;
    }

    pub fn debug_mode(&self) -> bool {
        self.debug
    }

    /// Capture the stack so it can be put back with [`Evaluator::restore`]
    pub fn snapshot(&self) -> StackSnapshot {
        self.stack.snapshot()
    }

    pub fn restore(&mut self, snapshot: StackSnapshot) {
        self.stack.restore(snapshot);
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    fn apply(&mut self, op: Operator) -> Result<(), EvalError> {
        match op {
            Operator::Add => self.binary(op, |left, right| Ok(left + right)),
            Operator::Subtract => self.binary(op, |left, right| Ok(left - right)),
            Operator::Multiply => self.binary(op, |left, right| Ok(left * right)),
            Operator::Divide => self.binary(op, |left, right| {
                if right == 0.0 {
                    Err(EvalError::DivisionByZero { dividend: left })
                } else {
                    Ok(left / right)
                }
            }),
            Operator::Power => self.binary(op, |base, exponent| Ok(base.powf(exponent))),
            Operator::Sqrt => self.unary(op, |value| {
                if value < 0.0 {
                    Err(EvalError::NegativeSquareRoot { value })
                } else {
                    Ok(value.sqrt())
                }
            }),
            Operator::Fib => self.unary(op, |value| {
                sequence_index(value)
                    .map(fibonacci)
                    .ok_or(EvalError::InvalidSequenceArgument {
                        operator: op,
                        value,
                    })
            }),
            Operator::Pascal => self.unary(op, |value| {
                sequence_index(value)
                    .map(pascal_row_sum)
                    .ok_or(EvalError::InvalidSequenceArgument {
                        operator: op,
                        value,
                    })
            }),
        }
    }

    /// Pop right then left, push `compute(left, right)`
    fn binary(
        &mut self,
        op: Operator,
        compute: impl FnOnce(f64, f64) -> Result<f64, EvalError>,
    ) -> Result<(), EvalError> {
        let available = self.stack.len();
        let (left, right) = self
            .stack
            .pop_pair()
            .ok_or(EvalError::InsufficientOperands {
                operator: op,
                needed: op.arity(),
                available,
            })?;
        let result = compute(left, right)?;
        self.stack.push(result);
        self.trace(TraceEvent::Binary {
            operator: op,
            left,
            right,
            result,
        });
        Ok(())
    }

    fn unary(
        &mut self,
        op: Operator,
        compute: impl FnOnce(f64) -> Result<f64, EvalError>,
    ) -> Result<(), EvalError> {
        let operand = self
            .stack
            .pop()
            .ok_or(EvalError::EmptyStack { operator: op })?;
        let result = compute(operand)?;
        self.stack.push(result);
        self.trace(TraceEvent::Unary {
            operator: op,
            operand,
            result,
        });
        Ok(())
    }

    fn trace(&mut self, event: TraceEvent) {
        if self.debug {
            self.sink.record(&event);
        }
    }
}
