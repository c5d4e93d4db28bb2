//! Debug-mode trace events
//!
//! While debug mode is on, the evaluator reports every push and every
//! operator application to a [`TraceSink`]. The sink decides where the
//! records go; the evaluator itself never writes to the console.

use crate::token::Operator;
use std::fmt;

/// One step of an evaluation
#[derive(Debug, Clone, PartialEq)]
pub enum TraceEvent {
    /// A numeric literal was pushed
    Push(f64),
    /// A binary operator produced `result` from `left` and `right`
    Binary {
        operator: Operator,
        left: f64,
        right: f64,
        result: f64,
    },
    /// A unary operator produced `result` from `operand`
    Unary {
        operator: Operator,
        operand: f64,
        result: f64,
    },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceEvent::Push(value) => write!(f, "push {}", value),
            TraceEvent::Binary {
                operator,
                left,
                right,
                result,
            } => write!(f, "compute: {} {} {} = {}", left, operator, right, result),
            TraceEvent::Unary {
                operator,
                operand,
                result,
            } => write!(f, "compute: {}({}) = {}", operator, operand, result),
        }
    }
}

/// Receiver for trace events
pub trait TraceSink {
    fn record(&mut self, event: &TraceEvent);
}

/// Forwards trace events to `tracing` at debug level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TraceSink for TracingSink {
    fn record(&mut self, event: &TraceEvent) {
        tracing::debug!(target: "rpn_core::trace", "{}", event);
    }
}

/// Collects events in memory
impl TraceSink for Vec<TraceEvent> {
    fn record(&mut self, event: &TraceEvent) {
        self.push(event.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_format() {
        assert_eq!(TraceEvent::Push(5.0).to_string(), "push 5");
        assert_eq!(TraceEvent::Push(-0.5).to_string(), "push -0.5");
    }

    #[test]
    fn test_binary_format() {
        let event = TraceEvent::Binary {
            operator: Operator::Power,
            left: 2.0,
            right: 10.0,
            result: 1024.0,
        };
        assert_eq!(event.to_string(), "compute: 2 ^ 10 = 1024");
    }

    #[test]
    fn test_unary_format() {
        let event = TraceEvent::Unary {
            operator: Operator::Sqrt,
            operand: 16.0,
            result: 4.0,
        };
        assert_eq!(event.to_string(), "compute: sqrt(16) = 4");
    }

    #[test]
    fn test_vec_sink_collects() {
        let mut sink: Vec<TraceEvent> = Vec::new();
        sink.record(&TraceEvent::Push(1.0));
        sink.record(&TraceEvent::Push(2.0));
        assert_eq!(sink, vec![TraceEvent::Push(1.0), TraceEvent::Push(2.0)]);
    }
}
