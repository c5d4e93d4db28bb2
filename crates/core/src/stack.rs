//! Operand stack
//!
//! A plain LIFO of `f64` values. The bottom of the stack is index 0 of the
//! backing vector; `peek` reports values top-first for display.

/// Saved copy of an operand stack, produced by [`OperandStack::snapshot`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StackSnapshot(Vec<f64>);

impl StackSnapshot {
    /// Number of values captured
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OperandStack {
    values: Vec<f64>,
}

impl OperandStack {
    pub fn new() -> Self {
        OperandStack::default()
    }

    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    pub fn pop(&mut self) -> Option<f64> {
        self.values.pop()
    }

    /// Pop two values, returning `(left, right)` in textual order
    ///
    /// The right operand is on top, so it is popped first. Returns `None`
    /// without touching the stack if fewer than two values are present.
    pub fn pop_pair(&mut self) -> Option<(f64, f64)> {
        if self.values.len() < 2 {
            return None;
        }
        let right = self.values.pop()?;
        let left = self.values.pop()?;
        Some((left, right))
    }

    /// The top value, if any
    pub fn top(&self) -> Option<f64> {
        self.values.last().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Copy of the contents, top of stack first
    pub fn peek(&self) -> Vec<f64> {
        self.values.iter().rev().copied().collect()
    }

    pub fn snapshot(&self) -> StackSnapshot {
        StackSnapshot(self.values.clone())
    }

    /// Replace the contents with a previously captured snapshot
    pub fn restore(&mut self, snapshot: StackSnapshot) {
        self.values = snapshot.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_is_lifo() {
        let mut stack = OperandStack::new();
        stack.push(1.0);
        stack.push(2.0);
        assert_eq!(stack.pop(), Some(2.0));
        assert_eq!(stack.pop(), Some(1.0));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_pop_pair_order() {
        let mut stack = OperandStack::new();
        stack.push(5.0);
        stack.push(2.0);
        assert_eq!(stack.pop_pair(), Some((5.0, 2.0)));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_pop_pair_underflow_leaves_stack_alone() {
        let mut stack = OperandStack::new();
        stack.push(7.0);
        assert_eq!(stack.pop_pair(), None);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.top(), Some(7.0));
    }

    #[test]
    fn test_peek_is_top_first() {
        let mut stack = OperandStack::new();
        stack.push(1.0);
        stack.push(2.0);
        stack.push(3.0);
        assert_eq!(stack.peek(), vec![3.0, 2.0, 1.0]);
    }

    #[test]
    fn test_snapshot_restore() {
        let mut stack = OperandStack::new();
        stack.push(1.0);
        stack.push(2.0);
        let saved = stack.snapshot();
        assert_eq!(saved.len(), 2);

        stack.clear();
        stack.push(99.0);
        stack.restore(saved);
        assert_eq!(stack.peek(), vec![2.0, 1.0]);
    }
}
