//! Batch evaluation
//!
//! Each expression runs on an empty stack and the session's stack is put
//! back afterwards, so a batch never changes the interactive state and one
//! failing expression cannot affect the next. Successful results still go
//! into history.

use crate::session::{Evaluation, SEPARATOR, Session};
use std::io::{self, BufRead};

#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    /// 1-based position in the batch
    pub index: usize,
    pub expression: String,
    pub evaluation: Evaluation,
}

impl BatchOutcome {
    pub fn is_ok(&self) -> bool {
        self.evaluation.result.is_ok()
    }

    fn render_into(&self, lines: &mut Vec<String>) {
        lines.extend(self.evaluation.trace_lines());
        lines.push(match &self.evaluation.result {
            Ok(value) => format!("Expression {}: {} = {}", self.index, self.expression, value),
            Err(e) => format!(
                "Expression {}: {} -> error: {}",
                self.index, self.expression, e
            ),
        });
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReport {
    pub outcomes: Vec<BatchOutcome>,
}

impl BatchReport {
    /// Outcomes that failed, in batch order
    pub fn failures(&self) -> impl Iterator<Item = &BatchOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.is_ok())
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    pub fn render(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Evaluating {} expressions:", self.outcomes.len()),
            SEPARATOR.to_string(),
        ];
        for outcome in &self.outcomes {
            outcome.render_into(&mut lines);
        }
        lines.push(SEPARATOR.to_string());
        lines
    }
}

/// Evaluate every expression in isolation
pub fn run_batch<I>(session: &mut Session, expressions: I) -> BatchReport
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let outcomes = expressions
        .into_iter()
        .enumerate()
        .map(|(i, expression)| {
            let expression = expression.as_ref();
            BatchOutcome {
                index: i + 1,
                expression: expression.to_string(),
                evaluation: session.evaluate_isolated(expression),
            }
        })
        .collect::<Vec<_>>();

    let report = BatchReport { outcomes };
    tracing::debug!(
        total = report.outcomes.len(),
        failed = report.failures().count(),
        "batch finished"
    );
    report
}

/// Read one expression per line, skipping blank lines and `#` comments
pub fn read_expressions(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut expressions = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        expressions.push(trimmed.to_string());
    }
    Ok(expressions)
}
