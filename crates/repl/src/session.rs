//! Shell session: command parsing and execution
//!
//! A [`Session`] owns the evaluator and the result history. Executing a
//! command returns the lines to print instead of printing them, so the
//! readline loop in `main` stays a thin shell.

use crate::config::ShellConfig;
use crate::history::History;
use rpn_core::{EvalError, Evaluator, Operator, TraceEvent};

/// One line of shell input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// Blank line
    Empty,
    Clear,
    Show,
    History,
    ClearHistory,
    /// `debug on` / `debug off`
    SetDebug(bool),
    /// `debug` on its own reports the current mode
    ShowDebug,
    Help,
    Quit,
    Evaluate(&'a str),
}

impl<'a> Command<'a> {
    /// Interpret a line. Anything that is not a shell command is an expression.
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => Command::Empty,
            ["clear"] => Command::Clear,
            ["show"] => Command::Show,
            ["history"] => Command::History,
            ["clearhist"] => Command::ClearHistory,
            ["debug"] => Command::ShowDebug,
            ["debug", "on"] => Command::SetDebug(true),
            ["debug", "off"] => Command::SetDebug(false),
            ["help"] => Command::Help,
            ["quit"] | ["exit"] => Command::Quit,
            _ => Command::Evaluate(line),
        }
    }
}

/// What the shell should do after a command
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Print these lines and read the next command
    Output(Vec<String>),
    Quit,
}

/// Result of evaluating one expression, with any debug trace it produced
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub result: Result<f64, EvalError>,
    pub trace: Vec<TraceEvent>,
}

impl Evaluation {
    /// Trace lines as the shell prints them
    pub fn trace_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.trace.iter().map(|event| format!("  [trace] {}", event))
    }
}

pub struct Session {
    evaluator: Evaluator<Vec<TraceEvent>>,
    history: History,
}

impl Session {
    pub fn new(config: &ShellConfig) -> Self {
        let mut evaluator = Evaluator::with_sink(Vec::<TraceEvent>::new());
        evaluator.set_debug_mode(config.debug);
        let history = match config.history_limit {
            Some(limit) => History::with_limit(limit),
            None => History::new(),
        };
        Session { evaluator, history }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Current stack, top first
    pub fn stack(&self) -> Vec<f64> {
        self.evaluator.peek_stack()
    }

    pub fn debug_mode(&self) -> bool {
        self.evaluator.debug_mode()
    }

    /// Evaluate against the live stack, recording history on success
    pub fn evaluate(&mut self, expression: &str) -> Evaluation {
        let result = self.evaluator.evaluate(expression);
        match &result {
            Ok(value) => self.history.record(expression, *value),
            Err(e) => tracing::debug!(expression, error = %e, "evaluation failed"),
        }
        Evaluation {
            result,
            trace: std::mem::take(self.evaluator.sink_mut()),
        }
    }

    /// Evaluate on an empty stack and put the previous stack back afterwards,
    /// whether or not the expression succeeded
    pub fn evaluate_isolated(&mut self, expression: &str) -> Evaluation {
        let saved = self.evaluator.snapshot();
        if !saved.is_empty() {
            tracing::trace!(saved = saved.len(), "stashing stack for isolated evaluation");
        }
        self.evaluator.clear_stack();
        let evaluation = self.evaluate(expression);
        self.evaluator.restore(saved);
        evaluation
    }

    pub fn execute(&mut self, command: Command<'_>) -> Reply {
        let lines = match command {
            Command::Empty => Vec::new(),
            Command::Quit => return Reply::Quit,
            Command::Clear => {
                self.evaluator.clear_stack();
                vec!["stack cleared".to_string()]
            }
            Command::Show => vec![self.render_stack()],
            Command::History => self.render_history(),
            Command::ClearHistory => {
                self.history.clear();
                vec!["history cleared".to_string()]
            }
            Command::SetDebug(enabled) => {
                self.evaluator.set_debug_mode(enabled);
                vec![debug_status(enabled)]
            }
            Command::ShowDebug => vec![debug_status(self.debug_mode())],
            Command::Help => help_text(),
            Command::Evaluate(expression) => {
                let evaluation = self.evaluate(expression);
                let mut lines: Vec<String> = evaluation.trace_lines().collect();
                lines.push(match evaluation.result {
                    Ok(value) => format!("= {}", value),
                    Err(e) => format!("error: {}", e),
                });
                lines
            }
        };
        Reply::Output(lines)
    }

    fn render_stack(&self) -> String {
        if self.evaluator.stack_depth() == 0 {
            return "stack is empty".to_string();
        }
        let values: Vec<String> = self.stack().iter().map(|v| v.to_string()).collect();
        format!("stack (top to bottom): {}", values.join(" "))
    }

    fn render_history(&self) -> Vec<String> {
        if self.history.is_empty() {
            return vec!["history is empty".to_string()];
        }
        let mut lines = vec!["history:".to_string(), SEPARATOR.to_string()];
        lines.extend(self.history.render());
        lines.push(SEPARATOR.to_string());
        lines
    }
}

pub const SEPARATOR: &str = "----------------------------------------";

fn debug_status(enabled: bool) -> String {
    format!("debug mode {}", if enabled { "on" } else { "off" })
}

fn help_text() -> Vec<String> {
    let operators: Vec<&str> = Operator::ALL.iter().map(|op| op.symbol()).collect();
    vec![
        "Commands:".to_string(),
        "  clear           Empty the stack".to_string(),
        "  show            Show the stack, top first".to_string(),
        "  history         List successful results".to_string(),
        "  clearhist       Forget the history".to_string(),
        "  debug on|off    Trace each push and operation".to_string(),
        "  help            Show this help".to_string(),
        "  quit, exit      Leave the shell".to_string(),
        format!("Operators: {}", operators.join(" ")),
        "Anything else is evaluated as an RPN expression, e.g. '5 2 + 3 *'".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(&ShellConfig::default())
    }

    fn output(reply: Reply) -> Vec<String> {
        match reply {
            Reply::Output(lines) => lines,
            Reply::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("   "), Command::Empty);
        assert_eq!(Command::parse("clear"), Command::Clear);
        assert_eq!(Command::parse(" show "), Command::Show);
        assert_eq!(Command::parse("history"), Command::History);
        assert_eq!(Command::parse("clearhist"), Command::ClearHistory);
        assert_eq!(Command::parse("debug on"), Command::SetDebug(true));
        assert_eq!(Command::parse("debug   off"), Command::SetDebug(false));
        assert_eq!(Command::parse("debug"), Command::ShowDebug);
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("exit"), Command::Quit);
    }

    #[test]
    fn test_parse_expressions() {
        assert_eq!(Command::parse(" 5 2 + "), Command::Evaluate("5 2 +"));
        assert_eq!(Command::parse("debug maybe"), Command::Evaluate("debug maybe"));
        assert_eq!(Command::parse("clear 1"), Command::Evaluate("clear 1"));
    }

    #[test]
    fn test_evaluate_prints_result_and_records_history() {
        let mut session = session();
        assert_eq!(
            output(session.execute(Command::Evaluate("5 2 + 3 *"))),
            vec!["= 21"]
        );
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_error_is_reported_and_not_recorded() {
        let mut session = session();
        assert_eq!(
            output(session.execute(Command::Evaluate("abc"))),
            vec!["error: unknown token 'abc'"]
        );
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_show_and_clear() {
        let mut session = session();
        assert_eq!(output(session.execute(Command::Show)), vec!["stack is empty"]);
        session.execute(Command::Evaluate("1 2"));
        assert_eq!(
            output(session.execute(Command::Show)),
            vec!["stack (top to bottom): 2 1"]
        );
        session.execute(Command::Clear);
        assert!(session.stack().is_empty());
        assert_eq!(output(session.execute(Command::Show)), vec!["stack is empty"]);
    }

    #[test]
    fn test_history_listing() {
        let mut session = session();
        assert_eq!(
            output(session.execute(Command::History)),
            vec!["history is empty"]
        );
        session.execute(Command::Evaluate("5 2 +"));
        let lines = output(session.execute(Command::History));
        assert_eq!(lines[0], "history:");
        assert_eq!(lines[2], "1. 5 2 + = 7.000000");

        session.execute(Command::ClearHistory);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_debug_mode_prints_trace() {
        let mut session = session();
        assert_eq!(
            output(session.execute(Command::SetDebug(true))),
            vec!["debug mode on"]
        );
        assert_eq!(
            output(session.execute(Command::Evaluate("16 sqrt"))),
            vec![
                "  [trace] push 16",
                "  [trace] compute: sqrt(16) = 4",
                "= 4"
            ]
        );
        session.execute(Command::SetDebug(false));
        session.execute(Command::Clear);
        assert_eq!(output(session.execute(Command::Evaluate("1"))), vec!["= 1"]);
    }

    #[test]
    fn test_debug_from_config() {
        let session = Session::new(&ShellConfig::new().with_debug(true));
        assert!(session.debug_mode());
    }

    #[test]
    fn test_quit() {
        assert_eq!(session().execute(Command::Quit), Reply::Quit);
    }

    #[test]
    fn test_evaluate_isolated_restores_stack() {
        let mut session = session();
        session.evaluate("7");
        let ok = session.evaluate_isolated("2 3 +");
        assert_eq!(ok.result, Ok(5.0));
        let failed = session.evaluate_isolated("1 0 /");
        assert!(failed.result.is_err());
        assert_eq!(session.stack(), vec![7.0]);
    }
}
