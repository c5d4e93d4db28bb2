//! Interactive shell and batch driver for the RPN calculator
//!
//! The evaluator itself lives in `rpn-core`. This crate adds what a user
//! interacts with: shell commands, result history, isolated batch runs and
//! the TOML configuration that sets them up.

pub mod batch;
pub mod config;
pub mod history;
pub mod session;

pub use batch::{BatchOutcome, BatchReport, read_expressions, run_batch};
pub use config::{ConfigError, ShellConfig};
pub use history::{History, HistoryEntry};
pub use session::{Command, Evaluation, Reply, SEPARATOR, Session};
