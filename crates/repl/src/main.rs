//! rpnc - Reverse Polish Notation calculator
//!
//! Usage:
//!   rpnc                        # Interactive shell
//!   rpnc eval "5 2 +" "16 sqrt" # Evaluate expressions in isolation
//!   rpnc batch exprs.txt        # One expression per line ('-' for stdin)
//!   rpnc demo                   # Guided walkthrough
//!
//! Shell commands:
//!   clear, show, history, clearhist, debug on|off, help, quit/exit

use clap::{CommandFactory, Parser as ClapParser, Subcommand};
use clap_complete::{Shell, generate};
use rpn_repl::{Command, Reply, SEPARATOR, Session, ShellConfig, read_expressions, run_batch};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process;

#[derive(ClapParser)]
#[command(name = "rpnc")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Reverse Polish Notation calculator", long_about = None)]
struct Cli {
    /// Path to a TOML config file (defaults to $RPNC_CONFIG or ~/.rpnc.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Trace every push and operation
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive shell (default)
    Repl,

    /// Evaluate each expression on its own stack
    Eval {
        /// RPN expressions, e.g. "5 2 + 3 *"
        #[arg(required = true, allow_hyphen_values = true)]
        expressions: Vec<String>,
    },

    /// Evaluate a file of expressions, one per line
    Batch {
        /// Input file, or '-' for stdin
        input: PathBuf,
    },

    /// Run a short demonstration
    Demo,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    let mut config = match ShellConfig::resolve(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    if cli.debug {
        config = config.with_debug(true);
    }

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => run_repl(&config),
        Commands::Eval { expressions } => run_expressions(&config, &expressions),
        Commands::Batch { input } => match load_batch(&input) {
            Ok(expressions) => run_expressions(&config, &expressions),
            Err(e) => {
                eprintln!("Error reading {}: {}", input.display(), e);
                process::exit(1);
            }
        },
        Commands::Demo => run_demo(&config),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "rpnc", &mut io::stdout());
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the default level
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("rpnc=warn,rpn_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_batch(input: &Path) -> io::Result<Vec<String>> {
    if input == Path::new("-") {
        read_expressions(io::stdin().lock())
    } else {
        read_expressions(BufReader::new(File::open(input)?))
    }
}

/// Run a batch and exit non-zero if any expression failed
fn run_expressions(config: &ShellConfig, expressions: &[String]) {
    let mut session = Session::new(config);
    let report = run_batch(&mut session, expressions);
    print_lines(report.render());
    if report.has_failures() {
        process::exit(1);
    }
}

fn run_repl(config: &ShellConfig) {
    let mut rl = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("Error initializing readline: {}", e);
            process::exit(1);
        }
    };

    let mut session = Session::new(config);
    tracing::info!(debug = config.debug, "starting shell");

    println!("RPN calculator. Type 'help' for commands, 'quit' to exit.");
    println!("Example: 5 2 + 3 *");
    println!("{}", SEPARATOR);

    loop {
        match rl.readline(&config.prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                match session.execute(Command::parse(&line)) {
                    Reply::Output(lines) => print_lines(lines),
                    Reply::Quit => break,
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
            }
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {:?}", err);
                break;
            }
        }
    }

    println!("Goodbye!");
}

fn run_demo(config: &ShellConfig) {
    let mut session = Session::new(config);

    println!("=== RPN calculator demo ===");

    let steps = [
        ("1. Basic arithmetic", "5 2 + 3 *"),
        ("2. Square root", "16 sqrt"),
        ("3. Fibonacci", "10 fib"),
    ];
    for (title, expression) in steps {
        println!("\n{}:", title);
        let evaluation = session.evaluate_isolated(expression);
        print_lines(evaluation.trace_lines());
        match evaluation.result {
            Ok(value) => println!("{} = {}", expression, value),
            Err(e) => println!("{} -> error: {}", expression, e),
        }
    }

    println!("\n4. Batch evaluation:");
    let report = run_batch(
        &mut session,
        ["3 4 + 5 *", "20 5 / 3 +", "9 sqrt 2 *", "5 fib 2 +"],
    );
    print_lines(report.render());
}

fn print_lines(lines: impl IntoIterator<Item = String>) {
    for line in lines {
        println!("{}", line);
    }
}
