use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use infix::{
    display::{DEFAULT_PRECISION, format_result, user_message},
    error::VarError,
    evaluate,
    history::History,
    interpreter::symbols::{SymbolTable, parse_value},
};
use tracing_subscriber::EnvFilter;

/// infix is a calculator for infix arithmetic with constants and variables.
///
/// Without an expression it starts an interactive session reading one
/// expression per line. Type `:help` there for the session commands.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Defines a variable before evaluating, e.g. `--var rate=0.2`.
    #[arg(short, long = "var", value_name = "NAME=VALUE")]
    vars: Vec<String>,

    /// Number of decimal places to print.
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: usize,

    /// JSON file where successful calculations are recorded.
    #[arg(long, value_name = "PATH")]
    history: Option<PathBuf>,

    /// Expression to evaluate once.
    expression: Option<String>,
}

/// State of one calculator session.
struct Session {
    symbols:      SymbolTable,
    history:      History,
    history_path: Option<PathBuf>,
    precision:    usize,
}

/// A `:`-prefixed session command.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Let { name: &'a str, value: &'a str },
    Unset { name: &'a str },
    Vars,
    History,
    Forget { index: usize },
    Recall { index: usize },
    Quit,
}

impl<'a> Command<'a> {
    /// Splits a command line (without the leading `:`) into words. Returns
    /// `None` for unknown commands, wrong word counts and bad indices.
    fn parse(line: &'a str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let command = match (words.next()?, words.next(), words.next()) {
            ("let", Some(name), Some(value)) => Self::Let { name, value },
            ("unset", Some(name), None) => Self::Unset { name },
            ("vars", None, None) => Self::Vars,
            ("history", None, None) => Self::History,
            ("forget", Some(index), None) => Self::Forget { index: index.parse().ok()? },
            ("recall", Some(index), None) => Self::Recall { index: index.parse().ok()? },
            ("quit" | "q", None, None) => Self::Quit,
            _ => return None,
        };
        words.next().is_none().then_some(command)
    }
}

/// What a session line asked for after it ran.
enum Flow {
    Continue,
    Quit,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::try_from_default_env()
                                                  .unwrap_or_else(|_| EnvFilter::new("warn")))
                             .with_writer(io::stderr)
                             .init();

    let args = Args::parse();

    let mut session = Session { symbols:      SymbolTable::new(),
                                history:      args.history
                                                  .as_deref()
                                                  .map(History::load_or_default)
                                                  .unwrap_or_default(),
                                history_path: args.history,
                                precision:    args.precision, };

    for definition in &args.vars {
        if let Err(e) = session.define_from_flag(definition) {
            eprintln!("--var {definition}: {e}");
            return ExitCode::FAILURE;
        }
    }

    match args.expression {
        Some(expression) => {
            if session.calculate(&expression) {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        },
        None => {
            if let Err(e) = session.run_interactive() {
                eprintln!("Failed to read input: {e}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        },
    }
}

impl Session {
    /// Handles `NAME=VALUE` from the command line.
    fn define_from_flag(&mut self, definition: &str) -> Result<(), VarError> {
        let (name, value) = definition.split_once('=').unwrap_or((definition, ""));
        self.define(name, value)
    }

    fn define(&mut self, name: &str, value: &str) -> Result<(), VarError> {
        if name.trim().is_empty() {
            return Err(VarError::InvalidName { name: String::new() });
        }
        let value = parse_value(value)?;
        self.symbols.define(name, value)
    }

    /// Evaluates one expression, prints the outcome and records successes.
    /// Returns whether evaluation succeeded.
    fn calculate(&mut self, expression: &str) -> bool {
        match evaluate(expression, &self.symbols) {
            Ok(value) => {
                let formatted = format_result(value, self.precision);
                println!("{formatted}");
                self.history.record(expression, &formatted);
                self.persist_history();
                true
            },
            Err(e) => {
                println!("{}", user_message(&e));
                false
            },
        }
    }

    fn persist_history(&self) {
        if let Some(path) = &self.history_path
           && let Err(e) = self.history.save(path)
        {
            eprintln!("{e}");
        }
    }

    fn run_interactive(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        loop {
            write!(stdout, "> ")?;
            stdout.flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                return Ok(());
            }

            let line = line.trim();
            let flow = if let Some(command) = line.strip_prefix(':') {
                self.run_command(command)
            } else {
                self.calculate(line);
                Flow::Continue
            };

            if matches!(flow, Flow::Quit) {
                return Ok(());
            }
        }
    }

    fn run_command(&mut self, command: &str) -> Flow {
        let Some(command) = Command::parse(command) else {
            print_help();
            return Flow::Continue;
        };

        match command {
            Command::Let { name, value } => match self.define(name, value) {
                Ok(()) => self.print_variables(),
                Err(e) => println!("{e}"),
            },
            Command::Unset { name } => {
                if self.symbols.undefine(name).is_none() {
                    println!("No variable named '{name}'.");
                }
            },
            Command::Vars => self.print_variables(),
            Command::History => self.print_history(),
            Command::Forget { index } => match self.history.remove(index) {
                Some(entry) => {
                    println!("Forgot {} = {}", entry.expression, entry.result);
                    self.persist_history();
                },
                None => println!("No history entry {index}."),
            },
            Command::Recall { index } => self.recall(index),
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Shows a past expression with its value under the current variables.
    /// The history itself is left unchanged.
    fn recall(&self, index: usize) {
        let Some(entry) = self.history.get(index) else {
            println!("No history entry {index}.");
            return;
        };
        match evaluate(&entry.expression, &self.symbols) {
            Ok(value) => println!("{} = {}", entry.expression, format_result(value, self.precision)),
            Err(e) => println!("{} : {}", entry.expression, user_message(&e)),
        }
    }

    fn print_variables(&self) {
        for symbol in self.symbols.list() {
            let marker = if symbol.is_constant { " (constant)" } else { "" };
            println!("{} = {}{marker}",
                     symbol.name,
                     format_result(symbol.value, self.precision));
        }
    }

    fn print_history(&self) {
        if self.history.is_empty() {
            println!("History is empty. Solve an expression!");
            return;
        }
        for (index, entry) in self.history.newest_first() {
            println!("[{index}] {} = {}", entry.expression, entry.result);
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  :let NAME VALUE   define a variable");
    println!("  :unset NAME       remove a variable");
    println!("  :vars             list constants and variables");
    println!("  :history          list past calculations, newest first");
    println!("  :forget INDEX     delete a history entry");
    println!("  :recall INDEX     show a history entry with its current value");
    println!("  :quit             leave");
}
