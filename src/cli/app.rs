//! Main CLI application

use crate::error::{Result, UsageError, UsageResult};
use crate::runner::{add, greet, Context};
use std::env;
use std::io::{self, Write};

/// Text printed for help requests and every invalid invocation
pub const USAGE: &str = "\
Simple CLI sample

Usage:
  greet --name <NAME>
  add --a <INT> --b <INT>
";

/// Exit code for a successful command
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for usage and validation failures
pub const EXIT_USAGE: i32 = 1;

/// Commands selected by the first token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Greet,
    Add,
}

impl Command {
    /// Resolve the command from the full argument vector
    pub fn resolve(args: &[String]) -> UsageResult<Self> {
        match args.first().map(String::as_str) {
            None => Err(UsageError::NoCommand),
            Some("greet") => Ok(Command::Greet),
            Some("add") => Ok(Command::Add),
            Some("--help") | Some("-h") => Err(UsageError::HelpRequested),
            Some(other) => Err(UsageError::UnknownCommand(other.to_string())),
        }
    }

    /// Command word as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Command::Greet => "greet",
            Command::Add => "add",
        }
    }

    /// Run the handler over the tokens following the command word
    fn execute(&self, args: &[String]) -> UsageResult<String> {
        match self {
            Command::Greet => greet(args),
            Command::Add => add(args),
        }
    }
}

/// CLI application
pub struct App {
    /// Execution context
    ctx: Context,
}

impl App {
    /// Create a new app configured from the environment
    pub fn new() -> Self {
        App {
            ctx: Context::from_env(),
        }
    }

    /// Create an app with a specific context
    pub fn with_context(ctx: Context) -> Self {
        App { ctx }
    }

    /// Resolve and run a command, returning its output line
    pub fn dispatch(&self, args: &[String]) -> UsageResult<String> {
        let command = Command::resolve(args)?;
        self.ctx.print_command_start(command.name());
        command.execute(&args[1..])
    }

    /// Run against `args`, writing results to `out`, and return the exit code
    pub fn run_with<W: Write>(&self, args: &[String], out: &mut W) -> Result<i32> {
        let code = match self.dispatch(args) {
            Ok(line) => {
                writeln!(out, "{}", line)?;
                EXIT_SUCCESS
            }
            Err(e) => {
                self.ctx.print_usage_fallback(&e.to_string());
                out.write_all(USAGE.as_bytes())?;
                EXIT_USAGE
            }
        };
        out.flush()?;
        Ok(code)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the CLI application with the process arguments
pub fn run() -> i32 {
    let args: Vec<String> = env::args_os()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned())
        .collect();

    let app = App::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match app.run_with(&args, &mut out) {
        Ok(code) => code,
        Err(e) => {
            app.ctx.print_error(&e.to_string());
            EXIT_USAGE
        }
    }
}
