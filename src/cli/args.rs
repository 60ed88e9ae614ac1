//! Defines the command-line arguments and subcommands for the Lispy CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::runtime::DEFAULT_MAX_DEPTH;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "lispy",
    version,
    about = "A small Lisp with S-expressions and Q-expressions."
)]
pub struct LispyArgs {
    /// Maximum nesting depth of S-expression evaluation.
    #[arg(long, global = true, env = "LISPY_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Starts the REPL when omitted.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Interactive read-eval-print loop.
    Repl {
        /// File to load history from and save it to.
        #[arg(long)]
        history: Option<PathBuf>,
    },
    /// Evaluate every line of a script and print each result.
    Run {
        /// The path to the Lispy script file to run.
        #[arg(required = true)]
        file: PathBuf,
    },
    /// Evaluate a single expression and print the result.
    Eval {
        /// The expression, e.g. "(+ 1 2)".
        #[arg(required = true, allow_hyphen_values = true)]
        expr: String,
    },
    /// Show the syntax tree for an expression.
    Ast {
        /// The expression to parse.
        #[arg(required = true, allow_hyphen_values = true)]
        expr: String,
        /// Print the tree as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Discover and run all test scripts in a directory.
    Test {
        /// The path to the directory containing `.lspy` scripts.
        #[arg(default_value = "tests/scripts")]
        path: PathBuf,
    },
    /// List all builtin functions with their descriptions.
    Builtins,
}
