//! The Lispy Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::process;

use clap::Parser;
use log::info;

use crate::cli::args::{Command, LispyArgs};
use crate::engine::{ExecutionPipeline, StdoutSink};
use crate::errors::{print_error, LispyError};
use crate::repl::run_repl;
use crate::runtime::EvalOptions;
use crate::testing::run_suite;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = LispyArgs::parse();
    if let Err(e) = dispatch(args) {
        print_error(e);
        process::exit(1);
    }
}

/// Runs the selected subcommand.
pub fn dispatch(args: LispyArgs) -> Result<(), LispyError> {
    let pipeline = ExecutionPipeline::new(EvalOptions {
        max_depth: args.max_depth,
    });
    info!("max depth {}", pipeline.options.max_depth);

    match args.command.unwrap_or(Command::Repl { history: None }) {
        Command::Repl { history } => run_repl(pipeline, history, &mut StdoutSink),
        Command::Run { file } => pipeline.execute_file(&file, &mut StdoutSink).map(|_| ()),
        Command::Eval { expr } => {
            let value = pipeline.eval_line(&expr, "<arg>")?;
            println!("{}", value);
            Ok(())
        }
        Command::Ast { expr, json } => {
            let tree = pipeline.parse_line(&expr, "<arg>")?;
            output::print_ast(&tree, json);
            Ok(())
        }
        Command::Test { path } => {
            let summary = run_suite(&pipeline, &path)?;
            output::print_test_summary(&summary);
            summary.into_result().map(|_| ())
        }
        Command::Builtins => {
            output::print_builtins(&pipeline.registry().list());
            Ok(())
        }
    }
}
