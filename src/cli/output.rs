//! Handles all user-facing output for the CLI.
//!
//! This module is responsible for colorizing output, formatting test reports
//! and generating JSON. By centralizing output logic here, we ensure a
//! consistent user experience across all commands.

use std::io::Write;

use difference::{Changeset, Difference};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::atoms::Atom;
use crate::syntax::SyntaxNode;
use crate::testing::{CaseResult, TestSummary};

/// Color only when stdout is a terminal and `NO_COLOR` is unset.
pub fn color_choice() -> ColorChoice {
    if std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

fn stdout() -> StandardStream {
    StandardStream::stdout(color_choice())
}

fn write_colored(stream: &mut StandardStream, color: Color, bold: bool, text: &str) {
    let _ = stream.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(bold));
    let _ = write!(stream, "{}", text);
    let _ = stream.reset();
}

/// Prints a syntax tree, indented or as JSON.
pub fn print_ast(tree: &SyntaxNode, json: bool) {
    if json {
        match serde_json::to_string_pretty(tree) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("could not serialize syntax tree: {}", e),
        }
    } else {
        print!("{}", tree.pretty());
    }
}

/// Prints the builtin table, one atom per line.
pub fn print_builtins(atoms: &[Atom]) {
    let mut out = stdout();
    let width = atoms.iter().map(|a| a.name.len()).max().unwrap_or(0);
    for atom in atoms {
        write_colored(&mut out, Color::Cyan, true, &format!("{:<width$}", atom.name, width = width));
        let _ = writeln!(out, "  {}", atom.doc);
    }
}

/// Prints every failed case with a diff, then the summary line.
pub fn print_test_summary(summary: &TestSummary) {
    let mut out = stdout();
    for failure in summary.failures() {
        print_failure(&mut out, failure);
    }

    let failed = summary.failed();
    let (color, label) = if failed == 0 {
        (Color::Green, "ok")
    } else {
        (Color::Red, "FAILED")
    };
    let _ = write!(out, "test result: ");
    write_colored(&mut out, color, true, label);
    let _ = writeln!(
        out,
        ". {} passed; {} failed; {} lines run",
        summary.checked() - failed,
        failed,
        summary.results.len()
    );
}

fn print_failure(out: &mut StandardStream, failure: &CaseResult) {
    write_colored(out, Color::Yellow, true, &format!("--- {} ---", failure.case.location()));
    let _ = writeln!(out);
    let _ = writeln!(out, "  {}", failure.case.source);
    let expected = failure.case.expected.as_deref().unwrap_or_default();
    let changeset = Changeset::new(expected, &failure.actual, " ");
    print_diff(out, &changeset.diffs);
}

/// Word-level diff: removed words in red, added words in green.
fn print_diff(out: &mut StandardStream, diffs: &[Difference]) {
    let _ = write!(out, "  ");
    for diff in diffs {
        match diff {
            Difference::Same(text) => {
                let _ = write!(out, "{} ", text);
            }
            Difference::Rem(text) => write_colored(out, Color::Red, false, &format!("-{} ", text)),
            Difference::Add(text) => write_colored(out, Color::Green, false, &format!("+{} ", text)),
        }
    }
    let _ = writeln!(out);
}
